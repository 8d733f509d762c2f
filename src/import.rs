//! `people import`: read a CSV or JSON file and merge it into the store.
//!
//! The plan is printed before anything is written. With `--dry-run` the
//! command stops there; otherwise the plan is committed as one batch.

use anyhow::{bail, Context, Result};
use std::path::Path;

use people_core::import::{commit_import, prepare_import, ContactFormat, ImportPlan};
use people_core::store::CommitReceipt;

use crate::config::Config;
use crate::sqlite_store::SqliteStore;

/// Resolve the input format: explicit flag first, then the file extension.
pub fn resolve_format(path: &Path, explicit: Option<&str>) -> Result<ContactFormat> {
    if let Some(name) = explicit {
        return name.parse();
    }
    match ContactFormat::from_path(path) {
        Some(format) => Ok(format),
        None => bail!(
            "Cannot infer format of {}; pass --format csv or --format json",
            path.display()
        ),
    }
}

/// Outcome of [`import_file`]. `receipt` is `None` on a dry run.
pub struct ImportOutcome {
    pub plan: ImportPlan,
    pub receipt: Option<CommitReceipt>,
}

/// Core import function shared by the CLI and tests.
pub async fn import_file(
    config: &Config,
    path: &Path,
    format: ContactFormat,
    dry_run: bool,
) -> Result<ImportOutcome> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read import file: {}", path.display()))?;

    let store = SqliteStore::open(config).await?;
    let reader = config.import.csv_reader();

    let result = async {
        let plan = prepare_import(&store, &text, format, &reader).await?;
        let receipt = if dry_run || plan.is_empty() {
            None
        } else {
            Some(commit_import(&store, &plan).await?)
        };
        Ok::<_, anyhow::Error>(ImportOutcome { plan, receipt })
    }
    .await;

    store.close().await;
    result
}

pub async fn run_import(
    config: &Config,
    path: &Path,
    format: Option<&str>,
    dry_run: bool,
) -> Result<()> {
    let format = resolve_format(path, format)?;
    let outcome = import_file(config, path, format, dry_run).await?;
    let summary = outcome.plan.summary();

    if dry_run {
        println!("import {} ({}, dry-run)", path.display(), format);
    } else {
        println!("import {} ({})", path.display(), format);
    }
    println!("  parsed: {}", summary.parsed);
    if summary.skipped_rows > 0 {
        println!("  skipped rows: {}", summary.skipped_rows);
    }
    println!("  to add: {}", summary.to_add);
    println!("  to update: {}", summary.to_update);
    println!("  unchanged: {}", summary.unchanged);

    if let Some(receipt) = outcome.receipt {
        println!("  added: {}", receipt.added_ids.len());
        println!("  updated: {}", receipt.updated);
    }
    if !dry_run {
        println!("ok");
    }

    Ok(())
}
