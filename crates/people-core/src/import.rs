//! Import planning and commit.
//!
//! Importing is two explicit steps so a caller can show what will happen
//! before anything is written:
//!
//! 1. [`prepare_import`] reads every stored contact, parses the input and
//!    runs the merge engine, producing an [`ImportPlan`];
//! 2. [`commit_import`] hands the plan's additions and updates to the store
//!    as one atomic batch.
//!
//! A failed commit is not retried. Stored state may have moved on, so the
//! caller prepares again.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::info;

use crate::csv::CsvContactReader;
use crate::merge::{merge_import, MergePlan};
use crate::models::Contact;
use crate::store::{CommitReceipt, ContactStore};

/// Interchange format of an import or export file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactFormat {
    Csv,
    Json,
}

impl ContactFormat {
    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContactFormat::Csv => "csv",
            ContactFormat::Json => "json",
        }
    }
}

impl fmt::Display for ContactFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ContactFormat::Csv),
            "json" => Ok(ContactFormat::Json),
            other => bail!("Unknown format: '{}'. Must be csv or json.", other),
        }
    }
}

/// Parse a JSON contact array.
///
/// Any syntax or shape error fails the whole document. Blank strings are
/// pruned to absent and identifiers are dropped: identity is decided by
/// the merge engine, not by ids from another store.
pub fn parse_json_contacts(text: &str) -> Result<Vec<Contact>> {
    let mut contacts: Vec<Contact> =
        serde_json::from_str(text).context("Failed to parse JSON contact list")?;
    for contact in &mut contacts {
        contact.id = None;
        contact.prune_blank();
    }
    Ok(contacts)
}

/// What an import would do.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportPlan {
    pub format: ContactFormat,
    /// Contacts read from the input.
    pub parsed: usize,
    /// CSV rows dropped before merging (ragged, blank, or without values).
    pub skipped_rows: usize,
    pub merge: MergePlan,
}

/// Counts for display before and after commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub parsed: usize,
    pub skipped_rows: usize,
    pub to_add: usize,
    pub to_update: usize,
    pub unchanged: usize,
}

impl ImportPlan {
    pub fn summary(&self) -> ImportSummary {
        ImportSummary {
            parsed: self.parsed,
            skipped_rows: self.skipped_rows,
            to_add: self.merge.additions.len(),
            to_update: self.merge.updates.len(),
            unchanged: self.merge.unchanged,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.merge.is_empty()
    }
}

/// Build an [`ImportPlan`] from `text` against `existing`, without I/O.
pub fn plan_import(
    existing: &[Contact],
    text: &str,
    format: ContactFormat,
    reader: &CsvContactReader,
) -> Result<ImportPlan> {
    let (incoming, skipped_rows) = match format {
        ContactFormat::Csv => {
            let report = reader.read(text);
            let skipped = report.skipped_rows();
            (report.contacts, skipped)
        }
        ContactFormat::Json => (parse_json_contacts(text)?, 0),
    };
    let parsed = incoming.len();
    let merge = merge_import(existing, incoming);

    Ok(ImportPlan {
        format,
        parsed,
        skipped_rows,
        merge,
    })
}

/// Read the store and plan an import of `text`.
pub async fn prepare_import<S: ContactStore + ?Sized>(
    store: &S,
    text: &str,
    format: ContactFormat,
    reader: &CsvContactReader,
) -> Result<ImportPlan> {
    let existing = store
        .read_all()
        .await
        .context("Failed to read stored contacts")?;
    plan_import(&existing, text, format, reader)
}

/// Write a prepared plan as one batch.
pub async fn commit_import<S: ContactStore + ?Sized>(
    store: &S,
    plan: &ImportPlan,
) -> Result<CommitReceipt> {
    let receipt = store
        .commit(&plan.merge.additions, &plan.merge.updates)
        .await
        .context("Failed to commit import")?;
    info!(
        added = receipt.added_ids.len(),
        updated = receipt.updated,
        format = %plan.format,
        "import committed"
    );
    Ok(receipt)
}
