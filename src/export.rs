//! `people export`: write every stored contact as CSV or JSON.
//!
//! If `--output` is given the file is written there, otherwise the
//! document goes to stdout for piping.

use anyhow::Result;
use std::path::Path;

use people_core::csv::CsvTemplate;
use people_core::export::export_contacts;
use people_core::import::ContactFormat;
use people_core::store::ContactStore;

use crate::config::Config;
use crate::sqlite_store::SqliteStore;

/// Output format: the explicit flag, then the output file's extension,
/// then JSON.
pub fn resolve_format(output: Option<&Path>, explicit: Option<&str>) -> Result<ContactFormat> {
    if let Some(name) = explicit {
        return name.parse();
    }
    Ok(output
        .and_then(ContactFormat::from_path)
        .unwrap_or(ContactFormat::Json))
}

/// Render every stored contact.
pub async fn export_document(
    config: &Config,
    format: ContactFormat,
    template: CsvTemplate,
) -> Result<(String, usize)> {
    let store = SqliteStore::open(config).await?;
    let contacts = store.read_all().await;
    store.close().await;
    let contacts = contacts?;

    let document = export_contacts(&contacts, format, template)?;
    Ok((document, contacts.len()))
}

pub async fn run_export(
    config: &Config,
    format: Option<&str>,
    template: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let format = resolve_format(output, format)?;
    let template = match template {
        Some(name) => name.parse()?,
        None => config.export.template()?,
    };

    let (document, count) = export_document(config, format, template).await?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &document)?;
            eprintln!(
                "Exported {} contacts ({}) to {}",
                count,
                format,
                path.display()
            );
        }
        None => {
            print!("{}", document);
            if !document.ends_with('\n') {
                println!();
            }
        }
    }

    Ok(())
}
