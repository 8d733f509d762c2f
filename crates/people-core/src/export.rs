//! Export rendering: JSON (lossless) and CSV (header vocabulary only).

use anyhow::{Context, Result};

use crate::csv::{write_contacts_csv, CsvTemplate};
use crate::import::ContactFormat;
use crate::models::Contact;

/// Render `contacts` as a pretty-printed JSON array, ids included.
pub fn contacts_to_json(contacts: &[Contact]) -> Result<String> {
    serde_json::to_string_pretty(contacts).context("Failed to serialize contacts")
}

/// Render `contacts` in `format`. `template` only applies to CSV.
pub fn export_contacts(
    contacts: &[Contact],
    format: ContactFormat,
    template: CsvTemplate,
) -> Result<String> {
    match format {
        ContactFormat::Json => contacts_to_json(contacts),
        ContactFormat::Csv => write_contacts_csv(contacts, template),
    }
}
