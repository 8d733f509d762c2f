//! Contact retrieval by id.
//!
//! Used by `people get`. Prints either a labelled listing of every set
//! attribute or the stored JSON record.

use anyhow::{bail, Result};

use people_core::date::format_calendar_date;
use people_core::models::{Contact, DateField, TextField};
use people_core::store::ContactStore;

use crate::config::Config;
use crate::sqlite_store::SqliteStore;

/// Core get function returning the stored contact.
pub async fn get_contact(config: &Config, id: i64) -> Result<Contact> {
    let store = SqliteStore::open(config).await?;
    let contact = store.get(id).await;
    store.close().await;

    match contact? {
        Some(c) => Ok(c),
        None => bail!("contact not found: {}", id),
    }
}

/// `(attribute name, display value)` for every set attribute, dates last.
pub fn attribute_lines(contact: &Contact) -> Vec<(&'static str, String)> {
    let mut lines: Vec<(&'static str, String)> = TextField::ALL
        .iter()
        .filter_map(|f| {
            contact
                .text(*f)
                .filter(|v| !v.is_empty())
                .map(|v| (f.name(), v.to_string()))
        })
        .collect();
    lines.extend(
        DateField::ALL
            .iter()
            .filter_map(|f| contact.date(*f).map(|d| (f.name(), format_calendar_date(d)))),
    );
    lines
}

/// CLI entry point: calls get_contact and prints to stdout.
pub async fn run_get(config: &Config, id: i64, json: bool) -> Result<()> {
    let contact = get_contact(config, id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&contact)?);
        return Ok(());
    }

    println!("--- Contact {} ---", id);
    println!("name: {}", contact.display_name());
    println!();
    for (name, value) in attribute_lines(&contact) {
        // Continuation lines of multi-line values line up under the first.
        let value = value.replace('\n', &format!("\n{:width$}", "", width = name.len() + 2));
        println!("{}: {}", name, value);
    }

    Ok(())
}
