//! CSV export against the header vocabulary.

use std::fmt;
use std::str::FromStr;

use ::csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use anyhow::{anyhow, bail, Context, Result};

use super::headers::{field_for_header, GOOGLE_COLUMNS, HEADER_MAPPING};
use crate::date::format_calendar_date;
use crate::models::{Contact, ContactField};

/// Which columns, in which order, an exported CSV carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CsvTemplate {
    /// Every header in the vocabulary.
    #[default]
    Full,
    /// The columns of a Google Contacts export, in Google's order.
    Google,
}

impl CsvTemplate {
    pub fn columns(self) -> Vec<&'static str> {
        match self {
            CsvTemplate::Full => HEADER_MAPPING.iter().map(|(name, _)| *name).collect(),
            CsvTemplate::Google => GOOGLE_COLUMNS.to_vec(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CsvTemplate::Full => "full",
            CsvTemplate::Google => "google",
        }
    }
}

impl fmt::Display for CsvTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CsvTemplate {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(CsvTemplate::Full),
            "google" => Ok(CsvTemplate::Google),
            other => bail!("Unknown CSV template: '{}'. Must be full or google.", other),
        }
    }
}

fn cell(contact: &Contact, field: Option<ContactField>) -> String {
    match field {
        Some(ContactField::Text(f)) => contact.text(f).unwrap_or_default().to_string(),
        Some(ContactField::Date(f)) => contact.date(f).map(format_calendar_date).unwrap_or_default(),
        None => String::new(),
    }
}

fn csv_writer() -> Writer<Vec<u8>> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

fn finish(writer: Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow!("Failed to flush CSV output: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

/// Render `contacts` as a CSV document: header row, then one line per
/// contact, each terminated by `\n`. A field is quoted only when it holds
/// a comma, quote or line break.
pub fn write_contacts_csv(contacts: &[Contact], template: CsvTemplate) -> Result<String> {
    let columns = template.columns();
    let fields: Vec<Option<ContactField>> = columns.iter().map(|c| field_for_header(c)).collect();

    let mut writer = csv_writer();
    writer
        .write_record(&columns)
        .context("Failed to write CSV header")?;
    for contact in contacts {
        writer
            .write_record(fields.iter().map(|f| cell(contact, *f)))
            .context("Failed to write CSV record")?;
    }
    finish(writer)
}
