//! Record building: one tokenized data row → one [`Contact`].

use tracing::trace;

use super::headers::HeaderMap;
use crate::date::{parse_calendar_date, DEFAULT_DATE_FORMATS};
use crate::models::{Contact, ContactField};

/// Build a contact from `row` using the default date formats.
///
/// See [`build_contact_with_formats`].
pub fn build_contact<S: AsRef<str>>(headers: &HeaderMap, row: &[S]) -> Option<Contact> {
    build_contact_with_formats(headers, row, DEFAULT_DATE_FORMATS)
}

/// Build a contact from `row`, zipping it against `headers`.
///
/// Returns `None` when the row's field count differs from the header
/// count; such rows are dropped whole. Empty values leave the attribute
/// unset. A date column whose value parses under none of `formats` is left
/// unset as well, and the rest of the row is kept.
pub fn build_contact_with_formats<S, F>(
    headers: &HeaderMap,
    row: &[S],
    formats: &[F],
) -> Option<Contact>
where
    S: AsRef<str>,
    F: AsRef<str>,
{
    if row.len() != headers.len() {
        return None;
    }

    let mut contact = Contact::default();
    for (index, field) in headers.mapped() {
        let value = row[index].as_ref();
        if value.is_empty() {
            continue;
        }
        match field {
            ContactField::Text(f) => *contact.text_mut(f) = Some(value.to_string()),
            ContactField::Date(f) => match parse_calendar_date(value, formats) {
                Some(date) => *contact.date_mut(f) = Some(date),
                None => trace!(field = f.name(), value, "unparseable date left unset"),
            },
        }
    }

    Some(contact)
}
