//! CSV import driver: raw text → contacts.
//!
//! Runs the whole read path: line splitting, tokenizing, header mapping
//! and record building. Nothing here fails. Rows that cannot be used are
//! counted in the [`CsvParseReport`] and logged at `debug` level.

use tracing::debug;

use super::fields::split_fields;
use super::headers::map_headers;
use super::lines::split_lines;
use super::record::build_contact_with_formats;
use crate::date::default_date_formats;
use crate::models::Contact;

/// Outcome of reading one CSV document.
#[derive(Debug, Clone, Default)]
pub struct CsvParseReport {
    /// Contacts built from well-formed rows, in file order.
    pub contacts: Vec<Contact>,
    /// Logical lines after the header.
    pub data_rows: usize,
    /// Rows whose field count differed from the header's.
    pub ragged_rows: usize,
    /// Whitespace-only lines.
    pub blank_rows: usize,
    /// Well-formed rows that carried no value in any mapped column.
    pub empty_rows: usize,
    /// Header names with no attribute mapping, in column order.
    pub unmapped_headers: Vec<String>,
}

impl CsvParseReport {
    pub fn skipped_rows(&self) -> usize {
        self.ragged_rows + self.blank_rows + self.empty_rows
    }
}

/// Reads Google/Outlook contact CSV exports.
#[derive(Debug, Clone)]
pub struct CsvContactReader {
    date_formats: Vec<String>,
}

impl Default for CsvContactReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvContactReader {
    pub fn new() -> Self {
        Self {
            date_formats: default_date_formats(),
        }
    }

    /// Use `formats` (chrono format strings) for date columns instead of
    /// the built-in list.
    pub fn with_date_formats(formats: Vec<String>) -> Self {
        Self {
            date_formats: formats,
        }
    }

    pub fn date_formats(&self) -> &[String] {
        &self.date_formats
    }

    pub fn read(&self, text: &str) -> CsvParseReport {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let lines = split_lines(text);
        let mut report = CsvParseReport::default();

        let Some((header_line, data_lines)) = lines.split_first() else {
            return report;
        };

        let headers = map_headers(&split_fields(header_line));
        report.unmapped_headers = headers
            .unmapped_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        if !report.unmapped_headers.is_empty() {
            debug!(headers = ?report.unmapped_headers, "ignoring unmapped columns");
        }

        for (i, line) in data_lines.iter().enumerate() {
            report.data_rows += 1;
            let record = i + 2;

            if line.trim().is_empty() {
                report.blank_rows += 1;
                continue;
            }

            let fields = split_fields(line);
            match build_contact_with_formats(&headers, &fields, &self.date_formats) {
                None => {
                    debug!(
                        record,
                        expected = headers.len(),
                        found = fields.len(),
                        "skipping row with mismatched field count"
                    );
                    report.ragged_rows += 1;
                }
                Some(contact) if contact.is_empty() => {
                    debug!(record, "skipping row with no mapped values");
                    report.empty_rows += 1;
                }
                Some(contact) => report.contacts.push(contact),
            }
        }

        report
    }
}

/// Parse CSV text into contacts with the default reader.
pub fn parse_contacts(text: &str) -> Vec<Contact> {
    CsvContactReader::new().read(text).contacts
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOGLE_CSV: &str = "First Name,Middle Name,Last Name,Title,Suffix,Web Page,Birthday,Anniversary,Notes,E-mail Address,E-mail 2 Address,E-mail 3 Address,Primary Phone,Home Phone,Home Phone 2,Mobile Phone,Pager,Home Fax,Home Address,Home Street,Home Street 2,Home Street 3,Home Address PO Box,Home City,Home State,Home Postal Code,Home Country,Spouse,Children,Manager's Name,Assistant's Name,Referred By,Company Main Phone,Business Phone,Business Phone 2,Business Fax,Assistant's Phone,Company,Job Title,Department,Business Address,Business Street,Business Street 2,Business Street 3,Business Address PO Box,Business City,Business State,Business Postal Code,Business Country,Other Phone,Other Fax,Other Address,Other Street,Other Street 2,Other Street 3,Other Address PO Box,Other City,Other State,Other Postal Code,Other Country,Callback,Car Phone,ISDN,Radio Phone,TTY/TDD Phone,Telex,Categories
John,,Doe,,,,,,,,,,,,,91551000,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,myContacts;starred
Jane,,Doe,,,,,,,,,,,,,+4741644000,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,myContacts;starred
,,,,,,,,,mail@mail.com,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
Norway,,Doe,,,,,,,mail@hotmail.com,,,,,,+47 111111,,,\"Industrigata 50B
Oslo, 0357
Norway\",50B Industrigata,,,,Oslo,,0357,Norway,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,Restored from Samsung - SM-G950F;myContacts
John,,Cruickshank,,,,,,,,,,,,,+474800000,,,\"Vardåslia 10
Kristiansand S 4637
Norway\",10 Vardåslia,,,,Kristiansand S,,4637,Norway,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,myContacts
";

    const OUTLOOK_CSV: &str = "First Name,Middle Name,Last Name,Title,Suffix,Nickname,Given Yomi,Surname Yomi,E-mail Address,E-mail 2 Address,E-mail 3 Address,Home Phone,Home Phone 2,Business Phone,Business Phone 2,Mobile Phone,Car Phone,Other Phone,Primary Phone,Pager,Business Fax,Home Fax,Other Fax,Company Main Phone,Callback,Radio Phone,Telex,TTY/TDD Phone,IMAddress,Job Title,Department,Company,Office Location,Manager's Name,Assistant's Name,Assistant's Phone,Company Yomi,Business Street,Business City,Business State,Business Postal Code,Business Country/Region,Home Street,Home City,Home State,Home Postal Code,Home Country/Region,Other Street,Other City,Other State,Other Postal Code,Other Country/Region,Personal Web Page,Spouse,Schools,Hobby,Location,Web Page,Birthday,Anniversary,Notes
Larsen,,,,,,,,,,,,,,,+47 466 88 000,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
Svein,,Heimdal,,,,,,,,,,,,,901 06 000,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,
";

    const MULTILINE_CSV: &str = "First Name,Last Name,Home Address
John,Doe,\"123 Main St
Apt 4B
New York, NY 10001\"
Jane,Smith,\"456 Oak Road,
Suite 789\"";

    #[test]
    fn test_google_export() {
        let contacts = parse_contacts(GOOGLE_CSV);
        assert_eq!(contacts.len(), 5);

        assert_eq!(contacts[0].first_name.as_deref(), Some("John"));
        assert_eq!(contacts[0].last_name.as_deref(), Some("Doe"));
        assert_eq!(contacts[0].mobile_phone.as_deref(), Some("91551000"));
        assert_eq!(contacts[0].categories.as_deref(), Some("myContacts;starred"));

        assert_eq!(contacts[1].first_name.as_deref(), Some("Jane"));
        assert_eq!(contacts[1].mobile_phone.as_deref(), Some("+4741644000"));

        assert_eq!(contacts[2].email_address.as_deref(), Some("mail@mail.com"));
        assert_eq!(contacts[2].populated_field_count(), 1);

        let norway = &contacts[3];
        assert_eq!(norway.first_name.as_deref(), Some("Norway"));
        assert_eq!(norway.email_address.as_deref(), Some("mail@hotmail.com"));
        assert_eq!(norway.mobile_phone.as_deref(), Some("+47 111111"));
        assert_eq!(
            norway.home_address.as_deref(),
            Some("Industrigata 50B\nOslo, 0357\nNorway")
        );
        assert_eq!(norway.home_street.as_deref(), Some("50B Industrigata"));
        assert_eq!(norway.home_city.as_deref(), Some("Oslo"));
        assert_eq!(norway.home_postal_code.as_deref(), Some("0357"));
        assert_eq!(norway.home_country.as_deref(), Some("Norway"));

        assert_eq!(contacts[4].last_name.as_deref(), Some("Cruickshank"));
        assert_eq!(contacts[4].home_city.as_deref(), Some("Kristiansand S"));
    }

    #[test]
    fn test_outlook_export() {
        let report = CsvContactReader::new().read(OUTLOOK_CSV);
        assert_eq!(report.contacts.len(), 2);
        assert_eq!(report.unmapped_headers, vec!["IMAddress"]);

        assert_eq!(report.contacts[0].first_name.as_deref(), Some("Larsen"));
        assert_eq!(
            report.contacts[0].mobile_phone.as_deref(),
            Some("+47 466 88 000")
        );
        assert_eq!(report.contacts[1].first_name.as_deref(), Some("Svein"));
        assert_eq!(report.contacts[1].last_name.as_deref(), Some("Heimdal"));
        assert_eq!(report.contacts[1].mobile_phone.as_deref(), Some("901 06 000"));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_contacts("").is_empty());
        assert!(parse_contacts("header1,header2\n").is_empty());
    }

    #[test]
    fn test_multiline_values() {
        let contacts = parse_contacts(MULTILINE_CSV);
        assert_eq!(contacts.len(), 2);
        assert_eq!(
            contacts[0].home_address.as_deref(),
            Some("123 Main St\nApt 4B\nNew York, NY 10001")
        );
        assert_eq!(contacts[1].last_name.as_deref(), Some("Smith"));
        assert_eq!(contacts[1].home_address.as_deref(), Some("456 Oak Road,\nSuite 789"));
    }

    #[test]
    fn test_escaped_quotes() {
        let contacts = parse_contacts("First Name,Notes\nJohn,\"Quote \"\"test\"\" here\"");
        assert_eq!(contacts[0].notes.as_deref(), Some("Quote \"test\" here"));
    }

    #[test]
    fn test_ragged_row_skipped_rest_ingested() {
        let text = "First Name,Last Name,Company,Notes,Title\nA,B,C\nAnn,Lee,Acme,hi,Dr\n";
        let report = CsvContactReader::new().read(text);
        assert_eq!(report.contacts.len(), 1);
        assert_eq!(report.ragged_rows, 1);
        assert_eq!(report.contacts[0].first_name.as_deref(), Some("Ann"));
    }

    #[test]
    fn test_blank_and_empty_rows_counted() {
        let text = "First Name,Last Name\n\n,\nAnn,Lee\n";
        let report = CsvContactReader::new().read(text);
        assert_eq!(report.contacts.len(), 1);
        assert_eq!(report.data_rows, 3);
        assert_eq!(report.blank_rows, 1);
        assert_eq!(report.empty_rows, 1);
        assert_eq!(report.skipped_rows(), 2);
    }

    #[test]
    fn test_crlf_and_bom() {
        let text = "\u{feff}First Name,Last Name\r\nAnn,\"Lee\"\r\n";
        let contacts = parse_contacts(text);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].first_name.as_deref(), Some("Ann"));
        assert_eq!(contacts[0].last_name.as_deref(), Some("Lee"));
    }

    #[test]
    fn test_configured_date_formats() {
        let reader = CsvContactReader::with_date_formats(vec!["%d/%m/%Y".to_string()]);
        let report = reader.read("First Name,Birthday\nAnn,17/05/1990\n");
        assert_eq!(
            report.contacts[0].birthday,
            chrono::NaiveDate::from_ymd_opt(1990, 5, 17)
        );
    }
}
