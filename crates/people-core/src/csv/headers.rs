//! Header vocabulary and header-to-attribute mapping.
//!
//! [`HEADER_MAPPING`] is the union of the column names written by Google
//! Contacts and Outlook exports. Names are matched exactly: case,
//! apostrophes and slashes as the exporters write them. A column whose
//! name is not in the table is carried as unmapped and ignored.

use crate::models::ContactField::{Date, Text};
use crate::models::{ContactField, DateField, TextField};

/// Exact external column name → contact attribute.
pub const HEADER_MAPPING: &[(&str, ContactField)] = &[
    ("First Name", Text(TextField::FirstName)),
    ("Middle Name", Text(TextField::MiddleName)),
    ("Last Name", Text(TextField::LastName)),
    ("Title", Text(TextField::Title)),
    ("Suffix", Text(TextField::Suffix)),
    ("Nickname", Text(TextField::Nickname)),
    ("Given Yomi", Text(TextField::GivenYomi)),
    ("Surname Yomi", Text(TextField::SurnameYomi)),
    ("Birthday", Date(DateField::Birthday)),
    ("Anniversary", Date(DateField::Anniversary)),
    ("E-mail Address", Text(TextField::EmailAddress)),
    ("E-mail 2 Address", Text(TextField::Email2Address)),
    ("E-mail 3 Address", Text(TextField::Email3Address)),
    ("Primary Phone", Text(TextField::PrimaryPhone)),
    ("Mobile Phone", Text(TextField::MobilePhone)),
    ("Home Phone", Text(TextField::HomePhone)),
    ("Home Phone 2", Text(TextField::HomePhone2)),
    ("Business Phone", Text(TextField::BusinessPhone)),
    ("Business Phone 2", Text(TextField::BusinessPhone2)),
    ("Company Main Phone", Text(TextField::CompanyMainPhone)),
    ("Assistant's Phone", Text(TextField::AssistantPhone)),
    ("Other Phone", Text(TextField::OtherPhone)),
    ("Car Phone", Text(TextField::CarPhone)),
    ("Radio Phone", Text(TextField::RadioPhone)),
    ("Pager", Text(TextField::Pager)),
    ("Callback", Text(TextField::Callback)),
    ("ISDN", Text(TextField::Isdn)),
    ("TTY/TDD Phone", Text(TextField::TtyTddPhone)),
    ("Telex", Text(TextField::Telex)),
    ("Home Fax", Text(TextField::HomeFax)),
    ("Business Fax", Text(TextField::BusinessFax)),
    ("Other Fax", Text(TextField::OtherFax)),
    ("Company", Text(TextField::Company)),
    ("Company Yomi", Text(TextField::CompanyYomi)),
    ("Job Title", Text(TextField::JobTitle)),
    ("Department", Text(TextField::Department)),
    ("Office Location", Text(TextField::OfficeLocation)),
    ("Manager's Name", Text(TextField::ManagerName)),
    ("Assistant's Name", Text(TextField::AssistantName)),
    ("Home Address", Text(TextField::HomeAddress)),
    ("Home Street", Text(TextField::HomeStreet)),
    ("Home Street 2", Text(TextField::HomeStreet2)),
    ("Home Street 3", Text(TextField::HomeStreet3)),
    ("Home Address PO Box", Text(TextField::HomeAddressPoBox)),
    ("Home City", Text(TextField::HomeCity)),
    ("Home State", Text(TextField::HomeState)),
    ("Home Postal Code", Text(TextField::HomePostalCode)),
    ("Home Country", Text(TextField::HomeCountry)),
    ("Home Country/Region", Text(TextField::HomeCountryRegion)),
    ("Business Address", Text(TextField::BusinessAddress)),
    ("Business Street", Text(TextField::BusinessStreet)),
    ("Business Street 2", Text(TextField::BusinessStreet2)),
    ("Business Street 3", Text(TextField::BusinessStreet3)),
    ("Business Address PO Box", Text(TextField::BusinessAddressPoBox)),
    ("Business City", Text(TextField::BusinessCity)),
    ("Business State", Text(TextField::BusinessState)),
    ("Business Postal Code", Text(TextField::BusinessPostalCode)),
    ("Business Country", Text(TextField::BusinessCountry)),
    ("Business Country/Region", Text(TextField::BusinessCountryRegion)),
    ("Other Address", Text(TextField::OtherAddress)),
    ("Other Street", Text(TextField::OtherStreet)),
    ("Other Street 2", Text(TextField::OtherStreet2)),
    ("Other Street 3", Text(TextField::OtherStreet3)),
    ("Other Address PO Box", Text(TextField::OtherAddressPoBox)),
    ("Other City", Text(TextField::OtherCity)),
    ("Other State", Text(TextField::OtherState)),
    ("Other Postal Code", Text(TextField::OtherPostalCode)),
    ("Other Country", Text(TextField::OtherCountry)),
    ("Other Country/Region", Text(TextField::OtherCountryRegion)),
    ("Notes", Text(TextField::Notes)),
    ("Categories", Text(TextField::Categories)),
    ("Hobby", Text(TextField::Hobby)),
    ("Spouse", Text(TextField::Spouse)),
    ("Children", Text(TextField::Children)),
    ("Schools", Text(TextField::Schools)),
    ("Referred By", Text(TextField::ReferredBy)),
    ("Location", Text(TextField::Location)),
    ("Web Page", Text(TextField::WebPage)),
    ("Personal Web Page", Text(TextField::PersonalWebPage)),
    ("IM Address", Text(TextField::ImAddress)),
];

/// Column order of a Google Contacts "Outlook CSV" export.
pub const GOOGLE_COLUMNS: &[&str] = &[
    "First Name",
    "Middle Name",
    "Last Name",
    "Title",
    "Suffix",
    "Web Page",
    "Birthday",
    "Anniversary",
    "Notes",
    "E-mail Address",
    "E-mail 2 Address",
    "E-mail 3 Address",
    "Primary Phone",
    "Home Phone",
    "Home Phone 2",
    "Mobile Phone",
    "Pager",
    "Home Fax",
    "Home Address",
    "Home Street",
    "Home Street 2",
    "Home Street 3",
    "Home Address PO Box",
    "Home City",
    "Home State",
    "Home Postal Code",
    "Home Country",
    "Spouse",
    "Children",
    "Manager's Name",
    "Assistant's Name",
    "Referred By",
    "Company Main Phone",
    "Business Phone",
    "Business Phone 2",
    "Business Fax",
    "Assistant's Phone",
    "Company",
    "Job Title",
    "Department",
    "Business Address",
    "Business Street",
    "Business Street 2",
    "Business Street 3",
    "Business Address PO Box",
    "Business City",
    "Business State",
    "Business Postal Code",
    "Business Country",
    "Other Phone",
    "Other Fax",
    "Other Address",
    "Other Street",
    "Other Street 2",
    "Other Street 3",
    "Other Address PO Box",
    "Other City",
    "Other State",
    "Other Postal Code",
    "Other Country",
    "Callback",
    "Car Phone",
    "ISDN",
    "Radio Phone",
    "TTY/TDD Phone",
    "Telex",
    "Categories",
];

/// Look up the attribute for an external column name.
pub fn field_for_header(header: &str) -> Option<ContactField> {
    HEADER_MAPPING
        .iter()
        .find(|(name, _)| *name == header)
        .map(|(_, field)| *field)
}

/// The canonical column name for an attribute, if it has one.
pub fn header_for_field(field: ContactField) -> Option<&'static str> {
    HEADER_MAPPING
        .iter()
        .find(|(_, f)| *f == field)
        .map(|(name, _)| *name)
}

/// One header column: its position and the attribute it feeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedColumn {
    pub index: usize,
    pub name: String,
    pub field: Option<ContactField>,
}

/// A tokenized header row resolved against [`HEADER_MAPPING`].
#[derive(Debug, Clone, Default)]
pub struct HeaderMap {
    columns: Vec<MappedColumn>,
}

impl HeaderMap {
    /// Number of columns in the header row, mapped or not. Data rows must
    /// have exactly this many fields.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[MappedColumn] {
        &self.columns
    }

    /// `(index, field)` for every column that feeds an attribute.
    pub fn mapped(&self) -> impl Iterator<Item = (usize, ContactField)> + '_ {
        self.columns
            .iter()
            .filter_map(|c| c.field.map(|field| (c.index, field)))
    }

    pub fn unmapped_names(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.field.is_none())
            .map(|c| c.name.as_str())
            .collect()
    }
}

/// Resolve each header field to an attribute (or unmapped).
pub fn map_headers<S: AsRef<str>>(header_fields: &[S]) -> HeaderMap {
    let columns = header_fields
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let name = name.as_ref();
            MappedColumn {
                index,
                name: name.to_string(),
                field: field_for_header(name),
            }
        })
        .collect();
    HeaderMap { columns }
}
