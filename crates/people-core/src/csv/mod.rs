//! CSV interchange for Google and Outlook contact exports.
//!
//! Reading goes [`lines`] → [`fields`] → [`headers`] → [`record`], driven
//! by [`reader`]. Writing is in [`writer`].

pub mod fields;
pub mod headers;
pub mod lines;
pub mod reader;
pub mod record;
pub mod writer;

pub use fields::{escape_field, split_fields, unescape_field};
pub use headers::{map_headers, HeaderMap, HEADER_MAPPING};
pub use lines::split_lines;
pub use reader::{parse_contacts, CsvContactReader, CsvParseReport};
pub use record::build_contact;
pub use writer::{write_contacts_csv, CsvTemplate};
