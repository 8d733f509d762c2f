//! Calendar-date parsing for `birthday` and `anniversary`.
//!
//! Exporters write dates in whatever locale the account uses, so parsing
//! tries a list of `chrono` format strings and also accepts full RFC 3339
//! timestamps (keeping only the date as written). Anything that fails every
//! format is `None`; callers decide whether that is fatal.

use chrono::{DateTime, NaiveDate};

/// Formats tried, in order, when no explicit list is configured.
pub const DEFAULT_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Format used whenever a date is written out (JSON and CSV export).
pub const OUTPUT_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn default_date_formats() -> Vec<String> {
    DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect()
}

/// Parse `value` as a calendar date, trying RFC 3339 first and then each
/// of `formats`.
pub fn parse_calendar_date<S: AsRef<str>>(value: &str, formats: &[S]) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt.as_ref()).ok())
}

pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format(OUTPUT_DATE_FORMAT).to_string()
}

/// `serde(with = ...)` helpers for `Option<NaiveDate>` attributes.
///
/// Serializes as `YYYY-MM-DD`; deserializes from any format the default
/// list accepts, so JSON written by older exports (full timestamps) loads.
pub mod serde_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::{format_calendar_date, parse_calendar_date, DEFAULT_DATE_FORMATS};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&format_calendar_date(*date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => parse_calendar_date(&s, DEFAULT_DATE_FORMATS)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid calendar date: '{}'", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(
            parse_calendar_date("1990-05-17", DEFAULT_DATE_FORMATS),
            Some(ymd(1990, 5, 17))
        );
    }

    #[test]
    fn test_us_and_european_dates() {
        assert_eq!(
            parse_calendar_date("5/17/1990", DEFAULT_DATE_FORMATS),
            Some(ymd(1990, 5, 17))
        );
        assert_eq!(
            parse_calendar_date("17.05.1990", DEFAULT_DATE_FORMATS),
            Some(ymd(1990, 5, 17))
        );
    }

    #[test]
    fn test_long_form() {
        assert_eq!(
            parse_calendar_date("May 17, 1990", DEFAULT_DATE_FORMATS),
            Some(ymd(1990, 5, 17))
        );
    }

    #[test]
    fn test_timestamp_keeps_written_date() {
        assert_eq!(
            parse_calendar_date("1990-05-17T00:00:00.000Z", DEFAULT_DATE_FORMATS),
            Some(ymd(1990, 5, 17))
        );
        assert_eq!(
            parse_calendar_date("1990-05-17T23:30:00+05:00", DEFAULT_DATE_FORMATS),
            Some(ymd(1990, 5, 17))
        );
    }

    #[test]
    fn test_garbage_is_none() {
        assert_eq!(parse_calendar_date("not a date", DEFAULT_DATE_FORMATS), None);
        assert_eq!(parse_calendar_date("--05-17", DEFAULT_DATE_FORMATS), None);
        assert_eq!(parse_calendar_date("2021-02-30", DEFAULT_DATE_FORMATS), None);
        assert_eq!(parse_calendar_date("", DEFAULT_DATE_FORMATS), None);
    }

    #[test]
    fn test_custom_formats_only() {
        let formats = vec!["%d/%m/%Y".to_string()];
        assert_eq!(parse_calendar_date("17/05/1990", &formats), Some(ymd(1990, 5, 17)));
        assert_eq!(parse_calendar_date("1990-05-17", &formats), None);
    }
}
