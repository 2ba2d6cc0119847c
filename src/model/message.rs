//! Parsed message and exported record types.

use std::path::Path;

use chrono::{DateTime, Utc};

use super::address::{format_address_list, EmailAddress};
use super::date::format_date;

/// The fields extracted from one `.eml` file.
///
/// Created by the parser, consumed immediately by
/// [`CsvRecord::from_parsed`], then discarded. Recipient headers are
/// normalized to always-a-list; the sender keeps only the first address.
#[derive(Debug, Clone, Default)]
pub struct ParsedEmail {
    /// Parsed `Date:` header, if present and representable.
    pub date: Option<DateTime<Utc>>,

    /// Decoded subject line (RFC 2047 encoded-words resolved).
    pub subject: Option<String>,

    /// Sender (first `From:` address).
    pub from: Option<EmailAddress>,

    /// Primary recipients (`To:`).
    pub to: Vec<EmailAddress>,

    /// Carbon-copy recipients (`CC:`).
    pub cc: Vec<EmailAddress>,

    /// Blind-carbon-copy recipients (`BCC:`).
    pub bcc: Vec<EmailAddress>,

    /// Plain-text body, verbatim.
    pub text: Option<String>,
}

/// One exported CSV row. All fields are strings; missing values are empty.
///
/// Field order here is the CSV column order; the `csv` serializer derives
/// the header row from it.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CsvRecord {
    pub subject: String,
    pub date: String,
    pub from: String,
    pub to: String,
    pub cc: String,
    pub bcc: String,
    pub text: String,
    pub path: String,
}

impl CsvRecord {
    /// Flatten a parsed message into its export row.
    ///
    /// The body may contain newlines, commas, and quotes; escaping them is
    /// the CSV serializer's responsibility, not ours.
    pub fn from_parsed(parsed: ParsedEmail, path: &Path) -> Self {
        Self {
            subject: parsed.subject.unwrap_or_default(),
            date: parsed.date.map(|d| format_date(&d)).unwrap_or_default(),
            from: parsed.from.map(|a| a.display()).unwrap_or_default(),
            to: format_address_list(&parsed.to),
            cc: format_address_list(&parsed.cc),
            bcc: format_address_list(&parsed.bcc),
            text: parsed.text.unwrap_or_default(),
            path: path.display().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_parsed_full() {
        let parsed = ParsedEmail {
            date: Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()),
            subject: Some("Hello".into()),
            from: Some(EmailAddress::new("Alice", "alice@x.com")),
            to: vec![
                EmailAddress::new("Bob", "bob@x.com"),
                EmailAddress::new("Carol", "carol@x.com"),
            ],
            cc: Vec::new(),
            bcc: Vec::new(),
            text: Some("Hi there".into()),
        };

        let record = CsvRecord::from_parsed(parsed, Path::new("/mail/msg1.eml"));
        assert_eq!(record.subject, "Hello");
        assert_eq!(record.from, "Alice <alice@x.com>");
        assert_eq!(record.to, "Bob <bob@x.com>;Carol <carol@x.com>");
        assert_eq!(record.cc, "");
        assert_eq!(record.bcc, "");
        assert_eq!(record.text, "Hi there");
        assert_eq!(record.path, "/mail/msg1.eml");
        assert!(!record.date.is_empty());
    }

    #[test]
    fn test_from_parsed_missing_optionals_are_empty() {
        let record = CsvRecord::from_parsed(ParsedEmail::default(), Path::new("x.eml"));
        assert_eq!(record.subject, "");
        assert_eq!(record.date, "");
        assert_eq!(record.from, "");
        assert_eq!(record.to, "");
        assert_eq!(record.cc, "");
        assert_eq!(record.bcc, "");
        assert_eq!(record.text, "");
        assert_eq!(record.path, "x.eml");
    }
}
