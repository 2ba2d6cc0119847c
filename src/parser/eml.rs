//! Parser for individual `.eml` files (bare RFC 5322 messages).

use std::path::Path;

use chrono::DateTime;
use mail_parser::MessageParser;

use crate::error::{ConvertError, Result};
use crate::model::address::EmailAddress;
use crate::model::message::ParsedEmail;

/// Parse the raw bytes of one `.eml` file into a [`ParsedEmail`].
///
/// Uses `mail-parser` internally; header decoding (RFC 2047 encoded-words,
/// charsets) happens there. Any field the message lacks comes back as
/// `None`/empty. Malformed content is an error naming the offending file;
/// the conversion is all-or-nothing, so the caller aborts the run.
pub fn parse_eml(raw: &[u8], path: &Path) -> Result<ParsedEmail> {
    // mail-parser accepts almost any byte soup; an empty file is never a
    // valid message, so reject it before it turns into an all-empty row.
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Err(ConvertError::parse(path, "empty message"));
    }

    let message = MessageParser::default()
        .parse(raw)
        .ok_or_else(|| ConvertError::parse(path, "not a valid RFC 5322 message"))?;

    let date = message
        .date()
        .and_then(|d| DateTime::from_timestamp(d.to_timestamp(), 0));

    let subject = message.subject().map(str::to_string);

    let from = message
        .from()
        .and_then(|addr| addr.iter().next())
        .map(to_email_address);

    let to = message.to().map(collect_addresses).unwrap_or_default();
    let cc = message.cc().map(collect_addresses).unwrap_or_default();
    let bcc = message.bcc().map(collect_addresses).unwrap_or_default();

    let text = message.body_text(0).map(|s| s.into_owned());

    Ok(ParsedEmail {
        date,
        subject,
        from,
        to,
        cc,
        bcc,
        text,
    })
}

/// Flatten a parsed address header into a list, descending into groups.
fn collect_addresses(addr: &mail_parser::Address<'_>) -> Vec<EmailAddress> {
    addr.iter().map(to_email_address).collect()
}

fn to_email_address(addr: &mail_parser::Addr<'_>) -> EmailAddress {
    EmailAddress::new(addr.name().unwrap_or(""), addr.address().unwrap_or(""))
}
