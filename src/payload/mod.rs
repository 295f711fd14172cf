//! Payload encoding: turns mode-scoped form state into the one canonical
//! string a QR code is generated from.
//!
//! These are pure functions; the session calls them on every input change
//! and never stores the payload independently of its inputs.

use std::fmt::Write;

use crate::models::{ContactRecord, InputMode};

/// Encodes the active mode's inputs into the canonical payload string.
///
/// Returns an empty string when the active mode has nothing to encode:
/// a blank URL, blank text, or a contact record whose name, phone, and
/// email fields are all empty.
#[must_use]
pub fn encode(mode: InputMode, url_input: &str, text_input: &str, contact: &ContactRecord) -> String {
    match mode {
        InputMode::Url => encode_url(url_input),
        InputMode::Text => text_input.to_string(),
        InputMode::Contact => encode_contact(contact),
    }
}

/// Normalizes a URL input for encoding.
///
/// Inputs without an `http://` or `https://` scheme get `https://`
/// prefixed; inputs that already carry one pass through unchanged. No
/// other validation happens here; malformed hosts are accepted.
#[must_use]
pub fn encode_url(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{input}")
    }
}

/// Serializes a contact record as a vCard 3.0 string.
///
/// The line structure is fixed: empty fields still emit their line with
/// nothing after the colon, and line breaks are plain `\n` with no
/// trailing newline after `END:VCARD`. Reserved vCard characters (`;`,
/// `,`, `\`) are not escaped; consumers that require RFC 6350 escaping
/// must escape field values before building the record.
#[must_use]
pub fn encode_contact(contact: &ContactRecord) -> String {
    if contact.is_empty() {
        return String::new();
    }

    let mut card = String::new();
    card.push_str("BEGIN:VCARD\n");
    card.push_str("VERSION:3.0\n");
    let _ = writeln!(card, "FN:{} {}", contact.first_name, contact.last_name);
    let _ = writeln!(card, "N:{};{};;;", contact.last_name, contact.first_name);
    let _ = writeln!(card, "ORG:{}", contact.organization);
    let _ = writeln!(card, "TEL:{}", contact.phone);
    let _ = writeln!(card, "EMAIL:{}", contact.email);
    let _ = writeln!(card, "URL:{}", contact.website);
    card.push_str("END:VCARD");
    card
}
