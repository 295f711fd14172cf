//! Export filename construction.
//!
//! Filenames are deterministic: a sanitized base name, an optional
//! `-MMDD-HHMM` local-time stamp, and a fixed `.png` extension.

use chrono::{DateTime, Local};

use crate::constants::DEFAULT_EXPORT_BASE_NAME;

/// Builds the export filename from user input, stamped with the current
/// local wall-clock time when `timestamped` is set.
#[must_use]
pub fn build_filename(base_name_input: &str, timestamped: bool) -> String {
    build_filename_at(base_name_input, timestamped, Local::now())
}

/// Clock-injected variant of [`build_filename`].
///
/// Sanitization strips every character that is not a letter, digit,
/// underscore, hyphen, or whitespace, then trims; an empty result falls
/// back to the default base name. The timestamp is `-MMDD-HHMM`,
/// zero-padded, 24-hour clock; no year, no seconds.
#[must_use]
pub fn build_filename_at(base_name_input: &str, timestamped: bool, now: DateTime<Local>) -> String {
    let sanitized: String = base_name_input
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect();
    let trimmed = sanitized.trim();
    let base = if trimmed.is_empty() {
        DEFAULT_EXPORT_BASE_NAME
    } else {
        trimmed
    };

    if timestamped {
        format!("{base}-{}.png", now.format("%m%d-%H%M"))
    } else {
        format!("{base}.png")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn known_instant() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 5, 14, 7, 0).unwrap()
    }

    #[test]
    fn test_special_characters_are_stripped() {
        assert_eq!(build_filename("My@Cool#QR!", false), "MyCoolQR.png");
    }

    #[test]
    fn test_interior_whitespace_and_separators_survive() {
        assert_eq!(build_filename("my cool_qr-code", false), "my cool_qr-code.png");
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(build_filename("  framed  ", false), "framed.png");
    }

    #[test]
    fn test_empty_input_uses_default_base() {
        assert_eq!(build_filename("", false), "qr-code.png");
        assert_eq!(build_filename("@#!", false), "qr-code.png");
    }

    #[test]
    fn test_timestamped_default_base_at_known_instant() {
        assert_eq!(
            build_filename_at("", true, known_instant()),
            "qr-code-0305-1407.png"
        );
    }

    #[test]
    fn test_timestamp_fields_are_zero_padded() {
        let early = Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 0).unwrap();
        assert_eq!(build_filename_at("badge", true, early), "badge-0102-0304.png");
    }
}
