//! Input-side data models: the active input mode and the contact record.

use serde::{Deserialize, Serialize};

/// Which kind of input currently drives the payload.
///
/// Exactly one mode is active at a time. Switching modes never clears the
/// other modes' field values; each mode's inputs persist independently for
/// the lifetime of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InputMode {
    /// A web address, normalized to carry a scheme.
    #[default]
    Url,
    /// Free text, encoded verbatim.
    Text,
    /// A contact record, serialized as a vCard.
    Contact,
}

/// The six contact fields backing vCard serialization.
///
/// No individual field is required. The record as a whole counts as empty
/// when first name, last name, phone, and email are all blank; organization
/// and website alone never produce a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContactRecord {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Phone number, stored as typed (no normalization)
    pub phone: String,
    /// Email address
    pub email: String,
    /// Organization or company name
    pub organization: String,
    /// Website URL
    pub website: String,
}

impl ContactRecord {
    /// Returns true when the record produces no payload.
    ///
    /// Organization and website do not gate emptiness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_name.is_empty()
            && self.last_name.is_empty()
            && self.phone.is_empty()
            && self.email.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_empty() {
        assert!(ContactRecord::default().is_empty());
    }

    #[test]
    fn test_any_gating_field_fills_record() {
        for field in ["first_name", "last_name", "phone", "email"] {
            let mut record = ContactRecord::default();
            match field {
                "first_name" => record.first_name = "Ada".to_string(),
                "last_name" => record.last_name = "Lovelace".to_string(),
                "phone" => record.phone = "+44123".to_string(),
                _ => record.email = "ada@example.com".to_string(),
            }
            assert!(!record.is_empty(), "{field} should make the record non-empty");
        }
    }

    #[test]
    fn test_org_and_website_do_not_gate_emptiness() {
        let record = ContactRecord {
            organization: "Analytical Engines Ltd".to_string(),
            website: "https://example.com".to_string(),
            ..ContactRecord::default()
        };
        assert!(record.is_empty());
    }

    #[test]
    fn test_contact_record_from_partial_json() {
        let record: ContactRecord =
            serde_json::from_str(r#"{"first_name": "Ada", "email": "ada@example.com"}"#).unwrap();
        assert_eq!(record.first_name, "Ada");
        assert_eq!(record.last_name, "");
        assert!(!record.is_empty());
    }
}
