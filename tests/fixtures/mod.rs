//! Shared test fixtures for E2E and pipeline tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use image::{Rgba, RgbaImage};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Path to the qrstudio binary
pub fn qrstudio_bin() -> &'static str {
    env!("CARGO_BIN_EXE_qrstudio")
}

/// Writes a small solid-color logo PNG into a fresh temp dir.
///
/// The temp dir must be kept alive for the duration of the test.
pub fn create_temp_logo(color: [u8; 4]) -> (PathBuf, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("logo.png");
    RgbaImage::from_pixel(64, 64, Rgba(color))
        .save(&path)
        .expect("Failed to write logo fixture");
    (path, dir)
}

/// Writes a contact JSON file into a fresh temp dir.
pub fn create_temp_contact_json(json: &str) -> (PathBuf, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("contact.json");
    fs::write(&path, json).expect("Failed to write contact fixture");
    (path, dir)
}

/// A fully-populated contact record.
pub const FULL_CONTACT_JSON: &str = r#"{
    "first_name": "John",
    "last_name": "Doe",
    "phone": "+1234567890",
    "email": "john@example.com",
    "organization": "ACME",
    "website": "https://example.com"
}"#;

/// A record that is "empty" for payload purposes: organization and
/// website never gate emptiness.
pub const ORG_ONLY_CONTACT_JSON: &str = r#"{
    "organization": "ACME",
    "website": "https://example.com"
}"#;

/// Name, phone, and email only; organization and website left blank.
pub const PARTIAL_CONTACT_JSON: &str = r#"{
    "first_name": "John",
    "last_name": "Doe",
    "phone": "+1234567890",
    "email": "john@example.com"
}"#;
