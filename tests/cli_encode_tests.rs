//! End-to-end tests for `qrstudio encode`.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

use std::process::Command;

mod fixtures;
use fixtures::*;

fn run_encode(args: &[&str]) -> std::process::Output {
    Command::new(qrstudio_bin())
        .arg("encode")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_encode_url_adds_scheme() {
    let output = run_encode(&["--url", "example.com"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim_end(), "https://example.com");
}

#[test]
fn test_encode_url_is_idempotent_on_schemed_input() {
    let output = run_encode(&["--url", "http://example.com"]);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim_end(), "http://example.com");
}

#[test]
fn test_encode_text_is_verbatim() {
    let output = run_encode(&["--text", "plain text, unchanged"]);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        "plain text, unchanged"
    );
}

#[test]
fn test_encode_contact_produces_vcard() {
    let (contact_path, contact_temp) = create_temp_contact_json(PARTIAL_CONTACT_JSON);
    let output = run_encode(&["--contact-json", contact_path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.trim_end().split('\n').collect();
    assert_eq!(lines.first(), Some(&"BEGIN:VCARD"));
    assert_eq!(lines.last(), Some(&"END:VCARD"));
    assert!(lines.contains(&"FN:John Doe"));
    assert!(lines.contains(&"TEL:+1234567890"));
    assert!(lines.contains(&"EMAIL:john@example.com"));
    assert!(lines.contains(&"ORG:"));
    assert!(lines.contains(&"URL:"));
}

#[test]
fn test_encode_org_only_contact_is_blank() {
    let (contact_path, contact_temp) = create_temp_contact_json(ORG_ONLY_CONTACT_JSON);
    let output = run_encode(&["--contact-json", contact_path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_encode_requires_exactly_one_input() {
    let output = run_encode(&[]);
    assert_eq!(output.status.code(), Some(2));
}
