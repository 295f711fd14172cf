//! Encode command: print the canonical payload without rendering.

use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::cli::common::{CliError, CliResult};
use crate::models::ContactRecord;
use crate::payload;

/// Print the canonical payload string for the given input
#[derive(Debug, Clone, Args)]
pub struct EncodeArgs {
    /// Web address to encode (https:// is added when no scheme is given)
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Free text to encode verbatim
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Contact record to encode as a vCard, read from a JSON file
    #[arg(long, value_name = "FILE")]
    pub contact_json: Option<PathBuf>,
}

impl EncodeArgs {
    /// Execute the encode command.
    pub fn execute(&self) -> CliResult<()> {
        let payload = match (&self.url, &self.text, &self.contact_json) {
            (Some(url), None, None) => payload::encode_url(url),
            (None, Some(text), None) => text.clone(),
            (None, None, Some(path)) => {
                let raw = fs::read_to_string(path).map_err(|error| {
                    CliError::io(format!("Failed to read {}: {error}", path.display()))
                })?;
                let contact: ContactRecord = serde_json::from_str(&raw).map_err(|error| {
                    CliError::validation(format!(
                        "Invalid contact JSON in {}: {error}",
                        path.display()
                    ))
                })?;
                payload::encode_contact(&contact)
            }
            _ => {
                return Err(CliError::validation(
                    "Provide exactly one of --url, --text, or --contact-json",
                ));
            }
        };

        if payload.is_empty() {
            return Err(CliError::validation(
                "Nothing to encode: the selected input is blank",
            ));
        }

        println!("{payload}");
        Ok(())
    }
}
