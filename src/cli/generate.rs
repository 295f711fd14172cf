//! Generate command: render a QR code and export it.

use clap::Args;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::common::{CliError, CliResult};
use crate::constants::APP_BINARY_NAME;
use crate::export;
use crate::labels::label;
use crate::models::{ContactRecord, InputMode, RgbColor};
use crate::render::primary;
use crate::session::Session;

/// Render a QR code and export it as a PNG file, clipboard entry, or
/// terminal preview
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Web address to encode (https:// is added when no scheme is given)
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Free text to encode verbatim
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Contact record to encode as a vCard, read from a JSON file
    #[arg(long, value_name = "FILE")]
    pub contact_json: Option<PathBuf>,

    /// Foreground (module) color as #RRGGBB
    #[arg(long, value_name = "HEX")]
    pub fg: Option<String>,

    /// Background color as #RRGGBB
    #[arg(long, value_name = "HEX")]
    pub bg: Option<String>,

    /// Center logo image file (raises error correction to level H)
    #[arg(long, value_name = "FILE")]
    pub logo: Option<PathBuf>,

    /// Raster side length in pixels
    #[arg(long, value_name = "PIXELS")]
    pub size: Option<u32>,

    /// Base name for the output file (sanitized; defaults to qr-code)
    #[arg(short, long, value_name = "NAME")]
    pub output: Option<String>,

    /// Append a -MMDD-HHMM timestamp to the filename
    #[arg(long)]
    pub timestamp: bool,

    /// Directory the PNG is written into (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Copy the payload text to the clipboard
    #[arg(long)]
    pub copy_text: bool,

    /// Copy the rendered image to the clipboard
    #[arg(long)]
    pub copy_image: bool,

    /// Print a Unicode preview of the QR code to the terminal
    #[arg(long)]
    pub print: bool,

    /// Skip writing the PNG file
    #[arg(long)]
    pub no_file: bool,
}

impl GenerateArgs {
    /// Execute the generate command.
    pub fn execute(&self) -> CliResult<()> {
        let mut session = self.build_session()?;

        let payload = session.payload();
        if payload.is_empty() {
            return Err(CliError::validation(
                "Nothing to encode: the selected input is blank",
            ));
        }

        if session.render_failed() || session.raster().is_none() {
            return Err(CliError::render(label("render_failed")));
        }

        if self.print {
            let preview = primary::unicode_preview(&payload, session.config().error_correction())
                .map_err(|error| CliError::render(format!("Preview failed: {error}")))?;
            println!("{preview}");
        }

        if !self.no_file {
            self.write_file(&session)?;
        }

        if self.copy_text {
            let now = Instant::now();
            let _ = session.copy_payload_text(now);
            if session.copied_text_active(Instant::now()) {
                println!("✓ {}", label("copied_text"));
            }
        }

        if self.copy_image {
            let now = Instant::now();
            let _ = session.copy_raster_image(now);
            if session.copied_image_active(Instant::now()) {
                println!("✓ {}", label("copied_image"));
            }
        }

        Ok(())
    }

    fn build_session(&self) -> CliResult<Session> {
        let mut session = Session::new();

        match (&self.url, &self.text, &self.contact_json) {
            (Some(url), None, None) => {
                session.set_mode(InputMode::Url);
                session.set_url_input(url);
            }
            (None, Some(text), None) => {
                session.set_mode(InputMode::Text);
                session.set_text_input(text);
            }
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
                session.set_mode(InputMode::Contact);
                session.set_contact(contact);
            }
            _ => {
                return Err(CliError::validation(format!(
                    "Provide exactly one of --url, --text, or --contact-json (see {APP_BINARY_NAME} generate --help)"
                )));
            }
        }

        if let Some(hex) = &self.fg {
            let color = RgbColor::from_hex(hex)
                .map_err(|error| CliError::validation(format!("--fg: {error}")))?;
            session.set_foreground(color);
        }
        if let Some(hex) = &self.bg {
            let color = RgbColor::from_hex(hex)
                .map_err(|error| CliError::validation(format!("--bg: {error}")))?;
            session.set_background(color);
        }
        if let Some(size) = self.size {
            session
                .set_size_pixels(size)
                .map_err(|error| CliError::validation(format!("--size: {error}")))?;
        }
        if let Some(logo) = &self.logo {
            session
                .set_center_image(logo)
                .map_err(|error| CliError::io(format!("--logo: {error:#}")))?;
        }

        Ok(session)
    }

    fn write_file(&self, session: &Session) -> CliResult<()> {
        let raster = session
            .raster()
            .ok_or_else(|| CliError::render(label("render_failed")))?;

        let filename = export::build_filename(self.output.as_deref().unwrap_or(""), self.timestamp);
        let directory = self.out_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        let path = directory.join(&filename);

        export::export_png(raster, session.config().size_pixels(), &path)
            .map_err(|error| CliError::io(format!("{error:#}")))?;

        println!("✓ Saved {}", path.display());
        if !raster.is_styled() {
            println!("  {}", label("fallback_styling"));
        }
        Ok(())
    }
}
