//! Session state: the live form, render config, raster, and copy
//! indicators.
//!
//! The session is what a view layer talks to. Every mutation re-encodes
//! the payload and re-renders the raster immediately: there is no
//! debouncing, no caching of previous rasters, and no error ever escapes
//! to the view: it only observes payload presence, raster presence, and
//! the transient copied flags.

use anyhow::Result;
use std::path::Path;
use std::time::Instant;

use crate::export::{self, TransientFlag};
use crate::models::{CenterImage, ContactRecord, InputMode, RenderConfig, RgbColor};
use crate::payload;
use crate::render::{RenderedQr, RendererChain};

/// Owns all mutable state for one editing session.
pub struct Session {
    mode: InputMode,
    url_input: String,
    text_input: String,
    contact: ContactRecord,
    config: RenderConfig,
    chain: RendererChain,
    raster: Option<RenderedQr>,
    render_failed: bool,
    copied_text: TransientFlag,
    copied_image: TransientFlag,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A fresh session: URL mode, empty inputs, default config, no raster.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: InputMode::default(),
            url_input: String::new(),
            text_input: String::new(),
            contact: ContactRecord::default(),
            config: RenderConfig::default(),
            chain: RendererChain::new(),
            raster: None,
            render_failed: false,
            copied_text: TransientFlag::new(),
            copied_image: TransientFlag::new(),
        }
    }

    /// The active input mode.
    #[must_use]
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Current URL-mode input, kept even while another mode is active.
    #[must_use]
    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    /// Current text-mode input, kept even while another mode is active.
    #[must_use]
    pub fn text_input(&self) -> &str {
        &self.text_input
    }

    /// Current contact record, kept even while another mode is active.
    #[must_use]
    pub fn contact(&self) -> &ContactRecord {
        &self.contact
    }

    /// The render configuration.
    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The canonical payload for the active mode, recomputed on demand.
    #[must_use]
    pub fn payload(&self) -> String {
        payload::encode(self.mode, &self.url_input, &self.text_input, &self.contact)
    }

    /// The current raster, if the last render produced one.
    #[must_use]
    pub fn raster(&self) -> Option<&RenderedQr> {
        self.raster.as_ref()
    }

    /// True when the last render failed at every stage (as opposed to the
    /// payload simply being empty).
    #[must_use]
    pub fn render_failed(&self) -> bool {
        self.render_failed
    }

    /// Switches the active input mode. Other modes' inputs are preserved.
    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
        self.refresh();
    }

    /// Replaces the URL-mode input.
    pub fn set_url_input(&mut self, value: &str) {
        self.url_input = value.to_string();
        self.refresh();
    }

    /// Replaces the text-mode input.
    pub fn set_text_input(&mut self, value: &str) {
        self.text_input = value.to_string();
        self.refresh();
    }

    /// Replaces the whole contact record.
    pub fn set_contact(&mut self, contact: ContactRecord) {
        self.contact = contact;
        self.refresh();
    }

    /// Edits the contact record in place, the way a form field would.
    pub fn update_contact(&mut self, update: impl FnOnce(&mut ContactRecord)) {
        update(&mut self.contact);
        self.refresh();
    }

    /// Sets the module color.
    pub fn set_foreground(&mut self, color: RgbColor) {
        self.config.set_foreground(color);
        self.refresh();
    }

    /// Sets the background color.
    pub fn set_background(&mut self, color: RgbColor) {
        self.config.set_background(color);
        self.refresh();
    }

    /// Sets the raster side length in pixels.
    pub fn set_size_pixels(&mut self, size: u32) -> Result<()> {
        self.config.set_size_pixels(size)?;
        self.refresh();
        Ok(())
    }

    /// Decodes the file at `path` and installs it as the center logo,
    /// elevating error correction to High. A decode failure leaves the
    /// config (and the raster) unchanged.
    pub fn set_center_image(&mut self, path: &Path) -> Result<()> {
        let logo = CenterImage::load(path)?;
        self.config.set_center_image(logo);
        self.refresh();
        Ok(())
    }

    /// Removes the center logo, dropping error correction back to Medium.
    pub fn clear_center_image(&mut self) {
        self.config.clear_center_image();
        self.refresh();
    }

    /// Re-encodes the payload and re-renders the raster.
    ///
    /// Called by every mutator; also safe to call directly. A failure at
    /// every render stage clears the raster and sets [`render_failed`];
    /// it is never propagated.
    ///
    /// [`render_failed`]: Self::render_failed
    pub fn refresh(&mut self) {
        self.render_failed = false;
        let payload = self.payload();
        match self.chain.render(&payload, &self.config) {
            Ok(raster) => self.raster = raster,
            Err(error) => {
                tracing::error!(%error, "rendering failed at every stage");
                self.raster = None;
                self.render_failed = true;
            }
        }
    }

    /// Copies the payload text to the clipboard and arms the transient
    /// "copied" indicator. On failure the indicator stays down.
    pub fn copy_payload_text(&mut self, now: Instant) -> Result<()> {
        let payload = self.payload();
        match export::copy_payload_text(&payload) {
            Ok(()) => {
                self.copied_text.arm(now);
                Ok(())
            }
            Err(error) => {
                tracing::warn!(%error, "payload copy failed");
                Err(error)
            }
        }
    }

    /// Copies the raster image to the clipboard and arms the independent
    /// "copied image" indicator. On failure the indicator stays down.
    pub fn copy_raster_image(&mut self, now: Instant) -> Result<()> {
        let Some(raster) = self.raster.as_ref() else {
            anyhow::bail!("No rendered QR code to copy");
        };
        match export::copy_raster_image(raster, self.config.size_pixels()) {
            Ok(()) => {
                self.copied_image.arm(now);
                Ok(())
            }
            Err(error) => {
                tracing::warn!(%error, "image copy failed");
                Err(error)
            }
        }
    }

    /// True while the payload-copied indicator is up at `now`.
    #[must_use]
    pub fn copied_text_active(&self, now: Instant) -> bool {
        self.copied_text.is_set(now)
    }

    /// True while the image-copied indicator is up at `now`.
    #[must_use]
    pub fn copied_image_active(&self, now: Instant) -> bool {
        self.copied_image.is_set(now)
    }

    /// Returns every entity to its initial value and clears the raster.
    pub fn reset(&mut self) {
        self.mode = InputMode::default();
        self.url_input.clear();
        self.text_input.clear();
        self.contact = ContactRecord::default();
        self.config = RenderConfig::default();
        self.raster = None;
        self.render_failed = false;
        self.copied_text.cancel();
        self.copied_image.cancel();
    }
}
