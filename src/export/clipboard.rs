//! System-clipboard export and the transient "copied" indicators.

use anyhow::{Context, Result};
use arboard::Clipboard;
use std::borrow::Cow;
use std::time::Instant;

use crate::constants::COPIED_FLAG_DURATION;
use crate::render::RenderedQr;

/// Writes the raw payload string to the system clipboard as plain text.
pub fn copy_payload_text(payload: &str) -> Result<()> {
    Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_text(payload.to_string()))
        .context("Clipboard unavailable or text write denied")
}

/// Writes the raster to the system clipboard as a single image entry.
///
/// Fallback-sourced rasters go through the same white-canvas
/// normalization as file export.
pub fn copy_raster_image(qr: &RenderedQr, size: u32) -> Result<()> {
    let image = super::file::normalized_rgba(qr, size);
    let (width, height) = image.dimensions();
    let data = arboard::ImageData {
        width: width as usize,
        height: height as usize,
        bytes: Cow::Owned(image.into_raw()),
    };
    Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_image(data))
        .context("Clipboard unavailable or image write denied")
}

/// A cancellable single-shot indicator with a fixed 2-second lifetime.
///
/// Backs the "copied" feedback: arming starts the countdown, arming again
/// while pending resets the deadline rather than stacking timers, and the
/// flag reads as clear once the deadline passes. Time is injected so
/// callers (and tests) control the clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransientFlag {
    expires_at: Option<Instant>,
}

impl TransientFlag {
    /// A flag that reads as clear.
    #[must_use]
    pub const fn new() -> Self {
        Self { expires_at: None }
    }

    /// Starts (or restarts) the countdown from `now`.
    pub fn arm(&mut self, now: Instant) {
        self.expires_at = Some(now + COPIED_FLAG_DURATION);
    }

    /// Clears the flag immediately.
    pub fn cancel(&mut self) {
        self.expires_at = None;
    }

    /// True while armed and not yet expired at `now`.
    #[must_use]
    pub fn is_set(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| now < deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_flag_starts_clear() {
        let flag = TransientFlag::new();
        assert!(!flag.is_set(Instant::now()));
    }

    #[test]
    fn test_flag_clears_after_exactly_two_seconds() {
        let start = Instant::now();
        let mut flag = TransientFlag::new();
        flag.arm(start);

        assert!(flag.is_set(start));
        assert!(flag.is_set(start + Duration::from_millis(1999)));
        assert!(!flag.is_set(start + Duration::from_millis(2000)));
    }

    #[test]
    fn test_rearming_resets_the_deadline() {
        let start = Instant::now();
        let mut flag = TransientFlag::new();
        flag.arm(start);
        flag.arm(start + Duration::from_secs(1));

        assert!(flag.is_set(start + Duration::from_millis(2500)));
        assert!(!flag.is_set(start + Duration::from_millis(3000)));
    }

    #[test]
    fn test_cancel_clears_immediately() {
        let start = Instant::now();
        let mut flag = TransientFlag::new();
        flag.arm(start);
        flag.cancel();
        assert!(!flag.is_set(start + Duration::from_millis(1)));
    }
}
