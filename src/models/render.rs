//! Rendering configuration: colors, error correction, size, center logo.

use anyhow::{Context, Result};
use image::RgbaImage;
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_SIZE_PIXELS;
use crate::models::RgbColor;

/// QR error-correction level.
///
/// Only the two levels this pipeline actually selects between are modeled:
/// Medium for plain codes, High when a center logo covers part of the
/// pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCorrection {
    /// ~15% recovery, the default for unobstructed codes.
    #[default]
    Medium,
    /// ~30% recovery, required once a logo overlays the center modules.
    High,
}

/// A decoded center-logo asset, owned exclusively by the session.
///
/// Created by decoding a user-selected file; dropped on explicit removal
/// or full form reset.
#[derive(Debug, Clone)]
pub struct CenterImage {
    image: RgbaImage,
    source: PathBuf,
}

impl CenterImage {
    /// Decodes the image file at `path` into an RGBA buffer.
    pub fn load(path: &Path) -> Result<Self> {
        let image = image::open(path)
            .with_context(|| format!("Failed to decode logo image {}", path.display()))?
            .to_rgba8();
        Ok(Self {
            image,
            source: path.to_path_buf(),
        })
    }

    /// The decoded RGBA pixels.
    #[must_use]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// The file this asset was decoded from.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Wraps an already-decoded buffer, bypassing file I/O.
    #[cfg(test)]
    pub(crate) fn from_rgba(image: RgbaImage) -> Self {
        Self {
            image,
            source: PathBuf::new(),
        }
    }
}

/// Visual and structural parameters for one render.
///
/// The error-correction level is derived, not stored: it is High exactly
/// when a center image is present and Medium otherwise, so the config can
/// never be observed in an inconsistent state.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    foreground: RgbColor,
    background: RgbColor,
    size_pixels: u32,
    center_image: Option<CenterImage>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            foreground: RgbColor::BLACK,
            background: RgbColor::WHITE,
            size_pixels: DEFAULT_SIZE_PIXELS,
            center_image: None,
        }
    }
}

impl RenderConfig {
    /// Creates a config with the default colors and size and no logo.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Module (dark) color.
    #[must_use]
    pub fn foreground(&self) -> RgbColor {
        self.foreground
    }

    /// Sets the module color.
    pub fn set_foreground(&mut self, color: RgbColor) {
        self.foreground = color;
    }

    /// Background (light) color.
    #[must_use]
    pub fn background(&self) -> RgbColor {
        self.background
    }

    /// Sets the background color.
    pub fn set_background(&mut self, color: RgbColor) {
        self.background = color;
    }

    /// Side length of the square raster, in pixels.
    #[must_use]
    pub fn size_pixels(&self) -> u32 {
        self.size_pixels
    }

    /// Sets the raster side length. Zero is rejected.
    pub fn set_size_pixels(&mut self, size: u32) -> Result<()> {
        if size == 0 {
            anyhow::bail!("Raster size must be a positive number of pixels");
        }
        self.size_pixels = size;
        Ok(())
    }

    /// The center logo, if one is set.
    #[must_use]
    pub fn center_image(&self) -> Option<&CenterImage> {
        self.center_image.as_ref()
    }

    /// Installs a center logo, elevating error correction to High.
    pub fn set_center_image(&mut self, image: CenterImage) {
        self.center_image = Some(image);
    }

    /// Removes the center logo, dropping error correction back to Medium.
    pub fn clear_center_image(&mut self) {
        self.center_image = None;
    }

    /// The error-correction level implied by the current state.
    #[must_use]
    pub fn error_correction(&self) -> ErrorCorrection {
        if self.center_image.is_some() {
            ErrorCorrection::High
        } else {
            ErrorCorrection::Medium
        }
    }
}
