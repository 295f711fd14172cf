//! In-process QR renderer, the first stage of the chain.
//!
//! The encoder is initialized exactly once per process through a shared
//! one-shot guard: the first caller pays for initialization, every later
//! caller observes the same outcome (success or cached failure), and the
//! renderer is never torn down.

use anyhow::{anyhow, Result};
use image::{imageops, RgbaImage};
use qrcode::render::unicode;
use qrcode::{EcLevel, QrCode};
use std::sync::OnceLock;

use crate::constants::QUIET_ZONE_MODULES;
use crate::models::{ErrorCorrection, RenderConfig};

static RENDERER: OnceLock<Result<PrimaryRenderer, String>> = OnceLock::new();

/// Returns the process-wide renderer, initializing it on first use.
///
/// A failed initialization is cached for the lifetime of the process; the
/// caller is expected to fall back to a remote service.
pub fn renderer() -> Result<&'static PrimaryRenderer> {
    match RENDERER.get_or_init(PrimaryRenderer::initialize) {
        Ok(renderer) => Ok(renderer),
        Err(error) => Err(anyhow!("Primary renderer unavailable: {error}")),
    }
}

/// Renders QR matrices to square RGBA rasters, honoring colors and
/// error-correction level exactly.
#[derive(Debug)]
pub struct PrimaryRenderer {
    _guard: (),
}

impl PrimaryRenderer {
    fn initialize() -> Result<Self, String> {
        // Probe encode so a broken encoder is caught once, here, instead
        // of on every render attempt.
        QrCode::with_error_correction_level(b"probe", EcLevel::M)
            .map(|_| Self { _guard: () })
            .map_err(|error| error.to_string())
    }

    /// Encodes `payload` and paints it as a square raster of the
    /// configured side length.
    ///
    /// The module matrix (plus quiet zone) is painted at an integer scale
    /// and then stretched to the exact side with nearest-neighbor
    /// sampling so modules stay crisp.
    pub fn render(&self, payload: &str, config: &RenderConfig) -> Result<RgbaImage> {
        let code =
            QrCode::with_error_correction_level(payload, ec_level(config.error_correction()))?;

        let modules = code.width() as u32;
        let total = modules + 2 * QUIET_ZONE_MODULES;
        let side = config.size_pixels();
        let scale = (side / total).max(1);
        let native = total * scale;

        let foreground = config.foreground().to_rgba();
        let background = config.background().to_rgba();

        let mut image = RgbaImage::from_pixel(native, native, background);
        for y in 0..modules {
            for x in 0..modules {
                if code[(x as usize, y as usize)] == qrcode::Color::Dark {
                    let px = (QUIET_ZONE_MODULES + x) * scale;
                    let py = (QUIET_ZONE_MODULES + y) * scale;
                    for dy in 0..scale {
                        for dx in 0..scale {
                            image.put_pixel(px + dx, py + dy, foreground);
                        }
                    }
                }
            }
        }

        if native == side {
            Ok(image)
        } else {
            Ok(imageops::resize(&image, side, side, imageops::FilterType::Nearest))
        }
    }
}

/// Renders the payload as a compact Unicode half-block preview for
/// terminal display. Colors are inverted so the code reads correctly on
/// dark terminal backgrounds.
pub fn unicode_preview(payload: &str, ec: ErrorCorrection) -> Result<String> {
    let code = QrCode::with_error_correction_level(payload, ec_level(ec))?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .build())
}

fn ec_level(ec: ErrorCorrection) -> EcLevel {
    match ec {
        ErrorCorrection::Medium => EcLevel::M,
        ErrorCorrection::High => EcLevel::H,
    }
}
