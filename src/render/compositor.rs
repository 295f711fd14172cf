//! Center-logo compositing.
//!
//! Overlays the logo onto an already-painted QR raster: a filled backing
//! plate in the background color keeps the logo from visually merging
//! with adjacent modules, a thin separator ring marks the boundary, and
//! the logo itself is drawn inside a circular clip with high-quality
//! resampling. The overlay overwrites center modules outright, which is
//! why the config elevates error correction to High whenever a logo is
//! set.

use anyhow::Result;
use image::{imageops, Rgba, RgbaImage};

use crate::constants::{
    BACKING_PLATE_PADDING, CENTER_OVERLAY_PERCENT, SEPARATOR_RING_PADDING, SEPARATOR_RING_WIDTH,
};
use crate::models::{CenterImage, RenderConfig, RgbColor};

/// Separator ring color over a white background.
const RING_ON_WHITE: RgbColor = RgbColor::new(224, 224, 224);

/// Draws the center logo onto `raster`.
///
/// Compositing is atomic: every step paints a scratch copy, and the
/// raster is replaced only once all steps have succeeded. On error the
/// raster is left exactly as it was (a plain QR code, never a half-drawn
/// overlay).
pub fn composite(raster: &mut RgbaImage, logo: &CenterImage, config: &RenderConfig) -> Result<()> {
    let side = raster.width().min(raster.height());
    let diameter = side * CENTER_OVERLAY_PERCENT / 100;
    if diameter == 0 {
        anyhow::bail!("Raster side {side}px is too small for a center overlay");
    }
    if logo.image().width() == 0 || logo.image().height() == 0 {
        anyhow::bail!("Logo image has no pixels");
    }

    let mut scratch = raster.clone();
    let center = side as f32 / 2.0;
    let clip_radius = diameter as f32 / 2.0;
    let plate_radius = clip_radius + BACKING_PLATE_PADDING as f32;
    let ring_radius = clip_radius + SEPARATOR_RING_PADDING as f32;

    fill_circle(&mut scratch, center, plate_radius, config.background().to_rgba());

    let ring_color = if config.background() == RgbColor::WHITE {
        RING_ON_WHITE
    } else {
        RgbColor::WHITE
    };
    stroke_circle(&mut scratch, center, ring_radius, SEPARATOR_RING_WIDTH as f32, ring_color.to_rgba());

    let scaled = imageops::resize(
        logo.image(),
        diameter,
        diameter,
        imageops::FilterType::CatmullRom,
    );
    draw_clipped(&mut scratch, &scaled, center, clip_radius);

    *raster = scratch;
    Ok(())
}

/// Paints every pixel within `radius` of the center point.
fn fill_circle(image: &mut RgbaImage, center: f32, radius: f32, color: Rgba<u8>) {
    for_circle_band(image, center, 0.0, radius, |pixel| *pixel = color);
}

/// Paints an annulus of the given stroke width centered on `radius`.
fn stroke_circle(image: &mut RgbaImage, center: f32, radius: f32, width: f32, color: Rgba<u8>) {
    let half = width / 2.0;
    for_circle_band(image, center, radius - half, radius + half, |pixel| *pixel = color);
}

/// Applies `paint` to every pixel whose center lies within the
/// [`inner`, `outer`] distance band around the raster center.
fn for_circle_band(
    image: &mut RgbaImage,
    center: f32,
    inner: f32,
    outer: f32,
    mut paint: impl FnMut(&mut Rgba<u8>),
) {
    let min = (center - outer).floor().max(0.0) as u32;
    let max = ((center + outer).ceil() as u32).min(image.width());
    for y in min..max {
        for x in min..max {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance >= inner && distance <= outer {
                paint(image.get_pixel_mut(x, y));
            }
        }
    }
}

/// Alpha-blends the scaled logo over the raster, clipped to a circle of
/// `clip_radius` around the center.
fn draw_clipped(image: &mut RgbaImage, scaled: &RgbaImage, center: f32, clip_radius: f32) {
    let origin = center - clip_radius;
    for (lx, ly, src) in scaled.enumerate_pixels() {
        let x = origin + lx as f32;
        let y = origin + ly as f32;
        let dx = x + 0.5 - center;
        let dy = y + 0.5 - center;
        if (dx * dx + dy * dy).sqrt() > clip_radius {
            continue;
        }
        let (px, py) = (x as u32, y as u32);
        if px < image.width() && py < image.height() {
            blend(image.get_pixel_mut(px, py), *src);
        }
    }
}

/// Source-over blend of `src` onto an opaque destination pixel.
fn blend(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let alpha = f32::from(src[3]) / 255.0;
    for channel in 0..3 {
        let blended = f32::from(src[channel]) * alpha + f32::from(dst[channel]) * (1.0 - alpha);
        dst[channel] = blended.round() as u8;
    }
    dst[3] = 255;
}
