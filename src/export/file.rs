//! PNG file export.
//!
//! The preferred path encodes the raster losslessly in memory and writes
//! the bytes in one shot; on encode failure it degrades to the image
//! crate's own save path. Fallback-sourced rasters are normalized onto a
//! white canvas first so transparency from a remote service never leaks
//! into the file.

use anyhow::{Context, Result};
use image::codecs::png::PngEncoder;
use image::{imageops, ExtendedColorType, ImageEncoder, ImageFormat, Rgba, RgbaImage};
use std::fs;
use std::path::Path;

use crate::labels::label;
use crate::models::RgbColor;
use crate::render::RenderedQr;

/// Returns export-ready pixels for the raster.
///
/// Primary-sourced rasters are already exact. Fallback-sourced rasters
/// are redrawn onto a fresh white-filled canvas of `size × size`,
/// scaling if the service returned a different resolution.
pub(crate) fn normalized_rgba(qr: &RenderedQr, size: u32) -> RgbaImage {
    if qr.is_styled() {
        return qr.image().clone();
    }

    let source = if qr.image().dimensions() == (size, size) {
        qr.image().clone()
    } else {
        imageops::resize(qr.image(), size, size, imageops::FilterType::CatmullRom)
    };

    let mut canvas = RgbaImage::from_pixel(size, size, RgbColor::WHITE.to_rgba());
    for (x, y, pixel) in source.enumerate_pixels() {
        blend_over_white(canvas.get_pixel_mut(x, y), *pixel);
    }
    canvas
}

fn blend_over_white(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let alpha = f32::from(src[3]) / 255.0;
    for channel in 0..3 {
        let blended = f32::from(src[channel]) * alpha + 255.0 * (1.0 - alpha);
        dst[channel] = blended.round() as u8;
    }
    dst[3] = 255;
}

/// Writes the raster as a lossless PNG at `path`.
///
/// When every strategy fails the returned error carries the terminal
/// user-facing message; for fallback-sourced rasters it names the
/// original service URL, the one artifact that can still be retrieved by
/// hand.
pub fn export_png(qr: &RenderedQr, size: u32, path: &Path) -> Result<()> {
    let image = normalized_rgba(qr, size);

    match encode_png(&image) {
        Ok(bytes) => fs::write(path, bytes)
            .with_context(|| format!("Failed to write {}", path.display())),
        Err(error) => {
            tracing::warn!(%error, "in-memory PNG encode failed, trying direct save");
            save_direct(&image, qr, path)
        }
    }
}

fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .context("PNG encoding failed")?;
    Ok(bytes)
}

fn save_direct(image: &RgbaImage, qr: &RenderedQr, path: &Path) -> Result<()> {
    if let Err(error) = image.save_with_format(path, ImageFormat::Png) {
        tracing::warn!(%error, "direct PNG save failed");
        if let Some(url) = qr.origin_url() {
            anyhow::bail!("{}: {url}", label("open_original"));
        }
        return Err(anyhow::Error::new(error).context(label("download_failed").to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RenderConfig;
    use crate::render::RendererChain;

    fn rendered(payload: &str) -> RenderedQr {
        RendererChain::new()
            .render(payload, &RenderConfig::new())
            .unwrap()
            .expect("payload is non-empty")
    }

    #[test]
    fn test_export_writes_decodable_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let qr = rendered("https://example.com");

        export_png(&qr, 400, &path).unwrap();

        let read_back = image::open(&path).unwrap().to_rgba8();
        assert_eq!(read_back.dimensions(), (400, 400));
    }

    #[test]
    fn test_export_fails_on_unwritable_path() {
        let qr = rendered("hello");
        let missing_dir = Path::new("/definitely/not/a/real/dir/out.png");
        assert!(export_png(&qr, 400, missing_dir).is_err());
    }

    #[test]
    fn test_primary_raster_is_not_normalized() {
        let qr = rendered("hello");
        let normalized = normalized_rgba(&qr, 400);
        assert_eq!(&normalized, qr.image());
    }

    #[test]
    fn test_blend_over_white_flattens_transparency() {
        let mut dst = RgbColor::WHITE.to_rgba();
        blend_over_white(&mut dst, Rgba([0, 0, 0, 0]));
        assert_eq!(dst, Rgba([255, 255, 255, 255]));

        let mut dst = RgbColor::WHITE.to_rgba();
        blend_over_white(&mut dst, Rgba([0, 0, 0, 255]));
        assert_eq!(dst, Rgba([0, 0, 0, 255]));
    }
}
