//! QR raster generation: a primary in-process renderer with a tiered
//! remote fallback chain.
//!
//! The chain is an explicit state machine: each stage is attempted in
//! order, a failure advances to the next stage, and only when the last
//! stage fails does the caller see an error. Selection is re-evaluated on
//! every render call; no raster is ever cached across payload or config
//! changes.

pub mod compositor;
pub mod fallback;
pub mod primary;

use anyhow::{anyhow, Result};
use image::RgbaImage;

use crate::models::RenderConfig;

/// Stages of the renderer chain, attempted in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStage {
    /// The in-process renderer (styled output).
    Primary,
    /// First remote service.
    FallbackA,
    /// Second remote service, tried only after A fails.
    FallbackB,
}

impl RenderStage {
    /// The stage tried when this one fails, if any remains.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Primary => Some(Self::FallbackA),
            Self::FallbackA => Some(Self::FallbackB),
            Self::FallbackB => None,
        }
    }

    fn provider(self) -> Option<fallback::Provider> {
        match self {
            Self::Primary => None,
            Self::FallbackA => Some(fallback::Provider::QuickChart),
            Self::FallbackB => Some(fallback::Provider::QrServer),
        }
    }
}

/// Which stage produced a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderSource {
    /// In-process renderer; colors and logo were applied.
    Primary,
    /// First remote service; plain black-on-white.
    FallbackA,
    /// Second remote service; plain black-on-white.
    FallbackB,
}

/// A rendered QR raster plus its provenance.
#[derive(Debug, Clone)]
pub struct RenderedQr {
    image: RgbaImage,
    source: RenderSource,
    origin_url: Option<String>,
}

impl RenderedQr {
    /// The RGBA pixels.
    #[must_use]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Which stage produced this raster.
    #[must_use]
    pub fn source(&self) -> RenderSource {
        self.source
    }

    /// True when color customization (and any logo) was applied. Remote
    /// fallbacks render a fixed black-on-white style, so exported output
    /// may lose styling when this is false.
    #[must_use]
    pub fn is_styled(&self) -> bool {
        self.source == RenderSource::Primary
    }

    /// For fallback-sourced rasters, the exact service URL the image was
    /// fetched from.
    #[must_use]
    pub fn origin_url(&self) -> Option<&str> {
        self.origin_url.as_deref()
    }
}

/// Drives raster generation through the stage machine.
pub struct RendererChain {
    agent: ureq::Agent,
}

impl Default for RendererChain {
    fn default() -> Self {
        Self::new()
    }
}

impl RendererChain {
    /// Creates a chain with a fresh HTTP agent for the fallback stages.
    #[must_use]
    pub fn new() -> Self {
        Self {
            agent: fallback::http_agent(),
        }
    }

    /// Renders `payload` under `config`.
    ///
    /// Returns `Ok(None)` for an empty payload (the caller clears its
    /// raster), `Ok(Some(_))` from the first stage that succeeds, and an
    /// error only when every stage has failed, which is the terminal
    /// "no QR could be rendered" outcome.
    pub fn render(&self, payload: &str, config: &RenderConfig) -> Result<Option<RenderedQr>> {
        if payload.is_empty() {
            return Ok(None);
        }

        let mut stage = Some(RenderStage::Primary);
        let mut last_error = anyhow!("renderer chain has no stages");
        while let Some(current) = stage {
            match self.attempt(current, payload, config) {
                Ok(rendered) => return Ok(Some(rendered)),
                Err(error) => {
                    tracing::debug!(stage = ?current, %error, "render stage failed");
                    stage = current.next();
                    last_error = error;
                }
            }
        }
        Err(last_error.context("Every render stage failed; no QR code could be produced"))
    }

    fn attempt(&self, stage: RenderStage, payload: &str, config: &RenderConfig) -> Result<RenderedQr> {
        match stage.provider() {
            None => {
                let renderer = primary::renderer()?;
                let mut image = renderer.render(payload, config)?;
                if let Some(logo) = config.center_image() {
                    // A failed composite keeps the plain QR; it never
                    // drops the code itself.
                    if let Err(error) = compositor::composite(&mut image, logo, config) {
                        tracing::warn!(%error, "logo compositing failed, keeping plain QR");
                    }
                }
                Ok(RenderedQr {
                    image,
                    source: RenderSource::Primary,
                    origin_url: None,
                })
            }
            Some(provider) => {
                let fetched = fallback::fetch(&self.agent, provider, payload, config.size_pixels())?;
                let source = match stage {
                    RenderStage::FallbackA => RenderSource::FallbackA,
                    _ => RenderSource::FallbackB,
                };
                Ok(RenderedQr {
                    image: fetched.image,
                    source,
                    origin_url: Some(fetched.url),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order() {
        assert_eq!(RenderStage::Primary.next(), Some(RenderStage::FallbackA));
        assert_eq!(RenderStage::FallbackA.next(), Some(RenderStage::FallbackB));
        assert_eq!(RenderStage::FallbackB.next(), None);
    }

    #[test]
    fn test_empty_payload_clears_raster() {
        let chain = RendererChain::new();
        let result = chain.render("", &RenderConfig::new()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_primary_path_renders_styled() {
        let chain = RendererChain::new();
        let rendered = chain
            .render("https://example.com", &RenderConfig::new())
            .unwrap()
            .expect("non-empty payload renders");
        assert_eq!(rendered.source(), RenderSource::Primary);
        assert!(rendered.is_styled());
        assert!(rendered.origin_url().is_none());
        let side = RenderConfig::new().size_pixels();
        assert_eq!(rendered.image().dimensions(), (side, side));
    }
}
