//! Remote fallback rendering services.
//!
//! Two providers are supported, each addressed by an HTTP GET with the
//! payload percent-encoded into its own query parameter. Fallback output
//! is always plain black-on-white: color customization and the center
//! logo are not applied on these paths.

use anyhow::{Context, Result};
use image::RgbaImage;
use std::time::Duration;
use ureq::{Agent, ResponseExt};

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// A remote QR image provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// QuickChart's chart-rendering service (stage A).
    QuickChart,
    /// goqr.me's dedicated QR image service (stage B).
    QrServer,
}

impl Provider {
    /// The service endpoint, without query parameters.
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::QuickChart => "https://quickchart.io/qr",
            Self::QrServer => "https://api.qrserver.com/v1/create-qr-code/",
        }
    }

    /// The provider's query parameters for `payload` at the given square
    /// size. Each provider has its own parameter naming.
    #[must_use]
    pub fn query(self, payload: &str, size: u32) -> Vec<(&'static str, String)> {
        match self {
            Self::QuickChart => vec![
                ("text", payload.to_string()),
                ("size", size.to_string()),
            ],
            Self::QrServer => vec![
                ("data", payload.to_string()),
                ("size", format!("{size}x{size}")),
            ],
        }
    }
}

/// A raster fetched from a remote provider, along with the exact URL it
/// was served from (kept for last-resort export reporting).
#[derive(Debug)]
pub struct FetchedImage {
    /// Decoded RGBA pixels.
    pub image: RgbaImage,
    /// The fully-encoded request URL.
    pub url: String,
}

/// Builds the HTTP agent shared by all fallback fetches.
#[must_use]
pub fn http_agent() -> Agent {
    Agent::config_builder()
        .timeout_global(Some(HTTP_TIMEOUT))
        .build()
        .into()
}

/// Fetches and decodes a QR raster from `provider`.
///
/// Any failure (transport error, non-success status, undecodable body)
/// is a single error; the chain advances to the next stage on it.
pub fn fetch(agent: &Agent, provider: Provider, payload: &str, size: u32) -> Result<FetchedImage> {
    let mut request = agent.get(provider.endpoint());
    for (key, value) in provider.query(payload, size) {
        request = request.query(key, &value);
    }

    let mut response = request
        .call()
        .with_context(|| format!("Request to {} failed", provider.endpoint()))?;
    let url = response.get_uri().to_string();

    let bytes = response
        .body_mut()
        .read_to_vec()
        .with_context(|| format!("Reading image body from {url} failed"))?;
    let image = image::load_from_memory(&bytes)
        .with_context(|| format!("Response from {url} is not a decodable image"))?
        .to_rgba8();

    Ok(FetchedImage { image, url })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_providers_use_their_own_parameter_naming() {
        let quickchart = Provider::QuickChart.query("hello world", 400);
        assert_eq!(quickchart[0].0, "text");
        assert_eq!(quickchart[0].1, "hello world");
        assert_eq!(quickchart[1], ("size", "400".to_string()));

        let qrserver = Provider::QrServer.query("hello world", 400);
        assert_eq!(qrserver[0].0, "data");
        assert_eq!(qrserver[1], ("size", "400x400".to_string()));
    }

    #[test]
    fn test_endpoints_are_https() {
        assert!(Provider::QuickChart.endpoint().starts_with("https://"));
        assert!(Provider::QrServer.endpoint().starts_with("https://"));
    }
}
