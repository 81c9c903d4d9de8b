//! Rasterizer client
//!
//! Talks to the external ZPL rasterization service for WYSIWYG previews.
//! The service addresses labels by device resolution in dots per
//! millimetre and physical size in inches:
//! `POST {base}/{dpmm}dpmm/labels/{width}x{height}/0/` with the ZPL text
//! as body.

use std::time::Duration;

use http::header;
use tracing::debug;

use marka_zpl::units;

use crate::utils::{AppError, AppResult};

/// Resolve a dpi string to the rasterizer's dots-per-millimetre segment.
///
/// Unknown values fall back to the 203 dpi mapping rather than failing;
/// label previews should render even when the editor sends a stale value.
pub fn dpmm_for_dpi(dpi: &str) -> u32 {
    match dpi {
        "203" => 8,
        "300" => 12,
        "600" => 24,
        other => {
            debug!(dpi = other, "unknown dpi, falling back to 8dpmm");
            8
        }
    }
}

/// A rendered preview image
#[derive(Debug, Clone)]
pub struct RasterizedImage {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// HTTP client for the rasterization service
#[derive(Debug, Clone)]
pub struct RasterizerClient {
    client: reqwest::Client,
    base_url: String,
}

impl RasterizerClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Render ZPL at the given dpi and physical size in millimetres.
    /// Defaults to the standard 58x40 label when no size is given.
    pub async fn render(
        &self,
        zpl: &str,
        dpi: &str,
        width_mm: Option<f64>,
        height_mm: Option<f64>,
    ) -> AppResult<RasterizedImage> {
        let dpmm = dpmm_for_dpi(dpi);
        let size = units::format_size_for_rasterizer(
            width_mm.unwrap_or(marka_zpl::DEFAULT_WIDTH_MM),
            height_mm.unwrap_or(marka_zpl::DEFAULT_HEIGHT_MM),
        );
        let url = self.label_url(dpmm, &size);

        let response = self
            .client
            .post(&url)
            .header(header::ACCEPT, "image/png")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(zpl.to_string())
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("rasterizer unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            // The body of a failed response is never inspected.
            return Err(AppError::Upstream(format!("rasterizer returned {status}")));
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("image/png")
            .to_string();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::Upstream(format!("rasterizer body read failed: {e}")))?;

        Ok(RasterizedImage {
            bytes: bytes.to_vec(),
            content_type,
        })
    }

    fn label_url(&self, dpmm: u32, size: &str) -> String {
        format!(
            "{}/{}dpmm/labels/{}/0/",
            self.base_url.trim_end_matches('/'),
            dpmm,
            size
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dpmm_mapping() {
        assert_eq!(dpmm_for_dpi("203"), 8);
        assert_eq!(dpmm_for_dpi("300"), 12);
        assert_eq!(dpmm_for_dpi("600"), 24);
    }

    #[test]
    fn test_unknown_dpi_falls_back_to_8dpmm() {
        assert_eq!(dpmm_for_dpi("999"), 8);
        assert_eq!(dpmm_for_dpi(""), 8);
    }

    #[test]
    fn test_label_url() {
        let client = RasterizerClient::new(
            "http://api.labelary.com/v1/printers/",
            Duration::from_secs(5),
        );
        assert_eq!(
            client.label_url(dpmm_for_dpi("600"), "2.283x1.575"),
            "http://api.labelary.com/v1/printers/24dpmm/labels/2.283x1.575/0/"
        );
    }
}
