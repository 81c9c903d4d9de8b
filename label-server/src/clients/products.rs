//! Product catalog client
//!
//! Resolves an EAN-13 to product name/size for the duplicate-label print.
//! An unknown code is a soft miss, not an error.

use std::time::Duration;

use http::StatusCode;

use marka_scan::{ProductInfo, ProductLookup, ScanError, ScanResult};

/// HTTP client for the product catalog
#[derive(Debug, Clone)]
pub struct ProductClient {
    client: reqwest::Client,
    base_url: String,
}

impl ProductClient {
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
}

impl ProductLookup for ProductClient {
    async fn find_by_ean13(&self, ean13: &str) -> ScanResult<Option<ProductInfo>> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), ean13);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ScanError::Lookup(format!("catalog unreachable: {e}")))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(ScanError::Lookup(format!(
                "catalog returned {}",
                response.status()
            )));
        }

        response
            .json::<ProductInfo>()
            .await
            .map(Some)
            .map_err(|e| ScanError::Lookup(format!("catalog response malformed: {e}")))
    }
}
