//! Document generation client
//!
//! Fetches the rendered duplicate-label document (barcode image composed
//! into a document page) from the external generator. A failed generation
//! answers with a JSON `{error}` body instead of the binary document.

use std::time::Duration;

use http::header;
use serde::Deserialize;

use marka_scan::{DocumentGenerator, RenderedDocument, ScanError, ScanResult};
use shared::models::PrintPayload;

/// HTTP client for the document-generation service
#[derive(Debug, Clone)]
pub struct DocumentClient {
    client: reqwest::Client,
    url: String,
}

#[derive(Debug, Deserialize)]
struct GeneratorError {
    error: String,
}

impl DocumentClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            url: url.into(),
        }
    }
}

impl DocumentGenerator for DocumentClient {
    async fn generate(&self, payload: &PrintPayload) -> ScanResult<RenderedDocument> {
        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| ScanError::Generation(format!("generator unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<GeneratorError>()
                .await
                .map(|e| e.error)
                .unwrap_or_else(|_| format!("generator returned {status}"));
            return Err(ScanError::Generation(message));
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/pdf")
            .to_string();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ScanError::Generation(format!("generator body read failed: {e}")))?;

        Ok(RenderedDocument {
            bytes: bytes.to_vec(),
            content_type,
        })
    }
}
