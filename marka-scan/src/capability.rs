//! Capability traits at the orchestrator's boundary
//!
//! The orchestrator never touches a host environment directly: document
//! generation, clipboard access, catalog lookups and the physical print
//! side effect are all injected. Implementations live in application code;
//! tests use in-memory fakes.

use serde::{Deserialize, Serialize};

use shared::models::PrintPayload;

use crate::error::ScanResult;

/// A rendered print document (barcode image composed into a document page)
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Product data resolved from an EAN-13 lookup
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// Renders a print payload into a physical document
#[allow(async_fn_in_trait)]
pub trait DocumentGenerator {
    async fn generate(&self, payload: &PrintPayload) -> ScanResult<RenderedDocument>;
}

/// Writes text to the host clipboard
#[allow(async_fn_in_trait)]
pub trait ClipboardWriter {
    async fn write(&self, text: &str) -> ScanResult<()>;
}

/// Looks a product up by its EAN-13
#[allow(async_fn_in_trait)]
pub trait ProductLookup {
    async fn find_by_ean13(&self, ean13: &str) -> ScanResult<Option<ProductInfo>>;
}

/// Drives one physical print of a rendered document
///
/// Implementations must not return until the side effect has completed or
/// failed; the orchestrator relies on this to serialize prints.
#[allow(async_fn_in_trait)]
pub trait PrintSink {
    async fn present(&self, document: &RenderedDocument) -> ScanResult<()>;
}
