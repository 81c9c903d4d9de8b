//! Preview rendering DTOs

use serde::{Deserialize, Serialize};

/// Raw-ZPL preview request
///
/// `dpi` arrives as a string from the editor frontend; unknown values are
/// resolved permissively by the renderer rather than rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    #[serde(default)]
    pub zpl: Option<String>,
    #[serde(default)]
    pub dpi: Option<String>,
    #[serde(default)]
    pub width_mm: Option<f64>,
    #[serde(default)]
    pub height_mm: Option<f64>,
}

/// Preview response envelope
///
/// Always carries a success flag; a failed render carries only `error`.
/// Template-mode previews also return the generated ZPL so the caller can
/// display or persist it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zpl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PreviewResponse {
    /// Successful render: image as a data URI plus the declared content type
    pub fn image(data_uri: String, content_type: String) -> Self {
        Self {
            success: true,
            image: Some(data_uri),
            content_type: Some(content_type),
            zpl: None,
            error: None,
        }
    }

    /// Structured failure; never surfaced as an HTTP fault
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            image: None,
            content_type: None,
            zpl: None,
            error: Some(error.into()),
        }
    }

    /// Attach the generated ZPL (template-mode previews)
    pub fn with_zpl(mut self, zpl: impl Into<String>) -> Self {
        self.zpl = Some(zpl.into());
        self
    }
}
