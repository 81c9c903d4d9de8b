//! Label preview handlers
//!
//! Preview endpoints always answer 200 with a success flag: validation
//! problems and rasterizer faults alike come back as
//! `{success: false, error}` so the editor can show them inline.

use axum::{Json, extract::State};
use base64::Engine;
use serde::Deserialize;
use tracing::warn;

use marka_zpl::LabelTemplate;
use shared::models::{PreviewRequest, PreviewResponse};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ok};

/// Owner used when the station did not select one (tenant selection is the
/// frontend's concern)
const DEFAULT_OWNER: &str = "default";

/// POST /api/labels/preview - render raw ZPL to a preview image
pub async fn preview(
    State(state): State<ServerState>,
    Json(payload): Json<PreviewRequest>,
) -> Json<PreviewResponse> {
    let Some(zpl) = payload.zpl.filter(|z| !z.trim().is_empty()) else {
        return Json(PreviewResponse::failure("zpl is required"));
    };
    let Some(dpi) = payload.dpi.filter(|d| !d.trim().is_empty()) else {
        return Json(PreviewResponse::failure("dpi is required"));
    };

    Json(render_preview(&state, &zpl, &dpi, payload.width_mm, payload.height_mm).await)
}

/// Template reference: an inline template, or the literal string "custom"
/// meaning the owner's one stored custom template
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TemplateRef {
    Named(String),
    Inline(Box<LabelTemplate>),
}

/// Template-mode preview request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePreviewRequest {
    pub template: TemplateRef,
    #[serde(default)]
    pub dpi: Option<String>,
    #[serde(default)]
    pub owner_id: Option<String>,
}

/// POST /api/labels/preview/template - compile a template and render it,
/// returning the generated ZPL alongside the image
pub async fn preview_template(
    State(state): State<ServerState>,
    Json(payload): Json<TemplatePreviewRequest>,
) -> Json<PreviewResponse> {
    let template = match payload.template {
        TemplateRef::Inline(template) => *template,
        TemplateRef::Named(name) if name == "custom" => {
            let owner = payload.owner_id.as_deref().unwrap_or(DEFAULT_OWNER);
            match state.templates.custom_for(owner) {
                Some(t) => t,
                None => return Json(PreviewResponse::failure("no custom template stored")),
            }
        }
        TemplateRef::Named(other) => {
            return Json(PreviewResponse::failure(format!(
                "unknown template reference: {other}"
            )));
        }
    };

    let zpl = match marka_zpl::compile(&template) {
        Ok(z) => z,
        Err(e) => return Json(PreviewResponse::failure(e.to_string())),
    };

    let dpi = payload
        .dpi
        .unwrap_or_else(|| template.label_size.dpi.to_string());
    let response = render_preview(
        &state,
        &zpl,
        &dpi,
        Some(template.label_size.width_mm),
        Some(template.label_size.height_mm),
    )
    .await;

    Json(response.with_zpl(zpl))
}

/// GET /api/labels/templates/new - a fresh template with the default
/// element set, for the editor to start from
pub async fn new_template(
    State(_state): State<ServerState>,
) -> Json<crate::utils::AppResponse<LabelTemplate>> {
    ok(LabelTemplate::new(DEFAULT_OWNER, "New label"))
}

/// PUT /api/labels/templates/custom - store the owner's custom template
pub async fn save_custom(
    State(state): State<ServerState>,
    Json(template): Json<LabelTemplate>,
) -> AppResult<Json<crate::utils::AppResponse<LabelTemplate>>> {
    if !template.label_size.is_valid() {
        return Err(AppError::Validation("label size must be positive".into()));
    }

    state.templates.put(template.clone());
    Ok(ok(template))
}

async fn render_preview(
    state: &ServerState,
    zpl: &str,
    dpi: &str,
    width_mm: Option<f64>,
    height_mm: Option<f64>,
) -> PreviewResponse {
    match state.rasterizer.render(zpl, dpi, width_mm, height_mm).await {
        Ok(image) => {
            let encoded = base64::engine::general_purpose::STANDARD.encode(&image.bytes);
            let data_uri = format!("data:{};base64,{}", image.content_type, encoded);
            PreviewResponse::image(data_uri, image.content_type)
        }
        Err(e) => {
            warn!(error = %e, "preview rendering failed");
            PreviewResponse::failure(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;

    fn test_state() -> ServerState {
        let config = Config {
            http_port: 0,
            rasterizer_url: "http://127.0.0.1:1".to_string(),
            document_service_url: "http://127.0.0.1:1".to_string(),
            product_service_url: "http://127.0.0.1:1".to_string(),
            printer_addr: "127.0.0.1:1".to_string(),
            spool_dir: std::env::temp_dir().display().to_string(),
            request_timeout_ms: 1000,
            environment: "test".to_string(),
        };
        let (state, _rx) = ServerState::build(config);
        state
    }

    #[tokio::test]
    async fn test_preview_requires_zpl() {
        let response = preview(
            State(test_state()),
            Json(PreviewRequest {
                zpl: None,
                dpi: Some("203".into()),
                ..PreviewRequest::default()
            }),
        )
        .await;

        assert!(!response.0.success);
        assert_eq!(response.0.error.as_deref(), Some("zpl is required"));
    }

    #[tokio::test]
    async fn test_preview_requires_dpi() {
        let response = preview(
            State(test_state()),
            Json(PreviewRequest {
                zpl: Some("^XA^XZ".into()),
                dpi: None,
                ..PreviewRequest::default()
            }),
        )
        .await;

        assert!(!response.0.success);
        assert_eq!(response.0.error.as_deref(), Some("dpi is required"));
    }

    #[tokio::test]
    async fn test_template_preview_rejects_unknown_reference() {
        let response = preview_template(
            State(test_state()),
            Json(TemplatePreviewRequest {
                template: TemplateRef::Named("builtin".into()),
                dpi: None,
                owner_id: None,
            }),
        )
        .await;

        assert!(!response.0.success);
    }

    #[tokio::test]
    async fn test_template_preview_custom_without_store_entry() {
        let response = preview_template(
            State(test_state()),
            Json(TemplatePreviewRequest {
                template: TemplateRef::Named("custom".into()),
                dpi: None,
                owner_id: Some("tenant-9".into()),
            }),
        )
        .await;

        assert!(!response.0.success);
        assert_eq!(
            response.0.error.as_deref(),
            Some("no custom template stored")
        );
    }

    #[test]
    fn test_template_ref_deserialization() {
        let named: TemplateRef = serde_json::from_value(serde_json::json!("custom")).unwrap();
        assert!(matches!(named, TemplateRef::Named(ref n) if n == "custom"));

        let inline: TemplateRef =
            serde_json::from_value(serde_json::to_value(LabelTemplate::new("t", "n")).unwrap())
                .unwrap();
        assert!(matches!(inline, TemplateRef::Inline(_)));
    }
}
