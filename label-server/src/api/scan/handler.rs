//! Scan intake handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::scanning::ScanSubmission;
use crate::utils::{AppError, AppResponse, AppResult, ok};

/// POST /api/scan - enqueue a raw scan buffer for duplicate-label printing
///
/// Processing is asynchronous and strictly serialized by the worker.
/// Failures past this point surface in the logs only; there is no retry
/// affordance.
pub async fn submit(
    State(state): State<ServerState>,
    Json(submission): Json<ScanSubmission>,
) -> AppResult<Json<AppResponse<()>>> {
    if submission.input.trim().is_empty() {
        return Err(AppError::Validation("input is required".into()));
    }

    state
        .scan_tx
        .send(submission)
        .await
        .map_err(|_| AppError::Internal("scan worker unavailable".into()))?;

    Ok(ok(()))
}

/// GET /api/scan/clipboard - the last scan cycle's clipboard text
pub async fn clipboard(State(state): State<ServerState>) -> Json<AppResponse<Option<String>>> {
    ok(state.clipboard.read().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;

    fn test_state() -> (ServerState, tokio::sync::mpsc::Receiver<ScanSubmission>) {
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
        ServerState::build(config)
    }

    #[tokio::test]
    async fn test_submit_enqueues_for_the_worker() {
        let (state, mut rx) = test_state();

        submit(
            State(state),
            Json(ScanSubmission {
                input: "abc0123456789012xyzw".into(),
            }),
        )
        .await
        .unwrap();

        let queued = rx.recv().await.unwrap();
        assert_eq!(queued.input, "abc0123456789012xyzw");
    }

    #[tokio::test]
    async fn test_submit_rejects_empty_input() {
        let (state, _rx) = test_state();

        let result = submit(State(state), Json(ScanSubmission { input: "  ".into() })).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
