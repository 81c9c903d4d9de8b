//! Health check API

use axum::{Json, Router, routing::get};

use crate::core::ServerState;

/// Health router
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(health))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
