//! Scan intake API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Scan intake router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/scan", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::submit))
        .route("/clipboard", get(handler::clipboard))
}
