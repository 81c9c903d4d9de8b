//! Label preview API module

mod handler;

pub use handler::{TemplatePreviewRequest, TemplateRef};

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

/// Label preview router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/labels", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/preview", post(handler::preview))
        .route("/preview/template", post(handler::preview_template))
        .route("/templates/new", get(handler::new_template))
        .route("/templates/custom", put(handler::save_custom))
}
