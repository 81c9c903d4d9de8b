//! Router assembly

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::core::ServerState;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Preview API
        .merge(api::preview::router())
        // Scan intake API
        .merge(api::scan::router())
        // Health API - public route
        .merge(api::health::router())
}

/// Build the fully configured application
pub fn build_app() -> Router<ServerState> {
    build_router().layer(
        ServiceBuilder::new()
            // Request tracing
            .layer(TraceLayer::new_for_http())
            // CORS - the station frontend runs on another origin
            .layer(CorsLayer::permissive()),
    )
}
