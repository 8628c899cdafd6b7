//! Router configuration for the HTTP API.
//!
//! Sets up the routes and middleware (CORS, tracing) and creates the axum
//! router ready for serving.

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the application router with all routes and middleware.
///
/// With `allowed_origin` unset the API is open to any origin; set, CORS is
/// restricted to that one origin.
pub fn create_router(state: AppState, allowed_origin: Option<HeaderValue>) -> Router {
    let cors = match allowed_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/planets", get(handlers::get_planets))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
