//! Route definitions

use axum::{Router, extract::DefaultBodyLimit, routing::get};
use infrastructure::ServerConfig;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::{handlers, openapi::create_openapi_routes, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // WhatsApp webhook
        .route(
            "/webhook",
            get(handlers::whatsapp::verify_webhook).post(handlers::whatsapp::handle_webhook),
        )
        // Schedule API (v1)
        .route("/v1/schedule", get(handlers::schedule::list_schedule))
        .route(
            "/v1/schedule/availability",
            get(handlers::schedule::check_availability),
        )
        // OpenAPI document
        .merge(create_openapi_routes())
        // Attach state
        .with_state(state)
}

/// Router with request tracing and the configured body size limit
pub fn create_app(state: AppState, server: &ServerConfig) -> Router {
    create_router(state)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(server.max_body_size_bytes))
        .layer(TraceLayer::new_for_http())
}
