//! OpenAPI documentation module
//!
//! Serves the OpenAPI 3 document for the relay's HTTP API.

// Allow clippy warnings from macro-generated code in utoipa derive
#![allow(clippy::needless_for_each)]

use axum::{Json, Router, routing::get};
use utoipa::OpenApi;

use crate::{handlers, state::AppState};

/// Path the OpenAPI document is served on
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI documentation for the relay
#[derive(OpenApi)]
#[openapi(
    info(
        title = "WhatsApp Relay API",
        version = "0.1.0",
        description = "WhatsApp webhook relay with class schedule lookup",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "whatsapp", description = "WhatsApp Business webhook"),
        (name = "schedule", description = "Class schedule lookup")
    ),
    paths(
        handlers::health::health_check,
        handlers::whatsapp::verify_webhook,
        handlers::whatsapp::handle_webhook,
        handlers::schedule::list_schedule,
        handlers::schedule::check_availability,
    ),
    components(
        schemas(
            handlers::health::HealthResponse,
            handlers::whatsapp::WebhookAck,
            handlers::schedule::ScheduleRowResponse,
            handlers::schedule::AvailabilityResponse,
            crate::error::ErrorResponse,
        )
    )
)]
#[derive(Debug)]
pub struct ApiDoc;

/// Create OpenAPI documentation routes
pub fn create_openapi_routes() -> Router<AppState> {
    Router::new().route(OPENAPI_PATH, get(|| async { Json(ApiDoc::openapi()) }))
}
