//! WhatsApp relay HTTP presentation layer
//!
//! This crate provides the HTTP API: the WhatsApp webhook, schedule lookup,
//! health check and the OpenAPI document.

pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_app, create_router};
pub use state::AppState;
