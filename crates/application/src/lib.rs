//! Application layer - Use cases and orchestration
//!
//! Defines the ports the relay depends on (outbound sender, schedule source,
//! response generator) and the services that orchestrate them: the webhook
//! reply pipeline and the schedule lookup.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
