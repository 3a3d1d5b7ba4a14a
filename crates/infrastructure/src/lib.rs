//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the WhatsApp sender
//! and the CSV schedule source. Also owns configuration loading and logging
//! setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, ScheduleConfig, ServerConfig, WhatsAppConfig};
pub use telemetry::{LogFormat, LoggingConfig, TelemetryError, init_tracing};
