//! Logging initialization
//!
//! Installs the global `tracing` subscriber used by the server binary.

mod logging;

pub use logging::{LogFormat, LoggingConfig, TelemetryError, init_tracing};
