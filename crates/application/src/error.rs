//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Schedule source does not exist
    #[error("Schedule source not found: {0}")]
    ScheduleSourceMissing(String),

    /// Schedule source exists but could not be read or parsed
    #[error("Schedule source error: {0}")]
    ScheduleSource(String),
}
