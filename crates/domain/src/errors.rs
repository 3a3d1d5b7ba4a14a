//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Recipient identifier is empty or malformed
    #[error("Invalid recipient id: {0}")]
    InvalidRecipient(String),
}
