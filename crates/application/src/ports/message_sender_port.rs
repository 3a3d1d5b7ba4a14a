//! Outbound message port
//!
//! Abstracts the messaging provider's send call so the webhook pipeline can
//! be exercised without a network.

use async_trait::async_trait;
use domain::WaId;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an outbound message was not delivered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    /// The provider did not answer within the request timeout
    #[error("request timed out")]
    Timeout,

    /// Transport failure or non-2xx response
    #[error("request failed: {cause}")]
    RequestFailed { cause: String },
}

impl SendError {
    pub fn request_failed(cause: impl Into<String>) -> Self {
        Self::RequestFailed {
            cause: cause.into(),
        }
    }
}

/// Raw provider response to a successful send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendReceipt {
    /// HTTP status code
    pub status: u16,
    /// `content-type` response header, if any
    pub content_type: Option<String>,
    /// Response body as text
    pub body: String,
}

/// Port for sending a text reply to a recipient
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessageSenderPort: Send + Sync {
    /// Send `body` to `recipient`. Performs exactly one provider call.
    async fn send_text(&self, recipient: &WaId, body: &str) -> Result<SendReceipt, SendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_helper_sets_cause() {
        let err = SendError::request_failed("connection refused");
        assert_eq!(
            err,
            SendError::RequestFailed {
                cause: "connection refused".to_string()
            }
        );
        assert_eq!(err.to_string(), "request failed: connection refused");
    }

    #[test]
    fn timeout_display() {
        assert_eq!(SendError::Timeout.to_string(), "request timed out");
    }

    #[test]
    fn receipt_serializes() {
        let receipt = SendReceipt {
            status: 200,
            content_type: Some("application/json".to_string()),
            body: "{}".to_string(),
        };
        let json = serde_json::to_string(&receipt).unwrap();
        assert!(json.contains("\"status\":200"));
        assert!(json.contains("application/json"));
    }

    #[test]
    fn mock_sender_can_be_used_as_trait_object() {
        let mut mock = MockMessageSenderPort::new();
        mock.expect_send_text().returning(|_, _| Err(SendError::Timeout));

        let sender: &dyn MessageSenderPort = &mock;
        let recipient = WaId::new("15551234").unwrap();
        let result = tokio_test::block_on(sender.send_text(&recipient, "hi"));
        assert_eq!(result, Err(SendError::Timeout));
    }
}
