//! WhatsApp sender adapter
//!
//! Implements the `MessageSenderPort` trait using the WhatsApp integration crate.

use application::ports::{MessageSenderPort, SendError, SendReceipt};
use async_trait::async_trait;
use domain::WaId;
use integration_whatsapp::{SendResponse, WhatsAppClient, WhatsAppClientConfig, WhatsAppError};
use tracing::{debug, instrument, warn};

/// Adapter that implements `MessageSenderPort` using `WhatsAppClient`
pub struct WhatsAppSenderAdapter {
    /// The underlying WhatsApp client
    client: WhatsAppClient,
}

impl WhatsAppSenderAdapter {
    /// Create a new WhatsApp sender adapter
    ///
    /// # Errors
    /// Returns an error if the client configuration is invalid.
    pub fn new(config: WhatsAppClientConfig) -> Result<Self, WhatsAppError> {
        Ok(Self {
            client: WhatsAppClient::new(config)?,
        })
    }

    #[must_use]
    pub const fn client(&self) -> &WhatsAppClient {
        &self.client
    }
}

impl std::fmt::Debug for WhatsAppSenderAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhatsAppSenderAdapter")
            .field("messages_url", &self.client.messages_url())
            .finish_non_exhaustive()
    }
}

/// Convert a client error into the port's error type
fn map_send_error(err: WhatsAppError) -> SendError {
    match err {
        WhatsAppError::Timeout => SendError::Timeout,
        WhatsAppError::RequestFailed { cause } => SendError::RequestFailed { cause },
        WhatsAppError::Api { status, message } => {
            SendError::request_failed(format!("status {status}: {message}"))
        },
        other => SendError::request_failed(other.to_string()),
    }
}

fn to_receipt(response: SendResponse) -> SendReceipt {
    SendReceipt {
        status: response.status,
        content_type: response.content_type,
        body: response.body,
    }
}

#[async_trait]
impl MessageSenderPort for WhatsAppSenderAdapter {
    #[instrument(skip(self, body), fields(recipient = %recipient))]
    async fn send_text(&self, recipient: &WaId, body: &str) -> Result<SendReceipt, SendError> {
        let response = self
            .client
            .send_text(recipient.as_str(), body)
            .await
            .map_err(map_send_error)?;

        if let Some(message_id) = response.message_id() {
            debug!(message_id = %message_id, "WhatsApp text message sent");
        }
        Ok(to_receipt(response))
    }
}

/// Sender used when WhatsApp credentials are not configured
///
/// Every send fails without a network call so that webhook deliveries are
/// still acknowledged.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledSender;

/// Failure cause reported by [`DisabledSender`]
pub const SENDER_NOT_CONFIGURED: &str = "sender not configured";

#[async_trait]
impl MessageSenderPort for DisabledSender {
    async fn send_text(&self, recipient: &WaId, _body: &str) -> Result<SendReceipt, SendError> {
        warn!(recipient = %recipient, "Sending is disabled, reply dropped");
        Err(SendError::request_failed(SENDER_NOT_CONFIGURED))
    }
}
