//! Webhook service - Inbound message to outbound reply pipeline
//!
//! Each delivery moves through `Received → Validated → reply ready → Sent`,
//! or stops at `Rejected` when the event carries nothing to answer. Send
//! failures are logged and reported in the outcome, never raised: whether
//! the reply went out does not affect acknowledging the delivery.

use std::{fmt, sync::Arc};

use domain::{InboundEvent, MalformedEvent, ValidatedEvent};
use tracing::{debug, error, info, instrument, warn};

use super::reply_formatter::to_provider_style;
use crate::ports::{MessageSenderPort, ResponseGenerator, SendError, SendReceipt};

/// Result of processing one webhook delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The event was not an answerable message; nothing was sent
    Rejected(MalformedEvent),
    /// The reply was accepted by the provider
    Sent(SendReceipt),
    /// The reply could not be delivered
    SendFailed(SendError),
}

impl DeliveryOutcome {
    /// Short label for logs and acknowledgement bodies
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rejected(_) => "rejected",
            Self::Sent(_) => "sent",
            Self::SendFailed(_) => "send_failed",
        }
    }

    pub const fn is_sent(&self) -> bool {
        matches!(self, Self::Sent(_))
    }
}

/// Orchestrates validation, reply generation and sending
pub struct WebhookService {
    sender: Arc<dyn MessageSenderPort>,
    generator: Arc<dyn ResponseGenerator>,
    provider_style: bool,
}

impl fmt::Debug for WebhookService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookService")
            .field("provider_style", &self.provider_style)
            .finish_non_exhaustive()
    }
}

impl WebhookService {
    /// Create a new webhook service
    pub fn new(sender: Arc<dyn MessageSenderPort>, generator: Arc<dyn ResponseGenerator>) -> Self {
        Self {
            sender,
            generator,
            provider_style: false,
        }
    }

    /// Run generated replies through [`to_provider_style`] before sending
    #[must_use]
    pub fn with_provider_style(mut self, enabled: bool) -> Self {
        self.provider_style = enabled;
        self
    }

    /// Build the reply text for an inbound message body
    pub fn compose_reply(&self, text: &str) -> String {
        let reply = self.generator.generate(text);
        if self.provider_style {
            to_provider_style(&reply)
        } else {
            reply
        }
    }

    /// Process one webhook delivery
    #[instrument(skip(self, event), fields(object = event.object_tag().unwrap_or("")))]
    pub async fn handle_event(&self, event: &InboundEvent) -> DeliveryOutcome {
        let validated = match event.validate() {
            Ok(validated) => validated,
            Err(reason) => {
                if reason == MalformedEvent::NoMessages {
                    // Status updates (sent/delivered/read) land here
                    debug!(reason = %reason, "Ignoring webhook event");
                } else {
                    warn!(reason = %reason, "Rejected malformed webhook event");
                }
                return DeliveryOutcome::Rejected(reason);
            },
        };

        self.reply(&validated).await
    }

    /// Generate and send the reply for an already validated event
    #[instrument(skip(self, event), fields(wa_id = %event.wa_id))]
    pub async fn reply(&self, event: &ValidatedEvent) -> DeliveryOutcome {
        info!(
            wa_id = %event.wa_id,
            name = event.profile_name.as_deref().unwrap_or(""),
            message_id = event.message_id.as_deref().unwrap_or(""),
            text_len = event.body.len(),
            "Processing WhatsApp text message"
        );

        let reply = self.compose_reply(&event.body);

        match self.sender.send_text(&event.wa_id, &reply).await {
            Ok(receipt) => {
                info!(
                    wa_id = %event.wa_id,
                    status = receipt.status,
                    "Reply sent"
                );
                DeliveryOutcome::Sent(receipt)
            },
            Err(SendError::Timeout) => {
                error!(wa_id = %event.wa_id, "Timeout occurred while sending reply");
                DeliveryOutcome::SendFailed(SendError::Timeout)
            },
            Err(err) => {
                error!(wa_id = %event.wa_id, error = %err, "Failed to send reply");
                DeliveryOutcome::SendFailed(err)
            },
        }
    }
}
