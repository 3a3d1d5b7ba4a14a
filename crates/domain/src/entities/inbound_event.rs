//! Inbound webhook event
//!
//! Models the WhatsApp Business webhook payload. Every field is optional so
//! that any delivery the provider sends (messages, status updates, partial
//! test payloads) deserializes; whether an event can be answered is decided
//! by [`InboundEvent::validate`]. Fields the reply path never reads are kept
//! as raw JSON values so an unexpected type there cannot reject the event.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::value_objects::WaId;

/// Top-level webhook delivery
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InboundEvent {
    /// Object tag, `whatsapp_business_account` for real deliveries
    pub object: Option<Value>,
    pub entry: Option<Vec<InboundEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InboundEntry {
    pub id: Option<Value>,
    pub changes: Option<Vec<InboundChange>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InboundChange {
    pub field: Option<Value>,
    pub value: Option<InboundValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InboundValue {
    pub messaging_product: Option<Value>,
    pub contacts: Option<Vec<InboundContact>>,
    /// Absent on status-update deliveries
    pub messages: Option<Vec<InboundMessage>>,
    pub statuses: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InboundContact {
    pub wa_id: Option<String>,
    pub profile: Option<ContactProfile>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactProfile {
    pub name: Option<Value>,
}

/// A single received message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InboundMessage {
    pub from: Option<Value>,
    pub id: Option<Value>,
    pub timestamp: Option<Value>,
    #[serde(rename = "type")]
    pub kind: Option<Value>,
    pub text: Option<InboundText>,
    /// Media and interactive payloads we do not model
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InboundMessage {
    /// True when the message object carries no fields at all (`{}`)
    pub fn is_empty(&self) -> bool {
        self.from.is_none()
            && self.id.is_none()
            && self.timestamp.is_none()
            && self.kind.is_none()
            && self.text.is_none()
            && self.extra.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InboundText {
    pub body: Option<String>,
}

/// Why an inbound event cannot be answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedEvent {
    #[error("event has no entry")]
    MissingEntry,

    #[error("first entry has no changes")]
    MissingChange,

    #[error("first change has no value")]
    MissingValue,

    /// Typical for status updates (sent, delivered, read)
    #[error("event carries no message")]
    NoMessages,

    #[error("event has no contact with a wa_id")]
    MissingContact,

    #[error("message has no text body")]
    MissingText,
}

/// An inbound event that passed validation and can be replied to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEvent {
    pub wa_id: WaId,
    pub profile_name: Option<String>,
    pub message_id: Option<String>,
    pub body: String,
}

impl InboundEvent {
    /// `object` when it is a string
    pub fn object_tag(&self) -> Option<&str> {
        self.object.as_ref().and_then(Value::as_str)
    }

    /// `entry[0].changes[0].value`
    pub fn first_value(&self) -> Result<&InboundValue, MalformedEvent> {
        let entry = self
            .entry
            .as_deref()
            .and_then(<[_]>::first)
            .ok_or(MalformedEvent::MissingEntry)?;
        let change = entry
            .changes
            .as_deref()
            .and_then(<[_]>::first)
            .ok_or(MalformedEvent::MissingChange)?;
        change.value.as_ref().ok_or(MalformedEvent::MissingValue)
    }

    /// `entry[0].changes[0].value.messages[0]`, rejecting an empty object
    pub fn first_message(&self) -> Result<&InboundMessage, MalformedEvent> {
        self.first_value()?
            .messages
            .as_deref()
            .and_then(<[_]>::first)
            .filter(|message| !message.is_empty())
            .ok_or(MalformedEvent::NoMessages)
    }

    /// Check that the event carries a message at all
    pub fn is_valid_message(&self) -> bool {
        self.first_message().is_ok()
    }

    /// Extract the sender and text of the first message
    pub fn validate(&self) -> Result<ValidatedEvent, MalformedEvent> {
        let message = self.first_message()?;
        let value = self.first_value()?;

        let contact = value
            .contacts
            .as_deref()
            .and_then(<[_]>::first)
            .ok_or(MalformedEvent::MissingContact)?;
        let wa_id = contact
            .wa_id
            .as_deref()
            .and_then(|id| WaId::new(id).ok())
            .ok_or(MalformedEvent::MissingContact)?;

        let body = message
            .text
            .as_ref()
            .and_then(|text| text.body.clone())
            .ok_or(MalformedEvent::MissingText)?;

        Ok(ValidatedEvent {
            wa_id,
            profile_name: contact
                .profile
                .as_ref()
                .and_then(|p| p.name.as_ref())
                .and_then(Value::as_str)
                .map(ToString::to_string),
            message_id: message
                .id
                .as_ref()
                .and_then(Value::as_str)
                .map(ToString::to_string),
            body,
        })
    }

    pub fn validated(&self) -> Option<ValidatedEvent> {
        self.validate().ok()
    }
}

/// Free-function form of [`InboundEvent::is_valid_message`]
pub fn is_valid_message(event: &InboundEvent) -> bool {
    event.is_valid_message()
}
