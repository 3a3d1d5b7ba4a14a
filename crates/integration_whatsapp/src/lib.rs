//! WhatsApp integration
//!
//! Sends text messages through the Meta Graph API and handles the webhook
//! verification handshake and payload signatures.

pub mod client;
pub mod webhook;

pub use client::{
    DEFAULT_API_VERSION, DEFAULT_BASE_URL, OutboundMessage, SendResponse, TextBody, WhatsAppClient,
    WhatsAppClientConfig, WhatsAppError,
};
pub use webhook::{
    SIGNATURE_HEADER, VerificationError, WebhookConfig, WebhookVerifier, sign_payload,
    verify_signature,
};
