//! WhatsApp webhook verification
//!
//! Answers the subscription handshake Meta performs when a webhook URL is
//! registered, and checks the `X-Hub-Signature-256` header on deliveries.

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;
use tracing::{debug, warn};

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the payload signature
pub const SIGNATURE_HEADER: &str = "x-hub-signature-256";

const SIGNATURE_PREFIX: &str = "sha256=";

/// Webhook configuration
#[derive(Clone, Default)]
pub struct WebhookConfig {
    /// Verify token for webhook setup
    pub verify_token: Option<String>,
    /// App secret for signature verification; unset disables the check
    pub app_secret: Option<String>,
}

impl fmt::Debug for WebhookConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookConfig")
            .field("verify_token", &self.verify_token.as_ref().map(|_| "[REDACTED]"))
            .field("app_secret", &self.app_secret.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Why a verification or signature check failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VerificationError {
    #[error("webhook verify token is not configured")]
    NotConfigured,

    #[error("verification mode or token mismatch")]
    TokenMismatch,

    #[error("verification challenge missing")]
    MissingChallenge,

    #[error("signature header missing")]
    MissingSignature,

    #[error("invalid signature")]
    InvalidSignature,
}

/// Checks subscription handshakes and delivery signatures
#[derive(Debug, Clone, Default)]
pub struct WebhookVerifier {
    config: WebhookConfig,
}

impl WebhookVerifier {
    pub fn new(config: WebhookConfig) -> Self {
        // Blank values count as unset
        let config = WebhookConfig {
            verify_token: config.verify_token.filter(|t| !t.trim().is_empty()),
            app_secret: config.app_secret.filter(|s| !s.trim().is_empty()),
        };
        Self { config }
    }

    pub const fn is_configured(&self) -> bool {
        self.config.verify_token.is_some()
    }

    pub const fn requires_signature(&self) -> bool {
        self.config.app_secret.is_some()
    }

    /// Answer the `hub.*` subscription handshake
    ///
    /// Returns the challenge to echo back when `mode` is `subscribe` and
    /// `token` equals the configured verify token.
    pub fn verify_subscription(
        &self,
        mode: Option<&str>,
        token: Option<&str>,
        challenge: Option<&str>,
    ) -> Result<String, VerificationError> {
        let Some(expected) = self.config.verify_token.as_deref() else {
            warn!("Webhook verification requested but no verify token is configured");
            return Err(VerificationError::NotConfigured);
        };

        if mode != Some("subscribe") || token != Some(expected) {
            warn!(mode = mode.unwrap_or(""), "VERIFICATION_FAILED");
            return Err(VerificationError::TokenMismatch);
        }

        let challenge = challenge.ok_or_else(|| {
            warn!("Webhook verification request without challenge");
            VerificationError::MissingChallenge
        })?;

        debug!("WEBHOOK_VERIFIED");
        Ok(challenge.to_string())
    }

    /// Check the signature header of a delivery
    ///
    /// Always passes when no app secret is configured.
    pub fn verify_payload(
        &self,
        payload: &[u8],
        signature: Option<&str>,
    ) -> Result<(), VerificationError> {
        let Some(secret) = self.config.app_secret.as_deref() else {
            return Ok(());
        };
        let signature = signature.ok_or(VerificationError::MissingSignature)?;

        if verify_signature(payload, signature, secret) {
            Ok(())
        } else {
            Err(VerificationError::InvalidSignature)
        }
    }
}

/// Verify a `sha256=<hex>` HMAC-SHA256 signature of `payload`
pub fn verify_signature(payload: &[u8], signature: &str, secret: &str) -> bool {
    let Some(signature_hex) = signature.strip_prefix(SIGNATURE_PREFIX) else {
        warn!("Invalid signature format");
        return false;
    };

    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        warn!("Failed to create HMAC");
        return false;
    };

    mac.update(payload);

    let Ok(expected) = hex::decode(signature_hex) else {
        warn!("Failed to decode signature hex");
        return false;
    };

    mac.verify_slice(&expected).is_ok()
}

/// Compute the `sha256=<hex>` signature header value for `payload`
pub fn sign_payload(payload: &[u8], secret: &str) -> String {
    // HMAC accepts keys of any length
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return String::new();
    };
    mac.update(payload);
    format!("{SIGNATURE_PREFIX}{}", hex::encode(mac.finalize().into_bytes()))
}
