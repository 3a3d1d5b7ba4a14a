//! WhatsApp configuration: Graph API credentials and webhook secrets.

use std::time::Duration;

use integration_whatsapp::{WebhookConfig, WhatsAppClientConfig};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// WhatsApp integration configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WhatsAppConfig {
    /// Meta Graph API access token (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub access_token: Option<SecretString>,

    /// Phone number ID from WhatsApp Business
    #[serde(default)]
    pub phone_number_id: Option<String>,

    /// API version (default: v18.0)
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Verify token for the webhook subscription handshake
    #[serde(default)]
    pub verify_token: Option<String>,

    /// App secret for webhook signature verification (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub app_secret: Option<SecretString>,

    /// Graph API host
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Outbound request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Rewrite replies into WhatsApp markup before sending
    #[serde(default)]
    pub provider_style: bool,
}

impl std::fmt::Debug for WhatsAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhatsAppConfig")
            .field(
                "access_token",
                &if self.access_token.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("phone_number_id", &self.phone_number_id)
            .field("api_version", &self.api_version)
            .field(
                "verify_token",
                &if self.verify_token.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field(
                "app_secret",
                &if self.app_secret.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("base_url", &self.base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("provider_style", &self.provider_style)
            .finish()
    }
}

fn default_api_version() -> String {
    integration_whatsapp::DEFAULT_API_VERSION.to_string()
}

fn default_base_url() -> String {
    integration_whatsapp::DEFAULT_BASE_URL.to_string()
}

const fn default_request_timeout() -> u64 {
    10
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            phone_number_id: None,
            api_version: default_api_version(),
            verify_token: None,
            app_secret: None,
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
            provider_style: false,
        }
    }
}

impl WhatsAppConfig {
    /// Get the access token as a string reference (for API calls)
    #[must_use]
    pub fn access_token_str(&self) -> Option<&str> {
        self.access_token.as_ref().map(ExposeSecret::expose_secret)
    }

    /// Get the app secret as a string reference (for signature verification)
    #[must_use]
    pub fn app_secret_str(&self) -> Option<&str> {
        self.app_secret.as_ref().map(ExposeSecret::expose_secret)
    }

    /// Client settings, or `None` when the token or phone number id is missing
    pub fn client_config(&self) -> Option<WhatsAppClientConfig> {
        let access_token = self.access_token_str().filter(|t| !t.trim().is_empty())?;
        let phone_number_id = self
            .phone_number_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())?;

        Some(WhatsAppClientConfig {
            access_token: access_token.to_string(),
            phone_number_id: phone_number_id.to_string(),
            api_version: self.api_version.clone(),
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.request_timeout_secs),
        })
    }

    pub fn webhook_config(&self) -> WebhookConfig {
        WebhookConfig {
            verify_token: self.verify_token.clone(),
            app_secret: self.app_secret_str().map(ToString::to_string),
        }
    }
}
