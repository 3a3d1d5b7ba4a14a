//! WhatsApp client for sending messages
//!
//! Uses the Meta Graph API to send WhatsApp text messages.

use std::{fmt, time::Duration};

use reqwest::{Client, header::CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info, instrument};

/// Default Graph API host
pub const DEFAULT_BASE_URL: &str = "https://graph.facebook.com";

/// Default Graph API version
pub const DEFAULT_API_VERSION: &str = "v18.0";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// WhatsApp API errors
#[derive(Debug, Error)]
pub enum WhatsAppError {
    #[error("Request timed out")]
    Timeout,

    #[error("HTTP request failed: {cause}")]
    RequestFailed { cause: String },

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Missing configuration: {0}")]
    Configuration(String),

    #[error("Invalid recipient: {0:?}")]
    InvalidRecipient(String),
}

impl From<reqwest::Error> for WhatsAppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::RequestFailed {
                cause: err.to_string(),
            }
        }
    }
}

/// WhatsApp client configuration
#[derive(Clone)]
pub struct WhatsAppClientConfig {
    /// Meta Graph API access token
    pub access_token: String,
    /// Phone number ID from WhatsApp Business
    pub phone_number_id: String,
    /// API version (default: v18.0)
    pub api_version: String,
    /// Graph API host, overridable for tests and proxies
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for WhatsAppClientConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            phone_number_id: String::new(),
            api_version: DEFAULT_API_VERSION.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl fmt::Debug for WhatsAppClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WhatsAppClientConfig")
            .field("access_token", &"[REDACTED]")
            .field("phone_number_id", &self.phone_number_id)
            .field("api_version", &self.api_version)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Text message request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub messaging_product: String,
    pub recipient_type: String,
    pub to: String,
    #[serde(rename = "type")]
    pub msg_type: String,
    pub text: TextBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBody {
    pub preview_url: bool,
    pub body: String,
}

impl OutboundMessage {
    /// Plain text message without link preview
    pub fn text(to: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            messaging_product: "whatsapp".to_string(),
            recipient_type: "individual".to_string(),
            to: to.into(),
            msg_type: "text".to_string(),
            text: TextBody {
                preview_url: false,
                body: body.into(),
            },
        }
    }
}

/// Raw response of a successful send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl SendResponse {
    /// `messages[0].id` from the response body, if present
    pub fn message_id(&self) -> Option<String> {
        let parsed: SendMessageResponse = serde_json::from_str(&self.body).ok()?;
        parsed.messages.into_iter().next().map(|m| m.id)
    }
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    #[serde(default)]
    messages: Vec<MessageInfo>,
}

#[derive(Debug, Deserialize)]
struct MessageInfo {
    id: String,
}

/// API error response
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// WhatsApp client for the Meta Graph API
#[derive(Debug, Clone)]
pub struct WhatsAppClient {
    client: Client,
    config: WhatsAppClientConfig,
    messages_url: String,
}

impl WhatsAppClient {
    /// Create a new WhatsApp client
    pub fn new(config: WhatsAppClientConfig) -> Result<Self, WhatsAppError> {
        if config.access_token.trim().is_empty() {
            return Err(WhatsAppError::Configuration(
                "access_token is required".to_string(),
            ));
        }
        if config.phone_number_id.trim().is_empty() {
            return Err(WhatsAppError::Configuration(
                "phone_number_id is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| WhatsAppError::Configuration(format!("HTTP client: {e}")))?;

        let messages_url = format!(
            "{}/{}/{}/messages",
            config.base_url.trim_end_matches('/'),
            config.api_version,
            config.phone_number_id
        );

        Ok(Self {
            client,
            config,
            messages_url,
        })
    }

    /// Endpoint messages are posted to
    pub fn messages_url(&self) -> &str {
        &self.messages_url
    }

    pub const fn config(&self) -> &WhatsAppClientConfig {
        &self.config
    }

    /// Send a text message
    ///
    /// Makes exactly one request; nothing is retried.
    #[instrument(skip(self, message), fields(to = %to))]
    pub async fn send_text(&self, to: &str, message: &str) -> Result<SendResponse, WhatsAppError> {
        let to = to.trim();
        if to.is_empty() {
            return Err(WhatsAppError::InvalidRecipient(to.to_string()));
        }

        let request = OutboundMessage::text(to, message);

        debug!(message_len = message.len(), "Sending WhatsApp message");

        let response = match self
            .client
            .post(&self.messages_url)
            .bearer_auth(&self.config.access_token)
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                let err = WhatsAppError::from(e);
                match &err {
                    WhatsAppError::Timeout => error!("Timeout occurred while sending message"),
                    other => error!(error = %other, "Request failed due to"),
                }
                return Err(err);
            },
        };

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        let body = response.text().await.map_err(WhatsAppError::from)?;

        if status.is_success() {
            info!(
                status = status.as_u16(),
                content_type = content_type.as_deref().unwrap_or(""),
                body = %body,
                "WhatsApp API response"
            );
            Ok(SendResponse {
                status: status.as_u16(),
                content_type,
                body,
            })
        } else {
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown").to_string());
            error!(status = status.as_u16(), message = %message, "WhatsApp API rejected message");
            Err(WhatsAppError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
