//! WhatsApp webhook handlers
//!
//! Handles the webhook verification handshake and incoming deliveries.
//! Every delivery with a JSON body is acknowledged with `200`, whatever
//! happens to the reply, so the provider does not redeliver it.

use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
    http::HeaderMap,
};
use domain::InboundEvent;
use integration_whatsapp::SIGNATURE_HEADER;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};
use utoipa::{IntoParams, ToSchema};

use crate::{error::ApiError, state::AppState};

/// Query parameters for webhook verification
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WebhookVerifyQuery {
    /// The mode (should be "subscribe")
    #[serde(rename = "hub.mode")]
    pub hub_mode: Option<String>,
    /// The verify token to validate
    #[serde(rename = "hub.verify_token")]
    pub hub_verify_token: Option<String>,
    /// The challenge to return on success
    #[serde(rename = "hub.challenge")]
    pub hub_challenge: Option<String>,
}

/// Acknowledgement returned for every accepted delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WebhookAck {
    pub status: String,
}

impl WebhookAck {
    fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// WhatsApp webhook verification (GET)
///
/// Meta sends a GET request to verify webhook ownership during setup.
/// We must verify the token and return the challenge.
#[utoipa::path(
    get,
    path = "/webhook",
    tag = "whatsapp",
    params(WebhookVerifyQuery),
    responses(
        (status = 200, description = "Challenge echoed back", body = String, content_type = "text/plain"),
        (status = 400, description = "Challenge missing", body = crate::error::ErrorResponse),
        (status = 403, description = "Mode or token mismatch, or no verify token configured", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, query))]
pub async fn verify_webhook(
    State(state): State<AppState>,
    Query(query): Query<WebhookVerifyQuery>,
) -> Result<String, ApiError> {
    let challenge = state.verifier.verify_subscription(
        query.hub_mode.as_deref(),
        query.hub_verify_token.as_deref(),
        query.hub_challenge.as_deref(),
    )?;

    debug!("WhatsApp webhook verified successfully");
    Ok(challenge)
}

/// WhatsApp webhook delivery handler (POST)
///
/// Receives inbound events from the WhatsApp Business API and replies to
/// text messages.
#[utoipa::path(
    post,
    path = "/webhook",
    tag = "whatsapp",
    request_body(content = String, description = "WhatsApp webhook event", content_type = "application/json"),
    responses(
        (status = 200, description = "Delivery acknowledged", body = WebhookAck),
        (status = 400, description = "Body is not JSON", body = crate::error::ErrorResponse),
        (status = 401, description = "Signature check failed", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, headers, body), fields(body_len = body.len()))]
pub async fn handle_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<WebhookAck>, ApiError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok());
    state.verifier.verify_payload(&body, signature).map_err(|e| {
        warn!(error = %e, "WhatsApp webhook signature verification failed");
        ApiError::from(e)
    })?;

    let value: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Webhook body is not valid JSON");
        ApiError::BadRequest(format!("Invalid JSON: {e}"))
    })?;

    // JSON of an unexpected shape is acknowledged like any other rejected event
    let event: InboundEvent = match serde_json::from_value(value) {
        Ok(event) => event,
        Err(e) => {
            warn!(error = %e, "Webhook body does not match the event shape");
            return Ok(Json(WebhookAck::ok()));
        },
    };

    let outcome = state.webhook_service.handle_event(&event).await;
    debug!(outcome = outcome.label(), "Webhook delivery processed");

    Ok(Json(WebhookAck::ok()))
}
