//! API error handling
//!
//! Maps request and verification failures to JSON error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use integration_whatsapp::VerificationError;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl ApiError {
    const fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            Self::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "unauthorized"),
            Self::Forbidden(_) => (StatusCode::FORBIDDEN, "forbidden"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = match self {
            Self::BadRequest(msg) | Self::Unauthorized(msg) | Self::Forbidden(msg) => msg,
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<VerificationError> for ApiError {
    fn from(err: VerificationError) -> Self {
        match err {
            // An unconfigured verify token never matches
            VerificationError::NotConfigured | VerificationError::TokenMismatch => {
                Self::Forbidden(err.to_string())
            },
            VerificationError::MissingChallenge => Self::BadRequest(err.to_string()),
            VerificationError::MissingSignature | VerificationError::InvalidSignature => {
                Self::Unauthorized(err.to_string())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_bad_request_message() {
        let err = ApiError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn api_error_forbidden_message() {
        let err = ApiError::Forbidden("token mismatch".to_string());
        assert_eq!(err.to_string(), "Forbidden: token mismatch");
    }

    #[test]
    fn api_error_statuses() {
        assert_eq!(
            ApiError::Unauthorized(String::new()).into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Forbidden(String::new()).into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::BadRequest(String::new()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn error_response_serialization() {
        let resp = ErrorResponse {
            error: "Bad request".to_string(),
            code: "bad_request".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("bad_request"));
    }

    #[test]
    fn verification_errors_map_to_statuses() {
        let cases = [
            (VerificationError::NotConfigured, StatusCode::FORBIDDEN),
            (VerificationError::TokenMismatch, StatusCode::FORBIDDEN),
            (VerificationError::MissingChallenge, StatusCode::BAD_REQUEST),
            (VerificationError::MissingSignature, StatusCode::UNAUTHORIZED),
            (VerificationError::InvalidSignature, StatusCode::UNAUTHORIZED),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status, "{err:?}");
        }
    }
}
