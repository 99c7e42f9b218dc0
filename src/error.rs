//! Relay error types with wire code and HTTP status mapping.
//!
//! [`RelayError`] is the central error type for the gateway. Protocol
//! errors are reported back over the socket as an `error` envelope with a
//! numeric code; the same type maps onto HTTP responses for the REST
//! surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::relay::events::{ErrorPayload, OutboundEvent};

/// Structured JSON error response body for the REST surface.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
}

/// Server-side error enum.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status               |
/// |-----------|------------|---------------------------|
/// | 1000–1999 | Protocol   | 400 Bad Request           |
/// | 3000–3999 | Server     | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// An inbound frame was not a valid event envelope.
    #[error("malformed event: {0}")]
    MalformedEvent(String),

    /// The envelope parsed but names an event the relay does not handle.
    #[error("unknown event: {0}")]
    UnknownEvent(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RelayError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::MalformedEvent(_) => 1001,
            Self::UnknownEvent(_) => 1002,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedEvent(_) | Self::UnknownEvent(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into the outbound `error` envelope sent back
    /// over the socket.
    #[must_use]
    pub fn to_event(&self) -> OutboundEvent {
        OutboundEvent::Error(ErrorPayload {
            code: self.error_code(),
            message: self.to_string(),
        })
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
