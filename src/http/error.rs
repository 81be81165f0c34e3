//! Mapping of forwarding failures onto HTTP responses.
//!
//! Every failure on the chat endpoint becomes a well-formed JSON body, so
//! the browser-side UI can render an error message instead of choking on a
//! raw network failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::upstream::ForwardError;

/// JSON body returned on every failure path of the chat endpoint.
///
/// `details` is treated as an opaque string; when the upstream body is not
/// JSON the payload is still valid JSON.
#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub error: String,
    pub details: String,
}

impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        let (status, details) = match &self {
            ForwardError::UpstreamStatus { status, body } => (*status, body.clone()),
            ForwardError::Unavailable(cause) => (StatusCode::SERVICE_UNAVAILABLE, cause.clone()),
            ForwardError::Internal(cause) => (StatusCode::INTERNAL_SERVER_ERROR, cause.clone()),
        };

        let payload = ErrorPayload {
            error: self.to_string(),
            details,
        };

        (status, Json(payload)).into_response()
    }
}
