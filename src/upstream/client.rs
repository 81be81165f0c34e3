//! Client for the upstream prediction API.
//!
//! # Responsibilities
//! - Issue a single POST per inbound chat request (no retries)
//! - Bound the full exchange with the configured timeout
//! - Classify failures into the closed set the error mapper handles
//!
//! # Design Decisions
//! - The body is forwarded verbatim; the client never parses or
//!   re-serializes it, and never assumes it is valid JSON
//! - Connect, DNS, and timeout failures are "unavailable"; everything
//!   else lands in the internal bucket

use bytes::Bytes;
use reqwest::{header, StatusCode};
use thiserror::Error;

use crate::config::ServerConfig;

/// Failure classification for one forwarded chat request.
///
/// This is a closed set: the error mapper in `http::error` matches it
/// exhaustively to produce the response status and payload.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// Upstream answered, but with a non-success status.
    #[error("HTTP Error {status}")]
    UpstreamStatus {
        status: StatusCode,
        /// Upstream response body, lossy-decoded as UTF-8.
        body: String,
    },

    /// Upstream could not be reached: connection refused, DNS failure,
    /// or timeout expiry.
    #[error("Service unavailable")]
    Unavailable(String),

    /// Anything else: framing errors, I/O errors, unexpected failures.
    #[error("Internal server error")]
    Internal(String),
}

/// Client holding the connection pool and fixed endpoint for the
/// upstream prediction API.
#[derive(Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    endpoint: String,
}

impl UpstreamClient {
    /// Build a client from the server configuration.
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.upstream_url.clone(),
        })
    }

    /// Forward the given bytes to the prediction endpoint and return the
    /// response body on success.
    ///
    /// Exactly one round trip is made per call.
    pub async fn predict(&self, body: Bytes) -> Result<Bytes, ForwardError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(classify_transport_error)?;

        if !status.is_success() {
            return Err(ForwardError::UpstreamStatus {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        Ok(bytes)
    }
}

/// Map a transport-level reqwest failure onto the closed failure set.
fn classify_transport_error(err: reqwest::Error) -> ForwardError {
    if err.is_timeout() || err.is_connect() {
        ForwardError::Unavailable(err.to_string())
    } else {
        ForwardError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_display_includes_status_and_reason() {
        let err = ForwardError::UpstreamStatus {
            status: StatusCode::TOO_MANY_REQUESTS,
            body: "{\"msg\":\"rate limited\"}".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP Error 429 Too Many Requests");
    }

    #[test]
    fn test_fixed_error_messages() {
        let unavailable = ForwardError::Unavailable("connection refused".into());
        assert_eq!(unavailable.to_string(), "Service unavailable");

        let internal = ForwardError::Internal("missing Content-Length".into());
        assert_eq!(internal.to_string(), "Internal server error");
    }
}
