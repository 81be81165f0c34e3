//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum router with a catch-all route
//! - Dispatch on (method, path): preflight, chat proxy, or static files
//! - Read the inbound body and forward it to the upstream client
//! - Relay upstream responses byte-for-byte
//! - Wire up middleware (tracing, CORS injection)

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tower::util::ServiceExt;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::http::cors::cors_middleware;
use crate::upstream::{ForwardError, UpstreamClient};

/// Path of the proxied chat endpoint.
pub const CHAT_PATH: &str = "/api/chat";

/// Application state injected into handlers.
///
/// Nothing in here is mutable across requests: the config is read-only and
/// both the upstream client and the static delegate are cheap clones.
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub upstream: UpstreamClient,
    pub static_files: ServeDir,
}

/// HTTP server for the chat UI front-end.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let upstream = UpstreamClient::new(&config)?;
        let static_files =
            ServeDir::new(&config.static_root).append_index_html_on_directories(true);

        let state = AppState {
            config,
            upstream,
            static_files,
        };

        Ok(Self {
            router: Self::build_router(state),
        })
    }

    /// Build the Axum router.
    ///
    /// A single catch-all route feeds `dispatch`; the CORS layer is added
    /// last so it wraps every response path, including static files and
    /// errors.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(dispatch))
            .route("/", any(dispatch))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
            .layer(axum::middleware::from_fn(cors_middleware))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

/// Select exactly one handling path per request.
///
/// - OPTIONS, any path: preflight acknowledgment
/// - POST `/api/chat`: forward to the upstream prediction API
/// - POST elsewhere: 404
/// - everything else: static file delegate
async fn dispatch(State(state): State<AppState>, request: Request) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    match method {
        Method::OPTIONS => preflight(),
        Method::POST if path == CHAT_PATH => chat_proxy(state, request).await,
        Method::POST => {
            tracing::warn!(path = %path, "No proxy route for POST path");
            StatusCode::NOT_FOUND.into_response()
        }
        _ => serve_static(state, request).await,
    }
}

/// Acknowledge a CORS preflight: 200, empty body.
fn preflight() -> Response {
    StatusCode::OK.into_response()
}

/// Forward a chat request to the upstream API and relay the outcome.
async fn chat_proxy(state: AppState, request: Request) -> Response {
    match forward_chat(&state, request).await {
        Ok(response) => response,
        Err(err) => {
            tracing::error!(error = %err, "Chat proxy request failed");
            err.into_response()
        }
    }
}

async fn forward_chat(state: &AppState, request: Request) -> Result<Response, ForwardError> {
    let (parts, body) = request.into_parts();

    let declared = declared_content_length(&parts.headers)?;
    if declared > state.config.max_body_bytes {
        return Err(ForwardError::Internal(format!(
            "request body of {} bytes exceeds the {} byte limit",
            declared, state.config.max_body_bytes
        )));
    }

    // Read exactly the declared number of bytes before forwarding.
    let body = axum::body::to_bytes(body, declared)
        .await
        .map_err(|err| ForwardError::Internal(err.to_string()))?;

    tracing::debug!(bytes = body.len(), "Forwarding chat request upstream");

    let upstream_body = state.upstream.predict(body).await?;

    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        upstream_body,
    )
        .into_response())
}

/// Extract and parse the `Content-Length` header.
///
/// The proxy reads the body by declared length, so a missing or malformed
/// header is a framing failure.
fn declared_content_length(headers: &HeaderMap) -> Result<usize, ForwardError> {
    let value = headers
        .get(header::CONTENT_LENGTH)
        .ok_or_else(|| ForwardError::Internal("missing Content-Length header".to_string()))?;

    value
        .to_str()
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .ok_or_else(|| ForwardError::Internal("invalid Content-Length header".to_string()))
}

/// Hand the request to the static file delegate.
async fn serve_static(state: AppState, request: Request<Body>) -> Response {
    match state.static_files.clone().oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(infallible) => match infallible {},
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
