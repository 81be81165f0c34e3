//! Server configuration.
//!
//! All values are fixed once at startup: the config is constructed in `main`,
//! handed to the server, and never mutated afterward. There is no config
//! file and no environment lookup.

use std::path::PathBuf;
use std::time::Duration;

/// Default listen port when no CLI argument is given.
pub const DEFAULT_PORT: u16 = 8080;

/// The fixed Flowise prediction endpoint that chat requests are forwarded to.
pub const UPSTREAM_URL: &str =
    "https://app.c1elly.ai/api/v1/prediction/5f1fa57c-e6fd-463c-ac6e-c73fd5fb578b";

/// Immutable runtime configuration for the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on.
    pub port: u16,

    /// Upstream prediction API endpoint.
    pub upstream_url: String,

    /// Total timeout for one upstream exchange.
    pub upstream_timeout: Duration,

    /// Directory the static file delegate serves from.
    pub static_root: PathBuf,

    /// Maximum request body size accepted for proxying.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            upstream_url: UPSTREAM_URL.to_string(),
            upstream_timeout: Duration::from_secs(60),
            static_root: PathBuf::from("."),
            max_body_bytes: 2 * 1024 * 1024, // 2MB
        }
    }
}

impl ServerConfig {
    /// Address string to bind the listener to.
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
