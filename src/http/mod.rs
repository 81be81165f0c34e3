//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, method/path dispatch)
//!     → [preflight | /api/chat proxy | static file delegate]
//!     → error.rs (failures become {error, details} JSON)
//!     → cors.rs (CORS headers on every response)
//!     → Send to client
//! ```

pub mod cors;
pub mod error;
pub mod server;

pub use error::ErrorPayload;
pub use server::HttpServer;
