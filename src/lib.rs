//! Chat UI Development Server
//!
//! A local HTTP front-end for the browser-based chat UI, built with Tokio
//! and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                CHAT UI SERVER                 │
//!                    │                                               │
//!   Browser ────────▶│  listener ──▶ dispatch ──┬─▶ preflight (200) │
//!                    │                          ├─▶ /api/chat ──────┼──▶ Upstream
//!                    │                          │     proxy          │    prediction
//!                    │                          └─▶ static files     │    API
//!   Browser ◀────────│◀── CORS header injector ◀── response ◀───────┼────
//!                    │                                               │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! Every response that leaves the server, including errors and static file
//! responses, carries the CORS headers so the browser will accept the
//! cross-origin call.

pub mod config;
pub mod http;
pub mod upstream;

pub use config::ServerConfig;
pub use http::HttpServer;
