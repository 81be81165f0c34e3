//! Upstream prediction API client.

pub mod client;

pub use client::{ForwardError, UpstreamClient};
