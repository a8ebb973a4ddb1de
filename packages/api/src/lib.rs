//! Client-side API for the echo endpoint.
//!
//! This crate contains the network seam shared by the UI targets:
//! - `EchoTransport` and the reqwest-backed `HttpTransport`
//! - `EchoConfig`, read from the environment
//! - `EchoClient`, the submit flow driving the display state

mod client;
mod config;
mod transport;

pub use client::EchoClient;
pub use config::{ConfigError, DEFAULT_ENDPOINT, EchoConfig};
pub use transport::{EchoTransport, HttpTransport, TransportError};

// Re-export core types for convenience
pub use echo_core::{DisplayState, Submission, SubmitError};
