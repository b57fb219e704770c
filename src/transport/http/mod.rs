//! HTTP transport implementation
//!
//! This module provides the transport that talks to the lite-agent server over
//! a pooled `reqwest` client.

mod config;
mod lifecycle;
mod transport;

// Re-export public types
pub use config::{
    ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, ENV_TIMEOUT_SECS,
    ENV_URL, ENV_VERIFY_TLS,
};
pub use transport::HttpTransport;
