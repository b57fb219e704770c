//! Transport layer for communicating with the lite-agent server
//!
//! This module provides the transport abstraction and the HTTP implementation
//! the protocol client is built on. The transport owns the connection pool and
//! surfaces connectivity failures; it never interprets response statuses.

pub mod http;

use reqwest::{Method, Response};

use crate::error::Result;

/// Transport trait for issuing requests to the server
///
/// All methods take `&self` so one transport can serve many concurrent
/// operations.
pub trait Transport: Send + Sync {
    /// Create the underlying connection pool
    ///
    /// Calling this while already started is a no-op.
    ///
    /// # Errors
    /// Returns error if the pool cannot be built from the configuration
    fn start(&self) -> Result<()>;

    /// Release the connection pool if this transport created it
    ///
    /// Idempotent.
    fn close(&self);

    /// Check if the transport can issue requests
    fn is_ready(&self) -> bool;

    /// Issue a request
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `segments` - Path segments appended to the base URL, each percent-encoded as one segment
    /// * `body` - Optional JSON body
    ///
    /// # Errors
    /// Returns `NotInitialized` before `start()` / after `close()`, and
    /// `Transport` for connection, DNS or timeout failures. Non-2xx responses
    /// are returned as `Ok`.
    fn request(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&serde_json::Value>,
    ) -> impl std::future::Future<Output = Result<Response>> + Send;
}

pub use http::{ClientConfig, ClientConfigBuilder, HttpTransport};
