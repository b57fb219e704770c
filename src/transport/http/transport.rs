//! HTTP transport backed by a shared `reqwest` connection pool

use std::sync::atomic::AtomicBool;

use parking_lot::RwLock;
use reqwest::{Client, Method, Response};

use crate::Transport;
use crate::error::{LiteAgentError, Result};

use super::config::ClientConfig;

/// HTTP transport for the lite-agent server
///
/// Holds at most one connection pool. The pool is created by `start()` and
/// released by `close()` only when this transport built it; a pool handed in
/// through [`HttpTransport::with_client`] is left to its owner.
pub struct HttpTransport {
    pub(super) config: ClientConfig,
    pub(super) client: RwLock<Option<Client>>,
    pub(super) owner: AtomicBool,
}

impl HttpTransport {
    /// Create a transport; no connection pool exists until `start()`
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            client: RwLock::new(None),
            owner: AtomicBool::new(false),
        }
    }

    /// Create a transport around an existing connection pool
    ///
    /// The transport is ready immediately and `close()` never releases `client`.
    #[must_use]
    pub fn with_client(config: ClientConfig, client: Client) -> Self {
        Self {
            config,
            client: RwLock::new(Some(client)),
            owner: AtomicBool::new(false),
        }
    }

    /// Configuration this transport was built from
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Handle to the live connection pool
    ///
    /// # Errors
    /// Returns `NotInitialized` before `start()` or after `close()`
    pub fn client(&self) -> Result<Client> {
        self.client
            .read()
            .as_ref()
            .cloned()
            .ok_or(LiteAgentError::NotInitialized)
    }
}

impl Transport for HttpTransport {
    fn start(&self) -> Result<()> {
        self.start_impl()
    }

    fn close(&self) {
        self.close_impl();
    }

    fn is_ready(&self) -> bool {
        self.client.read().is_some()
    }

    async fn request(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&serde_json::Value>,
    ) -> Result<Response> {
        // Clone the handle out so no lock is held across the await
        let client = self.client()?;
        let url = self.config.endpoint(segments)?;

        log::debug!("{method} {url}");

        let mut builder = client.request(method, url);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        Ok(builder.send().await?)
    }
}
