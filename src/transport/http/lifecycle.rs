//! Lifecycle management for the HTTP transport (start, close)

use std::sync::atomic::Ordering;

use reqwest::Client;

use crate::error::{LiteAgentError, Result};

use super::transport::HttpTransport;

impl HttpTransport {
    /// Build the connection pool from the configuration
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the TLS backend or pool cannot be initialised
    pub(super) fn start_impl(&self) -> Result<()> {
        let mut slot = self.client.write();
        if slot.is_some() {
            return Ok(());
        }

        let client = Client::builder()
            .timeout(self.config.timeout())
            .danger_accept_invalid_certs(!self.config.verify_tls())
            .build()
            .map_err(|e| LiteAgentError::invalid_config(format!("Failed to build HTTP client: {e}")))?;

        log::debug!(
            "HTTP transport started for {} (timeout {:?}, verify TLS: {})",
            self.config.base_url(),
            self.config.timeout(),
            self.config.verify_tls()
        );

        *slot = Some(client);
        self.owner.store(true, Ordering::SeqCst);
        Ok(())
    }

    /// Release the connection pool if this transport created it
    pub(super) fn close_impl(&self) {
        // Ownership is only read or changed while holding the slot lock
        let mut slot = self.client.write();
        if !self.owner.swap(false, Ordering::SeqCst) {
            return;
        }

        // Streams still in flight keep their own connection alive until dropped
        if slot.take().is_some() {
            log::debug!("HTTP transport closed for {}", self.config.base_url());
        }
    }
}
