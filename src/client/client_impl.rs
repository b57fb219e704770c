//! `LiteAgentClient` implementation
//!
//! This module contains the constructors, lifecycle and request/response
//! operations of `LiteAgentClient`.

use std::sync::Arc;

use reqwest::Method;

use crate::error::Result;
use crate::transport::{ClientConfig, HttpTransport, Transport};
use crate::types::requests::SpawnRequest;
use crate::types::responses::{
    HealthResponse, ListAgentsResponse, ListSessionsResponse, SessionStatusResponse,
    SpawnResponse,
};

use super::response::{check_status, parse_json};
use super::{ClientGuard, LiteAgentClient};

impl LiteAgentClient {
    /// Create a client for `base_url` with default timeout and TLS verification
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the URL is not a valid http(s) base URL
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self::with_config(ClientConfig::new(base_url)?))
    }

    /// Create a client from a full configuration
    #[must_use]
    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_transport(HttpTransport::new(config))
    }

    /// Create a client on top of an existing transport
    #[must_use]
    pub fn with_transport(transport: HttpTransport) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Client configured from the `LITE_AGENT_*` environment variables
    ///
    /// # Errors
    /// Returns `InvalidConfig` if a variable holds a malformed value
    pub fn from_env() -> Result<Self> {
        Ok(Self::with_config(ClientConfig::from_env()?))
    }

    /// Configuration the client was built from
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        self.transport.config()
    }

    /// Start the connection pool (no-op if already started)
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the pool cannot be built
    pub fn start(&self) -> Result<()> {
        self.transport.start()
    }

    /// Close the connection pool (idempotent)
    pub fn close(&self) {
        self.transport.close();
    }

    /// Whether the client can issue requests
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.transport.is_ready()
    }

    /// Start the client and return a guard that closes it when dropped
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the pool cannot be built
    pub fn open(&self) -> Result<ClientGuard> {
        self.start()?;
        Ok(ClientGuard {
            client: self.clone(),
        })
    }

    /// Spawn a new agent or continue an existing session
    ///
    /// # Arguments
    /// * `request` - Spawn request; set `session_id` to continue a session
    ///
    /// # Errors
    /// Returns the server's error (e.g. unknown agent type or session) or a
    /// transport error
    pub async fn spawn(&self, request: &SpawnRequest) -> Result<SpawnResponse> {
        let body = serde_json::to_value(request)?;
        let response = self
            .transport
            .request(Method::POST, &["api", "agents", "spawn"], Some(&body))
            .await?;
        let spawned: SpawnResponse = parse_json(response).await?;

        log::debug!(
            "Spawned {} execution {} in session {}",
            spawned.agent_type,
            spawned.execution_id,
            spawned.session_id
        );

        Ok(spawned)
    }

    /// Get status of a specific session
    ///
    /// # Errors
    /// Returns a not-found error (`is_not_found()`) for unknown sessions
    pub async fn get_session_status(
        &self,
        session_id: impl AsRef<str>,
    ) -> Result<SessionStatusResponse> {
        let response = self
            .transport
            .request(Method::GET, &["api", "sessions", session_id.as_ref()], None)
            .await?;
        parse_json(response).await
    }

    /// List all sessions
    ///
    /// # Errors
    /// Returns error if the request fails
    pub async fn list_sessions(&self) -> Result<ListSessionsResponse> {
        let response = self
            .transport
            .request(Method::GET, &["api", "sessions"], None)
            .await?;
        parse_json(response).await
    }

    /// Delete a session
    ///
    /// Any status below 400 counts as success; the body is not read.
    ///
    /// # Errors
    /// Returns error if the session is not found or deletion fails
    pub async fn delete_session(&self, session_id: impl AsRef<str>) -> Result<()> {
        let response = self
            .transport
            .request(
                Method::DELETE,
                &["api", "sessions", session_id.as_ref()],
                None,
            )
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// List available agent types
    ///
    /// # Errors
    /// Returns error if the request fails
    pub async fn list_agents(&self) -> Result<ListAgentsResponse> {
        let response = self
            .transport
            .request(Method::GET, &["api", "agents"], None)
            .await?;
        parse_json(response).await
    }

    /// Check server health
    ///
    /// # Errors
    /// Returns error if the request fails
    pub async fn health_check(&self) -> Result<HealthResponse> {
        let response = self
            .transport
            .request(Method::GET, &["api", "health"], None)
            .await?;
        parse_json(response).await
    }
}
