//! # Lite Agent Client for Rust
//!
//! An async client for the lite-agent HTTP server. It spawns agents,
//! continues and deletes their sessions, lists agent types, checks server
//! health, and follows a session's log output as it is produced.
//!
//! ## Quick Start
//!
//! ```no_run
//! use futures::StreamExt;
//! use lite_agent_client::{LiteAgentClient, SpawnRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LiteAgentClient::new("http://localhost:3000")?;
//!     let client = client.open()?;
//!
//!     let health = client.health_check().await?;
//!     log::info!("Server is {}", health.status);
//!
//!     let mut logs = client
//!         .spawn_and_stream(&SpawnRequest::new("shell", "ls -la"))
//!         .await?;
//!
//!     while let Some(entry) = logs.next().await {
//!         let entry = entry?;
//!         log::info!("[{}] {}", entry.level, entry.content);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Core Features
//!
//! ### 1. Lifecycle
//!
//! A client must be started before use. [`LiteAgentClient::open`] starts it
//! and returns a [`ClientGuard`] that closes it on drop; `start()` and
//! `close()` do the same by hand. Using a client that is not started fails
//! with [`LiteAgentError::NotInitialized`] without touching the network.
//!
//! ### 2. Sessions
//!
//! ```no_run
//! # use lite_agent_client::{LiteAgentClient, SpawnRequest, AgentConfigOptions};
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! # let client = LiteAgentClient::new("http://localhost:3000")?;
//! # client.start()?;
//! let config = AgentConfigOptions::builder()
//!     .work_dir("/tmp")
//!     .env("RUST_LOG", "debug")
//!     .timeout_secs(60)
//!     .build();
//!
//! let spawned = client
//!     .spawn(&SpawnRequest::new("shell", "pwd").with_config(config))
//!     .await?;
//!
//! for session in client.list_sessions().await?.sessions {
//!     log::info!("{} {} ({} runs)", session.session_id, session.status, session.execution_count);
//! }
//!
//! client.delete_session(&spawned.session_id).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. Log Streams
//!
//! [`LiteAgentClient::stream_logs`] returns a [`LogStream`] of
//! [`LogEntry`] values decoded from Server-Sent Events. Control events are
//! consumed internally; a server-side `error` event ends the stream with an
//! [`ErrorKind::Stream`] error.
//!
//! ## Architecture
//!
//! - [`types`]: Request, response and log models
//! - [`client`]: The protocol client
//! - [`transport`]: HTTP session management
//! - [`sse`]: Server-Sent Events decoding
//! - [`error`]: Error types and handling
//!
//! ## Configuration
//!
//! [`LiteAgentClient::from_env`] reads:
//!
//! - `LITE_AGENT_URL` - Base URL (default `http://localhost:3000`)
//! - `LITE_AGENT_TIMEOUT_SECS` - Whole-request timeout (default 300)
//! - `LITE_AGENT_VERIFY_TLS` - Set to `false` to accept invalid certificates
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, LiteAgentError>`](Result).
//! Branch on [`LiteAgentError::kind`] rather than on message text:
//!
//! ```no_run
//! # use lite_agent_client::{LiteAgentClient, ErrorKind};
//! # async fn example(client: &LiteAgentClient) {
//! match client.get_session_status("missing").await {
//!     Ok(status) => log::info!("{:?}", status.status),
//!     Err(e) if e.is_not_found() => log::warn!("No such session"),
//!     Err(e) if e.kind() == ErrorKind::Transport => log::error!("Server unreachable: {e}"),
//!     Err(e) => log::error!("Error: {e}"),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod error;
pub mod sse;
pub mod transport;
pub mod types;

// Re-export commonly used types for external API
pub use client::{ClientGuard, LiteAgentClient, LogStream};
pub use error::{ErrorKind, LiteAgentError, Result};
pub use transport::{ClientConfig, ClientConfigBuilder, HttpTransport, Transport};

// Re-export type submodules for flat public API
pub use types::identifiers::{ExecutionId, SessionId};
pub use types::logs::LogEntry;
pub use types::requests::{AgentConfigOptions, AgentConfigOptionsBuilder, SpawnRequest};
pub use types::responses::{
    AgentInfo, ErrorResponse, HealthResponse, ListAgentsResponse, ListSessionsResponse,
    SessionStatusResponse, SpawnResponse,
};
pub use types::status::{LogLevel, SessionStatus};

/// Version of the client
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
