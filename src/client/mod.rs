//! `LiteAgentClient` for the lite-agent REST API
//!
//! This module provides the protocol client: spawning agents, reading and
//! deleting sessions, listing agents, health checks, and following a
//! session's log stream.
//!
//! # Session flow
//!
//! The client keeps no session state. A session id returned by a spawn
//! without `session_id` is valid for status, log and delete calls, and for
//! further spawns that continue the session; after a successful delete it is
//! no longer valid. The server is the sole authority on all of this.
//!
//! # Example: Spawn and Stream
//!
//! ```no_run
//! use futures::StreamExt;
//! use lite_agent_client::{LiteAgentClient, SpawnRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = LiteAgentClient::new("http://localhost:3000")?;
//! let client = client.open()?;
//!
//! let mut logs = client
//!     .spawn_and_stream(&SpawnRequest::new("shell", "echo hello"))
//!     .await?;
//!
//! while let Some(entry) = logs.next().await {
//!     let entry = entry?;
//!     log::info!("[{}] {}", entry.level, entry.content);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example: Continue a Session
//!
//! ```no_run
//! use lite_agent_client::{LiteAgentClient, SpawnRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = LiteAgentClient::new("http://localhost:3000")?;
//! client.start()?;
//!
//! let first = client.spawn(&SpawnRequest::new("echo", "one")).await?;
//! let again = SpawnRequest::continue_session(first.session_id.clone(), "echo", "two");
//! client.spawn(&again).await?;
//!
//! let status = client.get_session_status(&first.session_id).await?;
//! assert_eq!(status.execution_count, 2);
//!
//! client.close();
//! # Ok(())
//! # }
//! ```

mod client_impl;
mod response;
mod stream;

use std::ops::Deref;
use std::sync::Arc;

use crate::transport::HttpTransport;

pub use stream::LogStream;

/// Client for the lite-agent REST API
///
/// Cloning is cheap; clones share one transport and connection pool, and
/// operations on them may run concurrently.
#[derive(Clone)]
pub struct LiteAgentClient {
    /// Shared HTTP transport
    transport: Arc<HttpTransport>,
}

impl std::fmt::Debug for LiteAgentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiteAgentClient")
            .field("base_url", &self.transport.config().base_url().as_str())
            .field("ready", &self.is_ready())
            .finish()
    }
}

/// Scoped use of a started `LiteAgentClient`
///
/// Returned by [`LiteAgentClient::open`]; closes the client when dropped,
/// whichever way the scope is left.
#[derive(Debug)]
pub struct ClientGuard {
    client: LiteAgentClient,
}

impl Deref for ClientGuard {
    type Target = LiteAgentClient;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl Drop for ClientGuard {
    fn drop(&mut self) {
        self.client.close();
    }
}
