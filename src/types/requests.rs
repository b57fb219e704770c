//! Request bodies sent to the server
//!
//! Unset optional fields are omitted from the JSON body instead of being sent
//! as `null`.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::identifiers::SessionId;

// ============================================================================
// Agent Config Options
// ============================================================================

/// Optional configuration for agent execution
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentConfigOptions {
    /// Working directory (server default when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_dir: Option<PathBuf>,
    /// Environment variables
    #[serde(default)]
    pub env: HashMap<String, String>,
    /// Timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Agent-specific settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<serde_json::Map<String, serde_json::Value>>,
}

impl AgentConfigOptions {
    /// Create a new builder
    #[must_use]
    pub fn builder() -> AgentConfigOptionsBuilder {
        AgentConfigOptionsBuilder::default()
    }
}

/// Builder for `AgentConfigOptions`
#[derive(Debug, Default)]
pub struct AgentConfigOptionsBuilder {
    options: AgentConfigOptions,
}

impl AgentConfigOptionsBuilder {
    /// Set working directory
    #[must_use]
    pub fn work_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.work_dir = Some(path.into());
        self
    }

    /// Add an environment variable
    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.env.insert(key.into(), value.into());
        self
    }

    /// Replace all environment variables
    #[must_use]
    pub fn envs(mut self, env: HashMap<String, String>) -> Self {
        self.options.env = env;
        self
    }

    /// Set timeout in seconds
    #[must_use]
    pub const fn timeout_secs(mut self, secs: u64) -> Self {
        self.options.timeout_secs = Some(secs);
        self
    }

    /// Add an agent-specific setting
    #[must_use]
    pub fn custom(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.options
            .custom
            .get_or_insert_with(serde_json::Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Build the options
    #[must_use]
    pub fn build(self) -> AgentConfigOptions {
        self.options
    }
}

// ============================================================================
// Spawn Request
// ============================================================================

/// Request to spawn an agent or continue a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnRequest {
    /// Type of agent to spawn (e.g. "shell", "echo")
    pub agent_type: String,
    /// Input/prompt for the agent
    pub input: String,
    /// Session to continue; a new session is created when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionId>,
    /// Agent configuration
    #[serde(default)]
    pub config: AgentConfigOptions,
}

impl SpawnRequest {
    /// Request that creates a new session
    pub fn new(agent_type: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            agent_type: agent_type.into(),
            input: input.into(),
            session_id: None,
            config: AgentConfigOptions::default(),
        }
    }

    /// Request that adds an execution to an existing session
    pub fn continue_session(
        session_id: impl Into<SessionId>,
        agent_type: impl Into<String>,
        input: impl Into<String>,
    ) -> Self {
        Self::new(agent_type, input).with_session(session_id)
    }

    /// Continue the given session
    #[must_use]
    pub fn with_session(mut self, session_id: impl Into<SessionId>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Replace the agent configuration
    #[must_use]
    pub fn with_config(mut self, config: AgentConfigOptions) -> Self {
        self.config = config;
        self
    }
}
