//! Response bodies returned by the server
//!
//! Collection responses carry a server-reported `total` that is passed
//! through as-is; it is not checked against the length of the list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identifiers::{ExecutionId, SessionId};
use super::status::SessionStatus;

/// Response from spawning an agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnResponse {
    /// Session the execution belongs to
    pub session_id: SessionId,
    /// Execution created by this spawn
    pub execution_id: ExecutionId,
    /// Agent type
    pub agent_type: String,
    /// Status of the spawn operation
    pub status: String,
}

/// Response for getting session status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatusResponse {
    /// Session ID
    pub session_id: SessionId,
    /// Agent type
    pub agent_type: String,
    /// Session status
    pub status: SessionStatus,
    /// Number of executions
    pub execution_count: u64,
    /// Creation timestamp (RFC3339)
    pub created_at: String,
    /// Last update timestamp (RFC3339)
    pub updated_at: String,
}

impl SessionStatusResponse {
    /// Parse `created_at`
    ///
    /// # Errors
    /// Returns error if the timestamp is not valid RFC3339
    pub fn created_datetime(&self) -> Result<DateTime<Utc>, chrono::ParseError> {
        parse_rfc3339(&self.created_at)
    }

    /// Parse `updated_at`
    ///
    /// # Errors
    /// Returns error if the timestamp is not valid RFC3339
    pub fn updated_datetime(&self) -> Result<DateTime<Utc>, chrono::ParseError> {
        parse_rfc3339(&self.updated_at)
    }
}

/// Response for listing sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSessionsResponse {
    /// Sessions known to the server
    #[serde(default)]
    pub sessions: Vec<SessionStatusResponse>,
    /// Total count
    pub total: u64,
}

/// Agent information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentInfo {
    /// Agent type
    pub agent_type: String,
    /// Agent description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Agent capabilities
    #[serde(default)]
    pub capabilities: Vec<String>,
    /// Availability status
    pub availability: String,
}

impl AgentInfo {
    /// Whether the server reports the agent as ready to use
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.availability == "Available"
    }
}

/// Response for listing available agents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAgentsResponse {
    /// Registered agents
    #[serde(default)]
    pub agents: Vec<AgentInfo>,
    /// Total count
    pub total: u64,
}

/// Health check response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status
    pub status: String,
    /// Unix timestamp in seconds
    pub timestamp: i64,
}

/// Error body the server sends with any status >= 400
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Optional details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

pub(crate) fn parse_rfc3339(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value).map(|dt| dt.with_timezone(&Utc))
}
