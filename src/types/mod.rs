//! Type definitions for the lite-agent REST API
//!
//! - [`identifiers`] - Opaque id wrappers (`SessionId`, `ExecutionId`)
//! - [`status`] - Open vocabularies (`SessionStatus`, `LogLevel`)
//! - [`requests`] - Request bodies (`SpawnRequest`, `AgentConfigOptions`)
//! - [`responses`] - Response bodies for every endpoint
//! - [`logs`] - Log entries carried on the SSE stream

pub mod identifiers;
pub mod logs;
pub mod requests;
pub mod responses;
pub mod status;

pub use identifiers::{ExecutionId, SessionId};
pub use logs::LogEntry;
pub use requests::{AgentConfigOptions, AgentConfigOptionsBuilder, SpawnRequest};
pub use responses::{
    AgentInfo, ErrorResponse, HealthResponse, ListAgentsResponse, ListSessionsResponse,
    SessionStatusResponse, SpawnResponse,
};
pub use status::{LogLevel, SessionStatus};
