//! Log entries delivered on a session's log stream

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::responses::parse_rfc3339;
use super::status::LogLevel;

/// A single log entry from an agent
///
/// The wire field is `entry_type`; it is exposed here as `level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Timestamp of the log entry (RFC3339)
    pub timestamp: String,
    /// Log level/type
    #[serde(rename = "entry_type", alias = "level")]
    pub level: LogLevel,
    /// Log content
    pub content: String,
}

impl LogEntry {
    /// Create a log entry
    pub fn new(
        timestamp: impl Into<String>,
        level: impl Into<LogLevel>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            level: level.into(),
            content: content.into(),
        }
    }

    /// Parse `timestamp`
    ///
    /// # Errors
    /// Returns error if the timestamp is not valid RFC3339
    pub fn datetime(&self) -> Result<DateTime<Utc>, chrono::ParseError> {
        parse_rfc3339(&self.timestamp)
    }
}
