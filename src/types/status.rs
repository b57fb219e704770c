//! Open, server-defined vocabularies
//!
//! Both types keep a fixed set of known values but carry anything else in an
//! `Other` variant, so a server that grows a new state never makes the
//! client reject a response.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Status of a session as reported by the server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SessionStatus {
    /// An execution is running or the session accepts continuations
    Active,
    /// No execution is running
    Idle,
    /// The last execution finished successfully
    Completed,
    /// The last execution failed
    Failed,
    /// Any status this client does not know about
    Other(String),
}

impl SessionStatus {
    /// Wire representation
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "Active",
            Self::Idle => "Idle",
            Self::Completed => "Completed",
            Self::Failed => "Failed",
            Self::Other(s) => s,
        }
    }

    /// Whether no further output is expected
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

impl From<String> for SessionStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Active" => Self::Active,
            "Idle" => Self::Idle,
            "Completed" => Self::Completed,
            "Failed" => Self::Failed,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for SessionStatus {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<SessionStatus> for String {
    fn from(status: SessionStatus) -> Self {
        match status {
            SessionStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Level/type tag of a log entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum LogLevel {
    /// Process standard output
    Stdout,
    /// Process standard error
    Stderr,
    /// Informational message
    Info,
    /// Warning
    Warning,
    /// Error message
    Error,
    /// Debug output
    Debug,
    /// Any tag this client does not know about
    Other(String),
}

impl LogLevel {
    /// Wire representation
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Debug => "debug",
            Self::Other(s) => s,
        }
    }

    /// Whether the entry belongs on an error channel
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Stderr | Self::Error)
    }
}

impl From<String> for LogLevel {
    fn from(s: String) -> Self {
        match s.as_str() {
            "stdout" => Self::Stdout,
            "stderr" => Self::Stderr,
            "info" => Self::Info,
            "warning" => Self::Warning,
            "error" => Self::Error,
            "debug" => Self::Debug,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for LogLevel {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl PartialEq<str> for LogLevel {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for LogLevel {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized entries tag their type as `{"type": "..."}`; plain entries
/// use a bare string.
#[derive(Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Tag(String),
    Tagged {
        #[serde(rename = "type")]
        kind: String,
    },
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (LevelRepr::Tag(tag) | LevelRepr::Tagged { kind: tag }) =
            LevelRepr::deserialize(deserializer)?;
        Ok(Self::from(tag))
    }
}
