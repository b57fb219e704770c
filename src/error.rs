//! Error types for the lite-agent client

use thiserror::Error;

/// Main error type for the lite-agent client
#[derive(Error, Debug)]
pub enum LiteAgentError {
    /// The transport was used before `start()` or after `close()`
    #[error(
        "Client session not initialized. Use `LiteAgentClient::open()` or call `start()` first."
    )]
    NotInitialized,

    /// Invalid client configuration (base URL, timeout, TLS settings)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Connection refused, DNS failure, timeout or a body read that broke off
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// I/O error while reading a streamed body
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error reported by the server for a status >= 400
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Server-supplied `error` field, or `HTTP <status>: <body>`
        message: String,
        /// Server-supplied `details` field
        details: Option<String>,
    },

    /// An `error` control event arrived on a log stream
    #[error("{message}")]
    Stream {
        /// The event's `message` field
        message: String,
    },

    /// A successful response body did not match the expected model
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, LiteAgentError>;

/// Failure category of a [`LiteAgentError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Programming-contract violation (not initialized, bad configuration)
    Contract,
    /// Connectivity failure; retrying is up to the caller
    Transport,
    /// Error reported by the server in an HTTP response
    Application,
    /// Error reported by the server inside a log stream
    Stream,
    /// Response body did not match the expected shape
    Decode,
}

impl LiteAgentError {
    /// Create an application error from a server response
    pub fn api(status: u16, message: impl Into<String>, details: Option<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
            details,
        }
    }

    /// Create the error raised when a session's log stream does not exist
    pub fn session_not_found(session_id: &str) -> Self {
        Self::api(404, format!("Session '{session_id}' not found"), None)
    }

    /// Create an in-stream error
    pub fn stream(message: impl Into<String>) -> Self {
        Self::Stream {
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Failure category, for branching without matching on message text
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotInitialized | Self::InvalidConfig(_) => ErrorKind::Contract,
            Self::Transport(_) | Self::Io(_) => ErrorKind::Transport,
            Self::Api { .. } => ErrorKind::Application,
            Self::Stream { .. } => ErrorKind::Stream,
            Self::Decode(_) => ErrorKind::Decode,
        }
    }

    /// Human-readable message without the category prefix
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Api { message, .. } | Self::Stream { message } => message.clone(),
            Self::InvalidConfig(msg) => msg.clone(),
            other => other.to_string(),
        }
    }

    /// Optional details supplied by the server
    #[must_use]
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::Api { details, .. } => details.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of an application error
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Map a failed body read
    ///
    /// Body chunks reach the line decoder as `io::Error`; the `reqwest::Error`
    /// inside is unwrapped when there is one.
    pub(crate) fn from_body_read(err: std::io::Error) -> Self {
        let kind = err.kind();
        match err.into_inner() {
            Some(inner) => match inner.downcast::<reqwest::Error>() {
                Ok(reqwest_err) => Self::Transport(*reqwest_err),
                Err(other) => Self::Io(std::io::Error::new(kind, other)),
            },
            None => Self::Io(kind.into()),
        }
    }

    /// Whether the server answered 404
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}
