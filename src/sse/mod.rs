//! Server-Sent Events decoding for session log streams
//!
//! The server sends one JSON payload per `data: ` line. Control payloads carry
//! a `type` field (`stream_started`, `stream_ended`, `error`); anything else is
//! a log entry.
//!
//! # Example
//!
//! ```rust
//! use lite_agent_client::sse::{Frame, parse_line};
//!
//! assert_eq!(parse_line(": keepalive"), Frame::Ignore);
//! assert_eq!(parse_line(r#"data: {"type":"stream_ended"}"#), Frame::Ended);
//! assert_eq!(parse_line("data: not-json"), Frame::Malformed);
//! ```

mod codec;
mod decoder;
mod parser;

// Re-export public types
pub use decoder::decode_stream;
pub use parser::{
    COMMENT_PREFIX, DATA_PREFIX, DEFAULT_ERROR_MESSAGE, Frame, MAX_LINE_LENGTH, parse_bytes,
    parse_line,
};
