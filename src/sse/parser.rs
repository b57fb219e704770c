//! Per-line classifier for the log stream

use serde_json::Value;

use crate::types::logs::LogEntry;

/// Prefix of a line carrying a JSON payload
pub const DATA_PREFIX: &str = "data: ";

/// Prefix of a comment line (keep-alive / padding)
pub const COMMENT_PREFIX: &str = ":";

/// Longest line the decoder buffers (1 MiB); longer lines are skipped
pub const MAX_LINE_LENGTH: usize = 1024 * 1024;

/// Message used when an `error` event has no `message` field
pub const DEFAULT_ERROR_MESSAGE: &str = "Unknown error";

/// What a single SSE line means to the decoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// Blank, comment or non-`data` line
    Ignore,
    /// `data:` payload that is not valid JSON or not a log entry
    Malformed,
    /// `stream_started` control event
    Started,
    /// `stream_ended` control event
    Ended,
    /// `error` control event with its message
    Error(String),
    /// A log entry
    Entry(LogEntry),
}

/// Classify one line of the stream
///
/// Trailing whitespace (including a `\r` left by CRLF framing) is ignored.
#[must_use]
pub fn parse_line(line: &str) -> Frame {
    let line = line.trim_end();
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return Frame::Ignore;
    }

    let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
        return Frame::Ignore;
    };

    let Ok(value) = serde_json::from_str::<Value>(payload) else {
        return Frame::Malformed;
    };

    match value.get("type").and_then(Value::as_str) {
        Some("stream_started") => return Frame::Started,
        Some("stream_ended") => return Frame::Ended,
        Some("error") => {
            let message = value
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(DEFAULT_ERROR_MESSAGE);
            return Frame::Error(message.to_string());
        }
        _ => {}
    }

    serde_json::from_value(value).map_or(Frame::Malformed, Frame::Entry)
}

/// Classify one raw line; bytes that are not UTF-8 are a malformed frame
#[must_use]
pub fn parse_bytes(line: &[u8]) -> Frame {
    std::str::from_utf8(line).map_or(Frame::Malformed, parse_line)
}
