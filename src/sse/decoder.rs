//! Incremental decoder from a body byte stream to log entries

use bytes::Buf;
use futures::{Stream, StreamExt};
use tokio_util::codec::FramedRead;
use tokio_util::io::StreamReader;

use crate::error::{LiteAgentError, Result};
use crate::types::logs::LogEntry;

use super::codec::{Line, LineCodec};
use super::parser::{Frame, MAX_LINE_LENGTH, parse_bytes};

/// Decode an SSE body into log entries
///
/// The body is read one line at a time, never buffered whole. The returned
/// stream:
/// - skips blank, comment, non-`data` and malformed lines, including lines
///   that are not UTF-8 or exceed [`MAX_LINE_LENGTH`]
/// - swallows `stream_started`
/// - ends on `stream_ended`, or when the body ends
/// - yields a single `Stream` error and ends on an `error` event
/// - yields a single transport error and ends if reading the body fails
pub fn decode_stream<S, B>(body: S) -> impl Stream<Item = Result<LogEntry>> + Send
where
    S: Stream<Item = std::io::Result<B>> + Send,
    B: Buf + Send,
{
    async_stream::try_stream! {
        let lines = FramedRead::new(StreamReader::new(body), LineCodec::new());
        futures::pin_mut!(lines);

        while let Some(line) = lines.next().await {
            let line = match line.map_err(LiteAgentError::from_body_read)? {
                Line::Complete(line) => line,
                Line::Oversized => {
                    log::warn!("Discarding SSE line longer than {MAX_LINE_LENGTH} bytes");
                    continue;
                }
            };
            match parse_bytes(&line) {
                Frame::Entry(entry) => {
                    yield entry;
                }
                Frame::Ignore | Frame::Started => {
                    log::trace!("Skipping SSE line: {line:?}");
                }
                Frame::Malformed => {
                    log::debug!("Discarding malformed SSE frame: {line:?}");
                }
                Frame::Ended => {
                    log::debug!("Log stream ended by server");
                    break;
                }
                Frame::Error(message) => {
                    Err::<(), _>(LiteAgentError::stream(message))?;
                }
            }
        }
    }
}
