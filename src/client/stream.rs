//! Log streaming for `LiteAgentClient`

use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::{Stream, StreamExt};
use reqwest::{Method, StatusCode};

use crate::error::{LiteAgentError, Result};
use crate::sse::decode_stream;
use crate::transport::Transport;
use crate::types::identifiers::SessionId;
use crate::types::logs::LogEntry;
use crate::types::requests::SpawnRequest;

use super::response::check_status;

/// Lazy sequence of log entries for one session
///
/// Dropping the stream before it finishes closes the underlying response and
/// releases its connection.
pub struct LogStream {
    session_id: SessionId,
    inner: Pin<Box<dyn Stream<Item = Result<LogEntry>> + Send>>,
}

impl LogStream {
    pub(crate) fn new(
        session_id: SessionId,
        inner: impl Stream<Item = Result<LogEntry>> + Send + 'static,
    ) -> Self {
        Self {
            session_id,
            inner: Box::pin(inner),
        }
    }

    /// Session this stream follows
    #[must_use]
    pub const fn session_id(&self) -> &SessionId {
        &self.session_id
    }
}

impl Stream for LogStream {
    type Item = Result<LogEntry>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().inner.as_mut().poll_next(cx)
    }
}

impl fmt::Debug for LogStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogStream")
            .field("session_id", &self.session_id)
            .finish_non_exhaustive()
    }
}

impl super::LiteAgentClient {
    /// Stream logs for a session via Server-Sent Events
    ///
    /// The response status is checked before the stream is returned: 404 fails
    /// with a not-found error without reading the body, and any other status
    /// >= 400 fails with the classified server error.
    ///
    /// # Errors
    /// Returns error if the request fails or the server rejects it
    pub async fn stream_logs(&self, session_id: impl AsRef<str>) -> Result<LogStream> {
        let session_id = session_id.as_ref();
        let response = self
            .transport
            .request(Method::GET, &["api", "logs", session_id, "stream"], None)
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(LiteAgentError::session_not_found(session_id));
        }
        let response = check_status(response).await?;

        log::debug!("Streaming logs for session {session_id}");

        let body = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(std::io::Error::other));

        Ok(LogStream::new(
            SessionId::new(session_id),
            decode_stream(body),
        ))
    }

    /// Spawn an agent and stream the logs of its session
    ///
    /// The stream request is only issued once the spawn has succeeded.
    ///
    /// # Errors
    /// Returns error if the spawn or opening the stream fails
    pub async fn spawn_and_stream(&self, request: &SpawnRequest) -> Result<LogStream> {
        let response = self.spawn(request).await?;
        self.stream_logs(&response.session_id).await
    }
}
