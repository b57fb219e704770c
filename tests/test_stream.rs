//! Integration tests for SSE log streaming

mod common;

use common::{MockLiteAgentServer, log_json, sse_body};
use futures::{StreamExt, TryStreamExt};
use lite_agent_client::{ErrorKind, LogEntry, LogLevel, SpawnRequest};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_stream_logs_yields_entries_until_ended() {
    let mock = MockLiteAgentServer::start().await;
    mock.mock_log_stream(
        "session-1",
        &[
            json!({ "type": "stream_started", "session_id": "session-1" }),
            log_json("stdout", "Hello, world!"),
            log_json("stderr", "warning: careful"),
            json!({ "type": "stream_ended" }),
        ],
    )
    .await;

    let logs = mock.client.stream_logs("session-1").await.unwrap();
    assert_eq!(logs.session_id().as_str(), "session-1");

    let entries: Vec<LogEntry> = logs.try_collect().await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].content, "Hello, world!");
    assert_eq!(entries[0].level, LogLevel::Stdout);
    assert_eq!(entries[1].level, "stderr");
}

#[tokio::test]
async fn test_stream_keepalive_and_end() {
    let mock = MockLiteAgentServer::start().await;
    let body = concat!(
        "data: {\"timestamp\":\"2024-01-01T00:00:00Z\",\"entry_type\":\"stdout\",\"content\":\"Hello, world!\"}\n\n",
        ": keepalive\n\n",
        "data: {\"type\":\"stream_ended\"}\n\n",
    );
    Mock::given(method("GET"))
        .and(path("/api/logs/s/stream"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .mount(&mock.server)
        .await;

    let entries: Vec<LogEntry> = mock
        .client
        .stream_logs("s")
        .await
        .unwrap()
        .try_collect()
        .await
        .unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].content, "Hello, world!");
    assert_eq!(entries[0].level.as_str(), "stdout");
}

#[tokio::test]
async fn test_stream_error_event_first() {
    let mock = MockLiteAgentServer::start().await;
    mock.mock_log_stream(
        "session-1",
        &[
            json!({ "type": "error", "message": "boom" }),
            log_json("stdout", "never"),
        ],
    )
    .await;

    let mut logs = mock.client.stream_logs("session-1").await.unwrap();

    let err = logs.next().await.unwrap().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Stream);
    assert_eq!(err.message(), "boom");
    assert!(logs.next().await.is_none());
}

#[tokio::test]
async fn test_stream_error_event_after_entries() {
    let mock = MockLiteAgentServer::start().await;
    mock.mock_log_stream(
        "session-1",
        &[log_json("info", "working"), json!({ "type": "error" })],
    )
    .await;

    let mut logs = mock.client.stream_logs("session-1").await.unwrap();

    assert_eq!(logs.next().await.unwrap().unwrap().content, "working");
    let err = logs.next().await.unwrap().unwrap_err();
    assert_eq!(err.message(), "Unknown error");
}

#[tokio::test]
async fn test_stream_skips_malformed_lines() {
    let mock = MockLiteAgentServer::start().await;
    let body = format!(
        "{}data: not-json\n\n{}",
        sse_body(&[log_json("stdout", "before")]),
        sse_body(&[log_json("stdout", "after"), json!({ "type": "stream_ended" })]),
    );
    Mock::given(method("GET"))
        .and(path("/api/logs/session-1/stream"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .mount(&mock.server)
        .await;

    let entries: Vec<LogEntry> = mock
        .client
        .stream_logs("session-1")
        .await
        .unwrap()
        .try_collect()
        .await
        .unwrap();

    let contents: Vec<&str> = entries.iter().map(|e| e.content.as_str()).collect();
    assert_eq!(contents, vec!["before", "after"]);
}

#[tokio::test]
async fn test_stream_without_end_event_finishes_cleanly() {
    let mock = MockLiteAgentServer::start().await;
    mock.mock_log_stream("session-1", &[log_json("stdout", "only")])
        .await;

    let entries: Vec<LogEntry> = mock
        .client
        .stream_logs("session-1")
        .await
        .unwrap()
        .try_collect()
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn test_stream_unknown_session() {
    let mock = MockLiteAgentServer::start().await;
    mock.mock_text("GET", "/api/logs/missing/stream", 404, "")
        .await;

    let err = mock.client.stream_logs("missing").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.message(), "Session 'missing' not found");
}

#[tokio::test]
async fn test_stream_server_error_is_classified() {
    let mock = MockLiteAgentServer::start().await;
    mock.mock_json(
        "GET",
        "/api/logs/session-1/stream",
        500,
        json!({ "error": "Log store unavailable" }),
    )
    .await;

    let err = mock.client.stream_logs("session-1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Application);
    assert_eq!(err.message(), "Log store unavailable");
}

#[tokio::test]
async fn test_dropping_stream_early() {
    let mock = MockLiteAgentServer::start().await;
    mock.mock_log_stream(
        "session-1",
        &[
            log_json("stdout", "one"),
            log_json("stdout", "two"),
            log_json("stdout", "three"),
        ],
    )
    .await;
    mock.mock_json(
        "GET",
        "/api/health",
        200,
        json!({ "status": "healthy", "timestamp": 1 }),
    )
    .await;

    let mut logs = mock.client.stream_logs("session-1").await.unwrap();
    assert_eq!(logs.next().await.unwrap().unwrap().content, "one");
    drop(logs);

    // Client stays usable after abandoning a stream
    assert!(mock.client.health_check().await.is_ok());
}

#[tokio::test]
async fn test_spawn_and_stream() {
    let mock = MockLiteAgentServer::start().await;
    mock.mock_spawn("session-7", "exec-1", "shell").await;
    mock.mock_log_stream(
        "session-7",
        &[log_json("stdout", "total 0"), json!({ "type": "stream_ended" })],
    )
    .await;

    let logs = mock
        .client
        .spawn_and_stream(&SpawnRequest::new("shell", "ls"))
        .await
        .unwrap();
    assert_eq!(logs.session_id().as_str(), "session-7");

    let entries: Vec<LogEntry> = logs.try_collect().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].content, "total 0");
}

#[tokio::test]
async fn test_spawn_and_stream_failed_spawn_skips_stream() {
    let mock = MockLiteAgentServer::start().await;
    mock.mock_json(
        "POST",
        "/api/agents/spawn",
        500,
        json!({ "error": "Failed to spawn agent", "details": "executor crashed" }),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/api/logs/session-7/stream"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock.server)
        .await;

    let err = mock
        .client
        .spawn_and_stream(&SpawnRequest::new("shell", "ls"))
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Failed to spawn agent");
    assert_eq!(err.details(), Some("executor crashed"));
}
