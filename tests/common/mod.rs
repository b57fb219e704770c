//! Mock lite-agent server for integration tests
//!
//! Responds to the REST and SSE endpoints with canned bodies so the client can
//! be exercised without a running server.

#![allow(dead_code)]

use lite_agent_client::LiteAgentClient;
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// Initialize test logging once per binary
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Mock server plus a started client pointed at it
pub struct MockLiteAgentServer {
    pub server: MockServer,
    pub client: LiteAgentClient,
}

impl MockLiteAgentServer {
    /// Start the mock server and a client for it
    pub async fn start() -> Self {
        init_logging();
        let server = MockServer::start().await;
        let client = LiteAgentClient::new(&server.uri()).expect("mock server URI is valid");
        client.start().expect("client starts");
        Self { server, client }
    }

    /// Mount a JSON response
    pub async fn mock_json(&self, http_method: &str, route: &str, status: u16, body: Value) {
        Mock::given(method(http_method))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mount a plain-text response
    pub async fn mock_text(&self, http_method: &str, route: &str, status: u16, body: &str) {
        Mock::given(method(http_method))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Mount an SSE body for a session's log stream
    pub async fn mock_log_stream(&self, session_id: &str, events: &[Value]) {
        Mock::given(method("GET"))
            .and(path(format!("/api/logs/{session_id}/stream")))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(sse_body(events), "text/event-stream"),
            )
            .mount(&self.server)
            .await;
    }

    /// Mount a successful spawn for `session_id`
    pub async fn mock_spawn(&self, session_id: &str, execution_id: &str, agent_type: &str) {
        self.mock_json(
            "POST",
            "/api/agents/spawn",
            201,
            spawn_json(session_id, execution_id, agent_type),
        )
        .await;
    }
}

/// Encode events as `data:` frames separated by blank lines
pub fn sse_body(events: &[Value]) -> String {
    events
        .iter()
        .map(|event| format!("data: {event}\n\n"))
        .collect()
}

pub fn spawn_json(session_id: &str, execution_id: &str, agent_type: &str) -> Value {
    json!({
        "session_id": session_id,
        "execution_id": execution_id,
        "agent_type": agent_type,
        "status": "spawned"
    })
}

pub fn session_json(session_id: &str, status: &str, execution_count: u64) -> Value {
    json!({
        "session_id": session_id,
        "agent_type": "echo",
        "status": status,
        "execution_count": execution_count,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:05:00Z"
    })
}

pub fn log_json(level: &str, content: &str) -> Value {
    json!({
        "timestamp": "2024-01-01T00:00:00Z",
        "entry_type": level,
        "content": content
    })
}
