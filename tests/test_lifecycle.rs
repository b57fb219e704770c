//! Integration tests for client lifecycle and transport failures

mod common;

use common::{MockLiteAgentServer, init_logging};
use lite_agent_client::{
    ClientConfig, ErrorKind, HttpTransport, LiteAgentClient, LiteAgentError, SpawnRequest,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Address on which nothing is listening
fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

#[tokio::test]
async fn test_request_before_start_is_not_initialized() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = LiteAgentClient::new(&server.uri()).unwrap();
    assert!(!client.is_ready());

    let err = client.health_check().await.unwrap_err();
    assert!(matches!(err, LiteAgentError::NotInitialized));
    assert_eq!(err.kind(), ErrorKind::Contract);
}

#[tokio::test]
async fn test_request_after_close_is_not_initialized() {
    let mock = MockLiteAgentServer::start().await;
    mock.client.close();
    assert!(!mock.client.is_ready());

    let err = mock
        .client
        .spawn(&SpawnRequest::new("echo", "x"))
        .await
        .unwrap_err();
    assert!(matches!(err, LiteAgentError::NotInitialized));

    let err = mock.client.stream_logs("session-1").await.unwrap_err();
    assert!(matches!(err, LiteAgentError::NotInitialized));
}

#[tokio::test]
async fn test_close_twice_and_restart() {
    let mock = MockLiteAgentServer::start().await;
    mock.mock_json(
        "GET",
        "/api/health",
        200,
        json!({ "status": "healthy", "timestamp": 1 }),
    )
    .await;

    mock.client.close();
    mock.client.close();
    mock.client.start().unwrap();

    assert!(mock.client.health_check().await.is_ok());
}

#[tokio::test]
async fn test_guard_closes_on_drop() {
    init_logging();
    let client = LiteAgentClient::new(&closed_port_url()).unwrap();

    {
        let guard = client.open().unwrap();
        assert!(guard.is_ready());
        assert!(client.is_ready());
    }

    assert!(!client.is_ready());
}

#[tokio::test]
async fn test_guard_closes_on_early_return() {
    init_logging();
    let client = LiteAgentClient::new(&closed_port_url()).unwrap();

    async fn failing(client: &LiteAgentClient) -> lite_agent_client::Result<()> {
        let guard = client.open()?;
        guard.health_check().await?;
        Ok(())
    }

    assert!(failing(&client).await.is_err());
    assert!(!client.is_ready());
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    init_logging();
    let client = LiteAgentClient::new(&closed_port_url()).unwrap();
    let client = client.open().unwrap();

    let err = client.list_agents().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.status().is_none());
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "healthy", "timestamp": 1 }))
                .set_delay(std::time::Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig::builder(&server.uri())
        .unwrap()
        .timeout(std::time::Duration::from_millis(100))
        .build();
    let client = LiteAgentClient::with_config(config);
    let client = client.open().unwrap();

    let err = client.health_check().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn test_adopted_pool_outlives_close() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "healthy", "timestamp": 1 })),
        )
        .mount(&server)
        .await;

    let config = ClientConfig::new(&server.uri()).unwrap();
    let client =
        LiteAgentClient::with_transport(HttpTransport::with_client(config, reqwest::Client::new()));

    client.close();
    assert!(client.is_ready());
    assert_eq!(client.health_check().await.unwrap().status, "healthy");
}

#[test]
fn test_invalid_base_url() {
    let err = LiteAgentClient::new("ftp://example.com").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Contract);
    assert!(LiteAgentClient::new("not a url").is_err());
}
