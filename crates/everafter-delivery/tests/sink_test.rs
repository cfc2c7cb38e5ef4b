// Integration tests for `SinkClient` using wiremock.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use everafter_delivery::SinkClient;

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, SinkClient) {
    let server = MockServer::start().await;
    let endpoint = format!("{}/exec", server.uri());
    let client = SinkClient::from_reqwest(&endpoint, reqwest::Client::new()).unwrap();
    (server, client)
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_deliver_posts_json_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/exec"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "first_name": "Anna",
            "last_name": "Lee",
            "people_amount": 2,
            "is_accepted": true,
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let payload = json!({
        "first_name": "Anna",
        "last_name": "Lee",
        "people_amount": 2,
        "is_accepted": true,
        "timestamp": "2025-11-01T10:00:00Z",
        "user_agent": "test-agent",
        "referrer": "direct",
    });

    client.deliver(&payload).await.unwrap();
}

#[tokio::test]
async fn test_server_error_status_is_still_ok() {
    // The sink is write-only: the original transport mode cannot read
    // status codes, so a 500 must not surface as a delivery error.
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/exec"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.deliver(&json!({ "first_name": "Anna" })).await;
    assert!(result.is_ok(), "opaque sink: 500 is not observable");
}

#[tokio::test]
async fn test_exactly_one_write_per_call() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/exec"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    client.deliver(&json!({ "n": 1 })).await.unwrap();
    client.deliver(&json!({ "n": 2 })).await.unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 2);
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_unreachable_sink_is_local_error() {
    // A dedicated (non-pooled) server: dropping it closes the listener.
    let server = MockServer::builder().start().await;
    let endpoint = format!("{}/exec", server.uri());
    let addr = *server.address();
    // Shut the server down so the connection is refused. Shutdown is
    // asynchronous; wait until the listener has actually closed.
    drop(server);
    while std::net::TcpStream::connect(addr).is_ok() {
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }

    let client = SinkClient::from_reqwest(&endpoint, reqwest::Client::new()).unwrap();
    let result = client.deliver(&json!({ "first_name": "Anna" })).await;

    let err = result.unwrap_err();
    assert!(err.is_connect(), "expected a connect error, got: {err:?}");
}

#[tokio::test]
async fn test_invalid_endpoint_rejected_at_construction() {
    let result = SinkClient::from_reqwest("not a url", reqwest::Client::new());
    assert!(matches!(
        result,
        Err(everafter_delivery::Error::InvalidUrl(_))
    ));
}
