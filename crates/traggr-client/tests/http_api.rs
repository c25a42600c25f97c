//! HTTP-level contract of the aggregation client.

use traggr_client::HttpClient;
use traggr_core::{AggrClient, ResultRecord, TestOutcome};
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn record(test_id: &str, result: TestOutcome) -> ResultRecord {
    ResultRecord {
        component: "api".to_string(),
        suite: "LoginSuite".to_string(),
        test_id: test_id.to_string(),
        title: String::new(),
        description: String::new(),
        result,
        error: None,
        attributes: None,
        comment: None,
    }
}

#[tokio::test]
async fn ping_hits_the_ping_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&server.uri()).expect("client");
    client.ping().await.expect("ping");
}

#[tokio::test]
async fn ping_surfaces_error_statuses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let client = HttpClient::new(&server.uri()).expect("client");
    let err = client.ping().await.unwrap_err();
    assert!(err.to_string().contains("503"));
    assert!(err.to_string().contains("maintenance"));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_error() {
    // Port 1 on loopback refuses the connection outright.
    let client = HttpClient::new("http://127.0.0.1:1/api").expect("client");
    assert!(client.ping().await.is_err());
}

#[tokio::test]
async fn post_results_sends_the_nested_wire_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/results"))
        .and(body_partial_json(serde_json::json!({
            "project": "atmosphere",
            "sprint": "sprint-12",
            "results": [{
                "component": "api",
                "suite": "LoginSuite",
                "test_id": "API-17",
                "result_attributes": { "result": "failed", "error": "ValueError: x" },
            }],
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut failed = record("API-17", TestOutcome::Failed);
    failed.error = Some("ValueError: x".to_string());

    let client = HttpClient::new(&server.uri()).expect("client");
    client
        .post_results("atmosphere", "sprint-12", &[failed])
        .await
        .expect("post");
}

#[tokio::test]
async fn empty_run_still_posts_an_empty_results_sequence() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/results"))
        .and(body_json(serde_json::json!({
            "project": "atmosphere",
            "sprint": "sprint-12",
            "results": [],
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&server.uri()).expect("client");
    client
        .post_results("atmosphere", "sprint-12", &[])
        .await
        .expect("post");
}

#[tokio::test]
async fn post_failure_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/results"))
        .respond_with(ResponseTemplate::new(500).set_body_string("db down"))
        .mount(&server)
        .await;

    let client = HttpClient::new(&server.uri()).expect("client");
    let err = client
        .post_results("atmosphere", "sprint-12", &[record("API-1", TestOutcome::Passed)])
        .await
        .unwrap_err();
    assert!(err.to_string().contains("500"));
}
