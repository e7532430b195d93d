//! Analysis engine integration tests.
//!
//! A `wiremock` server stands in for the analysis engine.

mod common;

use std::time::{Duration, Instant};

use common::TestHarness;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn wait_for_requests(server: &MockServer, expected: usize) -> usize {
    for _ in 0..100 {
        let seen = server.received_requests().await.unwrap_or_default().len();
        if seen >= expected {
            return seen;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    server.received_requests().await.unwrap_or_default().len()
}

#[tokio::test]
async fn simulate_triggers_one_analysis_post() {
    let engine = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"message\":\"Analysis complete\"}"))
        .mount(&engine)
        .await;

    let harness = TestHarness::with_analysis_url(format!("{}/analyze", engine.uri())).await;

    harness.server.post("/simulate").await.assert_status_ok();

    assert_eq!(wait_for_requests(&engine, 1).await, 1);
    let requests = engine.received_requests().await.unwrap();
    assert_eq!(requests[0].method.as_str(), "POST");
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn slow_engine_does_not_delay_the_response() {
    let engine = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&engine)
        .await;

    let harness = TestHarness::with_analysis_url(format!("{}/analyze", engine.uri())).await;

    let started = Instant::now();
    let response = harness.server.post("/simulate").await;
    let elapsed = started.elapsed();

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["added"], 5);
    assert!(elapsed < Duration::from_secs(3), "took {elapsed:?}");
}

#[tokio::test]
async fn engine_errors_are_not_surfaced() {
    let engine = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&engine)
        .await;

    let harness = TestHarness::with_analysis_url(format!("{}/analyze", engine.uri())).await;

    let response = harness.server.post("/simulate").await;

    response.assert_status_ok();
    assert_eq!(wait_for_requests(&engine, 1).await, 1);
}

#[tokio::test]
async fn each_simulate_triggers_its_own_analysis() {
    let engine = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&engine)
        .await;

    let harness = TestHarness::with_analysis_url(format!("{}/analyze", engine.uri())).await;

    for _ in 0..3 {
        harness.server.post("/api/simulate").await.assert_status_ok();
    }

    assert_eq!(wait_for_requests(&engine, 3).await, 3);
}
