//! Simulate endpoint integration tests.

mod common;

use std::future::IntoFuture;

use axum::http::{Method, StatusCode};
use common::TestHarness;
use futures::future::join_all;
use risk_data_service::SIMULATE_BATCH_SIZE;
use risk_data_store::Store;

// ============================================================================
// Generation
// ============================================================================

#[tokio::test]
async fn simulate_adds_five_events() {
    let harness = TestHarness::new().await;
    let before = harness.store.counts().await.unwrap();

    let response = harness.server.post("/simulate").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["added"], 5);
    assert_eq!(body["message"], "Simulation and Analysis triggered");

    let after = harness.store.counts().await.unwrap();
    assert_eq!(after.transactions, before.transactions + 5);
    assert_eq!(after.risk_results, before.risk_results + 5);
    assert_eq!(after.customers, before.customers);
    assert_eq!(after.vendors, before.vendors);
}

#[tokio::test]
async fn api_prefix_simulates_too() {
    let harness = TestHarness::new().await;

    let response = harness.server.post("/api/simulate").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["added"], SIMULATE_BATCH_SIZE);
}

#[tokio::test]
async fn simulated_events_appear_in_stats() {
    let harness = TestHarness::new().await;

    harness.server.post("/simulate").await.assert_status_ok();

    let body: serde_json::Value = harness.server.get("/stats").await.json();
    let total: u64 = ["CRITICAL", "HIGH", "MEDIUM", "LOW"]
        .iter()
        .map(|key| body[key].as_u64().unwrap())
        .sum();
    assert_eq!(total, 505);
}

#[tokio::test]
async fn concurrent_simulates_all_land() {
    let harness = TestHarness::new().await;

    let requests = (0..8).map(|_| harness.server.post("/simulate").into_future());
    let responses = join_all(requests).await;

    for response in &responses {
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["added"], 5);
    }

    let counts = harness.store.counts().await.unwrap();
    assert_eq!(counts.transactions, 500 + 8 * 5);
    assert_eq!(counts.risk_results, 500 + 8 * 5);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn unreachable_store_fails_the_request_only() {
    let harness = TestHarness::unreachable().await;

    let response = harness.server.post("/simulate").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "store_unavailable");

    harness.server.get("/health").await.assert_status_ok();
}

#[tokio::test]
async fn partial_batch_reports_written_count() {
    let harness = TestHarness::new().await;
    // Allows two more risk results, then aborts every further insert
    sqlx::query(
        "CREATE TRIGGER cap_risk_results BEFORE INSERT ON risk_results \
         WHEN (SELECT COUNT(*) FROM risk_results) >= 502 \
         BEGIN SELECT RAISE(ABORT, 'risk_results capped'); END",
    )
    .execute(harness.store.pool())
    .await
    .unwrap();

    let response = harness.server.post("/simulate").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "partial_batch");
    assert_eq!(body["error"]["details"]["written"], 2);
    assert_eq!(body["error"]["details"]["requested"], 5);

    let counts = harness.store.counts().await.unwrap();
    assert_eq!(counts.transactions, 502);
    assert_eq!(counts.risk_results, 502);
}

#[tokio::test]
async fn unreachable_analysis_engine_is_invisible_to_the_caller() {
    let harness = TestHarness::with_analysis_url(common::UNREACHABLE_ANALYSIS_URL).await;

    for _ in 0..3 {
        let response = harness.server.post("/simulate").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["added"], 5);
    }
}

// ============================================================================
// Methods and Headers
// ============================================================================

#[tokio::test]
async fn preflight_is_no_content() {
    let harness = TestHarness::new().await;

    let response = harness.server.method(Method::OPTIONS, "/simulate").await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert_eq!(response.header("access-control-allow-origin"), "*");
    assert_eq!(
        response.header("access-control-allow-methods"),
        "GET, POST, OPTIONS"
    );
}

#[tokio::test]
async fn preflight_does_not_generate() {
    let harness = TestHarness::new().await;
    let before = harness.store.counts().await.unwrap();

    harness
        .server
        .method(Method::OPTIONS, "/api/simulate")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert_eq!(harness.store.counts().await.unwrap(), before);
}

#[tokio::test]
async fn get_is_method_not_allowed() {
    let harness = TestHarness::new().await;

    let response = harness.server.get("/simulate").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert!(response.as_bytes().is_empty());
}
