//! Health check handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `"ok"`, or `"degraded"` when the store is unreachable.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
    /// `"reachable"` or `"unreachable"`.
    pub store: String,
}

/// Health check endpoint. Always answers 200; degradation is reported in the body.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let reachable = state.store.is_reachable().await;

    Json(HealthResponse {
        status: if reachable { "ok" } else { "degraded" }.to_string(),
        service: "risk-data".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: if reachable { "reachable" } else { "unreachable" }.to_string(),
    })
}
