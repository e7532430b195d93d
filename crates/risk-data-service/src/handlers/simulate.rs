//! Traffic simulation handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use risk_data_store::Store;

use crate::analysis::AnalysisDispatcher;
use crate::error::ApiError;
use crate::state::AppState;

/// Events generated per simulate request.
pub const SIMULATE_BATCH_SIZE: usize = 5;

/// Acknowledgment message returned by simulate.
pub const SIMULATE_MESSAGE: &str = "Simulation and Analysis triggered";

/// Simulate response.
#[derive(Debug, Serialize)]
pub struct SimulateResponse {
    /// Human-readable acknowledgment.
    pub message: String,
    /// Events written.
    pub added: usize,
}

/// Generate a small batch of traffic and queue an analysis run.
///
/// The response does not wait for the analysis engine; its outcome is only
/// logged by the dispatcher.
pub async fn simulate(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SimulateResponse>, ApiError> {
    let added = state.store.generate(SIMULATE_BATCH_SIZE).await?;

    // Queue-full and closed are logged by the dispatcher
    if let Some(Ok(job_id)) = state.analysis.as_ref().map(AnalysisDispatcher::submit) {
        tracing::debug!(%job_id, added, "Simulation queued analysis");
    }

    Ok(Json(SimulateResponse {
        message: SIMULATE_MESSAGE.to_string(),
        added,
    }))
}

/// CORS preflight for simulate.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}
