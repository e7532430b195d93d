//! Risk-level statistics handler.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use risk_data_core::RiskHistogram;
use risk_data_store::Store;

use crate::state::AppState;

/// Count risk results per level.
///
/// Every level is present in the response; an unreachable store yields zeros.
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<RiskHistogram> {
    Json(state.store.risk_histogram().await)
}
