//! Recent transaction feed handler.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use risk_data_core::FeedEntry;
use risk_data_store::{Store, API_FEED_LIMIT};

use crate::state::AppState;

/// List the most recent risk results joined with their transactions.
///
/// Newest first, capped at [`API_FEED_LIMIT`]. An unreachable or empty store
/// yields an empty array.
pub async fn list_transactions(State(state): State<Arc<AppState>>) -> Json<Vec<FeedEntry>> {
    Json(state.store.recent_feed(API_FEED_LIMIT).await)
}
