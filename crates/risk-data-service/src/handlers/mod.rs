//! API handlers.

use axum::http::StatusCode;

pub mod health;
pub mod simulate;
pub mod stats;
pub mod transactions;

/// Explicit 405 for methods axum would otherwise route to a GET handler.
pub async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}
