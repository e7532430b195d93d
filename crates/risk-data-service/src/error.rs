//! API error types and responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use risk_data_store::StoreError;

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A generation batch stopped before writing every event.
    #[error("partial batch: wrote {written} of {requested} events")]
    PartialBatch {
        /// Events persisted before the failure.
        written: usize,
        /// Events requested.
        requested: usize,
    },

    /// The store could not be reached.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            Self::PartialBatch { written, requested } => {
                tracing::error!(written, requested, "Simulation batch incomplete");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "partial_batch",
                    self.to_string(),
                    Some(serde_json::json!({
                        "written": written,
                        "requested": requested
                    })),
                )
            }
            Self::StoreUnavailable(msg) => {
                tracing::error!(error = %msg, "Store unavailable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "store_unavailable",
                    "The data store is unavailable".to_string(),
                    None,
                )
            }
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::BatchAborted {
                written: 0, reason, ..
            } => Self::StoreUnavailable(reason),
            StoreError::BatchAborted {
                written, requested, ..
            } => Self::PartialBatch { written, requested },
            StoreError::Database(msg) => Self::StoreUnavailable(msg),
            StoreError::Decode(msg) => Self::Internal(msg),
        }
    }
}
