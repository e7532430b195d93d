//! Error types for the risk store.

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database operation failed, including an unreachable database file.
    #[error("database error: {0}")]
    Database(String),

    /// A stored row could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// A generation batch stopped before writing every event.
    ///
    /// Events before `written` are fully persisted; the failing event and
    /// everything after it are not.
    #[error("batch aborted after {written} of {requested} events: {reason}")]
    BatchAborted {
        /// Events fully persisted before the failure.
        written: usize,
        /// Events requested.
        requested: usize,
        /// Underlying failure.
        reason: String,
    },
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        let message = err.to_string();
        match err {
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => Self::Decode(message),
            _ => Self::Database(message),
        }
    }
}
