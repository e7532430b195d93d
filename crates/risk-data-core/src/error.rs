//! Error types for the risk data core.

/// Errors that can occur when interpreting stored labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The label is not one of CRITICAL, HIGH, MEDIUM, LOW.
    #[error("unknown risk level: {0}")]
    UnknownRiskLevel(String),

    /// The label is not one of the fixed vendor categories.
    #[error("unknown vendor category: {0}")]
    UnknownVendorCategory(String),
}
