//! Analysis engine integration.
//!
//! The analysis engine is an external service that re-scores stored
//! transactions. This service only triggers it:
//! - One POST per simulate request, with no body
//! - The response code is logged, the body ignored
//! - Failures never reach the HTTP caller

pub mod client;
pub mod dispatcher;

pub use client::{AnalysisClient, AnalysisError};
pub use dispatcher::{AnalysisDispatcher, AnalysisJob, DispatchError};
