//! Risk Data HTTP API Service.
//!
//! This crate provides the HTTP API over the risk store, including:
//!
//! - The recent transaction feed
//! - Risk-level statistics
//! - Traffic simulation with a fire-and-forget analysis trigger
//! - A health probe reporting store reachability
//!
//! # Degraded mode
//!
//! The service starts even when the store cannot be initialized. Read
//! endpoints then answer with empty results and simulate fails per request.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // The preflight handler has nothing to await

pub mod analysis;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use analysis::{AnalysisClient, AnalysisDispatcher, AnalysisError, DispatchError};
pub use config::ServiceConfig;
pub use error::ApiError;
pub use handlers::simulate::SIMULATE_BATCH_SIZE;
pub use routes::create_router;
pub use state::AppState;
