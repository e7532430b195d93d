//! SQLite storage layer for the risk data service.
//!
//! This crate owns the relational store of customers, vendors, transactions,
//! and risk results. It provides:
//!
//! - **Schema lifecycle**: [`Store::ensure_initialized`] creates and seeds the
//!   database idempotently
//! - **Generation**: [`Store::generate`] writes synthetic transaction and
//!   risk-result pairs
//! - **Queries**: the recent feed and the risk-level histogram
//!
//! # Connections
//!
//! [`SqliteStore`] wraps a lazily connected pool. Opening a store never fails;
//! an unreachable database file surfaces as a [`StoreError::Database`] on the
//! first operation. Connections are acquired per operation and returned to
//! the pool when it finishes.
//!
//! # Example
//!
//! ```no_run
//! use risk_data_store::{SqliteStore, Store, API_FEED_LIMIT};
//!
//! # async fn example() -> risk_data_store::Result<()> {
//! let store = SqliteStore::open_lazy("/tmp/fraud_platform.db", 5);
//! store.ensure_initialized().await?;
//!
//! let written = store.generate(10).await?;
//! let feed = store.recent_feed(API_FEED_LIMIT).await;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod schema;
pub mod sqlite;

pub use error::{Result, StoreError};
pub use sqlite::SqliteStore;

use async_trait::async_trait;
use risk_data_core::{FeedEntry, RiskHistogram, SyntheticEvent};
use serde::Serialize;

// ============================================================================
// Constants
// ============================================================================

/// Default database file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "../database/fraud_platform.db";

/// Environment variable overriding [`DEFAULT_DB_PATH`].
pub const DB_PATH_ENV: &str = "DB_PATH";

/// Events generated when the schema is created on an empty database.
pub const SEED_EVENT_COUNT: usize = 500;

/// Events generated when tables exist but reference data is missing.
pub const FALLBACK_EVENT_COUNT: usize = 5;

/// Row cap of the feed served over HTTP.
pub const API_FEED_LIMIT: u32 = 100;

/// Row cap of the feed shown by the interactive viewer.
pub const VIEWER_FEED_LIMIT: u32 = 50;

/// Resolve the database path from `DB_PATH`, falling back to the default.
///
/// The service and the seed tool both resolve the path through this function
/// so they always open the same file.
#[must_use]
pub fn db_path_from_env() -> String {
    std::env::var(DB_PATH_ENV)
        .ok()
        .filter(|path| !path.is_empty())
        .unwrap_or_else(|| DEFAULT_DB_PATH.to_string())
}

/// Row counts of the four tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableCounts {
    /// Rows in `customers`.
    pub customers: u64,
    /// Rows in `vendors`.
    pub vendors: u64,
    /// Rows in `transactions`.
    pub transactions: u64,
    /// Rows in `risk_results`.
    pub risk_results: u64,
}

/// What [`Store::ensure_initialized`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// The schema was missing; tables were created and seeded.
    Created {
        /// Synthetic events written after seeding.
        seeded_events: usize,
    },
    /// Tables existed without customers; reference data was re-seeded.
    Reseeded {
        /// Fallback events written after re-seeding.
        seeded_events: usize,
    },
    /// Tables existed and were populated; nothing was written.
    AlreadyInitialized,
}

/// The storage trait defining all database operations.
///
/// This trait abstracts the storage layer so the HTTP API and tooling do not
/// depend on a specific database driver.
#[async_trait]
pub trait Store: Send + Sync {
    // =========================================================================
    // Schema Lifecycle
    // =========================================================================

    /// Create and seed the schema if needed. Safe to call on every start.
    ///
    /// # Errors
    ///
    /// Returns an error if the database is unreachable or seeding fails.
    async fn ensure_initialized(&self) -> Result<InitOutcome>;

    // =========================================================================
    // Generation
    // =========================================================================

    /// Generate and persist `count` synthetic events.
    ///
    /// Returns the number of events written, which equals `count` on success.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::BatchAborted` with the written count if an insert
    /// fails. Earlier events stay persisted.
    async fn generate(&self, count: usize) -> Result<usize>;

    /// Persist pre-drawn events, each transaction with its risk result as one unit.
    ///
    /// Returns the store-assigned transaction ids in input order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::BatchAborted` if an event cannot be written.
    async fn write_events(&self, events: &[SyntheticEvent]) -> Result<Vec<i64>>;

    // =========================================================================
    // Queries
    // =========================================================================

    /// Most recent risk results joined with their transaction and vendor,
    /// newest first, at most `limit` rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn fetch_recent_feed(&self, limit: u32) -> Result<Vec<FeedEntry>>;

    /// Risk result counts per level.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn fetch_risk_histogram(&self) -> Result<RiskHistogram>;

    /// Row counts of every table.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn counts(&self) -> Result<TableCounts>;

    /// Like [`Store::fetch_recent_feed`], but an unreachable or uninitialized
    /// store yields an empty feed.
    async fn recent_feed(&self, limit: u32) -> Vec<FeedEntry> {
        match self.fetch_recent_feed(limit).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!(error = %e, limit, "Recent feed query failed");
                Vec::new()
            }
        }
    }

    /// Like [`Store::fetch_risk_histogram`], but an unreachable or
    /// uninitialized store yields an all-zero histogram.
    async fn risk_histogram(&self) -> RiskHistogram {
        match self.fetch_risk_histogram().await {
            Ok(histogram) => histogram,
            Err(e) => {
                tracing::error!(error = %e, "Risk histogram query failed");
                RiskHistogram::default()
            }
        }
    }
}
