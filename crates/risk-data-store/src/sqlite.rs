//! SQLite storage implementation.
//!
//! This module provides the `SqliteStore` implementation of the `Store` trait.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteConnection, SqliteJournalMode, SqlitePool, SqlitePoolOptions,
    SqliteSynchronous,
};
use sqlx::{Connection, FromRow};

use risk_data_core::{
    draw_batch, FeedEntry, RiskHistogram, RiskLevel, SyntheticEvent, SEED_CUSTOMERS, SEED_VENDORS,
};

use crate::error::{Result, StoreError};
use crate::schema::{self, table};
use crate::{InitOutcome, Store, TableCounts, FALLBACK_EVENT_COUNT, SEED_EVENT_COUNT};

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// How long an operation waits for a pooled connection.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite-backed storage implementation.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open a store at `path` without connecting.
    ///
    /// The file is created on first use if its directory exists. Must be
    /// called from within a Tokio runtime.
    pub fn open_lazy<P: AsRef<Path>>(path: P, max_connections: u32) -> Self {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_lazy_with(options);

        Self { pool }
    }

    /// The underlying pool, for tooling that needs raw SQL access.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check connectivity by running a trivial query.
    pub async fn is_reachable(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl Store for SqliteStore {
    // =========================================================================
    // Schema Lifecycle
    // =========================================================================

    async fn ensure_initialized(&self) -> Result<InitOutcome> {
        let mut conn = self.pool.acquire().await?;

        if !has_table(&mut conn, table::CUSTOMERS).await? {
            tracing::info!("Database empty or missing, creating schema");

            let mut tx = conn.begin().await?;
            create_schema(&mut tx).await?;
            seed_reference(&mut tx).await?;
            tx.commit().await?;
            drop(conn);

            tracing::info!(events = SEED_EVENT_COUNT, "Seeding synthetic events");
            let seeded_events = self.generate(SEED_EVENT_COUNT).await?;
            return Ok(InitOutcome::Created { seeded_events });
        }

        if count_rows(&mut conn, table::CUSTOMERS).await? == 0 {
            tracing::warn!("Tables exist but customers are empty, re-seeding reference data");

            let mut tx = conn.begin().await?;
            create_schema(&mut tx).await?;
            seed_reference(&mut tx).await?;
            tx.commit().await?;
            drop(conn);

            let seeded_events = self.generate(FALLBACK_EVENT_COUNT).await?;
            return Ok(InitOutcome::Reseeded { seeded_events });
        }

        Ok(InitOutcome::AlreadyInitialized)
    }

    // =========================================================================
    // Generation
    // =========================================================================

    async fn generate(&self, count: usize) -> Result<usize> {
        let mut rng = StdRng::from_entropy();
        let events = draw_batch(&mut rng, count, Utc::now().naive_utc());

        let ids = self.write_events(&events).await?;
        tracing::info!(requested = count, written = ids.len(), "Generated synthetic events");

        Ok(ids.len())
    }

    async fn write_events(&self, events: &[SyntheticEvent]) -> Result<Vec<i64>> {
        let requested = events.len();
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| batch_aborted(0, requested, &e.into()))?;

        let mut ids = Vec::with_capacity(requested);
        for event in events {
            match write_event(&mut conn, event).await {
                Ok(id) => ids.push(id),
                Err(e) => {
                    tracing::warn!(
                        written = ids.len(),
                        requested,
                        error = %e,
                        "Generation batch aborted"
                    );
                    return Err(batch_aborted(ids.len(), requested, &e));
                }
            }
        }

        Ok(ids)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    async fn fetch_recent_feed(&self, limit: u32) -> Result<Vec<FeedEntry>> {
        let rows: Vec<FeedRow> = sqlx::query_as(
            "SELECT r.transaction_id, t.amount, r.risk_score, r.risk_level, r.reason, \
                    r.is_reviewed, t.timestamp, t.location, v.category \
             FROM risk_results r \
             JOIN transactions t ON r.transaction_id = t.transaction_id \
             LEFT JOIN vendors v ON t.vendor_id = v.vendor_id \
             ORDER BY r.timestamp DESC, r.result_id DESC \
             LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(FeedEntry::from).collect())
    }

    async fn fetch_risk_histogram(&self) -> Result<RiskHistogram> {
        let rows: Vec<(Option<String>, i64)> = sqlx::query_as(
            "SELECT risk_level, COUNT(*) FROM risk_results GROUP BY risk_level",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut histogram = RiskHistogram::default();
        for (label, count) in rows {
            let count = u64::try_from(count).unwrap_or(0);
            match label.as_deref().map(str::parse::<RiskLevel>) {
                Some(Ok(level)) => histogram.record(level, count),
                _ => tracing::warn!(label = ?label, count, "Skipping unknown risk level"),
            }
        }

        Ok(histogram)
    }

    async fn counts(&self) -> Result<TableCounts> {
        let mut conn = self.pool.acquire().await?;

        Ok(TableCounts {
            customers: count_rows(&mut conn, table::CUSTOMERS).await?,
            vendors: count_rows(&mut conn, table::VENDORS).await?,
            transactions: count_rows(&mut conn, table::TRANSACTIONS).await?,
            risk_results: count_rows(&mut conn, table::RISK_RESULTS).await?,
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Raw feed row before it is mapped to the read contract.
#[derive(Debug, FromRow)]
struct FeedRow {
    transaction_id: i64,
    amount: Option<f64>,
    risk_score: Option<f64>,
    risk_level: Option<String>,
    reason: Option<String>,
    is_reviewed: Option<bool>,
    timestamp: Option<String>,
    location: Option<String>,
    category: Option<String>,
}

impl From<FeedRow> for FeedEntry {
    fn from(row: FeedRow) -> Self {
        Self {
            id: row.transaction_id,
            amount: row.amount.unwrap_or_default(),
            score: row.risk_score.unwrap_or_default(),
            level: row.risk_level.unwrap_or_default(),
            reason: row.reason,
            reviewed: row.is_reviewed.unwrap_or(false),
            timestamp: row.timestamp,
            location: row.location,
            category: row.category,
        }
    }
}

fn batch_aborted(written: usize, requested: usize, err: &StoreError) -> StoreError {
    StoreError::BatchAborted {
        written,
        requested,
        reason: err.to_string(),
    }
}

async fn has_table(conn: &mut SqliteConnection, name: &str) -> Result<bool> {
    let found: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
    )
    .bind(name)
    .fetch_one(&mut *conn)
    .await?;

    Ok(found > 0)
}

async fn count_rows(conn: &mut SqliteConnection, table: &str) -> Result<u64> {
    // Table names come from `schema::table`, never from callers.
    let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(&mut *conn)
        .await?;

    Ok(u64::try_from(count).unwrap_or(0))
}

async fn create_schema(conn: &mut SqliteConnection) -> Result<()> {
    for ddl in schema::create_statements() {
        sqlx::query(ddl).execute(&mut *conn).await?;
    }
    Ok(())
}

async fn seed_reference(conn: &mut SqliteConnection) -> Result<()> {
    for customer in SEED_CUSTOMERS {
        sqlx::query("INSERT OR IGNORE INTO customers (customer_id, name, location) VALUES (?, ?, ?)")
            .bind(customer.id)
            .bind(customer.name)
            .bind(customer.location)
            .execute(&mut *conn)
            .await?;
    }

    for vendor in SEED_VENDORS {
        sqlx::query("INSERT OR IGNORE INTO vendors (vendor_id, name, category) VALUES (?, ?, ?)")
            .bind(vendor.id)
            .bind(vendor.name)
            .bind(vendor.category.as_str())
            .execute(&mut *conn)
            .await?;
    }

    tracing::debug!(
        customers = SEED_CUSTOMERS.len(),
        vendors = SEED_VENDORS.len(),
        "Reference data seeded"
    );
    Ok(())
}

/// Write one transaction and its risk result in a single database transaction.
async fn write_event(conn: &mut SqliteConnection, event: &SyntheticEvent) -> Result<i64> {
    let mut tx = conn.begin().await?;

    let transaction_id = sqlx::query(
        "INSERT INTO transactions (customer_id, vendor_id, amount, timestamp, location, status) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(event.customer_id)
    .bind(event.vendor_id)
    .bind(event.amount)
    .bind(event.timestamp)
    .bind(event.location)
    .bind(event.status())
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();

    sqlx::query(
        "INSERT INTO risk_results \
         (transaction_id, risk_score, risk_level, reason, fraud_probability, timestamp) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(transaction_id)
    .bind(event.risk_score)
    .bind(event.risk_level.as_str())
    .bind(event.reason)
    .bind(event.fraud_probability())
    .bind(event.timestamp)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(transaction_id)
}
