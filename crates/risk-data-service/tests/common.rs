//! Common test utilities for risk data service integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use tempfile::TempDir;

use risk_data_service::{create_router, AppState, ServiceConfig};
use risk_data_store::{SqliteStore, Store};

/// Nothing listens on the discard port, so analysis calls fail fast.
pub const UNREACHABLE_ANALYSIS_URL: &str = "http://127.0.0.1:9/analyze";

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Direct store handle for checking what requests wrote.
    pub store: Arc<SqliteStore>,
    /// Temporary directory for the database (kept alive for test duration).
    pub _temp_dir: TempDir,
}

impl TestHarness {
    /// Create a harness over a freshly seeded database.
    pub async fn new() -> Self {
        Self::build(Some(UNREACHABLE_ANALYSIS_URL.into()), true).await
    }

    /// Create a harness whose simulate calls reach `url`.
    pub async fn with_analysis_url(url: impl Into<String>) -> Self {
        Self::build(Some(url.into()), true).await
    }

    /// Create a harness over an empty, uninitialized database file.
    pub async fn uninitialized() -> Self {
        Self::build(None, false).await
    }

    /// Create a harness whose database directory does not exist.
    pub async fn unreachable() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("missing").join("fraud_platform.db");
        Self::from_path(temp_dir, db_path.to_string_lossy().to_string(), None)
    }

    async fn build(analysis_url: Option<String>, initialize: bool) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let db_path = temp_dir
            .path()
            .join("fraud_platform.db")
            .to_string_lossy()
            .to_string();

        let harness = Self::from_path(temp_dir, db_path, analysis_url);
        if initialize {
            harness
                .store
                .ensure_initialized()
                .await
                .expect("Failed to initialize store");
        }
        harness
    }

    fn from_path(temp_dir: TempDir, db_path: String, analysis_url: Option<String>) -> Self {
        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            db_path,
            db_max_connections: 4,
            analysis_url,
            analysis_timeout_seconds: 2,
            analysis_queue_capacity: 16,
            analysis_max_in_flight: 2,
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
        };

        let store = Arc::new(SqliteStore::open_lazy(
            &config.db_path,
            config.db_max_connections,
        ));
        let state = AppState::new(store.clone(), config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            store,
            _temp_dir: temp_dir,
        }
    }
}
