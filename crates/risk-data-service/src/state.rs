//! Application state.

use std::sync::Arc;
use std::time::Duration;

use risk_data_store::SqliteStore;

use crate::analysis::{AnalysisClient, AnalysisDispatcher};
use crate::config::ServiceConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The storage backend.
    pub store: Arc<SqliteStore>,

    /// Service configuration.
    pub config: ServiceConfig,

    /// Analysis dispatcher (optional).
    pub analysis: Option<AnalysisDispatcher>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Spawns the analysis worker, so it must run inside a Tokio runtime.
    #[must_use]
    pub fn new(store: Arc<SqliteStore>, config: ServiceConfig) -> Self {
        let analysis = config.analysis_url.as_ref().and_then(|url| {
            let timeout = Duration::from_secs(config.analysis_timeout_seconds);
            match AnalysisClient::new(url, timeout) {
                Ok(client) => {
                    tracing::info!(
                        analysis_url = %client.url(),
                        queue_capacity = config.analysis_queue_capacity,
                        max_in_flight = config.analysis_max_in_flight,
                        "Analysis integration enabled"
                    );
                    Some(AnalysisDispatcher::spawn(
                        client,
                        config.analysis_queue_capacity,
                        config.analysis_max_in_flight,
                    ))
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to create analysis client");
                    None
                }
            }
        });

        if analysis.is_none() {
            tracing::warn!("Analysis not configured - simulate will not trigger analysis");
        }

        Self {
            store,
            config,
            analysis,
        }
    }

    /// Check if the analysis engine is configured.
    #[must_use]
    pub fn has_analysis(&self) -> bool {
        self.analysis.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Arc<SqliteStore> {
        Arc::new(SqliteStore::open_lazy("/nonexistent/fraud_platform.db", 1))
    }

    #[tokio::test]
    async fn analysis_follows_config() {
        let state = AppState::new(store(), ServiceConfig::default());
        assert!(state.has_analysis());

        let config = ServiceConfig {
            analysis_url: None,
            ..ServiceConfig::default()
        };
        assert!(!AppState::new(store(), config).has_analysis());
    }

    #[tokio::test]
    async fn invalid_analysis_url_disables_analysis() {
        let config = ServiceConfig {
            analysis_url: Some("not-a-url".into()),
            ..ServiceConfig::default()
        };
        assert!(!AppState::new(store(), config).has_analysis());
    }
}
