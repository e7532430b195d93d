//! Risk Data Service - HTTP API over the risk store
//!
//! This is the main entry point for the risk data service.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use risk_data_service::{create_router, AppState, ServiceConfig};
use risk_data_store::{InitOutcome, SqliteStore, Store};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,risk_data=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Risk Data Service");

    // Load configuration from environment
    let config = ServiceConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        db_path = %config.db_path,
        analysis_configured = %config.analysis_url.is_some(),
        "Service configuration loaded"
    );

    tracing::info!(path = %config.db_path, "Opening SQLite store");
    let store = Arc::new(SqliteStore::open_lazy(
        &config.db_path,
        config.db_max_connections,
    ));

    // A store failure leaves the service running in degraded mode
    match store.ensure_initialized().await {
        Ok(InitOutcome::Created { seeded_events }) => {
            tracing::info!(seeded_events, "Store created and seeded");
        }
        Ok(InitOutcome::Reseeded { seeded_events }) => {
            tracing::warn!(seeded_events, "Store reference data re-seeded");
        }
        Ok(InitOutcome::AlreadyInitialized) => {
            tracing::info!("Store already initialized");
        }
        Err(e) => {
            tracing::error!(error = %e, "Store initialization failed, serving in degraded mode");
        }
    }

    // Build app state
    let state = AppState::new(store, config.clone());
    tracing::info!(
        analysis_enabled = state.has_analysis(),
        "Application state ready"
    );

    // Create the router
    let app = create_router(state);
    tracing::info!("Router configured with all API endpoints");

    // Start HTTP server
    tracing::info!(listen_addr = %config.listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
