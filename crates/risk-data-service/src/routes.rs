//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{self, health, simulate, stats, transactions};
use crate::state::AppState;

/// Maximum concurrent requests for data endpoints.
const API_MAX_CONCURRENT_REQUESTS: usize = 50;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /health` - Health check with store reachability
///
/// ## Data (also served under `/api`)
/// - `GET /transactions` - Most recent risk results, newest first
/// - `GET /stats` - Risk result count per level
/// - `POST /simulate` - Generate traffic and queue an analysis run
/// - `OPTIONS /simulate` - CORS preflight (204)
///
/// Every response carries permissive CORS headers. Unsupported methods,
/// HEAD included, are answered with 405 and an empty body.
pub fn create_router(state: AppState) -> Router {
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;

    let state = Arc::new(state);

    let api_routes = Router::new()
        // HEAD would otherwise fall through to the GET handlers
        .route(
            "/transactions",
            get(transactions::list_transactions).head(handlers::method_not_allowed),
        )
        .route(
            "/stats",
            get(stats::get_stats).head(handlers::method_not_allowed),
        )
        .route(
            "/simulate",
            post(simulate::simulate).options(simulate::preflight),
        )
        .layer(ConcurrencyLimitLayer::new(API_MAX_CONCURRENT_REQUESTS));

    Router::new()
        // Health (public, no concurrency limit)
        .route("/health", get(health::health))
        // Dashboard clients use the `/api` prefix, older callers the bare paths
        .merge(api_routes.clone())
        .nest("/api", api_routes)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .with_state(state)
}
