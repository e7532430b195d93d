//! Service configuration.

/// Default downstream analysis endpoint.
pub const DEFAULT_ANALYSIS_URL: &str = "http://127.0.0.1:5000/analyze";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:8080").
    pub listen_addr: String,

    /// Path to the `SQLite` database (default: `risk_data_store::DEFAULT_DB_PATH`).
    pub db_path: String,

    /// Maximum pooled database connections.
    pub db_max_connections: u32,

    /// Analysis engine endpoint. `None` disables the downstream call.
    pub analysis_url: Option<String>,

    /// Timeout for each downstream analysis call, in seconds.
    pub analysis_timeout_seconds: u64,

    /// Pending analysis jobs held before new ones are dropped.
    pub analysis_queue_capacity: usize,

    /// Concurrent downstream analysis calls.
    pub analysis_max_in_flight: usize,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            db_path: risk_data_store::db_path_from_env(),
            db_max_connections: env_parse("DB_MAX_CONNECTIONS")
                .unwrap_or(defaults.db_max_connections),
            analysis_url: match std::env::var("ANALYSIS_URL") {
                Ok(url) if url.trim().is_empty() => None,
                Ok(url) => Some(url),
                Err(_) => defaults.analysis_url,
            },
            analysis_timeout_seconds: env_parse("ANALYSIS_TIMEOUT_SECONDS")
                .unwrap_or(defaults.analysis_timeout_seconds),
            analysis_queue_capacity: env_parse("ANALYSIS_QUEUE_CAPACITY")
                .unwrap_or(defaults.analysis_queue_capacity),
            analysis_max_in_flight: env_parse("ANALYSIS_MAX_IN_FLIGHT")
                .unwrap_or(defaults.analysis_max_in_flight),
            max_body_bytes: env_parse("MAX_BODY_BYTES").unwrap_or(defaults.max_body_bytes),
            request_timeout_seconds: env_parse("REQUEST_TIMEOUT_SECONDS")
                .unwrap_or(defaults.request_timeout_seconds),
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|s| s.trim().parse().ok())
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".into(),
            db_path: risk_data_store::DEFAULT_DB_PATH.into(),
            db_max_connections: 5,
            analysis_url: Some(DEFAULT_ANALYSIS_URL.into()),
            analysis_timeout_seconds: 10,
            analysis_queue_capacity: 64,
            analysis_max_in_flight: 4,
            max_body_bytes: 1024 * 1024, // 1MB
            request_timeout_seconds: 30,
        }
    }
}
