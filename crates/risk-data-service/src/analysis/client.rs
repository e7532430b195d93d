//! Analysis engine HTTP client.

use std::time::Duration;

use reqwest::{Client, StatusCode};

/// Error type for analysis calls.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// HTTP request failed, including timeouts and refused connections.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Analysis engine client.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    client: Client,
    url: String,
}

impl AnalysisClient {
    /// Create a new analysis client.
    ///
    /// # Arguments
    ///
    /// * `url` - Full trigger endpoint (e.g., `"http://127.0.0.1:5000/analyze"`)
    /// * `timeout` - Upper bound for a single call, connect included
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, AnalysisError> {
        let url = url.into();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AnalysisError::Configuration(format!(
                "analysis URL must be http(s): {url}"
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AnalysisError::Configuration(e.to_string()))?;

        Ok(Self { client, url })
    }

    /// The endpoint this client posts to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Trigger an analysis run.
    ///
    /// Any HTTP response counts as delivered; the status is returned for logging.
    pub async fn trigger(&self) -> Result<StatusCode, AnalysisError> {
        let response = self.client.post(&self.url).send().await?;
        Ok(response.status())
    }
}
