//! Metrics HTTP client
//!
//! Fetches the composite metrics document from the dashboard backend.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::Instrument;

use super::error::FetchError;
use super::source::MetricsSource;
use crate::metrics::MetricsDocument;

/// Configuration for the metrics client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend (e.g., "http://localhost:3000/api")
    pub base_url: String,
    /// Path of the metrics endpoint below `base_url`
    pub metrics_path: String,
    /// Overall request timeout; `None` leaves the request unbounded
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            metrics_path: "/dashboard".to_string(),
            request_timeout: Some(Duration::from_secs(30)),
        }
    }
}

/// reqwest-backed metrics source
pub struct MetricsClient {
    client: Client,
    config: ClientConfig,
}

impl MetricsClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full URL of the metrics endpoint
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.metrics_path.trim_start_matches('/')
        )
    }

    /// Fetch the metrics document
    pub async fn fetch_metrics(&self) -> Result<MetricsDocument, FetchError> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let url = self.endpoint();
        let span = tracing::info_span!("fetch_metrics", request_id = %request_id, url = %url);

        self.fetch_from(&url).instrument(span).await
    }

    async fn fetch_from(&self, url: &str) -> Result<MetricsDocument, FetchError> {
        tracing::debug!("Fetching metrics");

        let response = self.client.get(url).send().await.map_err(|e| {
            let err = FetchError::from(e);
            tracing::warn!(error = %err, "Metrics request failed");
            err
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = error_message(&text)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_else(|| "Unknown error".to_string());
            tracing::warn!(
                status = status.as_u16(),
                message = %message,
                "Metrics backend returned an error"
            );
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        let document: MetricsDocument = serde_json::from_slice(&bytes)?;

        tracing::debug!(
            bytes = bytes.len(),
            categories = document.category_keys().count(),
            "Fetched metrics"
        );
        Ok(document)
    }
}

#[async_trait]
impl MetricsSource for MetricsClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_metrics(&self) -> Result<MetricsDocument, FetchError> {
        MetricsClient::fetch_metrics(self).await
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Message from an error body: `{"error": ..}`, `{"message": ..}` or plain text
fn error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.error.or(parsed.message),
        Err(_) => Some(body.to_string()),
    }
}
