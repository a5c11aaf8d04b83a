//! Metrics sources
//!
//! A page only needs "something that returns a metrics document". The HTTP
//! client is the production source; `FileSource` serves a saved document.

use async_trait::async_trait;
use std::path::PathBuf;

use super::error::FetchError;
use crate::metrics::MetricsDocument;

/// Common trait for everything a page can fetch from
#[async_trait]
pub trait MetricsSource: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Fetch the full document. Single attempt, no retries.
    async fn fetch_metrics(&self) -> Result<MetricsDocument, FetchError>;
}

/// Reads a document previously saved as JSON
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MetricsSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch_metrics(&self) -> Result<MetricsDocument, FetchError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| FetchError::Network(format!("{}: {}", self.path.display(), e)))?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
