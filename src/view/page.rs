//! Page State
//!
//! Lifecycle of one mounted dashboard page: `Loading` until its single fetch
//! resolves, then `Ready` or `Error` for the rest of the mount. A response
//! that belongs to an earlier mount, or arrives after unmount, is dropped.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::client::FetchError;
use crate::metrics::{Category, CategoryMetrics, DataShapeError, MetricsDocument};

use super::highlights::{user_highlights, Highlight};
use super::renderer::render_rows;
use super::row::StatRow;
use super::selection::ViewSelection;

/// Errors shown at the page boundary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PageError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    DataShape(#[from] DataShapeError),
}

impl PageError {
    /// Whether this is the recoverable "no data" case
    pub fn is_no_data(&self) -> bool {
        matches!(self, PageError::DataShape(e) if e.is_no_data())
    }
}

/// State of a page
#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Loading,
    Ready {
        metrics: CategoryMetrics,
        fetched_at: DateTime<Utc>,
    },
    Error(PageError),
}

impl PageState {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    /// Short name for logs and status output
    pub fn name(&self) -> &'static str {
        match self {
            PageState::Loading => "loading",
            PageState::Ready { .. } => "ready",
            PageState::Error(_) => "error",
        }
    }
}

/// Proof of which mount a fetch was started for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountTicket {
    generation: u64,
}

/// One dashboard page and the data it owns
#[derive(Debug, Clone)]
pub struct Page {
    category: Category,
    state: PageState,
    generation: u64,
    mounted: bool,
}

impl Page {
    /// Create an unmounted page
    pub fn new(category: Category) -> Self {
        Self {
            category,
            state: PageState::Loading,
            generation: 0,
            mounted: false,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Start a fresh mount. Any data from a previous mount is discarded.
    pub fn mount(&mut self) -> MountTicket {
        self.generation += 1;
        self.mounted = true;
        self.state = PageState::Loading;
        tracing::debug!(page = %self.category, generation = self.generation, "Page mounted");
        MountTicket {
            generation: self.generation,
        }
    }

    /// Leave the page. Outstanding fetches will be ignored when they resolve.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.state = PageState::Loading;
        tracing::debug!(page = %self.category, "Page unmounted");
    }

    /// Apply the outcome of the fetch started for `ticket`.
    ///
    /// Returns `false` when the result was discarded: stale ticket, page not
    /// mounted, or the page already left `Loading`.
    pub fn resolve(
        &mut self,
        ticket: MountTicket,
        result: Result<MetricsDocument, FetchError>,
    ) -> bool {
        if !self.mounted || ticket.generation != self.generation {
            tracing::warn!(
                page = %self.category,
                ticket = ticket.generation,
                current = self.generation,
                "Discarding stale metrics response"
            );
            return false;
        }
        if self.state.is_terminal() {
            tracing::warn!(page = %self.category, state = self.state.name(), "Page already resolved");
            return false;
        }

        self.state = match result {
            Ok(document) => match document.category(self.category) {
                Ok(metrics) => PageState::Ready {
                    metrics: metrics.clone(),
                    fetched_at: Utc::now(),
                },
                Err(e) => PageState::Error(e.into()),
            },
            Err(e) => PageState::Error(e.into()),
        };

        tracing::debug!(page = %self.category, state = self.state.name(), "Page resolved");
        true
    }

    /// Fetched category data, when ready
    pub fn metrics(&self) -> Option<&CategoryMetrics> {
        match &self.state {
            PageState::Ready { metrics, .. } => Some(metrics),
            _ => None,
        }
    }

    /// Rows for the current selection; empty unless the page is ready
    pub fn rows(&self, selection: &ViewSelection) -> Vec<StatRow> {
        self.metrics()
            .map(|metrics| render_rows(self.category, metrics, selection))
            .unwrap_or_default()
    }

    /// Summary cards; only the users page has them
    pub fn highlights(&self) -> Vec<Highlight> {
        match (self.category, self.metrics()) {
            (Category::User, Some(metrics)) => user_highlights(metrics),
            _ => Vec::new(),
        }
    }

    pub fn error(&self) -> Option<&PageError> {
        match &self.state {
            PageState::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Message to show instead of rows
    pub fn message(&self) -> Option<String> {
        match &self.state {
            PageState::Loading => Some("Loading...".to_string()),
            PageState::Ready { .. } => None,
            PageState::Error(e) if e.is_no_data() => {
                Some(format!("No {} data available", self.category.slug()))
            }
            PageState::Error(e) => Some(format!("Error: {}", e)),
        }
    }

    /// Mount, fetch once from `source`, and resolve
    #[cfg(feature = "client")]
    pub async fn load(&mut self, source: &dyn crate::client::MetricsSource) -> &PageState {
        let ticket = self.mount();
        let result = source.fetch_metrics().await;
        self.resolve(ticket, result);
        &self.state
    }
}
