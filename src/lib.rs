//! # Statboard
//!
//! Analytics dashboard core: fetches a pre-aggregated metrics document
//! (blockchain, content and user statistics) and derives the stat rows,
//! growth trends and summary cards that dashboard pages display.
//!
//! ## Modules
//!
//! - [`metrics`]: Typed metrics document, snapshots and the metric catalog
//! - [`view`]: Row derivation, user highlights and the page state machine
//! - [`client`]: Metrics fetch client (`FetchError` is always available; the
//!   HTTP client needs the `client` feature)
//! - [`config`]: TOML configuration with environment overrides (`client`)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use statboard::client::{ClientConfig, MetricsClient};
//! use statboard::metrics::{Category, TimeFrame};
//! use statboard::view::{Page, Tab, ViewSelection};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MetricsClient::new(ClientConfig::default())?;
//!
//!     let mut page = Page::new(Category::Content);
//!     page.load(&client).await;
//!
//!     let selection = ViewSelection::new(TimeFrame::Monthly)
//!         .with_trend(true)
//!         .with_tab(Tab::Details);
//!     for row in page.rows(&selection) {
//!         println!("{}: {}", row.label, row.value);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
#[cfg(feature = "client")]
pub mod config;
pub mod metrics;
pub mod view;

// Re-export top-level types for convenience
pub use client::FetchError;
#[cfg(feature = "client")]
pub use client::{ClientConfig, FileSource, MetricsClient, MetricsSource};

pub use metrics::{
    Category, CategoryMetrics, DataShapeError, MetricsDocument, MetricsSnapshot, TimeFrame,
};

pub use view::{
    Highlight, HighlightNote, Page, PageError, PageState, StatRow, Tab, Trend, TrendDirection,
    ViewSelection,
};

#[cfg(feature = "client")]
pub use config::{ApiConfig, Config, ConfigError, DashboardConfig, LoadedConfig, LoggingConfig};
