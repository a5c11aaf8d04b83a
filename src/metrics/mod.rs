//! Metrics Document
//!
//! Typed model of the pre-aggregated metrics the backend serves:
//!
//! - **types**: Snapshots, categories, time frames and the document itself
//! - **catalog**: Fixed display order and names per category
//! - **error**: Shape errors for documents that break the contract
//!
//! # Wire format
//!
//! ```text
//! {
//!   "blockchainMetrics": { "daily": {..}, "monthly": {..}, "allTime": {..} },
//!   "contentMetrics":    { "daily": {..}, "monthly": {..}, "allTime": {..} },
//!   "userMetrics":       { "daily": {..}, "monthly": {..}, "allTime": {..} }
//! }
//! ```
//!
//! A category may also be a flat `{ "metric": value }` map of current values.

pub mod catalog;
pub mod error;
pub mod types;

pub use catalog::{display_name, display_order, MetricSpec};
pub use error::DataShapeError;
pub use types::{
    Category, CategoryMetrics, MetricsDocument, MetricsSnapshot, TimeFrame, WindowedSnapshots,
};
