//! Metrics Fetch Client
//!
//! One request, one document. The fetch is a single attempt with no retry or
//! backoff; callers get the full document or a `FetchError`.
//!
//! - **error**: `FetchError` (always available, shared with the browser app)
//! - **source**: `MetricsSource` trait and `FileSource`
//! - **http**: reqwest-backed `MetricsClient`

pub mod error;
#[cfg(feature = "client")]
pub mod http;
#[cfg(feature = "client")]
pub mod source;

pub use error::FetchError;
#[cfg(feature = "client")]
pub use http::{ClientConfig, MetricsClient};
#[cfg(feature = "client")]
pub use source::{FileSource, MetricsSource};
