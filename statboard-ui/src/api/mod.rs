//! API Layer
//!
//! HTTP access to the metrics backend.

pub mod client;

pub use client::{fetch_dashboard_data, get_api_base};
