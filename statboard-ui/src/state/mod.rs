//! State Management
//!
//! Per-page reactive state. Nothing is shared between pages.

pub mod page;

pub use page::{use_page, PageHandle};
