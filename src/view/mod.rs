//! View Renderer
//!
//! Turns a fetched category slice plus the page's selection into semantic
//! rows. Styling is left to the presentation layer.
//!
//! - **selection**: `ViewSelection` (time frame, trend toggle, tab)
//! - **row**: `StatRow`, `Trend` and the growth arithmetic
//! - **renderer**: ordered row derivation
//! - **highlights**: summary cards for the users page
//! - **page**: per-page `loading → ready | error` state machine
//!
//! # Example
//!
//! ```rust
//! use statboard::metrics::{Category, MetricsDocument, TimeFrame};
//! use statboard::view::{Page, Tab, ViewSelection};
//!
//! let document: MetricsDocument = serde_json::from_str(
//!     r#"{"userMetrics": {
//!         "daily": {"totalUser": 120},
//!         "monthly": {"totalUser": 100},
//!         "allTime": {"totalUser": 100}
//!     }}"#,
//! ).unwrap();
//!
//! let mut page = Page::new(Category::User);
//! let ticket = page.mount();
//! page.resolve(ticket, Ok(document));
//!
//! let selection = ViewSelection::new(TimeFrame::Daily)
//!     .with_trend(true)
//!     .with_tab(Tab::Details);
//! let rows = page.rows(&selection);
//! assert_eq!(rows[0].trend.unwrap().percent, 20.0);
//! ```

pub mod highlights;
pub mod page;
pub mod renderer;
pub mod row;
pub mod selection;

pub use highlights::{user_highlights, Highlight, HighlightNote};
pub use page::{MountTicket, Page, PageError, PageState};
pub use renderer::{derive_rows, render_rows};
pub use row::{compute_trend, format_value, ComputationSkip, StatRow, Trend, TrendDirection};
pub use selection::{Tab, ViewSelection};
