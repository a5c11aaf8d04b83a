//! UI Components
//!
//! Reusable Leptos components for the dashboard pages.

pub mod controls;
pub mod loading;
pub mod nav;
pub mod stat_card;
pub mod visuals;

pub use controls::{TabBar, TimeFrameSelect, TrendSwitch};
pub use loading::{CardSkeleton, PageBody};
pub use nav::Nav;
pub use stat_card::{DetailCard, HighlightCard, StatCard, StatTile};
