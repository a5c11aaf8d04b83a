//! View Selection
//!
//! Per-page UI choices, passed explicitly into every derivation call.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::metrics::TimeFrame;

/// Tab of a category page
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Stat cards for the selected frame, never with trends
    #[default]
    Overview,
    /// Raw metric rows with optional growth trends
    Details,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Details => "Detailed Stats",
        }
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overview" => Ok(Tab::Overview),
            "details" | "detail" => Ok(Tab::Details),
            _ => Err(format!("Unknown tab: {}", s)),
        }
    }
}

/// Selection state for one mounted page
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewSelection {
    pub time_frame: TimeFrame,
    pub show_trend: bool,
    pub tab: Tab,
}

impl ViewSelection {
    pub fn new(time_frame: TimeFrame) -> Self {
        Self {
            time_frame,
            ..Self::default()
        }
    }

    /// Builder method: toggle growth percentages
    pub fn with_trend(mut self, show_trend: bool) -> Self {
        self.show_trend = show_trend;
        self
    }

    /// Builder method: select a tab
    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.tab = tab;
        self
    }

    /// Whether rows derived for this selection carry trends
    pub fn trends_enabled(&self) -> bool {
        self.show_trend && self.tab == Tab::Details
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection() {
        let selection = ViewSelection::default();
        assert_eq!(selection.time_frame, TimeFrame::Daily);
        assert!(!selection.show_trend);
        assert_eq!(selection.tab, Tab::Overview);
    }

    #[test]
    fn test_trends_only_on_details_tab() {
        let selection = ViewSelection::new(TimeFrame::Monthly).with_trend(true);
        assert!(!selection.trends_enabled());
        assert!(selection.with_tab(Tab::Details).trends_enabled());
    }
}
