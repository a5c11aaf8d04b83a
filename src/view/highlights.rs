//! User Highlights
//!
//! Summary cards for the users page: headline counts annotated with their
//! change since last month or their share of the user base.

use serde::Serialize;

use crate::metrics::{display_name, Category, CategoryMetrics, MetricsSnapshot, TimeFrame};

use super::row::{format_value, round2};

const TOTAL_USERS: &str = "totalUser";

/// Annotation under a highlight value
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HighlightNote {
    /// Absolute change against the monthly snapshot
    ChangeSinceLastMonth { delta: f64 },
    /// Percentage of total users, two decimals
    ShareOfTotalUsers { percent: f64 },
}

impl std::fmt::Display for HighlightNote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HighlightNote::ChangeSinceLastMonth { delta } => {
                let sign = if *delta < 0.0 { "-" } else { "+" };
                write!(f, "{}{} from last month", sign, format_value(delta.abs()))
            }
            HighlightNote::ShareOfTotalUsers { percent } => {
                write!(f, "{:.2}% of total users", percent)
            }
        }
    }
}

/// One summary card
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Highlight {
    pub key: &'static str,
    pub label: &'static str,
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<HighlightNote>,
}

#[derive(Clone, Copy)]
enum NoteKind {
    Change,
    Share,
}

const CARDS: &[(&str, NoteKind)] = &[
    ("totalUser", NoteKind::Change),
    ("activeUser", NoteKind::Share),
    ("totalReferral", NoteKind::Change),
    ("creator", NoteKind::Share),
];

/// Summary cards from the daily snapshot of the user category
pub fn user_highlights(metrics: &CategoryMetrics) -> Vec<Highlight> {
    let current = metrics.snapshot(TimeFrame::Daily);
    let last_month = metrics.windows().map(|w| &w.monthly);

    CARDS
        .iter()
        .map(|&(key, kind)| {
            let value = current.get(key);
            let note = value.and_then(|v| match kind {
                NoteKind::Change => change_since(v, key, last_month),
                NoteKind::Share => share_of_total(v, current),
            });
            Highlight {
                key,
                label: display_name(Category::User, key),
                value,
                note,
            }
        })
        .collect()
}

fn change_since(
    value: f64,
    key: &str,
    last_month: Option<&MetricsSnapshot>,
) -> Option<HighlightNote> {
    let previous = last_month?.get(key)?;
    Some(HighlightNote::ChangeSinceLastMonth {
        delta: value - previous,
    })
}

fn share_of_total(value: f64, current: &MetricsSnapshot) -> Option<HighlightNote> {
    let total = current.get(TOTAL_USERS).filter(|t| *t != 0.0)?;
    Some(HighlightNote::ShareOfTotalUsers {
        percent: round2(value / total * 100.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::WindowedSnapshots;

    fn snapshot(pairs: &[(&str, f64)]) -> MetricsSnapshot {
        MetricsSnapshot::new(pairs.iter().map(|(k, v)| (*k, *v))).unwrap()
    }

    fn metrics(daily: MetricsSnapshot, monthly: MetricsSnapshot) -> CategoryMetrics {
        CategoryMetrics::Windowed(WindowedSnapshots {
            daily,
            monthly,
            all_time: MetricsSnapshot::default(),
        })
    }

    #[test]
    fn test_user_highlights() {
        let cards = user_highlights(&metrics(
            snapshot(&[
                ("totalUser", 200.0),
                ("activeUser", 50.0),
                ("totalReferral", 12.0),
                ("creator", 3.0),
            ]),
            snapshot(&[("totalUser", 180.0), ("totalReferral", 15.0)]),
        ));

        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].label, "Total Users");
        assert_eq!(cards[0].note.unwrap().to_string(), "+20 from last month");
        assert_eq!(cards[1].note.unwrap().to_string(), "25.00% of total users");
        assert_eq!(cards[2].note.unwrap().to_string(), "-3 from last month");
        assert_eq!(
            cards[3].note,
            Some(HighlightNote::ShareOfTotalUsers { percent: 1.5 })
        );
    }

    #[test]
    fn test_share_of_zero_users_is_omitted() {
        let cards = user_highlights(&metrics(
            snapshot(&[("totalUser", 0.0), ("activeUser", 0.0)]),
            MetricsSnapshot::default(),
        ));

        assert_eq!(cards[1].value, Some(0.0));
        assert!(cards[1].note.is_none());
        // no monthly value to compare against
        assert!(cards[0].note.is_none());
        // absent from the snapshot entirely
        assert!(cards[3].value.is_none());
    }
}
