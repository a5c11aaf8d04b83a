//! Row Renderer
//!
//! Pure derivation of ordered `StatRow`s from a category slice and a
//! `ViewSelection`. Nothing here mutates the fetched data; calling it twice
//! with the same inputs yields the same rows.

use crate::metrics::{display_order, Category, CategoryMetrics, MetricSpec, MetricsSnapshot};

use super::row::{compute_trend, ComputationSkip, StatRow, Trend};
use super::selection::ViewSelection;

/// Rows for a category page under the given selection
pub fn render_rows(
    category: Category,
    metrics: &CategoryMetrics,
    selection: &ViewSelection,
) -> Vec<StatRow> {
    let snapshot = metrics.snapshot(selection.time_frame);
    let baseline = metrics.baseline(selection.time_frame);

    derive_rows(
        snapshot,
        baseline,
        display_order(category),
        selection.trends_enabled(),
    )
}

/// Rows for a snapshot against an optional baseline.
///
/// Keys known to `order` come first in that order, the remaining keys follow
/// lexicographically. Trends are attached only when `show_trend` is set and
/// the baseline value is present and non-zero.
pub fn derive_rows(
    snapshot: &MetricsSnapshot,
    baseline: Option<&MetricsSnapshot>,
    order: &[MetricSpec],
    show_trend: bool,
) -> Vec<StatRow> {
    ordered_keys(snapshot, order)
        .into_iter()
        .filter_map(|key| {
            let value = snapshot.get(key)?;
            let trend = if show_trend {
                trend_for(key, value, baseline).ok()
            } else {
                None
            };
            Some(StatRow::new(key, value).trend(trend))
        })
        .collect()
}

fn trend_for(
    key: &str,
    value: f64,
    baseline: Option<&MetricsSnapshot>,
) -> Result<Trend, ComputationSkip> {
    let baseline = baseline.ok_or(ComputationSkip::NoBaseline)?;
    compute_trend(value, baseline.get(key)).map_err(|skip| {
        tracing::trace!(metric = %key, ?skip, "Trend skipped");
        skip
    })
}

fn ordered_keys<'a>(snapshot: &'a MetricsSnapshot, order: &'a [MetricSpec]) -> Vec<&'a str> {
    let mut keys: Vec<&str> = order
        .iter()
        .map(|spec| spec.key)
        .filter(|key| snapshot.contains(key))
        .collect();

    // BTreeMap iteration is already lexicographic
    keys.extend(
        snapshot
            .keys()
            .filter(|key| order.iter().all(|spec| spec.key != *key)),
    );
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{TimeFrame, WindowedSnapshots};
    use crate::view::row::TrendDirection;
    use crate::view::selection::Tab;

    fn snapshot(pairs: &[(&str, f64)]) -> MetricsSnapshot {
        MetricsSnapshot::new(pairs.iter().map(|(k, v)| (*k, *v))).unwrap()
    }

    fn user_metrics() -> CategoryMetrics {
        CategoryMetrics::Windowed(WindowedSnapshots {
            daily: snapshot(&[("totalUser", 120.0), ("activeUser", 30.0), ("creator", 6.0)]),
            monthly: snapshot(&[("totalUser", 100.0), ("activeUser", 0.0), ("creator", 8.0)]),
            all_time: snapshot(&[("totalUser", 80.0), ("activeUser", 40.0), ("creator", 4.0)]),
        })
    }

    #[test]
    fn test_trend_scenario_up_twenty_percent() {
        let rows = derive_rows(
            &snapshot(&[("totalUser", 120.0)]),
            Some(&snapshot(&[("totalUser", 100.0)])),
            &[],
            true,
        );

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, "totalUser");
        assert_eq!(rows[0].value, 120.0);
        let trend = rows[0].trend.unwrap();
        assert_eq!(trend.direction, TrendDirection::Up);
        assert_eq!(trend.percent, 20.0);
    }

    #[test]
    fn test_trend_scenario_zero_baseline() {
        let rows = derive_rows(
            &snapshot(&[("totalPosts", 50.0)]),
            Some(&snapshot(&[("totalPosts", 0.0)])),
            &[],
            true,
        );

        assert_eq!(rows, vec![StatRow::new("totalPosts", 50.0)]);
    }

    #[test]
    fn test_rows_follow_catalog_order_then_unknown_keys() {
        let rows = derive_rows(
            &snapshot(&[("zeta", 1.0), ("creator", 2.0), ("alpha", 3.0), ("totalUser", 4.0)]),
            None,
            display_order(Category::User),
            false,
        );

        let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["totalUser", "creator", "alpha", "zeta"]);
    }

    #[test]
    fn test_catalog_keys_absent_from_snapshot_are_skipped() {
        let rows = derive_rows(
            &snapshot(&[("totalViews", 9.0)]),
            None,
            display_order(Category::Content),
            false,
        );
        assert_eq!(rows, vec![StatRow::new("totalViews", 9.0)]);
    }

    #[test]
    fn test_render_daily_compares_against_monthly() {
        let selection = ViewSelection::new(TimeFrame::Daily)
            .with_trend(true)
            .with_tab(Tab::Details);
        let rows = render_rows(Category::User, &user_metrics(), &selection);

        assert_eq!(rows[0].label, "totalUser");
        assert_eq!(rows[0].trend.unwrap().percent, 20.0);
        // monthly activeUser is zero
        assert_eq!(rows[1].label, "activeUser");
        assert!(rows[1].trend.is_none());
        assert_eq!(rows[2].trend.unwrap().direction, TrendDirection::Down);
        assert_eq!(rows[2].trend.unwrap().percent, -25.0);
    }

    #[test]
    fn test_render_all_time_has_no_trend() {
        let selection = ViewSelection::new(TimeFrame::AllTime)
            .with_trend(true)
            .with_tab(Tab::Details);
        let rows = render_rows(Category::User, &user_metrics(), &selection);

        assert_eq!(rows[0].value, 80.0);
        assert!(rows.iter().all(|r| r.trend.is_none()));
    }

    #[test]
    fn test_overview_tab_ignores_trend_toggle() {
        let selection = ViewSelection::new(TimeFrame::Daily).with_trend(true);
        let rows = render_rows(Category::User, &user_metrics(), &selection);
        assert!(rows.iter().all(|r| r.trend.is_none()));
    }

    #[test]
    fn test_render_is_pure() {
        let metrics = user_metrics();
        let before = metrics.clone();
        let selection = ViewSelection::new(TimeFrame::Monthly)
            .with_trend(true)
            .with_tab(Tab::Details);

        let first = render_rows(Category::User, &metrics, &selection);
        let second = render_rows(Category::User, &metrics, &selection);
        let _ = render_rows(Category::User, &metrics, &ViewSelection::new(TimeFrame::AllTime));

        assert_eq!(first, second);
        assert_eq!(metrics, before);
    }
}
