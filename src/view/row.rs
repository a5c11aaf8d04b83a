//! Stat Rows
//!
//! Derived display records and the growth arithmetic behind them.

use serde::Serialize;

/// Direction of change against the baseline
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl TrendDirection {
    pub fn arrow(&self) -> &'static str {
        match self {
            TrendDirection::Up => "↑",
            TrendDirection::Down => "↓",
            TrendDirection::Flat => "→",
        }
    }
}

/// Signed percentage change of a metric
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Trend {
    pub direction: TrendDirection,
    /// Rounded to two decimals
    pub percent: f64,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:.2}%", self.direction.arrow(), self.percent)
    }
}

/// Reason a trend was not computed. Not an error: the row renders without it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputationSkip {
    /// The frame has no baseline window
    NoBaseline,
    /// The baseline snapshot lacks the metric
    MissingBaselineValue,
    /// The baseline value is zero
    ZeroBaseline,
}

/// One derived display row
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatRow {
    /// Metric key from the snapshot
    pub label: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
}

impl StatRow {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            trend: None,
        }
    }

    /// Builder method: attach a trend
    pub fn trend(mut self, trend: Option<Trend>) -> Self {
        self.trend = trend;
        self
    }
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // -0.0 prints as "-0.00"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Percentage change of `value` against `baseline`
pub fn compute_trend(value: f64, baseline: Option<f64>) -> Result<Trend, ComputationSkip> {
    let baseline = baseline.ok_or(ComputationSkip::MissingBaselineValue)?;
    if baseline == 0.0 {
        return Err(ComputationSkip::ZeroBaseline);
    }

    let percent = round2((value - baseline) / baseline * 100.0);
    let direction = if value > baseline {
        TrendDirection::Up
    } else if value < baseline {
        TrendDirection::Down
    } else {
        TrendDirection::Flat
    };

    Ok(Trend { direction, percent })
}

/// Format a metric value: integers without decimals, fractions with two
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}
