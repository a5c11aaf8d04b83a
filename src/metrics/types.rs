//! Core data types for the metrics document
//!
//! - `MetricsSnapshot`: named, non-negative aggregates for one time window
//! - `WindowedSnapshots`: the `daily` / `monthly` / `allTime` triple
//! - `CategoryMetrics`: a category slice, windowed or flat current values
//! - `MetricsDocument`: everything the backend returns in one response
//! - `Category` and `TimeFrame`: classification enums

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use super::error::DataShapeError;

/// Aggregated counts for one time window
///
/// Keys are fixed by the backend contract. Values are validated on
/// construction and never change afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, f64>",
    into = "BTreeMap<String, f64>"
)]
pub struct MetricsSnapshot {
    values: BTreeMap<String, f64>,
}

impl MetricsSnapshot {
    /// Build a snapshot from name/value pairs
    pub fn new<K, I>(pairs: I) -> Result<Self, DataShapeError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        let values: BTreeMap<String, f64> =
            pairs.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Self::try_from(values)
    }

    /// Value for a metric, if present
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Metric names in lexicographic order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl TryFrom<BTreeMap<String, f64>> for MetricsSnapshot {
    type Error = DataShapeError;

    fn try_from(values: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        if let Some((key, value)) = values
            .iter()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(DataShapeError::InvalidValue {
                key: key.clone(),
                value: *value,
            });
        }
        Ok(Self { values })
    }
}

impl From<MetricsSnapshot> for BTreeMap<String, f64> {
    fn from(snapshot: MetricsSnapshot) -> Self {
        snapshot.values
    }
}

/// Aggregation window selected by the user
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum TimeFrame {
    #[default]
    Daily,
    Monthly,
    AllTime,
}

impl TimeFrame {
    /// Get all time frames in selector order
    pub fn all() -> &'static [TimeFrame] {
        &[TimeFrame::Daily, TimeFrame::Monthly, TimeFrame::AllTime]
    }

    /// Key used for this window in the backend document
    pub fn wire_key(&self) -> &'static str {
        match self {
            TimeFrame::Daily => "daily",
            TimeFrame::Monthly => "monthly",
            TimeFrame::AllTime => "allTime",
        }
    }

    /// Human label for selectors
    pub fn label(&self) -> &'static str {
        match self {
            TimeFrame::Daily => "Daily",
            TimeFrame::Monthly => "Monthly",
            TimeFrame::AllTime => "All Time",
        }
    }

    /// Window that trends for this frame are measured against.
    ///
    /// Each frame compares to the next coarser window; `AllTime` has none.
    pub fn baseline(&self) -> Option<TimeFrame> {
        match self {
            TimeFrame::Daily => Some(TimeFrame::Monthly),
            TimeFrame::Monthly => Some(TimeFrame::AllTime),
            TimeFrame::AllTime => None,
        }
    }
}

impl std::fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_key())
    }
}

impl FromStr for TimeFrame {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" | "day" => Ok(TimeFrame::Daily),
            "monthly" | "month" => Ok(TimeFrame::Monthly),
            "alltime" | "all-time" | "all_time" | "all" => Ok(TimeFrame::AllTime),
            _ => Err(format!("Unknown time frame: {}", s)),
        }
    }
}

/// Metric category, one per dashboard page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Blockchain,
    Content,
    User,
}

impl Category {
    /// Get all categories in navigation order
    pub fn all() -> &'static [Category] {
        &[Category::Blockchain, Category::Content, Category::User]
    }

    /// Key of this category in the backend document
    pub fn wire_key(&self) -> &'static str {
        match self {
            Category::Blockchain => "blockchainMetrics",
            Category::Content => "contentMetrics",
            Category::User => "userMetrics",
        }
    }

    /// Page heading
    pub fn title(&self) -> &'static str {
        match self {
            Category::Blockchain => "Blockchain Metrics",
            Category::Content => "Content Management",
            Category::User => "User Metrics",
        }
    }

    /// Short name used in routes and on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Blockchain => "blockchain",
            Category::Content => "content",
            Category::User => "users",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "blockchain" | "blockchainmetrics" => Ok(Category::Blockchain),
            "content" | "contentmetrics" => Ok(Category::Content),
            "user" | "users" | "usermetrics" => Ok(Category::User),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

/// The three aggregation windows of a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowedSnapshots {
    pub daily: MetricsSnapshot,
    pub monthly: MetricsSnapshot,
    #[serde(rename = "allTime")]
    pub all_time: MetricsSnapshot,
}

impl WindowedSnapshots {
    pub fn get(&self, frame: TimeFrame) -> &MetricsSnapshot {
        match frame {
            TimeFrame::Daily => &self.daily,
            TimeFrame::Monthly => &self.monthly,
            TimeFrame::AllTime => &self.all_time,
        }
    }
}

/// One category slice of the document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryMetrics {
    /// Daily, monthly and all-time snapshots
    Windowed(WindowedSnapshots),
    /// A flat set of current values with no time windows
    Current(MetricsSnapshot),
}

impl CategoryMetrics {
    /// Snapshot shown for a time frame.
    ///
    /// Flat categories return their single snapshot for every frame.
    pub fn snapshot(&self, frame: TimeFrame) -> &MetricsSnapshot {
        match self {
            CategoryMetrics::Windowed(windows) => windows.get(frame),
            CategoryMetrics::Current(snapshot) => snapshot,
        }
    }

    /// Snapshot that trends for `frame` are measured against
    pub fn baseline(&self, frame: TimeFrame) -> Option<&MetricsSnapshot> {
        match self {
            CategoryMetrics::Windowed(windows) => frame.baseline().map(|b| windows.get(b)),
            CategoryMetrics::Current(_) => None,
        }
    }

    /// Parse one category from raw JSON.
    ///
    /// An object of objects is windowed; its parse error is kept as is
    /// instead of the untagged "did not match any variant" message.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        let windowed = value
            .as_object()
            .is_some_and(|fields| !fields.is_empty() && fields.values().all(|v| v.is_object()));

        if windowed {
            serde_json::from_value(value).map(CategoryMetrics::Windowed)
        } else {
            serde_json::from_value(value).map(CategoryMetrics::Current)
        }
    }

    pub fn windows(&self) -> Option<&WindowedSnapshots> {
        match self {
            CategoryMetrics::Windowed(windows) => Some(windows),
            CategoryMetrics::Current(_) => None,
        }
    }
}

/// Composite metrics document returned by the backend
///
/// Categories are parsed independently: a malformed category is recorded and
/// reported only when a page asks for it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "BTreeMap<String, serde_json::Value>")]
pub struct MetricsDocument {
    categories: BTreeMap<String, CategoryMetrics>,
    malformed: BTreeMap<String, String>,
}

impl MetricsDocument {
    /// Build a document from already-parsed categories
    pub fn new(categories: impl IntoIterator<Item = (Category, CategoryMetrics)>) -> Self {
        Self {
            categories: categories
                .into_iter()
                .map(|(c, m)| (c.wire_key().to_string(), m))
                .collect(),
            malformed: BTreeMap::new(),
        }
    }

    /// Category slice for a page
    pub fn category(&self, category: Category) -> Result<&CategoryMetrics, DataShapeError> {
        let key = category.wire_key();
        if let Some(metrics) = self.categories.get(key) {
            return Ok(metrics);
        }
        match self.malformed.get(key) {
            Some(reason) => Err(DataShapeError::MalformedCategory {
                category: key.to_string(),
                reason: reason.clone(),
            }),
            None => Err(DataShapeError::MissingCategory(key.to_string())),
        }
    }

    /// Wire keys of every category that parsed successfully
    pub fn category_keys(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Wire keys of categories that failed to parse
    pub fn malformed_keys(&self) -> impl Iterator<Item = &str> {
        self.malformed.keys().map(String::as_str)
    }
}

impl From<BTreeMap<String, serde_json::Value>> for MetricsDocument {
    fn from(raw: BTreeMap<String, serde_json::Value>) -> Self {
        let mut categories = BTreeMap::new();
        let mut malformed = BTreeMap::new();

        for (key, value) in raw {
            match CategoryMetrics::from_value(value) {
                Ok(metrics) => {
                    categories.insert(key, metrics);
                }
                Err(e) => {
                    tracing::warn!(category = %key, error = %e, "Malformed metrics category");
                    malformed.insert(key, e.to_string());
                }
            }
        }

        Self {
            categories,
            malformed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_document() -> serde_json::Value {
        json!({
            "userMetrics": {
                "daily": { "totalUser": 120, "activeUser": 30 },
                "monthly": { "totalUser": 100, "activeUser": 25 },
                "allTime": { "totalUser": 90, "activeUser": 20 }
            },
            "contentMetrics": { "totalPosts": 50, "totalViews": 1000 }
        })
    }

    #[test]
    fn test_snapshot_rejects_negative_values() {
        let err = MetricsSnapshot::new([("totalPosts", -3.0)]).unwrap_err();
        assert!(matches!(err, DataShapeError::InvalidValue { .. }));

        let err = MetricsSnapshot::new([("totalPosts", f64::NAN)]).unwrap_err();
        assert!(matches!(err, DataShapeError::InvalidValue { .. }));

        let snapshot = MetricsSnapshot::new([("totalPosts", 0.0), ("totalViews", 2.5)]).unwrap();
        assert_eq!(snapshot.get("totalViews"), Some(2.5));
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn test_document_parses_windowed_and_flat_categories() {
        let doc: MetricsDocument = serde_json::from_value(sample_document()).unwrap();

        let users = doc.category(Category::User).unwrap();
        assert!(users.windows().is_some());
        assert_eq!(users.snapshot(TimeFrame::Daily).get("totalUser"), Some(120.0));
        assert_eq!(users.snapshot(TimeFrame::AllTime).get("totalUser"), Some(90.0));

        let content = doc.category(Category::Content).unwrap();
        assert!(content.windows().is_none());
        assert_eq!(content.snapshot(TimeFrame::Monthly).get("totalPosts"), Some(50.0));
        assert!(content.baseline(TimeFrame::Daily).is_none());
    }

    #[test]
    fn test_missing_category_is_no_data() {
        let doc: MetricsDocument = serde_json::from_value(sample_document()).unwrap();
        let err = doc.category(Category::Blockchain).unwrap_err();
        assert_eq!(
            err,
            DataShapeError::MissingCategory("blockchainMetrics".to_string())
        );
    }

    #[test]
    fn test_malformed_category_is_isolated() {
        let doc: MetricsDocument = serde_json::from_value(json!({
            "userMetrics": { "daily": { "totalUser": 1 } },
            "blockchainMetrics": { "totalTokens": 10 }
        }))
        .unwrap();

        assert!(doc.category(Category::Blockchain).is_ok());
        assert!(matches!(
            doc.category(Category::User),
            Err(DataShapeError::MalformedCategory { .. })
        ));
        assert_eq!(doc.malformed_keys().collect::<Vec<_>>(), vec!["userMetrics"]);
    }

    #[test]
    fn test_negative_value_marks_category_malformed() {
        let doc: MetricsDocument = serde_json::from_value(json!({
            "contentMetrics": { "totalPosts": -5 }
        }))
        .unwrap();
        assert!(doc.category(Category::Content).is_err());
    }

    #[test]
    fn test_baseline_policy() {
        assert_eq!(TimeFrame::Daily.baseline(), Some(TimeFrame::Monthly));
        assert_eq!(TimeFrame::Monthly.baseline(), Some(TimeFrame::AllTime));
        assert_eq!(TimeFrame::AllTime.baseline(), None);
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!("allTime".parse::<TimeFrame>().unwrap(), TimeFrame::AllTime);
        assert_eq!("all-time".parse::<TimeFrame>().unwrap(), TimeFrame::AllTime);
        assert_eq!("users".parse::<Category>().unwrap(), Category::User);
        assert!("weekly".parse::<TimeFrame>().is_err());
        assert_eq!(
            serde_json::to_string(&TimeFrame::AllTime).unwrap(),
            "\"allTime\""
        );
    }

    #[test]
    fn test_windowed_category_keeps_value_error() {
        let doc: MetricsDocument = serde_json::from_value(json!({
            "contentMetrics": {
                "daily": { "totalPosts": -5 },
                "monthly": { "totalPosts": 10 },
                "allTime": { "totalPosts": 100 }
            }
        }))
        .unwrap();

        let err = doc.category(Category::Content).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Invalid value for totalPosts: -5"), "{}", message);
        assert!(!message.contains("untagged"), "{}", message);
    }

    #[test]
    fn test_windowed_category_missing_window_is_malformed() {
        let err = CategoryMetrics::from_value(json!({
            "daily": { "totalUser": 1 },
            "monthly": { "totalUser": 1 }
        }))
        .unwrap_err();
        assert!(err.to_string().contains("allTime"), "{}", err);
    }

    #[test]
    fn test_flat_category_parses_as_current() {
        let metrics = CategoryMetrics::from_value(json!({ "totalPosts": 50 })).unwrap();
        assert!(metrics.windows().is_none());
        assert_eq!(metrics.snapshot(TimeFrame::Monthly).get("totalPosts"), Some(50.0));
    }
}
