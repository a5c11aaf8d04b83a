//! Visual Lookup
//!
//! Icon and color per metric key. Rows from the core carry no presentation
//! data; cards look their treatment up here.

/// Presentation treatment of one metric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visual {
    pub icon: &'static str,
    pub color: &'static str,
}

const DEFAULT: Visual = Visual { icon: "📊", color: "bg-gray-500" };

/// Get icon and color for a metric key
pub fn visual_for(key: &str) -> Visual {
    let (icon, color) = match key {
        // blockchain
        "totalTokens" => ("🪙", "bg-blue-500"),
        "totalWalletOnSolana" => ("👛", "bg-green-500"),
        "totalWalletOnPolygon" => ("👛", "bg-yellow-500"),
        "totalWalletOnEthereum" => ("👛", "bg-purple-500"),
        // content
        "totalPosts" => ("📄", "bg-blue-500"),
        "totalViews" => ("👁", "bg-green-500"),
        "totalComments" => ("💬", "bg-yellow-500"),
        "totalPostShares" => ("🔗", "bg-purple-500"),
        "totalPostBlocked" => ("⛔", "bg-red-500"),
        "totalPostDeleted" => ("🗑", "bg-gray-500"),
        // users
        "totalUser" => ("👥", "bg-blue-500"),
        "activeUser" => ("🟢", "bg-green-500"),
        "totalReferral" => ("🤝", "bg-yellow-500"),
        "creator" => ("🎨", "bg-purple-500"),
        _ => return DEFAULT,
    };
    Visual { icon, color }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statboard::metrics::{display_order, Category};

    #[test]
    fn test_every_catalog_metric_has_a_visual() {
        for category in Category::all() {
            for spec in display_order(*category) {
                assert_ne!(visual_for(spec.key), DEFAULT, "{}", spec.key);
            }
        }
    }

    #[test]
    fn test_unknown_metric_uses_default() {
        assert_eq!(visual_for("mystery"), DEFAULT);
    }
}
