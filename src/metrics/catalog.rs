//! Metric catalog
//!
//! Fixed display order and human names for every metric the backend reports,
//! per category. Rows and cards are always emitted in this order.

use super::types::Category;

/// A known metric of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSpec {
    /// Key in the backend snapshot
    pub key: &'static str,
    /// Name shown on cards and tables
    pub name: &'static str,
}

const BLOCKCHAIN: &[MetricSpec] = &[
    MetricSpec { key: "totalTokens", name: "Total Tokens" },
    MetricSpec { key: "totalWalletOnSolana", name: "Solana Wallets" },
    MetricSpec { key: "totalWalletOnPolygon", name: "Polygon Wallets" },
    MetricSpec { key: "totalWalletOnEthereum", name: "Ethereum Wallets" },
];

const CONTENT: &[MetricSpec] = &[
    MetricSpec { key: "totalPosts", name: "Total Posts" },
    MetricSpec { key: "totalViews", name: "Total Views" },
    MetricSpec { key: "totalComments", name: "Total Comments" },
    MetricSpec { key: "totalPostShares", name: "Total Shares" },
    MetricSpec { key: "totalPostBlocked", name: "Posts Blocked" },
    MetricSpec { key: "totalPostDeleted", name: "Posts Deleted" },
];

const USER: &[MetricSpec] = &[
    MetricSpec { key: "totalUser", name: "Total Users" },
    MetricSpec { key: "activeUser", name: "Active Users" },
    MetricSpec { key: "totalReferral", name: "New Referrals" },
    MetricSpec { key: "creator", name: "Creators" },
];

/// Known metrics of a category in display order
pub fn display_order(category: Category) -> &'static [MetricSpec] {
    match category {
        Category::Blockchain => BLOCKCHAIN,
        Category::Content => CONTENT,
        Category::User => USER,
    }
}

/// Human name for a metric key, falling back to the key itself
pub fn display_name(category: Category, key: &str) -> &str {
    display_order(category)
        .iter()
        .find(|spec| spec.key == key)
        .map(|spec| spec.name)
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_lookup() {
        assert_eq!(display_name(Category::Content, "totalPostShares"), "Total Shares");
        assert_eq!(display_name(Category::Blockchain, "totalWalletOnSolana"), "Solana Wallets");
        assert_eq!(display_name(Category::User, "somethingNew"), "somethingNew");
    }

    #[test]
    fn test_catalog_keys_are_unique() {
        for category in Category::all() {
            let order = display_order(*category);
            for (i, spec) in order.iter().enumerate() {
                assert!(
                    order[i + 1..].iter().all(|other| other.key != spec.key),
                    "duplicate key {} in {}",
                    spec.key,
                    category
                );
            }
        }
    }
}
