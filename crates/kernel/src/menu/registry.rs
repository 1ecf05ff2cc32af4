//! Navigation registry - the static sidebar menu.
//!
//! Groups and links are `'static` data; the accessor hands out the same
//! shared slice on every call.

use serde::Serialize;

/// A single navigable entry in a menu group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuLink {
    /// Display text
    pub label: &'static str,
    /// Application-relative path (e.g., "/correlation/matrix")
    pub href: &'static str,
    /// Optional cosmetic icon
    pub icon: Option<&'static str>,
}

/// A titled, ordered cluster of links shown under one heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuGroup {
    /// Heading, expected to be unique across the registry
    pub title: &'static str,
    /// Optional cosmetic icon
    pub icon: Option<&'static str>,
    /// Links in display order
    pub links: &'static [MenuLink],
}

const fn link(label: &'static str, href: &'static str) -> MenuLink {
    MenuLink {
        label,
        href,
        icon: None,
    }
}

static MENU_GROUPS: &[MenuGroup] = &[
    MenuGroup {
        title: "Correlations",
        icon: Some("🔗"),
        links: &[
            link("Full Matrix", "/correlation/matrix"),
            link("Pairwise Metrics", "/correlation/pairwise"),
            link("Cramér's V", "/correlation/cramers-v"),
            link("Correlation Ratio (η²)", "/correlation/eta"),
            link("Feature Heatmap", "/correlation/heatmap"),
        ],
    },
    MenuGroup {
        title: "Transformations",
        icon: Some("🔄"),
        links: &[
            link("Log Transform", "/transformations/log"),
            link("Box-Cox", "/transformations/box-cox"),
            link("Yeo-Johnson", "/transformations/yeo-johnson"),
            link("Standardization (Z-Score)", "/transformations/standardize"),
            link("Min-Max Scaling", "/transformations/min-max"),
        ],
    },
    MenuGroup {
        title: "Distributions",
        icon: Some("📊"),
        links: &[
            link("Histograms", "/distributions/histograms"),
            link("Box Plots", "/distributions/box-plots"),
            link("Q-Q Plots", "/distributions/qq-plots"),
            link("Skewness & Kurtosis", "/distributions/moments"),
            link("Normality Tests", "/distributions/normality"),
        ],
    },
];

/// Read-only access to the sidebar menu.
///
/// Zero-sized: the groups live in static memory, so every handle sees the
/// same data.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationRegistry;

impl NavigationRegistry {
    /// All menu groups, in display order.
    pub fn menu_groups(&self) -> &'static [MenuGroup] {
        MENU_GROUPS
    }

    /// Look up a group by its title.
    ///
    /// Returns the first match in display order.
    pub fn group(&self, title: &str) -> Option<&'static MenuGroup> {
        MENU_GROUPS.iter().find(|g| g.title == title)
    }

    /// Total number of links across all groups.
    pub fn link_count(&self) -> usize {
        MENU_GROUPS.iter().map(|g| g.links.len()).sum()
    }
}

/// All menu groups, in display order.
pub fn menu_groups() -> &'static [MenuGroup] {
    NavigationRegistry.menu_groups()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn pairs(group: &MenuGroup) -> Vec<(&'static str, &'static str)> {
        group.links.iter().map(|l| (l.label, l.href)).collect()
    }

    #[test]
    fn groups_in_authored_order() {
        let titles: Vec<_> = menu_groups().iter().map(|g| g.title).collect();
        assert_eq!(titles, ["Correlations", "Transformations", "Distributions"]);
    }

    #[test]
    fn correlation_links() {
        let group = NavigationRegistry.group("Correlations").unwrap();
        assert_eq!(
            pairs(group),
            [
                ("Full Matrix", "/correlation/matrix"),
                ("Pairwise Metrics", "/correlation/pairwise"),
                ("Cramér's V", "/correlation/cramers-v"),
                ("Correlation Ratio (η²)", "/correlation/eta"),
                ("Feature Heatmap", "/correlation/heatmap"),
            ]
        );
    }

    #[test]
    fn transformation_links() {
        let group = NavigationRegistry.group("Transformations").unwrap();
        assert_eq!(group.links.len(), 5);
        assert!(
            group
                .links
                .iter()
                .all(|l| l.href.starts_with("/transformations/"))
        );
        assert_eq!(group.links[1].label, "Box-Cox");
        assert_eq!(group.links[4].href, "/transformations/min-max");
    }

    #[test]
    fn distribution_links() {
        let group = NavigationRegistry.group("Distributions").unwrap();
        assert_eq!(group.links.len(), 5);
        assert!(
            group
                .links
                .iter()
                .all(|l| l.href.starts_with("/distributions/"))
        );
        assert_eq!(group.links[0].label, "Histograms");
        assert_eq!(group.links[2].href, "/distributions/qq-plots");
    }

    #[test]
    fn accessor_is_idempotent() {
        let first = menu_groups();
        let second = NavigationRegistry.menu_groups();
        assert_eq!(first, second);
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn unknown_group_is_none() {
        assert!(NavigationRegistry.group("Clustering").is_none());
        assert!(NavigationRegistry.group("correlations").is_none());
    }

    #[test]
    fn link_count_sums_groups() {
        assert_eq!(NavigationRegistry.link_count(), 15);
    }

    #[test]
    fn every_group_has_links() {
        assert!(menu_groups().iter().all(|g| !g.links.is_empty()));
    }

    #[test]
    fn serializes_missing_icon_as_null() {
        let value = serde_json::to_value(menu_groups()[0]).unwrap();
        assert_eq!(value["title"], "Correlations");
        assert_eq!(value["icon"], "🔗");
        assert_eq!(value["links"][0]["label"], "Full Matrix");
        assert!(value["links"][0]["icon"].is_null());
    }
}
