//! Admin sidebar structure and search.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Testimonials,
    Projects,
    Services,
    Settings,
    Site,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: NavIcon,
    /// Extra words the search box should match on.
    pub keywords: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavGroup {
    pub label: &'static str,
    pub items: &'static [NavItem],
}

/// A group with only the items that matched a search.
#[derive(Clone, Debug, PartialEq)]
pub struct NavMatch<'a> {
    pub group: &'a NavGroup,
    pub items: Vec<&'a NavItem>,
}

pub static ADMIN_NAV: &[NavGroup] = &[
    NavGroup {
        label: "Overview",
        items: &[NavItem {
            label: "Dashboard",
            href: "/admin",
            icon: NavIcon::Dashboard,
            keywords: &["home", "stats"],
        }],
    },
    NavGroup {
        label: "Content",
        items: &[
            NavItem {
                label: "Testimonials",
                href: "/admin/testimonials",
                icon: NavIcon::Testimonials,
                keywords: &["reviews", "quotes", "clients"],
            },
            NavItem {
                label: "Projects",
                href: "/admin/projects",
                icon: NavIcon::Projects,
                keywords: &["portfolio", "work"],
            },
            NavItem {
                label: "Services",
                href: "/admin/services",
                icon: NavIcon::Services,
                keywords: &["offerings", "pricing"],
            },
        ],
    },
    NavGroup {
        label: "System",
        items: &[
            NavItem {
                label: "Settings",
                href: "/admin/settings",
                icon: NavIcon::Settings,
                keywords: &["theme", "preferences"],
            },
            NavItem {
                label: "View site",
                href: "/",
                icon: NavIcon::Site,
                keywords: &["public", "home"],
            },
        ],
    },
];

impl NavItem {
    /// Case-insensitive substring match on the label and keywords.
    /// `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        self.label.to_lowercase().contains(needle)
            || self.keywords.iter().any(|k| k.contains(needle))
    }
}

/// Filter the sidebar by a search query. A blank query returns every group
/// unchanged; groups with no matching item are dropped.
pub fn search<'a>(groups: &'a [NavGroup], query: &str) -> Vec<NavMatch<'a>> {
    let needle = query.trim().to_lowercase();
    groups
        .iter()
        .filter_map(|group| {
            let items: Vec<&NavItem> = group
                .items
                .iter()
                .filter(|item| needle.is_empty() || item.matches(&needle))
                .collect();
            (!items.is_empty()).then_some(NavMatch { group, items })
        })
        .collect()
}

/// The item whose `href` is the longest prefix of `path`.
pub fn active_item<'a>(groups: &'a [NavGroup], path: &str) -> Option<&'a NavItem> {
    groups
        .iter()
        .flat_map(|g| g.items.iter())
        .filter(|item| {
            path == item.href
                || (item.href != "/"
                    && path.starts_with(item.href)
                    && path[item.href.len()..].starts_with('/'))
        })
        .max_by_key(|item| item.href.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(matches: &[NavMatch<'_>]) -> Vec<&'static str> {
        matches
            .iter()
            .flat_map(|m| m.items.iter().map(|i| i.label))
            .collect()
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let all = search(ADMIN_NAV, "   ");
        assert_eq!(all.len(), ADMIN_NAV.len());
        assert_eq!(labels(&all).len(), 6);
    }

    #[test]
    fn test_substring_case_insensitive() {
        assert_eq!(labels(&search(ADMIN_NAV, "TEST")), vec!["Testimonials"]);
        assert_eq!(labels(&search(ADMIN_NAV, "set")), vec!["Settings"]);
    }

    #[test]
    fn test_keywords_match() {
        assert_eq!(labels(&search(ADMIN_NAV, "theme")), vec!["Settings"]);
        assert_eq!(labels(&search(ADMIN_NAV, "home")), vec!["Dashboard", "View site"]);
    }

    #[test]
    fn test_empty_groups_dropped() {
        let found = search(ADMIN_NAV, "projects");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].group.label, "Content");
        assert!(search(ADMIN_NAV, "zzz").is_empty());
    }

    #[test]
    fn test_active_item() {
        assert_eq!(active_item(ADMIN_NAV, "/admin").map(|i| i.label), Some("Dashboard"));
        assert_eq!(
            active_item(ADMIN_NAV, "/admin/testimonials").map(|i| i.label),
            Some("Testimonials")
        );
        assert_eq!(active_item(ADMIN_NAV, "/").map(|i| i.label), Some("View site"));
        assert_eq!(active_item(ADMIN_NAV, "/administrator"), None);
    }
}
