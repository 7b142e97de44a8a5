use content::nav::{active_item, search, ADMIN_NAV};
use content::NavIcon;
use dioxus::prelude::*;

use crate::icons::{FaBriefcase, FaComments, FaFolderOpen, FaGauge, FaGear, FaGlobe, FaMagnifyingGlass, FaXmark};
use crate::Icon;

/// Admin navigation. Typing in the search box narrows the groups to matching
/// items; clearing it restores the full list.
#[component]
pub fn AdminSidebar(
    /// Current route path, used to highlight the active item.
    active_path: String,
    /// Called with the `href` of the item the user picked.
    on_navigate: EventHandler<String>,
) -> Element {
    let mut query = use_signal(String::new);
    let groups = search(ADMIN_NAV, &query());
    let active_href = active_item(ADMIN_NAV, &active_path).map(|item| item.href);

    rsx! {
        aside {
            class: "admin-sidebar",
            div { class: "admin-sidebar-brand", "Portfolio Admin" }
            div {
                class: "admin-search",
                Icon { icon: FaMagnifyingGlass, width: 12, height: 12 }
                input {
                    r#type: "search",
                    placeholder: "Search…",
                    "aria-label": "Search navigation",
                    value: query(),
                    oninput: move |evt: FormEvent| query.set(evt.value()),
                }
                if !query().is_empty() {
                    button {
                        class: "icon-button",
                        "aria-label": "Clear search",
                        onclick: move |_| query.set(String::new()),
                        Icon { icon: FaXmark, width: 10, height: 10 }
                    }
                }
            }
            nav {
                class: "admin-nav",
                if groups.is_empty() {
                    p { class: "muted admin-nav-empty", "No matches for \"{query}\"" }
                }
                for m in groups {
                    div {
                        key: "{m.group.label}",
                        class: "admin-nav-group",
                        span { class: "admin-nav-group-label", "{m.group.label}" }
                        for item in m.items {
                            button {
                                key: "{item.href}",
                                class: if active_href == Some(item.href) { "admin-nav-item active" } else { "admin-nav-item" },
                                onclick: move |_| on_navigate.call(item.href.to_string()),
                                NavGlyph { icon: item.icon }
                                span { "{item.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavGlyph(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! { Icon { icon: FaGauge, width: 14, height: 14 } },
        NavIcon::Testimonials => rsx! { Icon { icon: FaComments, width: 14, height: 14 } },
        NavIcon::Projects => rsx! { Icon { icon: FaFolderOpen, width: 14, height: 14 } },
        NavIcon::Services => rsx! { Icon { icon: FaBriefcase, width: 14, height: 14 } },
        NavIcon::Settings => rsx! { Icon { icon: FaGear, width: 14, height: 14 } },
        NavIcon::Site => rsx! { Icon { icon: FaGlobe, width: 14, height: 14 } },
    }
}
