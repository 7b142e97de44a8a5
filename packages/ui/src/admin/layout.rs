use dioxus::prelude::*;

use super::{AdminSidebar, NotificationBell, NotificationPanel};
use crate::icons::FaBars;
use crate::{Icon, ThemeToggle};

const ADMIN_CSS: Asset = asset!("/assets/styling/admin.css");

/// Shared dashboard layout.
///
/// The platform crate provides the route path, a navigation callback and the
/// router `Outlet` as children.
#[component]
pub fn AdminLayoutView(
    /// Current route path, e.g. "/admin/testimonials".
    active_path: String,
    /// Called with the target path when the user picks a sidebar item.
    on_navigate: EventHandler<String>,
    children: Element,
) -> Element {
    let panel_open = use_signal(|| false);
    let mut sidebar_open = use_signal(|| false);

    let on_select = move |href: String| {
        sidebar_open.set(false);
        on_navigate.call(href);
    };

    rsx! {
        document::Stylesheet { href: ADMIN_CSS }

        div {
            class: if sidebar_open() { "admin-layout sidebar-open" } else { "admin-layout" },
            AdminSidebar { active_path, on_navigate: on_select }

            div {
                class: "admin-main",
                header {
                    class: "admin-header",
                    button {
                        class: "icon-button admin-sidebar-trigger",
                        "aria-label": "Toggle sidebar",
                        onclick: move |_| sidebar_open.toggle(),
                        Icon { icon: FaBars, width: 14, height: 14 }
                    }
                    span { class: "admin-header-title", "Dashboard" }
                    div {
                        class: "admin-header-actions",
                        ThemeToggle {}
                        NotificationBell { open: panel_open }
                    }
                }
                main {
                    class: "admin-content",
                    {children}
                }
                NotificationPanel { open: panel_open }
            }
        }
    }
}
