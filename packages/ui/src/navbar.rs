use dioxus::prelude::*;

use crate::icons::{FaBars, FaXmark};
use crate::site::use_site_config;
use crate::{Icon, ThemeToggle};

const SITE_CSS: Asset = asset!("/assets/styling/site.css");

/// Anchor id and label for every section on the home page, in page order.
pub const SECTION_LINKS: &[(&str, &str)] = &[
    ("about", "About"),
    ("experience", "Experience"),
    ("education", "Education"),
    ("projects", "Projects"),
    ("services", "Services"),
    ("testimonials", "Testimonials"),
    ("contact", "Contact"),
];

/// Fixed top bar with in-page anchors. On narrow screens the links collapse
/// behind a menu button; following a link closes the menu again.
#[component]
pub fn Navbar(
    /// Extra items rendered after the theme toggle.
    #[props(default)]
    children: Element,
) -> Element {
    let owner = use_site_config().owner;
    let mut menu_open = use_signal(|| false);

    rsx! {
        document::Stylesheet { href: SITE_CSS }
        header {
            class: "navbar",
            nav {
                class: "navbar-inner container",
                a { class: "navbar-brand", href: "#top", "{owner.name}" }
                ul {
                    class: if menu_open() { "navbar-links open" } else { "navbar-links" },
                    for (id, label) in SECTION_LINKS.iter().copied() {
                        li {
                            key: "{id}",
                            a {
                                href: "#{id}",
                                onclick: move |_| menu_open.set(false),
                                "{label}"
                            }
                        }
                    }
                }
                div {
                    class: "navbar-actions",
                    ThemeToggle {}
                    {children}
                    button {
                        class: "icon-button navbar-menu-button",
                        "aria-label": if menu_open() { "Close menu" } else { "Open menu" },
                        "aria-expanded": if menu_open() { "true" } else { "false" },
                        onclick: move |_| menu_open.toggle(),
                        if menu_open() {
                            Icon { icon: FaXmark, width: 16, height: 16 }
                        } else {
                            Icon { icon: FaBars, width: 16, height: 16 }
                        }
                    }
                }
            }
        }
    }
}
