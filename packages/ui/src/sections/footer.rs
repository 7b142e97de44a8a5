use dioxus::prelude::*;

use crate::brands::{FaGithub, FaLinkedin, FaTwitter};
use crate::icons::FaLink;
use crate::site::use_site_config;
use crate::Icon;

#[component]
pub fn Footer() -> Element {
    let owner = use_site_config().owner;

    rsx! {
        footer {
            class: "footer",
            div {
                class: "container footer-inner",
                p { class: "muted", "© {owner.name}" }
                nav {
                    class: "footer-socials",
                    "aria-label": "Social links",
                    for social in owner.socials.iter() {
                        a {
                            key: "{social.network}",
                            href: "{social.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "aria-label": "{social.network}",
                            SocialIcon { network: social.network.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SocialIcon(network: String) -> Element {
    match network.to_ascii_lowercase().as_str() {
        "github" => rsx! { Icon { icon: FaGithub, width: 16, height: 16 } },
        "linkedin" => rsx! { Icon { icon: FaLinkedin, width: 16, height: 16 } },
        "twitter" | "x" => rsx! { Icon { icon: FaTwitter, width: 16, height: 16 } },
        _ => rsx! { Icon { icon: FaLink, width: 16, height: 16 } },
    }
}
