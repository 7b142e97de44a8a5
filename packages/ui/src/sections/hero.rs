use dioxus::prelude::*;

use crate::icons::{FaDownload, FaEnvelope, FaLocationDot};
use crate::site::use_site_config;
use crate::{Avatar, Icon, Reveal, TechBackground};

#[component]
pub fn Hero() -> Element {
    let owner = use_site_config().owner;

    rsx! {
        section {
            id: "top",
            class: "hero",
            TechBackground {}
            Reveal {
                class: "hero-inner container",
                div {
                    class: "hero-text",
                    span { class: "section-eyebrow", "Hi, I'm" }
                    h1 { class: "hero-name", "{owner.name}" }
                    if !owner.title.is_empty() {
                        p { class: "hero-title", "{owner.title}" }
                    }
                    if !owner.tagline.is_empty() {
                        p { class: "hero-tagline muted", "{owner.tagline}" }
                    }
                    if !owner.location.is_empty() {
                        p {
                            class: "hero-location muted",
                            Icon { icon: FaLocationDot, width: 12, height: 12 }
                            " {owner.location}"
                        }
                    }
                    div {
                        class: "hero-actions",
                        a { class: "button button-primary", href: "#projects", "View my work" }
                        a {
                            class: "button button-outline",
                            href: "#contact",
                            Icon { icon: FaEnvelope, width: 12, height: 12 }
                            " Get in touch"
                        }
                        if let Some(resume) = owner.resume_url.clone() {
                            a {
                                class: "button button-ghost",
                                href: "{resume}",
                                download: "true",
                                Icon { icon: FaDownload, width: 12, height: 12 }
                                " Résumé"
                            }
                        }
                    }
                }
                Avatar {
                    src: owner.avatar.clone(),
                    name: owner.name.clone(),
                    class: "avatar avatar--xl hero-avatar",
                }
            }
        }
    }
}
