use dioxus::prelude::*;

use super::SectionHeading;
use crate::icons::{FaEnvelope, FaLocationDot, FaPhone};
use crate::site::use_site_config;
use crate::{Icon, Reveal};

#[component]
pub fn Contact() -> Element {
    let owner = use_site_config().owner;

    rsx! {
        section {
            id: "contact",
            class: "section",
            Reveal {
                class: "container contact",
                SectionHeading {
                    eyebrow: "Contact",
                    title: "Let's work together",
                    subtitle: "Tell me about your project and I'll get back to you within two working days.",
                }
                ul {
                    class: "contact-list",
                    if !owner.email.is_empty() {
                        li {
                            Icon { icon: FaEnvelope, width: 14, height: 14 }
                            a { href: "mailto:{owner.email}", "{owner.email}" }
                        }
                    }
                    if let Some(phone) = owner.phone.clone() {
                        li {
                            Icon { icon: FaPhone, width: 14, height: 14 }
                            a { href: "tel:{phone}", "{phone}" }
                        }
                    }
                    if !owner.location.is_empty() {
                        li {
                            Icon { icon: FaLocationDot, width: 14, height: 14 }
                            span { "{owner.location}" }
                        }
                    }
                }
                if !owner.email.is_empty() {
                    a {
                        class: "button button-primary",
                        href: "mailto:{owner.email}?subject=Project%20enquiry",
                        "Send an email"
                    }
                }
            }
        }
    }
}
