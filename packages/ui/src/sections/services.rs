use content::data::{service, SERVICES};
use content::{ServiceDetail, ServiceIcon};
use dioxus::prelude::*;

use super::SectionHeading;
use crate::icons::{FaBrain, FaCheck, FaCode, FaCompass, FaGauge, FaMobileScreen, FaServer, FaXmark};
use crate::views::ModalOverlay;
use crate::{Icon, Reveal, TechIconsBackground};

/// Service cards. Clicking one opens its detail in a modal; the open service
/// is tracked by id so closing is just clearing it.
#[component]
pub fn Services() -> Element {
    let mut open = use_signal(|| None::<&'static str>);
    let selected = open().and_then(service);

    rsx! {
        section {
            id: "services",
            class: "section services",
            TechIconsBackground {}
            Reveal {
                class: "container",
                SectionHeading {
                    eyebrow: "Services",
                    title: "How I can help",
                    subtitle: "Engagements range from a two-week audit to a full product build.",
                }
                div {
                    class: "card-grid",
                    for (i, s) in SERVICES.iter().enumerate() {
                        Reveal {
                            key: "{s.id}",
                            delay_ms: (i as u32) * 60,
                            button {
                                class: "card service-card",
                                onclick: move |_| open.set(Some(s.id)),
                                span { class: "service-icon", ServiceGlyph { icon: s.icon } }
                                h3 { "{s.title}" }
                                p { class: "muted", "{s.summary}" }
                                span { class: "service-more", "Learn more" }
                            }
                        }
                    }
                }
            }
        }

        if let Some(detail) = selected {
            ModalOverlay {
                on_close: move |_| open.set(None),
                ServiceModal { detail, on_close: move |_| open.set(None) }
            }
        }
    }
}

#[component]
fn ServiceModal(detail: &'static ServiceDetail, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "modal-body",
            role: "dialog",
            "aria-modal": "true",
            "aria-labelledby": "service-modal-title",
            div {
                class: "modal-header",
                span { class: "service-icon", ServiceGlyph { icon: detail.icon } }
                h2 { id: "service-modal-title", class: "modal-title", "{detail.title}" }
                button {
                    class: "icon-button",
                    "aria-label": "Close",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: FaXmark, width: 14, height: 14 }
                }
            }
            p { "{detail.description}" }
            h3 { class: "modal-subtitle", "What you get" }
            ul {
                class: "checklist",
                for d in detail.deliverables.iter() {
                    li {
                        key: "{d}",
                        Icon { icon: FaCheck, width: 12, height: 12 }
                        " {d}"
                    }
                }
            }
            p { class: "muted", "Typical timeline: {detail.timeline}" }
            div {
                class: "modal-actions",
                a {
                    class: "button button-primary",
                    href: "#contact",
                    onclick: move |_| on_close.call(()),
                    "Discuss a project"
                }
                button {
                    class: "button button-outline",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
        }
    }
}

#[component]
fn ServiceGlyph(icon: ServiceIcon) -> Element {
    match icon {
        ServiceIcon::Code => rsx! { Icon { icon: FaCode, width: 20, height: 20 } },
        ServiceIcon::Mobile => rsx! { Icon { icon: FaMobileScreen, width: 20, height: 20 } },
        ServiceIcon::Server => rsx! { Icon { icon: FaServer, width: 20, height: 20 } },
        ServiceIcon::Brain => rsx! { Icon { icon: FaBrain, width: 20, height: 20 } },
        ServiceIcon::Gauge => rsx! { Icon { icon: FaGauge, width: 20, height: 20 } },
        ServiceIcon::Compass => rsx! { Icon { icon: FaCompass, width: 20, height: 20 } },
    }
}
