use content::data::EXPERIENCE;
use dioxus::prelude::*;

use super::SectionHeading;
use crate::Reveal;

#[component]
pub fn Experience() -> Element {
    rsx! {
        section {
            id: "experience",
            class: "section section-alt",
            div {
                class: "container",
                Reveal {
                    SectionHeading { eyebrow: "Experience", title: "Where I've worked" }
                }
                ol {
                    class: "timeline",
                    for (i, item) in EXPERIENCE.iter().enumerate() {
                        li {
                            key: "{item.id}",
                            class: if item.current { "timeline-item current" } else { "timeline-item" },
                            Reveal {
                                class: "card",
                                delay_ms: (i as u32) * 100,
                                div {
                                    class: "timeline-header",
                                    div {
                                        h3 { "{item.role}" }
                                        p { class: "muted", "{item.company} · {item.location}" }
                                    }
                                    span { class: "badge", "{item.period}" }
                                }
                                p { "{item.summary}" }
                                ul {
                                    class: "timeline-highlights",
                                    for h in item.highlights.iter() {
                                        li { key: "{h}", "{h}" }
                                    }
                                }
                                div {
                                    class: "tags",
                                    for t in item.tech.iter() {
                                        span { key: "{t}", class: "tag", "{t}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
