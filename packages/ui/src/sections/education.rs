use content::data::education_by;
use content::EducationKind;
use dioxus::prelude::*;

use super::SectionHeading;
use crate::Reveal;

#[component]
pub fn Education() -> Element {
    let mut filter = use_signal(|| None::<EducationKind>);
    let items = education_by(filter());

    rsx! {
        section {
            id: "education",
            class: "section",
            Reveal {
                class: "container",
                SectionHeading { eyebrow: "Education", title: "Degrees and certifications" }
                div {
                    class: "tabs",
                    role: "tablist",
                    button {
                        class: if filter().is_none() { "tab active" } else { "tab" },
                        role: "tab",
                        "aria-selected": if filter().is_none() { "true" } else { "false" },
                        onclick: move |_| filter.set(None),
                        "All"
                    }
                    for kind in EducationKind::ALL {
                        button {
                            key: "{kind:?}",
                            class: if filter() == Some(kind) { "tab active" } else { "tab" },
                            role: "tab",
                            "aria-selected": if filter() == Some(kind) { "true" } else { "false" },
                            onclick: move |_| filter.set(Some(kind)),
                            "{kind.label()}"
                        }
                    }
                }
                if items.is_empty() {
                    p { class: "muted", "Nothing here yet." }
                }
                div {
                    class: "card-grid",
                    for item in items {
                        article {
                            key: "{item.id}",
                            class: "card education-card",
                            span { class: "badge", "{item.kind.label()}" }
                            h3 { "{item.title}" }
                            p { class: "muted", "{item.institution} · {item.period}" }
                            p { "{item.description}" }
                            if let Some(grade) = item.grade {
                                p { class: "education-grade", "{grade}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
