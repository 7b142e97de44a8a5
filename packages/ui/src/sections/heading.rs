use dioxus::prelude::*;

#[component]
pub fn SectionHeading(
    title: String,
    #[props(default)] eyebrow: Option<String>,
    #[props(default)] subtitle: Option<String>,
) -> Element {
    rsx! {
        div {
            class: "section-heading",
            if let Some(eyebrow) = eyebrow {
                span { class: "section-eyebrow", "{eyebrow}" }
            }
            h2 { class: "section-title", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "section-subtitle muted", "{subtitle}" }
            }
        }
    }
}
