use dioxus::prelude::*;

#[component]
pub fn NotFoundView(path: String) -> Element {
    rsx! {
        div {
            class: "not-found",
            h1 { "404" }
            p { class: "muted", "Nothing lives at /{path}." }
            a { class: "button button-primary", href: "/", "Back to the site" }
        }
    }
}
