//! Images that degrade to a generated initials avatar when they fail to load.

use content::avatar::placeholder_data_url;
use dioxus::prelude::*;

#[component]
pub fn Avatar(
    src: String,
    name: String,
    #[props(default = "avatar".to_string())] class: String,
) -> Element {
    let mut failed = use_signal(|| src.trim().is_empty());
    let shown = if failed() {
        placeholder_data_url(&name)
    } else {
        src.clone()
    };
    let who = name.clone();

    rsx! {
        img {
            class: "{class}",
            src: "{shown}",
            alt: "{name}",
            loading: "lazy",
            draggable: "false",
            onerror: move |_| {
                if !failed() {
                    tracing::debug!("Avatar failed to load for {}", who);
                    failed.set(true);
                }
            },
        }
    }
}

/// A logo or screenshot that is replaced (or hidden) instead of showing a broken image.
#[component]
pub fn OptionalImage(
    src: String,
    alt: String,
    #[props(default)] class: String,
    /// Text shown in a placeholder block after a load failure.
    #[props(default)]
    placeholder: Option<String>,
) -> Element {
    let mut failed = use_signal(|| src.trim().is_empty());

    if failed() {
        return match placeholder {
            Some(text) => rsx! {
                div { class: "image-placeholder {class}", "{text}" }
            },
            None => rsx! {},
        };
    }

    rsx! {
        img {
            class: "{class}",
            src: "{src}",
            alt: "{alt}",
            loading: "lazy",
            draggable: "false",
            onerror: move |_| failed.set(true),
        }
    }
}
