use dioxus::prelude::*;

use crate::site::use_site_config;
use crate::ThemeSelector;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Theme selection plus a read-only summary of `site.toml`.
#[component]
pub fn SettingsView() -> Element {
    let config = use_site_config();
    let effective = match config.to_toml() {
        Ok(toml) => toml,
        Err(e) => {
            tracing::warn!("Could not serialize site config: {}", e);
            String::new()
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view",
            h1 { class: "view-title", "Settings" }

            section {
                class: "view-section",
                h2 { "Appearance" }
                ThemeSelector {}
            }

            section {
                class: "view-section",
                h2 { "Site configuration" }
                p { class: "muted", "Bundled from site.toml at build time." }
                dl {
                    class: "settings-list",
                    dt { "Owner" }
                    dd { "{config.owner.name}" }
                    dt { "Contact email" }
                    dd { "{config.owner.email}" }
                    dt { "Carousel auto-advance" }
                    dd { "{config.carousel.auto_advance_ms} ms" }
                    dt { "Swipe threshold" }
                    dd { "{config.carousel.swipe_threshold_px} px" }
                    dt { "Reveal threshold" }
                    dd { "{config.reveal.threshold}" }
                    dt { "Background frame interval" }
                    dd { "{config.effects.frame_ms} ms" }
                }
                if !effective.is_empty() {
                    details {
                        class: "settings-effective",
                        summary { "Effective site.toml" }
                        pre { "{effective}" }
                    }
                }
            }
        }
    }
}
