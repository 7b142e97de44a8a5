use dioxus::prelude::*;

use super::SectionHeading;
use crate::{use_testimonials, Reveal, TestimonialCarousel};

/// Fetches once on mount. A failed request renders the fallback list with a
/// polite inline notice; the rest of the page is unaffected.
#[component]
pub fn Testimonials() -> Element {
    let state = use_testimonials();
    let current = state();
    let len = current.items.len();

    rsx! {
        section {
            id: "testimonials",
            class: "section section-alt",
            Reveal {
                class: "container",
                SectionHeading {
                    eyebrow: "Testimonials",
                    title: "What clients say",
                }
                if current.loading {
                    div { class: "carousel-loading", "aria-busy": "true", "Loading testimonials…" }
                } else {
                    if let Some(notice) = current.error.clone() {
                        p { class: "inline-notice", role: "status", "{notice}" }
                    }
                    TestimonialCarousel { key: "{len}", items: current.items.clone() }
                }
            }
        }
    }
}
