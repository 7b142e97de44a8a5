//! Testimonial carousel: drag or swipe to change slides, auto-advance otherwise.
//!
//! The state machine lives in [`content::Carousel`]; this component feeds it
//! pointer events and a timer. Pointer events cover mouse, pen and touch, and
//! `touch-action: pan-y` on the track keeps vertical scrolling native.

use content::avatar::stars;
use content::{Carousel, Phase, Testimonial};
use dioxus::prelude::*;

use crate::avatar::{Avatar, OptionalImage};
use crate::clock::{now_ms, sleep_ms};
use crate::icons::{FaChevronLeft, FaChevronRight, FaQuoteLeft, FaStar};
use crate::site::use_site_config;
use crate::Icon;

const CAROUSEL_CSS: Asset = asset!("/assets/styling/carousel.css");

/// Polling interval while the timer is suspended by a drag.
const PAUSED_POLL_MS: u64 = 250;

/// Remount (via `key`) when the item count changes.
#[component]
pub fn TestimonialCarousel(items: Vec<Testimonial>) -> Element {
    let config = use_site_config().carousel;
    let len = items.len();
    let mut carousel = use_signal(|| {
        Carousel::new(len, now_ms())
            .with_auto_advance(config.auto_advance_ms)
            .with_swipe_threshold(config.swipe_threshold_px)
    });

    // Auto-advance. Sleeps until the timer is due, re-checking after every
    // wake because manual navigation may have reset it meanwhile.
    use_future(move || async move {
        loop {
            let wait = carousel
                .peek()
                .ms_until_advance(now_ms())
                .unwrap_or(PAUSED_POLL_MS);
            if wait > 0 {
                sleep_ms(wait).await;
            }
            let due = carousel.peek().ms_until_advance(now_ms()) == Some(0);
            if due {
                carousel.write().tick(now_ms());
            }
        }
    });

    // Sliding → Idle once the CSS transition has had time to run. Until then
    // the viewport ignores new drags.
    let slide_ms = config.slide_ms;
    use_effect(move || {
        if let Phase::Sliding(_) = carousel().phase() {
            spawn(async move {
                sleep_ms(slide_ms).await;
                carousel.write().settle();
            });
        }
    });

    if len == 0 {
        return rsx! {
            p { class: "muted carousel-empty", "No testimonials yet." }
        };
    }

    let state = carousel();
    let active = state.active();
    let dragging = state.is_dragging();
    let viewport_class = if dragging {
        "carousel-viewport dragging"
    } else if state.is_sliding() {
        "carousel-viewport sliding"
    } else {
        "carousel-viewport"
    };
    let offset = state.drag_offset();
    let track_style = format!(
        "transform: translateX(calc({}% + {}px)); transition: {};",
        -(active as f64) * 100.0,
        offset,
        if dragging { "none".to_string() } else { format!("transform {slide_ms}ms ease") },
    );

    rsx! {
        document::Stylesheet { href: CAROUSEL_CSS }
        div {
            class: "carousel",
            div {
                class: viewport_class,
                onpointerdown: move |evt: PointerEvent| {
                    carousel.write().drag_start(evt.client_coordinates().x);
                    if carousel.peek().is_dragging() {
                        capture_pointer(&evt);
                    }
                },
                onpointermove: move |evt: PointerEvent| {
                    if carousel.peek().is_dragging() {
                        carousel.write().drag_move(evt.client_coordinates().x);
                    }
                },
                onpointerup: move |_| {
                    let outcome = carousel.write().drag_end(now_ms());
                    tracing::trace!("Carousel drag released: {:?}", outcome);
                },
                onpointerleave: move |_| {
                    if carousel.peek().is_dragging() {
                        carousel.write().drag_cancel(now_ms());
                    }
                },
                onpointercancel: move |_| {
                    if carousel.peek().is_dragging() {
                        carousel.write().drag_cancel(now_ms());
                    }
                },
                div {
                    class: "carousel-track",
                    style: "{track_style}",
                    for (i, t) in items.iter().enumerate() {
                        div {
                            key: "{t.id}",
                            class: if i == active { "carousel-slide active" } else { "carousel-slide" },
                            "aria-hidden": if i == active { "false" } else { "true" },
                            TestimonialCard { testimonial: t.clone() }
                        }
                    }
                }
            }

            if len > 1 {
                div {
                    class: "carousel-controls",
                    button {
                        class: "icon-button",
                        "aria-label": "Previous testimonial",
                        onclick: move |_| carousel.write().previous(now_ms()),
                        Icon { icon: FaChevronLeft, width: 14, height: 14 }
                    }
                    div {
                        class: "carousel-dots",
                        for i in 0..len {
                            button {
                                key: "{i}",
                                class: if i == active { "carousel-dot active" } else { "carousel-dot" },
                                "aria-label": format!("Show testimonial {}", i + 1),
                                onclick: move |_| carousel.write().go_to(i, now_ms()),
                            }
                        }
                    }
                    button {
                        class: "icon-button",
                        "aria-label": "Next testimonial",
                        onclick: move |_| carousel.write().next(now_ms()),
                        Icon { icon: FaChevronRight, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}

/// Route the rest of this pointer's events to the element it went down on, so
/// the drag survives leaving the viewport.
#[cfg(all(feature = "web", target_arch = "wasm32"))]
fn capture_pointer(evt: &PointerEvent) {
    use dioxus::web::WebEventExt;
    use wasm_bindgen::JsCast;

    let event = evt.as_web_event();
    let Some(target) = event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
    else {
        return;
    };
    if let Err(e) = target.set_pointer_capture(event.pointer_id()) {
        tracing::debug!("Pointer capture refused: {:?}", e);
    }
}

#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
fn capture_pointer(_evt: &PointerEvent) {}

#[component]
pub fn TestimonialCard(testimonial: Testimonial) -> Element {
    let (filled, empty) = stars(testimonial.rating);
    let byline = testimonial.byline();

    rsx! {
        figure {
            class: "testimonial-card",
            span { class: "testimonial-quote-icon", Icon { icon: FaQuoteLeft, width: 20, height: 20 } }
            div {
                class: "testimonial-stars",
                "aria-label": "{filled} out of 5 stars",
                for i in 0..filled {
                    span { key: "f{i}", class: "star filled", Icon { icon: FaStar, width: 14, height: 14 } }
                }
                for i in 0..empty {
                    span { key: "e{i}", class: "star", Icon { icon: FaStar, width: 14, height: 14 } }
                }
            }
            blockquote { class: "testimonial-content", "{testimonial.content}" }
            figcaption {
                class: "testimonial-author",
                Avatar {
                    src: testimonial.image.clone(),
                    name: testimonial.name.clone(),
                    class: "avatar avatar--md",
                }
                div {
                    class: "testimonial-author-text",
                    strong { "{testimonial.name}" }
                    if !byline.is_empty() {
                        span { class: "muted", "{byline}" }
                    }
                }
                OptionalImage {
                    src: testimonial.company_logo.clone(),
                    alt: "{testimonial.company} logo",
                    class: "testimonial-logo",
                }
            }
        }
    }
}
