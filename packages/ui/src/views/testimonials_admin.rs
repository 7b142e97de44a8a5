use content::avatar::stars;
use content::NotificationLevel;
use dioxus::prelude::*;

use crate::{notify, use_all_testimonials, use_notifications, Avatar};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Read-only table of every stored testimonial, active or not.
#[component]
pub fn TestimonialsAdminView() -> Element {
    let state = use_all_testimonials();
    let mut notifications = use_notifications();

    // Surface a failed load in the notifications panel as well as inline.
    // The state is written once per fetch, so this fires at most once.
    use_effect(move || {
        if state().error.is_some() {
            notify(
                &mut notifications,
                NotificationLevel::Warning,
                "Testimonials unavailable",
                "The database could not be reached; showing the built-in list.",
            );
        }
    });

    let current = state();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view",
            h1 { class: "view-title", "Testimonials" }
            if let Some(notice) = current.error.clone() {
                p { class: "inline-notice", role: "status", "{notice}" }
            }
            if current.loading {
                p { class: "muted", "Loading…" }
            } else if current.items.is_empty() {
                p { class: "muted", "No testimonials stored yet." }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Order" }
                            th { "Author" }
                            th { "Company" }
                            th { "Rating" }
                            th { "Status" }
                        }
                    }
                    tbody {
                        for t in current.items.iter() {
                            tr {
                                key: "{t.id}",
                                td { {t.sort_order.map(|o| o.to_string()).unwrap_or_else(|| "–".to_string())} }
                                td {
                                    div {
                                        class: "table-author",
                                        Avatar { src: t.image.clone(), name: t.name.clone(), class: "avatar avatar--sm" }
                                        div {
                                            strong { "{t.name}" }
                                            span { class: "muted", "{t.role}" }
                                        }
                                    }
                                }
                                td { "{t.company}" }
                                td { {"★".repeat(stars(t.rating).0)} }
                                td {
                                    if t.is_active.unwrap_or(true) {
                                        span { class: "badge badge-success", "Active" }
                                    } else {
                                        span { class: "badge", "Hidden" }
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
