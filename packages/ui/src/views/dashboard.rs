use content::data::{EDUCATION, PROJECTS, SERVICES};
use dioxus::prelude::*;

use crate::{use_all_testimonials, use_notifications};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn DashboardView() -> Element {
    let testimonials = use_all_testimonials();
    let notifications = use_notifications();

    let t = testimonials();
    let active = t.items.iter().filter(|t| t.is_active.unwrap_or(true)).count();
    let testimonial_stat = if t.loading { "…".to_string() } else { active.to_string() };
    let featured = PROJECTS.iter().filter(|p| p.featured).count();
    let recent: Vec<_> = notifications().newest_first().take(5).cloned().collect();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view",
            h1 { class: "view-title", "Dashboard" }
            div {
                class: "stat-grid",
                StatCard { label: "Active testimonials", value: testimonial_stat }
                StatCard { label: "Projects", value: PROJECTS.len().to_string(), hint: "{featured} featured" }
                StatCard { label: "Services", value: SERVICES.len().to_string() }
                StatCard { label: "Education entries", value: EDUCATION.len().to_string() }
            }
            if let Some(notice) = t.error.clone() {
                p { class: "inline-notice", role: "status", "{notice}" }
            }
            section {
                class: "view-section",
                h2 { "Recent activity" }
                if recent.is_empty() {
                    p { class: "muted", "No recent activity." }
                }
                ul {
                    class: "activity-list",
                    for n in recent {
                        li {
                            key: "{n.id}",
                            strong { "{n.title}" }
                            span { class: "muted", " {n.message}" }
                            span { class: "activity-time", "{n.time}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: String, value: String, #[props(default)] hint: Option<String>) -> Element {
    rsx! {
        div {
            class: "stat-card",
            span { class: "stat-label", "{label}" }
            span { class: "stat-value", "{value}" }
            if let Some(hint) = hint {
                span { class: "stat-hint muted", "{hint}" }
            }
        }
    }
}
