//! Thin route wrappers around the shared dashboard views.

use dioxus::prelude::*;
use ui::views::{
    DashboardView, ProjectsAdminView, ServicesAdminView, SettingsView, TestimonialsAdminView,
};

#[component]
pub fn Dashboard() -> Element {
    rsx! { DashboardView {} }
}

#[component]
pub fn AdminTestimonials() -> Element {
    rsx! { TestimonialsAdminView {} }
}

#[component]
pub fn AdminProjects() -> Element {
    rsx! { ProjectsAdminView {} }
}

#[component]
pub fn AdminServices() -> Element {
    rsx! { ServicesAdminView {} }
}

#[component]
pub fn AdminSettings() -> Element {
    rsx! { SettingsView {} }
}
