use content::data::projects_by;
use content::{Project, ProjectCategory};
use dioxus::prelude::*;

use super::SectionHeading;
use crate::brands::FaGithub;
use crate::icons::FaArrowUpRightFromSquare;
use crate::{Icon, OptionalImage, Reveal};

/// Project grid with category tabs. Switching tabs is instant; only the
/// section as a whole is revealed on scroll.
#[component]
pub fn Projects() -> Element {
    let mut filter = use_signal(|| None::<ProjectCategory>);
    let projects = projects_by(filter());

    rsx! {
        section {
            id: "projects",
            class: "section section-alt",
            Reveal {
                class: "container",
                SectionHeading {
                    eyebrow: "Projects",
                    title: "Selected work",
                    subtitle: "A few things I've designed, built and shipped.",
                }
                div {
                    class: "tabs",
                    role: "tablist",
                    button {
                        class: if filter().is_none() { "tab active" } else { "tab" },
                        role: "tab",
                        onclick: move |_| filter.set(None),
                        "All"
                    }
                    for category in ProjectCategory::ALL {
                        button {
                            key: "{category.as_str()}",
                            class: if filter() == Some(category) { "tab active" } else { "tab" },
                            role: "tab",
                            onclick: move |_| filter.set(Some(category)),
                            "{category.label()}"
                        }
                    }
                }
                div {
                    class: "card-grid",
                    for project in projects {
                        ProjectCard { key: "{project.id}", project }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> Element {
    rsx! {
        article {
            class: if project.featured { "card project-card featured" } else { "card project-card" },
            OptionalImage {
                src: project.image.to_string(),
                alt: project.title.to_string(),
                class: "project-image",
                placeholder: project.title.to_string(),
            }
            div {
                class: "project-body",
                div {
                    class: "project-header",
                    h3 { "{project.title}" }
                    span { class: "badge", "{project.category.label()}" }
                }
                p { class: "muted", "{project.description}" }
                div {
                    class: "tags",
                    for tag in project.tags.iter() {
                        span { key: "{tag}", class: "tag", "{tag}" }
                    }
                }
                div {
                    class: "project-links",
                    if let Some(url) = project.demo_url {
                        a {
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            Icon { icon: FaArrowUpRightFromSquare, width: 12, height: 12 }
                            " Live demo"
                        }
                    }
                    if let Some(url) = project.repo_url {
                        a {
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            Icon { icon: FaGithub, width: 12, height: 12 }
                            " Source"
                        }
                    }
                }
            }
        }
    }
}
