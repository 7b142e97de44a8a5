use content::data::projects_by;
use content::ProjectCategory;
use dioxus::prelude::*;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn ProjectsAdminView() -> Element {
    let mut filter = use_signal(|| None::<ProjectCategory>);
    let projects = projects_by(filter());

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view",
            h1 { class: "view-title", "Projects" }
            div {
                class: "view-toolbar",
                label { r#for: "project-filter", "Category" }
                select {
                    id: "project-filter",
                    onchange: move |evt: FormEvent| filter.set(ProjectCategory::parse(&evt.value())),
                    option { value: "all", "All" }
                    for c in ProjectCategory::ALL {
                        option { key: "{c.as_str()}", value: "{c.as_str()}", "{c.label()}" }
                    }
                }
                span { class: "muted", "{projects.len()} shown" }
            }
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Title" }
                        th { "Category" }
                        th { "Tags" }
                        th { "Featured" }
                    }
                }
                tbody {
                    for p in projects {
                        tr {
                            key: "{p.id}",
                            td { "{p.title}" }
                            td { "{p.category.label()}" }
                            td { {p.tags.join(", ")} }
                            td { if p.featured { "Yes" } else { "–" } }
                        }
                    }
                }
            }
        }
    }
}
