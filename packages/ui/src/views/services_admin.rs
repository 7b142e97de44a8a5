use content::data::SERVICES;
use dioxus::prelude::*;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn ServicesAdminView() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view",
            h1 { class: "view-title", "Services" }
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Service" }
                        th { "Summary" }
                        th { "Deliverables" }
                        th { "Timeline" }
                    }
                }
                tbody {
                    for s in SERVICES.iter() {
                        tr {
                            key: "{s.id}",
                            td { strong { "{s.title}" } }
                            td { class: "muted", "{s.summary}" }
                            td { "{s.deliverables.len()}" }
                            td { "{s.timeline}" }
                        }
                    }
                }
            }
        }
    }
}
