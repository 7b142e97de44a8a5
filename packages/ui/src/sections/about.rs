use content::data::skills_in;
use content::SkillGroup;
use dioxus::prelude::*;

use super::SectionHeading;
use crate::site::use_site_config;
use crate::Reveal;

/// Short bio plus skill bars grouped by area.
#[component]
pub fn About() -> Element {
    let owner = use_site_config().owner;

    rsx! {
        section {
            id: "about",
            class: "section",
            Reveal {
                class: "container",
                SectionHeading {
                    eyebrow: "About",
                    title: "What I work with",
                    subtitle: owner.tagline.clone(),
                }
                div {
                    class: "skill-groups",
                    for (i, group) in SkillGroup::ALL.into_iter().enumerate() {
                        Reveal {
                            key: "{group:?}",
                            class: "skill-group card",
                            delay_ms: (i as u32) * 80,
                            h3 { "{group.label()}" }
                            for skill in skills_in(group) {
                                div {
                                    key: "{skill.name}",
                                    class: "skill",
                                    div {
                                        class: "skill-label",
                                        span { "{skill.name}" }
                                        span { class: "muted", "{skill.level}%" }
                                    }
                                    div {
                                        class: "skill-bar",
                                        role: "progressbar",
                                        "aria-valuenow": "{skill.level}",
                                        "aria-valuemin": "0",
                                        "aria-valuemax": "100",
                                        div { class: "skill-bar-fill", style: "width: {skill.level}%" }
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
