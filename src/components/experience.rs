use dioxus::prelude::*;
use folio_ui::{Icon, LucideIcon, SectionHeader, TagList, TagTone};

use crate::context::use_content;

/// Career timeline, most recent first
#[component]
pub fn ExperienceSection(index: usize) -> Element {
    let content = use_content();

    rsx! {
        SectionHeader {
            index,
            eyebrow: "Experience".to_string(),
            title: "Where I've worked".to_string(),
        }
        ol { class: "timeline",
            for job in content.experience.iter() {
                li { key: "{job.company}-{job.period}", class: "timeline-item",
                    span { class: "timeline-marker", "aria-hidden": "true" }
                    article { class: "timeline-card",
                        header { class: "timeline-header",
                            div {
                                h3 { class: "timeline-role", "{job.role}" }
                                p { class: "timeline-company", "{job.company}" }
                            }
                            div { class: "timeline-meta",
                                span { class: "timeline-period", "{job.period}" }
                                span { class: "timeline-location",
                                    LucideIcon { icon: Icon::MapPin, size: 14 }
                                    "{job.location}"
                                }
                            }
                        }
                        p { class: "timeline-description", "{job.description}" }
                        if !job.metrics.is_empty() {
                            ul { class: "timeline-metrics",
                                for metric in job.metrics.iter() {
                                    li { "{metric}" }
                                }
                            }
                        }
                        TagList { tags: job.tags.clone(), tone: TagTone::Violet }
                    }
                }
            }
        }
    }
}
