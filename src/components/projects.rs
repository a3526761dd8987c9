//! Project cards
//!
//! A card whose screenshot is missing, or fails to load, shows a gradient
//! placeholder with the project's first word instead.

use dioxus::prelude::*;
use folio_core::Project;
use folio_ui::{Button, ButtonVariant, Icon, LucideIcon, SectionHeader, TagList, TagTone};

use crate::context::{use_content, use_hover};
use crate::links::open_external;

#[component]
pub fn ProjectsSection(index: usize) -> Element {
    let content = use_content();

    rsx! {
        SectionHeader {
            index,
            eyebrow: "Projects".to_string(),
            title: "Selected work".to_string(),
        }
        div { class: "project-grid",
            for project in content.projects.iter() {
                ProjectCard { key: "{project.title}", project: project.clone() }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    let hover = use_hover();
    let mut broken = use_signal(|| false);
    let show_image = project.has_image() && !broken();
    let repo = project.link.clone();
    let demo = project.demo.clone();

    let card_class = if project.featured {
        "project-card featured"
    } else {
        "project-card"
    };

    rsx! {
        article { class: card_class,
            div { class: "project-media",
                if show_image {
                    img {
                        src: "{project.image}",
                        alt: "{project.title}",
                        loading: "lazy",
                        onerror: move |_| {
                            tracing::debug!("Project image failed to load");
                            broken.set(true);
                        },
                    }
                } else {
                    div { class: "project-placeholder",
                        span { "{project.placeholder_label()}" }
                    }
                }
            }
            div { class: "project-body",
                h3 { class: "project-title", "{project.title}" }
                p { class: "project-description", "{project.description}" }
                if !project.long_description.is_empty() {
                    p { class: "project-detail", "{project.long_description}" }
                }
                TagList { tags: project.tags.clone(), tone: TagTone::Cyan }
                div { class: "project-links",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| open_external(&repo),
                        onhover: hover,
                        LucideIcon { icon: Icon::Github, size: 16 }
                        "Code"
                    }
                    if let Some(demo) = demo {
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| open_external(&demo),
                            onhover: hover,
                            LucideIcon { icon: Icon::ExternalLink, size: 16 }
                            "Live demo"
                        }
                    }
                }
            }
        }
    }
}
