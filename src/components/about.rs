use dioxus::prelude::*;
use folio_ui::{Icon, LucideIcon, SectionHeader};

use crate::context::use_content;

#[component]
pub fn AboutSection(index: usize) -> Element {
    let content = use_content();
    let about = &content.about;
    let detail = content.about_detail();

    rsx! {
        SectionHeader { index, eyebrow: "About".to_string(), title: about.heading.clone() }

        div { class: "about-grid",
            div { class: "about-copy",
                p { "{content.personal.bio}" }
                if !detail.is_empty() {
                    p { "{detail}" }
                }
                p { class: "about-location",
                    LucideIcon { icon: Icon::MapPin, size: 16 }
                    "{content.personal.location}"
                }
            }

            dl { class: "about-facts",
                for fact in about.facts.iter() {
                    div { key: "{fact.label}", class: "fact",
                        dt { "{fact.label}" }
                        dd { "{fact.value}" }
                    }
                }
            }
        }

        div { class: "value-grid",
            for card in about.values.iter() {
                article {
                    key: "{card.title}",
                    class: "value-card",
                    style: "--accent: {card.accent}",
                    h3 { "{card.title}" }
                    p { "{card.description}" }
                }
            }
        }
    }
}
