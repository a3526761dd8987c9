//! Tech stack grid
//!
//! One tile per technology; hovering a tile shows its tooltip.

use dioxus::prelude::*;
use folio_core::TechItem;
use folio_ui::SectionHeader;

use crate::context::{use_content, use_hover};

#[component]
pub fn TechSection(index: usize) -> Element {
    let content = use_content();

    rsx! {
        SectionHeader {
            index,
            eyebrow: "Tech Stack".to_string(),
            title: "Tools I build with".to_string(),
            lead: "Hover a tile for how I use it.".to_string(),
        }
        div { class: "tech-grid",
            for item in content.tech.iter() {
                TechTile { key: "{item.name}", item: item.clone() }
            }
        }
    }
}

#[component]
fn TechTile(item: TechItem) -> Element {
    let hover = use_hover();
    let mut hovered = use_signal(|| false);

    rsx! {
        div {
            class: if hovered() { "tech-tile hovered" } else { "tech-tile" },
            style: "--accent: {item.color}",
            tabindex: "0",
            onmouseenter: move |_| {
                hovered.set(true);
                hover.call(true);
            },
            onmouseleave: move |_| {
                hovered.set(false);
                hover.call(false);
            },
            onfocus: move |_| hovered.set(true),
            onblur: move |_| hovered.set(false),

            span { class: "tech-glyph", "{item.glyph()}" }
            span { class: "tech-name", "{item.name}" }
            span { class: "tech-category", "{item.category}" }
            if hovered() {
                div { class: "tech-tooltip", role: "tooltip", "{item.tooltip}" }
            }
        }
    }
}
