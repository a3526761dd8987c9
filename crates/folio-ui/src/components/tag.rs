//! Tag pills
//!
//! Small labels for technologies on experience and project cards.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TagTone {
    #[default]
    Neutral,
    Violet,
    Cyan,
}

impl TagTone {
    pub fn class(&self) -> &'static str {
        match self {
            TagTone::Neutral => "tag",
            TagTone::Violet => "tag tag-violet",
            TagTone::Cyan => "tag tag-cyan",
        }
    }
}

#[component]
pub fn Tag(label: String, #[props(default)] tone: TagTone) -> Element {
    rsx! {
        span { class: tone.class(), "{label}" }
    }
}

/// Row of tags, wrapping as needed
#[component]
pub fn TagList(tags: Vec<String>, #[props(default)] tone: TagTone) -> Element {
    if tags.is_empty() {
        return rsx! {};
    }
    rsx! {
        div { class: "tag-list",
            for tag in tags {
                Tag { key: "{tag}", label: tag.clone(), tone }
            }
        }
    }
}
