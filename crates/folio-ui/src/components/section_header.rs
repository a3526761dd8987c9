//! Section heading block
//!
//! Numbered eyebrow, title and optional lead paragraph, shared by every
//! content section.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct SectionHeaderProps {
    /// Position in the page, rendered as "01", "02", ...
    pub index: usize,
    /// Short label above the title
    pub eyebrow: String,
    pub title: String,
    #[props(default)]
    pub lead: Option<String>,
}

#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    let number = ordinal(props.index);
    rsx! {
        header { class: "section-header",
            p { class: "section-eyebrow",
                span { class: "section-number", "{number}" }
                " / {props.eyebrow}"
            }
            h2 { class: "section-title", "{props.title}" }
            if let Some(lead) = &props.lead {
                p { class: "section-lead", "{lead}" }
            }
        }
    }
}

/// Zero-padded display number
fn ordinal(index: usize) -> String {
    format!("{:02}", index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_is_zero_padded() {
        assert_eq!(ordinal(1), "01");
        assert_eq!(ordinal(12), "12");
    }
}
