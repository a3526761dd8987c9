//! Button Components
//!
//! - Primary: filled violet call to action
//! - Outline: bordered secondary action
//! - Ghost: text-only, used in navigation

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled gradient button for the main action
    #[default]
    Primary,
    /// Bordered, transparent background
    Outline,
    /// Text only
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Join a base class with optional extras
pub(crate) fn class_list(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Called with `true` on pointer enter and `false` on leave
    #[props(default)]
    pub onhover: Option<EventHandler<bool>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Outline,
///         onclick: move |_| open_cv(),
///         "Download CV"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = class_list(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            onmouseenter: move |_| {
                if let Some(handler) = &props.onhover {
                    handler.call(true);
                }
            },
            onmouseleave: move |_| {
                if let Some(handler) = &props.onhover {
                    handler.call(false);
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (menu toggle, social links)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    #[props(default)]
    pub onhover: Option<EventHandler<bool>>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Reflected as `aria-expanded` when set
    #[props(default)]
    pub expanded: Option<bool>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = class_list("icon-btn", props.class.as_deref());
    let expanded = props.expanded.map(|e| if e { "true" } else { "false" });

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            "aria-expanded": expanded,
            onclick: move |_| props.onclick.call(()),
            onmouseenter: move |_| {
                if let Some(handler) = &props.onhover {
                    handler.call(true);
                }
            },
            onmouseleave: move |_| {
                if let Some(handler) = &props.onhover {
                    handler.call(false);
                }
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Outline.class(), "btn-outline");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn class_list_skips_empty_extra() {
        assert_eq!(class_list("icon-btn", None), "icon-btn");
        assert_eq!(class_list("icon-btn", Some("")), "icon-btn");
        assert_eq!(class_list("icon-btn", Some("menu-toggle")), "icon-btn menu-toggle");
    }
}
