//! Input Field Components
//!
//! Labelled text input and textarea for the contact form.

use std::sync::atomic::{AtomicU32, Ordering};

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Form field name
    pub name: String,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
}

/// Single-line text input
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     Input {
///         name: "email".to_string(),
///         input_type: "email".to_string(),
///         value: email(),
///         oninput: move |s| email.set(s),
///         label: "Email".to_string(),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = props.id.clone().unwrap_or_else(|| next_id("input"));

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{id}", "{label}" }
            }
            input {
                id: "{id}",
                class: "input-field",
                name: "{props.name}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    pub name: String,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    /// Number of visible rows
    #[props(default = 5)]
    pub rows: u32,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub id: Option<String>,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let id = props.id.clone().unwrap_or_else(|| next_id("textarea"));

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{id}", "{label}" }
            }
            textarea {
                id: "{id}",
                class: "input-field textarea",
                name: "{props.name}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Unique element id for label association
fn next_id(prefix: &str) -> String {
    static NEXT: AtomicU32 = AtomicU32::new(1);
    format!("{prefix}-{}", NEXT.fetch_add(1, Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = next_id("input");
        let b = next_id("input");
        assert_ne!(a, b);
        assert!(a.starts_with("input-"));
    }
}
