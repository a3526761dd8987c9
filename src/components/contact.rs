//! Contact section
//!
//! Copy-to-clipboard for the email address and a message form. Both
//! mirror the state published by their controllers in `folio-core`.

use dioxus::prelude::*;
use folio_core::{ContactMessage, SubmitOutcome, SubmitStatus};
use folio_ui::{Button, ButtonVariant, Icon, Input, LucideIcon, SectionHeader, TextArea};

use crate::context::{use_contact_form, use_content, use_copier, use_hover};
use crate::links::open_external;

#[component]
pub fn ContactSection(index: usize) -> Element {
    let content = use_content();
    let copier = use_copier();
    let hover = use_hover();

    let mut copied = use_signal(|| false);
    let watched = copier.clone();
    use_future(move || {
        let mut rx = watched.subscribe();
        async move {
            while rx.changed().await.is_ok() {
                let showing = *rx.borrow_and_update();
                copied.set(showing);
            }
        }
    });

    let copy_class = if copied() { "copy-button copied" } else { "copy-button" };
    let email = content.personal.email.clone();
    let mailto = format!("mailto:{}", content.personal.email);

    rsx! {
        SectionHeader {
            index,
            eyebrow: "Contact".to_string(),
            title: "Let's build something".to_string(),
            lead: "Have a project in mind or just want to say hi? My inbox is open.".to_string(),
        }

        div { class: "contact-grid",
            div { class: "contact-card",
                p { class: "contact-label", "Email" }
                button {
                    class: "contact-email",
                    r#type: "button",
                    onclick: move |_| open_external(&mailto),
                    onmouseenter: move |_| hover.call(true),
                    onmouseleave: move |_| hover.call(false),
                    LucideIcon { icon: Icon::Mail, size: 18 }
                    "{content.personal.email}"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    class: copy_class.to_string(),
                    onclick: move |_| {
                        let copier = copier.clone();
                        let email = email.clone();
                        spawn(async move {
                            copier.copy(&email).await;
                        });
                    },
                    onhover: hover,
                    if copied() {
                        LucideIcon { icon: Icon::Check, size: 16 }
                        "Copied!"
                    } else {
                        LucideIcon { icon: Icon::Copy, size: 16 }
                        "Copy email"
                    }
                }
                p { class: "contact-location",
                    LucideIcon { icon: Icon::MapPin, size: 16 }
                    "{content.personal.location}"
                }
            }

            ContactFormPanel {}
        }
    }
}

#[component]
fn ContactFormPanel() -> Element {
    let form = use_contact_form();
    let hover = use_hover();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut problem = use_signal(|| None::<String>);

    let mut status = use_signal(|| form.status());
    let watched = form.clone();
    use_future(move || {
        let mut rx = watched.subscribe();
        async move {
            while rx.changed().await.is_ok() {
                let next = rx.borrow_and_update().clone();
                status.set(next);
            }
        }
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = form.clone();
        let draft = ContactMessage {
            name: name.peek().clone(),
            email: email.peek().clone(),
            subject: subject.peek().clone(),
            message: message.peek().clone(),
        };
        spawn(async move {
            match form.submit(draft).await {
                SubmitOutcome::Delivered(ack) => {
                    tracing::info!(reference = %ack.reference, "Message delivered");
                    problem.set(None);
                    name.set(String::new());
                    email.set(String::new());
                    subject.set(String::new());
                    message.set(String::new());
                }
                SubmitOutcome::Rejected(reason) => problem.set(Some(reason)),
                SubmitOutcome::Failed(_) => problem.set(None),
                SubmitOutcome::Ignored => {}
            }
        });
    };

    let current = status();
    let busy = current.is_busy();

    rsx! {
        form { class: "contact-form", novalidate: true, onsubmit: onsubmit,
            div { class: "form-row",
                Input {
                    name: "name".to_string(),
                    label: "Name".to_string(),
                    placeholder: "Your name".to_string(),
                    value: name(),
                    oninput: move |v| name.set(v),
                    required: true,
                    disabled: busy,
                }
                Input {
                    name: "email".to_string(),
                    label: "Email".to_string(),
                    input_type: "email".to_string(),
                    placeholder: "you@example.com".to_string(),
                    value: email(),
                    oninput: move |v| email.set(v),
                    required: true,
                    disabled: busy,
                }
            }
            Input {
                name: "subject".to_string(),
                label: "Subject".to_string(),
                placeholder: "What's it about?".to_string(),
                value: subject(),
                oninput: move |v| subject.set(v),
                required: true,
                disabled: busy,
            }
            TextArea {
                name: "message".to_string(),
                label: "Message".to_string(),
                placeholder: "Tell me about your project".to_string(),
                value: message(),
                oninput: move |v| message.set(v),
                required: true,
                disabled: busy,
            }

            if let Some(reason) = problem() {
                p { class: "form-message error", role: "alert", "{reason}" }
            }

            Button {
                button_type: "submit".to_string(),
                disabled: !current.accepts_submit(),
                onhover: hover,
                class: "submit-button".to_string(),
                {match &current {
                    SubmitStatus::Sending => rsx! {
                        LucideIcon { icon: Icon::Loader, size: 16, class: "spin".to_string() }
                        "Sending..."
                    },
                    SubmitStatus::Sent => rsx! {
                        LucideIcon { icon: Icon::Check, size: 16 }
                        "Sent!"
                    },
                    _ => rsx! {
                        LucideIcon { icon: Icon::Send, size: 16 }
                        "Send message"
                    },
                }}
            }

            {match &current {
                SubmitStatus::Sent => rsx! {
                    p { class: "form-message success", role: "status",
                        "Thanks! I'll get back to you soon."
                    }
                },
                SubmitStatus::Failed(reason) => rsx! {
                    p { class: "form-message error", role: "alert",
                        "Couldn't send your message ({reason}). Please try again."
                    }
                },
                _ => rsx! {},
            }}
        }
    }
}
