use chrono::Datelike;
use dioxus::prelude::*;
use folio_core::MenuEvent;
use folio_core::ViewportEvent;

use crate::context::{use_content, use_hover, use_viewport};

#[component]
pub fn Footer() -> Element {
    let content = use_content();
    let mut viewport = use_viewport();
    let hover = use_hover();
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "footer",
            p { class: "footer-copy",
                "© {year} {content.personal.name}. Built with Rust and Dioxus."
            }
            button {
                class: "footer-top",
                r#type: "button",
                onclick: move |_| viewport.send(ViewportEvent::Menu(MenuEvent::NavigateHome)),
                onmouseenter: move |_| hover.call(true),
                onmouseleave: move |_| hover.call(false),
                "Back to top"
            }
        }
    }
}
