//! Navigation header and drawer
//!
//! Wide viewports show inline links with the active section highlighted.
//! Narrow viewports get a menu button that opens a drawer over a backdrop.

use dioxus::prelude::*;
use folio_core::{MenuEvent, SectionId, ViewportEvent};
use folio_ui::{Icon, IconButton, LucideIcon};

use crate::context::{use_content, use_hover, use_snapshot, use_viewport};

#[component]
pub fn Navbar() -> Element {
    let content = use_content();
    let snapshot = use_snapshot();
    let mut viewport = use_viewport();
    let hover = use_hover();

    let scrolled = use_memo(move || snapshot.read().is_scrolled);
    let narrow = use_memo(move || snapshot.read().narrow);
    let open = use_memo(move || snapshot.read().menu_open());
    let active = use_memo(move || snapshot.read().active_section.clone());

    let initials: String = content
        .personal
        .name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();

    let (toggle_label, toggle_icon) = if open() {
        ("Close menu", Icon::Close)
    } else {
        ("Open menu", Icon::Menu)
    };

    rsx! {
        header { class: if scrolled() { "navbar scrolled" } else { "navbar" },
            div { class: "navbar-inner",
                button {
                    class: "navbar-logo",
                    r#type: "button",
                    "aria-label": "Back to top",
                    onclick: move |_| viewport.send(ViewportEvent::Menu(MenuEvent::NavigateHome)),
                    onmouseenter: move |_| hover.call(true),
                    onmouseleave: move |_| hover.call(false),
                    span { class: "logo-mark", "{initials}" }
                    span { class: "logo-dot", "." }
                }

                if narrow() {
                    IconButton {
                        class: "menu-toggle".to_string(),
                        aria_label: toggle_label.to_string(),
                        expanded: open(),
                        onclick: move |_| viewport.send(ViewportEvent::Menu(MenuEvent::Toggle)),
                        onhover: hover,
                        LucideIcon { icon: toggle_icon, size: 22 }
                    }
                } else {
                    nav { class: "navbar-links",
                        for entry in content.nav.iter() {
                            NavLink {
                                key: "{entry.section_id}",
                                label: entry.label.clone(),
                                section: entry.section_id.clone(),
                                active: active().as_ref() == Some(&entry.section_id),
                            }
                        }
                    }
                }
            }
        }

        if narrow() && open() {
            div {
                class: "drawer-backdrop",
                onclick: move |_| viewport.send(ViewportEvent::Menu(MenuEvent::OutsideClick)),
            }
            nav { class: "drawer", "aria-label": "Sections",
                for entry in content.nav.iter() {
                    NavLink {
                        key: "{entry.section_id}",
                        label: entry.label.clone(),
                        section: entry.section_id.clone(),
                        active: active().as_ref() == Some(&entry.section_id),
                        drawer: true,
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(label: String, section: SectionId, active: bool, #[props(default)] drawer: bool) -> Element {
    let mut viewport = use_viewport();
    let hover = use_hover();
    let class = match (drawer, active) {
        (true, true) => "drawer-link active",
        (true, false) => "drawer-link",
        (false, true) => "nav-link active",
        (false, false) => "nav-link",
    };

    rsx! {
        button {
            class,
            r#type: "button",
            "aria-current": if active { "true" } else { "false" },
            onclick: move |_| {
                viewport.send(ViewportEvent::Menu(MenuEvent::Navigate(section.clone())));
            },
            onmouseenter: move |_| hover.call(true),
            onmouseleave: move |_| hover.call(false),
            "{label}"
        }
    }
}
