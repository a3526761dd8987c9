use dioxus::prelude::*;
use folio_core::SectionId;

use crate::context::use_viewport;

/// Anchor for a navigation target. Registers itself so the controller can
/// measure it and scroll to it.
#[component]
pub fn PageSection(id: SectionId, children: Element) -> Element {
    let mut viewport = use_viewport();
    let anchor = id.as_str().to_string();

    rsx! {
        section {
            id: "{anchor}",
            class: "page-section section-{anchor}",
            onmounted: move |evt| viewport.register_section(id.clone(), evt.data()),
            div { class: "section-inner", {children} }
        }
    }
}
