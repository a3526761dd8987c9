//! Custom cursor: a trailing ring and a fast dot, both spring driven

use dioxus::prelude::*;
use folio_core::Point;

use crate::context::use_snapshot;

#[component]
pub fn CursorOverlay() -> Element {
    let snapshot = use_snapshot();
    let cursor = use_memo(move || snapshot.read().cursor);
    let frame = cursor();

    let mut class = String::from("cursor");
    if frame.visible {
        class.push_str(" visible");
    }
    if frame.hovering {
        class.push_str(" hovering");
    }
    let ring = placement(frame.ring, frame.ring_size);
    let dot = placement(frame.dot, frame.dot_size);

    rsx! {
        div { class: "{class}", "aria-hidden": "true",
            div { class: "cursor-ring", style: "{ring}" }
            div { class: "cursor-dot", style: "{dot}" }
        }
    }
}

/// Inline style centring a circle of `size` on `center`
fn placement(center: Point, size: f64) -> String {
    format!(
        "width: {size:.1}px; height: {size:.1}px; transform: translate({:.1}px, {:.1}px);",
        center.x - size / 2.0,
        center.y - size / 2.0
    )
}
