//! Shared state for the portfolio shell.
//!
//! The root component owns a single [`ViewportController`]. Components
//! never touch it directly; they read the latest [`UiSnapshot`] and send
//! events through [`Viewport`].
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let snapshot = use_snapshot();
//! let mut viewport = use_viewport();
//!
//! button { onclick: move |_| viewport.send(ViewportEvent::Menu(MenuEvent::Toggle)) }
//! ```

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::{
    ClipboardCopier, ContactForm, ContentFeed, FolioConfig, SectionId, SectionRect, UiSnapshot,
    ViewportController, ViewportEffect, ViewportEvent, ViewportSize,
};

/// Elements the controller needs geometry from or scrolls to
#[derive(Default)]
pub struct Anchors {
    /// The scrolling container
    pub root: Option<Rc<MountedData>>,
    /// Top of the page (hero)
    pub top: Option<Rc<MountedData>>,
    /// Registered sections in document order
    pub sections: Vec<(SectionId, Rc<MountedData>)>,
}

impl Anchors {
    fn section(&self, id: &SectionId) -> Option<Rc<MountedData>> {
        self.sections
            .iter()
            .find(|(sid, _)| sid == id)
            .map(|(_, el)| el.clone())
    }
}

/// Handle for feeding input to the controller.
///
/// Copyable; every clone talks to the same controller.
#[derive(Clone, Copy)]
pub struct Viewport {
    controller: Signal<ViewportController>,
    snapshot: Signal<UiSnapshot>,
    anchors: Signal<Anchors>,
    measuring: Signal<MeasureState>,
    frames: Coroutine<Viewport>,
}

#[derive(Clone, Copy, Default, PartialEq)]
enum MeasureState {
    #[default]
    Idle,
    Running,
    /// Another scroll arrived while measuring
    Stale,
}

impl Viewport {
    pub fn new(
        controller: Signal<ViewportController>,
        snapshot: Signal<UiSnapshot>,
        frames: Coroutine<Viewport>,
    ) -> Self {
        Self {
            controller,
            snapshot,
            anchors: Signal::new(Anchors::default()),
            measuring: Signal::new(MeasureState::Idle),
            frames,
        }
    }

    /// Apply an event, publish the new snapshot and carry out any effects
    pub fn send(&mut self, event: ViewportEvent) {
        let effects = self.controller.write().handle(event);
        self.publish();
        if self.controller.peek().is_animating() {
            self.frames.send(*self);
        }
        for effect in effects {
            self.perform(effect);
        }
    }

    /// Advance animations by `dt`. Returns true while more frames are needed.
    pub fn tick(&mut self, dt: std::time::Duration) -> bool {
        let animating = self.controller.write().tick(dt);
        self.publish();
        animating
    }

    /// Pointer entered or left an interactive element
    pub fn hover(&mut self, entered: bool) {
        self.send(if entered {
            ViewportEvent::HoverEnter
        } else {
            ViewportEvent::HoverLeave
        });
    }

    /// Release hovers whose elements unmounted under the pointer.
    ///
    /// Runs from drop hooks, so a shell that is already torn down is
    /// skipped instead of touched.
    pub fn release_hover(&mut self, count: u32) {
        let Ok(mut controller) = self.controller.try_write() else {
            return;
        };
        controller.handle(ViewportEvent::HoverRelease(count));
        let next = controller.snapshot();
        drop(controller);
        if self.snapshot.try_peek().is_ok_and(|current| *current != next) {
            if let Ok(mut snapshot) = self.snapshot.try_write() {
                *snapshot = next;
            }
        }
    }

    pub fn set_root(&mut self, element: Rc<MountedData>) {
        self.anchors.write().root = Some(element);
    }

    pub fn set_top(&mut self, element: Rc<MountedData>) {
        self.anchors.write().top = Some(element);
    }

    pub fn register_section(&mut self, id: SectionId, element: Rc<MountedData>) {
        let mut anchors = self.anchors.write();
        anchors.sections.retain(|(sid, _)| *sid != id);
        anchors.sections.push((id, element));
    }

    /// Read the root size and forward it as a resize
    pub async fn measure_viewport(mut self) {
        let Some(root) = self.anchors.peek().root.clone() else {
            return;
        };
        match root.get_client_rect().await {
            Ok(rect) => {
                if let Some(size) = ViewportSize::new(rect.size.width, rect.size.height) {
                    self.send(ViewportEvent::Resize(size));
                }
            }
            Err(e) => tracing::debug!(error = ?e, "Could not read viewport size"),
        }
    }

    /// Read scroll offset and section geometry after a scroll.
    ///
    /// Overlapping calls collapse into one trailing measurement.
    pub async fn measure_scroll(mut self) {
        if *self.measuring.peek() != MeasureState::Idle {
            self.measuring.set(MeasureState::Stale);
            return;
        }
        loop {
            self.measuring.set(MeasureState::Running);
            self.measure_once().await;
            if *self.measuring.peek() == MeasureState::Running {
                break;
            }
        }
        self.measuring.set(MeasureState::Idle);
    }

    async fn measure_once(&mut self) {
        let (root, sections) = {
            let anchors = self.anchors.peek();
            (anchors.root.clone(), anchors.sections.clone())
        };
        let Some(root) = root else {
            return;
        };

        match root.get_scroll_offset().await {
            Ok(offset) => self.send(ViewportEvent::Scroll { offset_y: offset.y }),
            Err(e) => {
                tracing::debug!(error = ?e, "Could not read scroll offset");
                return;
            }
        }

        let mut rects = Vec::with_capacity(sections.len());
        for (id, element) in sections {
            match element.get_client_rect().await {
                Ok(rect) => rects.push(SectionRect::new(id, rect.origin.y, rect.size.height)),
                Err(e) => tracing::trace!(section = %id, error = ?e, "Section not measurable"),
            }
        }
        self.send(ViewportEvent::SectionGeometry(rects));
    }

    fn publish(&mut self) {
        let next = self.controller.peek().snapshot();
        if *self.snapshot.peek() != next {
            self.snapshot.set(next);
        }
    }

    fn perform(&self, effect: ViewportEffect) {
        let target = {
            let anchors = self.anchors.peek();
            match &effect {
                ViewportEffect::ScrollToSection(id) => anchors.section(id),
                ViewportEffect::ScrollToTop => anchors.top.clone(),
            }
        };
        let Some(element) = target else {
            tracing::warn!(?effect, "No element to scroll to");
            return;
        };
        spawn(async move {
            if let Err(e) = element.scroll_to(ScrollBehavior::Smooth).await {
                tracing::debug!(error = ?e, "Smooth scroll failed");
            }
        });
    }
}

/// Hook to access the viewport handle.
pub fn use_viewport() -> Viewport {
    use_context::<Viewport>()
}

/// Hover reporting for a component's interactive elements.
///
/// Call with `true` on `mouseenter` and `false` on `mouseleave`. An element
/// removed while under the pointer never sees its `mouseleave`; whatever
/// is still held when the component unmounts is released then.
pub fn use_hover() -> Callback<bool> {
    let viewport = use_viewport();
    let held = use_hook(|| Rc::new(Cell::new(0u32)));

    let on_drop = held.clone();
    use_drop(move || {
        let mut viewport = viewport;
        let count = on_drop.replace(0);
        if count > 0 {
            viewport.release_hover(count);
        }
    });

    use_callback(move |entered: bool| {
        let mut viewport = viewport;
        if entered {
            held.set(held.get() + 1);
            viewport.hover(true);
        } else if held.get() > 0 {
            held.set(held.get() - 1);
            viewport.hover(false);
        }
    })
}

/// Hook to read the latest controller snapshot.
///
/// Reading the returned signal subscribes the component to changes.
pub fn use_snapshot() -> Signal<UiSnapshot> {
    use_context::<Signal<UiSnapshot>>()
}

/// Page content, immutable after launch
pub fn use_content() -> Arc<ContentFeed> {
    use_context::<Arc<ContentFeed>>()
}

/// Effective configuration
pub fn use_config() -> Arc<FolioConfig> {
    use_context::<Arc<FolioConfig>>()
}

pub fn use_copier() -> Arc<ClipboardCopier> {
    use_context::<Arc<ClipboardCopier>>()
}

pub fn use_contact_form() -> Arc<ContactForm> {
    use_context::<Arc<ContactForm>>()
}
