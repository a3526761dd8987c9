//! Viewport interaction controller
//!
//! Single entry point for browser-style events. Scroll and pointer input
//! feed their trackers independently; the menu additionally sees scroll
//! deltas so it can close itself on narrow screens.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::FolioConfig;
use crate::error::FolioResult;
use crate::types::{Offset, Point, ScrollDirection, SectionId, ViewportSize};

use super::menu::{MenuEffect, MenuEvent, MenuMachine, MenuState};
use super::pointer::{CursorFrame, PointerFollower};
use super::scroll::ScrollTracker;
use super::scroll_lock::ScrollLock;
use super::sections::{SectionRect, SectionTracker};

/// Raw input delivered by the host
#[derive(Debug, Clone, PartialEq)]
pub enum ViewportEvent {
    Scroll { offset_y: f64 },
    Resize(ViewportSize),
    /// Fresh section geometry, relative to the viewport top
    SectionGeometry(Vec<SectionRect>),
    /// A section crossed the visibility threshold
    Intersection(SectionId),
    PointerMove(Point),
    PointerEnter,
    PointerLeave,
    HoverEnter,
    HoverLeave,
    /// An owner of `n` entered interactive elements unmounted without
    /// reporting the leaves
    HoverRelease(u32),
    Menu(MenuEvent),
}

/// Work the host must carry out on the controller's behalf
pub type ViewportEffect = MenuEffect;

/// Read-only state consumed by presentation components
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UiSnapshot {
    pub offset_y: f64,
    pub direction: ScrollDirection,
    pub is_scrolled: bool,
    pub active_section: Option<SectionId>,
    pub menu: MenuState,
    pub scroll_locked: bool,
    pub narrow: bool,
    pub cursor: CursorFrame,
    pub parallax: [Offset; 2],
}

impl UiSnapshot {
    pub fn is_active(&self, id: &SectionId) -> bool {
        self.active_section.as_ref() == Some(id)
    }

    pub fn menu_open(&self) -> bool {
        self.menu == MenuState::Open
    }
}

#[derive(Debug)]
pub struct ViewportController {
    config: FolioConfig,
    viewport: Option<ViewportSize>,
    scroll: ScrollTracker,
    sections: SectionTracker,
    pointer: PointerFollower,
    menu: MenuMachine,
}

impl ViewportController {
    /// Build a controller for the ordered `sections`.
    ///
    /// `viewport` may be `None` in a non-interactive context; the pointer
    /// follower stays inert until a [`ViewportEvent::Resize`] arrives.
    pub fn new(
        config: FolioConfig,
        sections: Vec<SectionId>,
        viewport: Option<ViewportSize>,
        lock: ScrollLock,
    ) -> FolioResult<Self> {
        config.validate()?;
        let sections = SectionTracker::new(config.sections.clone(), sections)?;
        Ok(Self {
            scroll: ScrollTracker::new(config.scroll.threshold_px),
            pointer: PointerFollower::new(config.pointer.clone(), viewport),
            menu: MenuMachine::new(lock, config.menu.close_scroll_distance_px),
            sections,
            viewport,
            config,
        })
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    pub fn viewport(&self) -> Option<ViewportSize> {
        self.viewport
    }

    pub fn sections(&self) -> &SectionTracker {
        &self.sections
    }

    pub fn menu(&self) -> &MenuMachine {
        &self.menu
    }

    pub fn is_narrow(&self) -> bool {
        self.viewport
            .is_some_and(|vp| vp.is_narrow(self.config.menu.narrow_breakpoint_px))
    }

    /// Apply one event; returns any effects the host must perform
    pub fn handle(&mut self, event: ViewportEvent) -> Vec<ViewportEffect> {
        match event {
            ViewportEvent::Scroll { offset_y } => {
                let delta = self.scroll.on_scroll(offset_y);
                let narrow = self.is_narrow();
                self.menu.handle(MenuEvent::Scrolled { delta, narrow });
            }
            ViewportEvent::Resize(viewport) => {
                self.viewport = Some(viewport);
                self.pointer.resize(viewport);
                if !self.is_narrow() {
                    self.menu.handle(MenuEvent::Widened);
                }
            }
            ViewportEvent::SectionGeometry(rects) => match self.viewport {
                Some(viewport) => {
                    self.sections.measure(viewport, &rects);
                }
                None => tracing::trace!("Section geometry before first resize, skipped"),
            },
            ViewportEvent::Intersection(id) => {
                if let Err(e) = self.sections.observe_crossing(&id) {
                    tracing::warn!(error = %e, "Ignoring intersection");
                }
            }
            ViewportEvent::PointerMove(point) => self.pointer.pointer_move(point),
            ViewportEvent::PointerEnter => self.pointer.pointer_enter(),
            ViewportEvent::PointerLeave => self.pointer.pointer_leave(),
            ViewportEvent::HoverEnter => self.pointer.hover_enter(),
            ViewportEvent::HoverLeave => self.pointer.hover_leave(),
            ViewportEvent::HoverRelease(n) => self.pointer.hover_release(n),
            ViewportEvent::Menu(event) => {
                return self.menu.handle(event).into_iter().collect();
            }
        }
        Vec::new()
    }

    /// Advance animations. Returns true while a further frame is needed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.pointer.tick(dt)
    }

    pub fn is_animating(&self) -> bool {
        !self.pointer.is_settled()
    }

    pub fn snapshot(&self) -> UiSnapshot {
        let scroll = self.scroll.state();
        UiSnapshot {
            offset_y: scroll.offset_y,
            direction: scroll.direction,
            is_scrolled: scroll.scrolled_past_threshold,
            active_section: self.sections.active().cloned(),
            menu: self.menu.state(),
            scroll_locked: self.menu.lock().is_locked(),
            narrow: self.is_narrow(),
            cursor: self.pointer.frame(),
            parallax: self.pointer.parallax(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> SectionId {
        SectionId::parse(name).unwrap()
    }

    fn controller(viewport: Option<ViewportSize>) -> ViewportController {
        ViewportController::new(
            FolioConfig::default(),
            vec![id("about"), id("tech"), id("projects")],
            viewport,
            ScrollLock::new(),
        )
        .unwrap()
    }

    #[test]
    fn initial_snapshot() {
        let c = controller(ViewportSize::new(1280.0, 800.0));
        let snap = c.snapshot();
        assert!(!snap.is_scrolled);
        assert!(snap.active_section.is_none());
        assert!(!snap.menu_open());
        assert!(!snap.scroll_locked);
        assert!(!snap.cursor.visible);
        assert!(!snap.narrow);
    }

    #[test]
    fn scroll_updates_header_state() {
        let mut c = controller(ViewportSize::new(1280.0, 800.0));
        c.handle(ViewportEvent::Scroll { offset_y: 120.0 });
        let snap = c.snapshot();
        assert!(snap.is_scrolled);
        assert_eq!(snap.direction, ScrollDirection::Down);
    }

    #[test]
    fn geometry_drives_active_section() {
        let mut c = controller(ViewportSize::new(1280.0, 1000.0));
        c.handle(ViewportEvent::SectionGeometry(vec![
            SectionRect::new(id("about"), -900.0, 800.0),
            SectionRect::new(id("tech"), 150.0, 700.0),
        ]));
        assert!(c.snapshot().is_active(&id("tech")));
    }

    #[test]
    fn navigate_emits_scroll_effect() {
        let mut c = controller(ViewportSize::new(480.0, 800.0));
        c.handle(ViewportEvent::Menu(MenuEvent::Toggle));
        assert!(c.snapshot().scroll_locked);
        let effects = c.handle(ViewportEvent::Menu(MenuEvent::Navigate(id("projects"))));
        assert_eq!(effects, vec![MenuEffect::ScrollToSection(id("projects"))]);
        assert!(!c.snapshot().scroll_locked);
    }

    #[test]
    fn narrow_scroll_closes_menu() {
        let mut c = controller(ViewportSize::new(480.0, 800.0));
        c.handle(ViewportEvent::Menu(MenuEvent::Toggle));
        c.handle(ViewportEvent::Scroll { offset_y: 100.0 });
        assert!(!c.snapshot().menu_open());
    }

    #[test]
    fn wide_scroll_keeps_menu() {
        let mut c = controller(ViewportSize::new(1280.0, 800.0));
        c.handle(ViewportEvent::Menu(MenuEvent::Toggle));
        c.handle(ViewportEvent::Scroll { offset_y: 100.0 });
        assert!(c.snapshot().menu_open());
    }

    #[test]
    fn widening_closes_menu_and_unlocks() {
        let mut c = controller(ViewportSize::new(480.0, 800.0));
        c.handle(ViewportEvent::Menu(MenuEvent::Toggle));
        assert!(c.snapshot().scroll_locked);

        c.handle(ViewportEvent::Resize(ViewportSize::new(600.0, 800.0).unwrap()));
        assert!(c.snapshot().menu_open());

        c.handle(ViewportEvent::Resize(ViewportSize::new(1280.0, 800.0).unwrap()));
        let snap = c.snapshot();
        assert!(!snap.narrow);
        assert!(!snap.menu_open());
        assert!(!snap.scroll_locked);
    }

    #[test]
    fn released_hovers_stop_hovering() {
        let mut c = controller(ViewportSize::new(800.0, 600.0));
        c.handle(ViewportEvent::PointerMove(Point::new(100.0, 100.0)));
        c.handle(ViewportEvent::HoverEnter);
        c.handle(ViewportEvent::HoverEnter);
        // First element unmounted while still under the pointer
        c.handle(ViewportEvent::HoverRelease(1));
        c.handle(ViewportEvent::HoverLeave);
        assert!(!c.snapshot().cursor.hovering);
    }

    #[test]
    fn pointer_is_inert_until_resize() {
        let mut c = controller(None);
        c.handle(ViewportEvent::PointerMove(Point::new(10.0, 10.0)));
        assert!(!c.snapshot().cursor.visible);

        c.handle(ViewportEvent::Resize(ViewportSize::new(800.0, 600.0).unwrap()));
        c.handle(ViewportEvent::PointerMove(Point::new(10.0, 10.0)));
        assert!(c.snapshot().cursor.visible);
    }

    #[test]
    fn unknown_intersection_is_ignored() {
        let mut c = controller(None);
        c.handle(ViewportEvent::Intersection(id("about")));
        c.handle(ViewportEvent::Intersection(id("blog")));
        assert!(c.snapshot().is_active(&id("about")));
    }

    #[test]
    fn tick_reports_animation() {
        let mut c = controller(ViewportSize::new(800.0, 600.0));
        c.handle(ViewportEvent::PointerMove(Point::new(0.0, 0.0)));
        c.handle(ViewportEvent::PointerMove(Point::new(300.0, 300.0)));
        assert!(c.is_animating());
        let mut frames = 0;
        while c.tick(Duration::from_millis(16)) {
            frames += 1;
            assert!(frames < 2000, "follower never settled");
        }
        let snap = c.snapshot();
        assert_eq!(snap.cursor.ring, Point::new(300.0, 300.0));
        assert_eq!(snap.cursor.dot, Point::new(300.0, 300.0));
    }
}
