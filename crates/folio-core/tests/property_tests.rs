//! Property-based tests for the viewport controller
//!
//! Uses proptest to check the invariants that must hold for any input
//! sequence: header threshold, single active section, scroll lock
//! exclusivity and spring convergence.

use std::time::Duration;

use folio_core::{
    FolioConfig, MenuEvent, MenuMachine, MenuState, Point, ScrollLock, ScrollTracker,
    SectionConfig, SectionId, SectionRect, SectionTracker, Spring, Spring2, SpringConfig,
    ViewportController, ViewportEvent, ViewportSize,
};
use proptest::prelude::*;

const SECTIONS: [&str; 5] = ["about", "tech", "experience", "projects", "contact"];

fn section_ids() -> Vec<SectionId> {
    SECTIONS.iter().map(|s| SectionId::parse(s).unwrap()).collect()
}

// ============================================================================
// Strategy Generators
// ============================================================================

/// Scroll offsets, including the odd negative value from overscroll
fn offset_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => 0.0..5000.0f64,
        1 => -200.0..0.0f64,
        1 => Just(20.0),
    ]
}

/// Section index into `SECTIONS`
fn section_strategy() -> impl Strategy<Value = usize> {
    0..SECTIONS.len()
}

/// Geometry for the whole page at some scroll position
fn geometry_strategy() -> impl Strategy<Value = Vec<(usize, f64, f64)>> {
    prop::collection::vec((section_strategy(), -3000.0..3000.0f64, 1.0..2000.0f64), 0..6)
}

fn menu_event_strategy() -> impl Strategy<Value = MenuEvent> {
    prop_oneof![
        3 => Just(MenuEvent::Toggle),
        1 => section_strategy().prop_map(|i| MenuEvent::Navigate(section_ids()[i].clone())),
        1 => Just(MenuEvent::NavigateHome),
        1 => Just(MenuEvent::OutsideClick),
        1 => Just(MenuEvent::Escape),
        1 => Just(MenuEvent::Widened),
        2 => (-100.0..100.0f64, any::<bool>())
            .prop_map(|(delta, narrow)| MenuEvent::Scrolled { delta, narrow }),
    ]
}

/// Mixed controller input
#[derive(Debug, Clone)]
enum Input {
    Scroll(f64),
    Geometry(Vec<(usize, f64, f64)>),
    Crossing(usize),
    Menu(MenuEvent),
    Pointer(f64, f64),
}

fn input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![
        3 => offset_strategy().prop_map(Input::Scroll),
        2 => geometry_strategy().prop_map(Input::Geometry),
        1 => section_strategy().prop_map(Input::Crossing),
        2 => menu_event_strategy().prop_map(Input::Menu),
        2 => (-100.0..2000.0f64, -100.0..1200.0f64).prop_map(|(x, y)| Input::Pointer(x, y)),
    ]
}

fn spring_strategy() -> impl Strategy<Value = SpringConfig> {
    prop_oneof![
        Just(SpringConfig::new(200.0, 25.0, 0.5)),
        Just(SpringConfig::new(400.0, 35.0, 0.3)),
        Just(SpringConfig::new(80.0, 30.0, 1.0)),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The header flag always reflects the latest offset against the threshold
    #[test]
    fn scrolled_flag_tracks_latest_offset(offsets in prop::collection::vec(offset_strategy(), 1..50)) {
        let mut tracker = ScrollTracker::new(20.0);
        for offset in &offsets {
            tracker.on_scroll(*offset);
            prop_assert_eq!(tracker.is_scrolled(), *offset > 20.0);
        }
    }

    /// At most one section is active, it is always registered, and once
    /// something is active it never goes back to nothing
    #[test]
    fn single_registered_active_section(
        frames in prop::collection::vec(geometry_strategy(), 1..30),
        crossings in prop::collection::vec(prop::option::of(section_strategy()), 1..30),
    ) {
        let ids = section_ids();
        let mut tracker = SectionTracker::new(SectionConfig::default(), ids.clone()).unwrap();
        let viewport = ViewportSize::new(1280.0, 900.0).unwrap();
        let mut ever_active = false;

        for (frame, crossing) in frames.iter().zip(crossings.iter().cycle()) {
            let rects: Vec<SectionRect> = frame
                .iter()
                .map(|(i, top, height)| SectionRect::new(ids[*i].clone(), *top, *height))
                .collect();
            tracker.measure(viewport, &rects);
            if let Some(i) = crossing {
                tracker.observe_crossing(&ids[*i]).unwrap();
            }

            let active_count = ids.iter().filter(|id| tracker.is_active(id)).count();
            prop_assert!(active_count <= 1);
            if let Some(active) = tracker.active() {
                prop_assert!(ids.contains(active));
                ever_active = true;
            } else {
                prop_assert!(!ever_active, "active section was cleared");
            }
        }
    }

    /// The page is locked exactly while the drawer is open
    #[test]
    fn lock_held_iff_menu_open(events in prop::collection::vec(menu_event_strategy(), 0..60)) {
        let lock = ScrollLock::new();
        let mut menu = MenuMachine::new(lock.clone(), 20.0);
        for event in events {
            menu.handle(event);
            prop_assert_eq!(lock.is_locked(), menu.state() == MenuState::Open);
            prop_assert!(lock.holders() <= 1);
        }
        drop(menu);
        prop_assert!(!lock.is_locked());
    }

    /// Same invariant through the full controller with mixed input
    #[test]
    fn controller_snapshot_is_consistent(inputs in prop::collection::vec(input_strategy(), 0..80)) {
        let ids = section_ids();
        let lock = ScrollLock::new();
        let mut controller = ViewportController::new(
            FolioConfig::default(),
            ids.clone(),
            ViewportSize::new(600.0, 900.0),
            lock.clone(),
        )
        .unwrap();

        for input in inputs {
            match input {
                Input::Scroll(offset_y) => {
                    controller.handle(ViewportEvent::Scroll { offset_y });
                }
                Input::Geometry(frame) => {
                    let rects = frame
                        .into_iter()
                        .map(|(i, top, height)| SectionRect::new(ids[i].clone(), top, height))
                        .collect();
                    controller.handle(ViewportEvent::SectionGeometry(rects));
                }
                Input::Crossing(i) => {
                    controller.handle(ViewportEvent::Intersection(ids[i].clone()));
                }
                Input::Menu(event) => {
                    controller.handle(ViewportEvent::Menu(event));
                }
                Input::Pointer(x, y) => {
                    controller.handle(ViewportEvent::PointerMove(Point::new(x, y)));
                }
            }
            controller.tick(Duration::from_millis(16));

            let snap = controller.snapshot();
            prop_assert_eq!(snap.scroll_locked, snap.menu_open());
            prop_assert_eq!(lock.is_locked(), snap.menu_open());
            prop_assert!(snap.offset_y >= 0.0);
            prop_assert!((-1.0..=601.0).contains(&snap.cursor.ring.x));
        }
    }

    /// Every spring settles exactly on its target
    #[test]
    fn spring_converges(
        config in spring_strategy(),
        start in -2000.0..2000.0f64,
        target in -2000.0..2000.0f64,
        frame_ms in 4u64..50,
    ) {
        let mut spring = Spring::new(config, start);
        spring.set_target(target);
        let mut elapsed = Duration::ZERO;
        while spring.step(Duration::from_millis(frame_ms)) {
            elapsed += Duration::from_millis(frame_ms);
            prop_assert!(elapsed < Duration::from_secs(10), "spring never settled");
        }
        prop_assert_eq!(spring.position(), target);
        prop_assert_eq!(spring.velocity(), 0.0);
    }

    /// Overdamped springs approach the target without overshooting it
    #[test]
    fn spring_does_not_overshoot(
        config in spring_strategy(),
        target in 1.0..2000.0f64,
    ) {
        let mut spring = Spring2::new(config, Point::new(0.0, 0.0));
        spring.set_target(Point::new(target, target));
        for _ in 0..600 {
            spring.step(Duration::from_millis(16));
            let p = spring.position();
            prop_assert!(p.x <= target + 1e-6);
            prop_assert!(p.y <= target + 1e-6);
        }
    }
}
