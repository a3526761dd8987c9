//! Navigation drawer state machine
//!
//! ```text
//!            toggle
//!   Closed ─────────► Open ──┐
//!     ▲                      │ toggle | navigate | outside click
//!     └──────────────────────┘ escape | scroll down (narrow) | widen | drop
//! ```
//!
//! The scroll lock guard lives inside the `Open` state, so the page is
//! unlocked on every exit path including teardown.

use serde::{Deserialize, Serialize};

use crate::types::SectionId;

use super::scroll_lock::{ScrollLock, ScrollLockGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// User intents and environment signals the drawer reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEvent {
    /// Menu button pressed
    Toggle,
    /// A navigation entry was chosen
    Navigate(SectionId),
    /// Logo pressed
    NavigateHome,
    /// Click on the backdrop or anywhere outside the drawer
    OutsideClick,
    /// Escape key
    Escape,
    /// Page scrolled by `delta` pixels (positive is down)
    Scrolled { delta: f64, narrow: bool },
    /// Viewport grew past the narrow breakpoint; the drawer has no toggle there
    Widened,
}

/// Side effects requested by a transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuEffect {
    ScrollToSection(SectionId),
    ScrollToTop,
}

#[derive(Debug)]
pub struct MenuMachine {
    lock: ScrollLock,
    open: Option<ScrollLockGuard>,
    close_scroll_distance: f64,
    scrolled_since_open: f64,
}

impl MenuMachine {
    pub fn new(lock: ScrollLock, close_scroll_distance: f64) -> Self {
        Self {
            lock,
            open: None,
            close_scroll_distance,
            scrolled_since_open: 0.0,
        }
    }

    pub fn state(&self) -> MenuState {
        if self.open.is_some() {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn lock(&self) -> &ScrollLock {
        &self.lock
    }

    pub fn handle(&mut self, event: MenuEvent) -> Option<MenuEffect> {
        match event {
            MenuEvent::Toggle => {
                if self.is_open() {
                    self.close("toggle");
                } else {
                    self.scrolled_since_open = 0.0;
                    self.open = Some(self.lock.acquire());
                    tracing::debug!("Menu opened");
                }
                None
            }
            MenuEvent::Navigate(section) => {
                self.close("navigate");
                Some(MenuEffect::ScrollToSection(section))
            }
            MenuEvent::NavigateHome => {
                self.close("navigate");
                Some(MenuEffect::ScrollToTop)
            }
            MenuEvent::OutsideClick => {
                self.close("outside click");
                None
            }
            MenuEvent::Escape => {
                self.close("escape");
                None
            }
            MenuEvent::Widened => {
                self.close("widened");
                None
            }
            MenuEvent::Scrolled { delta, narrow } => {
                if self.is_open() && narrow && delta > 0.0 {
                    self.scrolled_since_open += delta;
                    if self.scrolled_since_open > self.close_scroll_distance {
                        self.close("scroll");
                    }
                }
                None
            }
        }
    }

    fn close(&mut self, reason: &str) {
        if self.open.take().is_some() {
            tracing::debug!(reason, "Menu closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> MenuMachine {
        MenuMachine::new(ScrollLock::new(), 20.0)
    }

    fn about() -> SectionId {
        SectionId::parse("about").unwrap()
    }

    #[test]
    fn starts_closed_and_unlocked() {
        let m = machine();
        assert_eq!(m.state(), MenuState::Closed);
        assert!(!m.lock().is_locked());
    }

    #[test]
    fn toggle_flips_and_locks() {
        let mut m = machine();
        m.handle(MenuEvent::Toggle);
        assert_eq!(m.state(), MenuState::Open);
        assert!(m.lock().is_locked());
        m.handle(MenuEvent::Toggle);
        assert_eq!(m.state(), MenuState::Closed);
        assert!(!m.lock().is_locked());
    }

    #[test]
    fn navigate_closes_and_scrolls() {
        let mut m = machine();
        m.handle(MenuEvent::Toggle);
        let effect = m.handle(MenuEvent::Navigate(about()));
        assert_eq!(effect, Some(MenuEffect::ScrollToSection(about())));
        assert!(!m.is_open());
        assert!(!m.lock().is_locked());
    }

    #[test]
    fn navigate_while_closed_still_scrolls() {
        let mut m = machine();
        let effect = m.handle(MenuEvent::Navigate(about()));
        assert_eq!(effect, Some(MenuEffect::ScrollToSection(about())));
        assert!(!m.lock().is_locked());
    }

    #[test]
    fn escape_and_outside_click_close() {
        let mut m = machine();
        m.handle(MenuEvent::Toggle);
        m.handle(MenuEvent::Escape);
        assert!(!m.is_open());

        m.handle(MenuEvent::Toggle);
        m.handle(MenuEvent::OutsideClick);
        assert!(!m.is_open());
        assert!(!m.lock().is_locked());
    }

    #[test]
    fn escape_while_closed_is_harmless() {
        let mut m = machine();
        m.handle(MenuEvent::Escape);
        m.handle(MenuEvent::OutsideClick);
        assert_eq!(m.state(), MenuState::Closed);
        assert_eq!(m.lock().holders(), 0);
    }

    #[test]
    fn downward_scroll_closes_only_on_narrow() {
        let mut m = machine();
        m.handle(MenuEvent::Toggle);
        m.handle(MenuEvent::Scrolled { delta: 200.0, narrow: false });
        assert!(m.is_open());

        m.handle(MenuEvent::Scrolled { delta: 15.0, narrow: true });
        assert!(m.is_open());
        m.handle(MenuEvent::Scrolled { delta: -40.0, narrow: true });
        assert!(m.is_open());
        m.handle(MenuEvent::Scrolled { delta: 10.0, narrow: true });
        assert!(!m.is_open());
        assert!(!m.lock().is_locked());
    }

    #[test]
    fn reopening_resets_scroll_distance() {
        let mut m = machine();
        m.handle(MenuEvent::Toggle);
        m.handle(MenuEvent::Scrolled { delta: 15.0, narrow: true });
        m.handle(MenuEvent::Toggle);
        m.handle(MenuEvent::Toggle);
        m.handle(MenuEvent::Scrolled { delta: 15.0, narrow: true });
        assert!(m.is_open());
    }

    #[test]
    fn drop_releases_lock() {
        let lock = ScrollLock::new();
        {
            let mut m = MenuMachine::new(lock.clone(), 20.0);
            m.handle(MenuEvent::Toggle);
            assert!(lock.is_locked());
        }
        assert!(!lock.is_locked());
    }
}
