//! Viewport interaction controller
//!
//! Stateful, timing-sensitive behaviour of the page shell:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  ViewportController                                         │
//! │  ├── ScrollTracker    offset, direction, "scrolled" header   │
//! │  ├── SectionTracker   active navigation entry                │
//! │  ├── PointerFollower  cursor ring/dot springs, parallax      │
//! │  └── MenuMachine      drawer open/closed + ScrollLock guard  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is synchronous and runs to completion per event.

pub mod controller;
pub mod menu;
pub mod pointer;
pub mod scroll;
pub mod scroll_lock;
pub mod sections;
pub mod spring;

pub use controller::{UiSnapshot, ViewportController, ViewportEffect, ViewportEvent};
pub use menu::{MenuEffect, MenuEvent, MenuMachine, MenuState};
pub use pointer::{CursorFrame, PointerFollower};
pub use scroll::{ScrollState, ScrollTracker};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
pub use sections::{SectionRect, SectionTracker};
pub use spring::{Spring, Spring2};
