//! Folio Core Library
//!
//! Headless behaviour for a single-page portfolio shell.
//!
//! ## Overview
//!
//! The renderer forwards raw input (scroll offsets, section geometry,
//! pointer motion, menu intents) to a [`ViewportController`] and draws
//! whatever [`UiSnapshot`] it gets back. Nothing in this crate touches a
//! window or a DOM, so every behaviour is testable with plain values and a
//! paused tokio clock.
//!
//! - **viewport**: scroll state, active section, cursor follower, drawer
//! - **content**: the page copy, compiled in or loaded from JSON
//! - **typewriter**: rotating hero subtitle
//! - **clipboard** / **contact**: the two asynchronous user actions
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{ContentFeed, FolioConfig, ScrollLock, ViewportController, ViewportEvent};
//!
//! let feed = ContentFeed::builtin()?;
//! let mut controller = ViewportController::new(
//!     FolioConfig::default(),
//!     feed.section_ids(),
//!     None,
//!     ScrollLock::new(),
//! )?;
//!
//! controller.handle(ViewportEvent::Scroll { offset_y: 120.0 });
//! assert!(controller.snapshot().is_scrolled);
//! ```

pub mod clipboard;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod types;
pub mod typewriter;
pub mod viewport;

// Re-exports
pub use clipboard::{ClipboardBackend, ClipboardCopier, CopyMethod, CopyOutcome, SelectionBuffer};
pub use config::{
    ContactConfig, FolioConfig, HeroConfig, MenuConfig, PointerConfig, ScrollConfig,
    SectionConfig, SpringConfig,
};
pub use contact::{
    Ack, ContactForm, ContactMessage, ContactSubmitter, SimulatedSubmitter, SubmitOutcome,
    SubmitStatus, WithTimeout,
};
pub use content::{
    About, ContentFeed, Experience, Fact, Hero, NavEntry, PersonalInfo, Project, SocialLink, Stat,
    TechItem, ValueCard,
};
pub use error::{FolioError, FolioResult};
pub use typewriter::{Typewriter, TypewriterPhase};
pub use viewport::{
    CursorFrame, MenuEffect, MenuEvent, MenuMachine, MenuState, PointerFollower, ScrollLock,
    ScrollLockGuard, ScrollState, ScrollTracker, SectionRect, SectionTracker, Spring, Spring2,
    UiSnapshot, ViewportController, ViewportEffect, ViewportEvent,
};
pub use types::*;
