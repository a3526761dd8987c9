//! Folio UI Components
//!
//! Presentation primitives shared by the portfolio shell. Nothing here
//! holds state beyond what a single element needs; the shell owns the
//! viewport controller and passes plain values down.
//!
//! ## Palette
//!
//! - **Violet (#8b5cf6)**: primary accent, active navigation, focus rings
//! - **Cyan (#22d3ee)**: secondary accent, links, the cursor dot
//! - **Ink (#0b0b12)**: background
//!
//! Interactive primitives accept an `onhover` handler so the custom cursor
//! can grow while the pointer is over them.

pub mod components;

pub use components::*;
