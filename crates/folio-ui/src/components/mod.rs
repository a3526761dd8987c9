//! Reusable UI components
//!
//! Styling comes from class names; the shell ships the stylesheet.

mod button;
mod icons;
mod input;
mod section_header;
mod tag;

pub use button::*;
pub use icons::*;
pub use input::*;
pub use section_header::*;
pub use tag::*;
