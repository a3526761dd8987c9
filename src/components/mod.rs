//! Page components for the portfolio.
//!
//! One component per page region. Shared widgets live in `folio-ui`.

mod about;
mod contact;
mod cursor;
mod experience;
mod footer;
mod hero;
mod navbar;
mod page_section;
mod projects;
mod tech;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use cursor::CursorOverlay;
pub use experience::ExperienceSection;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use page_section::PageSection;
pub use projects::ProjectsSection;
pub use tech::TechSection;
