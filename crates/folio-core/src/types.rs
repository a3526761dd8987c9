//! Core types for Folio

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// Identifier of a navigable page section
///
/// Stored without the leading `#`. The set of sections and their order
/// come from the content feed and never change after load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectionId(String);

impl SectionId {
    /// Parse a section id from `"about"` or `"#about"`
    pub fn parse(raw: &str) -> FolioResult<Self> {
        let id = raw.trim().trim_start_matches('#');
        if id.is_empty() || id.chars().any(char::is_whitespace) {
            return Err(FolioError::InvalidSection(raw.to_string()));
        }
        Ok(Self(id.to_string()))
    }

    /// The bare id, e.g. `about`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The fragment anchor, e.g. `#about`
    pub fn anchor(&self) -> String {
        format!("#{}", self.0)
    }
}

impl FromStr for SectionId {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SectionId {
    type Error = FolioError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SectionId> for String {
    fn from(id: SectionId) -> Self {
        id.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Visible area of the page in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    /// Returns `None` unless both dimensions are positive and finite
    pub fn new(width: f64, height: f64) -> Option<Self> {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        (usable(width) && usable(height)).then_some(Self { width, height })
    }

    /// Narrow viewports get the drawer menu instead of inline links
    pub fn is_narrow(&self, breakpoint: f64) -> bool {
        self.width < breakpoint
    }

    /// Clamp a point into `[0, width] x [0, height]`
    pub fn clamp(&self, point: Point) -> Point {
        Point {
            x: point.x.clamp(0.0, self.width),
            y: point.y.clamp(0.0, self.height),
        }
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.width / 2.0,
            y: self.height / 2.0,
        }
    }
}

/// A position in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A translation expressed as a fraction of the viewport size
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    /// Render as a CSS `translate(x%, y%)` value
    pub fn to_css_translate(&self) -> String {
        format!(
            "translate({:.3}%, {:.3}%)",
            self.dx * 100.0,
            self.dy * 100.0
        )
    }
}

/// Direction of the most recent non-zero scroll movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScrollDirection {
    Up,
    #[default]
    Down,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_id_strips_hash() {
        let a = SectionId::parse("#about").unwrap();
        let b = SectionId::parse("about").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "about");
        assert_eq!(a.anchor(), "#about");
    }

    #[test]
    fn section_id_rejects_empty() {
        assert!(matches!(
            SectionId::parse("#"),
            Err(FolioError::InvalidSection(_))
        ));
        assert!(SectionId::parse("   ").is_err());
        assert!(SectionId::parse("two words").is_err());
    }

    #[test]
    fn section_id_serde_uses_plain_string() {
        let id: SectionId = serde_json::from_str("\"#tech\"").unwrap();
        assert_eq!(id.as_str(), "tech");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"tech\"");
        assert!(serde_json::from_str::<SectionId>("\"\"").is_err());
    }

    #[test]
    fn viewport_requires_positive_dimensions() {
        assert!(ViewportSize::new(0.0, 800.0).is_none());
        assert!(ViewportSize::new(1024.0, f64::NAN).is_none());
        let vp = ViewportSize::new(1024.0, 768.0).unwrap();
        assert!(!vp.is_narrow(768.0));
        assert!(ViewportSize::new(480.0, 800.0).unwrap().is_narrow(768.0));
    }

    #[test]
    fn viewport_clamps_points() {
        let vp = ViewportSize::new(100.0, 50.0).unwrap();
        assert_eq!(vp.clamp(Point::new(-5.0, 70.0)), Point::new(0.0, 50.0));
        assert_eq!(vp.center(), Point::new(50.0, 25.0));
    }

    #[test]
    fn offset_renders_percent() {
        let offset = Offset { dx: 0.1, dy: -0.05 };
        assert_eq!(offset.to_css_translate(), "translate(10.000%, -5.000%)");
    }
}
