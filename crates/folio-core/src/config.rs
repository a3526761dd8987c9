//! Configuration loading and defaults
//!
//! Every tunable of the viewport controller, the contact flow and the hero
//! typewriter lives here. Values are read from a TOML file; any missing
//! field falls back to its default.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};
use crate::viewport::spring::MAX_SUBSTEP;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub scroll: ScrollConfig,
    pub sections: SectionConfig,
    pub pointer: PointerConfig,
    pub menu: MenuConfig,
    pub contact: ContactConfig,
    pub hero: HeroConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Offset past which the header switches to its "scrolled" look
    pub threshold_px: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    /// Visibility ratio a section must reach to become active
    pub visibility_threshold: f64,
    /// Pixels trimmed from the top of the observation box (fixed header)
    pub root_margin_top_px: f64,
    /// Fraction of the viewport trimmed from the bottom of the observation box
    pub root_margin_bottom_fraction: f64,
    /// Vertical anchor, as a fraction from the top, used to break ties
    pub anchor_fraction: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from target below which the spring may come to rest
    pub rest_delta: f64,
    /// Speed below which the spring may come to rest
    pub rest_speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    /// Disable the follower entirely (touch-only devices)
    pub enabled: bool,
    /// Lagging outer ring
    pub ring: SpringConfig,
    /// Snappy inner dot
    pub dot: SpringConfig,
    /// Background parallax layers
    pub parallax: SpringConfig,
    /// Maximum parallax translation as a fraction of the viewport
    pub parallax_amplitude: f64,
    pub ring_size_px: f64,
    pub ring_hover_size_px: f64,
    pub dot_size_px: f64,
    pub dot_hover_size_px: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Viewports narrower than this use the drawer
    pub narrow_breakpoint_px: f64,
    /// Downward scroll distance that closes an open drawer on narrow viewports
    pub close_scroll_distance_px: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub simulated_delay_ms: u64,
    pub sent_hold_ms: u64,
    pub copy_feedback_ms: u64,
    pub submit_timeout_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub type_interval_ms: u64,
    pub delete_interval_ms: u64,
    pub hold_ms: u64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { threshold_px: 20.0 }
    }
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: 0.3,
            root_margin_top_px: 80.0,
            root_margin_bottom_fraction: 0.6,
            anchor_fraction: 0.4,
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }
}

impl SpringConfig {
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            ..Default::default()
        }
    }

    fn validate(&self, name: &str) -> FolioResult<()> {
        let fields = [
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("mass", self.mass),
            ("rest_delta", self.rest_delta),
            ("rest_speed", self.rest_speed),
        ];
        for (field, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(FolioError::InvalidConfig(format!(
                    "pointer.{name}.{field} must be positive, got {value}"
                )));
            }
        }
        // Semi-implicit Euler only stays bounded while both rates are well
        // inside one sub-step
        let natural = (self.stiffness / self.mass).sqrt() * MAX_SUBSTEP;
        let decay = self.damping / self.mass * MAX_SUBSTEP;
        if natural >= 1.0 || decay >= 1.0 {
            return Err(FolioError::InvalidConfig(format!(
                "pointer.{name} is too stiff to animate (stiffness {}, damping {}, mass {})",
                self.stiffness, self.damping, self.mass
            )));
        }
        Ok(())
    }
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ring: SpringConfig::new(200.0, 25.0, 0.5),
            dot: SpringConfig::new(400.0, 35.0, 0.3),
            parallax: SpringConfig::new(80.0, 30.0, 1.0),
            parallax_amplitude: 0.10,
            ring_size_px: 32.0,
            ring_hover_size_px: 48.0,
            dot_size_px: 5.0,
            dot_hover_size_px: 6.0,
        }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint_px: 768.0,
            close_scroll_distance_px: 20.0,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: 1200,
            sent_hold_ms: 4000,
            copy_feedback_ms: 2000,
            submit_timeout_ms: 10_000,
        }
    }
}

impl ContactConfig {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }

    pub fn sent_hold(&self) -> Duration {
        Duration::from_millis(self.sent_hold_ms)
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_millis(self.submit_timeout_ms)
    }
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            type_interval_ms: 50,
            delete_interval_ms: 50,
            hold_ms: 2000,
        }
    }
}

impl FolioConfig {
    /// Load configuration from file or use defaults
    ///
    /// An explicit path must exist. Without one, the default location is
    /// tried and silently skipped when absent.
    pub fn load(path: Option<&Path>) -> FolioResult<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document
    pub fn from_toml(contents: &str) -> FolioResult<Self> {
        let config: FolioConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> FolioResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "Loading config");
        Self::from_toml(&contents)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
    }

    /// Reject values the controller cannot work with
    pub fn validate(&self) -> FolioResult<()> {
        let s = &self.sections;
        if !(s.visibility_threshold > 0.0 && s.visibility_threshold <= 1.0) {
            return Err(FolioError::InvalidConfig(format!(
                "sections.visibility_threshold must be in (0, 1], got {}",
                s.visibility_threshold
            )));
        }
        if !(0.0..1.0).contains(&s.root_margin_bottom_fraction) {
            return Err(FolioError::InvalidConfig(format!(
                "sections.root_margin_bottom_fraction must be in [0, 1), got {}",
                s.root_margin_bottom_fraction
            )));
        }
        if !(0.0..=1.0).contains(&s.anchor_fraction) {
            return Err(FolioError::InvalidConfig(format!(
                "sections.anchor_fraction must be in [0, 1], got {}",
                s.anchor_fraction
            )));
        }
        if s.root_margin_top_px < 0.0 || self.scroll.threshold_px < 0.0 {
            return Err(FolioError::InvalidConfig(
                "pixel thresholds must not be negative".to_string(),
            ));
        }

        let p = &self.pointer;
        p.ring.validate("ring")?;
        p.dot.validate("dot")?;
        p.parallax.validate("parallax")?;
        if !(0.0..=0.5).contains(&p.parallax_amplitude) {
            return Err(FolioError::InvalidConfig(format!(
                "pointer.parallax_amplitude must be in [0, 0.5], got {}",
                p.parallax_amplitude
            )));
        }

        if self.menu.narrow_breakpoint_px <= 0.0 || self.menu.close_scroll_distance_px < 0.0 {
            return Err(FolioError::InvalidConfig(
                "menu distances must be positive".to_string(),
            ));
        }

        if self.hero.type_interval_ms == 0 || self.hero.delete_interval_ms == 0 {
            return Err(FolioError::InvalidConfig(
                "hero intervals must be at least 1 ms".to_string(),
            ));
        }
        Ok(())
    }
}
