//! Pointer follower
//!
//! Drives the custom cursor (a lagging ring and a snappy dot) and the hero
//! background parallax from raw pointer samples. Without a usable viewport
//! the follower is inert: every input is ignored and nothing is drawn.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::PointerConfig;
use crate::types::{Offset, Point, ViewportSize};

use super::spring::Spring2;

/// Everything the cursor overlay needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CursorFrame {
    pub visible: bool,
    pub hovering: bool,
    pub ring: Point,
    pub dot: Point,
    pub ring_size: f64,
    pub dot_size: f64,
}

#[derive(Debug, Clone)]
struct Tracking {
    viewport: ViewportSize,
    raw: Option<Point>,
    visible: bool,
    hover_depth: u32,
    ring: Spring2,
    dot: Spring2,
    /// Normalised pointer position, (0.5, 0.5) is the centre
    parallax: Spring2,
}

#[derive(Debug, Clone)]
pub struct PointerFollower {
    config: PointerConfig,
    tracking: Option<Tracking>,
}

impl PointerFollower {
    /// Build a follower. `None` (or a disabled config) yields an inert one.
    pub fn new(config: PointerConfig, viewport: Option<ViewportSize>) -> Self {
        let mut follower = Self {
            config,
            tracking: None,
        };
        if let Some(viewport) = viewport {
            follower.resize(viewport);
        }
        follower
    }

    pub fn is_active(&self) -> bool {
        self.tracking.is_some()
    }

    /// Latest raw sample, if any was observed
    pub fn raw(&self) -> Option<Point> {
        self.tracking.as_ref().and_then(|t| t.raw)
    }

    /// Attach to a viewport or follow a size change
    pub fn resize(&mut self, viewport: ViewportSize) {
        if !self.config.enabled {
            return;
        }
        match self.tracking.as_mut() {
            Some(tracking) => {
                tracking.viewport = viewport;
                if let Some(raw) = tracking.raw {
                    let clamped = viewport.clamp(raw);
                    tracking.raw = Some(clamped);
                    tracking.ring.set_target(clamped);
                    tracking.dot.set_target(clamped);
                    tracking.parallax.set_target(normalise(clamped, viewport));
                }
            }
            None => {
                let centre = viewport.center();
                self.tracking = Some(Tracking {
                    viewport,
                    raw: None,
                    visible: false,
                    hover_depth: 0,
                    ring: Spring2::new(self.config.ring, centre),
                    dot: Spring2::new(self.config.dot, centre),
                    parallax: Spring2::new(self.config.parallax, Point::new(0.5, 0.5)),
                });
            }
        }
    }

    pub fn pointer_move(&mut self, position: Point) {
        let Some(t) = self.tracking.as_mut() else {
            return;
        };
        let clamped = t.viewport.clamp(position);
        if t.raw.is_none() {
            // First sample: start the indicator under the pointer
            t.ring.snap_to(clamped);
            t.dot.snap_to(clamped);
        }
        t.raw = Some(clamped);
        t.visible = true;
        t.ring.set_target(clamped);
        t.dot.set_target(clamped);
        t.parallax.set_target(normalise(clamped, t.viewport));
    }

    /// Pointer re-entered the document
    pub fn pointer_enter(&mut self) {
        if let Some(t) = self.tracking.as_mut() {
            t.visible = t.raw.is_some();
        }
    }

    /// Pointer left the document
    pub fn pointer_leave(&mut self) {
        if let Some(t) = self.tracking.as_mut() {
            t.visible = false;
            t.hover_depth = 0;
        }
    }

    /// Pointer entered an interactive element
    pub fn hover_enter(&mut self) {
        if let Some(t) = self.tracking.as_mut() {
            t.hover_depth = t.hover_depth.saturating_add(1);
        }
    }

    /// Pointer left an interactive element
    pub fn hover_leave(&mut self) {
        if let Some(t) = self.tracking.as_mut() {
            t.hover_depth = t.hover_depth.saturating_sub(1);
        }
    }

    /// Drop `n` hovers whose elements went away without a leave
    pub fn hover_release(&mut self, n: u32) {
        if let Some(t) = self.tracking.as_mut() {
            t.hover_depth = t.hover_depth.saturating_sub(n);
        }
    }

    pub fn is_hovering(&self) -> bool {
        self.tracking.as_ref().is_some_and(|t| t.hover_depth > 0)
    }

    /// Advance the springs. Returns true while anything is still moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(t) = self.tracking.as_mut() else {
            return false;
        };
        let ring = t.ring.step(dt);
        let dot = t.dot.step(dt);
        let parallax = t.parallax.step(dt);
        ring || dot || parallax
    }

    pub fn is_settled(&self) -> bool {
        self.tracking
            .as_ref()
            .map_or(true, |t| t.ring.is_at_rest() && t.dot.is_at_rest() && t.parallax.is_at_rest())
    }

    pub fn frame(&self) -> CursorFrame {
        let Some(t) = self.tracking.as_ref() else {
            return CursorFrame::default();
        };
        let hovering = t.hover_depth > 0;
        CursorFrame {
            visible: t.visible,
            hovering,
            ring: t.ring.position(),
            dot: t.dot.position(),
            ring_size: if hovering {
                self.config.ring_hover_size_px
            } else {
                self.config.ring_size_px
            },
            dot_size: if hovering {
                self.config.dot_hover_size_px
            } else {
                self.config.dot_size_px
            },
        }
    }

    /// Offsets of the two background layers; the second moves opposite
    pub fn parallax(&self) -> [Offset; 2] {
        let Some(t) = self.tracking.as_ref() else {
            return [Offset::default(); 2];
        };
        let n = t.parallax.position();
        let amplitude = self.config.parallax_amplitude;
        let primary = Offset {
            dx: (2.0 * n.x - 1.0) * amplitude,
            dy: (2.0 * n.y - 1.0) * amplitude,
        };
        let mirrored = Offset {
            dx: -primary.dx,
            dy: -primary.dy,
        };
        [primary, mirrored]
    }
}

fn normalise(point: Point, viewport: ViewportSize) -> Point {
    Point::new(point.x / viewport.width, point.y / viewport.height)
}
