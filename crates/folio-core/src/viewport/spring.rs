//! Damped spring integrator
//!
//! A mass on a spring with viscous damping, pulled toward a target that
//! may move at any time. Stepped with semi-implicit Euler in small fixed
//! sub-steps so stiff springs stay stable at any frame rate.

use std::time::Duration;

use crate::config::SpringConfig;
use crate::types::Point;

/// Longest single integration step, in seconds
pub(crate) const MAX_SUBSTEP: f64 = 1.0 / 240.0;

/// Frame deltas beyond this are treated as a stall and clamped
const MAX_FRAME: f64 = 0.25;

/// One-dimensional spring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
    at_rest: bool,
}

impl Spring {
    /// Creates a spring resting at `position`
    pub fn new(config: SpringConfig, position: f64) -> Self {
        Self {
            config,
            position,
            velocity: 0.0,
            target: position,
            at_rest: true,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Move the target; the spring eases toward it on subsequent steps
    pub fn set_target(&mut self, target: f64) {
        if target != self.target {
            self.target = target;
            self.at_rest = false;
        }
    }

    /// Jump straight to `position` with no residual motion
    pub fn snap_to(&mut self, position: f64) {
        self.position = position;
        self.target = position;
        self.velocity = 0.0;
        self.at_rest = true;
    }

    /// Advance by `dt`. Returns true while still moving.
    pub fn step(&mut self, dt: Duration) -> bool {
        if self.at_rest {
            return false;
        }

        let mut remaining = dt.as_secs_f64().min(MAX_FRAME);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            let SpringConfig {
                stiffness,
                damping,
                mass,
                ..
            } = self.config;
            let force = -stiffness * (self.position - self.target) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if !(self.position.is_finite() && self.velocity.is_finite()) {
            tracing::warn!(target = self.target, "Spring diverged, snapping to target");
            self.snap_to(self.target);
            return false;
        }

        if (self.target - self.position).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
        {
            self.snap_to(self.target);
        }
        !self.at_rest
    }
}

/// Two independent springs driving a point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring2 {
    x: Spring,
    y: Spring,
}

impl Spring2 {
    pub fn new(config: SpringConfig, position: Point) -> Self {
        Self {
            x: Spring::new(config, position.x),
            y: Spring::new(config, position.y),
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x.position(), self.y.position())
    }

    pub fn target(&self) -> Point {
        Point::new(self.x.target(), self.y.target())
    }

    pub fn set_target(&mut self, target: Point) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn snap_to(&mut self, position: Point) {
        self.x.snap_to(position.x);
        self.y.snap_to(position.y);
    }

    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }

    /// Advance both axes. Returns true while either is moving.
    pub fn step(&mut self, dt: Duration) -> bool {
        let moving_x = self.x.step(dt);
        let moving_y = self.y.step(dt);
        moving_x || moving_y
    }
}
