//! Scroll offset tracking
//!
//! Derives the header's "scrolled" flag and the scroll direction from raw
//! offsets. Only the latest offset matters for the flag, so replaying the
//! same offset is a no-op.

use serde::{Deserialize, Serialize};

use crate::types::ScrollDirection;

/// Snapshot of the page's vertical scroll position
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollState {
    /// Current offset from the top, never negative
    pub offset_y: f64,
    /// Direction of the last non-zero movement
    pub direction: ScrollDirection,
    /// Whether `offset_y` is past the configured threshold
    pub scrolled_past_threshold: bool,
}

/// Tracks scroll offsets as they arrive
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    threshold: f64,
    state: ScrollState,
}

impl ScrollTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            state: ScrollState::default(),
        }
    }

    /// Feed a new offset. Returns the signed delta from the previous offset;
    /// a non-finite sample is dropped and yields zero.
    pub fn on_scroll(&mut self, offset_y: f64) -> f64 {
        if !offset_y.is_finite() {
            return 0.0;
        }
        // Overscroll bounce can report negative offsets
        let offset_y = offset_y.max(0.0);
        let delta = offset_y - self.state.offset_y;

        if delta > 0.0 {
            self.state.direction = ScrollDirection::Down;
        } else if delta < 0.0 {
            self.state.direction = ScrollDirection::Up;
        }

        self.state.offset_y = offset_y;
        self.state.scrolled_past_threshold = offset_y > self.threshold;
        delta
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn is_scrolled(&self) -> bool {
        self.state.scrolled_past_threshold
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_top() {
        let tracker = ScrollTracker::new(20.0);
        assert_eq!(tracker.state().offset_y, 0.0);
        assert!(!tracker.is_scrolled());
    }

    #[test]
    fn threshold_is_strict() {
        let mut tracker = ScrollTracker::new(20.0);
        tracker.on_scroll(20.0);
        assert!(!tracker.is_scrolled());
        tracker.on_scroll(20.5);
        assert!(tracker.is_scrolled());
        tracker.on_scroll(3.0);
        assert!(!tracker.is_scrolled());
    }

    #[test]
    fn direction_follows_last_nonzero_delta() {
        let mut tracker = ScrollTracker::new(20.0);
        tracker.on_scroll(100.0);
        assert_eq!(tracker.state().direction, ScrollDirection::Down);
        tracker.on_scroll(40.0);
        assert_eq!(tracker.state().direction, ScrollDirection::Up);
        // Same offset again keeps the direction
        assert_eq!(tracker.on_scroll(40.0), 0.0);
        assert_eq!(tracker.state().direction, ScrollDirection::Up);
    }

    #[test]
    fn negative_offsets_clamp_to_zero() {
        let mut tracker = ScrollTracker::new(20.0);
        tracker.on_scroll(50.0);
        let delta = tracker.on_scroll(-12.0);
        assert_eq!(delta, -50.0);
        assert_eq!(tracker.state().offset_y, 0.0);
        assert!(!tracker.is_scrolled());
    }

    #[test]
    fn non_finite_offsets_are_dropped() {
        let mut tracker = ScrollTracker::new(20.0);
        tracker.on_scroll(500.0);
        assert_eq!(tracker.on_scroll(f64::NAN), 0.0);
        assert_eq!(tracker.on_scroll(f64::INFINITY), 0.0);
        let state = tracker.state();
        assert_eq!(state.offset_y, 500.0);
        assert_eq!(state.direction, ScrollDirection::Down);
        assert!(tracker.is_scrolled());
    }
}
