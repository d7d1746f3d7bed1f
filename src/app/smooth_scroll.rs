// SPDX-License-Identifier: MPL-2.0
//! Eased scrolling of the page to a section.
//!
//! The page scrollable has no animated scrolling of its own, so the
//! application steps a [`SmoothScroll`] on every frame tick and snaps the
//! scrollable to the returned offset.

use crate::animation::Easing;
use std::time::Duration;

/// Time taken to reach the destination.
pub const SCROLL_DURATION: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    from: f32,
    to: f32,
    elapsed: f32,
}

impl SmoothScroll {
    #[must_use]
    pub fn new(from: f32, to: f32) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
        }
    }

    #[must_use]
    pub fn destination(&self) -> f32 {
        self.to
    }

    /// Moves forward by `dt`. Returns the offset to show and whether the
    /// destination has been reached.
    pub fn step(&mut self, dt: Duration) -> (f32, bool) {
        self.elapsed += dt.as_secs_f32();
        let t = (self.elapsed / SCROLL_DURATION.as_secs_f32()).min(1.0);
        if t >= 1.0 {
            return (self.to, true);
        }
        let eased = Easing::Power2InOut.apply(t);
        (self.from + (self.to - self.from) * eased, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lands_exactly_on_the_destination() {
        let mut scroll = SmoothScroll::new(0.0, 900.0);
        let (offset, done) = scroll.step(SCROLL_DURATION + Duration::from_millis(5));
        assert_eq!(offset, 900.0);
        assert!(done);
    }

    #[test]
    fn halfway_in_time_is_halfway_in_space() {
        let mut scroll = SmoothScroll::new(100.0, 300.0);
        let (offset, done) = scroll.step(SCROLL_DURATION / 2);
        assert!((offset - 200.0).abs() < 1e-3);
        assert!(!done);
    }

    #[test]
    fn starts_slowly() {
        let mut scroll = SmoothScroll::new(0.0, 1000.0);
        let (offset, _) = scroll.step(SCROLL_DURATION / 10);
        assert!(offset < 100.0);
        assert!(offset > 0.0);
    }

    #[test]
    fn scrolls_upwards_too() {
        let mut scroll = SmoothScroll::new(800.0, 200.0);
        let (offset, _) = scroll.step(SCROLL_DURATION / 4);
        assert!(offset < 800.0 && offset > 200.0);
        assert_eq!(scroll.destination(), 200.0);
    }
}
