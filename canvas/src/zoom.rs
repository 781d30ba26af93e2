//! Zoom controller: owns the display radius and snaps it to pinned rings.
//!
//! The display radius is never set directly. Zoom-out proposes double the
//! current radius, zoom-in proposes half (floored), and every proposal goes
//! through [`quantize`]: clamp into `[4, 32]`, then snap to the nearest pinned
//! ring. Because the clamp floor is 4, the pinned ring 2 is never reached by
//! gestures.

#[cfg(test)]
#[path = "zoom_test.rs"]
mod zoom_test;

use crate::consts::{DEFAULT_DISPLAY_RADIUS, MAX_DISPLAY_RADIUS, MIN_DISPLAY_RADIUS, PINNED_RINGS};

/// Current display radius. Always a member of [`PINNED_RINGS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zoom {
    display_radius: u32,
}

impl Default for Zoom {
    fn default() -> Self {
        Self { display_radius: DEFAULT_DISPLAY_RADIUS }
    }
}

impl Zoom {
    #[must_use]
    pub fn display_radius(self) -> u32 {
        self.display_radius
    }

    /// Show more of the grid. Returns the new radius.
    pub fn zoom_out(&mut self) -> u32 {
        self.display_radius = quantize(i64::from(self.display_radius) * 2);
        self.display_radius
    }

    /// Show less of the grid. Returns the new radius.
    pub fn zoom_in(&mut self) -> u32 {
        self.display_radius = quantize(i64::from(self.display_radius / 2));
        self.display_radius
    }

    /// Back to the default radius.
    pub fn reset(&mut self) -> u32 {
        self.display_radius = DEFAULT_DISPLAY_RADIUS;
        self.display_radius
    }
}

/// Clamp `proposed` into the zoom bounds and snap it to the nearest pinned ring.
///
/// Ties go to the lower ring: rings are scanned ascending and only a strictly
/// closer ring replaces the current best.
#[must_use]
pub fn quantize(proposed: i64) -> u32 {
    let clamped = proposed.clamp(i64::from(MIN_DISPLAY_RADIUS), i64::from(MAX_DISPLAY_RADIUS));
    let mut best = PINNED_RINGS[0];
    let mut best_d = (clamped - i64::from(best)).abs();
    for &ring in &PINNED_RINGS {
        let d = (clamped - i64::from(ring)).abs();
        if d < best_d {
            best_d = d;
            best = ring;
        }
    }
    best
}
