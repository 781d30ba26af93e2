//! Viewport dimensions and fitting the grid into them.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::consts::{
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, EDGE_MARGIN_CELLS, FIT_HALF_EXTENT, MIN_CELL_SIZE, SQRT_3,
};
use crate::hex::Point;

/// Drawing area reported by the host.
///
/// `width` / `height` are in CSS pixels. `dpr` is the device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: DEFAULT_VIEWPORT_WIDTH, height: DEFAULT_VIEWPORT_HEIGHT, dpr: 1.0 }
    }
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64, dpr: f64) -> Self {
        Self { width, height, dpr }
    }

    /// Pixel position of the origin cell's center.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }

    /// Cell size that fits a grid of `radius` into this viewport.
    #[must_use]
    pub fn cell_size(&self, radius: u32) -> f64 {
        fit_size(self.width, self.height, radius)
    }
}

/// Largest cell size such that a centered grid of `radius` fits inside 92% of
/// both viewport dimensions, floored at [`MIN_CELL_SIZE`].
///
/// The `+0.5` term covers the half cell that overhangs the outermost ring.
#[must_use]
pub fn fit_size(width: f64, height: f64, radius: u32) -> f64 {
    let extent = f64::from(radius) + EDGE_MARGIN_CELLS;
    let by_width = (width * FIT_HALF_EXTENT) / (SQRT_3 * extent);
    let by_height = (height * FIT_HALF_EXTENT) / (1.5 * extent);
    by_width.min(by_height).max(MIN_CELL_SIZE)
}
