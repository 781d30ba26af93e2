//! Hit-testing: which displayed cell is under a canvas position.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::SQRT_3;
use crate::hex::{HexCoord, Point};

/// The cell under `screen_pt`, if it is part of the displayed grid.
///
/// `origin` is the pixel center of the origin cell and `size` the current
/// cell size. Positions outside the outermost ring yield `None`.
#[must_use]
pub fn hex_at(screen_pt: Point, origin: Point, size: f64, display_radius: u32) -> Option<HexCoord> {
    if size.is_nan() || size <= 0.0 {
        return None;
    }
    let px = screen_pt.x - origin.x;
    let py = screen_pt.y - origin.y;

    let fr = py / (1.5 * size);
    let fq = px / (SQRT_3 * size) - fr / 2.0;

    // Anything past one ring beyond the edge is off the grid; this also keeps
    // rounding away from the i32 limits.
    let reach = f64::from(display_radius) + 1.0;
    let fs = -fq - fr;
    if !(fq.is_finite() && fr.is_finite()) || fq.abs().max(fr.abs()).max(fs.abs()) > reach {
        return None;
    }
    let cell = HexCoord::round(fq, fr);

    (cell.ring() <= display_radius).then_some(cell)
}
