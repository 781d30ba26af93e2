//! Grid enumeration: every cell within a radius of the origin.
//!
//! The output order (r ascending, then q ascending) is the paint order, so
//! later cells are drawn over earlier ones where their visuals overlap.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::hex::HexCoord;

/// All cells with ring ≤ `radius`, ordered by `r` then `q`.
#[must_use]
pub fn enumerate(radius: u32) -> Vec<HexCoord> {
    let r_max = i32::try_from(radius).unwrap_or(i32::MAX / 2);
    let mut cells = Vec::with_capacity(cell_count(radius));
    for r in -r_max..=r_max {
        for q in -r_max..=r_max {
            let cell = HexCoord::from_axial(q, r);
            if cell.ring() <= radius {
                cells.push(cell);
            }
        }
    }
    cells
}

/// Number of cells in a hexagonal grid of the given radius: `3R² + 3R + 1`.
#[must_use]
pub fn cell_count(radius: u32) -> usize {
    let r = radius as usize;
    3 * r * r + 3 * r + 1
}
