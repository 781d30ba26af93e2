//! Cube-coordinate geometry: validity, projection, corners, distance.
//!
//! Every cell is addressed by a cube triple `(q, r, s)` with `q + r + s = 0`.
//! [`HexCoord`] can only be built through a checked constructor (or from an
//! axial pair, where `s` is derived), so the distance metric never sees a
//! corrupted triple. Raw triples coming from the wire go through the same
//! check during deserialization.
//!
//! Layout is pointy-top: `x = size·√3·(q + r/2)`, `y = size·1.5·r`, with
//! corner `i` at `60·i − 30` degrees.

#[cfg(test)]
#[path = "hex_test.rs"]
mod hex_test;

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::SQRT_3;

/// Errors raised by the coordinate engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    /// The three components do not sum to zero.
    #[error("invalid cube coordinate ({q}, {r}, {s}): components must sum to zero")]
    InvalidCoordinate { q: i32, r: i32, s: i32 },
}

/// A point in canvas space (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A hex cell in cube coordinates.
///
/// Ordering is by `r`, then `q`. That is the grid's draw order, so ordered
/// maps keyed by `HexCoord` iterate in the same order cells are painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CubeTriple", into = "CubeTriple")]
pub struct HexCoord {
    q: i32,
    r: i32,
    s: i32,
}

/// Wire shape of a cube coordinate: `{ "q": .., "r": .., "s": .. }`.
#[derive(Serialize, Deserialize)]
struct CubeTriple {
    q: i32,
    r: i32,
    s: i32,
}

impl TryFrom<CubeTriple> for HexCoord {
    type Error = HexError;

    fn try_from(raw: CubeTriple) -> Result<Self, Self::Error> {
        Self::new(raw.q, raw.r, raw.s)
    }
}

impl From<HexCoord> for CubeTriple {
    fn from(c: HexCoord) -> Self {
        Self { q: c.q, r: c.r, s: c.s }
    }
}

impl HexCoord {
    /// The origin cell `(0, 0, 0)`.
    pub const ORIGIN: Self = Self { q: 0, r: 0, s: 0 };

    /// Build a cell from a full cube triple.
    ///
    /// # Errors
    ///
    /// Returns [`HexError::InvalidCoordinate`] if `q + r + s != 0`.
    pub fn new(q: i32, r: i32, s: i32) -> Result<Self, HexError> {
        if i64::from(q) + i64::from(r) + i64::from(s) != 0 {
            return Err(HexError::InvalidCoordinate { q, r, s });
        }
        Ok(Self { q, r, s })
    }

    /// Build a cell from an axial pair; `s` is derived.
    #[must_use]
    pub const fn from_axial(q: i32, r: i32) -> Self {
        Self { q, r, s: -q - r }
    }

    #[must_use]
    pub const fn q(self) -> i32 {
        self.q
    }

    #[must_use]
    pub const fn r(self) -> i32 {
        self.r
    }

    #[must_use]
    pub const fn s(self) -> i32 {
        self.s
    }

    /// Concentric ring index: `max(|q|, |r|, |s|)`.
    #[must_use]
    pub fn ring(self) -> u32 {
        distance(self, Self::ORIGIN)
    }

    #[must_use]
    pub fn is_origin(self) -> bool {
        self == Self::ORIGIN
    }

    /// Pixel center of this cell relative to the grid origin.
    #[must_use]
    pub fn to_pixel(self, size: f64) -> Point {
        let q = f64::from(self.q);
        let r = f64::from(self.r);
        Point { x: size * SQRT_3 * (q + r / 2.0), y: size * 1.5 * r }
    }

    /// Round a fractional axial position to the nearest cell.
    ///
    /// The component with the largest rounding error is recomputed from the
    /// other two so the result always satisfies the cube invariant.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::similar_names)]
    pub fn round(fq: f64, fr: f64) -> Self {
        let fs = -fq - fr;
        let mut q = fq.round();
        let mut r = fr.round();
        let s = fs.round();

        let dq = (q - fq).abs();
        let dr = (r - fr).abs();
        let ds = (s - fs).abs();

        if dq > dr && dq > ds {
            q = -r - s;
        } else if dr > ds {
            r = -q - s;
        }
        Self::from_axial(q as i32, r as i32)
    }
}

impl Ord for HexCoord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.r.cmp(&other.r).then(self.q.cmp(&other.q))
    }
}

impl PartialOrd for HexCoord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.q, self.r, self.s)
    }
}

/// Project a raw cube triple to pixel space.
///
/// # Errors
///
/// Returns [`HexError::InvalidCoordinate`] if the triple violates the cube invariant.
pub fn project(q: i32, r: i32, s: i32, size: f64) -> Result<Point, HexError> {
    Ok(HexCoord::new(q, r, s)?.to_pixel(size))
}

/// The six corners of a hex centered at `(cx, cy)`, in drawing order.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn corners(cx: f64, cy: f64, size: f64) -> [Point; 6] {
    std::array::from_fn(|i| {
        let angle = (60.0 * i as f64 - 30.0).to_radians();
        Point { x: cx + size * angle.cos(), y: cy + size * angle.sin() }
    })
}

/// Cube distance: `max(|Δq|, |Δr|, |Δs|)`.
#[must_use]
pub fn distance(a: HexCoord, b: HexCoord) -> u32 {
    let dq = (i64::from(a.q) - i64::from(b.q)).unsigned_abs();
    let dr = (i64::from(a.r) - i64::from(b.r)).unsigned_abs();
    let ds = (i64::from(a.s) - i64::from(b.s)).unsigned_abs();
    u32::try_from(dq.max(dr).max(ds)).unwrap_or(u32::MAX)
}

/// Cube distance between two raw triples.
///
/// # Errors
///
/// Returns [`HexError::InvalidCoordinate`] for the first triple that violates the cube invariant.
pub fn cube_distance(a: (i32, i32, i32), b: (i32, i32, i32)) -> Result<u32, HexError> {
    let a = HexCoord::new(a.0, a.1, a.2)?;
    let b = HexCoord::new(b.0, b.1, b.2)?;
    Ok(distance(a, b))
}
