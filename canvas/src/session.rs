//! Session state: selection, committed shapes, and the shape-building state machine.
//!
//! DESIGN
//! ======
//! `Session` is a plain value. Every transition is a method on it, and the
//! renderer reads it through shared references only, so any sequence of
//! clicks can be replayed and inspected without a drawing surface.
//!
//! Clicks are interpreted by [`Mode`]:
//! - Normal: the clicked cell becomes the only selection with a fresh color.
//!   Re-clicking the sole selected cell keeps its color.
//! - Circle: the cell joins the selection; with a usable radius a circle is
//!   committed at the cell.
//! - Triangle: the cell joins the selection and the pending vertex buffer;
//!   the third vertex commits a triangle and empties the buffer.
//!
//! Selections only grow in shape mode. Everything is dropped by [`Session::clear`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::BTreeMap;

use log::debug;
use rand::Rng;
use serde::Serialize;

use crate::color::HslColor;
use crate::hex::{HexCoord, distance};
use crate::input::{Mode, ShapeKind, parse_radius};

/// A committed circle: every cell within `radius` of `center`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Circle {
    pub center: HexCoord,
    pub radius: u32,
}

impl Circle {
    /// Whether `cell` lies inside this circle (cube distance ≤ radius).
    #[must_use]
    pub fn contains(&self, cell: HexCoord) -> bool {
        distance(self.center, cell) <= self.radius
    }
}

/// A committed triangle, vertices in click order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Triangle {
    pub vertices: [HexCoord; 3],
}

/// A shape committed by a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle(Circle),
    Triangle(Triangle),
}

/// Selected cells and their highlight colors, iterated in draw order.
pub type Selection = BTreeMap<HexCoord, HslColor>;

/// All interaction state for one page session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    selection: Selection,
    circles: Vec<Circle>,
    triangles: Vec<Triangle>,
    pending: Vec<HexCoord>,
    shape_enabled: bool,
    shape_kind: ShapeKind,
    radius_text: String,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Queries ---

    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.shape_enabled {
            Mode::ShapeBuilding(self.shape_kind)
        } else {
            Mode::Normal
        }
    }

    #[must_use]
    pub fn shape_enabled(&self) -> bool {
        self.shape_enabled
    }

    #[must_use]
    pub fn shape_kind(&self) -> ShapeKind {
        self.shape_kind
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Triangle vertices clicked so far (0–2 entries).
    #[must_use]
    pub fn pending(&self) -> &[HexCoord] {
        &self.pending
    }

    #[must_use]
    pub fn radius_text(&self) -> &str {
        &self.radius_text
    }

    /// The radius a circle click would commit with, if any.
    ///
    /// Only meaningful in circle shape mode; an unusable field value yields
    /// `None` and the click degrades to a plain highlight.
    #[must_use]
    pub fn circle_radius(&self) -> Option<u32> {
        if self.mode() != Mode::ShapeBuilding(ShapeKind::Circle) {
            return None;
        }
        match parse_radius(&self.radius_text) {
            Ok(radius) => Some(radius),
            Err(e) => {
                debug!("circle radius unusable: {e}");
                None
            }
        }
    }

    // --- Transitions ---

    /// Handle a click on `cell`. Returns the shape it committed, if any.
    pub fn click<R: Rng + ?Sized>(&mut self, cell: HexCoord, rng: &mut R) -> Option<Shape> {
        match self.mode() {
            Mode::Normal => {
                let sole = self.selection.len() == 1 && self.selection.contains_key(&cell);
                if !sole {
                    self.selection.clear();
                    self.selection.insert(cell, HslColor::random(rng));
                }
                None
            }
            Mode::ShapeBuilding(kind) => {
                self.selection
                    .entry(cell)
                    .or_insert_with(|| HslColor::random(rng));
                match kind {
                    ShapeKind::Circle => self.commit_circle(cell),
                    ShapeKind::Triangle => self.push_vertex(cell),
                }
            }
        }
    }

    fn commit_circle(&mut self, center: HexCoord) -> Option<Shape> {
        let radius = self.circle_radius()?;
        let circle = Circle { center, radius };
        self.circles.push(circle);
        debug!("circle committed at {center} radius {radius}");
        Some(Shape::Circle(circle))
    }

    fn push_vertex(&mut self, cell: HexCoord) -> Option<Shape> {
        self.pending.push(cell);
        let [a, b, c] = self.pending[..] else {
            return None;
        };
        let triangle = Triangle { vertices: [a, b, c] };
        self.triangles.push(triangle);
        self.pending.clear();
        debug!("triangle committed at {a} / {b} / {c}");
        Some(Shape::Triangle(triangle))
    }

    /// Flip shape mode. Any in-progress triangle is abandoned.
    pub fn toggle_shape_mode(&mut self) -> bool {
        self.shape_enabled = !self.shape_enabled;
        self.pending.clear();
        self.shape_enabled
    }

    /// Choose the shape kind. Any in-progress triangle is abandoned.
    pub fn set_shape_kind(&mut self, kind: ShapeKind) {
        self.shape_kind = kind;
        self.pending.clear();
    }

    /// Record the raw radius field text.
    pub fn set_radius_text(&mut self, text: &str) {
        text.clone_into(&mut self.radius_text);
    }

    /// Drop selections, shapes, and the pending buffer. Mode and radius text are kept.
    pub fn clear(&mut self) {
        self.selection.clear();
        self.circles.clear();
        self.triangles.clear();
        self.pending.clear();
    }
}
