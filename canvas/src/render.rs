//! Rendering: derives the full scene from session state, then paints it.
//!
//! [`build`] is a pure function of its inputs: it enumerates the displayed
//! cells and derives every visual attribute (tier tint, circle overlay,
//! selection highlight, labels, triangle outlines) from scratch. Nothing is
//! carried over from a previous frame, so identical inputs always give an
//! identical [`Scene`].
//!
//! [`paint`] is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. All fallible `Canvas2D` calls
//! propagate errors via `Result<(), JsValue>`; the top-level caller
//! ([`crate::engine::Engine::render`]) handles the result.
//!
//! Each cell's fill is resolved in order: tier tint, then circle overlay
//! on covered unselected cells, then selection highlight. Painting goes
//! cell by cell in grid order (r, then q), each polygon followed by its
//! label (display radius ≤ 8 only), so later cells overlap earlier labels.
//! Triangle outlines go on top of everything.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::collections::BTreeMap;

use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::color::HslColor;
use crate::consts::{
    BASE_FILL, BASE_OPACITY, CIRCLE_OVERLAY_FILL, HIGHLIGHT_GLOW_PX, LABEL_MAX_RADIUS, ORIGIN_FILL, ORIGIN_OPACITY,
    PINNED_FILL, PINNED_OPACITY, PINNED_RINGS,
};
use crate::grid;
use crate::hex::{HexCoord, Point, corners};
use crate::session::{Circle, Selection, Triangle};
use crate::viewport::Viewport;

/// Label text for the origin cell.
const ORIGIN_LABEL: &str = "q r s";

/// Baseline offset below the cell center for the origin label.
const ORIGIN_LABEL_DY: f64 = 6.0;

/// Baseline offset below the cell center for coordinate labels.
const LABEL_DY: f64 = 4.0;

/// Outline color for unselected cells.
const CELL_STROKE: &str = "#c9cfdd";

/// Triangle outline color and width.
const TRIANGLE_STROKE: &str = "#231a42";
const TRIANGLE_LINE_WIDTH: f64 = 2.0;

// =============================================================
// Scene model
// =============================================================

/// Cosmetic tier of a cell, from its ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Origin,
    Pinned,
    Base,
}

impl Tier {
    #[must_use]
    pub fn of(cell: HexCoord) -> Self {
        if cell.is_origin() {
            Self::Origin
        } else if PINNED_RINGS.contains(&cell.ring()) {
            Self::Pinned
        } else {
            Self::Base
        }
    }

    #[must_use]
    pub fn fill(self) -> &'static str {
        match self {
            Self::Origin => ORIGIN_FILL,
            Self::Pinned => PINNED_FILL,
            Self::Base => BASE_FILL,
        }
    }

    #[must_use]
    pub fn opacity(self) -> f64 {
        match self {
            Self::Origin => ORIGIN_OPACITY,
            Self::Pinned => PINNED_OPACITY,
            Self::Base => BASE_OPACITY,
        }
    }
}

/// One hex polygon and its final fill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellSprite {
    pub coord: HexCoord,
    /// Pixel center.
    pub center: Point,
    pub corners: [Point; 6],
    pub tier: Tier,
    /// Resolved CSS fill after overlay and highlight.
    pub fill: String,
    pub opacity: f64,
    /// Tinted by a circle overlay.
    pub in_circle: bool,
    /// Selection highlight, if selected.
    pub highlight: Option<HslColor>,
    /// Coordinate label, painted right after this cell.
    pub label: Option<Label>,
}

/// A text label anchored below a cell center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub at: Point,
    pub text: String,
    pub is_origin: bool,
}

/// A closed triangle outline: three vertex centers plus the first again.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outline {
    pub points: [Point; 4],
}

/// Everything needed to paint one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub display_radius: u32,
    pub cell_size: f64,
    pub cells: Vec<CellSprite>,
    pub outlines: Vec<Outline>,
}

impl Scene {
    /// Labels in paint order.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.cells.iter().filter_map(|c| c.label.as_ref())
    }
}

/// Read-only inputs to [`build`].
#[derive(Debug, Clone, Copy)]
pub struct SceneInput<'a> {
    pub display_radius: u32,
    pub cell_size: f64,
    /// Pixel center of the origin cell.
    pub origin: Point,
    pub selection: &'a Selection,
    pub circles: &'a [Circle],
    pub triangles: &'a [Triangle],
}

// =============================================================
// Scene derivation
// =============================================================

/// Derive the full scene from a state snapshot.
#[must_use]
pub fn build(input: &SceneInput<'_>) -> Scene {
    // Cells, base tiers and labels.
    let labelled = input.display_radius <= LABEL_MAX_RADIUS;
    let mut cells: Vec<CellSprite> = grid::enumerate(input.display_radius)
        .into_iter()
        .map(|coord| base_sprite(coord, input.origin, input.cell_size, labelled))
        .collect();

    // Circle overlay; selected cells keep their highlight instead.
    for circle in input.circles {
        for cell in &mut cells {
            if circle.contains(cell.coord) && !input.selection.contains_key(&cell.coord) {
                cell.in_circle = true;
                CIRCLE_OVERLAY_FILL.clone_into(&mut cell.fill);
            }
        }
    }

    // Selection highlight.
    for cell in &mut cells {
        if let Some(&color) = input.selection.get(&cell.coord) {
            cell.highlight = Some(color);
            cell.fill = color.css();
        }
    }

    // Triangle outlines; triangles with a vertex off the displayed grid are skipped.
    let centers: BTreeMap<HexCoord, Point> = cells.iter().map(|c| (c.coord, c.center)).collect();
    let outlines = input
        .triangles
        .iter()
        .filter_map(|t| {
            let [a, b, c] = t.vertices.map(|v| centers.get(&v).copied());
            Some(Outline { points: [a?, b?, c?, a?] })
        })
        .collect();

    Scene {
        display_radius: input.display_radius,
        cell_size: input.cell_size,
        cells,
        outlines,
    }
}

fn base_sprite(coord: HexCoord, origin: Point, size: f64, labelled: bool) -> CellSprite {
    let offset = coord.to_pixel(size);
    let center = Point::new(origin.x + offset.x, origin.y + offset.y);
    let tier = Tier::of(coord);
    CellSprite {
        label: labelled.then(|| label_for(coord, center)),
        coord,
        center,
        corners: corners(center.x, center.y, size),
        tier,
        fill: tier.fill().to_owned(),
        opacity: tier.opacity(),
        in_circle: false,
        highlight: None,
    }
}

fn label_for(coord: HexCoord, center: Point) -> Label {
    if coord.is_origin() {
        Label {
            at: Point::new(center.x, center.y + ORIGIN_LABEL_DY),
            text: ORIGIN_LABEL.to_owned(),
            is_origin: true,
        }
    } else {
        Label {
            at: Point::new(center.x, center.y + LABEL_DY),
            text: coord.to_string(),
            is_origin: false,
        }
    }
}

// =============================================================
// Painting
// =============================================================

/// Paint a scene onto a 2D context sized to `viewport`.
///
/// Only reached through [`crate::engine::Engine::render`] in the browser;
/// everything it draws comes from [`build`], which is where the tests look.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn paint(ctx: &CanvasRenderingContext2d, scene: &Scene, viewport: &Viewport) -> Result<(), JsValue> {
    ctx.set_transform(viewport.dpr, 0.0, 0.0, viewport.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);

    let font_px = (scene.cell_size * 0.32).clamp(6.0, 14.0);
    for cell in &scene.cells {
        draw_cell(ctx, cell);
        if let Some(label) = &cell.label {
            draw_label(ctx, label, font_px)?;
        }
    }

    for outline in &scene.outlines {
        draw_outline(ctx, outline);
    }

    Ok(())
}

fn draw_cell(ctx: &CanvasRenderingContext2d, cell: &CellSprite) {
    ctx.save();
    trace_polygon(ctx, &cell.corners);
    ctx.set_global_alpha(cell.opacity);
    ctx.set_fill_style_str(&cell.fill);
    ctx.set_line_width(1.0);

    if let Some(color) = cell.highlight {
        let css = color.css();
        ctx.set_shadow_color(&css);
        ctx.set_shadow_blur(HIGHLIGHT_GLOW_PX);
        ctx.fill();
        ctx.set_shadow_blur(0.0);
        ctx.set_stroke_style_str(&css);
    } else {
        ctx.fill();
        ctx.set_stroke_style_str(CELL_STROKE);
    }
    ctx.stroke();
    ctx.restore();
}

fn draw_label(ctx: &CanvasRenderingContext2d, label: &Label, font_px: f64) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_text_align("center");
    ctx.set_text_baseline("alphabetic");
    if label.is_origin {
        ctx.set_font(&format!("bold {:.0}px sans-serif", font_px * 1.3));
        ctx.set_fill_style_str("#231a42");
    } else {
        ctx.set_font(&format!("{font_px:.0}px sans-serif"));
        ctx.set_fill_style_str("#6b7088");
    }
    let drawn = ctx.fill_text(&label.text, label.at.x, label.at.y);
    ctx.restore();
    drawn
}

fn draw_outline(ctx: &CanvasRenderingContext2d, outline: &Outline) {
    ctx.save();
    ctx.set_stroke_style_str(TRIANGLE_STROKE);
    ctx.set_line_width(TRIANGLE_LINE_WIDTH);
    ctx.begin_path();
    let [first, rest @ ..] = &outline.points;
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    ctx.stroke();
    ctx.restore();
}

fn trace_polygon(ctx: &CanvasRenderingContext2d, points: &[Point]) {
    ctx.begin_path();
    for (i, p) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(p.x, p.y);
        } else {
            ctx.line_to(p.x, p.y);
        }
    }
    ctx.close_path();
}
