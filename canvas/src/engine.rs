use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::hex::{HexCoord, Point};
use crate::hit;
use crate::input::{Gesture, Mode, ShapeKind};
use crate::outbox::{Outbox, ShapeEvent};
use crate::render::{self, Scene, SceneInput};
use crate::session::Session;
use crate::viewport::Viewport;
use crate::zoom::Zoom;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Status text after a local clear.
pub const STATUS_CANVAS_CLEARED: &str = "Canvas cleared | Click any hexagon";

/// Status text after the backing store confirmed a clear.
pub const STATUS_DB_CLEARED: &str = "DB cleared";

/// Status text when the backing store clear did not succeed.
pub const STATUS_DB_CLEAR_FAILED: &str = "Clear DB failed";

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The scene changed; call `render`.
    RenderNeeded,
    /// New status line text.
    StatusChanged(String),
    /// Shape events were queued; drain them with `drain_outbound`.
    OutboundQueued,
    /// Perform `POST /api/clear-db/`, then report via `finish_clear_database`.
    ClearDatabaseRequested,
    /// Start the shape export download.
    ExportRequested,
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone)]
pub struct EngineCore {
    pub session: Session,
    pub zoom: Zoom,
    pub viewport: Viewport,
    pub outbox: Outbox,
    pub status: String,
    rng: SmallRng,
}

impl EngineCore {
    /// Create an engine whose highlight colors are drawn from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            session: Session::new(),
            zoom: Zoom::default(),
            viewport: Viewport::default(),
            outbox: Outbox::new(),
            status: String::new(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Feed one gesture through the matching handler.
    pub fn apply(&mut self, gesture: Gesture) -> Vec<Action> {
        match gesture {
            Gesture::Click { x, y } => self.on_click(Point::new(x, y)),
            Gesture::ClickCell { cell } => self.on_cell_click(cell),
            Gesture::Wheel { dy } => self.on_wheel(dy),
            Gesture::DoubleClick => self.on_double_click(),
            Gesture::ToggleShapeMode => self.toggle_shape_mode(),
            Gesture::SelectShape { kind } => self.set_shape_kind(kind),
            Gesture::RadiusInput { value } => self.set_radius_input(&value),
            Gesture::ClearCanvas => self.clear_canvas(),
            Gesture::Export => self.request_export(),
            Gesture::ClearDatabase => self.request_clear_database(),
        }
    }

    // --- Pointer ---

    /// Click at a canvas position. Positions off the displayed grid are ignored.
    pub fn on_click(&mut self, screen_pt: Point) -> Vec<Action> {
        match hit::hex_at(screen_pt, self.viewport.center(), self.cell_size(), self.zoom.display_radius()) {
            Some(cell) => self.on_cell_click(cell),
            None => Vec::new(),
        }
    }

    /// Click on a known cell. Cells outside the displayed grid are ignored.
    pub fn on_cell_click(&mut self, cell: HexCoord) -> Vec<Action> {
        if cell.ring() > self.zoom.display_radius() {
            log::debug!("click on {cell} outside displayed grid ignored");
            return Vec::new();
        }
        let committed = self.session.click(cell, &mut self.rng);
        self.status = format!("clicked (q={}, r={}, s={})", cell.q(), cell.r(), cell.s());

        let mut actions = vec![Action::StatusChanged(self.status.clone()), Action::RenderNeeded];
        if let Some(shape) = committed {
            self.outbox.push(ShapeEvent::from(shape));
            actions.push(Action::OutboundQueued);
        }
        actions
    }

    /// Vertical scroll delta: positive zooms out, negative zooms in.
    pub fn on_wheel(&mut self, dy: f64) -> Vec<Action> {
        if dy > 0.0 {
            self.zoom.zoom_out();
        } else if dy < 0.0 {
            self.zoom.zoom_in();
        } else {
            return Vec::new();
        }
        vec![Action::RenderNeeded]
    }

    pub fn on_double_click(&mut self) -> Vec<Action> {
        self.zoom.reset();
        vec![Action::RenderNeeded]
    }

    // --- Shape controls ---

    /// Flip shape mode. Only the control panel changes; the grid is not redrawn.
    pub fn toggle_shape_mode(&mut self) -> Vec<Action> {
        let enabled = self.session.toggle_shape_mode();
        log::debug!("shape mode {}", if enabled { "on" } else { "off" });
        Vec::new()
    }

    pub fn set_shape_kind(&mut self, kind: ShapeKind) -> Vec<Action> {
        self.session.set_shape_kind(kind);
        Vec::new()
    }

    /// Record the radius field. Redraws only while building circles.
    pub fn set_radius_input(&mut self, text: &str) -> Vec<Action> {
        self.session.set_radius_text(text);
        if self.session.mode() == Mode::ShapeBuilding(ShapeKind::Circle) {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    // --- Buttons ---

    /// Drop local selections and shapes. The backing store is not contacted.
    pub fn clear_canvas(&mut self) -> Vec<Action> {
        self.session.clear();
        self.set_status(STATUS_CANVAS_CLEARED)
    }

    pub fn request_export(&mut self) -> Vec<Action> {
        vec![Action::ExportRequested]
    }

    pub fn request_clear_database(&mut self) -> Vec<Action> {
        vec![Action::ClearDatabaseRequested]
    }

    /// Outcome of a clear-database request. Local state is only cleared on success.
    pub fn finish_clear_database(&mut self, ok: bool) -> Vec<Action> {
        if ok {
            self.session.clear();
            self.set_status(STATUS_DB_CLEARED)
        } else {
            log::warn!("clear database failed; keeping local state");
            self.status = STATUS_DB_CLEAR_FAILED.to_owned();
            vec![Action::StatusChanged(self.status.clone())]
        }
    }

    fn set_status(&mut self, text: &str) -> Vec<Action> {
        text.clone_into(&mut self.status);
        vec![Action::StatusChanged(self.status.clone()), Action::RenderNeeded]
    }

    // --- Viewport ---

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        self.viewport = Viewport::new(width_css, height_css, dpr);
        vec![Action::RenderNeeded]
    }

    // --- Queries ---

    /// Cell size for the current radius and viewport.
    #[must_use]
    pub fn cell_size(&self) -> f64 {
        self.viewport.cell_size(self.zoom.display_radius())
    }

    #[must_use]
    pub fn display_radius(&self) -> u32 {
        self.zoom.display_radius()
    }

    /// Derive the scene for the current state.
    #[must_use]
    pub fn scene(&self) -> Scene {
        render::build(&SceneInput {
            display_radius: self.zoom.display_radius(),
            cell_size: self.cell_size(),
            origin: self.viewport.center(),
            selection: self.session.selection(),
            circles: self.session.circles(),
            triangles: self.session.triangles(),
        })
    }

    /// Take the queued shape events for sending.
    pub fn drain_outbound(&mut self) -> Vec<ShapeEvent> {
        self.outbox.drain()
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
///
/// This is the wasm-facing surface. The page script that hosts the canvas
/// forwards DOM events here and calls [`Engine::render`] on
/// [`Action::RenderNeeded`]. The native `hexcoord` host drives `EngineCore`
/// directly and never constructs an `Engine`.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        let seed = js_sys::Math::random().to_bits();
        Self { canvas, core: EngineCore::new(seed) }
    }

    // --- Viewport ---

    /// Resize the backing store to device pixels and record the CSS size.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        self.canvas.set_width((width_css * dpr).round().max(0.0) as u32);
        self.canvas.set_height((height_css * dpr).round().max(0.0) as u32);
        self.core.set_viewport(width_css, height_css, dpr)
    }

    // --- Input events ---

    pub fn apply(&mut self, gesture: Gesture) -> Vec<Action> {
        self.core.apply(gesture)
    }

    pub fn on_click(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_click(screen_pt)
    }

    pub fn on_wheel(&mut self, dy: f64) -> Vec<Action> {
        self.core.on_wheel(dy)
    }

    pub fn on_double_click(&mut self) -> Vec<Action> {
        self.core.on_double_click()
    }

    pub fn finish_clear_database(&mut self, ok: bool) -> Vec<Action> {
        self.core.finish_clear_database(ok)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a draw call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        render::paint(&ctx, &self.core.scene(), &self.core.viewport)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn status(&self) -> &str {
        &self.core.status
    }

    #[must_use]
    pub fn display_radius(&self) -> u32 {
        self.core.display_radius()
    }

    pub fn drain_outbound(&mut self) -> Vec<ShapeEvent> {
        self.core.drain_outbound()
    }
}
