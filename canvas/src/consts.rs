//! Shared numeric constants for the canvas crate.

// ── Math ────────────────────────────────────────────────────────

/// √3 — horizontal spacing factor for pointy-top hex rows.
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

// ── Zoom ────────────────────────────────────────────────────────

/// Ring radii the display radius snaps to, scanned in ascending order.
pub const PINNED_RINGS: [u32; 5] = [2, 4, 8, 16, 32];

/// Smallest display radius reachable by zoom gestures.
pub const MIN_DISPLAY_RADIUS: u32 = 4;

/// Largest display radius reachable by zoom gestures.
pub const MAX_DISPLAY_RADIUS: u32 = 32;

/// Display radius at startup and after a reset.
pub const DEFAULT_DISPLAY_RADIUS: u32 = 16;

// ── Viewport ────────────────────────────────────────────────────

/// Fraction of each viewport dimension available to half the grid (92% total).
pub const FIT_HALF_EXTENT: f64 = 0.46;

/// Extra half cell at the outer edge of the grid.
pub const EDGE_MARGIN_CELLS: f64 = 0.5;

/// Floor for the fitted cell size.
pub const MIN_CELL_SIZE: f64 = 1.0;

/// Drawing area width used until the host reports a real viewport.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 980.0;

/// Drawing area height used until the host reports a real viewport.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 690.0;

// ── Rendering ───────────────────────────────────────────────────

/// Coordinate labels are drawn only at or below this display radius.
pub const LABEL_MAX_RADIUS: u32 = 8;

/// Fill for the origin cell.
pub const ORIGIN_FILL: &str = "#ffeab8";

/// Fill for cells on a pinned ring.
pub const PINNED_FILL: &str = "#f2f4fb";

/// Fill for every other cell.
pub const BASE_FILL: &str = "#ffffff";

/// Translucent tint for cells covered by a committed circle.
pub const CIRCLE_OVERLAY_FILL: &str = "rgba(35, 26, 66, 0.1)";

/// Opacity per tier: origin, pinned, base.
pub const ORIGIN_OPACITY: f64 = 0.98;
pub const PINNED_OPACITY: f64 = 0.96;
pub const BASE_OPACITY: f64 = 0.94;

/// Blur radius of the glow around a highlighted cell, in CSS pixels.
pub const HIGHLIGHT_GLOW_PX: f64 = 10.0;
