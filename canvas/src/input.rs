//! Input model: gestures, shape kinds, interaction mode, and radius entry.
//!
//! The host translates DOM events into [`Gesture`]s and feeds them to
//! [`crate::engine::EngineCore::apply`]. `Gesture` is serde-compatible so a
//! recorded session (one JSON object per line) can be replayed outside the
//! browser.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::hex::HexCoord;

/// Which shape a click builds while shape mode is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// One click commits a circle of the configured radius.
    #[default]
    Circle,
    /// Three clicks commit a triangle.
    Triangle,
}

/// How clicks are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Single selection; a click replaces it.
    Normal,
    /// Clicks accumulate selections and build shapes of the given kind.
    ShapeBuilding(ShapeKind),
}

/// A single user gesture, already stripped of DOM details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Gesture {
    /// Primary click at a canvas position (CSS pixels).
    Click { x: f64, y: f64 },
    /// Click already resolved to a cell.
    ClickCell { cell: HexCoord },
    /// Scroll; positive `dy` zooms out, negative zooms in.
    Wheel { dy: f64 },
    /// Reset zoom to the default radius.
    DoubleClick,
    /// Flip shape-building mode on or off.
    ToggleShapeMode,
    /// Choose which shape clicks build.
    SelectShape { kind: ShapeKind },
    /// The radius field changed.
    RadiusInput { value: String },
    /// Drop all local selections and shapes.
    ClearCanvas,
    /// Ask the host to download the shape export.
    Export,
    /// Ask the host to clear the backing store.
    ClearDatabase,
}

/// Why a radius field value was not usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RadiusInputError {
    #[error("radius is empty")]
    Empty,
    #[error("radius is not a number")]
    NotANumber,
    #[error("radius is negative")]
    Negative,
}

/// Parse the radius field the way a lenient integer parse would: surrounding
/// whitespace is ignored, an optional sign is accepted, and parsing stops at
/// the first non-digit (`"3.7"` is 3, `"12px"` is 12).
///
/// # Errors
///
/// Returns [`RadiusInputError`] if the text is empty, has no leading digits,
/// or is negative.
pub fn parse_radius(text: &str) -> Result<u32, RadiusInputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(RadiusInputError::Empty);
    }

    let (negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];
    if digits.is_empty() {
        return Err(RadiusInputError::NotANumber);
    }

    let all_zero = digits.bytes().all(|b| b == b'0');
    if negative && !all_zero {
        return Err(RadiusInputError::Negative);
    }
    // Values beyond u32 are far outside any drawable grid; saturate.
    Ok(digits.parse::<u32>().unwrap_or(u32::MAX))
}
