//! Random highlight colors for selected cells.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;

use rand::Rng;
use serde::Serialize;

/// An HSL color: hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HslColor {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl HslColor {
    /// A vivid, light color: hue in `[0, 359]`, saturation in `[70, 95]`,
    /// lightness in `[55, 70]`, each uniformly drawn.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            hue: rng.random_range(0..=359),
            saturation: rng.random_range(70..=95),
            lightness: rng.random_range(55..=70),
        }
    }

    /// CSS color string, e.g. `hsl(210 80% 60%)`.
    #[must_use]
    pub fn css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({} {}% {}%)", self.hue, self.saturation, self.lightness)
    }
}
