//! Accent variants derived from a base accent.

use wellspring_model::Hsl;

use super::contrast::ForegroundTone;
use super::convert::hsl_to_rgb;

/// Lightness points added to the base accent for hover states.
pub const HOVER_LIGHTEN: f64 = 3.0;

/// Snapshot of everything derived from one accent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccentPalette {
    /// The accent itself.
    pub base: Hsl,
    /// Slightly lighter shade for hover states.
    pub hover: Hsl,
    /// Text tone drawn on the accent.
    pub foreground: ForegroundTone,
}

impl AccentPalette {
    /// Derive the palette for `base`.
    pub fn from_hsl(base: Hsl) -> Self {
        Self {
            base,
            hover: base.with_lightness_delta(HOVER_LIGHTEN),
            foreground: ForegroundTone::for_rgb(hsl_to_rgb(base)),
        }
    }
}
