//! Relative luminance and the text-on-accent decision.

use std::fmt;

use wellspring_model::Rgb;

/// Accents at or above this luminance get dark text.
pub const FOREGROUND_LUMINANCE_THRESHOLD: f64 = 0.45;

/// Near-black foreground, as a CSS HSL triplet.
pub const DARK_FOREGROUND_HSL: &str = "222 47% 11%";

/// Near-white foreground, as a CSS HSL triplet.
pub const LIGHT_FOREGROUND_HSL: &str = "210 40% 98%";

/// Relative luminance in `[0, 1]`.
///
/// Channels are gamma-expanded to linear light and weighted by perceptual
/// sensitivity (green dominates, blue contributes least).
pub fn luminance(rgb: Rgb) -> f64 {
    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g)
        + 0.0722 * linearize(rgb.b)
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Text/icon tone drawn on top of the accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForegroundTone {
    /// Near-black text, for light accents.
    Dark,
    /// Near-white text, for dark accents.
    Light,
}

impl ForegroundTone {
    /// Tone for an accent of the given relative luminance.
    pub fn from_luminance(luminance: f64) -> Self {
        if luminance >= FOREGROUND_LUMINANCE_THRESHOLD {
            ForegroundTone::Dark
        } else {
            ForegroundTone::Light
        }
    }

    /// Tone for an accent color.
    pub fn for_rgb(rgb: Rgb) -> Self {
        Self::from_luminance(luminance(rgb))
    }

    /// CSS HSL triplet for this tone.
    pub const fn css_hsl(self) -> &'static str {
        match self {
            ForegroundTone::Dark => DARK_FOREGROUND_HSL,
            ForegroundTone::Light => LIGHT_FOREGROUND_HSL,
        }
    }
}

impl fmt::Display for ForegroundTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForegroundTone::Dark => f.write_str("dark"),
            ForegroundTone::Light => f.write_str("light"),
        }
    }
}
