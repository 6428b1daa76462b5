//! Color primitives shared by the resolver, the calculator and the cache.

use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, Result};

/// 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-digit hex color with an optional leading `#`.
    ///
    /// Shorthand (`#FFF`), alpha (`#RRGGBBAA`) and named colors are rejected.
    pub fn from_hex(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).ok()
        };
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Uppercase `#RRGGBB` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Hue/saturation/lightness color.
///
/// `h` is in degrees `[0, 360)`, `s` and `l` are percentages `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Build a color, wrapping hue and clamping saturation/lightness.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    /// Copy with lightness shifted by `delta` percentage points.
    pub fn with_lightness_delta(&self, delta: f64) -> Self {
        Self::new(self.h, self.s, self.l + delta)
    }

    /// CSS custom-property form, `"H S% L%"`, rounded to whole units.
    pub fn to_css_triplet(&self) -> String {
        let mut hue = self.h.round();
        if hue >= 360.0 {
            hue -= 360.0;
        }
        format!("{} {}% {}%", hue as u16, self.s.round() as u8, self.l.round() as u8)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_triplet())
    }
}

/// A validated accent color.
///
/// Stored and exchanged as a `#RRGGBB` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct AccentColor(Rgb);

impl AccentColor {
    /// Built-in accent used when nothing else is known or input is malformed.
    pub const DEFAULT: AccentColor = AccentColor(Rgb::new(0x25, 0x63, 0xEB));

    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self(rgb)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Rgb::from_hex(raw)
            .map(Self)
            .ok_or_else(|| ModelError::InvalidColor(raw.to_string()))
    }

    pub const fn rgb(&self) -> Rgb {
        self.0
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl Default for AccentColor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<Rgb> for AccentColor {
    fn from(rgb: Rgb) -> Self {
        Self(rgb)
    }
}

impl FromStr for AccentColor {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AccentColor {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<AccentColor> for String {
    fn from(color: AccentColor) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#2563EB"), Some(Rgb::new(0x25, 0x63, 0xEB)));
        assert_eq!(Rgb::from_hex("2563eb"), Some(Rgb::new(0x25, 0x63, 0xEB)));
        assert_eq!(Rgb::from_hex("  #ffffff "), Some(Rgb::WHITE));
    }

    #[test]
    fn rejects_non_six_digit_forms() {
        for raw in ["", "#", "#FFF", "#FFFFFFFF", "not-a-color", "#GG0000", "##FFFFF"] {
            assert_eq!(Rgb::from_hex(raw), None, "{raw:?} should be rejected");
        }
    }

    #[test]
    fn hex_output_is_uppercase() {
        assert_eq!(Rgb::new(0xab, 0x01, 0xff).to_hex(), "#AB01FF");
    }

    #[test]
    fn accent_parse_reports_raw_input() {
        let err = AccentColor::parse("blue").unwrap_err();
        assert_eq!(err, ModelError::InvalidColor("blue".into()));
    }

    #[test]
    fn hsl_new_wraps_and_clamps() {
        let hsl = Hsl::new(-30.0, 140.0, -5.0);
        assert!((hsl.h - 330.0).abs() < 1e-9);
        assert_eq!(hsl.s, 100.0);
        assert_eq!(hsl.l, 0.0);
    }

    #[test]
    fn css_triplet_rounds_and_wraps_hue() {
        assert_eq!(Hsl::new(221.2, 83.2, 53.3).to_css_triplet(), "221 83% 53%");
        assert_eq!(Hsl::new(359.7, 10.0, 10.0).to_css_triplet(), "0 10% 10%");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn accent_serializes_as_hex_string() {
        let accent = AccentColor::parse("#10b981").unwrap();
        let json = serde_json::to_string(&accent).unwrap();
        assert_eq!(json, "\"#10B981\"");
        let bad: std::result::Result<AccentColor, _> =
            serde_json::from_str("\"teal\"");
        assert!(bad.is_err());
    }
}
