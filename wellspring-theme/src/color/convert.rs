//! Conversions between hex, RGB and HSL.

use wellspring_model::{Hsl, Rgb};

/// Parse a `#RRGGBB` (or `RRGGBB`) color into HSL.
///
/// Returns `None` for any other format; callers fall back to the default
/// accent.
pub fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    Rgb::from_hex(hex).map(rgb_to_hsl)
}

/// Convert RGB to HSL (h: 0-360, s: 0-100, l: 0-100).
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic (gray)
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        let mut h = (g - b) / d;
        if g < b {
            h += 6.0;
        }
        h
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h * 60.0, s * 100.0, l * 100.0)
}

/// Convert HSL to RGB, rounding each channel to the nearest 8-bit value.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    if s == 0.0 {
        // Hue is meaningless without saturation.
        let grey = to_channel(l);
        return Rgb::new(grey, grey, grey);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let h = hsl.h / 360.0;

    Rgb::new(
        to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_rgb(p, q, h)),
        to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(unit: f64) -> u8 {
    (unit.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Parse the CSS custom-property form of an HSL color.
///
/// Accepts `"221 83% 53%"`, comma separated components and an optional
/// `hsl(...)` wrapper. The `%` suffix is optional. Saturation and lightness
/// outside `[0, 100]` are rejected rather than clamped.
pub fn parse_hsl_string(raw: &str) -> Option<Hsl> {
    let trimmed = raw.trim();
    let body = trimmed
        .strip_prefix("hsl(")
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(trimmed);

    let mut parts = body
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());

    let h = parse_component(parts.next()?, false)?;
    let s = parse_component(parts.next()?, true)?;
    let l = parse_component(parts.next()?, true)?;
    if parts.next().is_some() {
        return None;
    }

    if h < 0.0 || !(0.0..=100.0).contains(&s) || !(0.0..=100.0).contains(&l) {
        return None;
    }

    Some(Hsl::new(h, s, l))
}

fn parse_component(raw: &str, percent: bool) -> Option<f64> {
    let digits = if percent {
        raw.strip_suffix('%').unwrap_or(raw)
    } else {
        raw.strip_suffix("deg").unwrap_or(raw)
    };
    digits.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parse an HSL string and convert it to RGB for contrast analysis.
pub fn hsl_string_to_rgb(raw: &str) -> Option<Rgb> {
    parse_hsl_string(raw).map(hsl_to_rgb)
}
