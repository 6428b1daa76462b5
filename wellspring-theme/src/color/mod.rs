//! Derived-style calculator.
//!
//! Pure color math: nothing here owns state or touches the document.

pub mod contrast;
pub mod convert;
pub mod palette;

pub use contrast::{
    FOREGROUND_LUMINANCE_THRESHOLD, ForegroundTone, luminance,
};
pub use convert::{
    hex_to_hsl, hsl_string_to_rgb, hsl_to_rgb, parse_hsl_string, rgb_to_hsl,
};
pub use palette::AccentPalette;
