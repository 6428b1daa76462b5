//! The effective, currently applied theme.

use wellspring_model::{AccentColor, FontSize, Hsl};

use crate::color::{AccentPalette, ForegroundTone, hsl_to_rgb, rgb_to_hsl};

/// One concrete value per themed attribute plus the derived foreground tone.
///
/// The foreground tone is recomputed by every constructor from the accent and
/// cannot be set on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTheme {
    accent_color: AccentColor,
    accent_hsl: Hsl,
    font_size: FontSize,
    high_contrast: bool,
    foreground: ForegroundTone,
}

impl ResolvedTheme {
    /// Theme for `accent_color`, deriving its HSL form and foreground tone.
    pub fn new(
        accent_color: AccentColor,
        font_size: FontSize,
        high_contrast: bool,
    ) -> Self {
        Self {
            accent_color,
            accent_hsl: rgb_to_hsl(accent_color.rgb()),
            font_size,
            high_contrast,
            foreground: ForegroundTone::for_rgb(accent_color.rgb()),
        }
    }

    /// Replace the accent with an already-resolved HSL value.
    ///
    /// The HSL value is kept verbatim for styling; the hex accent is derived
    /// from it.
    pub fn with_accent_hsl(self, accent_hsl: Hsl) -> Self {
        let rgb = hsl_to_rgb(accent_hsl);
        Self {
            accent_color: AccentColor::from_rgb(rgb),
            accent_hsl,
            foreground: ForegroundTone::for_rgb(rgb),
            ..self
        }
    }

    /// Effective accent.
    pub fn accent_color(&self) -> AccentColor {
        self.accent_color
    }

    /// Accent as applied to the surface.
    pub fn accent_hsl(&self) -> Hsl {
        self.accent_hsl
    }

    /// Effective text size preset.
    pub fn font_size(&self) -> FontSize {
        self.font_size
    }

    /// Whether high-contrast mode is on.
    pub fn high_contrast(&self) -> bool {
        self.high_contrast
    }

    /// Text tone drawn on the accent.
    pub fn foreground(&self) -> ForegroundTone {
        self.foreground
    }

    /// Accent variants written to the surface.
    pub fn palette(&self) -> AccentPalette {
        AccentPalette::from_hsl(self.accent_hsl)
    }
}
