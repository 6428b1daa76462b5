//! Themed preference attributes and their partial (optionally present) form.

use std::fmt;
use std::str::FromStr;

use crate::color::AccentColor;
use crate::error::{ModelError, Result};

/// The fixed set of themed attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PreferenceAttribute {
    AccentColor,
    FontSize,
    HighContrast,
}

impl PreferenceAttribute {
    pub const ALL: [PreferenceAttribute; 3] = [
        PreferenceAttribute::AccentColor,
        PreferenceAttribute::FontSize,
        PreferenceAttribute::HighContrast,
    ];

    /// Key under which the attribute is stored in the device-local cache.
    pub const fn cache_key(self) -> &'static str {
        match self {
            PreferenceAttribute::AccentColor => "theme.accent-color",
            PreferenceAttribute::FontSize => "theme.font-size",
            PreferenceAttribute::HighContrast => "theme.high-contrast",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PreferenceAttribute::AccentColor => "accentColor",
            PreferenceAttribute::FontSize => "fontSize",
            PreferenceAttribute::HighContrast => "highContrast",
        }
    }
}

impl fmt::Display for PreferenceAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Text size preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum FontSize {
    Small,
    #[default]
    Default,
    Large,
}

impl FontSize {
    pub const ALL: [FontSize; 3] =
        [FontSize::Small, FontSize::Default, FontSize::Large];

    pub const fn as_str(self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Default => "default",
            FontSize::Large => "large",
        }
    }

    /// Document class toggled while this size is active.
    pub const fn class_name(self) -> &'static str {
        match self {
            FontSize::Small => "text-size-sm",
            FontSize::Default => "text-size-default",
            FontSize::Large => "text-size-lg",
        }
    }
}

impl FromStr for FontSize {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "small" => Ok(FontSize::Small),
            "default" => Ok(FontSize::Default),
            "large" => Ok(FontSize::Large),
            other => Err(ModelError::InvalidFontSize(other.to_string())),
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A concrete value for exactly one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceValue {
    AccentColor(AccentColor),
    FontSize(FontSize),
    HighContrast(bool),
}

impl PreferenceValue {
    pub const fn attribute(&self) -> PreferenceAttribute {
        match self {
            PreferenceValue::AccentColor(_) => PreferenceAttribute::AccentColor,
            PreferenceValue::FontSize(_) => PreferenceAttribute::FontSize,
            PreferenceValue::HighContrast(_) => {
                PreferenceAttribute::HighContrast
            }
        }
    }

    /// Opaque string form written to the cache.
    pub fn encode(&self) -> String {
        match self {
            PreferenceValue::AccentColor(color) => color.to_hex(),
            PreferenceValue::FontSize(size) => size.as_str().to_string(),
            PreferenceValue::HighContrast(flag) => flag.to_string(),
        }
    }

    /// Inverse of [`PreferenceValue::encode`].
    pub fn decode(attribute: PreferenceAttribute, raw: &str) -> Result<Self> {
        match attribute {
            PreferenceAttribute::AccentColor => {
                AccentColor::parse(raw).map(PreferenceValue::AccentColor)
            }
            PreferenceAttribute::FontSize => {
                raw.parse().map(PreferenceValue::FontSize)
            }
            PreferenceAttribute::HighContrast => match raw.trim() {
                "true" => Ok(PreferenceValue::HighContrast(true)),
                "false" => Ok(PreferenceValue::HighContrast(false)),
                other => Err(ModelError::InvalidFlag(other.to_string())),
            },
        }
    }
}

/// Per-attribute optional values.
///
/// `None` means unset. `Some(false)` for high contrast is a real value and
/// must not fall through to a lower tier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialPreferences {
    pub accent_color: Option<AccentColor>,
    pub font_size: Option<FontSize>,
    pub high_contrast: Option<bool>,
}

impl PartialPreferences {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_accent_color(mut self, accent: AccentColor) -> Self {
        self.accent_color = Some(accent);
        self
    }

    pub fn with_font_size(mut self, size: FontSize) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_high_contrast(mut self, enabled: bool) -> Self {
        self.high_contrast = Some(enabled);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.accent_color.is_none()
            && self.font_size.is_none()
            && self.high_contrast.is_none()
    }

    pub fn get(&self, attribute: PreferenceAttribute) -> Option<PreferenceValue> {
        match attribute {
            PreferenceAttribute::AccentColor => {
                self.accent_color.map(PreferenceValue::AccentColor)
            }
            PreferenceAttribute::FontSize => {
                self.font_size.map(PreferenceValue::FontSize)
            }
            PreferenceAttribute::HighContrast => {
                self.high_contrast.map(PreferenceValue::HighContrast)
            }
        }
    }

    pub fn set(&mut self, value: PreferenceValue) {
        match value {
            PreferenceValue::AccentColor(color) => {
                self.accent_color = Some(color)
            }
            PreferenceValue::FontSize(size) => self.font_size = Some(size),
            PreferenceValue::HighContrast(flag) => {
                self.high_contrast = Some(flag)
            }
        }
    }
}

/// Raw preference fields as stored on the user's profile document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct PreferenceDocument {
    pub accent_color: Option<String>,
    pub font_size: Option<String>,
    pub high_contrast: Option<bool>,
}

/// Outcome of [`PreferenceDocument::parse`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentParse {
    pub preferences: PartialPreferences,
    /// Fields that were present but malformed; they count as unset.
    pub rejected: Vec<ModelError>,
}

impl PreferenceDocument {
    pub fn parse(&self) -> DocumentParse {
        let mut parsed = DocumentParse::default();

        if let Some(raw) = self.accent_color.as_deref() {
            match AccentColor::parse(raw) {
                Ok(color) => parsed.preferences.accent_color = Some(color),
                Err(err) => parsed.rejected.push(err),
            }
        }

        if let Some(raw) = self.font_size.as_deref() {
            match raw.parse::<FontSize>() {
                Ok(size) => parsed.preferences.font_size = Some(size),
                Err(err) => parsed.rejected.push(err),
            }
        }

        parsed.preferences.high_contrast = self.high_contrast;
        parsed
    }
}

impl From<&PartialPreferences> for PreferenceDocument {
    fn from(prefs: &PartialPreferences) -> Self {
        Self {
            accent_color: prefs.accent_color.map(|c| c.to_hex()),
            font_size: prefs.font_size.map(|s| s.as_str().to_string()),
            high_contrast: prefs.high_contrast,
        }
    }
}
