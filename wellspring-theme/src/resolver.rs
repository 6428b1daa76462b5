//! Preference resolver: authoritative > cached > default.

use wellspring_config::ThemeConfig;
use wellspring_model::{
    AccentColor, FontSize, PartialPreferences, PreferenceAttribute,
    PreferenceValue,
};

use crate::cache::{PreferenceCache, read_cached};
use crate::theme::ResolvedTheme;

/// Lowest precedence tier; always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeDefaults {
    /// Accent applied on a first visit and for malformed colors.
    pub accent_color: AccentColor,
    /// Text size preset.
    pub font_size: FontSize,
    /// High-contrast mode.
    pub high_contrast: bool,
}

impl Default for ThemeDefaults {
    fn default() -> Self {
        Self {
            accent_color: AccentColor::DEFAULT,
            font_size: FontSize::Default,
            high_contrast: false,
        }
    }
}

impl From<&ThemeConfig> for ThemeDefaults {
    fn from(config: &ThemeConfig) -> Self {
        Self {
            accent_color: config.default_accent,
            font_size: config.default_font_size,
            high_contrast: config.default_high_contrast,
        }
    }
}

impl ThemeDefaults {
    fn get(&self, attribute: PreferenceAttribute) -> PreferenceValue {
        match attribute {
            PreferenceAttribute::AccentColor => {
                PreferenceValue::AccentColor(self.accent_color)
            }
            PreferenceAttribute::FontSize => {
                PreferenceValue::FontSize(self.font_size)
            }
            PreferenceAttribute::HighContrast => {
                PreferenceValue::HighContrast(self.high_contrast)
            }
        }
    }
}

/// Where an effective value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PreferenceTier {
    Authoritative,
    Cached,
    Default,
}

/// Result of one resolver run.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Effective value of every attribute.
    pub theme: ResolvedTheme,
    /// Attributes whose cache entry was (re)written during this run.
    pub cache_writes: Vec<PreferenceAttribute>,
}

/// Picks one effective value per attribute from the authoritative, cached
/// and default tiers.
#[derive(Debug, Clone)]
pub struct PreferenceResolver {
    defaults: ThemeDefaults,
}

impl Default for PreferenceResolver {
    fn default() -> Self {
        Self::new(ThemeDefaults::default())
    }
}

impl PreferenceResolver {
    /// Resolver falling back to `defaults`.
    pub fn new(defaults: ThemeDefaults) -> Self {
        Self { defaults }
    }

    /// The lowest precedence tier.
    pub fn defaults(&self) -> &ThemeDefaults {
        &self.defaults
    }

    /// Pick the effective value of every attribute and reconcile the cache.
    ///
    /// Per attribute, in order:
    /// 1. an authoritative value wins and is written to the cache unless the
    ///    cache already holds it;
    /// 2. otherwise a cached value wins and the cache is left alone;
    /// 3. otherwise the default wins and is written to the cache.
    ///
    /// A failed cache write is logged and does not change the outcome.
    pub fn resolve<C: PreferenceCache + ?Sized>(
        &self,
        authoritative: &PartialPreferences,
        cache: &mut C,
    ) -> Resolution {
        let cached = read_cached(cache);
        let mut effective = PartialPreferences::empty();
        let mut cache_writes = Vec::new();

        for attribute in PreferenceAttribute::ALL {
            let (value, tier) = match (
                authoritative.get(attribute),
                cached.get(attribute),
            ) {
                (Some(value), _) => (value, PreferenceTier::Authoritative),
                (None, Some(value)) => (value, PreferenceTier::Cached),
                (None, None) => {
                    (self.defaults.get(attribute), PreferenceTier::Default)
                }
            };

            let needs_write = match tier {
                PreferenceTier::Authoritative => {
                    cached.get(attribute) != Some(value)
                }
                PreferenceTier::Cached => false,
                PreferenceTier::Default => true,
            };

            if needs_write {
                match cache.write(attribute.cache_key(), &value.encode()) {
                    Ok(()) => {
                        tracing::debug!(
                            %attribute,
                            ?tier,
                            value = %value.encode(),
                            "cached preference"
                        );
                        cache_writes.push(attribute);
                    }
                    Err(err) => tracing::warn!(
                        %attribute,
                        error = %err,
                        "failed to cache preference"
                    ),
                }
            }

            effective.set(value);
        }

        let theme = ResolvedTheme::new(
            effective.accent_color.unwrap_or(self.defaults.accent_color),
            effective.font_size.unwrap_or(self.defaults.font_size),
            effective.high_contrast.unwrap_or(self.defaults.high_contrast),
        );

        tracing::debug!(
            accent = %theme.accent_color(),
            font_size = %theme.font_size(),
            high_contrast = theme.high_contrast(),
            foreground = %theme.foreground(),
            writes = cache_writes.len(),
            "resolved theme"
        );

        Resolution {
            theme,
            cache_writes,
        }
    }
}
