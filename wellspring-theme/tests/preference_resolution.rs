//! Precedence, fallthrough and bootstrap behaviour of the resolver as seen
//! through the controller.

use std::collections::HashMap;

use wellspring_model::{AccentColor, FontSize, PartialPreferences};
use wellspring_theme::{
    DocumentStyle, MemoryCache, PreferenceCache, PreferenceResolver, Result,
    ThemeController, ThemeDefaults,
};

/// Cache that records every write it receives.
#[derive(Debug, Default)]
struct RecordingCache {
    entries: HashMap<String, String>,
    writes: Vec<(String, String)>,
}

impl RecordingCache {
    fn seeded(pairs: &[(&str, &str)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            writes: Vec::new(),
        }
    }
}

impl PreferenceCache for RecordingCache {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.writes.push((key.to_string(), value.to_string()));
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

fn accent(hex: &str) -> AccentColor {
    AccentColor::parse(hex).expect("valid hex")
}

fn full_profile() -> PartialPreferences {
    PartialPreferences::empty()
        .with_accent_color(accent("#10B981"))
        .with_font_size(FontSize::Small)
        .with_high_contrast(true)
}

#[test]
fn authoritative_wins_over_cache_and_defaults() {
    let cache = RecordingCache::seeded(&[
        ("theme.accent-color", "#F97316"),
        ("theme.font-size", "large"),
        ("theme.high-contrast", "false"),
    ]);
    let mut controller = ThemeController::new(
        PreferenceResolver::default(),
        cache,
        DocumentStyle::new(),
    );

    let theme = *controller.update_authoritative(full_profile());

    assert_eq!(theme.accent_color(), accent("#10B981"));
    assert_eq!(theme.font_size(), FontSize::Small);
    assert!(theme.high_contrast());

    let cache = controller.cache();
    assert_eq!(
        cache.read("theme.accent-color").as_deref(),
        Some("#10B981")
    );
    assert_eq!(cache.read("theme.font-size").as_deref(), Some("small"));
    assert_eq!(cache.read("theme.high-contrast").as_deref(), Some("true"));
}

#[test]
fn cached_values_apply_without_profile() {
    let cache = RecordingCache::seeded(&[
        ("theme.accent-color", "#7C3AED"),
        ("theme.font-size", "large"),
        ("theme.high-contrast", "true"),
    ]);
    let mut controller = ThemeController::new(
        PreferenceResolver::default(),
        cache,
        DocumentStyle::new(),
    );

    let theme = *controller.mount();

    assert_eq!(theme.accent_color(), accent("#7C3AED"));
    assert_eq!(theme.font_size(), FontSize::Large);
    assert!(theme.high_contrast());
    assert!(controller.cache().writes.is_empty());
}

#[test]
fn bootstrap_is_deterministic_and_idempotent() {
    let mut controller = ThemeController::new(
        PreferenceResolver::default(),
        RecordingCache::default(),
        DocumentStyle::new(),
    );

    let first = *controller.mount();
    assert_eq!(first.accent_color(), AccentColor::DEFAULT);
    assert_eq!(first.font_size(), FontSize::Default);
    assert!(!first.high_contrast());
    assert_eq!(controller.cache().writes.len(), 3);

    let second = *controller.mount();
    assert_eq!(second, first);
    assert_eq!(controller.cache().writes.len(), 3);

    // A reload on the same device sees the seeded cache.
    let (cache, _) = controller.teardown();
    let mut reloaded = ThemeController::new(
        PreferenceResolver::default(),
        cache,
        DocumentStyle::new(),
    );
    assert_eq!(*reloaded.mount(), first);
    assert_eq!(reloaded.cache().writes.len(), 3);
}

#[test]
fn repeated_authoritative_resolution_writes_once() {
    let mut controller = ThemeController::new(
        PreferenceResolver::default(),
        RecordingCache::default(),
        DocumentStyle::new(),
    );

    controller.update_authoritative(full_profile());
    let writes_after_first = controller.cache().writes.len();
    controller.update_authoritative(full_profile());

    assert_eq!(controller.cache().writes.len(), writes_after_first);
}

#[test]
fn explicit_false_is_not_treated_as_unset() {
    let cache = RecordingCache::seeded(&[("theme.high-contrast", "true")]);
    let defaults = ThemeDefaults {
        high_contrast: true,
        ..ThemeDefaults::default()
    };
    let mut controller = ThemeController::new(
        PreferenceResolver::new(defaults),
        cache,
        DocumentStyle::new(),
    );

    let theme = *controller
        .update_authoritative(PartialPreferences::empty().with_high_contrast(false));

    assert!(!theme.high_contrast());
    assert!(!controller.surface().has_class("high-contrast"));
    assert_eq!(
        controller.cache().read("theme.high-contrast").as_deref(),
        Some("false")
    );
}

#[test]
fn sign_out_falls_back_to_cached_profile_values() {
    let mut controller = ThemeController::new(
        PreferenceResolver::default(),
        MemoryCache::new(),
        DocumentStyle::new(),
    );
    controller.mount();
    controller.update_authoritative(full_profile());

    let theme = *controller.update_authoritative(PartialPreferences::empty());

    // The cache was synchronised while signed in, so the device keeps the
    // last known profile look.
    assert_eq!(theme.accent_color(), accent("#10B981"));
    assert_eq!(theme.font_size(), FontSize::Small);
    assert!(theme.high_contrast());
}
