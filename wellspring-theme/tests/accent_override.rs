//! The `accentColorChanged` override path and contrast decisions.

use wellspring_model::{
    AccentColor, FontSize, PartialPreferences, PreferenceDocument, ThemeEvent,
};
use wellspring_theme::surface::{
    PRIMARY_FOREGROUND_HSL_PROPERTY, PRIMARY_HSL_PROPERTY,
};
use wellspring_theme::{
    DocumentStyle, ForegroundTone, MemoryCache, PreferenceCache,
    PreferenceResolver, ThemeController, ThemeEventBus, ThemeEventPublisher,
    hex_to_hsl, luminance,
};

fn mounted() -> ThemeController<MemoryCache, DocumentStyle> {
    let mut controller = ThemeController::new(
        PreferenceResolver::default(),
        MemoryCache::new(),
        DocumentStyle::new(),
    );
    controller.mount();
    controller
}

#[test]
fn published_override_updates_foreground_immediately() {
    let bus = ThemeEventBus::new(8);
    let mut controller = mounted();
    controller.subscribe(&bus);
    assert_eq!(
        controller.current_theme().foreground(),
        ForegroundTone::Light
    );

    // Pale yellow accent needs dark text.
    bus.publish(ThemeEvent::accent_changed("54 92% 95%"));
    assert_eq!(controller.process_pending_overrides(), 1);

    let theme = controller.current_theme();
    assert_eq!(theme.foreground(), ForegroundTone::Dark);
    assert_eq!(
        controller.surface().property(PRIMARY_FOREGROUND_HSL_PROPERTY),
        Some(ForegroundTone::Dark.css_hsl())
    );
    assert_eq!(
        controller.surface().property(PRIMARY_HSL_PROPERTY),
        Some("54 92% 95%")
    );
}

#[test]
fn override_does_not_rerun_resolver_or_touch_other_attributes() {
    let bus = ThemeEventBus::new(8);
    let mut controller = mounted();
    controller.update_authoritative(
        PartialPreferences::empty()
            .with_font_size(FontSize::Large)
            .with_high_contrast(true),
    );
    controller.subscribe(&bus);
    let cached_accent = controller.cache().read("theme.accent-color");

    bus.publish_accent("222 47% 11%");
    controller.process_pending_overrides();

    let theme = *controller.current_theme();
    assert_eq!(theme.font_size(), FontSize::Large);
    assert!(theme.high_contrast());
    assert_eq!(theme.foreground(), ForegroundTone::Light);
    assert_eq!(controller.cache().read("theme.accent-color"), cached_accent);
}

#[test]
fn latest_of_several_overrides_wins() {
    let bus = ThemeEventBus::new(8);
    let mut controller = mounted();
    controller.subscribe(&bus);

    bus.publish_accent("0 0% 100%");
    bus.publish_accent("0 0% 0%");
    assert_eq!(controller.process_pending_overrides(), 2);

    assert_eq!(
        controller.current_theme().foreground(),
        ForegroundTone::Light
    );
}

#[test]
fn teardown_unsubscribes_from_bus() {
    let bus = ThemeEventBus::new(8);
    let mut controller = mounted();
    controller.subscribe(&bus);
    assert_eq!(bus.subscriber_count(), 1);

    let _ = controller.teardown();
    assert_eq!(bus.subscriber_count(), 0);
    assert_eq!(bus.publish_accent("0 0% 100%"), 0);
}

#[test]
fn malformed_override_keeps_page_usable() {
    let bus = ThemeEventBus::new(8);
    let mut controller = mounted();
    controller.subscribe(&bus);

    bus.publish_accent("hsl(oops)");
    assert_eq!(controller.process_pending_overrides(), 1);

    let theme = controller.current_theme();
    assert_eq!(theme.accent_color(), AccentColor::DEFAULT);
    assert_eq!(
        controller.surface().property(PRIMARY_HSL_PROPERTY),
        Some("221 83% 53%")
    );
}

#[test]
fn contrast_decision_at_the_extremes() {
    let white = AccentColor::parse("#FFFFFF").unwrap();
    assert!(luminance(white.rgb()) > 0.9);
    assert_eq!(ForegroundTone::for_rgb(white.rgb()), ForegroundTone::Dark);

    let near_black = AccentColor::parse("#101010").unwrap();
    assert!(luminance(near_black.rgb()) < 0.05);
    assert_eq!(
        ForegroundTone::for_rgb(near_black.rgb()),
        ForegroundTone::Light
    );

    assert_eq!(ForegroundTone::from_luminance(0.45), ForegroundTone::Dark);
}

#[test]
fn malformed_profile_accent_falls_back_to_default() {
    assert!(hex_to_hsl("not-a-color").is_none());

    let mut controller = ThemeController::new(
        PreferenceResolver::default(),
        MemoryCache::new(),
        DocumentStyle::new(),
    );
    let document = PreferenceDocument {
        accent_color: Some("not-a-color".into()),
        font_size: Some("large".into()),
        high_contrast: None,
    };

    let theme = *controller.update_profile(&document);

    assert_eq!(theme.accent_color(), AccentColor::DEFAULT);
    assert_eq!(theme.font_size(), FontSize::Large);
    assert!(controller.authoritative().accent_color.is_none());
    assert_eq!(
        controller.cache().read("theme.accent-color").as_deref(),
        Some("#2563EB")
    );
    assert_eq!(
        controller.surface().property(PRIMARY_HSL_PROPERTY),
        Some("221 83% 53%")
    );
}

#[test]
fn malformed_profile_accent_keeps_cached_accent() {
    let mut cache = MemoryCache::new();
    cache.write("theme.accent-color", "#10B981").unwrap();
    let mut controller = ThemeController::new(
        PreferenceResolver::default(),
        cache,
        DocumentStyle::new(),
    );
    let document = PreferenceDocument {
        accent_color: Some("#12345".into()),
        ..PreferenceDocument::default()
    };

    let theme = *controller.update_profile(&document);

    assert_eq!(theme.accent_color(), AccentColor::parse("#10B981").unwrap());
}
