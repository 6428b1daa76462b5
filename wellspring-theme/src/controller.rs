//! Single owner of the applied theme.
//!
//! All writes to the style surface go through [`ThemeController::apply`] or
//! the targeted accent update used by overrides. The controller is driven by
//! three triggers: mount, a change of the authoritative preferences, and an
//! `accentColorChanged` event.

use tokio::sync::broadcast::{self, error::TryRecvError};
use wellspring_model::{PartialPreferences, PreferenceDocument, ThemeEvent};

use crate::cache::PreferenceCache;
use crate::color::parse_hsl_string;
use crate::events::ThemeEventBus;
use crate::resolver::PreferenceResolver;
use crate::surface::{
    HIGH_CONTRAST_CLASS, PRIMARY_FOREGROUND_HSL_PROPERTY,
    PRIMARY_HOVER_HSL_PROPERTY, PRIMARY_HSL_PROPERTY, StyleSurface,
};
use crate::theme::ResolvedTheme;

/// Owns the resolver, the cache and the style surface, and is the only code
/// that writes theme state.
#[derive(Debug)]
pub struct ThemeController<C, S> {
    resolver: PreferenceResolver,
    cache: C,
    surface: S,
    authoritative: PartialPreferences,
    current: ResolvedTheme,
    overrides: Option<broadcast::Receiver<ThemeEvent>>,
}

impl<C: PreferenceCache, S: StyleSurface> ThemeController<C, S> {
    /// Create a controller. Nothing is applied until [`Self::mount`].
    pub fn new(resolver: PreferenceResolver, cache: C, surface: S) -> Self {
        let defaults = *resolver.defaults();
        Self {
            resolver,
            cache,
            surface,
            authoritative: PartialPreferences::empty(),
            current: ResolvedTheme::new(
                defaults.accent_color,
                defaults.font_size,
                defaults.high_contrast,
            ),
            overrides: None,
        }
    }

    /// Resolve against whatever authoritative preferences are known (usually
    /// none yet) and apply the result.
    pub fn mount(&mut self) -> &ResolvedTheme {
        self.refresh();
        &self.current
    }

    /// Record new authoritative preferences and re-resolve.
    ///
    /// Called when the profile loads after mount, when it is edited elsewhere,
    /// and with an empty value when the user signs out.
    pub fn update_authoritative(
        &mut self,
        authoritative: PartialPreferences,
    ) -> &ResolvedTheme {
        self.authoritative = authoritative;
        self.refresh();
        &self.current
    }

    /// Parse the profile's raw preference fields and re-resolve.
    ///
    /// Malformed fields are logged and count as unset, so they fall through
    /// to the cache and then the defaults.
    pub fn update_profile(
        &mut self,
        document: &PreferenceDocument,
    ) -> &ResolvedTheme {
        let parsed = document.parse();
        for rejected in &parsed.rejected {
            tracing::warn!(
                error = %rejected,
                "ignoring malformed profile preference"
            );
        }
        self.update_authoritative(parsed.preferences)
    }

    fn refresh(&mut self) {
        let resolution =
            self.resolver.resolve(&self.authoritative, &mut self.cache);
        self.apply(resolution.theme);
    }

    /// The theme most recently applied to the surface.
    pub fn current_theme(&self) -> &ResolvedTheme {
        &self.current
    }

    /// Preferences last received from the profile.
    pub fn authoritative(&self) -> &PartialPreferences {
        &self.authoritative
    }

    /// Apply `theme` to the surface and make it current.
    pub fn apply(&mut self, theme: ResolvedTheme) {
        self.apply_accent(&theme);
        self.surface.set_font_size(theme.font_size());
        self.surface
            .set_class(HIGH_CONTRAST_CLASS, theme.high_contrast());
        self.current = theme;
    }

    fn apply_accent(&mut self, theme: &ResolvedTheme) {
        let palette = theme.palette();
        self.surface
            .set_property(PRIMARY_HSL_PROPERTY, &palette.base.to_css_triplet());
        self.surface.set_property(
            PRIMARY_HOVER_HSL_PROPERTY,
            &palette.hover.to_css_triplet(),
        );
        self.surface.set_property(
            PRIMARY_FOREGROUND_HSL_PROPERTY,
            theme.foreground().css_hsl(),
        );
    }

    /// Start listening for accent overrides on `bus`.
    ///
    /// Replaces any previous subscription.
    pub fn subscribe(&mut self, bus: &ThemeEventBus) {
        self.overrides = Some(bus.subscribe());
    }

    /// Whether an override subscription is active.
    pub fn is_subscribed(&self) -> bool {
        self.overrides.is_some()
    }

    /// Drop the override subscription.
    pub fn unsubscribe(&mut self) {
        self.overrides = None;
    }

    /// Handle every queued override without blocking. Returns how many events
    /// were applied.
    pub fn process_pending_overrides(&mut self) -> usize {
        let mut handled = 0;
        loop {
            let Some(receiver) = self.overrides.as_mut() else {
                return handled;
            };
            match receiver.try_recv() {
                Ok(event) => {
                    self.handle_event(&event);
                    handled += 1;
                }
                Err(TryRecvError::Empty) => return handled,
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "theme override receiver lagged");
                }
                Err(TryRecvError::Closed) => {
                    tracing::debug!("theme event bus closed");
                    self.overrides = None;
                    return handled;
                }
            }
        }
    }

    /// Apply one theme event.
    pub fn handle_event(&mut self, event: &ThemeEvent) {
        match event {
            ThemeEvent::AccentColorChanged(payload) => {
                self.apply_accent_override(&payload.hsl_string);
            }
        }
    }

    /// Replace the accent from a pre-resolved HSL string and re-derive the
    /// foreground tone.
    ///
    /// This is a targeted update: the resolver is not run and the cache is not
    /// touched, since the settings surface that sent it owns persistence. A
    /// malformed string falls back to the default accent.
    pub fn apply_accent_override(
        &mut self,
        hsl_string: &str,
    ) -> &ResolvedTheme {
        let theme = match parse_hsl_string(hsl_string) {
            Some(hsl) => self.current.with_accent_hsl(hsl),
            None => {
                let fallback = self.resolver.defaults().accent_color;
                tracing::warn!(
                    hsl_string,
                    fallback = %fallback,
                    "malformed accent override, using default accent"
                );
                ResolvedTheme::new(
                    fallback,
                    self.current.font_size(),
                    self.current.high_contrast(),
                )
            }
        };

        self.apply_accent(&theme);
        self.current = theme;
        tracing::debug!(
            accent = %theme.accent_hsl(),
            foreground = %theme.foreground(),
            "applied accent override"
        );
        &self.current
    }

    /// The device-local cache.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// The style surface being written.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Unsubscribe and hand back the collaborators.
    pub fn teardown(mut self) -> (C, S) {
        self.unsubscribe();
        (self.cache, self.surface)
    }
}
