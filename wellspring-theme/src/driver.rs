//! Async trigger loop around a [`ThemeController`].

use tokio::sync::{broadcast, watch};
use wellspring_model::{PartialPreferences, ThemeEvent};

use crate::cache::PreferenceCache;
use crate::controller::ThemeController;
use crate::events::ThemeEventBus;
use crate::surface::StyleSurface;

/// Runs a controller on one task so resolution never overlaps itself.
///
/// The profile channel carries `None` until the signed-in profile has loaded
/// (or after sign-out). Every change re-runs resolution; every
/// `accentColorChanged` event applies a targeted accent update.
#[derive(Debug)]
pub struct ThemeDriver<C, S> {
    controller: ThemeController<C, S>,
    profile: watch::Receiver<Option<PartialPreferences>>,
    overrides: broadcast::Receiver<ThemeEvent>,
}

impl<C: PreferenceCache, S: StyleSurface> ThemeDriver<C, S> {
    /// Subscribe to `bus` and take ownership of `controller`.
    pub fn new(
        controller: ThemeController<C, S>,
        profile: watch::Receiver<Option<PartialPreferences>>,
        bus: &ThemeEventBus,
    ) -> Self {
        Self {
            controller,
            profile,
            overrides: bus.subscribe(),
        }
    }

    /// Mount, then react to triggers until the profile source goes away.
    /// Returns the controller for teardown.
    ///
    /// A closed bus only ends override handling; profile changes keep being
    /// resolved.
    pub async fn run(mut self) -> ThemeController<C, S> {
        let initial = self.profile.borrow_and_update().clone();
        match initial {
            Some(prefs) => {
                self.controller.update_authoritative(prefs);
            }
            None => {
                self.controller.mount();
            }
        }

        let mut bus_open = true;
        loop {
            tokio::select! {
                biased;

                event = self.overrides.recv(), if bus_open => match event {
                    Ok(event) => self.controller.handle_event(&event),
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "theme driver lagged behind overrides");
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        tracing::debug!("theme event bus closed, ignoring overrides");
                        bus_open = false;
                    }
                },

                changed = self.profile.changed() => {
                    if changed.is_err() {
                        tracing::debug!("profile source dropped, stopping driver");
                        break;
                    }
                    let prefs = self
                        .profile
                        .borrow_and_update()
                        .clone()
                        .unwrap_or_default();
                    self.controller.update_authoritative(prefs);
                }
            }
        }

        self.controller
    }
}
