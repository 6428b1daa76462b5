//! Explicit override channel between a settings surface and the theme core.

use tokio::sync::broadcast;
use wellspring_config::ThemeConfig;
use wellspring_model::ThemeEvent;

/// Seam through which a settings surface pushes theme events without calling
/// into the theme core directly.
pub trait ThemeEventPublisher {
    /// Returns the number of subscribers that will see the event.
    fn publish(&self, event: ThemeEvent) -> usize;
}

/// In-process event bus that fans `accentColorChanged` notifications out to
/// every subscribed theme controller.
#[derive(Debug, Clone)]
pub struct ThemeEventBus {
    sender: broadcast::Sender<ThemeEvent>,
}

impl ThemeEventBus {
    /// Create a bus buffering up to `capacity` events per subscriber. A zero
    /// capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Bus sized by `override_channel_capacity`.
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self::new(config.override_channel_capacity)
    }

    /// Dropping the returned receiver unsubscribes.
    pub fn subscribe(&self) -> broadcast::Receiver<ThemeEvent> {
        self.sender.subscribe()
    }

    /// Number of live receivers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Publish an `accentColorChanged` event carrying `hsl_string`.
    pub fn publish_accent(&self, hsl_string: impl Into<String>) -> usize {
        self.publish(ThemeEvent::accent_changed(hsl_string))
    }
}

impl ThemeEventPublisher for ThemeEventBus {
    fn publish(&self, event: ThemeEvent) -> usize {
        let name = event.name();
        // No subscribers is not an error; nobody is rendering a theme.
        let delivered = self.sender.send(event).unwrap_or(0);
        tracing::trace!(event = name, delivered, "published theme event");
        delivered
    }
}
