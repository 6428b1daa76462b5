//! Adaptive theming engine for the Wellspring dashboard.
//!
//! Reconciles the signed-in profile's preferences, the device-local cache and
//! built-in defaults into one applied theme, and keeps the text-on-accent
//! color legible whichever accent wins.
//!
//! # Architecture
//!
//! - `color`: hex/HSL/RGB conversions, relative luminance and the
//!   foreground tone decision
//! - `resolver`: three-tier precedence with cache write-back
//! - `cache`: the device-local string store (in-memory and JSON file)
//! - `surface`: document-wide custom properties and classes
//! - `events`: the `accentColorChanged` override bus
//! - `controller`: the single writer of theme state
//! - `driver`: async loop wiring profile changes and overrides to a controller
//!
//! # Usage
//!
//! ```rust,ignore
//! use wellspring_theme::{
//!     DocumentStyle, MemoryCache, PreferenceResolver, ThemeController,
//!     ThemeDefaults, ThemeEventBus,
//! };
//!
//! let resolver = PreferenceResolver::new(ThemeDefaults::default());
//! let mut controller =
//!     ThemeController::new(resolver, MemoryCache::new(), DocumentStyle::new());
//! controller.mount();
//!
//! // Settings surface pushes a new accent out of band.
//! let bus = ThemeEventBus::new(16);
//! controller.subscribe(&bus);
//! bus.publish_accent("160 84% 39%");
//! controller.process_pending_overrides();
//! ```

pub mod cache;
pub mod color;
pub mod controller;
pub mod driver;
pub mod error;
pub mod events;
pub mod resolver;
pub mod surface;
pub mod theme;

pub use cache::{FileCache, MemoryCache, PreferenceCache, read_cached};
pub use color::{
    AccentPalette, FOREGROUND_LUMINANCE_THRESHOLD, ForegroundTone,
    hex_to_hsl, hsl_string_to_rgb, hsl_to_rgb, luminance, parse_hsl_string,
    rgb_to_hsl,
};
pub use controller::ThemeController;
pub use driver::ThemeDriver;
pub use error::{Result, ThemeError};
pub use events::{ThemeEventBus, ThemeEventPublisher};
pub use resolver::{PreferenceResolver, Resolution, ThemeDefaults};
pub use surface::{DocumentStyle, StyleSurface};
pub use theme::ResolvedTheme;
