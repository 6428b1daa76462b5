//! Core data model definitions shared across Wellspring crates.
#![allow(missing_docs)]

pub mod color;
pub mod error;
pub mod events;
pub mod preferences;

pub use color::{AccentColor, Hsl, Rgb};
pub use error::{ModelError, Result as ModelResult};
pub use events::{AccentColorChanged, ThemeEvent};
pub use preferences::{
    DocumentParse, FontSize, PartialPreferences, PreferenceAttribute,
    PreferenceDocument, PreferenceValue,
};
