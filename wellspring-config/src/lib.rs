//! Shared configuration library for Wellspring.
//!
//! Centralizes where theming defaults come from (file, inline JSON or the
//! environment) so the theme engine and any host application agree on the
//! built-in accent, font size and contrast mode.

pub mod models;
pub mod util;

pub use models::theme::{ThemeConfig, ThemeConfigSource};
