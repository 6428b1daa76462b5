//! Document-wide style application surface.

use std::collections::{BTreeMap, BTreeSet};

use wellspring_model::FontSize;

/// Accent color.
pub const PRIMARY_HSL_PROPERTY: &str = "--primary-hsl";
/// Text color drawn on the accent.
pub const PRIMARY_FOREGROUND_HSL_PROPERTY: &str = "--primary-foreground-hsl";
/// Accent hover shade.
pub const PRIMARY_HOVER_HSL_PROPERTY: &str = "--primary-hover-hsl";
/// Root class toggled by high-contrast mode.
pub const HIGH_CONTRAST_CLASS: &str = "high-contrast";

/// Write-only view of the document's custom properties and class list.
pub trait StyleSurface {
    /// Set a custom property on the document root.
    fn set_property(&mut self, name: &str, value: &str);

    /// Add or remove a class on the document root.
    fn set_class(&mut self, class: &str, enabled: bool);

    /// Make `size` the only active `text-size-*` class.
    fn set_font_size(&mut self, size: FontSize) {
        for candidate in FontSize::ALL {
            self.set_class(candidate.class_name(), candidate == size);
        }
    }
}

impl<S: StyleSurface + ?Sized> StyleSurface for &mut S {
    fn set_property(&mut self, name: &str, value: &str) {
        (**self).set_property(name, value)
    }

    fn set_class(&mut self, class: &str, enabled: bool) {
        (**self).set_class(class, enabled)
    }
}

/// In-memory projection of the document root's style state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentStyle {
    properties: BTreeMap<String, String>,
    classes: BTreeSet<String>,
}

impl DocumentStyle {
    /// Empty style state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a custom property.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Whether `class` is active.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Active classes in sorted order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}

impl StyleSurface for DocumentStyle {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn set_class(&mut self, class: &str, enabled: bool) {
        if enabled {
            self.classes.insert(class.to_string());
        } else {
            self.classes.remove(class);
        }
    }
}
