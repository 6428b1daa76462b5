//! Events pushed to the theming core from outside its call path.

/// Payload of the `accentColorChanged` event.
///
/// `hsl_string` is the pre-resolved `"H S% L%"` form of the new accent.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct AccentColorChanged {
    pub hsl_string: String,
}

impl AccentColorChanged {
    pub fn new(hsl_string: impl Into<String>) -> Self {
        Self {
            hsl_string: hsl_string.into(),
        }
    }
}

/// Events accepted by the theme event bus.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type")
)]
pub enum ThemeEvent {
    /// A settings surface changed the accent directly.
    #[cfg_attr(feature = "serde", serde(rename = "accentColorChanged"))]
    AccentColorChanged(AccentColorChanged),
}

impl ThemeEvent {
    pub fn accent_changed(hsl_string: impl Into<String>) -> Self {
        ThemeEvent::AccentColorChanged(AccentColorChanged::new(hsl_string))
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeEvent::AccentColorChanged(_) => "accentColorChanged",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_name_matches_wire_name() {
        assert_eq!(
            ThemeEvent::accent_changed("221 83% 53%").name(),
            "accentColorChanged"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_with_type_tag_and_camel_case_payload() {
        let event = ThemeEvent::accent_changed("160 84% 39%");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "accentColorChanged",
                "hslString": "160 84% 39%"
            })
        );
        let back: ThemeEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
