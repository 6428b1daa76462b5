//! Theme configuration model and loader.

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use wellspring_model::{AccentColor, FontSize};

use crate::util::{non_empty_var, parse_bool};

/// Path to a TOML or JSON config file.
pub const CONFIG_PATH_VAR: &str = "WELLSPRING_THEME_CONFIG_PATH";
/// Inline JSON config.
pub const CONFIG_JSON_VAR: &str = "WELLSPRING_THEME_CONFIG_JSON";
/// Override for `default_accent`.
pub const DEFAULT_ACCENT_VAR: &str = "WELLSPRING_DEFAULT_ACCENT";
/// Override for `default_font_size`.
pub const FONT_SIZE_VAR: &str = "WELLSPRING_FONT_SIZE";
/// Override for `default_high_contrast`.
pub const HIGH_CONTRAST_VAR: &str = "WELLSPRING_HIGH_CONTRAST";

/// Source that produced the theme configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ThemeConfigSource {
    /// Built-in defaults.
    #[default]
    Default,
    /// File named by `$WELLSPRING_THEME_CONFIG_PATH`.
    EnvPath(PathBuf),
    /// `$WELLSPRING_THEME_CONFIG_JSON`.
    EnvInline,
    /// Default file found in the working directory.
    File(PathBuf),
}

/// Theming defaults and wiring knobs.
///
/// The `default_*` values form the lowest precedence tier: they apply only
/// when neither the signed-in profile nor the device cache has a value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Accent used on a first visit and whenever a color fails to parse.
    pub default_accent: AccentColor,
    /// Text size preset applied when no preference exists.
    pub default_font_size: FontSize,
    /// High-contrast mode applied when no preference exists.
    pub default_high_contrast: bool,
    /// Buffer size of the accent override channel. A subscriber that falls
    /// further behind than this skips the oldest overrides.
    pub override_channel_capacity: usize,
    /// Location of the device-local preference cache. Unset means the
    /// platform data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_path: Option<PathBuf>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_accent: AccentColor::DEFAULT,
            default_font_size: FontSize::Default,
            default_high_contrast: false,
            override_channel_capacity: 16,
            cache_path: None,
        }
    }
}

impl ThemeConfig {
    /// Load theme configuration using environment variables.
    /// Evaluation order:
    /// 1) `$WELLSPRING_THEME_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$WELLSPRING_THEME_CONFIG_JSON` (inline JSON),
    /// 3) a `theme.toml`/`theme.json` in the working directory,
    /// 4) defaults if none of the above exist.
    ///
    /// Scalar overrides (`$WELLSPRING_DEFAULT_ACCENT`, `$WELLSPRING_FONT_SIZE`,
    /// `$WELLSPRING_HIGH_CONTRAST`) are applied on top of whichever source won.
    pub fn load_from_env() -> anyhow::Result<(Self, ThemeConfigSource)> {
        let (mut config, source) = Self::load_base()?;
        config.apply_overrides(non_empty_var)?;
        config.validate()?;
        tracing::debug!(?source, "loaded theme configuration");
        Ok((config, source))
    }

    fn load_base() -> anyhow::Result<(Self, ThemeConfigSource)> {
        if let Some(path_str) = non_empty_var(CONFIG_PATH_VAR) {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ThemeConfigSource::EnvPath(path)));
        }

        if let Some(raw) = non_empty_var(CONFIG_JSON_VAR) {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_VAR}"))?;
            return Ok((parsed, ThemeConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file() {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ThemeConfigSource::File(path)));
        }

        Ok((Self::default(), ThemeConfigSource::Default))
    }

    /// Load a file, picking the format from its extension.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read theme config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid theme config {}", path.display())
            }),
            Some("toml") | Some("tml") => {
                toml::from_str(&contents).map_err(|err| {
                    anyhow!("invalid theme config {}: {}", path.display(), err)
                })
            }
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    /// Parse contents of unknown format. `origin` labels errors.
    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        // Try TOML first, then JSON for convenience.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse theme config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    /// Parse an inline JSON config.
    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid theme config json: {err}"))
    }

    /// Apply scalar overrides looked up through `lookup`, which receives the
    /// variable name and returns its value when set.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(DEFAULT_ACCENT_VAR) {
            self.default_accent = AccentColor::parse(&raw)
                .with_context(|| format!("invalid {DEFAULT_ACCENT_VAR}"))?;
        }

        if let Some(raw) = lookup(FONT_SIZE_VAR) {
            self.default_font_size = raw
                .parse::<FontSize>()
                .with_context(|| format!("invalid {FONT_SIZE_VAR}"))?;
        }

        if let Some(raw) = lookup(HIGH_CONTRAST_VAR) {
            self.default_high_contrast = parse_bool(&raw).ok_or_else(|| {
                anyhow!("invalid {HIGH_CONTRAST_VAR}: {raw:?} is not a boolean")
            })?;
        }

        Ok(())
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.override_channel_capacity == 0 {
            return Err(anyhow!(
                "override_channel_capacity must be greater than zero"
            ));
        }
        Ok(())
    }

    fn find_default_file() -> Option<PathBuf> {
        const CANDIDATES: &[&str] =
            &["theme.toml", "theme.json", "config/theme.toml"];

        let cwd = env::current_dir().ok()?;
        CANDIDATES
            .iter()
            .map(|candidate| cwd.join(candidate))
            .find(|path| path.is_file())
    }
}
