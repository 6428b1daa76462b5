//! JSON-file backed cache persisted in the platform data directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use wellspring_config::ThemeConfig;

use crate::{Result, ThemeError};

use super::PreferenceCache;

pub(crate) const THEME_CACHE_FILE: &str = "theme-cache.json";

/// Write-through cache stored as a flat JSON object of strings.
#[derive(Debug)]
pub struct FileCache {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileCache {
    /// Open the cache in the platform data directory.
    pub fn open_default() -> Result<Self> {
        let proj_dirs = ProjectDirs::from("", "wellspring", "wellspring")
            .ok_or_else(|| {
                ThemeError::CacheUnavailable(
                    "unable to determine data directory".to_string(),
                )
            })?;
        Ok(Self::open(proj_dirs.data_dir().join(THEME_CACHE_FILE)))
    }

    /// Open the configured cache, or the platform default when unset.
    pub fn from_config(config: &ThemeConfig) -> Result<Self> {
        match &config.cache_path {
            Some(path) => Ok(Self::open(path.clone())),
            None => Self::open_default(),
        }
    }

    /// Open a cache at `path`.
    ///
    /// A missing file starts empty. An unreadable or corrupt file is logged
    /// and also starts empty; the next write replaces it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match Self::load(&path) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "theme cache unreadable, starting empty"
                );
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PreferenceCache for FileCache {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        if self.entries.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(THEME_CACHE_FILE);

        let mut cache = FileCache::open(&path);
        cache.write("theme.font-size", "large").unwrap();
        cache.write("theme.high-contrast", "true").unwrap();

        let reopened = FileCache::open(&path);
        assert_eq!(reopened.read("theme.font-size").as_deref(), Some("large"));
        assert_eq!(
            reopened.read("theme.high-contrast").as_deref(),
            Some("true")
        );
    }

    #[test]
    fn corrupt_file_starts_empty_and_is_replaced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(THEME_CACHE_FILE);
        fs::write(&path, "{ not json").unwrap();

        let mut cache = FileCache::open(&path);
        assert_eq!(cache.read("theme.font-size"), None);

        cache.write("theme.font-size", "small").unwrap();
        let reopened = FileCache::open(&path);
        assert_eq!(reopened.read("theme.font-size").as_deref(), Some("small"));
    }

    #[test]
    fn from_config_uses_configured_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.json");
        let config = ThemeConfig {
            cache_path: Some(path.clone()),
            ..ThemeConfig::default()
        };

        let cache = FileCache::from_config(&config).unwrap();
        assert_eq!(cache.path(), path.as_path());
    }
}
