//! Errors raised by the theme engine.

use thiserror::Error;

/// Failures from cache persistence.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Reading or writing the cache file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The cache file could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No location could be determined for the cache.
    #[error("Cache unavailable: {0}")]
    CacheUnavailable(String),
}

/// Result alias for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
