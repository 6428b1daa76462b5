//! Device-local preference cache.
//!
//! A synchronous string key/value store keyed by
//! [`PreferenceAttribute::cache_key`]. Values are opaque strings produced by
//! [`PreferenceValue::encode`]. Nothing in the cache is versioned.

pub mod file;
pub mod memory;

pub use file::FileCache;
pub use memory::MemoryCache;

use wellspring_model::{PartialPreferences, PreferenceAttribute, PreferenceValue};

use crate::Result;

/// Synchronous string store backing the cached preference tier.
pub trait PreferenceCache {
    /// Stored value for `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<C: PreferenceCache + ?Sized> PreferenceCache for &mut C {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}

/// Read every attribute from the cache.
///
/// Values that fail to decode are treated as absent.
pub fn read_cached<C: PreferenceCache + ?Sized>(
    cache: &C,
) -> PartialPreferences {
    let mut cached = PartialPreferences::empty();
    for attribute in PreferenceAttribute::ALL {
        let Some(raw) = cache.read(attribute.cache_key()) else {
            continue;
        };
        match PreferenceValue::decode(attribute, &raw) {
            Ok(value) => cached.set(value),
            Err(err) => tracing::warn!(
                %attribute,
                error = %err,
                "ignoring corrupt cached preference"
            ),
        }
    }
    cached
}
