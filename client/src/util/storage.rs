//! Raw string key-value storage backends.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LocalStorageBackend` centralizes hydrate-only `window.localStorage` glue so
//! the session layer never touches web-sys directly. During SSR it behaves as
//! an always-empty store. `MemoryStorageBackend` backs tests and any host
//! without a browser.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::Mutex;

/// Failure writing to or removing from a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage rejected write: {0}")]
    Rejected(String),
}

/// Minimal string key-value store.
pub trait StorageBackend: Send + Sync {
    /// Read the raw value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable or refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable or refuses the removal.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage`. No-op outside the hydrate build.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageBackend;

/// A `SecurityError` (storage disabled, private mode) reads as no storage.
#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl StorageBackend for LocalStorageBackend {
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StorageError::Unavailable)
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .remove_item(key)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(())
        }
    }
}

/// In-process map storage.
#[derive(Debug, Default)]
pub struct MemoryStorageBackend {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorageBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing any encoding. Used to simulate corrupt data.
    #[must_use]
    pub fn with_raw(self, key: &str, value: &str) -> Self {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_owned(), value.to_owned());
        }
        self
    }
}

impl StorageBackend for MemoryStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        let Ok(values) = self.values.lock() else {
            return None;
        };
        values.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().map_err(|_| StorageError::Unavailable)?;
        values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().map_err(|_| StorageError::Unavailable)?;
        values.remove(key);
        Ok(())
    }
}
