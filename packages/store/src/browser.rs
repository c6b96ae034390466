//! # Browser `localStorage` key-value store
//!
//! [`BrowserStore`] is the [`KeyValueStore`] used on the **web platform**. It
//! reads and writes `window.localStorage` through `web-sys`, so data written
//! by the page survives reloads.
//!
//! ## Error handling
//!
//! Reads swallow errors (no window, storage disabled by privacy settings, ...)
//! and report the key as absent, degrading to "nothing stored locally".
//! Writes surface [`StoreError::Browser`] so the caller can log them.

use crate::kv::{KeyValueStore, StoreError};

/// localStorage-backed KeyValueStore for the web platform.
///
/// Zero-size and `Clone`: the `Storage` handle is looked up on every call,
/// because `web_sys::Storage` is not `Send` and cheap to obtain.
#[derive(Clone, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage()
            .ok_or_else(|| StoreError::Browser("localStorage is not available".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::Browser(format!("{e:?}")))
    }
}
