//! # Key-value persistence seam
//!
//! [`KeyValueStore`] is the small synchronous interface every storage backend
//! implements: read a string by key, overwrite a string by key. The collection
//! logic in [`crate::LocalStore`] is written once against this trait and works
//! unchanged on the browser's `localStorage` ([`crate::BrowserStore`]), on the
//! filesystem ([`crate::FileStore`]) and in memory ([`crate::MemoryStore`]).
//!
//! Reads never fail: a backend that cannot read a key reports it as absent.
//! Writes return a [`StoreError`] so callers can log the failure.

use thiserror::Error;

/// Errors from writing to a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not serialise collection: {0}")]
    Json(#[from] serde_json::Error),

    /// The browser refused the write (quota exceeded, storage disabled, ...).
    #[error("browser storage unavailable: {0}")]
    Browser(String),

    /// A writer panicked while holding the in-memory map.
    #[error("in-memory store is poisoned")]
    Poisoned,
}

/// Synchronous string storage addressed by key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
