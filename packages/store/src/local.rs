//! # Local collections: user-created users and todos
//!
//! [`LocalStore`] reads and writes the two collections the user can edit,
//! serialised as JSON arrays under two keys of a [`KeyValueStore`]:
//!
//! | Key (default) | Contents |
//! |---------------|----------|
//! | `"customUsers"` | `[User]` |
//! | `"customTodos"` | `[Todo]` |
//!
//! A missing key, or a value that does not parse as the expected array,
//! reads as an empty collection. Every `set_*` overwrites the whole
//! collection in a single backend write.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::StorageConfig;
use crate::kv::{KeyValueStore, StoreError};
use crate::models::{Todo, User};

pub const DEFAULT_USERS_KEY: &str = "customUsers";
pub const DEFAULT_TODOS_KEY: &str = "customTodos";

/// The locally persisted users and todos, backed by a KeyValueStore.
#[derive(Clone, Debug)]
pub struct LocalStore<S: KeyValueStore> {
    store: S,
    users_key: String,
    todos_key: String,
}

impl<S: KeyValueStore> LocalStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_keys(store, DEFAULT_USERS_KEY, DEFAULT_TODOS_KEY)
    }

    pub fn with_keys(store: S, users_key: &str, todos_key: &str) -> Self {
        Self {
            store,
            users_key: users_key.to_string(),
            todos_key: todos_key.to_string(),
        }
    }

    pub fn from_config(store: S, config: &StorageConfig) -> Self {
        Self::with_keys(store, &config.users_key, &config.todos_key)
    }

    pub fn get_custom_users(&self) -> Vec<User> {
        self.read_collection(&self.users_key)
    }

    pub fn set_custom_users(&self, users: &[User]) -> Result<(), StoreError> {
        self.write_collection(&self.users_key, users)
    }

    pub fn get_custom_todos(&self) -> Vec<Todo> {
        self.read_collection(&self.todos_key)
    }

    pub fn set_custom_todos(&self, todos: &[Todo]) -> Result<(), StoreError> {
        self.write_collection(&self.todos_key, todos)
    }

    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let Some(raw) = self.store.get(key) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("Ignoring unreadable local collection {key}: {e}");
                Vec::new()
            }
        }
    }

    fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(items)?;
        self.store.set(key, &raw)
    }
}
