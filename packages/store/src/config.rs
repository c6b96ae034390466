//! # Application configuration: `todoboard.toml`
//!
//! Defines the optional TOML configuration file read at start-up on native
//! platforms (filename: [`AppConfig::filename`] = `"todoboard.toml"`, looked up
//! in the platform data directory). The web build always uses the defaults.
//!
//! ## Structure
//!
//! ```toml
//! [remote]
//! base_url = "https://jsonplaceholder.typicode.com"
//!
//! [search]
//! debounce_ms = 300
//!
//! [storage]
//! users_key = "customUsers"
//! todos_key = "customTodos"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`RemoteConfig`] | Base URL of the read-only JSON API. |
//! | [`SearchConfig`] | Quiet window before a search keystroke is evaluated. |
//! | [`StorageConfig`] | Keys under which the local collections are stored. |
//!
//! Every field has a serde default, so a missing or partial file is
//! equivalent to the default configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::local::{DEFAULT_TODOS_KEY, DEFAULT_USERS_KEY};

/// Top-level configuration stored in `todoboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Milliseconds of input quiescence before a search runs.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_users_key")]
    pub users_key: String,
    #[serde(default = "default_todos_key")]
    pub todos_key: String,
}

fn default_base_url() -> String {
    "https://jsonplaceholder.typicode.com".to_string()
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_users_key() -> String {
    DEFAULT_USERS_KEY.to_string()
}

fn default_todos_key() -> String {
    DEFAULT_TODOS_KEY.to_string()
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            users_key: default_users_key(),
            todos_key: default_todos_key(),
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "todoboard.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.search.debounce(), Duration::from_millis(300));
        assert_eq!(config.storage.users_key, "customUsers");
        assert_eq!(config.remote.base_url, "https://jsonplaceholder.typicode.com");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = AppConfig::from_toml("[search]\ndebounce_ms = 50\n").unwrap();
        assert_eq!(config.search.debounce_ms, 50);
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = AppConfig::default();
        config.remote.base_url = "http://localhost:3000".to_string();
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }
}
