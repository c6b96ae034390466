//! Shared storage and configuration constructors for all platforms.
//!
//! Returns a [`store::LocalStore`] backed by the appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::BrowserStore`]
//! - **Desktop** (native): JSON files via [`store::FileStore`] under `<data_dir>/todoboard/`
//! - **WASM without `web`**: in-memory via [`store::MemoryStore`]

use store::{AppConfig, LocalStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::BrowserStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

/// Platform data directory for this application.
#[cfg(not(target_arch = "wasm32"))]
pub fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("todoboard")
}

/// Create the platform-appropriate store for the local collections.
pub fn make_local_store(config: &AppConfig) -> LocalStore<PlatformStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    let backend = store::BrowserStore::new();
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    let backend = store::MemoryStore::new();
    #[cfg(not(target_arch = "wasm32"))]
    let backend = store::FileStore::new(data_dir());

    LocalStore::from_config(backend, &config.storage)
}

/// Read `todoboard.toml` from the data directory, falling back to defaults.
///
/// The web build has no config file and always uses the defaults.
pub fn load_config() -> AppConfig {
    #[cfg(target_arch = "wasm32")]
    {
        AppConfig::default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = data_dir().join(AppConfig::filename());
        let Ok(text) = std::fs::read_to_string(&path) else {
            return AppConfig::default();
        };
        match AppConfig::from_toml(&text) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring invalid {}: {e}", path.display());
                AppConfig::default()
            }
        }
    }
}
