//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that persists each key
//! as a JSON file in a base directory. It is used on desktop to retain
//! locally created users and todos across app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── customUsers.json
//! └── customTodos.json
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/todoboard/` |
//! | Linux | `~/.local/share/todoboard/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\todoboard\` |
//!
//! Writes go to a temporary sibling file which is then renamed over the
//! target, so a reader never sees a half-written collection.

use std::path::PathBuf;

use crate::kv::{KeyValueStore, StoreError};

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        let path = self.entry_path(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(tmp, path)?;
        Ok(())
    }
}
