pub mod config;
pub mod kv;
pub mod local;
pub mod models;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::BrowserStore;

pub use config::AppConfig;
pub use kv::{KeyValueStore, StoreError};
pub use local::LocalStore;
pub use models::{Comment, IdAllocator, NewTodo, NewUser, Origin, Post, Todo, User};
