//! This crate contains all shared UI for the workspace: the view router, the
//! render pipeline, the application state and the Dioxus components on top.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod app_state;
pub mod debounce;
pub mod pipeline;
pub mod route;
pub mod search;

mod repo;
pub use repo::{load_config, make_local_store, PlatformStore};
#[cfg(not(target_arch = "wasm32"))]
pub use repo::data_dir;

mod board;
pub use board::{use_board, Board, BoardProvider};

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod navbar;
pub use navbar::Navbar;

mod search_bar;
pub use search_bar::SearchBar;

mod breadcrumbs;
pub use breadcrumbs::Breadcrumbs;

mod user_dialog;
pub use user_dialog::NewUserDialog;

mod todo_dialog;
pub use todo_dialog::NewTodoDialog;

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

#[cfg(test)]
mod testing;
