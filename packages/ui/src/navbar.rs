use dioxus::prelude::*;

use crate::board::use_board;
use crate::icons::FaUserPlus;
use crate::{Icon, SearchBar};

/// Top bar: title, search box and the "Add user" button.
#[component]
pub fn Navbar() -> Element {
    let board = use_board();

    rsx! {
        header {
            class: "navbar",
            h1 { class: "navbar-title", "Todoboard" }
            SearchBar {}
            button {
                class: "btn btn-primary",
                onclick: move |_| board.open_user_form(),
                Icon { icon: FaUserPlus, width: 14, height: 14 }
                " Add user"
            }
        }
    }
}
