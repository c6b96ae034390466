use dioxus::prelude::*;

use crate::board::use_board;
use crate::route::ViewIntent;

const ROOT_LABEL: &str = "Users";

/// "Users › <current view>". The root link always leads back to the user list.
#[component]
pub fn Breadcrumbs() -> Element {
    let board = use_board();
    let label = board.display.read().breadcrumb().to_string();

    rsx! {
        nav {
            class: "breadcrumbs",
            a {
                href: "#users",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    board.navigate(ViewIntent::UsersList);
                },
                "{ROOT_LABEL}"
            }
            if !label.is_empty() && label != ROOT_LABEL {
                span { class: "breadcrumbs-separator", " › " }
                span { class: "breadcrumbs-current", "{label}" }
            }
        }
    }
}
