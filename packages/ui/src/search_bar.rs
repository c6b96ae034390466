use dioxus::prelude::*;

use crate::board::use_board;
use crate::debounce::Debouncer;

/// Search box. Each keystroke waits out the debounce window; only the last
/// one in a burst re-renders the current view with the typed query.
#[component]
pub fn SearchBar() -> Element {
    let board = use_board();
    let mut query = use_signal(String::new);
    let debouncer = use_hook(|| Debouncer::new(board.config.peek().search.debounce()));

    let oninput = move |evt: FormEvent| {
        let value = evt.value();
        query.set(value.clone());
        let debouncer = debouncer.clone();
        spawn(async move {
            if debouncer.settle().await {
                board.search(&value);
            }
        });
    };

    rsx! {
        input {
            class: "search-input",
            r#type: "search",
            placeholder: "Search...",
            value: query(),
            oninput: oninput,
        }
    }
}
