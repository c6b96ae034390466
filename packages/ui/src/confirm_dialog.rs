use dioxus::prelude::*;

/// Yes/No prompt. `on_answer` receives `true` for Yes.
#[component]
pub fn ConfirmDialog(message: String, on_answer: EventHandler<bool>) -> Element {
    rsx! {
        div { class: "dialog",
            p { class: "dialog-message", "{message}" }
            div { class: "dialog-actions",
                button {
                    class: "btn btn-danger",
                    onclick: move |_| on_answer.call(true),
                    "Yes"
                }
                button {
                    class: "btn",
                    onclick: move |_| on_answer.call(false),
                    "No"
                }
            }
        }
    }
}
