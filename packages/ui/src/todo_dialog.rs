use dioxus::prelude::*;
use store::NewTodo;

use crate::app_state::MutationError;

/// Form for adding a todo to the user the dialog was opened for.
#[component]
pub fn NewTodoDialog(
    on_create: EventHandler<NewTodo>,
    on_cancel: EventHandler<()>,
    error: Option<MutationError>,
) -> Element {
    let mut title = use_signal(String::new);
    let mut completed = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_create.call(NewTodo {
            title: title().trim().to_string(),
            completed: completed(),
        });
    };

    rsx! {
        form {
            class: "dialog",
            onsubmit: handle_submit,
            h2 { class: "dialog-title", "New todo" }

            div { class: "field",
                label { r#for: "new-todo-title", "Title" }
                input {
                    id: "new-todo-title",
                    r#type: "text",
                    value: title(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }
            }
            div { class: "field field-inline",
                input {
                    id: "new-todo-completed",
                    r#type: "checkbox",
                    checked: completed(),
                    onchange: move |evt: FormEvent| completed.set(evt.checked()),
                }
                label { r#for: "new-todo-completed", "Completed" }
            }

            if let Some(err) = error {
                p { class: "form-error", "{err}" }
            }

            div { class: "dialog-actions",
                button { class: "btn btn-primary", r#type: "submit", "Save" }
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
