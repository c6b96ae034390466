use dioxus::prelude::*;
use store::NewUser;

use crate::app_state::MutationError;

/// Form for creating a local user. Inputs are trimmed; a blank name keeps the form open.
#[component]
pub fn NewUserDialog(
    on_create: EventHandler<NewUser>,
    on_cancel: EventHandler<()>,
    error: Option<MutationError>,
) -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_create.call(NewUser {
            name: name().trim().to_string(),
            email: email().trim().to_string(),
            phone: phone().trim().to_string(),
        });
    };

    rsx! {
        form {
            class: "dialog",
            onsubmit: handle_submit,
            h2 { class: "dialog-title", "New user" }

            div { class: "field",
                label { r#for: "new-user-name", "Name" }
                input {
                    id: "new-user-name",
                    r#type: "text",
                    placeholder: "Leanne Graham",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
            }
            div { class: "field",
                label { r#for: "new-user-email", "Email" }
                input {
                    id: "new-user-email",
                    r#type: "email",
                    placeholder: "leanne@example.com",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
            }
            div { class: "field",
                label { r#for: "new-user-phone", "Phone" }
                input {
                    id: "new-user-phone",
                    r#type: "tel",
                    value: phone(),
                    oninput: move |evt: FormEvent| phone.set(evt.value()),
                }
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
