use dioxus::prelude::*;
use store::Origin;

use crate::icons::{FaListCheck, FaNewspaper, FaTrashCan};
use crate::pipeline::UserRow;
use crate::route::ViewIntent;
use crate::Icon;

use super::sibling_keys;

#[component]
pub fn UserList(
    rows: Vec<UserRow>,
    on_navigate: EventHandler<ViewIntent>,
    on_delete: EventHandler<i64>,
) -> Element {
    // Remote and local users may share an id
    let keys = sibling_keys(rows.iter().map(|row| format!("{:?}-{}", row.origin, row.user.id)));

    rsx! {
        div { class: "card-grid",
            for (key, row) in keys.into_iter().zip(rows) {
                UserCard {
                    key: "{key}",
                    row,
                    on_navigate: on_navigate,
                    on_delete: on_delete,
                }
            }
        }
    }
}

#[component]
fn UserCard(
    row: UserRow,
    on_navigate: EventHandler<ViewIntent>,
    on_delete: EventHandler<i64>,
) -> Element {
    let id = row.user.id;
    let initials = row.user.initials();
    let phone = if row.user.phone.trim().is_empty() {
        "Not specified".to_string()
    } else {
        row.user.phone.clone()
    };

    rsx! {
        div { class: "card user-card",
            div { class: "card-header",
                div { class: "avatar", "{initials}" }
                div {
                    h3 { class: "card-title", "{row.user.name}" }
                    if row.origin == Origin::Local {
                        span { class: "badge badge-local", "Local" }
                    }
                }
            }
            dl { class: "card-fields",
                dt { "Email" }
                dd { "{row.user.email}" }
                dt { "Phone" }
                dd { "{phone}" }
            }
            div { class: "card-actions",
                button {
                    class: "btn",
                    onclick: move |_| on_navigate.call(ViewIntent::TodosFor(id.into())),
                    Icon { icon: FaListCheck, width: 12, height: 12 }
                    " Todos"
                }
                button {
                    class: "btn",
                    onclick: move |_| on_navigate.call(ViewIntent::PostsFor(id.into())),
                    Icon { icon: FaNewspaper, width: 12, height: 12 }
                    " Posts"
                }
                if row.removable {
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_delete.call(id),
                        Icon { icon: FaTrashCan, width: 12, height: 12 }
                        " Delete"
                    }
                }
            }
        }
    }
}
