use dioxus::prelude::*;
use store::Todo;

use crate::icons::FaPlus;
use crate::Icon;

use super::sibling_keys;

#[component]
pub fn AddTodoButton(on_click: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "btn btn-primary",
            onclick: move |_| on_click.call(()),
            Icon { icon: FaPlus, width: 12, height: 12 }
            " Add todo"
        }
    }
}

#[component]
pub fn TodoList(todos: Vec<Todo>) -> Element {
    let keys = sibling_keys(todos.iter().map(|todo| todo.id.to_string()));

    rsx! {
        ul { class: "todo-list",
            for (key, todo) in keys.into_iter().zip(todos) {
                TodoItem { key: "{key}", todo }
            }
        }
    }
}

#[component]
fn TodoItem(todo: Todo) -> Element {
    let (class, status) = if todo.completed {
        ("todo-item todo-done", "Done")
    } else {
        ("todo-item todo-pending", "In progress")
    };
    rsx! {
        li { class,
            span { class: "todo-title", "{todo.title}" }
            span { class: "badge", "{status}" }
        }
    }
}
