//! Placeholders shown instead of a record list.

use dioxus::prelude::*;

use crate::pipeline::ViewKind;

#[component]
pub fn LoadingState(kind: ViewKind) -> Element {
    let text = match kind {
        ViewKind::Users => "Loading...",
        ViewKind::Todos => "Loading todos...",
        ViewKind::Posts => "Loading posts...",
        ViewKind::Comments => "Loading comments...",
    };
    rsx! {
        div { class: "state state-loading",
            div { class: "spinner" }
            p { "{text}" }
        }
    }
}

/// No records matched. The todo view passes an "Add todo" button as children.
#[component]
pub fn EmptyState(kind: ViewKind, children: Element) -> Element {
    let (title, hint) = match kind {
        ViewKind::Users => ("No users found", "Try changing the search terms"),
        ViewKind::Todos => ("No todos found", "This user has no todos yet"),
        ViewKind::Posts => ("No posts found", "This user has no posts yet"),
        ViewKind::Comments => ("No comments found", "This post has no comments yet"),
    };
    rsx! {
        div { class: "state state-empty",
            h3 { "{title}" }
            p { "{hint}" }
            {children}
        }
    }
}

#[component]
pub fn ErrorState(kind: ViewKind) -> Element {
    let title = match kind {
        ViewKind::Comments => "Failed to load comments",
        _ => "Failed to load posts",
    };
    rsx! {
        div { class: "state state-error",
            h3 { "{title}" }
            p { "Try refreshing the page" }
        }
    }
}
