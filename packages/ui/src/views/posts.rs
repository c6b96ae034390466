use dioxus::prelude::*;
use store::{Comment, Post};

use crate::icons::FaComments;
use crate::route::ViewIntent;
use crate::Icon;

#[component]
pub fn PostList(posts: Vec<Post>, on_navigate: EventHandler<ViewIntent>) -> Element {
    rsx! {
        div { class: "card-list",
            for post in posts {
                PostCard { key: "{post.id}", post: post.clone(), on_navigate }
            }
        }
    }
}

#[component]
fn PostCard(post: Post, on_navigate: EventHandler<ViewIntent>) -> Element {
    let id = post.id;
    rsx! {
        article { class: "card post-card",
            h3 { class: "card-title", "{post.title}" }
            p { class: "card-text", "{post.body}" }
            div { class: "card-actions",
                button {
                    class: "btn",
                    onclick: move |_| on_navigate.call(ViewIntent::CommentsFor(id.into())),
                    Icon { icon: FaComments, width: 12, height: 12 }
                    " Comments"
                }
            }
        }
    }
}

#[component]
pub fn CommentList(comments: Vec<Comment>) -> Element {
    rsx! {
        div { class: "card-list",
            for comment in comments {
                CommentCard { key: "{comment.id}", comment: comment.clone() }
            }
        }
    }
}

#[component]
fn CommentCard(comment: Comment) -> Element {
    let initials = comment.initials();
    rsx! {
        div { class: "card comment-card",
            div { class: "card-header",
                div { class: "avatar avatar-small", "{initials}" }
                div {
                    h4 { class: "card-title", "{comment.name}" }
                    span { class: "muted", "{comment.email}" }
                }
            }
            p { class: "card-text", "{comment.body}" }
        }
    }
}
