use dioxus::prelude::*;

use crate::app_state::{Modal, MutationError};
use crate::board::{use_board, Board};
use crate::pipeline::{RenderModel, Screen, ViewKind};
use crate::route::ViewIntent;
use crate::{Breadcrumbs, ConfirmDialog, Navbar, NewTodoDialog, NewUserDialog};

use super::{
    AddTodoButton, CommentList, EmptyState, ErrorState, LoadingState, ModalOverlay, PostList,
    TodoList, UserList,
};

/// The whole page: header, breadcrumbs, the current screen and any open modal.
#[component]
pub fn BoardView() -> Element {
    let board = use_board();
    let screen = board.display.read().screen().clone();
    let modal = board.state.read().modal();

    rsx! {
        div { class: "app",
            Navbar {}
            main { class: "content",
                Breadcrumbs {}
                ScreenContent { screen }
            }
            ModalLayer { modal }
        }
    }
}

#[component]
fn ScreenContent(screen: Screen) -> Element {
    let board = use_board();
    let on_navigate = move |intent: ViewIntent| board.navigate(intent);
    let todo_owner = match screen.intent {
        ViewIntent::TodosFor(id) => id.get(),
        _ => None,
    };

    match screen.model {
        RenderModel::Loading(kind) => rsx! { LoadingState { kind } },
        RenderModel::Failed(kind) => rsx! { ErrorState { kind } },
        RenderModel::Empty(ViewKind::Todos) => rsx! {
            EmptyState { kind: ViewKind::Todos,
                if let Some(user_id) = todo_owner {
                    AddTodoButton { on_click: move |_| board.open_todo_form(user_id) }
                }
            }
        },
        RenderModel::Empty(kind) => rsx! { EmptyState { kind } },
        RenderModel::Users(rows) => rsx! {
            UserList {
                rows,
                on_navigate,
                on_delete: move |user_id| board.request_delete(user_id),
            }
        },
        RenderModel::Todos(todos) => rsx! {
            if let Some(user_id) = todo_owner {
                div { class: "toolbar",
                    AddTodoButton { on_click: move |_| board.open_todo_form(user_id) }
                }
            }
            TodoList { todos }
        },
        RenderModel::Posts(posts) => rsx! { PostList { posts, on_navigate } },
        RenderModel::Comments(comments) => rsx! { CommentList { comments } },
    }
}

#[component]
fn ModalLayer(modal: Modal) -> Element {
    let board = use_board();
    let mut error = use_signal(|| Option::<MutationError>::None);

    let close = move |_: ()| {
        error.set(None);
        board.close_modal();
    };

    match modal {
        Modal::Closed => rsx! {},
        Modal::NewUser => rsx! {
            ModalOverlay { on_close: close,
                NewUserDialog {
                    error: error(),
                    on_create: move |fields| report(error, Board::create_user(board, fields)),
                    on_cancel: close,
                }
            }
        },
        Modal::NewTodo { .. } => rsx! {
            ModalOverlay { on_close: close,
                NewTodoDialog {
                    error: error(),
                    on_create: move |fields| report(error, Board::create_todo(board, fields)),
                    on_cancel: close,
                }
            }
        },
        Modal::ConfirmDelete { .. } => rsx! {
            ModalOverlay { on_close: move |_| board.confirm_delete(false),
                ConfirmDialog {
                    message: "Delete this user?".to_string(),
                    on_answer: move |confirmed| board.confirm_delete(confirmed),
                }
            }
        },
    }
}

fn report(mut error: Signal<Option<MutationError>>, result: Result<(), MutationError>) {
    match result {
        Ok(()) => error.set(None),
        Err(e) => {
            tracing::debug!("Form rejected: {e}");
            error.set(Some(e));
        }
    }
}
