use std::collections::HashMap;

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod states;
pub use states::{EmptyState, ErrorState, LoadingState};

mod users;
pub use users::UserList;

mod todos;
pub use todos::{AddTodoButton, TodoList};

mod posts;
pub use posts::{CommentList, PostList};

mod board_view;
pub use board_view::BoardView;

/// Keys for sibling rows whose natural keys may repeat: the first occurrence
/// keeps its key, later ones get `~2`, `~3`, ... appended.
pub(crate) fn sibling_keys<I>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen: HashMap<String, usize> = HashMap::new();
    keys.into_iter()
        .map(|key| {
            let count = seen.entry(key.clone()).or_insert(0);
            *count += 1;
            if *count == 1 {
                key
            } else {
                format!("{key}~{count}")
            }
        })
        .collect()
}
