//! # Application state and mutation handlers
//!
//! [`AppState`] owns everything the views share: the in-memory copies of the
//! local collections and the [`LocalStore`] they are persisted to, the remote
//! users fetched most recently (for breadcrumb names), the id allocator, and
//! which modal is open.
//!
//! Mutations update memory and write the store in the same synchronous call,
//! so no render can observe one without the other. A failed write is logged;
//! the in-memory copy stays authoritative for the rest of the session.
//!
//! Deleting a user is a two-step gate: [`AppState::request_delete`] opens the
//! confirmation, and only [`AppState::confirm_delete`] with `true` mutates.

use store::{IdAllocator, KeyValueStore, LocalStore, NewTodo, NewUser, Todo, User};
use thiserror::Error;

use crate::pipeline::LocalData;

/// Which modal, if any, is shown over the content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    NewUser,
    NewTodo { user_id: i64 },
    ConfirmDelete { user_id: i64 },
}

/// Why a form submission was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MutationError {
    #[error("a name is required")]
    BlankName,
    #[error("a title is required")]
    BlankTitle,
    #[error("no user is selected for the new todo")]
    NoTodoTarget,
}

/// Result of a confirmed deletion.
#[derive(Clone, Debug, PartialEq)]
pub struct Deleted {
    /// The local user removed, if the id was in the local collection.
    pub user: Option<User>,
    /// How many local todos went with it.
    pub todos_removed: usize,
}

pub struct AppState<S: KeyValueStore> {
    store: LocalStore<S>,
    local: LocalData,
    remote_users: Vec<User>,
    ids: IdAllocator,
    modal: Modal,
}

impl<S: KeyValueStore> AppState<S> {
    /// Load the local collections from `store`.
    pub fn load(store: LocalStore<S>) -> Self {
        let local = LocalData {
            users: store.get_custom_users(),
            todos: store.get_custom_todos(),
        };
        tracing::info!(
            "Loaded {} local users and {} local todos",
            local.users.len(),
            local.todos.len()
        );
        let ids = IdAllocator::seeded(
            local
                .users
                .iter()
                .map(|u| u.id)
                .chain(local.todos.iter().map(|t| t.id)),
        );
        Self {
            store,
            local,
            remote_users: Vec::new(),
            ids,
            modal: Modal::Closed,
        }
    }

    pub fn local(&self) -> &LocalData {
        &self.local
    }

    pub fn remote_users(&self) -> &[User] {
        &self.remote_users
    }

    pub fn set_remote_users(&mut self, users: Vec<User>) {
        self.remote_users = users;
    }

    pub fn modal(&self) -> Modal {
        self.modal
    }

    pub fn open_user_form(&mut self) {
        self.modal = Modal::NewUser;
    }

    pub fn open_todo_form(&mut self, user_id: i64) {
        self.modal = Modal::NewTodo { user_id };
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::Closed;
    }

    /// The user a todo created now would belong to.
    pub fn todo_target(&self) -> Option<i64> {
        match self.modal {
            Modal::NewTodo { user_id } => Some(user_id),
            _ => None,
        }
    }

    /// The user awaiting delete confirmation.
    pub fn pending_delete(&self) -> Option<i64> {
        match self.modal {
            Modal::ConfirmDelete { user_id } => Some(user_id),
            _ => None,
        }
    }

    /// Append a local user, persist, and close the form.
    pub fn create_user(&mut self, fields: NewUser) -> Result<User, MutationError> {
        let name = fields.name.trim();
        if name.is_empty() {
            return Err(MutationError::BlankName);
        }
        let user = User {
            id: self.ids.next_id(),
            name: name.to_string(),
            email: fields.email.trim().to_string(),
            phone: fields.phone.trim().to_string(),
        };
        self.local.users.push(user.clone());
        self.persist_users();
        self.modal = Modal::Closed;
        tracing::info!("Created local user {} ({})", user.id, user.name);
        Ok(user)
    }

    /// Append a local todo for [`Self::todo_target`], persist, and close the form.
    pub fn create_todo(&mut self, fields: NewTodo) -> Result<Todo, MutationError> {
        let user_id = self.todo_target().ok_or(MutationError::NoTodoTarget)?;
        let title = fields.title.trim();
        if title.is_empty() {
            return Err(MutationError::BlankTitle);
        }
        let todo = Todo {
            id: self.ids.next_id(),
            user_id,
            title: title.to_string(),
            completed: fields.completed,
        };
        self.local.todos.push(todo.clone());
        self.persist_todos();
        self.modal = Modal::Closed;
        tracing::info!("Created local todo {} for user {}", todo.id, user_id);
        Ok(todo)
    }

    /// Ask for confirmation before deleting `user_id`.
    pub fn request_delete(&mut self, user_id: i64) {
        self.modal = Modal::ConfirmDelete { user_id };
    }

    /// Answer the pending confirmation. Returns `None` when declined or when
    /// nothing was pending.
    pub fn confirm_delete(&mut self, confirmed: bool) -> Option<Deleted> {
        let user_id = self.pending_delete()?;
        self.modal = Modal::Closed;
        if !confirmed {
            return None;
        }
        Some(self.delete_user(user_id))
    }

    fn delete_user(&mut self, user_id: i64) -> Deleted {
        let position = self.local.users.iter().position(|u| u.id == user_id);
        let user = position.map(|i| self.local.users.remove(i));
        let before = self.local.todos.len();
        self.local.todos.retain(|t| t.user_id != user_id);
        let todos_removed = before - self.local.todos.len();

        self.persist_users();
        self.persist_todos();
        tracing::info!("Deleted local user {user_id} and {todos_removed} of its todos");
        Deleted { user, todos_removed }
    }

    fn persist_users(&self) {
        if let Err(e) = self.store.set_custom_users(&self.local.users) {
            tracing::warn!("Failed to persist local users: {e}");
        }
    }

    fn persist_todos(&self) {
        if let Err(e) = self.store.set_custom_todos(&self.local.todos) {
            tracing::warn!("Failed to persist local todos: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{merge_users, render, RenderModel};
    use crate::route::{ViewIntent, ViewRequest};
    use crate::testing::{todo, user, FakeRemote};
    use store::MemoryStore;

    fn state_with(
        users: Vec<User>,
        todos: Vec<Todo>,
    ) -> (AppState<MemoryStore>, LocalStore<MemoryStore>) {
        let local = LocalStore::new(MemoryStore::new());
        local.set_custom_users(&users).unwrap();
        local.set_custom_todos(&todos).unwrap();
        (AppState::load(local.clone()), local)
    }

    fn bo() -> NewUser {
        NewUser {
            name: "Bo".to_string(),
            email: "b@x.com".to_string(),
            phone: "555".to_string(),
        }
    }

    #[test]
    fn test_load_reads_both_collections() {
        let (state, _) = state_with(vec![user(-1, "Ann")], vec![todo(-2, -1, "x")]);
        assert_eq!(state.local().users.len(), 1);
        assert_eq!(state.local().todos.len(), 1);
        assert_eq!(state.modal(), Modal::Closed);
    }

    #[test]
    fn test_create_user_persists_and_closes_form() {
        let (mut state, store) = state_with(Vec::new(), Vec::new());
        state.open_user_form();

        let created = state.create_user(bo()).unwrap();

        assert!(created.id < 0);
        assert_eq!(state.local().users, vec![created.clone()]);
        assert_eq!(store.get_custom_users(), vec![created]);
        assert_eq!(state.modal(), Modal::Closed);
    }

    #[tokio::test]
    async fn test_created_user_appears_removable_after_rerender() {
        let remote = FakeRemote::default().with_users(vec![user(1, "Ann"), user(2, "Cid")]);
        let (mut state, store) = state_with(Vec::new(), Vec::new());

        let created = state.create_user(bo()).unwrap();
        let rendered = render(
            &remote,
            &ViewRequest::new(ViewIntent::UsersList),
            state.local(),
            state.remote_users(),
        )
        .await;

        let RenderModel::Users(rows) = rendered.screen.model else {
            panic!("expected users");
        };
        assert_eq!(rows.len(), 3);
        let row = rows.iter().find(|r| r.user.id == created.id).unwrap();
        assert!(row.removable);
        assert_eq!(store.get_custom_users().len(), 1);
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let (mut state, store) = state_with(Vec::new(), Vec::new());
        state.open_user_form();

        let err = state
            .create_user(NewUser {
                name: "   ".to_string(),
                ..bo()
            })
            .unwrap_err();

        assert_eq!(err, MutationError::BlankName);
        assert!(state.local().users.is_empty());
        assert!(store.get_custom_users().is_empty());
        assert_eq!(state.modal(), Modal::NewUser);
    }

    #[test]
    fn test_create_todo_targets_form_user() {
        let (mut state, store) = state_with(Vec::new(), Vec::new());
        state.open_todo_form(3);
        assert_eq!(state.todo_target(), Some(3));

        let created = state
            .create_todo(NewTodo {
                title: " water plants ".to_string(),
                completed: true,
            })
            .unwrap();

        assert_eq!(created.user_id, 3);
        assert_eq!(created.title, "water plants");
        assert!(created.completed);
        assert_eq!(store.get_custom_todos(), vec![created]);
        assert_eq!(state.todo_target(), None);
    }

    #[test]
    fn test_create_todo_without_target_fails() {
        let (mut state, _) = state_with(Vec::new(), Vec::new());
        let err = state
            .create_todo(NewTodo {
                title: "x".to_string(),
                completed: false,
            })
            .unwrap_err();
        assert_eq!(err, MutationError::NoTodoTarget);
    }

    #[test]
    fn test_ids_never_repeat() {
        let (mut state, _) = state_with(Vec::new(), Vec::new());
        let a = state.create_user(bo()).unwrap();
        let b = state.create_user(bo()).unwrap();
        state.open_todo_form(a.id);
        let t = state
            .create_todo(NewTodo {
                title: "t".to_string(),
                completed: false,
            })
            .unwrap();
        assert!(a.id > b.id && b.id > t.id);
    }

    #[test]
    fn test_delete_cascades_to_local_todos_only_for_that_user() {
        let (mut state, store) = state_with(
            vec![user(-1, "Ann"), user(-2, "Bo")],
            vec![todo(-10, -1, "a"), todo(-11, -2, "b"), todo(-12, -1, "c"), todo(-13, 5, "d")],
        );

        state.request_delete(-1);
        let deleted = state.confirm_delete(true).unwrap();

        assert_eq!(deleted.user.map(|u| u.id), Some(-1));
        assert_eq!(deleted.todos_removed, 2);
        let user_ids: Vec<i64> = state.local().users.iter().map(|u| u.id).collect();
        assert_eq!(user_ids, [-2]);
        let todo_ids: Vec<i64> = state.local().todos.iter().map(|t| t.id).collect();
        assert_eq!(todo_ids, [-11, -13]);
        assert_eq!(store.get_custom_users(), state.local().users);
        assert_eq!(store.get_custom_todos(), state.local().todos);
    }

    #[test]
    fn test_declined_delete_changes_nothing() {
        let (mut state, store) = state_with(vec![user(-1, "Ann")], vec![todo(-10, -1, "a")]);

        state.request_delete(-1);
        assert_eq!(state.pending_delete(), Some(-1));
        assert_eq!(state.confirm_delete(false), None);

        assert_eq!(state.local().users.len(), 1);
        assert_eq!(store.get_custom_todos().len(), 1);
        assert_eq!(state.modal(), Modal::Closed);
    }

    #[test]
    fn test_confirm_without_request_is_a_no_op() {
        let (mut state, _) = state_with(vec![user(-1, "Ann")], Vec::new());
        assert_eq!(state.confirm_delete(true), None);
        assert_eq!(state.local().users.len(), 1);
    }

    #[test]
    fn test_delete_for_every_local_state() {
        // Every combination of owners across three local todos
        for mask in 0..8u8 {
            let owner = |bit: u8| if mask & (1 << bit) != 0 { -1 } else { -2 };
            let todos = vec![
                todo(-10, owner(0), "a"),
                todo(-11, owner(1), "b"),
                todo(-12, owner(2), "c"),
            ];
            let kept: Vec<Todo> = todos.iter().filter(|t| t.user_id != -1).cloned().collect();
            let (mut state, _) = state_with(vec![user(-1, "Ann"), user(-2, "Bo")], todos);

            state.request_delete(-1);
            state.confirm_delete(true);

            assert_eq!(state.local().todos, kept, "mask {mask}");
            assert_eq!(state.local().users.len(), 1);
        }
    }

    #[test]
    fn test_merged_users_keep_remote_first() {
        let (mut state, _) = state_with(vec![user(-1, "Bo")], Vec::new());
        state.set_remote_users(vec![user(1, "Ann")]);
        let names: Vec<String> = merge_users(state.remote_users(), &state.local().users)
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, ["Ann", "Bo"]);
    }
}
