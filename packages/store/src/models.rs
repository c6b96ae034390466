//! # Domain models for users, todos, posts and comments
//!
//! Defines the records the application browses. The same types are used for
//! data decoded from the remote JSON API and for the locally persisted
//! collections, so field names follow the API's camelCase (`userId`,
//! `postId`) on the wire.
//!
//! ## Types
//!
//! | Struct | Represents | Mutable locally |
//! |--------|-----------|-----------------|
//! | [`User`] | A person with contact details. | yes |
//! | [`Todo`] | A to-do item owned by a user via `user_id`. | yes (create only) |
//! | [`Post`] | A blog post owned by a user. | no |
//! | [`Comment`] | A comment attached to a post via `post_id`. | no |
//!
//! [`Origin`] is not stored on the records themselves: a record's origin is
//! implied by the collection it was read from, and is attached to view models
//! when the remote and local collections are merged.
//!
//! ## Local identifiers
//!
//! The remote API hands out positive ids. [`IdAllocator`] issues local ids in
//! the negative range (`-(unix millis)`) so a locally created record can
//! never share an id with a remote one.

use serde::{Deserialize, Serialize};

/// Where a record came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Remote,
    Local,
}

/// A user, either fetched from the API or created locally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// A to-do item belonging to the user with id `user_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// A post written by the user with id `user_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

/// A comment on the post with id `post_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Fields collected by the "new user" form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Fields collected by the "new todo" form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewTodo {
    pub title: String,
    pub completed: bool,
}

impl User {
    /// Uppercased first letter of every space-separated word: "Leanne Graham" -> "LG".
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

impl Comment {
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Issues ids for locally created records.
///
/// Ids are `-(unix millis)` and strictly decreasing across calls on the same
/// allocator, even when several records are created within one millisecond.
#[derive(Clone, Debug, Default)]
pub struct IdAllocator {
    last: Option<i64>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start below every id already present, so ids restored from storage are never reissued.
    pub fn seeded<I: IntoIterator<Item = i64>>(existing: I) -> Self {
        Self {
            last: existing.into_iter().filter(|id| *id < 0).min(),
        }
    }

    pub fn next_id(&mut self) -> i64 {
        self.next_id_at(current_millis())
    }

    fn next_id_at(&mut self, millis: i64) -> i64 {
        let candidate = -millis.max(1);
        let id = match self.last {
            // Nothing lies below i64::MIN, so fall back to the clock there
            Some(last) if candidate >= last => last.checked_sub(1).unwrap_or(candidate),
            _ => candidate,
        };
        self.last = Some(id);
        id
    }
}

fn current_millis() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        let user = User {
            id: 1,
            name: "Leanne Graham".to_string(),
            email: String::new(),
            phone: String::new(),
        };
        assert_eq!(user.initials(), "LG");

        let user = User {
            name: "bo".to_string(),
            ..user
        };
        assert_eq!(user.initials(), "B");
    }

    #[test]
    fn test_initials_skip_repeated_spaces() {
        assert_eq!(initials("ann  marie"), "AM");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_local_ids_are_negative_and_decreasing() {
        let mut ids = IdAllocator::new();
        let first = ids.next_id_at(1_700_000_000_000);
        let second = ids.next_id_at(1_700_000_000_000);
        let third = ids.next_id_at(1_699_999_999_999);
        assert_eq!(first, -1_700_000_000_000);
        assert_eq!(second, first - 1);
        assert_eq!(third, second - 1);
        assert!(ids.next_id() < third);
    }

    #[test]
    fn test_seeded_allocator_never_reissues() {
        let mut ids = IdAllocator::seeded([5, -1_800_000_000_000, -3]);
        assert_eq!(ids.next_id_at(1_700_000_000_000), -1_800_000_000_001);
    }

    #[test]
    fn test_allocator_seeded_with_minimum_id_stays_negative() {
        let mut ids = IdAllocator::seeded([i64::MIN]);
        let first = ids.next_id_at(1_700_000_000_000);
        assert_eq!(first, -1_700_000_000_000);
        let second = ids.next_id_at(1_700_000_000_000);
        assert_eq!(second, first - 1);
        assert!(ids.next_id() < 0);
    }

    #[test]
    fn test_remote_user_ignores_extra_fields() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "city": "Gwenborough" },
            "phone": "1-770-736-8031 x56442"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.email, "Sincere@april.biz");
    }

    #[test]
    fn test_todo_uses_camel_case_on_the_wire() {
        let todo = Todo {
            id: -5,
            user_id: 3,
            title: "buy milk".to_string(),
            completed: true,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["userId"], 3);
        assert_eq!(json["completed"], true);
    }
}
