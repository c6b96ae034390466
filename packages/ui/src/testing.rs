//! Test fixtures shared by the unit tests in this crate.

use std::sync::{Arc, Mutex};

use api::{Collection, RemoteError, RemoteSource};
use store::{Comment, Post, Todo, User};

pub fn user(id: i64, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: String::new(),
    }
}

pub fn todo(id: i64, user_id: i64, title: &str) -> Todo {
    Todo {
        id,
        user_id,
        title: title.to_string(),
        completed: false,
    }
}

pub fn post(id: i64, user_id: i64, title: &str, body: &str) -> Post {
    Post {
        id,
        user_id,
        title: title.to_string(),
        body: body.to_string(),
    }
}

pub fn comment(id: i64, post_id: i64, body: &str) -> Comment {
    Comment {
        id,
        post_id,
        name: "Eliseo".to_string(),
        email: "eliseo@gardner.biz".to_string(),
        body: body.to_string(),
    }
}

/// Canned remote collections. `failing()` answers every fetch with HTTP 503.
#[derive(Clone, Debug, Default)]
pub struct FakeRemote {
    users: Vec<User>,
    todos: Vec<Todo>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
    fail: bool,
    calls: Arc<Mutex<Vec<Collection>>>,
}

impl FakeRemote {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    pub fn with_todos(mut self, todos: Vec<Todo>) -> Self {
        self.todos = todos;
        self
    }

    pub fn with_posts(mut self, posts: Vec<Post>) -> Self {
        self.posts = posts;
        self
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }

    /// Collections fetched so far, in order.
    pub fn calls(&self) -> Vec<Collection> {
        self.calls.lock().unwrap().clone()
    }

    fn answer<T: Clone>(&self, collection: Collection, items: &[T]) -> Result<Vec<T>, RemoteError> {
        self.calls.lock().unwrap().push(collection);
        if self.fail {
            Err(RemoteError::Status {
                collection,
                status: 503,
            })
        } else {
            Ok(items.to_vec())
        }
    }
}

impl RemoteSource for FakeRemote {
    async fn fetch_users(&self) -> Result<Vec<User>, RemoteError> {
        self.answer(Collection::Users, &self.users)
    }

    async fn fetch_todos(&self) -> Result<Vec<Todo>, RemoteError> {
        self.answer(Collection::Todos, &self.todos)
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, RemoteError> {
        self.answer(Collection::Posts, &self.posts)
    }

    async fn fetch_comments(&self) -> Result<Vec<Comment>, RemoteError> {
        self.answer(Collection::Comments, &self.comments)
    }
}
