//! # Render pipeline: from a view request to a render model
//!
//! [`render`] is the one place that knows which collections each view needs.
//! It fetches through a [`RemoteSource`], merges the local records held by the
//! application state, applies the search filter and returns a [`Screen`]: the
//! [`RenderModel`] the components draw plus the breadcrumb label.
//!
//! | View | Remote fetch | Local merge | Query matches | On fetch failure |
//! |------|--------------|-------------|---------------|------------------|
//! | Users | users | local users appended | name, email | empty list |
//! | Todos | todos by `user_id` | local todos by `user_id` appended | title | remote part empty |
//! | Posts | posts by `user_id` | - | title, body | error state |
//! | Comments | comments by `post_id` | - | - | error state |
//!
//! [`ScreenState`] holds what is on display. Callers show the loading
//! placeholder through [`ScreenState::begin`] before awaiting [`render`], then
//! hand the result to [`ScreenState::finish`], which drops it if a newer
//! render has started since.
//!
//! Breadcrumbs for the todo and post views name the user, resolved by id in
//! the merged user collection (last fetched remote users, then local users).
//! When no remote users are known yet, e.g. after opening a deep link, the
//! pipeline fetches them alongside and reports them back in
//! [`Rendered::remote_users`].

use api::RemoteSource;
use store::{Comment, Origin, Post, Todo, User};

use crate::route::{RouteId, ViewIntent, ViewRequest};
use crate::search;

/// The kind of records a view lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Users,
    Todos,
    Posts,
    Comments,
}

impl From<ViewIntent> for ViewKind {
    fn from(intent: ViewIntent) -> Self {
        match intent {
            ViewIntent::UsersList => ViewKind::Users,
            ViewIntent::TodosFor(_) => ViewKind::Todos,
            ViewIntent::PostsFor(_) => ViewKind::Posts,
            ViewIntent::CommentsFor(_) => ViewKind::Comments,
        }
    }
}

/// A user as listed, tagged with where it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct UserRow {
    pub user: User,
    pub origin: Origin,
    /// Present in the local collection, so the user may delete it.
    pub removable: bool,
}

/// What the content area shows.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderModel {
    Loading(ViewKind),
    Failed(ViewKind),
    Empty(ViewKind),
    Users(Vec<UserRow>),
    Todos(Vec<Todo>),
    Posts(Vec<Post>),
    Comments(Vec<Comment>),
}

/// A render model for a view, plus its breadcrumb.
#[derive(Clone, Debug, PartialEq)]
pub struct Screen {
    pub intent: ViewIntent,
    pub model: RenderModel,
    /// `None` leaves the current breadcrumb in place.
    pub breadcrumb: Option<String>,
}

impl Screen {
    pub fn loading(intent: ViewIntent) -> Self {
        Self {
            intent,
            model: RenderModel::Loading(intent.into()),
            breadcrumb: None,
        }
    }

    fn failed(intent: ViewIntent) -> Self {
        Self {
            intent,
            model: RenderModel::Failed(intent.into()),
            breadcrumb: None,
        }
    }
}

/// The user-created records currently held in memory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocalData {
    pub users: Vec<User>,
    pub todos: Vec<Todo>,
}

impl LocalData {
    pub fn has_user(&self, id: i64) -> bool {
        self.users.iter().any(|u| u.id == id)
    }
}

/// Output of one pass through the pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct Rendered {
    pub screen: Screen,
    /// Remote users fetched during this render, if any.
    pub remote_users: Option<Vec<User>>,
}

/// Hands out render tickets; only the newest one may be applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderTickets {
    latest: u64,
}

impl RenderTickets {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// What the content area shows, and which render may replace it.
///
/// Every render starts with [`ScreenState::begin`], which shows the loading
/// placeholder and hands out a ticket. [`ScreenState::finish`] applies the
/// result only while that ticket is the latest, so a slow response never
/// replaces a newer view.
#[derive(Clone, Debug, PartialEq)]
pub struct ScreenState {
    screen: Screen,
    breadcrumb: String,
    tickets: RenderTickets,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self {
            screen: Screen::loading(ViewIntent::UsersList),
            breadcrumb: String::new(),
            tickets: RenderTickets::default(),
        }
    }
}

impl ScreenState {
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn breadcrumb(&self) -> &str {
        &self.breadcrumb
    }

    /// Show the loading placeholder for `intent` and return the ticket its result must carry.
    pub fn begin(&mut self, intent: ViewIntent) -> u64 {
        self.screen = Screen::loading(intent);
        self.tickets.issue()
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.tickets.is_current(ticket)
    }

    /// Show a finished render. Returns `false`, changing nothing, when a later
    /// [`ScreenState::begin`] has superseded `ticket`.
    pub fn finish(&mut self, ticket: u64, screen: Screen) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        if let Some(label) = &screen.breadcrumb {
            self.breadcrumb.clone_from(label);
        }
        self.screen = screen;
        true
    }
}

/// Concatenate remote and local users, remote first. No de-duplication.
pub fn merge_users(remote: &[User], local: &[User]) -> Vec<User> {
    remote.iter().chain(local).cloned().collect()
}

/// Fetch, merge and filter the records for `request`.
pub async fn render<R: RemoteSource>(
    remote: &R,
    request: &ViewRequest,
    local: &LocalData,
    known_remote_users: &[User],
) -> Rendered {
    match request.intent {
        ViewIntent::UsersList => render_users(remote, request, local).await,
        ViewIntent::TodosFor(user_id) => {
            let fetched = fetch_users_if_unknown(remote, known_remote_users).await;
            let users = fetched.as_deref().unwrap_or(known_remote_users);
            let screen = render_todos(remote, request, user_id, local, users).await;
            Rendered {
                screen,
                remote_users: fetched,
            }
        }
        ViewIntent::PostsFor(user_id) => {
            let fetched = fetch_users_if_unknown(remote, known_remote_users).await;
            let users = fetched.as_deref().unwrap_or(known_remote_users);
            let screen = render_posts(remote, request, user_id, local, users).await;
            Rendered {
                screen,
                remote_users: fetched,
            }
        }
        ViewIntent::CommentsFor(post_id) => Rendered {
            screen: render_comments(remote, request, post_id).await,
            remote_users: None,
        },
    }
}

async fn render_users<R: RemoteSource>(
    remote: &R,
    request: &ViewRequest,
    local: &LocalData,
) -> Rendered {
    let remote_users = remote.fetch_users().await.unwrap_or_else(|e| {
        tracing::error!("Failed to load users: {e}");
        Vec::new()
    });

    let rows: Vec<UserRow> = remote_users
        .iter()
        .cloned()
        .map(|user| (user, Origin::Remote))
        .chain(local.users.iter().cloned().map(|user| (user, Origin::Local)))
        .filter(|(user, _)| search::matches(user, &request.query))
        .map(|(user, origin)| UserRow {
            removable: local.has_user(user.id),
            user,
            origin,
        })
        .collect();

    let model = if rows.is_empty() {
        RenderModel::Empty(ViewKind::Users)
    } else {
        RenderModel::Users(rows)
    };

    Rendered {
        screen: Screen {
            intent: request.intent,
            model,
            breadcrumb: Some("Users".to_string()),
        },
        remote_users: Some(remote_users),
    }
}

async fn render_todos<R: RemoteSource>(
    remote: &R,
    request: &ViewRequest,
    user_id: RouteId,
    local: &LocalData,
    remote_users: &[User],
) -> Screen {
    let remote_todos = remote.fetch_todos().await.unwrap_or_else(|e| {
        tracing::error!("Failed to load todos: {e}");
        Vec::new()
    });

    let todos: Vec<Todo> = remote_todos
        .into_iter()
        .filter(|t| user_id.matches(t.user_id))
        .chain(local.todos.iter().filter(|t| user_id.matches(t.user_id)).cloned())
        .collect();
    let todos = search::filter(todos, &request.query);

    let model = if todos.is_empty() {
        RenderModel::Empty(ViewKind::Todos)
    } else {
        RenderModel::Todos(todos)
    };

    Screen {
        intent: request.intent,
        model,
        breadcrumb: Some(label("Todos", user_name(user_id, remote_users, local))),
    }
}

async fn render_posts<R: RemoteSource>(
    remote: &R,
    request: &ViewRequest,
    user_id: RouteId,
    local: &LocalData,
    remote_users: &[User],
) -> Screen {
    let posts = match remote.fetch_posts().await {
        Ok(posts) => posts,
        Err(e) => {
            tracing::error!("Failed to load posts: {e}");
            return Screen::failed(request.intent);
        }
    };

    let posts: Vec<Post> = posts.into_iter().filter(|p| user_id.matches(p.user_id)).collect();
    let posts = search::filter(posts, &request.query);

    let model = if posts.is_empty() {
        RenderModel::Empty(ViewKind::Posts)
    } else {
        RenderModel::Posts(posts)
    };

    Screen {
        intent: request.intent,
        model,
        breadcrumb: Some(label("Posts", user_name(user_id, remote_users, local))),
    }
}

async fn render_comments<R: RemoteSource>(
    remote: &R,
    request: &ViewRequest,
    post_id: RouteId,
) -> Screen {
    let comments = match remote.fetch_comments().await {
        Ok(comments) => comments,
        Err(e) => {
            tracing::error!("Failed to load comments: {e}");
            return Screen::failed(request.intent);
        }
    };

    let comments: Vec<Comment> = comments
        .into_iter()
        .filter(|c| post_id.matches(c.post_id))
        .collect();

    let model = if comments.is_empty() {
        RenderModel::Empty(ViewKind::Comments)
    } else {
        RenderModel::Comments(comments)
    };

    Screen {
        intent: request.intent,
        model,
        breadcrumb: Some("Comments".to_string()),
    }
}

async fn fetch_users_if_unknown<R: RemoteSource>(remote: &R, known: &[User]) -> Option<Vec<User>> {
    if !known.is_empty() {
        return None;
    }
    match remote.fetch_users().await {
        Ok(users) => Some(users),
        Err(e) => {
            tracing::warn!("Could not resolve user names: {e}");
            None
        }
    }
}

fn user_name<'a>(
    user_id: RouteId,
    remote_users: &'a [User],
    local: &'a LocalData,
) -> Option<&'a str> {
    remote_users
        .iter()
        .chain(&local.users)
        .find(|u| user_id.matches(u.id))
        .map(|u| u.name.as_str())
}

fn label(prefix: &str, name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => format!("{prefix} {name}"),
        _ => prefix.to_string(),
    }
}
