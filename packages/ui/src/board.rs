//! Board context: the signals every view reads, and the actions that drive them.
//!
//! [`BoardProvider`] creates the [`Board`] once, puts it in context, and wires
//! the URL fragment to it: every fragment change re-evaluates the view.
//! Components get the handle back with [`use_board`].
//!
//! Navigation always goes through the fragment. [`Board::navigate`] writes
//! `location.hash`; the `hashchange` listener feeds the new value into
//! [`Board::fragment`], and the effect in [`BoardProvider`] renders it. When the
//! target is already the current fragment the view is re-rendered directly,
//! since the browser fires no event for an unchanged hash.

use api::HttpRemote;
use dioxus::prelude::*;
use store::{AppConfig, NewTodo, NewUser};

use crate::app_state::{AppState, MutationError};
use crate::pipeline::{self, ScreenState};
use crate::repo::{load_config, make_local_store, PlatformStore};
use crate::route::{ViewIntent, ViewRequest};

/// Reports every `hashchange`, starting with the current hash.
const HASH_LISTENER_JS: &str = r#"
    dioxus.send(window.location.hash);
    window.addEventListener("hashchange", () => dioxus.send(window.location.hash));
"#;

/// Handle to the shared application signals. Cheap to copy.
#[derive(Clone, Copy, PartialEq)]
pub struct Board {
    pub state: Signal<AppState<PlatformStore>>,
    /// The screen on display and its breadcrumb.
    pub display: Signal<ScreenState>,
    /// Current URL fragment, including the leading `#` (empty when there is none).
    pub fragment: Signal<String>,
    pub config: Signal<AppConfig>,
    remote: Signal<HttpRemote>,
}

/// Consume the [`Board`] from context.
pub fn use_board() -> Board {
    use_context::<Board>()
}

/// Provider component that owns the application state.
/// Wrap the app with this component; views below it call [`use_board`].
#[component]
pub fn BoardProvider(children: Element) -> Element {
    let board = use_context_provider(|| {
        let config = load_config();
        let local = make_local_store(&config);
        Board {
            state: Signal::new(AppState::load(local)),
            display: Signal::new(ScreenState::default()),
            fragment: Signal::new(initial_fragment()),
            remote: Signal::new(HttpRemote::new(config.remote.base_url.clone())),
            config: Signal::new(config),
        }
    });

    // Keep `fragment` in sync with the browser
    let mut fragment = board.fragment;
    use_future(move || async move {
        let mut listener = document::eval(HASH_LISTENER_JS);
        loop {
            match listener.recv::<String>().await {
                Ok(hash) => {
                    if *fragment.peek() != hash {
                        fragment.set(hash);
                    }
                }
                Err(e) => {
                    tracing::error!("Fragment listener stopped: {e:?}");
                    break;
                }
            }
        }
    });

    // Re-evaluate the view whenever the fragment changes
    use_effect(move || {
        let current = board.fragment.read().clone();
        board.show_fragment(&current);
    });

    rsx! {
        {children}
    }
}

impl Board {
    /// Render the view named by `fragment`. Unrecognized fragments leave the current view alone.
    pub fn show_fragment(self, fragment: &str) {
        match ViewRequest::from_fragment(fragment, "") {
            Some(request) => self.show(request),
            None => tracing::debug!("Ignoring unrecognized fragment {fragment:?}"),
        }
    }

    /// Re-evaluate the current fragment with new search text.
    pub fn search(self, raw: &str) {
        let fragment = self.fragment.peek().clone();
        match ViewRequest::from_fragment(&fragment, raw) {
            Some(request) => self.show(request),
            None => tracing::debug!("Search ignored on unrecognized fragment {fragment:?}"),
        }
    }

    /// Show the loading placeholder, then fetch and render `request`.
    pub fn show(self, request: ViewRequest) {
        let mut display = self.display;
        let mut state = self.state;

        let ticket = display.write().begin(request.intent);

        let (local, known_users) = {
            let state = state.peek();
            (state.local().clone(), state.remote_users().to_vec())
        };
        let remote = self.remote.peek().clone();

        spawn(async move {
            let rendered = pipeline::render(&remote, &request, &local, &known_users).await;
            if let Some(users) = rendered.remote_users {
                state.write().set_remote_users(users);
            }
            // Checked before writing so a stale result does not wake readers
            if !display.peek().is_current(ticket) {
                tracing::debug!("Discarding stale render of {:?}", request.intent);
                return;
            }
            display.write().finish(ticket, rendered.screen);
        });
    }

    /// Go to `intent` through the URL fragment.
    pub fn navigate(self, intent: ViewIntent) {
        let current = self.fragment.peek().clone();
        if ViewIntent::from_fragment(&current) == Some(intent) {
            self.show(ViewRequest::new(intent));
        } else {
            set_location_fragment(&intent.fragment());
        }
    }

    pub fn open_user_form(self) {
        let mut state = self.state;
        state.write().open_user_form();
    }

    pub fn open_todo_form(self, user_id: i64) {
        let mut state = self.state;
        state.write().open_todo_form(user_id);
    }

    pub fn request_delete(self, user_id: i64) {
        let mut state = self.state;
        state.write().request_delete(user_id);
    }

    pub fn close_modal(self) {
        let mut state = self.state;
        state.write().close_modal();
    }

    /// Save a new local user and show the user list without a query.
    pub fn create_user(self, fields: NewUser) -> Result<(), MutationError> {
        let mut state = self.state;
        state.write().create_user(fields)?;
        self.navigate(ViewIntent::UsersList);
        Ok(())
    }

    /// Save a new local todo for the user the form was opened for, and show their todos.
    pub fn create_todo(self, fields: NewTodo) -> Result<(), MutationError> {
        let mut state = self.state;
        let todo = state.write().create_todo(fields)?;
        self.navigate(ViewIntent::TodosFor(todo.user_id.into()));
        Ok(())
    }

    /// Answer the delete confirmation; a confirmed delete re-renders the user list.
    pub fn confirm_delete(self, confirmed: bool) {
        let mut state = self.state;
        let deleted = state.write().confirm_delete(confirmed);
        if deleted.is_some() {
            self.navigate(ViewIntent::UsersList);
        }
    }
}

fn initial_fragment() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().hash().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

fn set_location_fragment(fragment: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_hash(fragment) {
                tracing::error!("Failed to set location hash: {e:?}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        // Fragments come from ViewIntent::fragment: '#', letters, digits and '-'
        let _ = document::eval(&format!("window.location.hash = '{fragment}';"));
    }
}
