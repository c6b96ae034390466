//! # API crate: read-only client for the remote JSON API
//!
//! The application browses four collections served by a JSONPlaceholder-style
//! REST API. This crate defines the seam the rest of the workspace fetches
//! through, and the HTTP implementation used by every platform.
//!
//! ## Modules
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`RemoteSource`] | Async trait with one method per collection. Implemented by [`HttpRemote`] and by fakes in tests. |
//! | [`HttpRemote`] | `reqwest`-based implementation: `GET {base_url}/{collection}` and decode a JSON array. |
//! | [`RemoteError`] | Transport, status and decode failures. |
//! | [`Collection`] | The four collection names and their URL paths. |
//!
//! ## Failure policy
//!
//! Every method returns `Result`; this crate does not decide what a failure
//! means for the UI. The render pipeline treats failed user and todo fetches
//! as empty collections and failed post and comment fetches as an error
//! state.
//!
//! `reqwest` compiles to the browser's `fetch` on `wasm32`, so the same client
//! serves the web and desktop builds. Futures are not required to be `Send`.

use std::fmt;
use std::future::Future;

use serde::de::DeserializeOwned;
use thiserror::Error;

pub use store::{Comment, Post, Todo, User};

/// The remote collections this application reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    Users,
    Todos,
    Posts,
    Comments,
}

impl Collection {
    pub fn path(self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Todos => "todos",
            Collection::Posts => "posts",
            Collection::Comments => "comments",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Errors from fetching a remote collection.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The HTTP request itself failed (network, DNS, TLS, CORS, ...).
    #[error("request for {collection} failed: {source}")]
    Transport {
        collection: Collection,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-2xx status code.
    #[error("{collection} returned HTTP {status}")]
    Status { collection: Collection, status: u16 },

    /// The body was not a JSON array of the expected records.
    #[error("could not decode {collection}: {source}")]
    Decode {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },
}

/// Async source of the four read-only collections.
pub trait RemoteSource {
    fn fetch_users(&self) -> impl Future<Output = Result<Vec<User>, RemoteError>>;
    fn fetch_todos(&self) -> impl Future<Output = Result<Vec<Todo>, RemoteError>>;
    fn fetch_posts(&self) -> impl Future<Output = Result<Vec<Post>, RemoteError>>;
    fn fetch_comments(&self) -> impl Future<Output = Result<Vec<Comment>, RemoteError>>;
}

/// HTTP client for a JSONPlaceholder-compatible API.
#[derive(Clone, Debug)]
pub struct HttpRemote {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRemote {
    /// Create a client for the API at `base_url`, e.g. `https://jsonplaceholder.typicode.com`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn collection_url(&self, collection: Collection) -> String {
        format!("{}/{}", self.base_url, collection.path())
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> Result<Vec<T>, RemoteError> {
        let url = self.collection_url(collection);
        tracing::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| RemoteError::Transport { collection, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status {
                collection,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| RemoteError::Transport { collection, source })?;
        decode(collection, &body)
    }
}

impl RemoteSource for HttpRemote {
    async fn fetch_users(&self) -> Result<Vec<User>, RemoteError> {
        self.fetch(Collection::Users).await
    }

    async fn fetch_todos(&self) -> Result<Vec<Todo>, RemoteError> {
        self.fetch(Collection::Todos).await
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, RemoteError> {
        self.fetch(Collection::Posts).await
    }

    async fn fetch_comments(&self) -> Result<Vec<Comment>, RemoteError> {
        self.fetch(Collection::Comments).await
    }
}

/// Decode a JSON array body into records.
pub fn decode<T: DeserializeOwned>(
    collection: Collection,
    body: &[u8],
) -> Result<Vec<T>, RemoteError> {
    serde_json::from_slice(body).map_err(|source| RemoteError::Decode { collection, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_urls() {
        let remote = HttpRemote::new("https://jsonplaceholder.typicode.com/");
        assert_eq!(remote.base_url(), "https://jsonplaceholder.typicode.com");
        assert_eq!(
            remote.collection_url(Collection::Comments),
            "https://jsonplaceholder.typicode.com/comments"
        );
        assert_eq!(
            remote.collection_url(Collection::Users),
            "https://jsonplaceholder.typicode.com/users"
        );
    }

    #[test]
    fn test_decode_posts() {
        let body = br#"[
            {"userId": 1, "id": 1, "title": "sunt aut", "body": "quia et"},
            {"userId": 2, "id": 11, "title": "et ea", "body": "delectus"}
        ]"#;
        let posts: Vec<Post> = decode(Collection::Posts, body).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].user_id, 2);
    }

    #[test]
    fn test_decode_failure_names_the_collection() {
        let err = decode::<Comment>(Collection::Comments, b"<html>oops</html>").unwrap_err();
        assert!(matches!(
            err,
            RemoteError::Decode {
                collection: Collection::Comments,
                ..
            }
        ));
        assert!(err.to_string().starts_with("could not decode comments"));
    }

    #[test]
    fn test_decode_rejects_object_body() {
        let result = decode::<User>(Collection::Users, br#"{"id": 1, "name": "x"}"#);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_transport_error() {
        // Nothing listens on the discard port locally
        let remote = HttpRemote::new("http://127.0.0.1:9");
        let err = remote.fetch_posts().await.unwrap_err();
        assert!(matches!(
            err,
            RemoteError::Transport {
                collection: Collection::Posts,
                ..
            }
        ));
    }
}
