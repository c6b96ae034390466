//! Fragment routing.
//!
//! The URL fragment is the only navigation state. [`ViewIntent::from_fragment`]
//! maps it to one of four views; [`ViewIntent::fragment`] produces the
//! canonical fragment for in-app navigation.
//!
//! | Fragment | Intent |
//! |----------|--------|
//! | `""`, `"#"`, `"#users"` | [`ViewIntent::UsersList`] |
//! | `"#todos-<id>"` | [`ViewIntent::TodosFor`] |
//! | `"#posts-<id>"` | [`ViewIntent::PostsFor`] |
//! | `"#comments-<id>"` | [`ViewIntent::CommentsFor`] |
//!
//! Anything else maps to `None`, and callers leave the current view alone.

use std::fmt;

/// An id taken from a fragment.
///
/// The leading integer of the suffix is the id; whatever follows it is
/// ignored, so `5abc` and `1.5` read as 5 and 1. A suffix with no leading
/// integer still produces a route, but one whose id matches no record, so the
/// view renders empty instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteId {
    Id(i64),
    Invalid,
}

impl RouteId {
    fn parse(raw: &str) -> Self {
        let raw = raw.trim_start();
        let sign = usize::from(raw.starts_with(['-', '+']));
        let digits = raw[sign..].bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return RouteId::Invalid;
        }
        raw[..sign + digits]
            .parse()
            .map(RouteId::Id)
            .unwrap_or(RouteId::Invalid)
    }

    pub fn matches(self, id: i64) -> bool {
        self == RouteId::Id(id)
    }

    pub fn get(self) -> Option<i64> {
        match self {
            RouteId::Id(id) => Some(id),
            RouteId::Invalid => None,
        }
    }
}

impl From<i64> for RouteId {
    fn from(id: i64) -> Self {
        RouteId::Id(id)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteId::Id(id) => write!(f, "{id}"),
            RouteId::Invalid => f.write_str("NaN"),
        }
    }
}

/// Which view to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewIntent {
    UsersList,
    TodosFor(RouteId),
    PostsFor(RouteId),
    CommentsFor(RouteId),
}

impl ViewIntent {
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        if fragment.is_empty() || fragment == "#" || fragment == "#users" {
            return Some(ViewIntent::UsersList);
        }
        if let Some(rest) = fragment.strip_prefix("#todos-") {
            return Some(ViewIntent::TodosFor(RouteId::parse(rest)));
        }
        if let Some(rest) = fragment.strip_prefix("#posts-") {
            return Some(ViewIntent::PostsFor(RouteId::parse(rest)));
        }
        if let Some(rest) = fragment.strip_prefix("#comments-") {
            return Some(ViewIntent::CommentsFor(RouteId::parse(rest)));
        }
        None
    }

    pub fn fragment(&self) -> String {
        match self {
            ViewIntent::UsersList => "#users".to_string(),
            ViewIntent::TodosFor(id) => format!("#todos-{id}"),
            ViewIntent::PostsFor(id) => format!("#posts-{id}"),
            ViewIntent::CommentsFor(id) => format!("#comments-{id}"),
        }
    }

    /// Whether the search box filters this view.
    pub fn accepts_query(&self) -> bool {
        !matches!(self, ViewIntent::CommentsFor(_))
    }
}

/// A view plus the search text to filter it with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewRequest {
    pub intent: ViewIntent,
    pub query: SearchQuery,
}

impl ViewRequest {
    pub fn new(intent: ViewIntent) -> Self {
        Self {
            intent,
            query: SearchQuery::default(),
        }
    }

    /// The request for `fragment` searched with `raw`, or `None` for an unrecognized fragment.
    pub fn from_fragment(fragment: &str, raw: &str) -> Option<Self> {
        ViewIntent::from_fragment(fragment).map(|intent| Self::with_query(intent, raw))
    }

    pub fn with_query(intent: ViewIntent, raw: &str) -> Self {
        let query = if intent.accepts_query() {
            SearchQuery::new(raw)
        } else {
            SearchQuery::default()
        };
        Self { intent, query }
    }
}

/// Lowercased search text. Empty means "no filter".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_fragments() {
        assert_eq!(ViewIntent::from_fragment(""), Some(ViewIntent::UsersList));
        assert_eq!(ViewIntent::from_fragment("#"), Some(ViewIntent::UsersList));
        assert_eq!(ViewIntent::from_fragment("#users"), Some(ViewIntent::UsersList));
    }

    #[test]
    fn test_todos_fragment_accepts_any_integer() {
        for n in [0, 1, 7, -1, -1_712_345_678_901, i64::MAX, i64::MIN] {
            let fragment = format!("#todos-{n}");
            assert_eq!(
                ViewIntent::from_fragment(&fragment),
                Some(ViewIntent::TodosFor(RouteId::Id(n))),
                "{fragment}"
            );
        }
    }

    #[test]
    fn test_posts_and_comments_fragments() {
        assert_eq!(
            ViewIntent::from_fragment("#posts-3"),
            Some(ViewIntent::PostsFor(RouteId::Id(3)))
        );
        assert_eq!(
            ViewIntent::from_fragment("#comments-12"),
            Some(ViewIntent::CommentsFor(RouteId::Id(12)))
        );
    }

    #[test]
    fn test_non_numeric_suffix_is_an_invalid_id() {
        assert_eq!(
            ViewIntent::from_fragment("#todos-abc"),
            Some(ViewIntent::TodosFor(RouteId::Invalid))
        );
        assert_eq!(
            ViewIntent::from_fragment("#posts-"),
            Some(ViewIntent::PostsFor(RouteId::Invalid))
        );
        assert_eq!(
            ViewIntent::from_fragment("#comments--"),
            Some(ViewIntent::CommentsFor(RouteId::Invalid))
        );
        assert!(!RouteId::Invalid.matches(0));
        assert_eq!(RouteId::Invalid.get(), None);
    }

    #[test]
    fn test_trailing_characters_after_the_id_are_ignored() {
        assert_eq!(
            ViewIntent::from_fragment("#todos-5abc"),
            Some(ViewIntent::TodosFor(RouteId::Id(5)))
        );
        assert_eq!(
            ViewIntent::from_fragment("#posts-1.5"),
            Some(ViewIntent::PostsFor(RouteId::Id(1)))
        );
        assert_eq!(
            ViewIntent::from_fragment("#todos--7x"),
            Some(ViewIntent::TodosFor(RouteId::Id(-7)))
        );
        // Too large for an i64
        assert_eq!(
            ViewIntent::from_fragment("#todos-99999999999999999999"),
            Some(ViewIntent::TodosFor(RouteId::Invalid))
        );
    }

    #[test]
    fn test_unrecognized_fragments() {
        for fragment in ["#settings", "#user", "#todos", "users", "#TODOS-1", "#users/1"] {
            assert_eq!(ViewIntent::from_fragment(fragment), None, "{fragment}");
        }
    }

    #[test]
    fn test_fragment_roundtrip() {
        for intent in [
            ViewIntent::UsersList,
            ViewIntent::TodosFor(RouteId::Id(-42)),
            ViewIntent::PostsFor(RouteId::Id(3)),
            ViewIntent::CommentsFor(RouteId::Id(0)),
        ] {
            assert_eq!(ViewIntent::from_fragment(&intent.fragment()), Some(intent));
        }
        assert_eq!(ViewIntent::TodosFor(RouteId::Invalid).fragment(), "#todos-NaN");
    }

    #[test]
    fn test_comments_ignore_the_query() {
        let request = ViewRequest::with_query(ViewIntent::CommentsFor(RouteId::Id(1)), "abc");
        assert!(request.query.is_empty());

        let request = ViewRequest::with_query(ViewIntent::UsersList, "AnN");
        assert_eq!(request.query.as_str(), "ann");
    }
}
