//! Case-insensitive substring search over a record's text fields.

use store::{Post, Todo, User};

use crate::route::SearchQuery;

/// A record that the search box can filter.
pub trait Searchable {
    /// The fields a query is matched against.
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }
}

impl Searchable for Todo {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }
}

impl Searchable for Post {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.body.as_str()]
    }
}

/// True when the query is empty or any field contains it, ignoring case.
pub fn matches<T: Searchable>(record: &T, query: &SearchQuery) -> bool {
    query.is_empty()
        || record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(query.as_str()))
}

/// Keep only the records matching `query`, preserving order.
pub fn filter<T: Searchable>(records: Vec<T>, query: &SearchQuery) -> Vec<T> {
    if query.is_empty() {
        return records;
    }
    records.into_iter().filter(|r| matches(r, query)).collect()
}
