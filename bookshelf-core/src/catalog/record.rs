//! Book records

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Positive id, unique within a catalog
    pub id: u32,

    /// Title
    pub title: String,

    /// Author name
    pub author: String,

    /// Year of first publication
    pub publication_year: i32,
}

impl Book {
    pub fn new(id: u32, title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            publication_year: year,
        }
    }

    /// Check whether the title or author contains an already lower-cased needle
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.author.to_lowercase().contains(needle_lower)
    }
}

/// One fixed-width console line; padding is counted in characters.
impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {:<3} | タイトル: {:<20} | 著者: {:<15} | 出版年: {}",
            self.id, self.title, self.author, self.publication_year
        )
    }
}
