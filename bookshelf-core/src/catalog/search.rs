//! Keyword search over the catalog
//!
//! Matching is a plain substring test against the lower-cased title and
//! author. Results keep catalog order; nothing is ranked.

use super::{Book, Catalog};

/// Filter books by keyword
///
/// A missing keyword, or one made only of ASCII control characters and
/// spaces, matches every book. Other whitespace such as the full-width
/// space U+3000 is searched for like any other text. Otherwise the keyword
/// is lower-cased as given (not trimmed) and a book matches when its title
/// or author contains it.
pub fn search<'a>(books: &'a [Book], keyword: Option<&str>) -> Vec<&'a Book> {
    let Some(keyword) = keyword.filter(|k| !is_blank(k)) else {
        return books.iter().collect();
    };

    let keyword_lower = keyword.to_lowercase();
    books
        .iter()
        .filter(|book| book.matches(&keyword_lower))
        .collect()
}

/// Blank means nothing but characters at or below U+0020
fn is_blank(keyword: &str) -> bool {
    keyword.trim_matches(|c: char| c <= '\u{20}').is_empty()
}

/// Runs keyword searches against a catalog
#[derive(Debug, Clone)]
pub struct SearchService {
    catalog: Catalog,
}

impl SearchService {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// The catalog being searched
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Search the catalog, returning matches in catalog order
    pub fn search_books(&self, keyword: Option<&str>) -> Vec<&Book> {
        let results = search(self.catalog.books(), keyword);
        tracing::debug!(
            keyword = keyword.unwrap_or_default(),
            matches = results.len(),
            "Searched catalog"
        );
        results
    }

    /// Every book, in catalog order
    pub fn list_all(&self) -> Vec<&Book> {
        self.search_books(None)
    }
}
