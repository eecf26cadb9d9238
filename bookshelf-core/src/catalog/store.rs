//! The in-memory catalog store
//!
//! Books are frozen into a reference-counted slice at construction. Every
//! read hands out that same slice, so callers can share it freely but never
//! mutate what the store holds.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use super::{Book, CatalogSeed};
use crate::error::CatalogError;

/// An immutable, ordered collection of books
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Arc<[Book]>,
}

impl Catalog {
    /// Validate a list of books and freeze it in insertion order
    pub fn new(books: Vec<Book>) -> Result<Self, CatalogError> {
        validate(&books)?;

        Ok(Self {
            books: books.into(),
        })
    }

    /// Build the catalog from a parsed seed
    pub fn from_seed(seed: CatalogSeed) -> Result<Self, CatalogError> {
        Self::new(seed.books)
    }

    /// Build the catalog from the embedded reference seed
    pub fn reference() -> Result<Self, CatalogError> {
        let catalog = Self::from_seed(CatalogSeed::reference()?)?;
        tracing::info!(books = catalog.len(), "Loaded reference catalog");
        Ok(catalog)
    }

    /// Build the catalog from a seed file on disk
    pub fn load_from_path(path: &Path) -> Result<Self, CatalogError> {
        let catalog = Self::from_seed(CatalogSeed::from_file(path)?)?;
        tracing::info!(
            books = catalog.len(),
            path = %path.display(),
            "Loaded catalog seed file"
        );
        Ok(catalog)
    }

    /// Snapshot of every book, in insertion order
    pub fn all_books(&self) -> Arc<[Book]> {
        Arc::clone(&self.books)
    }

    /// Borrow the books without taking a snapshot
    ///
    /// Same storage as [`Catalog::all_books`]. Searches borrow through this
    /// so their results can live as long as the catalog rather than a
    /// temporary `Arc`.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Look up a book by id
    pub fn get(&self, id: u32) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Number of books
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// Reject zero ids, duplicate ids, and blank titles or authors
fn validate(books: &[Book]) -> Result<(), CatalogError> {
    let mut seen: HashMap<u32, &str> = HashMap::with_capacity(books.len());

    for (position, book) in books.iter().enumerate() {
        if book.id == 0 {
            return Err(CatalogError::InvalidId { position });
        }

        if book.title.trim().is_empty() {
            return Err(CatalogError::EmptyTitle { id: book.id });
        }

        if book.author.trim().is_empty() {
            return Err(CatalogError::EmptyAuthor { id: book.id });
        }

        if let Some(existing) = seen.insert(book.id, book.title.as_str()) {
            return Err(CatalogError::DuplicateId {
                id: book.id,
                title: book.title.clone(),
                existing: existing.to_string(),
            });
        }
    }

    Ok(())
}
