//! Catalog error types with clear, actionable messages

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a catalog from its seed list
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A book id was zero
    #[error("Book at position {position} has id 0.\n\nBook ids must be positive integers.")]
    InvalidId { position: usize },

    /// Two books share an id
    #[error("Duplicate book id {id}: '{title}' reuses the id of '{existing}'")]
    DuplicateId {
        id: u32,
        title: String,
        existing: String,
    },

    /// A book has a blank title
    #[error("Book {id} has an empty title")]
    EmptyTitle { id: u32 },

    /// A book has a blank author
    #[error("Book {id} has an empty author")]
    EmptyAuthor { id: u32 },

    /// The seed file could not be read
    #[error("Failed to read catalog seed from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed file is not valid YAML for the seed schema
    #[error("Failed to parse catalog seed (invalid YAML or missing fields)")]
    Parse {
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// The seed could not be written back out as YAML
    #[error("Failed to serialize catalog seed")]
    Serialize {
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// The seed declares an apiVersion or kind this build does not understand
    #[error("Unsupported catalog seed: {0}")]
    Unsupported(String),
}
