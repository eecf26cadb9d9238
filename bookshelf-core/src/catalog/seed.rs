//! Catalog seed parsing
//!
//! A seed file lists the books a catalog starts with, in display order.
//! The reference seed is compiled into the binary.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::Book;
use crate::error::CatalogError;

/// Seed schema version
pub const SEED_API_VERSION: &str = "bookshelf.dev/v1";

/// Seed document kind
pub const SEED_KIND: &str = "Catalog";

const REFERENCE_SEED: &str = include_str!("reference.yaml");

/// A catalog seed document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSeed {
    /// API version
    pub api_version: String,

    /// Kind (Catalog)
    pub kind: String,

    /// Books in insertion order
    pub books: Vec<Book>,
}

impl Default for CatalogSeed {
    fn default() -> Self {
        Self {
            api_version: SEED_API_VERSION.to_string(),
            kind: SEED_KIND.to_string(),
            books: Vec::new(),
        }
    }
}

impl CatalogSeed {
    /// The embedded 15-book reference seed
    pub fn reference() -> Result<Self, CatalogError> {
        Self::from_yaml(REFERENCE_SEED)
    }

    /// Parse a seed from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self, CatalogError> {
        let seed: Self =
            serde_yaml_ng::from_str(content).map_err(|source| CatalogError::Parse { source })?;
        seed.check_header()?;
        Ok(seed)
    }

    /// Load a seed from a file path
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml(&content)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String, CatalogError> {
        serde_yaml_ng::to_string(self).map_err(|source| CatalogError::Serialize { source })
    }

    fn check_header(&self) -> Result<(), CatalogError> {
        if self.api_version != SEED_API_VERSION {
            return Err(CatalogError::Unsupported(format!(
                "apiVersion '{}', expected '{}'",
                self.api_version, SEED_API_VERSION
            )));
        }

        if self.kind != SEED_KIND {
            return Err(CatalogError::Unsupported(format!(
                "kind '{}', expected '{}'",
                self.kind, SEED_KIND
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod seed_tests {
    use super::*;

    #[test]
    fn test_reference_seed_parses() {
        let seed = CatalogSeed::reference().unwrap();
        assert_eq!(seed.books.len(), 15);
        assert_eq!(seed.books[0].title, "坊っちゃん");
        assert_eq!(seed.books[14].author, "J.R.R.トールキン");
    }

    #[test]
    fn test_rejects_wrong_kind() {
        let yaml = r#"
apiVersion: bookshelf.dev/v1
kind: Library
books: []
"#;
        let err = CatalogSeed::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, CatalogError::Unsupported(_)));
        assert!(err.to_string().contains("kind 'Library'"));
    }

    #[test]
    fn test_rejects_wrong_api_version() {
        let yaml = r#"
apiVersion: bookshelf.dev/v2
kind: Catalog
books: []
"#;
        let err = CatalogSeed::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, CatalogError::Unsupported(_)));
    }

    #[test]
    fn test_rejects_missing_fields() {
        let yaml = r#"
apiVersion: bookshelf.dev/v1
kind: Catalog
books:
  - id: 1
    title: 雪国
"#;
        let err = CatalogSeed::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn test_serialize_error_is_not_reported_as_parse() {
        let source = serde_yaml_ng::from_str::<u32>("not a number").unwrap_err();
        let err = CatalogError::Serialize { source };
        assert_eq!(err.to_string(), "Failed to serialize catalog seed");
    }

    #[test]
    fn test_to_yaml_reloads() {
        let seed = CatalogSeed::reference().unwrap();
        let reloaded = CatalogSeed::from_yaml(&seed.to_yaml().unwrap()).unwrap();
        assert_eq!(reloaded.books, seed.books);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CatalogSeed::from_file(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }
}
