//! Bookshelf library exports

pub mod catalog;
pub mod console;
pub mod error;
pub mod report;

pub use error::CatalogError;
