//! Bookshelf catalog - book records, seed data and search
//!
//! # Overview
//!
//! The catalog is built once at startup and never changes afterwards:
//! - A [`CatalogSeed`] is parsed from YAML (the embedded reference data or a
//!   user supplied file)
//! - [`Catalog`] validates the seed and freezes it into a shared slice
//! - [`SearchService`] filters snapshots of that slice by keyword
//!
//! # Architecture
//!
//! ```text
//! reference.yaml / --catalog <file>
//!            │
//!            ▼
//!      CatalogSeed  ──validate──▶  Catalog (Arc<[Book]>)
//!                                      │
//!                                      ▼
//!                               SearchService
//! ```

mod record;
mod search;
mod seed;
mod store;

pub use record::Book;
pub use search::{search, SearchService};
pub use seed::{CatalogSeed, SEED_API_VERSION, SEED_KIND};
pub use store::Catalog;
