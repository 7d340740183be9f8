//! # dua-catalog
//!
//! A validated, queryable catalog of short supplications grouped into
//! topical categories.
//!
//! Each entry carries its source-language text, transliterations in two
//! scripts, translations in two display languages, optional titles and an
//! optional citation. The text itself is opaque to this crate; what the crate
//! guarantees is the integrity of the collection and a deterministic query
//! surface over it.
//!
//! ## Features
//!
//! - **Aggregate validation**: duplicate ids (within or across categories),
//!   empty categories and blank required fields are all reported in one pass
//! - **O(1) lookups**: by category id and by entry id across all categories
//! - **Stable ordering**: listings and search results follow authoring order
//! - **Content fingerprint**: identifies a content version
//!
//! ## Example
//!
//! ```rust,no_run
//! use dua_catalog::{Catalog, Category, Entry, TextField};
//!
//! let catalog = Catalog::from_categories(vec![
//!     Category::new("A", "Kategori A", "Category A", "sun").with_entries(vec![
//!         Entry::new("a1", "رَبِّ اغْفِرْ لِي", "Ya Tuhanku, ampunilah aku", "My Lord, forgive me"),
//!     ]),
//! ])
//! .unwrap();
//!
//! let found = catalog.get_entry("a1").unwrap();
//! assert_eq!(found.category.id.as_str(), "A");
//!
//! let hits = catalog.search_entries("FORGIVE", &[TextField::TranslationSecondary]);
//! assert_eq!(hits.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Catalog construction, validation, storage and queries
//! - [`core`]: Entry, category and identifier types
//! - [`cli`]: Command-line interface implementation
//! - [`utils`]: Text helpers

pub mod catalog;
pub mod cli;
pub mod core;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::catalog::builder::CatalogBuilder;
pub use crate::catalog::error::{CatalogError, NotFound, ValidationReport, Violation};
pub use crate::catalog::query::{EntryRef, SearchQuery};
pub use crate::catalog::store::Catalog;
pub use crate::core::category::{Category, CategorySummary};
pub use crate::core::entry::Entry;
pub use crate::core::types::*;
