//! Supplication catalog storage, validation and queries.
//!
//! The catalog holds ordered categories of entries. It is built once from a
//! content source, every integrity invariant is checked during the build, and
//! the result is immutable. An embedded catalog is compiled into the binary,
//! but catalogs can also be loaded from JSON files (optionally gzipped).
//!
//! ## Example
//!
//! ```rust,no_run
//! use dua_catalog::{Catalog, TextField};
//!
//! // Process-wide handle, validated on first use
//! let catalog = Catalog::embedded().unwrap();
//!
//! // List categories in authoring order
//! for summary in catalog.list_categories() {
//!     println!("{} ({} entries)", summary.id, summary.entry_count);
//! }
//!
//! // Lookups return NotFound as a value
//! match catalog.get_entry("morning-1") {
//!     Ok(found) => println!("{} / {}", found.category.id, found.entry.translation_secondary),
//!     Err(missing) => println!("{missing}"),
//! }
//!
//! // Substring search, results in catalog order
//! let hits = catalog.search_entries("forgive", &[TextField::TranslationSecondary]);
//! ```
//!
//! ## Custom Catalogs
//!
//! ```rust,no_run
//! use dua_catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_embedded().unwrap();
//! let json = catalog.to_json().unwrap();
//!
//! let custom = Catalog::load_from_file(Path::new("my_catalog.json.gz")).unwrap();
//! ```

pub mod builder;
pub mod error;
pub mod query;
pub mod store;
