//! Core content types for the supplication catalog.
//!
//! - [`Entry`]: one supplication with source script, transliterations,
//!   translations and an optional citation
//! - [`Category`]: a named, ordered group of entries
//! - [`CategoryId`], [`EntryId`]: opaque, stable identifiers
//! - [`TextField`]: the localized fields a search can look at
//!
//! Entries and categories are plain immutable values. Two categories may
//! carry the same text, but each occurrence is its own [`Entry`] with its own
//! id; nothing is shared by reference.
//!
//! [`Entry`]: entry::Entry
//! [`Category`]: category::Category
//! [`CategoryId`]: types::CategoryId
//! [`EntryId`]: types::EntryId
//! [`TextField`]: types::TextField

pub mod category;
pub mod entry;
pub mod types;
