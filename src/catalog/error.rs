//! Error taxonomy for catalog construction and lookup.
//!
//! Construction problems are collected as [`Violation`]s into a
//! [`ValidationReport`]; a non-empty report is fatal and surfaces as
//! [`CatalogError::Invalid`]. A lookup miss is a [`NotFound`] value that
//! callers branch on.

use serde::Serialize;
use thiserror::Error;

use crate::core::types::{CategoryId, EntryId, RequiredField};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Catalog failed validation: {0}")]
    Invalid(ValidationReport),
}

/// Query-time miss. Absent ids are expected (stale links, removed content).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFound {
    #[error("Category '{0}' not found")]
    Category(CategoryId),

    #[error("Entry '{0}' not found")]
    Entry(EntryId),
}

/// Where an entry sits in the input content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryLocation {
    pub category_id: CategoryId,
    pub category_position: usize,
    pub entry_position: usize,
}

impl std::fmt::Display for EntryLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "category '{}' (#{}) entry #{}",
            self.category_id, self.category_position, self.entry_position
        )
    }
}

/// A single integrity problem found while building a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    DuplicateCategoryId {
        id: CategoryId,
        first: usize,
        second: usize,
    },
    DuplicateEntryId {
        id: EntryId,
        first: EntryLocation,
        second: EntryLocation,
    },
    EmptyCategory {
        category_id: CategoryId,
        position: usize,
    },
    InvalidEntry {
        location: EntryLocation,
        entry_id: Option<EntryId>,
        field: RequiredField,
    },
    InvalidCategory {
        position: usize,
        category_id: Option<CategoryId>,
        field: RequiredField,
    },
}

impl Violation {
    /// Short machine-friendly kind name
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateCategoryId { .. } => "duplicate_category_id",
            Self::DuplicateEntryId { .. } => "duplicate_entry_id",
            Self::EmptyCategory { .. } => "empty_category",
            Self::InvalidEntry { .. } => "invalid_entry",
            Self::InvalidCategory { .. } => "invalid_category",
        }
    }

    /// For duplicate entry ids, whether both copies live in the same category
    #[must_use]
    pub fn within_category(&self) -> Option<bool> {
        match self {
            Self::DuplicateEntryId { first, second, .. } => {
                Some(first.category_position == second.category_position)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateCategoryId { id, first, second } => write!(
                f,
                "duplicate category id '{id}' at positions {first} and {second}"
            ),
            Self::DuplicateEntryId { id, first, second } => {
                write!(f, "duplicate entry id '{id}' at {first} and {second}")
            }
            Self::EmptyCategory {
                category_id,
                position,
            } => write!(f, "category '{category_id}' (#{position}) has no entries"),
            Self::InvalidEntry {
                location,
                entry_id: Some(id),
                field,
            } => write!(f, "entry '{id}' at {location}: '{field}' is empty"),
            Self::InvalidEntry {
                location,
                entry_id: None,
                field,
            } => write!(f, "entry at {location}: '{field}' is empty"),
            Self::InvalidCategory {
                position,
                category_id: Some(id),
                field,
            } => write!(f, "category '{id}' (#{position}): '{field}' is empty"),
            Self::InvalidCategory {
                position,
                category_id: None,
                field,
            } => write!(f, "category #{position}: '{field}' is empty"),
        }
    }
}

/// Every violation found in one construction pass, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter()
    }

    pub(crate) fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} violation(s)", self.violations.len())?;
        for v in &self.violations {
            write!(f, "\n  - {v}")?;
        }
        Ok(())
    }
}
