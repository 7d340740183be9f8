use serde::{Deserialize, Serialize};

use crate::core::entry::Entry;
use crate::core::types::{CategoryId, RequiredField};
use crate::utils::text::is_blank;

/// A named, ordered group of entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier among categories
    #[serde(default)]
    pub id: CategoryId,

    /// Display name in the principal display language
    #[serde(default)]
    pub name_native: String,

    /// Display name in the second display language
    #[serde(default)]
    pub name_secondary: String,

    /// Symbolic icon tag, opaque to the catalog
    #[serde(default)]
    pub icon: String,

    /// Entries in authoring order
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Category {
    pub fn new(
        id: impl Into<String>,
        name_native: impl Into<String>,
        name_secondary: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: CategoryId::new(id),
            name_native: name_native.into(),
            name_secondary: name_secondary.into(),
            icon: icon.into(),
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_entries(mut self, entries: Vec<Entry>) -> Self {
        self.entries = entries;
        self
    }

    /// Required fields that are empty after trimming
    #[must_use]
    pub fn blank_required_fields(&self) -> Vec<RequiredField> {
        let mut blank = Vec::new();
        if is_blank(&self.id.0) {
            blank.push(RequiredField::Id);
        }
        if is_blank(&self.name_native) {
            blank.push(RequiredField::NameNative);
        }
        if is_blank(&self.name_secondary) {
            blank.push(RequiredField::NameSecondary);
        }
        blank
    }

    #[must_use]
    pub fn summary(&self) -> CategorySummary<'_> {
        CategorySummary {
            id: &self.id,
            name_native: &self.name_native,
            name_secondary: &self.name_secondary,
            icon: &self.icon,
            entry_count: self.entries.len(),
        }
    }
}

/// Lightweight view of a category for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary<'a> {
    pub id: &'a CategoryId,
    pub name_native: &'a str,
    pub name_secondary: &'a str,
    pub icon: &'a str,
    pub entry_count: usize,
}
