//! Read-only query surface over a validated [`Catalog`].
//!
//! Lookups by id are O(1) through the catalog indexes and return
//! [`NotFound`] as a value. Listings and search results always follow
//! catalog order: category order first, then entry order within the
//! category. Search is plain case-insensitive substring matching with no
//! relevance ranking.

use serde::Serialize;

use crate::catalog::error::NotFound;
use crate::catalog::store::Catalog;
use crate::core::category::{Category, CategorySummary};
use crate::core::entry::Entry;
use crate::core::types::{CategoryId, EntryId, TextField};
use crate::utils::text::{contains_normalized, normalize_query};

/// An entry together with the category it was authored under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntryRef<'a> {
    pub category: &'a Category,
    pub entry: &'a Entry,
}

/// Search options
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Text to look for; blank text matches nothing
    pub text: String,
    /// Fields to look in; an empty set matches nothing
    pub fields: Vec<TextField>,
    /// Restrict matches to one category
    pub category: Option<CategoryId>,
    /// Maximum number of hits to return
    pub limit: Option<usize>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, fields: &[TextField]) -> Self {
        Self {
            text: text.into(),
            fields: fields.to_vec(),
            category: None,
            limit: None,
        }
    }

    #[must_use]
    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(CategoryId::new(category));
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl Catalog {
    /// Get a category by id
    pub fn get_category(&self, id: &str) -> Result<&Category, NotFound> {
        self.indexes()
            .by_category_id
            .get(id)
            .map(|&idx| &self.categories()[idx])
            .ok_or_else(|| NotFound::Category(CategoryId::new(id)))
    }

    /// Get an entry by id, with its owning category
    pub fn get_entry(&self, id: &str) -> Result<EntryRef<'_>, NotFound> {
        let &(cat_idx, entry_idx) = self
            .indexes()
            .by_entry_id
            .get(id)
            .ok_or_else(|| NotFound::Entry(EntryId::new(id)))?;
        let category = &self.categories()[cat_idx];
        Ok(EntryRef {
            category,
            entry: &category.entries[entry_idx],
        })
    }

    /// Category summaries in authoring order
    #[must_use]
    pub fn list_categories(&self) -> Vec<CategorySummary<'_>> {
        self.categories().iter().map(Category::summary).collect()
    }

    /// Entries of one category in authoring order
    pub fn list_entries(&self, category_id: &str) -> Result<&[Entry], NotFound> {
        self.get_category(category_id).map(|c| c.entries.as_slice())
    }

    /// Every entry in catalog order
    pub fn entries(&self) -> impl Iterator<Item = EntryRef<'_>> {
        self.categories().iter().flat_map(|category| {
            category
                .entries
                .iter()
                .map(move |entry| EntryRef { category, entry })
        })
    }

    /// Case-insensitive substring search over the given fields, in catalog order
    #[must_use]
    pub fn search_entries(&self, query: &str, fields: &[TextField]) -> Vec<EntryRef<'_>> {
        self.search(&SearchQuery::new(query, fields))
    }

    /// Search with optional category restriction and result limit.
    ///
    /// An unknown category yields no hits rather than an error.
    #[must_use]
    pub fn search(&self, query: &SearchQuery) -> Vec<EntryRef<'_>> {
        let Some(needle) = normalize_query(&query.text) else {
            return Vec::new();
        };
        if query.fields.is_empty() || query.limit == Some(0) {
            return Vec::new();
        }

        let matches = |entry: &Entry| {
            query
                .fields
                .iter()
                .filter_map(|&field| entry.field(field))
                .any(|text| contains_normalized(text, &needle))
        };

        let hits = self
            .entries()
            .filter(|r| query.category.as_ref().map_or(true, |id| &r.category.id == id))
            .filter(|r| matches(r.entry));

        match query.limit {
            Some(limit) => hits.take(limit).collect(),
            None => hits.collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_categories(vec![
            Category::new("A", "Kategori A", "Category A", "sun").with_entries(vec![
                Entry::new("a1", "script", "Ampunilah aku", "Grant me FORGIVENESS")
                    .with_titles("Ampunan", "Forgiveness"),
                Entry::new("a2", "script", "Lindungilah aku", "Protect me"),
            ]),
            Category::new("B", "Kategori B", "Category B", "moon").with_entries(vec![
                Entry::new("b1", "script", "Ampunan", "Seeking forgiveness at night"),
            ]),
        ])
        .unwrap()
    }

    #[test]
    fn test_get_entry_returns_owner() {
        let catalog = catalog();
        let found = catalog.get_entry("a2").unwrap();
        assert_eq!(found.category.id.as_str(), "A");
        assert_eq!(found.entry.id.as_str(), "a2");
    }

    #[test]
    fn test_get_category_and_entries() {
        let catalog = catalog();
        let b = catalog.get_category("B").unwrap();
        let ids: Vec<_> = b.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b1"]);
        assert_eq!(catalog.list_entries("A").unwrap().len(), 2);
    }

    #[test]
    fn test_missing_ids_are_values() {
        let catalog = catalog();
        assert_eq!(
            catalog.get_entry("nonexistent-id"),
            Err(NotFound::Entry(EntryId::new("nonexistent-id")))
        );
        assert_eq!(
            catalog.get_category("nonexistent-id").map(|c| c.id.clone()),
            Err(NotFound::Category(CategoryId::new("nonexistent-id")))
        );
        assert!(catalog.list_entries("nonexistent-id").is_err());
    }

    #[test]
    fn test_search_orders_by_catalog_position() {
        let catalog = catalog();
        let hits = catalog.search_entries(
            "forgiveness",
            &[TextField::TitleSecondary, TextField::TranslationSecondary],
        );
        let ids: Vec<_> = hits.iter().map(|h| h.entry.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "b1"]);
    }

    #[test]
    fn test_search_only_looks_at_requested_fields() {
        let catalog = catalog();
        let hits = catalog.search_entries("ampun", &[TextField::TranslationNative]);
        let ids: Vec<_> = hits.iter().map(|h| h.entry.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "b1"]);

        assert!(catalog
            .search_entries("ampun", &[TextField::TranslationSecondary])
            .is_empty());
    }

    #[test]
    fn test_search_empty_inputs() {
        let catalog = catalog();
        assert!(catalog
            .search_entries("", &[TextField::TranslationNative])
            .is_empty());
        assert!(catalog
            .search_entries("   ", &[TextField::TranslationNative])
            .is_empty());
        assert!(catalog.search_entries("forgiveness", &[]).is_empty());
    }

    #[test]
    fn test_search_keeps_whitespace_in_needle() {
        let catalog = Catalog::from_categories(vec![Category::new("A", "A", "A", "")
            .with_entries(vec![
                Entry::new("a1", "s", "n", "Until we meet again"),
                Entry::new("a2", "s", "n", "Guide me always"),
            ])])
        .unwrap();
        let hits = catalog.search_entries("me ", &[TextField::TranslationSecondary]);
        let ids: Vec<_> = hits.iter().map(|h| h.entry.id.as_str()).collect();
        assert_eq!(ids, vec!["a2"]);
    }

    #[test]
    fn test_search_category_and_limit() {
        let catalog = catalog();
        let query = SearchQuery::new("forgiveness", &TextField::ALL).in_category("B");
        let ids: Vec<_> = catalog
            .search(&query)
            .iter()
            .map(|h| h.entry.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b1"]);

        let limited = SearchQuery::new("forgiveness", &TextField::ALL).limit(1);
        let hits = catalog.search(&limited);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].entry.id.as_str(), "a1");

        let unknown = SearchQuery::new("forgiveness", &TextField::ALL).in_category("Z");
        assert!(catalog.search(&unknown).is_empty());
    }

    #[test]
    fn test_entries_iterates_in_catalog_order() {
        let catalog = catalog();
        let ids: Vec<_> = catalog.entries().map(|r| r.entry.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a2", "b1"]);
    }
}
