//! Catalog construction and the integrity pass.
//!
//! [`CatalogBuilder`] collects categories in authoring order and produces a
//! validated [`Catalog`]. The pass walks categories in input order and each
//! category's entries in input order, inserting every id into its index only
//! if the slot is free. An occupied slot is a conflict: it is recorded and the
//! first occupant is kept so later checks still see a consistent index. All
//! conflicts are collected before deciding; any violation means no catalog.

use std::collections::hash_map::Entry as Slot;
use std::collections::HashMap;

use tracing::{debug, warn};

use crate::catalog::error::{CatalogError, EntryLocation, ValidationReport, Violation};
use crate::catalog::store::Catalog;
use crate::core::category::Category;
use crate::core::types::{CategoryId, EntryId, RequiredField};

/// Lookup indexes derived from the ordered category list
#[derive(Debug, Clone, Default)]
pub(crate) struct CatalogIndexes {
    /// Category id -> position in the category list
    pub by_category_id: HashMap<CategoryId, usize>,

    /// Entry id -> (category position, entry position)
    pub by_entry_id: HashMap<EntryId, (usize, usize)>,
}

/// Check every invariant over `categories` and build the lookup indexes.
///
/// # Errors
///
/// Returns the complete [`ValidationReport`] if any violation is found.
pub(crate) fn index_categories(
    categories: &[Category],
) -> Result<CatalogIndexes, ValidationReport> {
    let mut indexes = CatalogIndexes::default();
    let mut report = ValidationReport::default();

    for (cat_pos, category) in categories.iter().enumerate() {
        let blank_category_fields = category.blank_required_fields();
        let id_is_blank = blank_category_fields.contains(&RequiredField::Id);
        for field in blank_category_fields {
            report.push(Violation::InvalidCategory {
                position: cat_pos,
                category_id: (!id_is_blank).then(|| category.id.clone()),
                field,
            });
        }

        if !id_is_blank {
            match indexes.by_category_id.entry(category.id.clone()) {
                Slot::Vacant(slot) => {
                    slot.insert(cat_pos);
                }
                Slot::Occupied(slot) => report.push(Violation::DuplicateCategoryId {
                    id: category.id.clone(),
                    first: *slot.get(),
                    second: cat_pos,
                }),
            }
        }

        if category.entries.is_empty() {
            report.push(Violation::EmptyCategory {
                category_id: category.id.clone(),
                position: cat_pos,
            });
        }

        for (entry_pos, entry) in category.entries.iter().enumerate() {
            let location = EntryLocation {
                category_id: category.id.clone(),
                category_position: cat_pos,
                entry_position: entry_pos,
            };

            let blank_entry_fields = entry.blank_required_fields();
            let id_is_blank = blank_entry_fields.contains(&RequiredField::Id);
            for field in blank_entry_fields {
                report.push(Violation::InvalidEntry {
                    location: location.clone(),
                    entry_id: (!id_is_blank).then(|| entry.id.clone()),
                    field,
                });
            }
            if id_is_blank {
                continue;
            }

            match indexes.by_entry_id.entry(entry.id.clone()) {
                Slot::Vacant(slot) => {
                    slot.insert((cat_pos, entry_pos));
                }
                Slot::Occupied(slot) => {
                    let (first_cat, first_entry) = *slot.get();
                    report.push(Violation::DuplicateEntryId {
                        id: entry.id.clone(),
                        first: EntryLocation {
                            category_id: categories[first_cat].id.clone(),
                            category_position: first_cat,
                            entry_position: first_entry,
                        },
                        second: location,
                    });
                }
            }
        }
    }

    if report.is_empty() {
        Ok(indexes)
    } else {
        Err(report)
    }
}

/// Collects categories in order and builds a validated catalog
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    categories: Vec<Category>,
}

impl CatalogBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one category after those already added
    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    /// Append categories in iteration order
    #[must_use]
    pub fn categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories.extend(categories);
        self
    }

    /// Validate and publish the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Invalid` with every violation found.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        match index_categories(&self.categories) {
            Ok(indexes) => {
                let catalog = Catalog::from_parts(self.categories, indexes);
                debug!(
                    "Built catalog: {} categories, {} entries, fingerprint {}",
                    catalog.len_categories(),
                    catalog.len_entries(),
                    catalog.fingerprint()
                );
                Ok(catalog)
            }
            Err(report) => {
                for violation in report.iter() {
                    warn!("Catalog violation: {violation}");
                }
                Err(CatalogError::Invalid(report))
            }
        }
    }
}
