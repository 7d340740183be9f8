use flate2::read::GzDecoder;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

use crate::catalog::builder::{CatalogBuilder, CatalogIndexes};
use crate::catalog::error::CatalogError;
use crate::core::category::Category;
use crate::utils::text::compute_fingerprint;

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    #[serde(default)]
    pub created_at: String,
    pub categories: Vec<Category>,
}

static EMBEDDED: OnceCell<Catalog> = OnceCell::new();

/// The validated supplication catalog with its lookup indexes.
///
/// A `Catalog` only exists once every invariant has been checked; see
/// [`CatalogBuilder`]. It is never mutated afterwards and can be shared
/// freely across threads.
#[derive(Debug)]
pub struct Catalog {
    /// All categories, in authoring order
    categories: Vec<Category>,

    /// Id indexes over `categories`
    indexes: CatalogIndexes,

    /// Total number of entries across all categories
    entry_count: usize,

    /// MD5 of the canonical category JSON
    fingerprint: String,
}

impl Catalog {
    pub(crate) fn from_parts(categories: Vec<Category>, indexes: CatalogIndexes) -> Self {
        let entry_count = indexes.by_entry_id.len();
        // Serializing plain structs of strings cannot fail
        let canonical = serde_json::to_vec(&categories).unwrap_or_default();
        let fingerprint = compute_fingerprint(&canonical);
        Self {
            categories,
            indexes,
            entry_count,
            fingerprint,
        }
    }

    /// Validate an ordered list of categories into a catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Invalid` listing every violation found.
    pub fn from_categories(categories: Vec<Category>) -> Result<Self, CatalogError> {
        CatalogBuilder::new().categories(categories).build()
    }

    /// Load the embedded default catalog
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Validated at compile time by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/supplications.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Process-wide handle to the embedded catalog.
    ///
    /// Built and validated on first use. Readers only ever see a fully
    /// validated catalog; a failed build is returned and not cached.
    pub fn embedded() -> Result<&'static Self, CatalogError> {
        EMBEDDED.get_or_try_init(Self::load_embedded)
    }

    /// Load catalog from a JSON file, gunzipping `.gz` files
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let is_gzip = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("gz"));

        let content = if is_gzip {
            let file = std::fs::File::open(path)?;
            let mut content = String::new();
            GzDecoder::new(file).read_to_string(&mut content)?;
            content
        } else {
            std::fs::read_to_string(path)?
        };

        info!("Loading catalog from {}", path.display());
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            warn!(
                "Catalog version mismatch (expected {}, found {})",
                CATALOG_VERSION, data.version
            );
        }

        Self::from_categories(data.categories)
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            categories: self.categories.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// All categories in authoring order
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub(crate) fn indexes(&self) -> &CatalogIndexes {
        &self.indexes
    }

    /// Number of categories in catalog
    #[must_use]
    pub fn len_categories(&self) -> usize {
        self.categories.len()
    }

    /// Number of entries across all categories
    #[must_use]
    pub fn len_entries(&self) -> usize {
        self.entry_count
    }

    /// Content fingerprint identifying this content version
    #[must_use]
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}
