//! Lower-cased view of the catalog, built once so tiers never re-fold descriptions.

use std::sync::Arc;

use emojilens_catalog::Catalog;
use emojilens_core::models::SymbolEntry;

/// Catalog plus pre-lowered descriptions, index-aligned with the entries.
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    catalog: Arc<Catalog>,
    lowered: Vec<String>,
}

impl CatalogIndex {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let lowered = catalog
            .iter()
            .map(|e| e.description.to_lowercase())
            .collect();
        Self { catalog, lowered }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// `(lowered description, entry)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SymbolEntry)> {
        self.lowered
            .iter()
            .map(String::as_str)
            .zip(self.catalog.iter())
    }

    pub fn len(&self) -> usize {
        self.lowered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lowered.is_empty()
    }
}
