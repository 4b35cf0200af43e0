//! [`Catalog`]: ordered, read-only sequence of [`SymbolEntry`].

use std::path::Path;

use emojilens_core::errors::CatalogError;
use emojilens_core::models::SymbolEntry;

use crate::loader;

/// Ordered symbol catalog. Insertion order is kept for stable iteration during ties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<SymbolEntry>,
}

impl Catalog {
    /// An empty catalog: the degraded-but-running state.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<SymbolEntry>) -> Self {
        Self { entries }
    }

    /// Parse a JSON array of records. Invalid records are skipped.
    pub fn from_json_str(source: &str) -> Result<Self, CatalogError> {
        loader::parse_records(source).map(Self::from_entries)
    }

    /// Read and parse a JSON catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let source = loader::read_source(path)?;
        let catalog = Self::from_json_str(&source)?;
        tracing::info!(path = %path.display(), entries = catalog.len(), "symbol catalog loaded");
        Ok(catalog)
    }

    /// Like [`Catalog::load`], but any failure yields an empty catalog.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "symbol catalog unavailable, running with empty catalog"
                );
                Self::empty()
            }
        }
    }

    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SymbolEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a SymbolEntry;
    type IntoIter = std::slice::Iter<'a, SymbolEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<SymbolEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = SymbolEntry>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}
