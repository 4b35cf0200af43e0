use crate::index::CatalogIndex;

use super::LabelQuery;

/// Every glyph whose description equals the label, ignoring case.
pub fn matches(query: &LabelQuery<'_>, index: &CatalogIndex) -> Vec<String> {
    index
        .iter()
        .filter(|(description, _)| *description == query.lowered)
        .map(|(_, entry)| entry.glyph.clone())
        .collect()
}
