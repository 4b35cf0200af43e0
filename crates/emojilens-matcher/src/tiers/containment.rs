use crate::index::CatalogIndex;

use super::LabelQuery;

/// The "close" set: glyphs whose description contains the label, whose description
/// is contained in the label, or whose tags include the label.
pub fn close(query: &LabelQuery<'_>, index: &CatalogIndex) -> Vec<String> {
    let label = query.lowered.as_str();
    index
        .iter()
        .filter(|(description, entry)| {
            description.contains(label)
                || label.contains(description)
                || entry.tags.iter().any(|t| t == label)
        })
        .map(|(_, entry)| entry.glyph.clone())
        .collect()
}
