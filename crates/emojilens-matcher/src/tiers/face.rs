use emojilens_core::constants::{FACE_SENTINEL, FACE_TAG};

use crate::index::CatalogIndex;

use super::LabelQuery;

/// Face-tagged glyphs for the face detector's sentinel label, at most `cap` of them.
///
/// The sentinel comparison is exact; `"Face"` is an ordinary label.
pub fn matches(query: &LabelQuery<'_>, index: &CatalogIndex, cap: usize) -> Vec<String> {
    if query.raw != FACE_SENTINEL {
        return Vec::new();
    }
    index
        .iter()
        .filter(|(_, entry)| entry.has_tag(FACE_TAG))
        .take(cap)
        .map(|(_, entry)| entry.glyph.clone())
        .collect()
}
