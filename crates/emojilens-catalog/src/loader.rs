//! JSON record parsing.
//!
//! The source is a top-level array. Each record needs a `description` and a glyph,
//! where the glyph field may be spelled `glyph`, `emoji`, or `value`. `tags` is
//! optional. A blank description counts as missing. Records that fail these rules
//! are skipped, not fatal.

use std::io::ErrorKind;
use std::path::Path;

use emojilens_core::errors::CatalogError;
use emojilens_core::models::SymbolEntry;
use serde::Deserialize;
use serde_json::Value;

/// Wire shape of one record. Unknown fields (category, aliases, ...) are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    description: String,
    #[serde(alias = "emoji", alias = "value")]
    glyph: String,
    #[serde(default)]
    tags: Vec<String>,
}

impl From<RawRecord> for SymbolEntry {
    fn from(raw: RawRecord) -> Self {
        SymbolEntry {
            description: raw.description,
            tags: raw.tags,
            glyph: raw.glyph,
        }
    }
}

pub(crate) fn read_source(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::SourceMissing {
            path: path.display().to_string(),
        },
        _ => CatalogError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        },
    })
}

/// Parse a JSON array into entries, skipping records without the required fields.
pub fn parse_records(source: &str) -> Result<Vec<SymbolEntry>, CatalogError> {
    let root: Value = serde_json::from_str(source).map_err(|e| CatalogError::Malformed {
        reason: e.to_string(),
    })?;
    let Value::Array(records) = root else {
        return Err(CatalogError::Malformed {
            reason: "expected a top-level array of records".to_string(),
        });
    };

    let total = records.len();
    let entries: Vec<SymbolEntry> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<RawRecord>(record) {
            Ok(raw) if raw.description.trim().is_empty() => {
                tracing::debug!(index, "skipping catalog record with blank description");
                None
            }
            Ok(raw) => Some(raw.into()),
            Err(e) => {
                tracing::debug!(index, error = %e, "skipping catalog record");
                None
            }
        })
        .collect();

    if entries.len() < total {
        tracing::debug!(
            kept = entries.len(),
            skipped = total - entries.len(),
            "catalog records skipped"
        );
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_aliases_are_accepted() {
        let entries = parse_records(
            r#"[
                {"description": "cat", "glyph": "🐱"},
                {"description": "dog", "emoji": "🐶"},
                {"description": "fox", "value": "🦊"}
            ]"#,
        )
        .unwrap();
        let glyphs: Vec<&str> = entries.iter().map(|e| e.glyph.as_str()).collect();
        assert_eq!(glyphs, ["🐱", "🐶", "🦊"]);
    }

    #[test]
    fn blank_description_is_skipped() {
        let entries = parse_records(
            r#"[{"description": "  ", "glyph": "👻"}, {"description": "cat", "glyph": "🐱"}]"#,
        )
        .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].description, "cat");
    }

    #[test]
    fn non_array_root_is_malformed() {
        let err = parse_records(r#"{"description": "cat"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { .. }));
    }
}
