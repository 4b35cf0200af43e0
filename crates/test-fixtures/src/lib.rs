//! Shared fixtures for emojilens tests: a sample catalog in the public emoji-dataset
//! shape, entry builders, and fixed instants.

use chrono::{DateTime, TimeZone, Utc};
use emojilens_core::models::SymbolEntry;

/// Sample dataset. 12 valid records followed by 3 that must be skipped.
pub const SAMPLE_CATALOG_JSON: &str = include_str!("../data/emojis.json");

/// Number of valid records in [`SAMPLE_CATALOG_JSON`].
pub const SAMPLE_VALID_RECORDS: usize = 12;

/// Number of records in [`SAMPLE_CATALOG_JSON`] tagged "face".
pub const SAMPLE_FACE_TAGGED: usize = 4;

/// Untagged entry.
pub fn entry(description: &str, glyph: &str) -> SymbolEntry {
    SymbolEntry::new(description, glyph)
}

/// Tagged entry.
pub fn tagged(description: &str, glyph: &str, tags: &[&str]) -> SymbolEntry {
    SymbolEntry::new(description, glyph).with_tags(tags.iter().copied())
}

/// `count` distinct face-tagged entries, glyphs `F0`, `F1`, ...
pub fn face_entries(count: usize) -> Vec<SymbolEntry> {
    (0..count)
        .map(|i| tagged(&format!("face number {i}"), &format!("F{i}"), &["face"]))
        .collect()
}

/// A fixed instant so tests never depend on the wall clock.
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 26)
        .single()
        .unwrap_or_else(Utc::now)
}

/// `t0()` shifted by `millis`.
pub fn at_ms(millis: i64) -> DateTime<Utc> {
    t0() + chrono::Duration::milliseconds(millis)
}

/// Parse the sample dataset into raw JSON values (for tests poking at the wire shape).
pub fn sample_records() -> Vec<serde_json::Value> {
    serde_json::from_str(SAMPLE_CATALOG_JSON).unwrap_or_default()
}
