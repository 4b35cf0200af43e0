//! # emojilens-catalog
//!
//! The immutable description → glyph/tag dataset.
//! Loaded once at startup; a missing or malformed source degrades to an empty
//! catalog instead of failing the process.

pub mod catalog;
pub mod loader;

pub use catalog::Catalog;
pub use loader::parse_records;
