//! # emojilens-core
//!
//! Foundation crate for the emojilens glyph engine.
//! Defines the shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::LensConfig;
pub use errors::{LensError, LensResult};
pub use models::{CacheEntry, DisplayFrame, SymbolEntry};
pub use traits::{Clock, IGlyphMatcher, ManualClock, SystemClock};
