//! # emojilens-cache
//!
//! Holds the most recent accepted (label, glyph) results for a short lifespan
//! (5 s by default) so a renderer running on its own cadence always has a stable
//! value to read between classification events.
//!
//! All mutation goes through one `Mutex`: eviction-then-insert is atomic with
//! respect to concurrent detectors, and `latest()` never sees a half-applied write.

pub mod picker;
pub mod store;

pub use picker::GlyphPicker;
pub use store::PredictionCache;
