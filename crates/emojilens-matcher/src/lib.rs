//! # emojilens-matcher
//!
//! Turns a free-text classification label into candidate glyphs.
//!
//! ## Tiers
//!
//! Evaluated in order; the first tier with a non-empty result wins.
//!
//! | Tier | Rule |
//! |------|------|
//! | Exact | case-insensitive description equality, all glyphs returned |
//! | Face | label is the `"face"` sentinel: face-tagged glyphs, capped at 71 |
//! | Frequency | per-word description hits plus containment hits, tallied; best count wins |
//!
//! Containment ("close") hits are not a tier of their own; they feed the frequency tally.
//! Ties in the tally go to the glyph seen first, never to alphabetical order.

pub mod engine;
pub mod index;
pub mod memo;
pub mod segments;
pub mod tiers;

pub use engine::{LabelMatcher, MatchOutcome};
pub use index::CatalogIndex;
pub use memo::MatchMemo;
pub use segments::split_segments;
pub use tiers::MatchTier;
