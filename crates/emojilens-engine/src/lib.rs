//! # emojilens-engine
//!
//! The piece the host application talks to.
//!
//! - `ingest(label)`: a detector finished; match the label and cache the result
//! - `tick(narration)`: once per render frame; says whether to classify and, when a
//!   display refresh is due, what to show
//! - `restart_session()`: drop everything cached for the previous session
//!
//! Detectors that complete on their own threads push into a [`LabelFeed`], which
//! funnels every observation through one consumer task.

pub mod engine;
pub mod feed;

pub use engine::{EmojiLens, LensStatus, TickOutcome};
pub use feed::{DetectorSource, FeedSender, LabelFeed, Observation};
