//! Span definitions per operation: match, record, tick, ingest.
//!
//! Each span carries its key fields via the `tracing` crate.

/// Create a label-matching span.
#[macro_export]
macro_rules! match_span {
    ($label:expr) => {
        tracing::debug_span!("emojilens.match", label = %$label)
    };
}

/// Create a cache-record span.
#[macro_export]
macro_rules! record_span {
    ($label:expr, $candidates:expr) => {
        tracing::debug_span!("emojilens.record", label = %$label, candidates = $candidates)
    };
}

/// Create a frame-tick span.
#[macro_export]
macro_rules! tick_span {
    ($narration:expr) => {
        tracing::trace_span!("emojilens.tick", narration = $narration)
    };
}

/// Create an observation-ingest span.
#[macro_export]
macro_rules! ingest_span {
    ($source:expr) => {
        tracing::debug_span!("emojilens.ingest", source = %$source)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const MATCH: &str = "emojilens.match";
    pub const RECORD: &str = "emojilens.record";
    pub const TICK: &str = "emojilens.tick";
    pub const INGEST: &str = "emojilens.ingest";
}
