//! # emojilens-observability
//!
//! Structured logging for the glyph engine: subscriber setup driven by
//! `EMOJILENS_LOG` or the `[observability]` config section, and span macros for
//! the hot operations.

pub mod tracing_setup;

pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
