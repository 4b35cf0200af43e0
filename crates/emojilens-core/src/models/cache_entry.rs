use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::THINKING_GLYPH;

/// An accepted (label, glyph) result, keyed by the instant it was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub timestamp: DateTime<Utc>,
    pub label: String,
    pub glyph: String,
}

impl CacheEntry {
    pub fn new(
        timestamp: DateTime<Utc>,
        label: impl Into<String>,
        glyph: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            label: label.into(),
            glyph: glyph.into(),
        }
    }

    /// The neutral "still thinking" value shown when nothing is cached.
    pub fn thinking(timestamp: DateTime<Utc>) -> Self {
        Self::new(timestamp, "", THINKING_GLYPH)
    }

    pub fn is_thinking(&self) -> bool {
        self.label.is_empty() && self.glyph == THINKING_GLYPH
    }
}
