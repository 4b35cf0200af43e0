use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Label matcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Maximum number of glyphs returned for the face sentinel.
    pub face_candidate_cap: usize,
    /// Memoise label → glyph results.
    pub memo_enabled: bool,
    /// Maximum memoised labels.
    pub memo_capacity: u64,
    /// Lifetime of a memoised result in seconds.
    pub memo_ttl_secs: u64,
}

impl MatcherConfig {
    pub fn memo_ttl(&self) -> Duration {
        Duration::from_secs(self.memo_ttl_secs)
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            face_candidate_cap: defaults::DEFAULT_FACE_CANDIDATE_CAP,
            memo_enabled: defaults::DEFAULT_MEMO_ENABLED,
            memo_capacity: defaults::DEFAULT_MEMO_CAPACITY,
            memo_ttl_secs: defaults::DEFAULT_MEMO_TTL_SECS,
        }
    }
}
