//! Memo of recent match results.
//!
//! Uses `moka::sync::Cache` keyed by the raw label. The classifier reports the same
//! label many frames in a row, so repeat lookups skip the tier scan entirely.
//! Valid only for the catalog it was filled from; the matcher owns one per catalog.

use moka::sync::Cache;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use emojilens_core::config::defaults;

use crate::engine::MatchOutcome;

/// Bounded, TTL-expiring memo with hit/miss tracking.
pub struct MatchMemo {
    cache: Cache<String, MatchOutcome>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MatchMemo {
    /// Create a memo with the default capacity and TTL.
    pub fn new() -> Self {
        Self::with_limits(
            defaults::DEFAULT_MEMO_CAPACITY,
            Duration::from_secs(defaults::DEFAULT_MEMO_TTL_SECS),
        )
    }

    pub fn with_limits(capacity: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(ttl)
            .build();
        Self {
            cache,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Memoised outcome for a label.
    pub fn get(&self, label: &str) -> Option<MatchOutcome> {
        match self.cache.get(label) {
            Some(v) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(v)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    pub fn insert(&self, label: String, outcome: MatchOutcome) {
        self.cache.insert(label, outcome);
    }

    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Total memo hits.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Total memo misses.
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Memo hit rate (0.0–1.0).
    pub fn hit_rate(&self) -> f64 {
        let h = self.hits() as f64;
        let m = self.misses() as f64;
        let total = h + m;
        if total == 0.0 {
            0.0
        } else {
            h / total
        }
    }

    /// Number of memoised labels. Approximate until pending maintenance runs.
    pub fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}

impl Default for MatchMemo {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MatchMemo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchMemo")
            .field("hits", &self.hits())
            .field("misses", &self.misses())
            .finish()
    }
}
