//! [`PredictionCache`]: timestamp-keyed store with a latest pointer and lifespan eviction.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use emojilens_core::config::{defaults, CacheConfig};
use emojilens_core::constants::{NEMATODE_LABEL, THINKING_GLYPH};
use emojilens_core::models::CacheEntry;

use crate::picker::GlyphPicker;

/// Everything behind the lock.
#[derive(Debug)]
struct CacheState {
    entries: BTreeMap<DateTime<Utc>, CacheEntry>,
    latest: Option<DateTime<Utc>>,
    picker: GlyphPicker,
}

impl CacheState {
    /// Drop every entry older than `now - lifespan`. Returns how many went.
    fn evict(&mut self, now: DateTime<Utc>, lifespan: chrono::Duration) -> usize {
        let cutoff = now - lifespan;
        let kept = self.entries.split_off(&cutoff);
        let removed = self.entries.len();
        self.entries = kept;
        removed
    }
}

/// Short-lived cache of accepted results.
#[derive(Debug)]
pub struct PredictionCache {
    state: Mutex<CacheState>,
    lifespan: chrono::Duration,
}

impl PredictionCache {
    /// Cache with the default 5 s lifespan and an entropy-seeded picker.
    pub fn new() -> Self {
        Self::with_picker(
            Duration::from_millis(defaults::DEFAULT_LIFESPAN_MS),
            GlyphPicker::from_entropy(),
        )
    }

    pub fn with_picker(lifespan: Duration, picker: GlyphPicker) -> Self {
        Self {
            state: Mutex::new(CacheState {
                entries: BTreeMap::new(),
                latest: None,
                picker,
            }),
            lifespan: chrono::Duration::from_std(lifespan).unwrap_or_else(|_| {
                chrono::Duration::milliseconds(defaults::DEFAULT_LIFESPAN_MS as i64)
            }),
        }
    }

    /// Cache configured from the `[cache]` section.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::with_picker(
            config.lifespan(),
            GlyphPicker::from_seed_option(config.picker_seed),
        )
    }

    /// Accept a classification result observed at `now`.
    ///
    /// Evicts first. An empty label stores nothing. The nematode misclassification is
    /// stored as `("", "🤔")` whatever the candidates. Otherwise one non-empty candidate
    /// is picked at random; with no usable candidate nothing is stored.
    pub fn record(&self, label: &str, glyphs: &[String], now: DateTime<Utc>) -> Option<CacheEntry> {
        let mut state = self.lock();
        let evicted = state.evict(now, self.lifespan);
        if evicted > 0 {
            tracing::debug!(evicted, "expired cache entries");
        }

        if label.is_empty() {
            return None;
        }

        let entry = if label == NEMATODE_LABEL {
            CacheEntry::new(now, "", THINKING_GLYPH)
        } else {
            let Some(glyph) = state.picker.pick(glyphs) else {
                tracing::debug!(label, "no usable glyph for label, nothing cached");
                return None;
            };
            CacheEntry::new(now, label, glyph)
        };

        tracing::debug!(label = %entry.label, glyph = %entry.glyph, "cached prediction");
        state.entries.insert(now, entry.clone());
        // A late writer never moves the pointer back in time.
        state.latest = state.latest.max(Some(now));
        Some(entry)
    }

    /// Remove entries older than the lifespan relative to `now`.
    pub fn evict(&self, now: DateTime<Utc>) -> usize {
        self.lock().evict(now, self.lifespan)
    }

    /// Empty the store and forget the latest pointer (new session).
    pub fn clear(&self) {
        let mut state = self.lock();
        let dropped = state.entries.len();
        state.entries.clear();
        state.latest = None;
        tracing::info!(dropped, "prediction cache cleared");
    }

    /// The newest recorded entry, unless it has been evicted or cleared.
    ///
    /// Does not evict; readers that know the current time use
    /// [`PredictionCache::latest_at`].
    pub fn latest(&self) -> Option<CacheEntry> {
        let state = self.lock();
        state.latest.and_then(|ts| state.entries.get(&ts).cloned())
    }

    /// Evict relative to `now`, then return the newest live entry. Both happen under
    /// one lock, so an expired entry is never returned.
    pub fn latest_at(&self, now: DateTime<Utc>) -> Option<CacheEntry> {
        let mut state = self.lock();
        let evicted = state.evict(now, self.lifespan);
        if evicted > 0 {
            tracing::debug!(evicted, "expired cache entries on read");
        }
        state.latest.and_then(|ts| state.entries.get(&ts).cloned())
    }

    /// [`PredictionCache::latest_at`], or the thinking placeholder stamped `now`.
    pub fn latest_or_thinking(&self, now: DateTime<Utc>) -> CacheEntry {
        self.latest_at(now).unwrap_or_else(|| CacheEntry::thinking(now))
    }

    /// All live entries, oldest first.
    pub fn entries(&self) -> Vec<CacheEntry> {
        self.lock().entries.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    pub fn lifespan(&self) -> Duration {
        self.lifespan.to_std().unwrap_or_default()
    }

    // Every mutation is a single map call, so a poisoned lock still guards a consistent map.
    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for PredictionCache {
    fn default() -> Self {
        Self::new()
    }
}
