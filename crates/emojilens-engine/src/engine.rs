//! [`EmojiLens`]: owns the matcher, prediction cache, refresh gate, and clock.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use emojilens_cache::PredictionCache;
use emojilens_catalog::Catalog;
use emojilens_core::config::LensConfig;
use emojilens_core::errors::LensResult;
use emojilens_core::models::{CacheEntry, DisplayFrame};
use emojilens_core::traits::{Clock, SystemClock};
use emojilens_gate::RefreshGate;
use emojilens_matcher::LabelMatcher;
use emojilens_observability::{ingest_span, match_span, record_span, tick_span};
use serde::{Deserialize, Serialize};

/// What one render frame should do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickOutcome {
    /// A classification cycle is due.
    pub classify: bool,
    /// Present when a display refresh is due.
    pub frame: Option<DisplayFrame>,
}

/// Point-in-time view of the engine for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LensStatus {
    pub version: String,
    pub catalog_entries: usize,
    pub cached_entries: usize,
    pub latest: Option<CacheEntry>,
    pub memo_hit_rate: Option<f64>,
}

/// The glyph engine. Shareable across threads; wrap in `Arc` to feed it from detectors.
pub struct EmojiLens {
    matcher: LabelMatcher,
    cache: PredictionCache,
    gate: Mutex<RefreshGate>,
    clock: Arc<dyn Clock>,
}

impl EmojiLens {
    /// Build from an already-loaded catalog.
    pub fn new(catalog: Arc<Catalog>, config: &LensConfig, clock: Arc<dyn Clock>) -> Self {
        let matcher = LabelMatcher::from_config(catalog, &config.matcher);
        let cache = PredictionCache::from_config(&config.cache);
        let gate = RefreshGate::from_config(clock.now(), &config.gate);
        tracing::info!(
            catalog_entries = matcher.catalog().len(),
            lifespan_ms = config.cache.lifespan_ms,
            "emojilens engine ready"
        );
        Self {
            matcher,
            cache,
            gate: Mutex::new(gate),
            clock,
        }
    }

    /// Load the catalog named in `config` (empty if unavailable) and build on the wall clock.
    pub fn from_config(config: &LensConfig) -> Self {
        Self::from_config_with_clock(config, Arc::new(SystemClock))
    }

    pub fn from_config_with_clock(config: &LensConfig, clock: Arc<dyn Clock>) -> Self {
        let catalog = Arc::new(Catalog::load_or_empty(&config.catalog.path));
        if catalog.is_empty() {
            tracing::warn!(
                path = %config.catalog.path,
                "running in degraded mode: no glyphs available"
            );
        }
        Self::new(catalog, config, clock)
    }

    /// A detector produced `label`. Matches every comma segment and caches one glyph.
    ///
    /// Returns the cached entry, or `None` when nothing was stored.
    pub fn ingest(&self, label: &str) -> Option<CacheEntry> {
        let candidates = {
            let span = match_span!(label);
            let _guard = span.enter();
            self.matcher.match_segments(label)
        };
        let span = record_span!(label, candidates.len());
        let _guard = span.enter();
        self.cache.record(label, &candidates, self.clock.now())
    }

    /// Same as [`EmojiLens::ingest`], tagged with the detector that produced it.
    pub fn ingest_from(&self, source: &str, label: &str) -> Option<CacheEntry> {
        let span = ingest_span!(source);
        let _guard = span.enter();
        self.ingest(label)
    }

    /// One render frame. The display gate is consumed when it fires; the classify gate
    /// is only consumed by [`EmojiLens::mark_classified`].
    pub fn tick(&self, narration_active: bool) -> TickOutcome {
        let span = tick_span!(narration_active);
        let _guard = span.enter();

        let now = self.clock.now();
        let decision = self.lock_gate().tick(now, narration_active);
        TickOutcome {
            classify: decision.classify,
            frame: decision.display.then(|| self.frame_at(now)),
        }
    }

    /// Record that classification was dispatched now.
    pub fn mark_classified(&self) {
        let now = self.clock.now();
        self.lock_gate().mark_classified(now);
    }

    /// What to show right now: the latest live result or the thinking fallback.
    /// Expired results are evicted first.
    pub fn display_frame(&self) -> DisplayFrame {
        self.frame_at(self.clock.now())
    }

    /// Forget everything cached for the previous session.
    pub fn restart_session(&self) {
        self.cache.clear();
    }

    /// Explicit eviction sweep at the current time.
    pub fn evict_expired(&self) -> usize {
        self.cache.evict(self.clock.now())
    }

    pub fn matcher(&self) -> &LabelMatcher {
        &self.matcher
    }

    pub fn cache(&self) -> &PredictionCache {
        &self.cache
    }

    pub fn status(&self) -> LensStatus {
        let latest = self.cache.latest_at(self.clock.now());
        LensStatus {
            version: emojilens_core::constants::VERSION.to_string(),
            catalog_entries: self.matcher.catalog().len(),
            cached_entries: self.cache.len(),
            latest,
            memo_hit_rate: self.matcher.memo().map(|m| m.hit_rate()),
        }
    }

    /// [`EmojiLens::status`] as JSON.
    pub fn status_json(&self) -> LensResult<serde_json::Value> {
        Ok(serde_json::to_value(self.status())?)
    }

    fn frame_at(&self, now: DateTime<Utc>) -> DisplayFrame {
        DisplayFrame::from_entry(self.cache.latest_at(now).as_ref())
    }

    fn lock_gate(&self) -> std::sync::MutexGuard<'_, RefreshGate> {
        self.gate.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl std::fmt::Debug for EmojiLens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmojiLens")
            .field("matcher", &self.matcher)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
