//! LabelMatcher: runs the tiers in order, optionally behind a memo.
//!
//! Implements `IGlyphMatcher` from emojilens-core.

use std::sync::Arc;

use emojilens_catalog::Catalog;
use emojilens_core::config::MatcherConfig;
use emojilens_core::constants::FACE_CANDIDATE_CAP;
use emojilens_core::traits::IGlyphMatcher;
use serde::{Deserialize, Serialize};

use crate::index::CatalogIndex;
use crate::memo::MatchMemo;
use crate::segments::split_segments;
use crate::tiers::{self, LabelQuery, MatchTier};

/// Candidate glyphs for one label and the tier that produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// `None` when nothing matched.
    pub tier: Option<MatchTier>,
    pub glyphs: Vec<String>,
}

impl MatchOutcome {
    fn none() -> Self {
        Self::default()
    }

    fn from_tier(tier: MatchTier, glyphs: Vec<String>) -> Option<Self> {
        (!glyphs.is_empty()).then_some(Self {
            tier: Some(tier),
            glyphs,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// Tiered label matcher over an immutable catalog.
#[derive(Debug)]
pub struct LabelMatcher {
    index: CatalogIndex,
    face_cap: usize,
    memo: Option<MatchMemo>,
}

impl LabelMatcher {
    /// Matcher with the default face cap and no memo.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            index: CatalogIndex::new(catalog),
            face_cap: FACE_CANDIDATE_CAP,
            memo: None,
        }
    }

    /// Matcher configured from the `[matcher]` section.
    pub fn from_config(catalog: Arc<Catalog>, config: &MatcherConfig) -> Self {
        let matcher = Self::new(catalog).with_face_cap(config.face_candidate_cap);
        if config.memo_enabled {
            matcher.with_memo(MatchMemo::with_limits(config.memo_capacity, config.memo_ttl()))
        } else {
            matcher
        }
    }

    pub fn with_face_cap(mut self, cap: usize) -> Self {
        self.face_cap = cap;
        self
    }

    pub fn with_memo(mut self, memo: MatchMemo) -> Self {
        self.memo = Some(memo);
        self
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        self.index.catalog()
    }

    pub fn memo(&self) -> Option<&MatchMemo> {
        self.memo.as_ref()
    }

    /// Candidate glyphs for `label`. Never fails; no match is an empty vec.
    pub fn match_label(&self, label: &str) -> Vec<String> {
        self.match_with_tier(label).glyphs
    }

    /// Like [`LabelMatcher::match_label`], also reporting the winning tier.
    pub fn match_with_tier(&self, label: &str) -> MatchOutcome {
        if label.trim().is_empty() {
            return MatchOutcome::none();
        }
        if let Some(memo) = &self.memo {
            if let Some(hit) = memo.get(label) {
                return hit;
            }
        }

        let outcome = self.run_tiers(label);
        tracing::debug!(
            label,
            tier = outcome.tier.map(|t| t.as_str()).unwrap_or("none"),
            candidates = outcome.glyphs.len(),
            "label matched"
        );

        if let Some(memo) = &self.memo {
            memo.insert(label.to_string(), outcome.clone());
        }
        outcome
    }

    /// Match every comma segment of a multi-class label and pool the candidates,
    /// segment by segment.
    pub fn match_segments(&self, label: &str) -> Vec<String> {
        split_segments(label)
            .into_iter()
            .flat_map(|segment| self.match_label(segment))
            .collect()
    }

    fn run_tiers(&self, label: &str) -> MatchOutcome {
        let query = LabelQuery::new(label);

        // Tier 1: Exact
        if let Some(outcome) =
            MatchOutcome::from_tier(MatchTier::Exact, tiers::exact::matches(&query, &self.index))
        {
            return outcome;
        }

        // Tier 2: Face sentinel
        if let Some(outcome) = MatchOutcome::from_tier(
            MatchTier::Face,
            tiers::face::matches(&query, &self.index, self.face_cap),
        ) {
            return outcome;
        }

        // Tier 3 feeds tier 4: containment hits are tallied with the per-word hits.
        let close = tiers::containment::close(&query, &self.index);
        MatchOutcome::from_tier(
            MatchTier::Frequency,
            tiers::frequency::matches(&query, &self.index, &close),
        )
        .unwrap_or_else(MatchOutcome::none)
    }
}

impl IGlyphMatcher for LabelMatcher {
    fn match_label(&self, label: &str) -> Vec<String> {
        LabelMatcher::match_label(self, label)
    }
}
