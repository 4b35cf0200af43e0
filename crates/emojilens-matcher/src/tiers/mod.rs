//! Matching tiers, evaluated by [`crate::LabelMatcher`] in priority order.

pub mod containment;
pub mod exact;
pub mod face;
pub mod frequency;

use serde::{Deserialize, Serialize};

/// Which tier produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchTier {
    Exact,
    Face,
    Frequency,
}

impl MatchTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Face => "face",
            Self::Frequency => "frequency",
        }
    }
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A label prepared once for every tier.
#[derive(Debug, Clone)]
pub struct LabelQuery<'a> {
    /// As received. The face sentinel is compared against this.
    pub raw: &'a str,
    pub lowered: String,
}

impl<'a> LabelQuery<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lowered: raw.to_lowercase(),
        }
    }
}
