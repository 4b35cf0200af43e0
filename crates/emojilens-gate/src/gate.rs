//! [`RefreshGate`]: dual-cadence limiter for classification and display refreshes.

use std::time::Duration;

use chrono::{DateTime, Utc};
use emojilens_core::config::{defaults, GateConfig};
use serde::{Deserialize, Serialize};

/// Outcome of one frame tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateDecision {
    /// Dispatch a classification now. The caller marks it via
    /// [`RefreshGate::mark_classified`] once dispatched.
    pub classify: bool,
    /// Refresh the display now. Already recorded by the gate.
    pub display: bool,
}

/// Rate limiter holding the last classification and last display instants.
#[derive(Debug, Clone)]
pub struct RefreshGate {
    last_classified: DateTime<Utc>,
    last_displayed: DateTime<Utc>,
    classify_interval: chrono::Duration,
    display_interval: chrono::Duration,
    narration_display_interval: chrono::Duration,
}

fn to_chrono(d: Duration) -> chrono::Duration {
    chrono::Duration::from_std(d).unwrap_or(chrono::Duration::MAX)
}

impl RefreshGate {
    /// Gate with default intervals (1 s classify, 1 s display, 2 s display under narration),
    /// both clocks starting at `start`.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self::with_intervals(
            start,
            Duration::from_millis(defaults::DEFAULT_CLASSIFY_INTERVAL_MS),
            Duration::from_millis(defaults::DEFAULT_DISPLAY_INTERVAL_MS),
            Duration::from_millis(defaults::DEFAULT_NARRATION_DISPLAY_INTERVAL_MS),
        )
    }

    pub fn with_intervals(
        start: DateTime<Utc>,
        classify: Duration,
        display: Duration,
        narration_display: Duration,
    ) -> Self {
        Self {
            last_classified: start,
            last_displayed: start,
            classify_interval: to_chrono(classify),
            display_interval: to_chrono(display),
            narration_display_interval: to_chrono(narration_display),
        }
    }

    /// Gate configured from the `[gate]` section.
    pub fn from_config(start: DateTime<Utc>, config: &GateConfig) -> Self {
        Self::with_intervals(
            start,
            config.classify_interval(),
            config.display_interval(),
            config.narration_display_interval(),
        )
    }

    /// Whether a classification cycle is due. Does not change state.
    pub fn should_classify(&self, now: DateTime<Utc>) -> bool {
        now - self.last_classified >= self.classify_interval
    }

    /// Record that a classification was dispatched at `now`.
    pub fn mark_classified(&mut self, now: DateTime<Utc>) {
        self.last_classified = now;
    }

    /// Whether a display refresh is due; if so, records `now` as the last refresh.
    pub fn should_display(&mut self, now: DateTime<Utc>, narration_active: bool) -> bool {
        if now - self.last_displayed >= self.display_interval_for(narration_active) {
            self.last_displayed = now;
            true
        } else {
            false
        }
    }

    /// Evaluate both cadences for one frame.
    pub fn tick(&mut self, now: DateTime<Utc>, narration_active: bool) -> GateDecision {
        GateDecision {
            classify: self.should_classify(now),
            display: self.should_display(now, narration_active),
        }
    }

    /// The display interval in force for the given narration state.
    pub fn display_interval_for(&self, narration_active: bool) -> chrono::Duration {
        if narration_active {
            self.narration_display_interval
        } else {
            self.display_interval
        }
    }

    pub fn last_classified(&self) -> DateTime<Utc> {
        self.last_classified
    }

    pub fn last_displayed(&self) -> DateTime<Utc> {
        self.last_displayed
    }
}
