//! Detector feed: many producers, one consumer.
//!
//! The object classifier and the face detector complete independently. Each holds a
//! cloned [`FeedSender`]; a single spawned task drains the channel in arrival order
//! and ingests every observation into the engine.

use std::sync::Arc;

use emojilens_core::config::FeedConfig;
use emojilens_core::constants::FACE_SENTINEL;
use emojilens_core::errors::FeedError;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::engine::EmojiLens;

/// Which detector produced an observation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetectorSource {
    ObjectClassifier,
    FaceDetector,
    Other(String),
}

impl DetectorSource {
    pub fn name(&self) -> &str {
        match self {
            Self::ObjectClassifier => "object-classifier",
            Self::FaceDetector => "face-detector",
            Self::Other(name) => name,
        }
    }
}

impl std::fmt::Display for DetectorSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One detector result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub source: DetectorSource,
    pub label: String,
}

/// Producer handle. Cheap to clone; one per detector.
#[derive(Debug, Clone)]
pub struct FeedSender {
    tx: mpsc::Sender<Observation>,
}

impl FeedSender {
    /// Queue a label, waiting for channel capacity.
    pub async fn send(
        &self,
        source: DetectorSource,
        label: impl Into<String>,
    ) -> Result<(), FeedError> {
        let observation = Observation {
            source,
            label: label.into(),
        };
        self.tx.send(observation).await.map_err(|e| FeedError::Closed {
            source_name: e.0.source.to_string(),
        })
    }

    /// Queue a label without waiting. A full channel drops the observation; the next
    /// classification cycle supersedes it anyway.
    pub fn try_send(
        &self,
        source: DetectorSource,
        label: impl Into<String>,
    ) -> Result<bool, FeedError> {
        let observation = Observation {
            source,
            label: label.into(),
        };
        match self.tx.try_send(observation) {
            Ok(()) => Ok(true),
            Err(mpsc::error::TrySendError::Full(dropped)) => {
                tracing::debug!(source = %dropped.source, "feed full, observation dropped");
                Ok(false)
            }
            Err(mpsc::error::TrySendError::Closed(dropped)) => Err(FeedError::Closed {
                source_name: dropped.source.to_string(),
            }),
        }
    }

    /// The face detector found at least one face.
    pub async fn face_detected(&self) -> Result<(), FeedError> {
        self.send(DetectorSource::FaceDetector, FACE_SENTINEL).await
    }
}

/// The consumer side: a spawned task that owns the receive end.
#[derive(Debug)]
pub struct LabelFeed {
    handle: JoinHandle<usize>,
}

impl LabelFeed {
    /// Spawn the consumer on the current tokio runtime.
    pub fn spawn(engine: Arc<EmojiLens>, capacity: usize) -> (FeedSender, LabelFeed) {
        let (tx, mut rx) = mpsc::channel::<Observation>(capacity.max(1));
        let handle = tokio::spawn(async move {
            let mut ingested = 0usize;
            while let Some(observation) = rx.recv().await {
                engine.ingest_from(observation.source.name(), &observation.label);
                ingested += 1;
            }
            tracing::debug!(ingested, "detector feed drained");
            ingested
        });
        (FeedSender { tx }, LabelFeed { handle })
    }

    /// Spawn the consumer with the channel capacity from the `[feed]` section.
    pub fn from_config(engine: Arc<EmojiLens>, config: &FeedConfig) -> (FeedSender, LabelFeed) {
        Self::spawn(engine, config.capacity)
    }

    /// Stop the consumer. Observations still queued are discarded and later sends
    /// fail with [`FeedError::Closed`].
    pub fn abort(&self) {
        self.handle.abort();
    }

    /// Wait for every sender to be dropped and the queue to drain.
    /// Returns how many observations were ingested.
    pub async fn join(self) -> Result<usize, FeedError> {
        self.handle.await.map_err(|e| FeedError::ConsumerFailed {
            reason: e.to_string(),
        })
    }
}
