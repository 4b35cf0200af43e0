use std::sync::Arc;

use emojilens_catalog::Catalog;
use emojilens_core::config::{FeedConfig, LensConfig};
use emojilens_core::errors::FeedError;
use emojilens_core::traits::SystemClock;
use emojilens_engine::{DetectorSource, EmojiLens, LabelFeed};
use test_fixtures::SAMPLE_CATALOG_JSON;

fn lens() -> Arc<EmojiLens> {
    let mut config = LensConfig::default();
    config.cache.picker_seed = Some(2);
    let catalog = Catalog::from_json_str(SAMPLE_CATALOG_JSON).unwrap();
    Arc::new(EmojiLens::new(Arc::new(catalog), &config, Arc::new(SystemClock)))
}

#[tokio::test]
async fn two_detectors_feed_one_consumer() {
    let lens = lens();
    let (sender, feed) = LabelFeed::spawn(lens.clone(), 8);

    let objects = sender.clone();
    let faces = sender.clone();
    drop(sender);

    let object_task = tokio::spawn(async move {
        for label in ["laptop", "keyboard", "hot beverage"] {
            objects
                .send(DetectorSource::ObjectClassifier, label)
                .await
                .unwrap();
        }
    });
    let face_task = tokio::spawn(async move {
        for _ in 0..3 {
            faces.face_detected().await.unwrap();
        }
    });
    object_task.await.unwrap();
    face_task.await.unwrap();

    let ingested = feed.join().await.unwrap();
    assert_eq!(ingested, 6);

    let latest = lens.cache().latest().unwrap();
    assert!(latest.label == "face" || latest.label == "hot beverage");
}

#[tokio::test]
async fn try_send_reports_delivery() {
    let lens = lens();
    let (sender, feed) = LabelFeed::spawn(lens.clone(), 4);
    let delivered = sender
        .try_send(DetectorSource::Other("test-probe".into()), "fox")
        .unwrap();
    assert!(delivered);
    drop(sender);

    assert_eq!(feed.join().await.unwrap(), 1);
    assert_eq!(lens.cache().latest().unwrap().glyph, "🦊");
}

#[tokio::test]
async fn sending_after_consumer_exit_is_an_error() {
    let lens = lens();
    let (sender, feed) = LabelFeed::spawn(lens, 1);

    feed.abort();
    let _ = feed.join().await;

    let err = sender
        .send(DetectorSource::ObjectClassifier, "laptop")
        .await
        .unwrap_err();
    assert!(matches!(err, FeedError::Closed { .. }));
}

#[tokio::test]
async fn configured_capacity_bounds_the_queue() {
    let lens = lens();
    let config = LensConfig::from_toml("[feed]\ncapacity = 2\n").unwrap();
    let (sender, feed) = LabelFeed::from_config(lens.clone(), &config.feed);

    // Current-thread runtime: the consumer cannot drain until this task yields.
    let source = DetectorSource::ObjectClassifier;
    assert!(sender.try_send(source.clone(), "fox").unwrap());
    assert!(sender.try_send(source.clone(), "laptop").unwrap());
    assert!(!sender.try_send(source, "keyboard").unwrap());
    drop(sender);

    assert_eq!(feed.join().await.unwrap(), 2);
}

#[tokio::test]
async fn zero_capacity_still_accepts_one_observation() {
    let lens = lens();
    let (sender, feed) = LabelFeed::from_config(lens, &FeedConfig { capacity: 0 });
    assert!(sender.try_send(DetectorSource::FaceDetector, "face").unwrap());
    drop(sender);
    assert_eq!(feed.join().await.unwrap(), 1);
}
