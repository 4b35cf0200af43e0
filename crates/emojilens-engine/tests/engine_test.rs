use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use emojilens_catalog::Catalog;
use emojilens_core::config::LensConfig;
use emojilens_core::models::{CacheEntry, DisplayFrame};
use emojilens_core::traits::ManualClock;
use emojilens_engine::EmojiLens;
use test_fixtures::{entry, t0, SAMPLE_CATALOG_JSON, SAMPLE_VALID_RECORDS};

fn seeded_config() -> LensConfig {
    let mut config = LensConfig::default();
    config.cache.picker_seed = Some(5);
    config
}

fn lens_with(entries: Vec<emojilens_core::SymbolEntry>) -> (EmojiLens, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(t0()));
    let lens = EmojiLens::new(
        Arc::new(Catalog::from_entries(entries)),
        &seeded_config(),
        clock.clone(),
    );
    (lens, clock)
}

fn sample_lens() -> (EmojiLens, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(t0()));
    let catalog = Catalog::from_json_str(SAMPLE_CATALOG_JSON).unwrap();
    let lens = EmojiLens::new(Arc::new(catalog), &seeded_config(), clock.clone());
    (lens, clock)
}

// ── End-to-end scenarios ─────────────────────────────────────────────────

#[test]
fn cat_label_flows_from_match_to_latest() {
    let (lens, _clock) = lens_with(vec![entry("cat", "🐱")]);
    assert_eq!(lens.matcher().match_label("cat"), vec!["🐱"]);

    let stored = lens.ingest("cat").unwrap();
    assert_eq!(stored, CacheEntry::new(t0(), "cat", "🐱"));
    assert_eq!(lens.cache().latest(), Some(CacheEntry::new(t0(), "cat", "🐱")));
}

#[test]
fn empty_catalog_ingests_nothing_and_shows_thinking() {
    let (lens, _clock) = lens_with(vec![]);
    assert!(lens.matcher().match_label("anything").is_empty());
    assert!(lens.ingest("anything").is_none());
    assert!(lens.cache().is_empty());
    assert!(lens.display_frame().is_thinking());
}

#[test]
fn multi_class_label_is_cached_with_full_label() {
    let (lens, _clock) = sample_lens();
    let stored = lens.ingest("Egyptian cat, cat").unwrap();
    assert_eq!(stored.label, "Egyptian cat, cat");
    assert_eq!(stored.glyph, "🐈");

    let frame = lens.display_frame();
    assert_eq!(frame.about_text, "Egyptian cat, cat");
    assert_eq!(frame.accessibility_label, "Egyptian cat");
}

#[test]
fn face_sentinel_caches_a_face_glyph() {
    let (lens, _clock) = sample_lens();
    let stored = lens.ingest("face").unwrap();
    assert_eq!(stored.label, "face");
    assert!(["😀", "😃", "🙂", "🤔"].contains(&stored.glyph.as_str()));
}

#[test]
fn nematode_misclassification_shows_thinking() {
    let (lens, _clock) = sample_lens();
    lens.ingest("nematode, nematode worm, roundworm");
    assert!(lens.display_frame().is_thinking());
    assert_eq!(lens.cache().len(), 1);
}

// ── Time-driven behaviour ────────────────────────────────────────────────

#[test]
fn result_expires_after_lifespan() {
    let (lens, clock) = sample_lens();
    lens.ingest("laptop");
    assert_eq!(lens.display_frame().glyph, "💻");

    clock.advance(Duration::from_millis(4_999));
    assert_eq!(lens.display_frame().glyph, "💻");

    clock.advance(Duration::from_millis(2));
    assert_eq!(lens.display_frame(), DisplayFrame::thinking());
    assert!(lens.cache().is_empty());
}

#[test]
fn explicit_sweep_counts_expired_entries() {
    let (lens, clock) = sample_lens();
    lens.ingest("laptop");

    clock.advance(Duration::from_millis(4_999));
    assert_eq!(lens.evict_expired(), 0);

    clock.advance(Duration::from_millis(2));
    assert_eq!(lens.evict_expired(), 1);
}

#[test]
fn quiet_detectors_fall_back_to_thinking_on_tick() {
    let (lens, clock) = lens_with(vec![entry("cat", "🐱")]);
    lens.ingest("cat");

    clock.advance(Duration::from_secs(60));
    let frame = lens.tick(false).frame.unwrap();
    assert!(frame.is_thinking());
    assert!(lens.cache().latest().is_none());
}

#[test]
fn status_never_reports_an_expired_result() {
    let (lens, clock) = lens_with(vec![entry("cat", "🐱")]);
    lens.ingest("cat");

    clock.advance(Duration::from_secs(6));
    let status = lens.status();
    assert!(status.latest.is_none());
    assert_eq!(status.cached_entries, 0);
}

#[test]
fn tick_drives_classification_and_display_independently() {
    let (lens, clock) = sample_lens();

    let first = lens.tick(false);
    assert!(!first.classify);
    assert!(first.frame.is_none());

    clock.advance(Duration::from_secs(1));
    let due = lens.tick(false);
    assert!(due.classify);
    assert!(due.frame.as_ref().unwrap().is_thinking());

    // Dispatch a classification; its result lands in the cache.
    lens.mark_classified();
    lens.ingest("hot beverage");

    clock.advance(Duration::from_millis(500));
    let between = lens.tick(false);
    assert!(!between.classify);
    assert!(between.frame.is_none());

    clock.advance(Duration::from_millis(500));
    let next = lens.tick(false);
    assert!(next.classify);
    assert_eq!(next.frame.unwrap().glyph, "☕");
}

#[test]
fn narration_slows_display_but_not_classification() {
    let (lens, clock) = sample_lens();
    clock.advance(Duration::from_secs(1));
    let outcome = lens.tick(true);
    assert!(outcome.classify);
    assert!(outcome.frame.is_none());

    clock.advance(Duration::from_secs(1));
    assert!(lens.tick(true).frame.is_some());
}

// ── Session restart ──────────────────────────────────────────────────────

#[test]
fn restart_session_drops_stale_labels() {
    let (lens, _clock) = sample_lens();
    lens.ingest("keyboard");
    lens.restart_session();
    assert!(lens.cache().latest().is_none());
    assert!(lens.display_frame().is_thinking());
}

// ── Construction from config ─────────────────────────────────────────────

#[test]
fn from_config_loads_catalog_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_CATALOG_JSON.as_bytes()).unwrap();

    let toml = format!(
        "[catalog]\npath = {:?}\n\n[cache]\npicker_seed = 1\n",
        file.path().display().to_string()
    );
    let config = LensConfig::from_toml(&toml).unwrap();
    let lens = EmojiLens::from_config(&config);
    assert_eq!(lens.status().catalog_entries, SAMPLE_VALID_RECORDS);
}

#[test]
fn from_config_degrades_to_empty_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = LensConfig::default();
    config.catalog.path = dir.path().join("missing.json").display().to_string();

    let lens = EmojiLens::from_config(&config);
    assert_eq!(lens.status().catalog_entries, 0);
    assert!(lens.ingest("cat").is_none());
    assert!(lens.display_frame().is_thinking());
}

// ── Status ───────────────────────────────────────────────────────────────

#[test]
fn status_json_reports_cache_and_memo() {
    let (lens, _clock) = sample_lens();
    lens.ingest("fox");
    lens.ingest("fox");

    let status = lens.status_json().unwrap();
    assert_eq!(status["catalog_entries"], SAMPLE_VALID_RECORDS);
    assert_eq!(status["cached_entries"], 1); // same instant, same key
    assert_eq!(status["latest"]["glyph"], "🦊");
    assert!(status["memo_hit_rate"].as_f64().unwrap() > 0.0);
}
