use std::time::Duration;

use emojilens_cache::{GlyphPicker, PredictionCache};
use proptest::prelude::*;
use test_fixtures::at_ms;

proptest! {
    #[test]
    fn no_entry_older_than_lifespan_after_record(
        offsets in prop::collection::vec(0i64..30_000, 1..60),
    ) {
        let mut offsets = offsets;
        offsets.sort_unstable();
        offsets.dedup();

        let cache = PredictionCache::with_picker(Duration::from_secs(5), GlyphPicker::seeded(0));
        let candidates = vec!["🐱".to_string()];
        for &ms in &offsets {
            cache.record("cat", &candidates, at_ms(ms));
            let cutoff = at_ms(ms) - chrono::Duration::seconds(5);
            prop_assert!(cache.entries().iter().all(|e| e.timestamp >= cutoff));
        }
        let last = *offsets.last().unwrap();
        prop_assert_eq!(cache.latest().map(|e| e.timestamp), Some(at_ms(last)));
    }

    #[test]
    fn nematode_override_ignores_candidates(
        candidates in prop::collection::vec("[a-z]{0,3}", 0..8),
        ms in 0i64..10_000,
    ) {
        let cache = PredictionCache::with_picker(Duration::from_secs(5), GlyphPicker::seeded(9));
        let stored = cache
            .record("nematode, nematode worm, roundworm", &candidates, at_ms(ms))
            .unwrap();
        prop_assert_eq!(stored.timestamp, at_ms(ms));
        prop_assert_eq!(stored.label, "");
        prop_assert_eq!(stored.glyph, "🤔");
    }
}
