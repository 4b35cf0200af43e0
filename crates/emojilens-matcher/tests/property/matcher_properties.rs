use std::sync::Arc;

use emojilens_catalog::Catalog;
use emojilens_core::SymbolEntry;
use emojilens_matcher::LabelMatcher;
use proptest::prelude::*;

const WORDS: &[&str] = &["cat", "dog", "face", "red", "apple", "smile", "car", "fox"];

fn arb_description() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 1..4).prop_map(|w| w.join(" "))
}

fn arb_entry() -> impl Strategy<Value = SymbolEntry> {
    (
        arb_description(),
        prop::sample::select(vec!["🐱", "🐶", "😀", "🍎", "🚗", "🦊", ""]),
        prop::collection::vec(prop::sample::select(vec!["face", "pet", "food"]), 0..3),
    )
        .prop_map(|(description, glyph, tags)| {
            SymbolEntry::new(description, glyph).with_tags(tags)
        })
}

fn arb_catalog() -> impl Strategy<Value = Vec<SymbolEntry>> {
    prop::collection::vec(arb_entry(), 0..120)
}

proptest! {
    #![proptest_config(ProptestConfig {
        max_global_rejects: 65536,
        ..ProptestConfig::default()
    })]

    #[test]
    fn match_is_idempotent(entries in arb_catalog(), label in arb_description()) {
        let m = LabelMatcher::new(Arc::new(Catalog::from_entries(entries)));
        prop_assert_eq!(m.match_label(&label), m.match_label(&label));
    }

    #[test]
    fn exact_description_returns_exactly_those_glyphs(
        entries in arb_catalog(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!entries.is_empty());
        let target = entries[pick.index(entries.len())].description.to_uppercase();
        let expected: Vec<String> = entries
            .iter()
            .filter(|e| e.description.to_lowercase() == target.to_lowercase())
            .map(|e| e.glyph.clone())
            .collect();

        let m = LabelMatcher::new(Arc::new(Catalog::from_entries(entries)));
        prop_assert!(!expected.is_empty());
        prop_assert_eq!(m.match_label(&target), expected);
    }

    #[test]
    fn face_sentinel_is_bounded_and_face_tagged(entries in arb_catalog()) {
        prop_assume!(entries.iter().all(|e| e.description != "face"));
        let face_tagged: Vec<String> = entries
            .iter()
            .filter(|e| e.has_tag("face"))
            .map(|e| e.glyph.clone())
            .collect();

        let m = LabelMatcher::new(Arc::new(Catalog::from_entries(entries)));
        let glyphs = m.match_label("face");
        prop_assert!(glyphs.len() <= 71);
        if !face_tagged.is_empty() {
            let expected: Vec<String> = face_tagged.iter().take(71).cloned().collect();
            prop_assert_eq!(glyphs, expected);
        }
    }

    #[test]
    fn frequency_result_is_single_non_empty_glyph(
        entries in arb_catalog(),
        label in "[a-z]{2,6} [a-z]{2,6}",
    ) {
        let m = LabelMatcher::new(Arc::new(Catalog::from_entries(entries)));
        let outcome = m.match_with_tier(&label);
        if outcome.tier == Some(emojilens_matcher::MatchTier::Frequency) {
            prop_assert_eq!(outcome.glyphs.len(), 1);
            prop_assert!(!outcome.glyphs[0].is_empty());
        }
    }
}
