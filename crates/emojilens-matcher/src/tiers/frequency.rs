//! Per-word frequency scoring.
//!
//! ```text
//! accumulator = hits(word_1) ++ hits(word_2) ++ ... ++ close
//! winner      = argmax count(glyph), first-seen on ties, empty glyphs excluded
//! ```

use indexmap::IndexMap;

use crate::index::CatalogIndex;

use super::LabelQuery;

/// Build the accumulator: glyphs of entries whose description contains each word,
/// word by word, followed by the `close` set once.
pub fn accumulate(query: &LabelQuery<'_>, index: &CatalogIndex, close: &[String]) -> Vec<String> {
    let mut acc: Vec<String> = Vec::new();
    for word in query.lowered.split_whitespace() {
        acc.extend(
            index
                .iter()
                .filter(|(description, _)| description.contains(word))
                .map(|(_, entry)| entry.glyph.clone()),
        );
    }
    acc.extend(close.iter().cloned());
    acc
}

/// Occurrence count per distinct glyph, in first-seen order.
pub fn tally(acc: &[String]) -> IndexMap<&str, usize> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for glyph in acc {
        *counts.entry(glyph.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Highest-count non-empty glyph; the earliest one wins a tie.
pub fn winner(counts: &IndexMap<&str, usize>) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for (&glyph, &count) in counts {
        if glyph.is_empty() {
            continue;
        }
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((glyph, count)),
        }
    }
    best.map(|(glyph, _)| glyph.to_string())
}

/// Run the full frequency pass. Returns `[winner]` or `[]`.
pub fn matches(query: &LabelQuery<'_>, index: &CatalogIndex, close: &[String]) -> Vec<String> {
    let acc = accumulate(query, index, close);
    winner(&tally(&acc)).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn tally_preserves_first_seen_order() {
        let acc = strings(&["b", "a", "b", "c", "a"]);
        let counts = tally(&acc);
        let order: Vec<&str> = counts.keys().copied().collect();
        assert_eq!(order, ["b", "a", "c"]);
        assert_eq!(counts["b"], 2);
        assert_eq!(counts["a"], 2);
    }

    #[test]
    fn tie_goes_to_first_seen_not_alphabetical() {
        let acc = strings(&["z", "a", "z", "a"]);
        assert_eq!(winner(&tally(&acc)).as_deref(), Some("z"));
    }

    #[test]
    fn higher_count_beats_earlier_glyph() {
        let acc = strings(&["z", "a", "a"]);
        assert_eq!(winner(&tally(&acc)).as_deref(), Some("a"));
    }

    #[test]
    fn empty_glyph_never_wins() {
        let acc = strings(&["", "", "", "x"]);
        assert_eq!(winner(&tally(&acc)).as_deref(), Some("x"));
        assert_eq!(winner(&tally(&strings(&["", ""]))), None);
    }

    #[test]
    fn empty_accumulator_has_no_winner() {
        assert_eq!(winner(&tally(&[])), None);
    }
}
