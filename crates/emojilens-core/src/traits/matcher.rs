/// Label → glyph matching.
pub trait IGlyphMatcher: Send + Sync {
    /// Candidate glyphs for a classification label. Empty when nothing matches.
    fn match_label(&self, label: &str) -> Vec<String>;
}
