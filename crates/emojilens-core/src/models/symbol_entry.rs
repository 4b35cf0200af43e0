use serde::{Deserialize, Serialize};

/// One catalog row: a description, its category tags, and the glyph to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolEntry {
    /// Free-text description. Compared case-insensitively.
    pub description: String,
    /// Short category keywords, e.g. "face".
    #[serde(default)]
    pub tags: Vec<String>,
    /// The symbol to display.
    pub glyph: String,
}

impl SymbolEntry {
    pub fn new(description: impl Into<String>, glyph: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            tags: Vec::new(),
            glyph: glyph.into(),
        }
    }

    /// Builder-style tag list.
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
