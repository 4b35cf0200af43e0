use serde::{Deserialize, Serialize};

use crate::constants::{ABOUT_SEGMENTS, THINKING_GLYPH};
use crate::models::CacheEntry;

/// What the renderer should show for one display refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFrame {
    /// The glyph itself.
    pub glyph: String,
    /// Label text for the "about" view: the first two comma segments.
    pub about_text: String,
    /// Text announced by a screen reader: the first comma segment.
    pub accessibility_label: String,
}

impl DisplayFrame {
    /// Build from a cached result, or the thinking fallback when there is none.
    pub fn from_entry(entry: Option<&CacheEntry>) -> Self {
        match entry {
            Some(entry) => Self {
                glyph: entry.glyph.clone(),
                about_text: about_text(&entry.label),
                accessibility_label: accessibility_label(&entry.label),
            },
            None => Self::thinking(),
        }
    }

    pub fn thinking() -> Self {
        Self {
            glyph: THINKING_GLYPH.to_string(),
            about_text: String::new(),
            accessibility_label: String::new(),
        }
    }

    pub fn is_thinking(&self) -> bool {
        self.glyph == THINKING_GLYPH && self.about_text.is_empty()
    }
}

/// First [`ABOUT_SEGMENTS`] comma-separated segments, rejoined with `,`.
///
/// Segments keep their original spacing, so `"a, b, c"` becomes `"a, b"`.
pub fn about_text(label: &str) -> String {
    label
        .split(',')
        .take(ABOUT_SEGMENTS)
        .collect::<Vec<_>>()
        .join(",")
}

/// First comma-separated segment.
pub fn accessibility_label(label: &str) -> String {
    label.split(',').next().unwrap_or_default().to_string()
}
