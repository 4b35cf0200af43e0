/// emojilens version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Glyph shown while nothing has been recognised yet.
pub const THINKING_GLYPH: &str = "🤔";

/// Label the face detector sends instead of a classifier label.
pub const FACE_SENTINEL: &str = "face";

/// Catalog tag marking glyphs that depict a face.
pub const FACE_TAG: &str = "face";

/// Upper bound on glyphs returned for the face sentinel (indices 0..=70).
pub const FACE_CANDIDATE_CAP: usize = 71;

/// Classifier label the object model emits when it is actually looking at a person.
pub const NEMATODE_LABEL: &str = "nematode, nematode worm, roundworm";

/// Segments of a label kept for the "about" text.
pub const ABOUT_SEGMENTS: usize = 2;
