/// Split a multi-class classifier label (`"tabby, tabby cat"`) into trimmed,
/// non-empty segments.
pub fn split_segments(label: &str) -> Vec<&str> {
    label
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
