//! Formatting utilities for display values.

/// Shorten `name` to its first `max` characters followed by `...`.
pub fn truncate_name(name: &str, max: usize) -> String {
    match name.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &name[..cut]),
        None => name.to_string(),
    }
}

/// Hover hint for a tagged file ("Tags: a, b").
pub fn tag_hint(tags: &[String]) -> String {
    format!("Tags: {}", tags.join(", "))
}
