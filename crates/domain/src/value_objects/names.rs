//! Creature name helpers
//!
//! Canonical creature names are lowercase, hyphen-delimited directory keys
//! (`ho-oh`, `mr-mime`). Display names capitalize every segment.

/// Format a canonical creature name for display.
///
/// Each hyphen-delimited segment gets its first letter capitalized and the
/// hyphens are kept, so `ho-oh` becomes `Ho-Oh`.
pub fn format_display_name(canonical: &str) -> String {
    canonical
        .split('-')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join("-")
}

/// Uppercase the first character of `text`, leaving the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whether `name` is usable as a directory key.
///
/// Keys are non-empty, made of lowercase ASCII letters, digits and single
/// hyphens, and never start or end with a hyphen.
pub fn is_creature_key(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && !name.ends_with('-')
        && !name.contains("--")
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
