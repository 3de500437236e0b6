//! Helpers for the case-insensitive `ILIKE` filters on the browse endpoints.

/// Wraps `needle` as an `ILIKE` "contains" pattern, escaping `%`, `_` and the
/// backslash so user input is matched literally.
pub fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
