//! Request field helpers shared by the handlers.

/// The field's value, unless it is absent or an empty string.
pub fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// True when every listed field is present and non-empty.
pub fn all_filled(values: &[&Option<String>]) -> bool {
    values.iter().all(|v| filled(v).is_some())
}

/// Drops a replacement value that is blank after trimming, so a partial
/// update keeps the stored one.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_counts_as_missing() {
        assert_eq!(filled(&Some(String::new())), None);
        assert_eq!(filled(&None), None);
        assert_eq!(filled(&Some("a".to_string())), Some("a"));
    }

    #[test]
    fn test_all_filled() {
        let a = Some("x".to_string());
        let b = None;
        assert!(all_filled(&[&a]));
        assert!(!all_filled(&[&a, &b]));
    }

    #[test]
    fn test_non_blank_drops_whitespace_only() {
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(non_blank(Some(String::new())), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(" Acme ".to_string())), Some(" Acme ".to_string()));
    }
}
