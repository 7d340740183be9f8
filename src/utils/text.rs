//! Centralized text helpers shared by validation and search.

/// True when a string is empty after trimming whitespace.
///
/// # Examples
///
/// ```
/// use dua_catalog::utils::text::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank(" \t\n"));
/// assert!(!is_blank(" x "));
/// ```
#[must_use]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Normalize a search needle to lowercase, keeping surrounding whitespace.
/// Returns None for a blank needle.
#[must_use]
pub fn normalize_query(s: &str) -> Option<String> {
    if is_blank(s) {
        None
    } else {
        Some(s.to_lowercase())
    }
}

/// Case-insensitive substring test against an already-normalized needle.
#[must_use]
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Compute a content fingerprint from canonical bytes.
///
/// The fingerprint is the lowercase hex MD5 digest of the input. It
/// identifies a content version; it is not a security primitive.
#[must_use]
pub fn compute_fingerprint(bytes: &[u8]) -> String {
    let digest = md5::compute(bytes);
    format!("{digest:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("Forgiveness"), Some("forgiveness".to_string()));
        assert_eq!(normalize_query("Me "), Some("me ".to_string()));
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query(""), None);
    }

    #[test]
    fn test_contains_normalized_is_case_insensitive() {
        assert!(contains_normalized("O Allah, grant me FORGIVENESS", "forgiveness"));
        assert!(!contains_normalized("mercy", "forgiveness"));
    }

    #[test]
    fn test_fingerprint_is_stable_hex() {
        let a = compute_fingerprint(b"catalog");
        let b = compute_fingerprint(b"catalog");
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, compute_fingerprint(b"catalog2"));
    }
}
