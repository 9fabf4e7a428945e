//! Centralized validation and helper functions.

/// Human-readable description of the characters allowed in a source name
pub const ALLOWED_SOURCE_NAME_CHARS: &str = "ASCII letters, digits, '_' and '.'";

/// Check whether a character may appear in a source name.
///
/// Source names are reused as identifiers downstream, so they are limited to
/// `[A-Za-z0-9_.]`.
#[must_use]
pub fn is_allowed_source_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

/// Validate that a string is a usable source name.
///
/// # Examples
///
/// ```
/// use scg_catalog::utils::validation::is_valid_source_name;
///
/// assert!(is_valid_source_name("Bacteria_71"));
/// assert!(is_valid_source_name("Campbell_et_al.v2"));
/// assert!(!is_valid_source_name("Archaea-76"));
/// assert!(!is_valid_source_name(""));
/// ```
#[must_use]
pub fn is_valid_source_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_allowed_source_char)
}

/// Collect the distinct disallowed characters of a source name, in order of
/// first appearance.
#[must_use]
pub fn disallowed_chars(name: &str) -> Vec<char> {
    let mut found = Vec::new();
    for c in name.chars() {
        if !is_allowed_source_char(c) && !found.contains(&c) {
            found.push(c);
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_source_name() {
        assert!(is_valid_source_name("Ecoli_markers"));
        assert!(is_valid_source_name("Bacteria97"));
        assert!(is_valid_source_name("v1.2"));
        assert!(!is_valid_source_name("with space"));
        assert!(!is_valid_source_name("dash-name"));
        assert!(!is_valid_source_name("ünïcode"));
        assert!(!is_valid_source_name(""));
    }

    #[test]
    fn test_disallowed_chars() {
        assert!(disallowed_chars("Bacteria97").is_empty());
        assert_eq!(disallowed_chars("a-b c-d"), vec!['-', ' ']);
    }
}
