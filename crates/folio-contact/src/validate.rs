//! Email address validation.

use regex::Regex;
use std::sync::LazyLock;

/// Check that an address looks like `local@domain.tld`.
///
/// This is a loose shape check, not an RFC 5322 parser: one or more non-`@`
/// characters, an `@`, one or more non-`@` characters, a `.`, then one or
/// more non-`@` characters. Only the start of the input is anchored, so
/// trailing text after a matching prefix is accepted.
pub fn is_valid_email(email: &str) -> bool {
    static RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("Invalid email regex"));

    RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        assert!(is_valid_email("jo@example.com"));
        assert!(is_valid_email("first.last@mail.example.co.uk"));
        assert!(is_valid_email("a@b.c"));
    }

    #[test]
    fn rejects_missing_at() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("example.com"));
    }

    #[test]
    fn rejects_missing_dot_after_at() {
        assert!(!is_valid_email("jo@localhost"));
        assert!(!is_valid_email("jo.smith@example"));
    }

    #[test]
    fn rejects_empty_parts() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jo@.com"));
        assert!(!is_valid_email("jo@example."));
    }

    #[test]
    fn only_the_prefix_has_to_match() {
        assert!(is_valid_email("jo@example.com@trailing"));
        assert!(is_valid_email("jo@example.com and more"));
    }
}
