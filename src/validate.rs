//! Email syntax validation.
//!
//! A permissive shape check, not RFC 5322: local part of letters, digits and
//! `._%+-`, dotted domain labels, and an alphabetic TLD of two or more
//! characters. Anything failing this check is never sent to the endpoint.
use std::sync::LazyLock;

use regex::Regex;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Whether `email` looks like an address worth probing.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_standard_address() {
        assert!(is_valid_email("user@example.com"));
    }

    #[test]
    fn accepts_plus_addressing_and_dots() {
        assert!(is_valid_email("user.name+tag@example.com"));
        assert!(is_valid_email("u_1%x-y@mail.example.co.uk"));
    }

    #[test]
    fn rejects_missing_at_sign() {
        assert!(!is_valid_email("userexample.com"));
    }

    #[test]
    fn rejects_missing_tld() {
        assert!(!is_valid_email("user@example"));
    }

    #[test]
    fn rejects_single_letter_tld() {
        assert!(!is_valid_email("user@example.c"));
    }

    #[test]
    fn rejects_empty_local_part() {
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn rejects_embedded_whitespace() {
        assert!(!is_valid_email("user @example.com"));
        assert!(!is_valid_email(" user@example.com"));
    }

    #[test]
    fn rejects_empty_string() {
        assert!(!is_valid_email(""));
    }
}
