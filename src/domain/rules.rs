//! Field format rules.
//!
//! Pure predicates over a single field value. They never trim on their own
//! except for [`is_non_empty`]; callers trim before testing email and phone.

use once_cell::sync::Lazy;
use regex::Regex;

/// Basic `local@domain.tld` shape.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Loose human-entered phone number: optional `+`, optional parentheses
/// around the first group, 3-digit groups separated by space, dash or dot,
/// and a 4 to 6 digit final group.
///
/// This is deliberately lenient and is not E.164 validation. A leading
/// country code such as `+1 ` before a parenthesised area code is rejected.
pub const PHONE_PATTERN: &str = r"^[+]?[(]?[0-9]{3}[)]?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$";

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("Failed to compile email regex"));

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(PHONE_PATTERN).expect("Failed to compile phone regex"));

/// True iff the value has at least one non-whitespace character.
pub fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// True iff the value matches [`EMAIL_PATTERN`].
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// True iff the value matches [`PHONE_PATTERN`].
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert!(is_non_empty("Ada"));
        assert!(is_non_empty("  Ada  "));
        assert!(!is_non_empty(""));
        assert!(!is_non_empty("   \t\n"));
    }

    #[test]
    fn test_email_accepts_basic_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
    }

    #[test]
    fn test_email_rejects() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@b@c.de"));
        assert!(!is_valid_email(" a@b.co"));
    }

    #[test]
    fn test_phone_accepts_common_formats() {
        assert!(is_valid_phone("780-555-1234"));
        assert!(is_valid_phone("(780) 555-1234"));
        assert!(is_valid_phone("780.555.1234"));
        assert!(is_valid_phone("780 555 123456"));
        assert!(is_valid_phone("+7805551234"));
        assert!(is_valid_phone("+(780)555-12345"));
    }

    #[test]
    fn test_phone_rejects() {
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("780-555-123"));
        assert!(!is_valid_phone("780-555-1234567"));
        assert!(!is_valid_phone("780--555-1234"));
        assert!(!is_valid_phone("+1 (780) 555 1234567"));
        assert!(!is_valid_phone("phone"));
    }
}
