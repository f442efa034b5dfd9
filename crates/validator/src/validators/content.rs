//! String content validators
//!
//! Validators for checking string content against patterns.

use std::sync::LazyLock;

use crate::foundation::ValidationError;

// local@domain.tld: no whitespace anywhere, exactly one `@` before the last dot.
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[^\s@]+@[^\s@]+\.\S+$").expect("email pattern is valid")
});

// ============================================================================
// REGEX VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that a string matches a regular expression.
    ///
    /// Matching is unanchored: add `^` / `$` to the pattern to match the
    /// whole input.
    pub MatchesRegex { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::invalid_format("regex")
            .with_param("pattern", self.pattern.as_str().to_string())
    }
    new(pattern: &str) -> regex::Error {
        Ok(Self {
            pattern: regex::Regex::new(pattern)?,
        })
    }
    fn matches_regex(pattern: &str) -> regex::Error;
}

impl From<regex::Regex> for MatchesRegex {
    fn from(pattern: regex::Regex) -> Self {
        Self { pattern }
    }
}

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates a simple `local@domain.tld` email shape.
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::new("email", "Please enter a valid email address") }
    fn email();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[test]
    fn test_regex() {
        let validator = matches_regex(r"^\d{3}-\d{4}$").unwrap();
        assert!(validator.validate("123-4567").is_ok());
        let error = validator.validate("invalid").unwrap_err();
        assert_eq!(error.message, "Invalid format");
        assert_eq!(error.param("pattern"), Some(r"^\d{3}-\d{4}$"));
    }

    #[test]
    fn test_regex_is_unanchored() {
        let validator = matches_regex(r"\d").unwrap();
        assert!(validator.validate("abc1").is_ok());
    }

    #[test]
    fn test_regex_invalid_pattern() {
        assert!(matches_regex("(unclosed").is_err());
    }

    #[test]
    fn test_regex_from_compiled() {
        let validator = MatchesRegex::from(regex::Regex::new("^a").unwrap());
        assert!(validator.validate("abc").is_ok());
        assert!(validator.validate("cba").is_err());
    }

    #[rstest]
    #[case("a@b.com", true)]
    #[case("user.name+tag@mail.example.org", true)]
    #[case("a@b.c", true)]
    #[case("a@b", false)]
    #[case("invalid", false)]
    #[case("@example.com", false)]
    #[case("user@", false)]
    #[case("us er@example.com", false)]
    #[case("a@@b.com", false)]
    #[case("", false)]
    fn test_email(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(email().validate(input).is_ok(), ok, "input: {input:?}");
    }

    #[test]
    fn test_email_message() {
        let error = email().validate("nope").unwrap_err();
        assert_eq!(error.code, "email");
        assert_eq!(error.message, "Please enter a valid email address");
    }
}
