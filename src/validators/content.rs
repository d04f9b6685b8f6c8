//! String content validators
//!
//! Validators for checking string content against known formats and
//! user-supplied regular expressions.

use std::sync::LazyLock;

use crate::foundation::{ValidError, Validate, ValidationResult};

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

static URL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());

// ============================================================================
// REGEX VALIDATOR
// ============================================================================

/// Validates that a string matches a regular expression.
///
/// Construction never fails. A malformed pattern produces a validator that
/// reports the compilation failure as `Invalid` for every input, so
/// misconfiguration surfaces through the same channel as any other
/// validation failure instead of a panic or a constructor error.
#[derive(Debug, Clone)]
pub struct MatchesRegex {
    pattern: Result<regex::Regex, ValidError>,
}

impl MatchesRegex {
    /// Compiles the pattern, deferring any compilation failure to
    /// validation time.
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        let pattern = regex::Regex::new(pattern).map_err(|e| {
            ValidError::new(format!("invalid regular expression: {e}"))
                .with_context("pattern", pattern.to_string())
        });
        Self { pattern }
    }

    /// Returns `true` if the pattern compiled successfully.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.pattern.is_ok()
    }
}

impl Validate for MatchesRegex {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        match &self.pattern {
            Ok(pattern) => ValidationResult::from_condition(
                pattern.is_match(input),
                ValidError::new("does not match the expected pattern")
                    .with_context("pattern", pattern.as_str().to_string()),
            ),
            Err(error) => ValidationResult::invalid(error.clone()),
        }
    }
}

/// Creates a regex validator. See [`MatchesRegex`].
#[must_use]
pub fn matches_regex(pattern: &str) -> MatchesRegex {
    MatchesRegex::new(pattern)
}

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates email format.
    ///
    /// Uses a simple but effective regex pattern.
    pub Email { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) { ValidError::new("must be a valid email address") }
    new() { Self { pattern: EMAIL_REGEX.clone() } }
    fn email();
}

// ============================================================================
// URL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates URL format.
    pub Url { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) { ValidError::new("must be a valid URL") }
    new() { Self { pattern: URL_REGEX.clone() } }
    fn url();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex() {
        let validator = matches_regex(r"^\d{3}-\d{4}$");
        assert!(validator.is_well_formed());
        assert!(validator.validate("123-4567").is_valid());
        assert!(validator.validate("invalid").is_invalid());
    }

    #[test]
    fn test_malformed_regex_reports_invalid() {
        let validator = matches_regex("[unclosed");
        assert!(!validator.is_well_formed());

        // Every input fails with the compilation error, no panic.
        let result = validator.validate("anything");
        assert!(result.is_invalid());
        assert!(result.errors()[0].message.contains("invalid regular expression"));
        assert_eq!(result.errors()[0].context("pattern"), Some("[unclosed"));
    }

    #[test]
    fn test_malformed_regex_is_deterministic() {
        let validator = matches_regex("(?P<broken");
        assert_eq!(validator.validate("a"), validator.validate("a"));
        assert_eq!(validator.validate("a"), validator.validate("b"));
    }

    #[test]
    fn test_email() {
        let validator = email();
        assert!(validator.validate("user@example.com").is_valid());
        assert!(validator.validate("first.last@sub.example.co.uk").is_valid());
        assert!(validator.validate("invalid").is_invalid());
        assert!(validator.validate("@example.com").is_invalid());
        assert!(validator.validate("user@").is_invalid());
    }

    #[test]
    fn test_url() {
        let validator = url();
        assert!(validator.validate("http://example.com").is_valid());
        assert!(validator.validate("https://example.com/path").is_valid());
        assert!(validator.validate("invalid").is_invalid());
        assert!(validator.validate("ftp://example.com").is_invalid());
    }
}
