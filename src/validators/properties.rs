//! Integer property validators

use crate::foundation::ValidError;

crate::validator! {
    /// Validates that a number is even.
    pub Even for i64;
    rule(input) { input % 2 == 0 }
    error(input) { ValidError::new("must be even").with_context("actual", input.to_string()) }
    fn even();
}

crate::validator! {
    /// Validates that a number is odd.
    pub Odd for i64;
    rule(input) { input % 2 != 0 }
    error(input) { ValidError::new("must be odd").with_context("actual", input.to_string()) }
    fn odd();
}

crate::validator! {
    /// Validates that a number is strictly positive.
    pub Positive for i64;
    rule(input) { *input > 0 }
    error(input) { ValidError::new("must be positive").with_context("actual", input.to_string()) }
    fn positive();
}

crate::validator! {
    /// Validates that a number is strictly negative.
    pub Negative for i64;
    rule(input) { *input < 0 }
    error(input) { ValidError::new("must be negative").with_context("actual", input.to_string()) }
    fn negative();
}

crate::validator! {
    /// Validates that a number is not zero.
    pub NonZero for i64;
    rule(input) { *input != 0 }
    error(input) { ValidError::new("must not be zero") }
    fn non_zero();
}

crate::validator! {
    /// Validates that a number is divisible by a divisor.
    ///
    /// A zero divisor is a legal validator that no input satisfies;
    /// misconfiguration surfaces as `Invalid` at validation time, never
    /// as a division panic.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub DivisibleBy { divisor: i64 } for i64;
    rule(self, input) { self.divisor != 0 && input % self.divisor == 0 }
    error(self, input) {
        if self.divisor == 0 {
            ValidError::new("divisor must not be zero")
        } else {
            ValidError::new(format!("must be divisible by {}", self.divisor))
                .with_context("divisor", self.divisor.to_string())
                .with_context("actual", input.to_string())
        }
    }
    fn divisible_by(divisor: i64);
}

/// Alias for [`divisible_by`].
#[must_use]
pub fn multiple_of(divisor: i64) -> DivisibleBy {
    DivisibleBy::new(divisor)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_even() {
        let validator = even();
        assert!(validator.validate(&4).is_valid());
        assert!(validator.validate(&0).is_valid());
        assert!(validator.validate(&-2).is_valid());
        assert!(validator.validate(&3).is_invalid());
    }

    #[test]
    fn test_odd() {
        let validator = odd();
        assert!(validator.validate(&3).is_valid());
        assert!(validator.validate(&-1).is_valid());
        assert!(validator.validate(&4).is_invalid());
        assert!(validator.validate(&0).is_invalid());
    }

    #[test]
    fn test_positive() {
        let validator = positive();
        assert!(validator.validate(&1).is_valid());
        assert!(validator.validate(&0).is_invalid());
        assert!(validator.validate(&-1).is_invalid());
    }

    #[test]
    fn test_negative() {
        let validator = negative();
        assert!(validator.validate(&-1).is_valid());
        assert!(validator.validate(&0).is_invalid());
        assert!(validator.validate(&1).is_invalid());
    }

    #[test]
    fn test_non_zero() {
        let validator = non_zero();
        assert!(validator.validate(&1).is_valid());
        assert!(validator.validate(&-1).is_valid());
        assert!(validator.validate(&0).is_invalid());
    }

    #[test]
    fn test_divisible_by() {
        let validator = divisible_by(3);
        assert!(validator.validate(&9).is_valid());
        assert!(validator.validate(&0).is_valid());
        assert!(validator.validate(&10).is_invalid());
    }

    #[test]
    fn test_divisible_by_zero_never_passes() {
        let validator = divisible_by(0);
        let result = validator.validate(&5);
        assert!(result.is_invalid());
        assert!(result.errors()[0].message.contains("divisor"));
    }

    #[test]
    fn test_multiple_of_alias() {
        assert!(multiple_of(5).validate(&10).is_valid());
    }
}
