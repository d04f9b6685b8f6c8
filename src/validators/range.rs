//! Numeric range validators
//!
//! Generic over any `PartialOrd + Display + Copy` value, so the same
//! validators work for integers, floats, and chars. An inclusive range with
//! `min > max` is a legal validator that no input satisfies.

use std::fmt::Display;

use crate::foundation::ValidError;

crate::validator! {
    /// Validates that a value is at least a minimum.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Min<T: PartialOrd + Display + Copy> { min: T } for T;
    rule(self, input) { *input >= self.min }
    error(self, input) {
        ValidError::new(format!("must be at least {}", self.min))
            .with_context("min", self.min.to_string())
            .with_context("actual", input.to_string())
    }
    fn min(value: T);
}

crate::validator! {
    /// Validates that a value does not exceed a maximum.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Max<T: PartialOrd + Display + Copy> { max: T } for T;
    rule(self, input) { *input <= self.max }
    error(self, input) {
        ValidError::new(format!("must be at most {}", self.max))
            .with_context("max", self.max.to_string())
            .with_context("actual", input.to_string())
    }
    fn max(value: T);
}

crate::validator! {
    /// Validates that a value is within an inclusive range.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub InRange<T: PartialOrd + Display + Copy> { min: T, max: T } for T;
    rule(self, input) { *input >= self.min && *input <= self.max }
    error(self, input) {
        ValidError::new(format!(
            "must be between {} and {}, got {}",
            self.min, self.max, input
        ))
        .with_context("min", self.min.to_string())
        .with_context("max", self.max.to_string())
        .with_context("actual", input.to_string())
    }
    fn in_range(min: T, max: T);
}

crate::validator! {
    /// Validates that a value is strictly greater than a threshold.
    ///
    /// # Examples
    ///
    /// ```
    /// use validly::validators::greater_than;
    /// use validly::foundation::Validate;
    ///
    /// let validator = greater_than(5);
    /// assert!(validator.validate(&6).is_valid());
    /// assert!(validator.validate(&5).is_invalid()); // Not strictly greater
    /// assert!(validator.validate(&4).is_invalid());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub GreaterThan<T: PartialOrd + Display + Copy> { bound: T } for T;
    rule(self, input) { *input > self.bound }
    error(self, input) {
        ValidError::new(format!("must be greater than {}", self.bound))
            .with_context("bound", self.bound.to_string())
            .with_context("actual", input.to_string())
    }
    fn greater_than(bound: T);
}

crate::validator! {
    /// Validates that a value is strictly less than a threshold.
    ///
    /// # Examples
    ///
    /// ```
    /// use validly::validators::less_than;
    /// use validly::foundation::Validate;
    ///
    /// let validator = less_than(10);
    /// assert!(validator.validate(&9).is_valid());
    /// assert!(validator.validate(&10).is_invalid()); // Not strictly less
    /// assert!(validator.validate(&11).is_invalid());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub LessThan<T: PartialOrd + Display + Copy> { bound: T } for T;
    rule(self, input) { *input < self.bound }
    error(self, input) {
        ValidError::new(format!("must be less than {}", self.bound))
            .with_context("bound", self.bound.to_string())
            .with_context("actual", input.to_string())
    }
    fn less_than(bound: T);
}

crate::validator! {
    /// Validates that a value is within an exclusive range (min < value < max).
    ///
    /// # Examples
    ///
    /// ```
    /// use validly::validators::exclusive_range;
    /// use validly::foundation::Validate;
    ///
    /// let validator = exclusive_range(0, 10);
    /// assert!(validator.validate(&5).is_valid());
    /// assert!(validator.validate(&0).is_invalid()); // Boundary not included
    /// assert!(validator.validate(&10).is_invalid()); // Boundary not included
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ExclusiveRange<T: PartialOrd + Display + Copy> { min: T, max: T } for T;
    rule(self, input) { *input > self.min && *input < self.max }
    error(self, input) {
        ValidError::new(format!(
            "must be between {} and {} (exclusive)",
            self.min, self.max
        ))
        .with_context("min", self.min.to_string())
        .with_context("max", self.max.to_string())
        .with_context("actual", input.to_string())
    }
    fn exclusive_range(min: T, max: T);
}

// ============================================================================
// TESTS
// ============================================================================
