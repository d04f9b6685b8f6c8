//! AND combinator - logical conjunction of validators
//!
//! This module provides the [`And`] combinator which combines two validators
//! with logical AND semantics - both validators must pass for the combined
//! validator to succeed, and both are ALWAYS invoked so that errors from
//! both sides accumulate.
//!
//! # Examples
//!
//! ```rust
//! use validly::combinators::And;
//! use validly::prelude::*;
//!
//! let validator = And::new(min_length(5), max_length(20));
//! assert!(validator.validate("hello").is_valid());
//! assert!(validator.validate("hi").is_invalid()); // fails min_length
//! ```

use crate::foundation::{Validate, ValidationResult};

/// Combines two validators with logical AND.
///
/// Both validators must pass for the combined validator to succeed. There is
/// no short-circuit: the right validator runs even when the left already
/// failed, so the result carries both sides' errors (left errors first).
/// This trades a little evaluation cost for complete diagnostics.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
///
/// # Examples
///
/// ```rust
/// use validly::combinators::And;
/// use validly::prelude::*;
///
/// // A value can violate both constraints at once; both errors surface.
/// let validator = And::new(min_length(5), contains("x"));
/// let result = validator.validate("hi");
/// assert_eq!(result.errors().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        self.left.validate(input).and(self.right.validate(input))
    }
}

/// Creates an `And` combinator from two validators.
///
/// # Examples
///
/// ```rust
/// use validly::combinators::and;
/// use validly::prelude::*;
///
/// let validator = and(min_length(5), max_length(10));
/// assert!(validator.validate("hello").is_valid());
/// ```
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

/// Creates an [`AndAll`] combinator from a vector of validators.
///
/// This is useful when you have a dynamic number of validators.
///
/// # Examples
///
/// ```rust
/// use validly::combinators::and_all;
/// use validly::prelude::*;
///
/// let validator = and_all(vec![min_length(3), min_length(5), min_length(7)]);
/// assert!(validator.validate("helloworld").is_valid());
/// assert!(validator.validate("hello").is_invalid());
/// ```
#[must_use]
pub fn and_all<V>(validators: Vec<V>) -> AndAll<V>
where
    V: Validate,
{
    AndAll { validators }
}

/// Combines multiple validators with logical AND.
///
/// Every validator runs; all errors accumulate in declaration order. This is
/// semantically identical to a left-to-right `.and(...)` chain over the same
/// validators.
///
/// # Type Parameters
///
/// * `V` - The validator type
#[derive(Debug, Clone)]
pub struct AndAll<V> {
    validators: Vec<V>,
}

impl<V> Validate for AndAll<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        self.validators
            .iter()
            .map(|v| v.validate(input))
            .fold(ValidationResult::valid(), ValidationResult::and)
    }
}
