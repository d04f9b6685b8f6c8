//! OR combinator - logical disjunction of validators
//!
//! This module provides the [`Or`] combinator which combines two validators
//! with logical OR semantics - at least one validator must pass for the
//! combined validator to succeed.
//!
//! # Examples
//!
//! ```rust
//! use validly::combinators::Or;
//! use validly::prelude::*;
//!
//! let validator = Or::new(exact_length(5), exact_length(10));
//! assert!(validator.validate("hello").is_valid()); // 5 chars
//! assert!(validator.validate("helloworld").is_valid()); // 10 chars
//! assert!(validator.validate("hi").is_invalid()); // neither 5 nor 10
//! ```

use crate::foundation::{Validate, ValidationResult};

/// Combines two validators with logical OR.
///
/// At least one validator must pass for the combined validator to succeed.
/// Both sides are always evaluated; validators are pure, so the eager
/// evaluation is observationally equivalent to short-circuiting and keeps
/// the combination a straight application of [`ValidationResult::or`].
/// On success the failing side's errors are discarded; only when both sides
/// fail are their errors concatenated (left errors first).
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
///
/// # Examples
///
/// ```rust
/// use validly::combinators::Or;
/// use validly::prelude::*;
///
/// let validator = Or::new(exact_length(5), exact_length(10));
///
/// // Left validator passes
/// assert!(validator.validate("hello").is_valid());
///
/// // Both fail: both errors accumulate
/// let result = validator.validate("hi");
/// assert_eq!(result.errors().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
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

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        self.left.validate(input).or(self.right.validate(input))
    }
}

/// Creates an `Or` combinator from two validators.
///
/// # Examples
///
/// ```rust
/// use validly::combinators::or;
/// use validly::prelude::*;
///
/// let validator = or(exact_length(5), exact_length(10));
/// assert!(validator.validate("hello").is_valid());
/// ```
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}

/// Creates an [`OrAny`] combinator from a vector of validators.
///
/// This is useful when you have a dynamic number of validators and
/// want at least one to pass.
///
/// # Examples
///
/// ```rust
/// use validly::combinators::or_any;
/// use validly::prelude::*;
///
/// let validator = or_any(vec![exact_length(3), exact_length(5)]);
/// assert!(validator.validate("abc").is_valid());
/// assert!(validator.validate("hi").is_invalid());
/// ```
#[must_use]
pub fn or_any<V>(validators: Vec<V>) -> OrAny<V>
where
    V: Validate,
{
    OrAny { validators }
}

/// Combines multiple validators with logical OR.
///
/// `Valid` if any validator passes. When all fail, every validator's errors
/// accumulate in declaration order. An empty list is vacuously `Valid`.
///
/// # Type Parameters
///
/// * `V` - The validator type
#[derive(Debug, Clone)]
pub struct OrAny<V> {
    validators: Vec<V>,
}

impl<V> Validate for OrAny<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        self.validators
            .iter()
            .map(|v| v.validate(input))
            .reduce(ValidationResult::or)
            .unwrap_or(ValidationResult::Valid)
    }
}
