//! NOT combinator - logical negation of validators
//!
//! This module provides the [`Not`] combinator which inverts the result of a
//! validator - it succeeds when the inner validator fails and vice versa.
//!
//! # Examples
//!
//! ```rust
//! use validly::combinators::Not;
//! use validly::prelude::*;
//!
//! // Validator that forbids a substring
//! let validator = Not::new(contains("forbidden"), "must not mention forbidden things");
//! assert!(validator.validate("this is allowed").is_valid());
//! assert!(validator.validate("this is forbidden").is_invalid());
//! ```

use crate::foundation::{ValidError, Validate, ValidationResult};

/// Inverts a validator with logical NOT.
///
/// The `Not` combinator reverses the validation result:
/// - If the inner validator succeeds, `Not` fails with exactly the fixed,
///   caller-supplied error
/// - If the inner validator fails, `Not` succeeds
///
/// The inner validator's own errors are always discarded: they describe why
/// the forbidden condition did not hold, which is not a useful diagnostic
/// for the negated check. The caller supplies the one error that is.
///
/// # Type Parameters
///
/// * `V` - The inner validator type
///
/// # Examples
///
/// ```rust
/// use validly::prelude::*;
///
/// let validator = contains("admin").not("username is reserved");
///
/// assert!(validator.validate("user123").is_valid());
///
/// let result = validator.validate("admin123");
/// assert_eq!(result.errors().len(), 1);
/// assert_eq!(result.errors()[0].message, "username is reserved");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Not<V> {
    /// The inner validator to invert.
    pub(crate) inner: V,
    /// The error reported when the inner validator passes.
    pub(crate) error: ValidError,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    ///
    /// # Arguments
    ///
    /// * `inner` - The validator to invert
    /// * `error` - The error reported when `inner` passes
    pub fn new(inner: V, error: impl Into<ValidError>) -> Self {
        Self {
            inner,
            error: error.into(),
        }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the error reported when the inner validator passes.
    pub fn error(&self) -> &ValidError {
        &self.error
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        if self.inner.validate(input).is_valid() {
            ValidationResult::invalid(self.error.clone())
        } else {
            ValidationResult::valid()
        }
    }
}

/// Creates a `Not` combinator from a validator and a replacement error.
///
/// # Examples
///
/// ```rust
/// use validly::combinators::not;
/// use validly::prelude::*;
///
/// let validator = not(contains("forbidden"), "contains a forbidden word");
/// assert!(validator.validate("allowed").is_valid());
/// assert!(validator.validate("forbidden").is_invalid());
/// ```
pub fn not<V>(validator: V, error: impl Into<ValidError>) -> Not<V> {
    Not::new(validator, error)
}
