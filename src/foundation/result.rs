//! The validation outcome algebra
//!
//! [`ValidationResult`] is a sum type over `Valid` and `Invalid(errors)`,
//! with [`and`](ValidationResult::and) / [`or`](ValidationResult::or)
//! defining how two outcomes combine. Both operations are associative but
//! NOT commutative in their error ordering: the left operand's errors always
//! precede the right operand's, so combinator chains produce deterministic,
//! reproducible error sequences.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::foundation::ValidError;

/// The error payload of an `Invalid` result.
///
/// One error is by far the common case, so the first error is stored inline.
pub type ErrorList = SmallVec<[ValidError; 1]>;

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// The outcome of a validation: `Valid`, or `Invalid` with an ordered,
/// non-empty sequence of errors (insertion order = discovery order).
///
/// # Invariant
///
/// `Invalid` never holds an empty error list. All construction paths uphold
/// this: [`invalid`](Self::invalid) takes one error, [`from_errors`](Self::from_errors)
/// normalizes an empty iterator to `Valid`, and `and`/`or` only concatenate
/// already non-empty lists.
///
/// # Examples
///
/// ```rust
/// use validly::foundation::{ValidError, ValidationResult};
///
/// let a = ValidationResult::invalid(ValidError::new("first"));
/// let b = ValidationResult::invalid(ValidError::new("second"));
///
/// // AND accumulates, left errors first:
/// let both = a.clone().and(b.clone());
/// assert_eq!(both.errors().len(), 2);
///
/// // OR succeeds if either side does, discarding the loser's errors:
/// assert!(a.or(ValidationResult::valid()).is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationResult {
    /// The value passed validation.
    Valid,
    /// The value failed validation with one or more errors.
    Invalid(ErrorList),
}

impl ValidationResult {
    /// The successful outcome.
    #[must_use]
    pub const fn valid() -> Self {
        Self::Valid
    }

    /// A failed outcome carrying exactly one error.
    pub fn invalid(error: impl Into<ValidError>) -> Self {
        Self::Invalid(smallvec::smallvec![error.into()])
    }

    /// Builds a result from a sequence of errors.
    ///
    /// An empty sequence yields `Valid`, preserving the non-empty invariant
    /// on `Invalid`.
    pub fn from_errors(errors: impl IntoIterator<Item = ValidError>) -> Self {
        let errors: ErrorList = errors.into_iter().collect();
        if errors.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(errors)
        }
    }

    /// `Valid` if `condition` holds, otherwise `Invalid` with exactly the
    /// supplied error.
    ///
    /// This is the standard way leaf validators report outcomes.
    pub fn from_condition(condition: bool, error: impl Into<ValidError>) -> Self {
        if condition {
            Self::Valid
        } else {
            Self::invalid(error)
        }
    }

    /// Returns true for `Valid`.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns true for `Invalid`.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// The accumulated errors, in discovery order. Empty for `Valid`.
    #[must_use]
    pub fn errors(&self) -> &[ValidError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Consumes the result, returning its errors. Empty for `Valid`.
    #[must_use]
    pub fn into_errors(self) -> ErrorList {
        match self {
            Self::Valid => ErrorList::new(),
            Self::Invalid(errors) => errors,
        }
    }

    /// Combines two results with AND semantics.
    ///
    /// `Valid` iff both sides are `Valid`. If both are `Invalid`, the error
    /// sequences are concatenated, `self`'s errors first.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::Valid, other) => other,
            (invalid, Self::Valid) => invalid,
            (Self::Invalid(mut left), Self::Invalid(right)) => {
                left.extend(right);
                Self::Invalid(left)
            }
        }
    }

    /// Combines two results with OR semantics.
    ///
    /// `Valid` if either side is `Valid`; the failing side's errors are
    /// discarded. `Invalid` only when both sides fail, with the error
    /// sequences concatenated, `self`'s errors first.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match (self, other) {
            (Self::Valid, _) | (_, Self::Valid) => Self::Valid,
            (Self::Invalid(mut left), Self::Invalid(right)) => {
                left.extend(right);
                Self::Invalid(left)
            }
        }
    }

    /// Rebuilds every error through `f`, preserving count and order.
    ///
    /// Used by the schema machinery for context tagging. `Valid` passes
    /// through untouched.
    #[must_use]
    pub fn map_errors(self, f: impl FnMut(ValidError) -> ValidError) -> Self {
        match self {
            Self::Valid => Self::Valid,
            Self::Invalid(errors) => Self::Invalid(errors.into_iter().map(f).collect()),
        }
    }

    /// Converts to a `Result`, surfacing only the FIRST error when invalid.
    ///
    /// Intentionally lossy: callers needing full diagnostics should inspect
    /// [`errors`](Self::errors) instead.
    pub fn into_result(self) -> Result<(), ValidError> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(mut errors) => Err(errors.remove(0)),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
