//! Core traits for the validation system
//!
//! This module defines the fundamental trait that all validators implement
//! and the extension trait providing the fluent combinator API.

use crate::foundation::{ValidError, ValidationResult};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// This trait is generic over the input type, allowing for compile-time
/// type safety while maintaining flexibility. All validators return a
/// [`ValidationResult`] for a consistent API.
///
/// # Purity contract
///
/// `validate` must be a pure function of the input and the validator's own
/// (immutable) configuration: no side effects, deterministic, and safe to
/// invoke concurrently from multiple call sites on the same instance. A
/// validator that cannot even evaluate its own check (for example, an
/// unparseable pattern) must report that failure AS an `Invalid` result with
/// a descriptive error, never by panicking.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for DSTs like `str`)
///
/// # Examples
///
/// ```rust
/// use validly::foundation::{Validate, ValidError, ValidationResult};
///
/// struct MinLength {
///     min: usize,
/// }
///
/// impl Validate for MinLength {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> ValidationResult {
///         ValidationResult::from_condition(
///             input.chars().count() >= self.min,
///             ValidError::new(format!("must be at least {} characters long", self.min)),
///         )
///     }
/// }
///
/// let validator = MinLength { min: 3 };
/// assert!(validator.validate("hello").is_valid());
/// assert!(validator.validate("hi").is_invalid());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str` and `[T]`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> ValidationResult;

    /// Returns true if the input passes validation.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_valid()
    }

    /// Validates the input, surfacing only the FIRST error on failure.
    ///
    /// A fail-fast convenience; callers needing the full error sequence
    /// should use [`validate`](Self::validate) directly.
    fn check(&self, input: &Self::Input) -> Result<(), ValidError> {
        self.validate(input).into_result()
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// This trait is automatically implemented for all types that implement
/// [`Validate`], providing a fluent API for composing validators. Chaining
/// builds a left-leaning composition tree; evaluation cost is linear in the
/// number of leaf validators regardless of tree shape.
///
/// # Examples
///
/// ```rust
/// use validly::prelude::*;
///
/// let username = min_length(3).and(max_length(20)).and(alphanumeric());
/// assert!(username.validate("alice").is_valid());
/// assert!(username.validate("a!").is_invalid());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both sub-validators are ALWAYS invoked, even when the first already
    /// failed, so that both sides' errors accumulate (left errors first).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validly::prelude::*;
    ///
    /// let validator = min_length(3).and(max_length(10));
    /// assert!(validator.validate("hello").is_valid());
    /// assert!(validator.validate("hi").is_invalid()); // too short
    /// assert!(validator.validate("verylongstring").is_invalid()); // too long
    /// ```
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR.
    ///
    /// Both sub-validators are always invoked; if either succeeds the result
    /// is `Valid` and the failing side's errors are discarded. Only when both
    /// fail are their errors concatenated (left errors first).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validly::prelude::*;
    ///
    /// let validator = exact_length(5).or(exact_length(10));
    /// assert!(validator.validate("hello").is_valid());
    /// assert!(validator.validate("helloworld").is_valid());
    /// assert!(validator.validate("hi").is_invalid());
    /// ```
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator with logical NOT.
    ///
    /// On failure of the NOT (i.e. when `self` passes), exactly the supplied
    /// `error` is reported; `self`'s own errors are always discarded when it
    /// fails and the NOT succeeds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validly::prelude::*;
    ///
    /// let validator = contains("admin").not("reserved name");
    /// assert!(validator.validate("alice").is_valid());
    /// assert!(validator.validate("admin7").is_invalid());
    /// ```
    fn not(self, error: impl Into<ValidError>) -> Not<Self> {
        Not::new(self, error)
    }

    /// Lifts this validator over a slice, validating every element.
    ///
    /// All element failures accumulate, each tagged with its index under
    /// `context["index"]`.
    fn each(self) -> Each<Self>
    where
        Self::Input: Sized,
    {
        Each::new(self)
    }

    /// Erases the concrete validator type into an [`AnyValidator`].
    ///
    /// Useful for storing heterogeneous validators of the same input type
    /// in one collection.
    fn erase(self) -> AnyValidator<Self::Input>
    where
        Self: Send + Sync + 'static,
    {
        AnyValidator::from_validator(self)
    }
}

// Automatically implement ValidateExt for all Validate implementations
impl<T: Validate> ValidateExt for T {}

// ============================================================================
// IMPORT COMBINATOR TYPES
// ============================================================================
// Import the actual combinator implementations instead of duplicating them

pub use crate::combinators::and::And;
pub use crate::combinators::any::AnyValidator;
pub use crate::combinators::each::Each;
pub use crate::combinators::not::Not;
pub use crate::combinators::or::Or;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> ValidationResult {
            ValidationResult::valid()
        }
    }

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> ValidationResult {
            ValidationResult::invalid("always fails")
        }
    }

    #[test]
    fn test_validator_trait() {
        let validator = AlwaysValid;
        assert!(validator.validate("test").is_valid());
        assert!(validator.is_valid("test"));
    }

    #[test]
    fn test_check_surfaces_first_error() {
        let validator = AlwaysFails.and(AlwaysFails);
        let error = validator.check("test").unwrap_err();
        assert_eq!(error.message, "always fails");
    }

    #[test]
    fn test_check_ok_when_valid() {
        assert!(AlwaysValid.check("test").is_ok());
    }
}
