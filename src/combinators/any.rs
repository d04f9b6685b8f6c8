//! Type erasure for heterogeneous validator storage
//!
//! [`AnyValidator`] wraps any validator (or bare validation function) for a
//! fixed input type behind one opaque callable, so validators of different
//! concrete types can be stored and passed uniformly - for example in a
//! `Vec<AnyValidator<str>>` or inside a [`Schema`](crate::schema::Schema).
//!
//! Dynamic dispatch is accepted here as a deliberate, well-understood cost;
//! everywhere else composition stays statically generic.

use std::fmt;
use std::sync::Arc;

use crate::foundation::{ValidError, Validate, ValidationResult};

// ============================================================================
// ANY VALIDATOR
// ============================================================================

/// A type-erased validator for values of type `T`.
///
/// Owns one shared, immutable validation closure. Cloning is cheap (an `Arc`
/// bump) and clones validate identically, which keeps erased validators as
/// freely shareable as concrete ones.
///
/// # Examples
///
/// ```rust
/// use validly::prelude::*;
///
/// // Heterogeneous validators, one storage type:
/// let checks: Vec<AnyValidator<str>> = vec![
///     min_length(3).erase(),
///     contains("@").erase(),
///     AnyValidator::predicate("must be lowercase", |s: &str| {
///         s.chars().all(|c| !c.is_uppercase())
///     }),
/// ];
///
/// assert!(checks.iter().all(|v| v.validate("user@example.com").is_valid()));
/// ```
pub struct AnyValidator<T: ?Sized> {
    run: Arc<dyn Fn(&T) -> ValidationResult + Send + Sync>,
}

impl<T: ?Sized> AnyValidator<T> {
    /// Creates an erased validator from a bare validation function.
    pub fn new(run: impl Fn(&T) -> ValidationResult + Send + Sync + 'static) -> Self {
        Self { run: Arc::new(run) }
    }

    /// Erases a concrete validator, capturing its `validate` operation.
    pub fn from_validator<V>(validator: V) -> Self
    where
        V: Validate<Input = T> + Send + Sync + 'static,
    {
        Self::new(move |input| validator.validate(input))
    }

    /// A validator that ignores its input and always reports `Valid`.
    ///
    /// Useful as a fold seed or a placeholder in conditionally built chains.
    #[must_use]
    pub fn always_valid() -> Self {
        Self::new(|_| ValidationResult::valid())
    }

    /// A validator that ignores its input and always reports `Invalid` with
    /// exactly the supplied error.
    pub fn always_invalid(error: impl Into<ValidError>) -> Self {
        let error = error.into();
        Self::new(move |_| ValidationResult::invalid(error.clone()))
    }

    /// Builds a validator from a boolean predicate.
    ///
    /// Reports `Valid` iff the predicate holds, else `Invalid` with exactly
    /// the one supplied error. The predicate must uphold the same purity
    /// contract as any [`Validate`] implementation.
    pub fn predicate(
        error: impl Into<ValidError>,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Self {
        let error = error.into();
        Self::new(move |input| ValidationResult::from_condition(predicate(input), error.clone()))
    }
}

impl<T: ?Sized> Validate for AnyValidator<T> {
    type Input = T;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        (self.run)(input)
    }
}

// Clone impl - manual because T need not be Clone
impl<T: ?Sized> Clone for AnyValidator<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T: ?Sized> fmt::Debug for AnyValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyValidator")
            .field("run", &"<closure>")
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;

    struct MinLength {
        min: usize,
    }

    impl Validate for MinLength {
        type Input = str;

        fn validate(&self, input: &str) -> ValidationResult {
            ValidationResult::from_condition(input.len() >= self.min, "too short")
        }
    }

    #[test]
    fn test_from_validator() {
        let validator = AnyValidator::from_validator(MinLength { min: 3 });
        assert!(validator.validate("hello").is_valid());
        assert!(validator.validate("hi").is_invalid());
    }

    #[test]
    fn test_erase_via_ext() {
        let validator = MinLength { min: 3 }.erase();
        assert!(validator.validate("hello").is_valid());
    }

    #[test]
    fn test_always_valid() {
        let validator = AnyValidator::<str>::always_valid();
        assert!(validator.validate("").is_valid());
        assert!(validator.validate("anything").is_valid());
    }

    #[test]
    fn test_always_invalid() {
        let validator = AnyValidator::<str>::always_invalid("rejected");
        let result = validator.validate("anything");
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].message, "rejected");
    }

    #[test]
    fn test_predicate() {
        let validator = AnyValidator::predicate("must be even", |n: &i64| n % 2 == 0);
        assert!(validator.validate(&4).is_valid());
        let result = validator.validate(&7);
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].message, "must be even");
    }

    #[test]
    fn test_heterogeneous_storage() {
        let checks: Vec<AnyValidator<str>> = vec![
            MinLength { min: 2 }.erase(),
            AnyValidator::predicate("no spaces", |s: &str| !s.contains(' ')),
        ];
        assert!(checks.iter().all(|v| v.validate("ok").is_valid()));
        assert!(checks.iter().any(|v| v.validate("not ok").is_invalid()));
    }

    #[test]
    fn test_clone_shares_behavior() {
        let validator = AnyValidator::predicate("nonzero", |n: &i64| *n != 0);
        let cloned = validator.clone();
        assert_eq!(validator.validate(&0), cloned.validate(&0));
        assert_eq!(validator.validate(&1), cloned.validate(&1));
    }

    #[test]
    fn test_erased_validators_compose() {
        let validator = MinLength { min: 3 }
            .erase()
            .and(AnyValidator::predicate("no digits", |s: &str| {
                !s.chars().any(|c| c.is_ascii_digit())
            }));
        assert!(validator.validate("hello").is_valid());
        assert_eq!(validator.validate("h1").errors().len(), 2);
    }
}
