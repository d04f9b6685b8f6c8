//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation
//! system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`], [`Validatable`]
//! - **Outcomes**: [`ValidationResult`], [`ValidError`]
//!
//! # Architecture
//!
//! ## 1. Type safety
//!
//! Validators are generic over their input type, providing compile-time
//! guarantees:
//!
//! ```rust,ignore
//! struct MinLength { min: usize }
//!
//! impl Validate for MinLength {
//!     type Input = str;  // Only validates strings
//!     // ...
//! }
//! ```
//!
//! ## 2. Composition
//!
//! Validators compose using logical combinators with a fixed error-ordering
//! law: AND and OR always evaluate both operands, and the left operand's
//! errors always precede the right's.
//!
//! ```rust,ignore
//! let validator = min_length(5).and(max_length(20)).and(alphanumeric());
//! ```
//!
//! ## 3. Immutability
//!
//! Every validator, result, and error is constructed once and never mutated.
//! Context enrichment (field names, element indices) rebuilds errors instead
//! of editing them, which makes every validator safe to share across threads
//! without coordination.

// Module declarations
pub mod error;
pub mod result;
pub mod traits;
pub mod validatable;

// Re-export everything at the foundation level for convenience
pub use error::{Context, ValidError};
pub use result::{ErrorList, ValidationResult};
pub use traits::{Validate, ValidateExt};
pub use validatable::Validatable;

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value with multiple validators, AND-folded left to right.
///
/// Errors accumulate across all validators in order.
///
/// # Examples
///
/// ```rust
/// use validly::foundation::{validate_with_all, Validate};
/// use validly::validators::{MinLength, MaxLength};
///
/// let min = MinLength::new(3);
/// let max = MaxLength::new(10);
/// let validators: Vec<&dyn Validate<Input = str>> = vec![&min, &max];
/// assert!(validate_with_all("hello", &validators).is_valid());
/// ```
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> ValidationResult
where
    V: Validate + ?Sized,
{
    validators
        .iter()
        .map(|v| v.validate(value))
        .fold(ValidationResult::valid(), ValidationResult::and)
}

/// Validates a value with multiple validators, OR-folded left to right.
///
/// `Valid` if any validator passes; otherwise all errors accumulate.
pub fn validate_with_any<V>(value: &V::Input, validators: &[&V]) -> ValidationResult
where
    V: Validate + ?Sized,
{
    validators
        .iter()
        .map(|v| v.validate(value))
        .reduce(ValidationResult::or)
        .unwrap_or(ValidationResult::Valid)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod foundation_tests {
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
    fn test_validate_with_all_success() {
        let validators: &[&dyn Validate<Input = str>] = &[&AlwaysValid, &AlwaysValid];
        assert!(validate_with_all("test", validators).is_valid());
    }

    #[test]
    fn test_validate_with_all_accumulates() {
        let validators: &[&dyn Validate<Input = str>] = &[&AlwaysFails, &AlwaysValid, &AlwaysFails];
        let result = validate_with_all("test", validators);
        assert_eq!(result.errors().len(), 2);
    }

    #[test]
    fn test_validate_with_any_success() {
        let validators: &[&dyn Validate<Input = str>] = &[&AlwaysFails, &AlwaysValid];
        assert!(validate_with_any("test", validators).is_valid());
    }

    #[test]
    fn test_validate_with_any_all_fail() {
        let validators: &[&dyn Validate<Input = str>] = &[&AlwaysFails, &AlwaysFails];
        let result = validate_with_any("test", validators);
        assert_eq!(result.errors().len(), 2);
    }

    #[test]
    fn test_validate_with_any_empty_is_valid() {
        let validators: &[&dyn Validate<Input = str>] = &[];
        assert!(validate_with_any("test", validators).is_valid());
    }
}
