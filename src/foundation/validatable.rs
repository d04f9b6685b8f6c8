//! Self-validating record types
//!
//! [`Validatable`] is the capability a record type implements when it knows
//! how to validate itself, typically by composing a [`Schema`](crate::schema::Schema)
//! once and applying it to `self`.

use crate::combinators::any::AnyValidator;
use crate::foundation::{ErrorList, ValidError, ValidationResult};

// ============================================================================
// VALIDATABLE TRAIT
// ============================================================================

/// A record type that exposes its own validator.
///
/// Implementors define [`validate`](Self::validate); everything else is
/// provided. The static [`validator`](Self::validator) adapter lets
/// self-validating types plug into generic validator-consuming code.
///
/// # Examples
///
/// ```rust
/// use validly::prelude::*;
///
/// struct Signup {
///     username: String,
///     age: i64,
/// }
///
/// impl Validatable for Signup {
///     fn validate(&self) -> ValidationResult {
///         Schema::new()
///             .field("username", min_length(3), |s: &Signup| s.username.as_str())
///             .field("age", in_range(18i64, 120i64), |s: &Signup| &s.age)
///             .validate(self)
///     }
/// }
///
/// let signup = Signup { username: "al".into(), age: 15 };
/// assert!(!signup.is_valid());
/// assert_eq!(signup.validation_errors().len(), 2);
/// ```
pub trait Validatable {
    /// Validates this value, returning the full accumulated result.
    fn validate(&self) -> ValidationResult;

    /// Returns true if this value passes validation.
    fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }

    /// The accumulated validation errors. Empty when valid.
    fn validation_errors(&self) -> ErrorList {
        self.validate().into_errors()
    }

    /// Validates this value, surfacing only the FIRST error on failure.
    ///
    /// Intentionally lossy, for fail-fast call sites; use
    /// [`validate`](Self::validate) for full diagnostics.
    fn check(&self) -> Result<(), ValidError> {
        self.validate().into_result()
    }

    /// Adapts this type's own validation into an [`AnyValidator`], so
    /// self-validating values can be composed like any other validator.
    fn validator() -> AnyValidator<Self>
    where
        Self: Sized + 'static,
    {
        AnyValidator::new(Self::validate)
    }
}

// ============================================================================
// TESTS
// ============================================================================
