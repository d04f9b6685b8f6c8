//! Nullable validators for Option types
//!
//! # Validators
//!
//! - [`Required`] / [`NotNull`] - Validates that an `Option` is `Some`
//!
//! # Examples
//!
//! ```rust
//! use validly::prelude::*;
//!
//! let validator = required::<String>();
//! assert!(validator.validate(&Some("hello".to_string())).is_valid());
//! assert!(validator.validate(&None::<String>).is_invalid());
//! ```

use std::marker::PhantomData;

use crate::foundation::{ValidError, Validate, ValidationResult};

/// Validates that an `Option` is `Some`.
///
/// This validator passes if the input is `Some(value)` and fails if it is `None`.
///
/// # Type Parameters
///
/// * `T` - The inner type of the `Option`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Required<T> {
    _phantom: PhantomData<T>,
}

impl<T> Validate for Required<T> {
    type Input = Option<T>;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        ValidationResult::from_condition(input.is_some(), ValidError::new("value is required"))
    }
}

/// Creates a `Required` validator.
///
/// # Examples
///
/// ```rust
/// use validly::validators::required;
/// use validly::foundation::Validate;
///
/// let validator = required::<i32>();
/// assert!(validator.validate(&Some(42)).is_valid());
/// assert!(validator.validate(&None::<i32>).is_invalid());
/// ```
#[must_use]
pub fn required<T>() -> Required<T> {
    Required {
        _phantom: PhantomData,
    }
}

/// Alias for [`Required`].
///
/// This type alias provides an alternative name that may be more familiar
/// to users coming from other validation libraries or SQL contexts.
pub type NotNull<T> = Required<T>;

/// Creates a `NotNull` validator.
///
/// This is an alias for [`required`]. See that function for details.
#[must_use]
pub fn not_null<T>() -> NotNull<T> {
    Required {
        _phantom: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(required().validate(&Some(42)).is_valid());
        assert!(required().validate(&None::<i32>).is_invalid());
    }

    #[test]
    fn test_not_null() {
        assert!(not_null().validate(&Some("x")).is_valid());
        assert!(not_null().validate(&None::<&str>).is_invalid());
    }
}
