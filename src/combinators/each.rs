//! EACH combinator - validates each element of a collection
//!
//! [`Each`] lifts an element validator over a slice, applying it to every
//! element and accumulating all failures, each tagged with the element's
//! index under `context["index"]`.

use crate::foundation::error::INDEX_KEY;
use crate::foundation::{Validate, ValidationResult};

// ============================================================================
// EACH COMBINATOR
// ============================================================================

/// Validates each element of a collection.
///
/// Applies a validator to every element of a slice. All element failures
/// accumulate, in element order, each rebuilt with `context["index"]` set
/// to the failing element's position. Element errors keep their own context
/// entries; only `"index"` is (re)written.
///
/// # Examples
///
/// ```rust
/// use validly::prelude::*;
///
/// let validator = in_range(1i64, 10i64).each();
///
/// assert!(validator.validate(&[1, 5, 9][..]).is_valid());
///
/// let result = validator.validate(&[1, 5, 15, 20][..]);
/// assert_eq!(result.errors().len(), 2);
/// assert_eq!(result.errors()[0].context("index"), Some("2"));
/// assert_eq!(result.errors()[1].context("index"), Some("3"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Each<V> {
    inner: V,
}

impl<V> Each<V> {
    /// Creates a new `Each` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V, T> Validate for Each<V>
where
    V: Validate<Input = T>,
{
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        input
            .iter()
            .enumerate()
            .map(|(index, element)| {
                self.inner
                    .validate(element)
                    .map_errors(|e| e.with_context(INDEX_KEY, index.to_string()))
            })
            .fold(ValidationResult::valid(), ValidationResult::and)
    }
}

/// Creates an `Each` combinator from an element validator.
pub fn each<V>(validator: V) -> Each<V> {
    Each::new(validator)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidError;

    struct Positive;

    impl Validate for Positive {
        type Input = i32;

        fn validate(&self, input: &i32) -> ValidationResult {
            ValidationResult::from_condition(*input > 0, "must be positive")
        }
    }

    #[test]
    fn test_each_all_valid() {
        let validator = Each::new(Positive);
        assert!(validator.validate(&[1, 2, 3]).is_valid());
    }

    #[test]
    fn test_each_tags_indices() {
        let validator = Each::new(Positive);
        let result = validator.validate(&[1, -2, -3]);
        let errors = result.errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].context("index"), Some("1"));
        assert_eq!(errors[1].context("index"), Some("2"));
    }

    #[test]
    fn test_each_all_invalid() {
        let validator = Each::new(Positive);
        let result = validator.validate(&[-1, -2, -3]);
        assert_eq!(result.errors().len(), 3);
    }

    #[test]
    fn test_each_empty() {
        let validator = Each::new(Positive);
        let input: [i32; 0] = [];
        assert!(validator.validate(&input).is_valid());
    }

    #[test]
    fn test_each_preserves_element_context() {
        struct WithContext;

        impl Validate for WithContext {
            type Input = i32;

            fn validate(&self, _input: &i32) -> ValidationResult {
                ValidationResult::invalid(ValidError::new("bad").with_context("min", "1"))
            }
        }

        let validator = Each::new(WithContext);
        let result = validator.validate(&[7]);
        let error = &result.errors()[0];
        assert_eq!(error.context("min"), Some("1"));
        assert_eq!(error.context("index"), Some("0"));
    }
}
