//! Collection size validators
//!
//! This module provides validators for checking the size of collections.

use std::marker::PhantomData;

use crate::foundation::{ValidError, Validate, ValidationResult};

// ============================================================================
// MIN SIZE
// ============================================================================

/// Validates that a collection has at least a minimum size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinSize<T> {
    min: usize,
    _phantom: PhantomData<T>,
}

impl<T> Validate for MinSize<T> {
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        let size = input.len();
        ValidationResult::from_condition(
            size >= self.min,
            ValidError::new(format!(
                "must have at least {} elements, got {}",
                self.min, size
            ))
            .with_context("min", self.min.to_string())
            .with_context("actual", size.to_string()),
        )
    }
}

/// Creates a validator that checks if a collection has at least a minimum size.
///
/// # Examples
///
/// ```
/// use validly::validators::min_size;
/// use validly::foundation::Validate;
///
/// let validator = min_size::<i32>(3);
/// assert!(validator.validate(&[1, 2, 3]).is_valid());
/// assert!(validator.validate(&[1, 2]).is_invalid());
/// ```
#[must_use]
pub fn min_size<T>(min: usize) -> MinSize<T> {
    MinSize {
        min,
        _phantom: PhantomData,
    }
}

// ============================================================================
// MAX SIZE
// ============================================================================

/// Validates that a collection has at most a maximum size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxSize<T> {
    max: usize,
    _phantom: PhantomData<T>,
}

impl<T> Validate for MaxSize<T> {
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        let size = input.len();
        ValidationResult::from_condition(
            size <= self.max,
            ValidError::new(format!(
                "must have at most {} elements, got {}",
                self.max, size
            ))
            .with_context("max", self.max.to_string())
            .with_context("actual", size.to_string()),
        )
    }
}

/// Creates a validator that checks if a collection has at most a maximum size.
///
/// # Examples
///
/// ```
/// use validly::validators::max_size;
/// use validly::foundation::Validate;
///
/// let validator = max_size::<i32>(3);
/// assert!(validator.validate(&[1, 2, 3]).is_valid());
/// assert!(validator.validate(&[1, 2, 3, 4]).is_invalid());
/// ```
#[must_use]
pub fn max_size<T>(max: usize) -> MaxSize<T> {
    MaxSize {
        max,
        _phantom: PhantomData,
    }
}

// ============================================================================
// EXACT SIZE
// ============================================================================

/// Validates that a collection has an exact size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExactSize<T> {
    size: usize,
    _phantom: PhantomData<T>,
}

impl<T> Validate for ExactSize<T> {
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        let actual = input.len();
        ValidationResult::from_condition(
            actual == self.size,
            ValidError::new(format!(
                "must have exactly {} elements, got {}",
                self.size, actual
            ))
            .with_context("expected", self.size.to_string())
            .with_context("actual", actual.to_string()),
        )
    }
}

/// Creates a validator that checks if a collection has an exact size.
///
/// # Examples
///
/// ```
/// use validly::validators::exact_size;
/// use validly::foundation::Validate;
///
/// let validator = exact_size::<i32>(3);
/// assert!(validator.validate(&[1, 2, 3]).is_valid());
/// assert!(validator.validate(&[1, 2]).is_invalid());
/// ```
#[must_use]
pub fn exact_size<T>(size: usize) -> ExactSize<T> {
    ExactSize {
        size,
        _phantom: PhantomData,
    }
}

// ============================================================================
// NOT EMPTY
// ============================================================================

/// Validates that a collection is not empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotEmptyCollection<T> {
    _phantom: PhantomData<T>,
}

impl<T> Validate for NotEmptyCollection<T> {
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        ValidationResult::from_condition(!input.is_empty(), ValidError::new("must not be empty"))
    }
}

/// Creates a validator that checks if a collection is not empty.
///
/// # Examples
///
/// ```
/// use validly::validators::not_empty_collection;
/// use validly::foundation::Validate;
///
/// let validator = not_empty_collection::<i32>();
/// assert!(validator.validate(&[1]).is_valid());
/// assert!(validator.validate(&[]).is_invalid());
/// ```
#[must_use]
pub fn not_empty_collection<T>() -> NotEmptyCollection<T> {
    NotEmptyCollection {
        _phantom: PhantomData,
    }
}

// ============================================================================
// SIZE RANGE
// ============================================================================

/// Validates that a collection size is within an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeRange<T> {
    min: usize,
    max: usize,
    _phantom: PhantomData<T>,
}

impl<T> Validate for SizeRange<T> {
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        let size = input.len();
        ValidationResult::from_condition(
            size >= self.min && size <= self.max,
            ValidError::new(format!(
                "must have between {} and {} elements, got {}",
                self.min, self.max, size
            ))
            .with_context("min", self.min.to_string())
            .with_context("max", self.max.to_string())
            .with_context("actual", size.to_string()),
        )
    }
}

/// Creates a validator that checks if a collection size is within a range.
///
/// # Examples
///
/// ```
/// use validly::validators::size_range;
/// use validly::foundation::Validate;
///
/// let validator = size_range::<i32>(2, 4);
/// assert!(validator.validate(&[1, 2]).is_valid());
/// assert!(validator.validate(&[1]).is_invalid());
/// ```
#[must_use]
pub fn size_range<T>(min: usize, max: usize) -> SizeRange<T> {
    SizeRange {
        min,
        max,
        _phantom: PhantomData,
    }
}

// ============================================================================
// TESTS
// ============================================================================
