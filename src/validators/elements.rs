//! Collection element validators
//!
//! Validators over slice contents: uniqueness, ordering, and membership.
//! Element-wise application of a single-value validator lives in the
//! [`Each`](crate::combinators::Each) combinator instead.

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::foundation::{ValidError, Validate, ValidationResult};

// ============================================================================
// UNIQUE
// ============================================================================

/// Validates that all elements are unique.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unique<T> {
    _phantom: PhantomData<T>,
}

impl<T> Validate for Unique<T>
where
    T: Hash + Eq + Display,
{
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        let mut seen = HashSet::new();
        for (index, item) in input.iter().enumerate() {
            if !seen.insert(item) {
                // Report the first duplicate encountered.
                return ValidationResult::invalid(
                    ValidError::new(format!("duplicate element '{item}'"))
                        .with_context("index", index.to_string()),
                );
            }
        }
        ValidationResult::valid()
    }
}

/// Creates a validator that checks that all elements are unique.
#[must_use]
pub fn unique<T>() -> Unique<T>
where
    T: Hash + Eq + Display,
{
    Unique {
        _phantom: PhantomData,
    }
}

// ============================================================================
// SORTED
// ============================================================================

/// Validates that a collection is sorted in ascending order.
///
/// Equal adjacent elements are accepted. Empty and single-element
/// collections are trivially sorted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sorted<T> {
    _phantom: PhantomData<T>,
}

impl<T> Validate for Sorted<T>
where
    T: PartialOrd,
{
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        for (index, window) in input.windows(2).enumerate() {
            if window[0] > window[1] {
                return ValidationResult::invalid(
                    ValidError::new("must be sorted in ascending order")
                        .with_context("index", (index + 1).to_string()),
                );
            }
        }
        ValidationResult::valid()
    }
}

/// Creates a validator that checks if a collection is sorted ascending.
#[must_use]
pub fn sorted<T>() -> Sorted<T>
where
    T: PartialOrd,
{
    Sorted {
        _phantom: PhantomData,
    }
}

// ============================================================================
// SORTED DESCENDING
// ============================================================================

/// Validates that a collection is sorted in descending order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortedDescending<T> {
    _phantom: PhantomData<T>,
}

impl<T> Validate for SortedDescending<T>
where
    T: PartialOrd,
{
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        for (index, window) in input.windows(2).enumerate() {
            if window[0] < window[1] {
                return ValidationResult::invalid(
                    ValidError::new("must be sorted in descending order")
                        .with_context("index", (index + 1).to_string()),
                );
            }
        }
        ValidationResult::valid()
    }
}

/// Creates a validator that checks if a collection is sorted descending.
#[must_use]
pub fn sorted_descending<T>() -> SortedDescending<T>
where
    T: PartialOrd,
{
    SortedDescending {
        _phantom: PhantomData,
    }
}

// ============================================================================
// CONTAINS ELEMENT
// ============================================================================

/// Validates that a collection contains a specific element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainsElement<T> {
    /// The element to search for in the collection.
    pub element: T,
}

impl<T> ContainsElement<T> {
    pub fn new(element: T) -> Self {
        Self { element }
    }
}

impl<T> Validate for ContainsElement<T>
where
    T: PartialEq + Display,
{
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        ValidationResult::from_condition(
            input.contains(&self.element),
            ValidError::new(format!("must contain '{}'", self.element)),
        )
    }
}

/// Creates a validator that checks if a collection contains an element.
pub fn contains_element<T>(element: T) -> ContainsElement<T>
where
    T: PartialEq + Display,
{
    ContainsElement::new(element)
}

// ============================================================================
// CONTAINS ALL
// ============================================================================

/// Validates that a collection contains all specified elements.
///
/// All missing elements are reported, one error per element, in the order
/// they were specified.
#[derive(Debug, Clone)]
pub struct ContainsAll<T> {
    /// The elements that must all be present.
    pub elements: Vec<T>,
}

impl<T> ContainsAll<T> {
    pub fn new(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T> Validate for ContainsAll<T>
where
    T: PartialEq + Display,
{
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        self.elements
            .iter()
            .map(|element| {
                ValidationResult::from_condition(
                    input.contains(element),
                    ValidError::new(format!("must contain '{element}'")),
                )
            })
            .fold(ValidationResult::valid(), ValidationResult::and)
    }
}

/// Creates a validator that checks if a collection contains all elements.
pub fn contains_all<T>(elements: Vec<T>) -> ContainsAll<T>
where
    T: PartialEq + Display,
{
    ContainsAll::new(elements)
}

// ============================================================================
// TESTS
// ============================================================================
