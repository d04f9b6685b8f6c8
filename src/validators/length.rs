//! String length validators
//!
//! This module provides validators for checking string length constraints.
//! By default, length is measured in Unicode scalar values (chars).
//! Use the `.bytes()` constructor for byte-length counting when performance
//! is critical and the input is known to be ASCII.

use crate::foundation::{ValidError, Validate, ValidationResult};

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values (correct for all text).
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// NOT EMPTY
// ============================================================================

crate::validator! {
    /// Validates that a string is not empty.
    ///
    /// This is equivalent to `MinLength::new(1)` but more semantic.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidError::new("must not be empty") }
    fn not_empty();
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) >= self.min }
    error(self, input) {
        ValidError::new(format!("must be at least {} characters long", self.min))
            .with_context("min", self.min.to_string())
            .with_context("actual", self.mode.measure(input).to_string())
    }
    new(min: usize) { Self { min, mode: LengthMode::Chars } }
    fn min_length(min: usize);
}

impl MinLength {
    /// Creates a minimum length validator that counts bytes.
    #[must_use]
    pub fn bytes(min: usize) -> Self {
        Self {
            min,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) <= self.max }
    error(self, input) {
        ValidError::new(format!("must be at most {} characters long", self.max))
            .with_context("max", self.max.to_string())
            .with_context("actual", self.mode.measure(input).to_string())
    }
    new(max: usize) { Self { max, mode: LengthMode::Chars } }
    fn max_length(max: usize);
}

impl MaxLength {
    /// Creates a maximum length validator that counts bytes.
    #[must_use]
    pub fn bytes(max: usize) -> Self {
        Self {
            max,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// EXACT LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has an exact length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ExactLength { length: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) == self.length }
    error(self, input) {
        ValidError::new(format!("must be exactly {} characters long", self.length))
            .with_context("expected", self.length.to_string())
            .with_context("actual", self.mode.measure(input).to_string())
    }
    new(length: usize) { Self { length, mode: LengthMode::Chars } }
    fn exact_length(length: usize);
}

impl ExactLength {
    /// Creates an exact length validator that counts bytes.
    #[must_use]
    pub fn bytes(length: usize) -> Self {
        Self {
            length,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// LENGTH RANGE
// ============================================================================

/// Validates that a string length is within an inclusive range.
///
/// This is more efficient than using `min_length().and(max_length())` and
/// reports a single error naming both bounds and the actual length.
///
/// A range with `min > max` is a legal validator that no input satisfies;
/// misconfiguration surfaces as `Invalid` at validation time, never as a
/// construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthRange {
    /// Minimum length (inclusive).
    pub min: usize,
    /// Maximum length (inclusive).
    pub max: usize,
    /// How to count length.
    pub mode: LengthMode,
}

impl LengthRange {
    /// Creates a new length range validator (counts Unicode chars by default).
    #[must_use]
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min,
            max,
            mode: LengthMode::Chars,
        }
    }

    /// Creates a length range validator that counts bytes.
    #[must_use]
    pub fn bytes(min: usize, max: usize) -> Self {
        Self {
            min,
            max,
            mode: LengthMode::Bytes,
        }
    }
}

impl Validate for LengthRange {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        let len = self.mode.measure(input);
        ValidationResult::from_condition(
            len >= self.min && len <= self.max,
            ValidError::new(format!(
                "length must be between {} and {}, got {}",
                self.min, self.max, len
            ))
            .with_context("min", self.min.to_string())
            .with_context("max", self.max.to_string())
            .with_context("actual", len.to_string()),
        )
    }
}

/// Creates a length range validator.
#[must_use]
pub fn length_range(min: usize, max: usize) -> LengthRange {
    LengthRange::new(min, max)
}

// ============================================================================
// TESTS
// ============================================================================
