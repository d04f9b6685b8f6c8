//! Built-in leaf validators
//!
//! This module provides a set of ready-made validators organized by domain:
//!
//! - **String length**: [`MinLength`], [`MaxLength`], [`ExactLength`],
//!   [`LengthRange`], [`NotEmpty`] (counts Unicode chars by default)
//! - **String patterns**: [`Contains`], [`StartsWith`], [`EndsWith`],
//!   [`Alphanumeric`], [`Alphabetic`], [`Numeric`], [`Lowercase`], [`Uppercase`]
//! - **String content**: [`Email`], [`Url`], [`MatchesRegex`]
//! - **Numeric ranges**: [`Min`], [`Max`], [`InRange`], [`GreaterThan`],
//!   [`LessThan`], [`ExclusiveRange`]
//! - **Integer properties**: [`Even`], [`Odd`], [`Positive`], [`Negative`],
//!   [`NonZero`], [`DivisibleBy`]
//! - **Collection size**: [`MinSize`], [`MaxSize`], [`ExactSize`],
//!   [`SizeRange`], [`NotEmptyCollection`]
//! - **Collection elements**: [`Unique`], [`Sorted`], [`SortedDescending`],
//!   [`ContainsElement`], [`ContainsAll`]
//! - **Nullable**: [`Required`] / [`NotNull`]
//!
//! All validators are pure and immutable. Misconfigured validators (a
//! malformed regex, an inverted range, a zero divisor) are legal values
//! that report `Invalid` at validation time instead of panicking.

// ============================================================================
// MODULES
// ============================================================================

pub mod content;
pub mod elements;
pub mod length;
pub mod nullable;
pub mod pattern;
pub mod properties;
pub mod range;
pub mod size;

// ============================================================================
// RE-EXPORTS
// ============================================================================

// String length
pub use length::{
    ExactLength, LengthMode, LengthRange, MaxLength, MinLength, NotEmpty, exact_length,
    length_range, max_length, min_length, not_empty,
};

// String patterns
pub use pattern::{
    Alphabetic, Alphanumeric, Contains, EndsWith, Lowercase, Numeric, StartsWith, Uppercase,
    alphabetic, alphanumeric, contains, ends_with, lowercase, numeric, starts_with, uppercase,
};

// String content
pub use content::{Email, MatchesRegex, Url, email, matches_regex, url};

// Numeric ranges
pub use range::{
    ExclusiveRange, GreaterThan, InRange, LessThan, Max, Min, exclusive_range, greater_than,
    in_range, less_than, max, min,
};

// Integer properties
pub use properties::{
    DivisibleBy, Even, Negative, NonZero, Odd, Positive, divisible_by, even, multiple_of, negative,
    non_zero, odd, positive,
};

// Collection size
pub use size::{
    ExactSize, MaxSize, MinSize, NotEmptyCollection, SizeRange, exact_size, max_size, min_size,
    not_empty_collection, size_range,
};

// Collection elements
pub use elements::{
    ContainsAll, ContainsElement, Sorted, SortedDescending, Unique, contains_all,
    contains_element, sorted, sorted_descending, unique,
};

// Nullable
pub use nullable::{NotNull, Required, not_null, required};
