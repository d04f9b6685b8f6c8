//! Prelude module for convenient imports.
//!
//! Provides a single `use validly::prelude::*;` import that brings in all
//! commonly needed traits, types, validators, and combinators.
//!
//! # Examples
//!
//! ```rust
//! use validly::prelude::*;
//!
//! let username = min_length(3).and(max_length(20)).and(alphanumeric());
//! let age = in_range(18, 100);
//! let tags = min_size::<String>(1).and(max_size::<String>(10));
//! # assert!(username.validate("alice").is_valid());
//! # assert!(age.validate(&30).is_valid());
//! ```

// ============================================================================
// FOUNDATION: Core traits and outcome types
// ============================================================================

pub use crate::foundation::{
    Context, ErrorList, ValidError, Validatable, Validate, ValidateExt, ValidationResult,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    And, AnyValidator, Each, Not, Or, and, and_all, each, not, or, or_any,
};

// ============================================================================
// SCHEMA: Record validation
// ============================================================================

pub use crate::schema::{Field, FieldValidateExt, Schema, field};
