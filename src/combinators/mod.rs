//! Validator combinators - composition building blocks
//!
//! This module provides combinators for composing validators into richer
//! ones. Combinators never inspect the input themselves; they orchestrate
//! inner validators and merge their [`ValidationResult`]s.
//!
//! # Available Combinators
//!
//! - [`And`] - both validators must pass; errors from both sides accumulate
//! - [`Or`] - at least one validator must pass; losing errors are discarded
//! - [`Not`] - inverts a validator, reporting a fixed caller-supplied error
//! - [`Each`] - lifts an element validator over a slice, tagging indices
//! - [`AnyValidator`] - erases a validator's concrete type for uniform storage
//!
//! Most of the time you will reach these through the
//! [`ValidateExt`](crate::foundation::ValidateExt) methods rather than the
//! structs directly:
//!
//! ```rust
//! use validly::prelude::*;
//!
//! let username = min_length(3)
//!     .and(max_length(20))
//!     .and(contains(" ").not("must not contain spaces"));
//!
//! assert!(username.validate("alice").is_valid());
//! assert!(username.validate("a b").is_invalid());
//! ```
//!
//! [`ValidationResult`]: crate::foundation::ValidationResult

// ============================================================================
// MODULES
// ============================================================================

pub mod and;
pub mod any;
pub mod each;
pub mod not;
pub mod or;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use and::{And, AndAll, and, and_all};
pub use any::AnyValidator;
pub use each::{Each, each};
pub use not::{Not, not};
pub use or::{Or, OrAny, or, or_any};
