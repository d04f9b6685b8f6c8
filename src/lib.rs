//! # validly
//!
//! A composable, type-safe data validation library.
//!
//! Validators are pure values: they inspect a borrowed input and report a
//! [`ValidationResult`](foundation::ValidationResult) - either `Valid` or
//! `Invalid` with an ordered, non-empty list of errors. Combinators never
//! short-circuit: AND runs both sides and accumulates every error, so one
//! validation pass reports everything wrong with a value.
//!
//! ## Quick Start
//!
//! ```rust
//! use validly::prelude::*;
//!
//! // Compose validators with .and() / .or() / .not()
//! let username = min_length(3).and(max_length(20)).and(alphanumeric());
//! assert!(username.validate("alice").is_valid());
//!
//! // Failures accumulate across the whole chain
//! let result = username.validate("a!");
//! assert_eq!(result.errors().len(), 2);
//! ```
//!
//! ## Validating Records
//!
//! ```rust
//! use validly::prelude::*;
//!
//! struct User {
//!     username: String,
//!     age: i64,
//! }
//!
//! let schema = Schema::new()
//!     .field("username", min_length(3), |u: &User| u.username.as_str())
//!     .field("age", in_range(13i64, 130i64), |u: &User| &u.age);
//!
//! let user = User { username: "ab".into(), age: 7 };
//! let result = schema.validate(&user);
//! assert_eq!(result.errors().len(), 2);
//! assert_eq!(result.errors()[0].field_name(), Some("username"));
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.
//!
//! ## Built-in Validators
//!
//! - **String**: [`MinLength`](validators::MinLength), [`MaxLength`](validators::MaxLength),
//!   [`NotEmpty`](validators::NotEmpty), [`Contains`](validators::Contains),
//!   [`Email`](validators::Email), [`MatchesRegex`](validators::MatchesRegex)
//! - **Numeric**: [`Min`](validators::Min), [`Max`](validators::Max),
//!   [`InRange`](validators::InRange)
//! - **Collection**: [`MinSize`](validators::MinSize), [`Unique`](validators::Unique),
//!   [`Sorted`](validators::Sorted)
//! - **Nullable**: [`Required`](validators::Required)

// Deep combinator nesting (And<Or<Not<...>, ...>, ...>) produces complex types
// that are inherent to the type-safe combinator architecture.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod schema;
pub mod validators;
