//! Record validation - named fields and whole-record schemas
//!
//! This module attributes validation failures to the parts of a structured
//! value:
//!
//! - [`Field`] validates one named field of a record, tagging errors with
//!   `context["field"]`
//! - [`Schema`] collects field rules (and cross-field record rules) into an
//!   ordered, accumulating whole-record validator
//!
//! Both run every rule and accumulate every error; nothing short-circuits.
//!
//! ```rust
//! use validly::prelude::*;
//!
//! struct Signup {
//!     username: String,
//!     age: i64,
//! }
//!
//! let schema = Schema::new()
//!     .field("username", min_length(3), |s: &Signup| s.username.as_str())
//!     .field("age", min(13i64), |s: &Signup| &s.age);
//!
//! let bad = Signup { username: "x".into(), age: 8 };
//! assert_eq!(schema.validate(&bad).errors().len(), 2);
//! ```

// ============================================================================
// MODULES
// ============================================================================

pub mod builder;
pub mod field;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use builder::Schema;
pub use field::{Field, FieldValidateExt, field};
