//! Schema builder - whole-record validation from per-field rules
//!
//! A [`Schema`] collects field rules (and free-standing record rules) and
//! validates a whole record by running every rule in declaration order,
//! accumulating all errors. It is the builder-style counterpart of chaining
//! [`Field`](crate::schema::Field) validators with `.and(...)`.

use std::borrow::Cow;
use std::fmt;

use crate::combinators::AnyValidator;
use crate::foundation::error::FIELD_KEY;
use crate::foundation::{Validate, ValidationResult};

// ============================================================================
// SCHEMA
// ============================================================================

/// A declarative, ordered set of validation rules for a record type.
///
/// Rules run in the order they were declared, every rule runs regardless of
/// earlier failures, and all errors accumulate. Field rules tag their errors
/// with `context["field"]`; record rules report errors as-is.
///
/// Rules are stored type-erased, so a schema mixes validators of different
/// concrete types freely.
///
/// # Examples
///
/// ```rust
/// use validly::prelude::*;
///
/// struct User {
///     username: String,
///     email: String,
///     age: i64,
/// }
///
/// let schema = Schema::new()
///     .field("username", min_length(3).and(max_length(20)), |u: &User| {
///         u.username.as_str()
///     })
///     .field("email", email(), |u: &User| u.email.as_str())
///     .field("age", in_range(13i64, 130i64), |u: &User| &u.age);
///
/// let user = User {
///     username: "ab".into(),
///     email: "not-an-email".into(),
///     age: 7,
/// };
///
/// let result = schema.validate(&user);
/// let fields: Vec<_> = result.errors().iter().filter_map(|e| e.field_name()).collect();
/// assert_eq!(fields, ["username", "email", "age"]);
/// ```
pub struct Schema<T> {
    rules: Vec<AnyValidator<T>>,
}

impl<T> Schema<T> {
    /// Creates an empty schema. An empty schema is vacuously valid.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a rule for one named field.
    ///
    /// The accessor borrows the field from the record; every error the
    /// field's validator produces is rebuilt with `context["field"]` set to
    /// `name`, overwriting any field tag already present.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<U, V, F>(
        mut self,
        name: impl Into<Cow<'static, str>>,
        validator: V,
        accessor: F,
    ) -> Self
    where
        U: ?Sized,
        V: Validate<Input = U> + Send + Sync + 'static,
        F: Fn(&T) -> &U + Send + Sync + 'static,
    {
        let name = name.into();
        self.rules.push(AnyValidator::new(move |record: &T| {
            validator
                .validate(accessor(record))
                .map_errors(|e| e.with_context(FIELD_KEY, name.clone()))
        }));
        self
    }

    /// Adds a rule that sees the whole record.
    ///
    /// Useful for cross-field constraints that no single accessor can
    /// express. Errors are reported without a field tag unless the rule
    /// sets one itself.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, validator: AnyValidator<T>) -> Self {
        self.rules.push(validator);
        self
    }

    /// Returns the number of rules declared so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rules have been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<T> Default for Schema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Validate for Schema<T> {
    type Input = T;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        self.rules
            .iter()
            .map(|rule| rule.validate(input))
            .fold(ValidationResult::valid(), ValidationResult::and)
    }
}

impl<T> Clone for Schema<T> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("rules", &self.rules.len())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidError;

    struct User {
        username: String,
        email: String,
        age: i64,
    }

    struct MinLength {
        min: usize,
    }

    impl Validate for MinLength {
        type Input = str;

        fn validate(&self, input: &str) -> ValidationResult {
            ValidationResult::from_condition(
                input.chars().count() >= self.min,
                ValidError::new(format!("must be at least {} characters long", self.min)),
            )
        }
    }

    struct Contains {
        substring: &'static str,
    }

    impl Validate for Contains {
        type Input = str;

        fn validate(&self, input: &str) -> ValidationResult {
            ValidationResult::from_condition(
                input.contains(self.substring),
                ValidError::new(format!("must contain '{}'", self.substring)),
            )
        }
    }

    struct MinValue {
        min: i64,
    }

    impl Validate for MinValue {
        type Input = i64;

        fn validate(&self, input: &i64) -> ValidationResult {
            ValidationResult::from_condition(
                *input >= self.min,
                ValidError::new(format!("must be at least {}", self.min)),
            )
        }
    }

    fn user_schema() -> Schema<User> {
        Schema::new()
            .field("username", MinLength { min: 3 }, |u: &User| {
                u.username.as_str()
            })
            .field("email", Contains { substring: "@" }, |u: &User| {
                u.email.as_str()
            })
            .field("age", MinValue { min: 13 }, |u: &User| &u.age)
    }

    #[test]
    fn test_schema_all_pass() {
        let user = User {
            username: "alice".into(),
            email: "alice@example.com".into(),
            age: 30,
        };
        assert!(user_schema().validate(&user).is_valid());
    }

    #[test]
    fn test_schema_accumulates_in_declaration_order() {
        let user = User {
            username: "ab".into(),
            email: "bad".into(),
            age: 7,
        };
        let result = user_schema().validate(&user);
        let fields: Vec<_> = result
            .errors()
            .iter()
            .filter_map(|e| e.field_name())
            .collect();
        assert_eq!(fields, ["username", "email", "age"]);
    }

    #[test]
    fn test_schema_partial_failure() {
        let user = User {
            username: "alice".into(),
            email: "bad".into(),
            age: 30,
        };
        let result = user_schema().validate(&user);
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].field_name(), Some("email"));
    }

    #[test]
    fn test_empty_schema_is_valid() {
        let schema: Schema<User> = Schema::new();
        let user = User {
            username: String::new(),
            email: String::new(),
            age: 0,
        };
        assert!(schema.validate(&user).is_valid());
    }

    #[test]
    fn test_record_rule() {
        let schema = user_schema().rule(AnyValidator::predicate(
            "username must not appear in email",
            |u: &User| !u.email.contains(&u.username),
        ));

        let user = User {
            username: "alice".into(),
            email: "alice@example.com".into(),
            age: 30,
        };
        let result = schema.validate(&user);
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].field_name(), None);
    }

    #[test]
    fn test_schema_clone_validates_identically() {
        let schema = user_schema();
        let cloned = schema.clone();
        let user = User {
            username: "ab".into(),
            email: "bad".into(),
            age: 7,
        };
        assert_eq!(schema.validate(&user), cloned.validate(&user));
    }
}
