//! Field projection - validating one named field of a record
//!
//! [`Field`] pairs a field name, an accessor, and a validator for the
//! field's type. Validating a record projects out the field, runs the
//! validator, and rebuilds every resulting error with `context["field"]`
//! set to the field name, so failures stay attributable after composition.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::foundation::error::FIELD_KEY;
use crate::foundation::{Validate, ValidationResult};

// ============================================================================
// FIELD VALIDATOR
// ============================================================================

/// Validates a single named field of a record.
///
/// The accessor borrows the field from the record; the inner validator never
/// sees the rest of the record. Errors are rebuilt with `context["field"]`
/// set to this field's name, overwriting any field tag the inner validator
/// may have written (the outermost naming wins).
///
/// # Type Parameters
///
/// * `T` - The record type
/// * `U` - The field type the accessor projects to
/// * `V` - The inner validator, with `Input = U`
/// * `F` - The accessor, `Fn(&T) -> &U`
///
/// # Examples
///
/// ```rust
/// use validly::prelude::*;
/// use validly::schema::Field;
///
/// struct User {
///     username: String,
/// }
///
/// let validator = Field::new("username", min_length(3), |u: &User| u.username.as_str());
///
/// let result = validator.validate(&User { username: "ab".into() });
/// assert_eq!(result.errors()[0].field_name(), Some("username"));
/// ```
pub struct Field<T, U: ?Sized, V, F> {
    name: Cow<'static, str>,
    validator: V,
    accessor: F,
    _marker: PhantomData<fn(&T) -> &U>,
}

impl<T, U, V, F> Field<T, U, V, F>
where
    U: ?Sized,
    V: Validate<Input = U>,
    F: Fn(&T) -> &U,
{
    /// Creates a field validator from a name, a validator for the field's
    /// type, and an accessor that borrows the field out of the record.
    pub fn new(name: impl Into<Cow<'static, str>>, validator: V, accessor: F) -> Self {
        Self {
            name: name.into(),
            validator,
            accessor,
            _marker: PhantomData,
        }
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a reference to the inner validator.
    pub fn validator(&self) -> &V {
        &self.validator
    }
}

impl<T, U, V, F> Validate for Field<T, U, V, F>
where
    U: ?Sized,
    V: Validate<Input = U>,
    F: Fn(&T) -> &U,
{
    type Input = T;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        self.validator
            .validate((self.accessor)(input))
            .map_errors(|e| e.with_context(FIELD_KEY, self.name.clone()))
    }
}

impl<T, U, V, F> Clone for Field<T, U, V, F>
where
    U: ?Sized,
    V: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            validator: self.validator.clone(),
            accessor: self.accessor.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, U, V, F> fmt::Debug for Field<T, U, V, F>
where
    U: ?Sized,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("validator", &self.validator)
            .field("accessor", &"<closure>")
            .finish()
    }
}

/// Extension trait for attaching a validator to a named record field.
///
/// Blanket-implemented for every validator; `v.for_field(name, accessor)`
/// reads better than `Field::new(name, v, accessor)` when the validator is
/// built by a combinator chain.
///
/// # Examples
///
/// ```rust
/// use validly::prelude::*;
///
/// struct User {
///     username: String,
/// }
///
/// let validator = min_length(3)
///     .and(alphanumeric())
///     .for_field("username", |u: &User| u.username.as_str());
///
/// let result = validator.validate(&User { username: "a!".into() });
/// assert!(result.errors().iter().all(|e| e.field_name() == Some("username")));
/// ```
pub trait FieldValidateExt: Validate + Sized {
    /// Scopes this validator to one named field of a record.
    fn for_field<T, F>(
        self,
        name: impl Into<Cow<'static, str>>,
        accessor: F,
    ) -> Field<T, Self::Input, Self, F>
    where
        F: Fn(&T) -> &Self::Input,
    {
        Field::new(name, self, accessor)
    }
}

impl<V: Validate> FieldValidateExt for V {}

/// Creates a [`Field`] validator.
///
/// # Examples
///
/// ```rust
/// use validly::prelude::*;
/// use validly::schema::field;
///
/// struct User {
///     age: i64,
/// }
///
/// let validator = field("age", min(18i64), |u: &User| &u.age);
/// assert!(validator.validate(&User { age: 30 }).is_valid());
/// ```
pub fn field<T, U, V, F>(
    name: impl Into<Cow<'static, str>>,
    validator: V,
    accessor: F,
) -> Field<T, U, V, F>
where
    U: ?Sized,
    V: Validate<Input = U>,
    F: Fn(&T) -> &U,
{
    Field::new(name, validator, accessor)
}

// ============================================================================
// TESTS
// ============================================================================
