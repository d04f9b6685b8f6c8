//! The validation error value
//!
//! Exactly one kind of error flows through this crate: [`ValidError`], a
//! message plus a string-to-string context map. Validators create errors,
//! combinators and schemas rebuild them with extra context (field name,
//! element index); nothing ever mutates an error in place.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static messages and context keys.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Context key used for field-qualified errors. See [`ValidError::field`].
pub(crate) const FIELD_KEY: &str = "field";

/// Context key used for element-index tagging by `Each`.
pub(crate) const INDEX_KEY: &str = "index";

/// The context map attached to a [`ValidError`].
///
/// Keys are unique; inserting an existing key overwrites its value
/// (last write wins).
pub type Context = BTreeMap<Cow<'static, str>, Cow<'static, str>>;

// ============================================================================
// VALID ERROR
// ============================================================================

/// An immutable validation error: a message plus key-value context.
///
/// Context entries carry machine-readable metadata about the failure, such
/// as the field name (`"field"`), the element index (`"index"`), or the
/// constraint bounds (`"min"`, `"max"`, `"actual"`).
///
/// Equality and hashing consider both the message and the full context map.
///
/// # Examples
///
/// ```rust
/// use validly::foundation::ValidError;
///
/// // Static strings — zero allocation:
/// let error = ValidError::new("must not be empty");
///
/// // With context:
/// let error = ValidError::new("value out of range")
///     .with_context("min", "1")
///     .with_context("max", "10");
/// assert_eq!(error.context("min"), Some("1"));
///
/// // Field-scoped shorthand:
/// let error = ValidError::field("age", "must be at least 18");
/// assert_eq!(error.context("field"), Some("age"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidError {
    /// Human-readable description of the failure.
    pub message: Cow<'static, str>,

    /// Context metadata. Keys are unique; last write wins.
    pub context: Context,
}

impl ValidError {
    /// Creates an error with the given message and empty context.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            context: Context::new(),
        }
    }

    /// Creates a field-scoped error, setting `context["field"]` to `name`.
    pub fn field(
        name: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(message).with_context(FIELD_KEY, name)
    }

    /// Returns a copy of this error with a context entry added.
    ///
    /// An existing entry under the same key is overwritten.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_context(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Looks up a context value by key.
    #[must_use]
    pub fn context(&self, key: &str) -> Option<&str> {
        self.context.get(key).map(Cow::as_ref)
    }

    /// Returns the field name this error is scoped to, if any.
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        self.context(FIELD_KEY)
    }

    /// Converts the error to a JSON value (for serialization or logging
    /// by host applications).
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let context: serde_json::Map<String, serde_json::Value> = self
            .context
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "message": self.message,
            "context": context,
        })
    }
}

impl fmt::Display for ValidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = self.field_name() {
            write!(f, "[{}] {}", field, self.message)?;
        } else {
            write!(f, "{}", self.message)?;
        }

        let extra: Vec<_> = self
            .context
            .iter()
            .filter(|(k, _)| k.as_ref() != FIELD_KEY)
            .collect();
        if !extra.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in extra.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidError {}

impl From<&'static str> for ValidError {
    fn from(message: &'static str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ValidError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidError::new("something failed");
        assert_eq!(error.message, "something failed");
        assert!(error.context.is_empty());
    }

    #[test]
    fn test_field_constructor() {
        let error = ValidError::field("email", "invalid address");
        assert_eq!(error.field_name(), Some("email"));
        assert_eq!(error.message, "invalid address");
    }

    #[test]
    fn test_context_last_write_wins() {
        let error = ValidError::new("oops")
            .with_context("field", "inner")
            .with_context("field", "outer");
        assert_eq!(error.context("field"), Some("outer"));
        assert_eq!(error.context.len(), 1);
    }

    #[test]
    fn test_non_field_context_preserved() {
        let error = ValidError::new("oops")
            .with_context("index", "3")
            .with_context("field", "tags");
        assert_eq!(error.context("index"), Some("3"));
        assert_eq!(error.context("field"), Some("tags"));
    }

    #[test]
    fn test_equality_by_message_and_context() {
        let a = ValidError::new("x").with_context("k", "v");
        let b = ValidError::new("x").with_context("k", "v");
        let c = ValidError::new("x").with_context("k", "w");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display_with_field() {
        let error = ValidError::field("age", "too young").with_context("min", "18");
        let display = format!("{error}");
        assert!(display.contains("[age]"));
        assert!(display.contains("too young"));
        assert!(display.contains("min=18"));
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidError::new("static message");
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn test_from_string_types() {
        let a: ValidError = "static".into();
        let b: ValidError = format!("dynamic {}", 42).into();
        assert_eq!(a.message, "static");
        assert_eq!(b.message, "dynamic 42");
    }

    #[test]
    fn test_to_json_value() {
        let error = ValidError::field("age", "too young").with_context("min", "18");
        let json = error.to_json_value();
        assert_eq!(json["message"], "too young");
        assert_eq!(json["context"]["field"], "age");
        assert_eq!(json["context"]["min"], "18");
    }
}
