//! Error and result types shared by every schema.
//!
//! Validation has exactly two outcomes: a typed value or a
//! [`ValidationError`] carrying one or more human-readable messages.
//! [`Schema::safe_parse`](crate::Schema::safe_parse) reports failures as
//! [`SchemaResult`]; [`Schema::parse`](crate::Schema::parse) unwraps a
//! failure into a [`ParseError`].

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Result type alias for `safe_parse` operations.
pub type SchemaResult<T> = Result<T, ValidationError>;

/// An ordered, non-empty collection of validation error messages.
///
/// Errors from earlier-processed elements and fields come first; merging
/// two errors preserves that order.
///
/// # Example
///
/// ```rust
/// use zod_parse::ValidationError;
///
/// let error = ValidationError::new("name: String must be at least 2 characters long");
/// assert_eq!(error.errors().len(), 1);
/// assert_eq!(error.to_string(), "name: String must be at least 2 characters long");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .errors.join(", "))]
pub struct ValidationError {
    errors: Vec<String>,
}

impl ValidationError {
    /// Create an error carrying a single message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
        }
    }

    /// Create an error from a list of messages.
    ///
    /// The list must be non-empty: an empty list never represents a
    /// failure.
    pub fn from_errors(errors: Vec<String>) -> Self {
        debug_assert!(!errors.is_empty(), "a failure carries at least one message");
        Self { errors }
    }

    /// The collected messages, in processing order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// All messages joined with `", "`.
    pub fn joined(&self) -> String {
        self.errors.join(", ")
    }

    /// Append a single message.
    pub fn push(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Concatenate another error's messages after this one's.
    pub fn merge(mut self, other: ValidationError) -> Self {
        self.errors.extend(other.errors);
        self
    }
}

/// The fault raised by [`Schema::parse`](crate::Schema::parse) when
/// validation fails.
///
/// Carries the full [`ValidationError`]; its display concatenates every
/// collected message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed: {error}")]
pub struct ParseError {
    error: ValidationError,
}

impl ParseError {
    /// The underlying validation error.
    pub fn error(&self) -> &ValidationError {
        &self.error
    }

    /// The collected messages, in processing order.
    pub fn errors(&self) -> &[String] {
        self.error.errors()
    }
}

impl From<ValidationError> for ParseError {
    fn from(error: ValidationError) -> Self {
        Self { error }
    }
}

/// The runtime kind of an untyped input value.
///
/// Every coercion failure names the received kind; the set is closed and
/// exhaustive over the JSON data model. `Null` doubles as the absence
/// sentinel — a missing object key validates as `Null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Classify a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// The kind name used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a value inside an error message: strings print unquoted, every
/// other kind prints as JSON.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
