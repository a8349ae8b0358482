//! Array schema: one element schema applied to every position.

use serde_json::Value;

use crate::check::{override_last, Check, CheckRule};
use crate::error::{SchemaResult, ValidationError, ValueKind};
use crate::Schema;

/// Validation rule applied to a fully-validated element count.
#[derive(Debug, Clone)]
pub(crate) enum ArrayCheck {
    /// Minimum element count: `.min(n)`
    Min { count: usize },

    /// Maximum element count: `.max(n)`
    Max { count: usize },

    /// Exact element count: `.length(n)`
    Length { exact: usize },
}

impl CheckRule for ArrayCheck {
    type Target = usize;

    fn holds(&self, len: &usize) -> bool {
        match self {
            Self::Min { count } => len >= count,
            Self::Max { count } => len <= count,
            Self::Length { exact } => len == exact,
        }
    }

    fn default_message(&self) -> String {
        match self {
            Self::Min { count } => format!("Array must contain at least {count} element(s)"),
            Self::Max { count } => format!("Array must contain at most {count} element(s)"),
            Self::Length { exact } => format!("Array must contain exactly {exact} element(s)"),
        }
    }
}

/// Schema accepting array input, validating every element against one
/// element schema.
///
/// Element failures are tagged with their zero-based position and all of
/// them are collected; array-level count checks run only once every
/// element has validated.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use zod_parse::{array, string, Schema};
///
/// let tags = array(string().min(2)).min(1).max(5);
/// assert_eq!(tags.parse(&json!(["rust", "zod"])).unwrap(), ["rust", "zod"]);
///
/// let error = tags.safe_parse(&json!(["rust", "a"])).unwrap_err();
/// assert_eq!(error.errors(), ["[1]: String must be at least 2 characters long"]);
/// ```
#[derive(Debug, Clone)]
pub struct ArraySchema<S> {
    element: S,
    checks: Vec<Check<ArrayCheck>>,
}

impl<S> ArraySchema<S> {
    /// Create a schema validating every element against `element`.
    pub fn new(element: S) -> Self {
        Self {
            element,
            checks: Vec::new(),
        }
    }

    /// Require at least `count` elements.
    pub fn min(mut self, count: usize) -> Self {
        self.checks.push(Check::new(ArrayCheck::Min { count }));
        self
    }

    /// Require at most `count` elements.
    pub fn max(mut self, count: usize) -> Self {
        self.checks.push(Check::new(ArrayCheck::Max { count }));
        self
    }

    /// Require exactly `exact` elements.
    pub fn length(mut self, exact: usize) -> Self {
        self.checks.push(Check::new(ArrayCheck::Length { exact }));
        self
    }

    /// Override the failure message of the most recently added check.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        override_last(&mut self.checks, message);
        self
    }
}

impl<S: Schema> Schema for ArraySchema<S> {
    type Output = Vec<S::Output>;

    fn safe_parse(&self, input: &Value) -> SchemaResult<Vec<S::Output>> {
        let Value::Array(items) = input else {
            return Err(ValidationError::new(format!(
                "Expected array, received {}",
                ValueKind::of(input)
            )));
        };

        let mut parsed = Vec::with_capacity(items.len());
        let mut errors = Vec::new();
        for (index, item) in items.iter().enumerate() {
            match self.element.safe_parse(item) {
                Ok(value) => parsed.push(value),
                Err(error) => errors.extend(
                    error
                        .errors()
                        .iter()
                        .map(|message| format!("[{index}]: {message}")),
                ),
            }
        }
        if !errors.is_empty() {
            return Err(ValidationError::from_errors(errors));
        }

        // Count checks apply only to a fully-validated element list; the
        // first failing check reports alone.
        for check in &self.checks {
            if let Some(message) = check.run(&parsed.len()) {
                return Err(ValidationError::new(message));
            }
        }

        Ok(parsed)
    }
}
