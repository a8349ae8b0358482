//! Boolean schema.

use serde_json::Value;

use crate::check::{override_last, run_all, Check, CheckRule};
use crate::error::{SchemaResult, ValidationError, ValueKind};
use crate::Schema;

/// Validation rule applied to a coerced boolean.
#[derive(Debug, Clone)]
pub(crate) enum BooleanCheck {
    /// Exact value: `.is_equal(b)`
    IsEqual { expected: bool },
}

impl CheckRule for BooleanCheck {
    type Target = bool;

    fn holds(&self, value: &bool) -> bool {
        match self {
            Self::IsEqual { expected } => value == expected,
        }
    }

    fn default_message(&self) -> String {
        match self {
            Self::IsEqual { expected } => format!("Boolean must be equal to {expected}"),
        }
    }
}

/// Schema accepting boolean input, or the case-insensitive strings
/// `"true"` / `"false"`.
#[derive(Debug, Clone, Default)]
pub struct BooleanSchema {
    checks: Vec<Check<BooleanCheck>>,
}

impl BooleanSchema {
    /// Create a schema with no checks.
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    /// Require the value to equal `expected`.
    pub fn is_equal(mut self, expected: bool) -> Self {
        self.checks.push(Check::new(BooleanCheck::IsEqual { expected }));
        self
    }

    /// Override the failure message of the most recently added check.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        override_last(&mut self.checks, message);
        self
    }

    fn coerce(input: &Value) -> Option<bool> {
        match input {
            Value::Bool(value) => Some(*value),
            Value::String(raw) => match raw.to_ascii_lowercase().as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

impl Schema for BooleanSchema {
    type Output = bool;

    fn safe_parse(&self, input: &Value) -> SchemaResult<bool> {
        let Some(value) = Self::coerce(input) else {
            return Err(ValidationError::new(format!(
                "Expected boolean, received {}",
                ValueKind::of(input)
            )));
        };

        let errors = run_all(&self.checks, &value);
        if errors.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError::from_errors(errors))
        }
    }
}
