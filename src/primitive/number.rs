//! Number schema with range and sign checks.

use serde_json::Value;

use crate::check::{override_last, run_all, Check, CheckRule};
use crate::error::{SchemaResult, ValidationError, ValueKind};
use crate::Schema;

/// Validation rule applied to a coerced number.
#[derive(Debug, Clone)]
pub(crate) enum NumberCheck {
    /// Minimum value: `.min(n)`
    Min { limit: f64 },

    /// Maximum value: `.max(n)`
    Max { limit: f64 },

    /// Whole number: `.int()`
    Int,

    /// Strictly greater than zero: `.positive()`
    Positive,

    /// Strictly less than zero: `.negative()`
    Negative,

    /// Greater than or equal to zero: `.non_negative()`
    NonNegative,

    /// Less than or equal to zero: `.non_positive()`
    NonPositive,

    /// Inclusive window: `.range(min, max)`
    Range { min: f64, max: f64 },
}

impl CheckRule for NumberCheck {
    type Target = f64;

    fn holds(&self, value: &f64) -> bool {
        let value = *value;
        match self {
            Self::Min { limit } => value >= *limit,
            Self::Max { limit } => value <= *limit,
            Self::Int => value.fract() == 0.0,
            Self::Positive => value > 0.0,
            Self::Negative => value < 0.0,
            Self::NonNegative => value >= 0.0,
            Self::NonPositive => value <= 0.0,
            Self::Range { min, max } => value >= *min && value <= *max,
        }
    }

    fn default_message(&self) -> String {
        match self {
            Self::Min { limit } => format!("Number must be greater than or equal to {limit}"),
            Self::Max { limit } => format!("Number must be less than or equal to {limit}"),
            Self::Int => "Number must be an integer".to_string(),
            Self::Positive => "Number must be positive".to_string(),
            Self::Negative => "Number must be negative".to_string(),
            Self::NonNegative => "Number must be non-negative".to_string(),
            Self::NonPositive => {
                "Number must be non-positive (less than or equal to zero)".to_string()
            }
            Self::Range { min, max } => format!("Number must be between {min} and {max}"),
        }
    }
}

/// Schema accepting numeric input as `f64`.
///
/// JSON numbers are accepted directly; a string is accepted only when it
/// parses unambiguously as a floating-point number.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use zod_parse::{number, Schema};
///
/// let age = number().min(0).max(120);
/// assert_eq!(age.parse(&json!(42)).unwrap(), 42.0);
/// assert_eq!(age.parse(&json!("42")).unwrap(), 42.0);
/// assert!(age.safe_parse(&json!(150)).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NumberSchema {
    checks: Vec<Check<NumberCheck>>,
}

impl NumberSchema {
    /// Create a schema with no checks.
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    fn with(mut self, rule: NumberCheck) -> Self {
        self.checks.push(Check::new(rule));
        self
    }

    /// Require the value to be at least `limit`.
    pub fn min(self, limit: impl Into<f64>) -> Self {
        self.with(NumberCheck::Min {
            limit: limit.into(),
        })
    }

    /// Require the value to be at most `limit`.
    pub fn max(self, limit: impl Into<f64>) -> Self {
        self.with(NumberCheck::Max {
            limit: limit.into(),
        })
    }

    /// Require a whole number.
    pub fn int(self) -> Self {
        self.with(NumberCheck::Int)
    }

    /// Require a value strictly greater than zero.
    pub fn positive(self) -> Self {
        self.with(NumberCheck::Positive)
    }

    /// Require a value strictly less than zero.
    pub fn negative(self) -> Self {
        self.with(NumberCheck::Negative)
    }

    /// Require a value greater than or equal to zero.
    pub fn non_negative(self) -> Self {
        self.with(NumberCheck::NonNegative)
    }

    /// Require a value less than or equal to zero.
    pub fn non_positive(self) -> Self {
        self.with(NumberCheck::NonPositive)
    }

    /// Require the value to fall inside `[min, max]`.
    pub fn range(self, min: impl Into<f64>, max: impl Into<f64>) -> Self {
        self.with(NumberCheck::Range {
            min: min.into(),
            max: max.into(),
        })
    }

    /// Override the failure message of the most recently added check.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        override_last(&mut self.checks, message);
        self
    }

    fn coerce(input: &Value) -> Option<f64> {
        match input {
            Value::Number(number) => number.as_f64(),
            Value::String(raw) => raw.parse::<f64>().ok(),
            _ => None,
        }
    }
}

impl Schema for NumberSchema {
    type Output = f64;

    fn safe_parse(&self, input: &Value) -> SchemaResult<f64> {
        let Some(value) = Self::coerce(input) else {
            return Err(ValidationError::new(format!(
                "Expected number, received {}",
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
