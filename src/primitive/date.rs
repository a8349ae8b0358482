//! Date schema (feature `chrono`).
//!
//! Accepts ISO datetime strings (`2023-01-01T12:00:00`) or date-only
//! strings (`2023-01-01`, taken as midnight).

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::check::{override_last, run_all, Check, CheckRule};
use crate::error::{SchemaResult, ValidationError, ValueKind};
use crate::Schema;

/// Validation rule applied to a coerced datetime.
#[derive(Debug, Clone)]
pub(crate) enum DateCheck {
    /// Earliest accepted datetime: `.min(d)`
    Min { limit: NaiveDateTime },

    /// Latest accepted datetime: `.max(d)`
    Max { limit: NaiveDateTime },
}

impl CheckRule for DateCheck {
    type Target = NaiveDateTime;

    fn holds(&self, value: &NaiveDateTime) -> bool {
        match self {
            Self::Min { limit } => value >= limit,
            Self::Max { limit } => value <= limit,
        }
    }

    fn default_message(&self) -> String {
        match self {
            Self::Min { limit } => format!("Date must be greater than or equal to {limit}"),
            Self::Max { limit } => format!("Date must be less than or equal to {limit}"),
        }
    }
}

/// Schema accepting datetime input as [`NaiveDateTime`].
#[derive(Debug, Clone, Default)]
pub struct DateSchema {
    checks: Vec<Check<DateCheck>>,
}

impl DateSchema {
    /// Create a schema with no checks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the value to be at or after `limit`.
    pub fn min(mut self, limit: NaiveDateTime) -> Self {
        self.checks.push(Check::new(DateCheck::Min { limit }));
        self
    }

    /// Require the value to be at or before `limit`.
    pub fn max(mut self, limit: NaiveDateTime) -> Self {
        self.checks.push(Check::new(DateCheck::Max { limit }));
        self
    }

    /// Override the failure message of the most recently added check.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        override_last(&mut self.checks, message);
        self
    }

    fn coerce(input: &Value) -> Option<NaiveDateTime> {
        let Value::String(raw) = input else {
            return None;
        };
        if raw.contains('T') {
            raw.parse::<NaiveDateTime>().ok()
        } else {
            raw.parse::<NaiveDate>()
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        }
    }
}

impl Schema for DateSchema {
    type Output = NaiveDateTime;

    fn safe_parse(&self, input: &Value) -> SchemaResult<NaiveDateTime> {
        let Some(value) = Self::coerce(input) else {
            return Err(ValidationError::new(format!(
                "Expected date, received {}",
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
