//! Record schema: arbitrary string keys, one shared value schema.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{SchemaResult, ValidationError, ValueKind};
use crate::Schema;

/// Schema accepting object input whose every value validates against one
/// shared schema.
///
/// Failures are tagged with their key and all of them are collected. An
/// empty object is trivially valid.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use zod_parse::{number, record, Schema};
///
/// let scores = record(number().min(0));
/// let parsed = scores.parse(&json!({"alice": 10, "bob": 7})).unwrap();
/// assert_eq!(parsed["alice"], 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct RecordSchema<S> {
    value: S,
}

impl<S> RecordSchema<S> {
    /// Create a schema validating every entry value against `value`.
    pub fn new(value: S) -> Self {
        Self { value }
    }
}

impl<S: Schema> Schema for RecordSchema<S> {
    type Output = BTreeMap<String, S::Output>;

    fn safe_parse(&self, input: &Value) -> SchemaResult<Self::Output> {
        let Value::Object(entries) = input else {
            return Err(ValidationError::new(format!(
                "Expected record (object), received {}",
                ValueKind::of(input)
            )));
        };

        let mut parsed = BTreeMap::new();
        let mut errors = Vec::new();
        for (key, value) in entries {
            match self.value.safe_parse(value) {
                Ok(validated) => {
                    parsed.insert(key.clone(), validated);
                }
                Err(error) => errors.extend(
                    error
                        .errors()
                        .iter()
                        .map(|message| format!("{key}: {message}")),
                ),
            }
        }

        if errors.is_empty() {
            Ok(parsed)
        } else {
            Err(ValidationError::from_errors(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{number, string};
    use serde_json::json;

    #[test]
    fn test_accepts_valid_entries() {
        let schema = RecordSchema::new(number());
        let parsed = schema.safe_parse(&json!({"a": 1, "b": "2.5"})).unwrap();
        assert_eq!(parsed["a"], 1.0);
        assert_eq!(parsed["b"], 2.5);
    }

    #[test]
    fn test_empty_object_is_valid() {
        let schema = RecordSchema::new(string());
        assert!(schema.safe_parse(&json!({})).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_non_objects() {
        let schema = RecordSchema::new(string());
        let error = schema.safe_parse(&json!([1, 2])).unwrap_err();
        assert_eq!(error.errors(), ["Expected record (object), received array"]);
    }

    #[test]
    fn test_collects_every_entry_failure_with_key_tags() {
        let schema = RecordSchema::new(number());
        let error = schema
            .safe_parse(&json!({"a": "x", "b": 2, "c": true}))
            .unwrap_err();
        let mut messages = error.errors().to_vec();
        messages.sort();
        assert_eq!(
            messages,
            [
                "a: Expected number, received string",
                "c: Expected number, received boolean",
            ]
        );
    }
}
