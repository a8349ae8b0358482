//! Tuple schema: fixed arity, one schema per position.

use serde_json::Value;

use crate::error::{SchemaResult, ValidationError, ValueKind};
use crate::schema::{DynSchema, ErasedSchema};
use crate::Schema;

/// Schema accepting an array of exactly the configured arity, each
/// position validated against its own (possibly heterogeneous) schema.
///
/// A length mismatch fails immediately without attempting per-position
/// validation.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use zod_parse::{number, schemas, string, tuple, Schema};
///
/// let point = tuple(schemas![number(), number(), string()]);
/// let parsed = point.parse(&json!([1, 2, "origin"])).unwrap();
/// assert_eq!(parsed, vec![json!(1.0), json!(2.0), json!("origin")]);
/// ```
#[derive(Debug, Clone)]
pub struct TupleSchema {
    elements: Vec<DynSchema>,
}

impl TupleSchema {
    /// Create a schema from one schema per position.
    pub fn new(elements: Vec<DynSchema>) -> Self {
        Self { elements }
    }
}

impl Schema for TupleSchema {
    type Output = Vec<Value>;

    fn safe_parse(&self, input: &Value) -> SchemaResult<Vec<Value>> {
        let Value::Array(items) = input else {
            return Err(ValidationError::new(format!(
                "Expected tuple (array), received {}",
                ValueKind::of(input)
            )));
        };

        if items.len() != self.elements.len() {
            return Err(ValidationError::new(format!(
                "Tuple must have exactly {} element(s), received {}",
                self.elements.len(),
                items.len()
            )));
        }

        let mut parsed = Vec::with_capacity(items.len());
        let mut errors = Vec::new();
        for (index, (schema, item)) in self.elements.iter().zip(items).enumerate() {
            match schema.safe_parse_value(item) {
                Ok(value) => parsed.push(value),
                Err(error) => errors.extend(
                    error
                        .errors()
                        .iter()
                        .map(|message| format!("[{index}]: {message}")),
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
