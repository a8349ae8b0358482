//! Enum schema: membership in a fixed set of allowed values.

use serde_json::Value;

use crate::error::{display_value, SchemaResult, ValidationError};
use crate::Schema;

/// Schema accepting any member of a fixed set of allowed values.
///
/// Duplicates are dropped at construction, keeping the first occurrence;
/// the failure message enumerates the allowed values in their original
/// order.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use zod_parse::{enumeration, Schema};
///
/// let color = enumeration(["red", "green", "blue"]);
/// assert_eq!(color.parse(&json!("green")).unwrap(), "green");
/// assert!(color.safe_parse(&json!("purple")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EnumSchema<T> {
    values: Vec<T>,
    jsons: Vec<Value>,
}

impl<T> EnumSchema<T>
where
    T: Clone + Into<Value>,
{
    /// Create a schema from an ordered collection of allowed values.
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        let mut kept = Vec::new();
        let mut jsons: Vec<Value> = Vec::new();
        for value in values {
            let json: Value = value.clone().into();
            if !jsons.contains(&json) {
                kept.push(value);
                jsons.push(json);
            }
        }
        Self {
            values: kept,
            jsons,
        }
    }
}

impl<T> EnumSchema<T> {
    fn allowed(&self) -> String {
        self.jsons
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<T: Clone> Schema for EnumSchema<T> {
    type Output = T;

    fn safe_parse(&self, input: &Value) -> SchemaResult<T> {
        match self.jsons.iter().position(|candidate| candidate == input) {
            Some(index) => Ok(self.values[index].clone()),
            None => Err(ValidationError::new(format!(
                "Expected enum value, received {}. Valid values: {}",
                display_value(input),
                self.allowed()
            ))),
        }
    }
}
