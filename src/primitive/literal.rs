//! Literal schema: strict equality against one configured constant.

use serde_json::Value;

use crate::error::{display_value, SchemaResult, ValidationError};
use crate::Schema;

/// Schema accepting exactly one value.
///
/// The constant is compared through its JSON form, so `literal(5)`
/// accepts the JSON number `5` but not `5.5` or `"5"`.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use zod_parse::{literal, Schema};
///
/// let role = literal("admin");
/// assert_eq!(role.parse(&json!("admin")).unwrap(), "admin");
/// assert!(role.safe_parse(&json!("user")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct LiteralSchema<T> {
    value: T,
    json: Value,
}

impl<T> LiteralSchema<T>
where
    T: Clone + Into<Value>,
{
    /// Create a schema accepting only `value`.
    pub fn new(value: T) -> Self {
        let json = value.clone().into();
        Self { value, json }
    }
}

impl<T: Clone> Schema for LiteralSchema<T> {
    type Output = T;

    fn safe_parse(&self, input: &Value) -> SchemaResult<T> {
        if *input == self.json {
            Ok(self.value.clone())
        } else {
            Err(ValidationError::new(format!(
                "Expected literal {}, received {}",
                display_value(&self.json),
                display_value(input)
            )))
        }
    }
}
