//! Union schema: ordered first-match fallback over alternatives.

use serde_json::Value;

use crate::error::{SchemaResult, ValidationError};
use crate::schema::{DynSchema, ErasedSchema};
use crate::Schema;

/// Schema accepting input matching any of an ordered list of
/// alternatives.
///
/// Alternatives are tried in declaration order and the first success
/// wins — ordered fallback, not best match, so an input two alternatives
/// would accept resolves to whichever is listed first. When every
/// alternative fails, the single failure message embeds each
/// alternative's own errors labeled by position.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use zod_parse::{number, schemas, string, union, Schema};
///
/// let id = union(schemas![string(), number()]);
/// assert_eq!(id.parse(&json!("abc")).unwrap(), json!("abc"));
/// assert_eq!(id.parse(&json!(7)).unwrap(), json!(7.0));
/// assert!(id.safe_parse(&json!(true)).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct UnionSchema {
    options: Vec<DynSchema>,
}

impl UnionSchema {
    /// Create a schema from ordered alternatives.
    pub fn new(options: Vec<DynSchema>) -> Self {
        Self { options }
    }
}

impl Schema for UnionSchema {
    type Output = Value;

    fn safe_parse(&self, input: &Value) -> SchemaResult<Value> {
        let mut rendered = Vec::with_capacity(self.options.len());
        for (index, option) in self.options.iter().enumerate() {
            match option.safe_parse_value(input) {
                Ok(value) => return Ok(value),
                Err(error) => rendered.push(format!("Option {index}: {}", error.joined())),
            }
        }

        Err(ValidationError::new(format!(
            "Union validation failed: {}",
            rendered.join("; ")
        )))
    }
}
