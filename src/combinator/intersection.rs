//! Intersection schema: input must satisfy both sides independently.

use serde_json::Value;

use crate::error::{SchemaResult, ValidationError};
use crate::Schema;

/// Schema requiring the same raw input to satisfy two schemas.
///
/// Both sides validate the raw input, not each other's output. A left
/// failure short-circuits (the right side is not attempted), and
/// mirrored for the right. Success pairs both typed outputs — records
/// are not unified or merged.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use zod_parse::{intersection, number, string, Schema};
///
/// // A numeric string, kept both as text and as its numeric value.
/// let both = intersection(string().min(1), number());
/// let (text, value) = both.parse(&json!("42")).unwrap();
/// assert_eq!(text, "42");
/// assert_eq!(value, 42.0);
/// ```
#[derive(Debug, Clone)]
pub struct IntersectionSchema<L, R> {
    left: L,
    right: R,
}

impl<L, R> IntersectionSchema<L, R> {
    /// Create a schema from a left and right side.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L: Schema, R: Schema> Schema for IntersectionSchema<L, R> {
    type Output = (L::Output, R::Output);

    fn safe_parse(&self, input: &Value) -> SchemaResult<Self::Output> {
        let left = self.left.safe_parse(input).map_err(|error| {
            ValidationError::new(format!(
                "Left schema validation failed: {}",
                error.joined()
            ))
        })?;

        let right = self.right.safe_parse(input).map_err(|error| {
            ValidationError::new(format!(
                "Right schema validation failed: {}",
                error.joined()
            ))
        })?;

        Ok((left, right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{number, string};
    use serde_json::json;

    #[test]
    fn test_success_pairs_both_outputs() {
        let schema = IntersectionSchema::new(string(), number());
        assert_eq!(
            schema.safe_parse(&json!("3.5")).unwrap(),
            ("3.5".to_string(), 3.5)
        );
    }

    #[test]
    fn test_left_failure_short_circuits() {
        let schema = IntersectionSchema::new(string(), number());
        let error = schema.safe_parse(&json!(10)).unwrap_err();
        assert_eq!(
            error.errors(),
            ["Left schema validation failed: Expected string, received number"]
        );
    }

    #[test]
    fn test_right_failure_reported_when_left_passes() {
        let schema = IntersectionSchema::new(string(), number());
        let error = schema.safe_parse(&json!("abc")).unwrap_err();
        assert_eq!(
            error.errors(),
            ["Right schema validation failed: Expected number, received string"]
        );
    }

    #[test]
    fn test_both_sides_see_the_raw_input() {
        let schema = IntersectionSchema::new(number().min(0), number().max(10));
        assert_eq!(schema.safe_parse(&json!(5)).unwrap(), (5.0, 5.0));
        assert!(schema.safe_parse(&json!(11)).is_err());
    }
}
