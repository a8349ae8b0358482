//! Null and undefined schemas.
//!
//! The runtime's null/undefined concepts collapse to the single absence
//! sentinel `Value::Null`; the two schemas differ only in their error
//! message.

use serde_json::Value;

use crate::error::{SchemaResult, ValidationError, ValueKind};
use crate::Schema;

/// Schema accepting only the absence sentinel.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSchema;

impl NullSchema {
    pub fn new() -> Self {
        Self
    }
}

impl Schema for NullSchema {
    type Output = ();

    fn safe_parse(&self, input: &Value) -> SchemaResult<()> {
        if input.is_null() {
            Ok(())
        } else {
            Err(ValidationError::new(format!(
                "Expected null, received {}",
                ValueKind::of(input)
            )))
        }
    }
}

/// Schema accepting only the absence sentinel, under its undefined name.
#[derive(Debug, Clone, Copy, Default)]
pub struct UndefinedSchema;

impl UndefinedSchema {
    pub fn new() -> Self {
        Self
    }
}

impl Schema for UndefinedSchema {
    type Output = ();

    fn safe_parse(&self, input: &Value) -> SchemaResult<()> {
        if input.is_null() {
            Ok(())
        } else {
            Err(ValidationError::new(format!(
                "Expected undefined, received {}",
                ValueKind::of(input)
            )))
        }
    }
}
