//! Core schema traits.
//!
//! This module defines [`Schema`], the capability every validator
//! implements, and [`ErasedSchema`], the type-erased form used wherever a
//! heterogeneous, ordered list of schemas is needed (tuples, unions,
//! object shapes).
//!
//! ## Overview
//!
//! A schema exposes exactly two entry points:
//!
//! - [`Schema::safe_parse`] — never faults; returns `Ok(value)` or
//!   `Err(ValidationError)`.
//! - [`Schema::parse`] — derived from `safe_parse`; unwraps a failure
//!   into a [`ParseError`] for callers who prefer fault-based flow.
//!
//! Schema authors implement `safe_parse` once; `parse` is provided and
//! never duplicated.
//!
//! ## Chaining
//!
//! The cross-cutting modifiers ([`Schema::nullable`], [`Schema::default`],
//! [`Schema::transform`], [`Schema::refine`] and friends) are provided
//! methods that consume the receiver and return a new schema value, so a
//! chain never mutates a schema another binding still holds. Wrapper
//! order is semantic: `schema.refine(..).transform(..)` refines the
//! pre-transform value, while `schema.transform(..).refine(..)` refines
//! the post-transform value.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::error::{ParseError, SchemaResult, ValidationError};
use crate::wrapper::{DefaultSchema, NullableSchema, RefinedSchema, TransformSchema};

/// A composable validator for untyped input values.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use zod_parse::{string, Schema};
///
/// let username = string().min(3).max(16);
/// assert_eq!(username.parse(&json!("piash")).unwrap(), "piash");
/// assert!(username.safe_parse(&json!("ab")).is_err());
/// ```
pub trait Schema {
    /// The validated (and possibly transformed) value type.
    type Output;

    /// Validate `input`, returning the typed value or every collected
    /// error message. Never faults.
    fn safe_parse(&self, input: &Value) -> SchemaResult<Self::Output>;

    /// Validate `input`, unwrapping a failure into a [`ParseError`]
    /// whose message concatenates all collected errors.
    fn parse(&self, input: &Value) -> Result<Self::Output, ParseError> {
        self.safe_parse(input).map_err(ParseError::from)
    }

    /// Accept the absence sentinel (`null`) directly, bypassing this
    /// schema; any other input delegates unchanged.
    fn nullable(self) -> NullableSchema<Self>
    where
        Self: Sized,
    {
        NullableSchema::new(self)
    }

    /// Alias for [`Schema::nullable`]: mark a value as accepting
    /// absence.
    fn optional(self) -> NullableSchema<Self>
    where
        Self: Sized,
    {
        self.nullable()
    }

    /// Replace the absence sentinel (`null`) with a fixed fallback
    /// value; any other input delegates fully to this schema.
    fn default(self, value: Self::Output) -> DefaultSchema<Self>
    where
        Self: Sized,
        Self::Output: Clone + Send + Sync + 'static,
    {
        DefaultSchema::new(self, move || value.clone())
    }

    /// Replace the absence sentinel with a lazily computed fallback,
    /// re-evaluated on every call.
    fn default_with<F>(self, fallback: F) -> DefaultSchema<Self>
    where
        Self: Sized,
        F: Fn() -> Self::Output + Send + Sync + 'static,
    {
        DefaultSchema::new(self, fallback)
    }

    /// Apply a pure mapping to the validated value.
    fn transform<O, F>(self, apply: F) -> TransformSchema<Self, O>
    where
        Self: Sized,
        F: Fn(Self::Output) -> O + Send + Sync + 'static,
    {
        TransformSchema::new(self, move |value| Ok(apply(value)))
    }

    /// Apply a fallible mapping to the validated value; an `Err` is
    /// reported as `"Transformation failed: <cause>"` rather than
    /// propagating.
    fn try_transform<O, F>(self, apply: F) -> TransformSchema<Self, O>
    where
        Self: Sized,
        F: Fn(Self::Output) -> Result<O, String> + Send + Sync + 'static,
    {
        TransformSchema::new(self, apply)
    }

    /// Reject otherwise-valid values failing a custom predicate.
    ///
    /// Chaining `refine` on the returned schema appends to the same
    /// wrapper, so all of a chain's refinements are evaluated together
    /// and every failing predicate contributes its message.
    fn refine<P>(self, predicate: P, message: impl Into<String>) -> RefinedSchema<Self>
    where
        Self: Sized,
        P: Fn(&Self::Output) -> bool + Send + Sync + 'static,
    {
        RefinedSchema::new(self).refine(predicate, message)
    }

    /// Like [`Schema::refine`], with a message computed from the
    /// rejected value.
    fn refine_with<P, M>(self, predicate: P, message: M) -> RefinedSchema<Self>
    where
        Self: Sized,
        P: Fn(&Self::Output) -> bool + Send + Sync + 'static,
        M: Fn(&Self::Output) -> String + Send + Sync + 'static,
    {
        RefinedSchema::new(self).refine_with(predicate, message)
    }

    /// Erase this schema into a shareable [`DynSchema`] for use in
    /// heterogeneous lists (tuples, unions, object shapes).
    fn erase(self) -> DynSchema
    where
        Self: Sized + fmt::Debug + Send + Sync + 'static,
        Self::Output: Serialize,
    {
        Arc::new(self)
    }
}

/// Object-safe schema capability: validate raw input into a raw value.
///
/// Implemented for every [`Schema`] whose output serializes, so tuples,
/// unions and object shapes can hold schemas of unrelated output types
/// in one ordered sequence.
pub trait ErasedSchema: fmt::Debug + Send + Sync {
    /// Validate `input` and return the parsed value in serialized form.
    fn safe_parse_value(&self, input: &Value) -> SchemaResult<Value>;
}

impl<S> ErasedSchema for S
where
    S: Schema + fmt::Debug + Send + Sync,
    S::Output: Serialize,
{
    fn safe_parse_value(&self, input: &Value) -> SchemaResult<Value> {
        let parsed = self.safe_parse(input)?;
        serde_json::to_value(parsed).map_err(|source| {
            ValidationError::new(format!("Failed to serialize parsed value: {source}"))
        })
    }
}

/// A shareable, type-erased schema.
pub type DynSchema = Arc<dyn ErasedSchema>;

impl Schema for DynSchema {
    type Output = Value;

    fn safe_parse(&self, input: &Value) -> SchemaResult<Value> {
        self.as_ref().safe_parse_value(input)
    }
}

/// Build a `Vec<DynSchema>` from a comma-separated list of schemas.
///
/// The ordered-list counterpart of passing schemas one by one to
/// [`tuple`](crate::tuple) or [`union`](crate::union).
///
/// # Example
///
/// ```rust
/// use zod_parse::{number, schemas, string, union};
///
/// let id = union(schemas![string().min(1), number().int()]);
/// ```
#[macro_export]
macro_rules! schemas {
    ($($schema:expr),* $(,)?) => {
        vec![$($crate::Schema::erase($schema)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{number, string};
    use serde_json::json;

    #[test]
    fn test_parse_is_derived_from_safe_parse() {
        let schema = string().min(3);
        assert_eq!(schema.parse(&json!("abcd")).unwrap(), "abcd");
        let fault = schema.parse(&json!("ab")).unwrap_err();
        assert_eq!(
            fault.to_string(),
            "Validation failed: String must be at least 3 characters long"
        );
    }

    #[test]
    fn test_erased_schema_serializes_output() {
        let erased = number().erase();
        assert_eq!(erased.safe_parse_value(&json!(2.5)).unwrap(), json!(2.5));
        assert!(erased.safe_parse_value(&json!(true)).is_err());
    }

    #[test]
    fn test_dyn_schema_implements_schema() {
        let erased: DynSchema = string().erase();
        assert_eq!(erased.safe_parse(&json!("x")).unwrap(), json!("x"));
    }

    #[test]
    fn test_schemas_macro_preserves_order() {
        let list = schemas![string(), number()];
        assert_eq!(list.len(), 2);
        assert!(list[0].safe_parse_value(&json!("a")).is_ok());
        assert!(list[1].safe_parse_value(&json!("a")).is_err());
    }
}
