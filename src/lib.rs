//! # zod-parse
//!
//! Runtime [Zod](https://zod.dev/)-style schema validation for untyped
//! JSON values.
//!
//! This crate lets you declaratively describe the expected shape of
//! loosely-typed input (primitives, collections, records, objects,
//! unions, tuples) and validate arbitrary [`serde_json::Value`] data
//! against that description, producing either a typed value or a
//! structured list of error messages.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use zod_parse::{number, object, string, Schema};
//!
//! #[derive(Debug)]
//! struct User {
//!     name: String,
//!     age: f64,
//! }
//!
//! let schema = object()
//!     .field("name", string().min(2))
//!     .field("age", number().min(0).max(120))
//!     .build(|fields| {
//!         Ok::<_, String>(User {
//!             name: fields.str("name")?.to_string(),
//!             age: fields.f64("age")?,
//!         })
//!     });
//!
//! let user = schema.parse(&json!({"name": "Piash", "age": 30})).unwrap();
//! assert_eq!(user.name, "Piash");
//!
//! let error = schema.safe_parse(&json!({"name": "J", "age": 200})).unwrap_err();
//! assert_eq!(error.errors().len(), 2);
//! ```
//!
//! ## Entry Points
//!
//! Every schema exposes exactly two operations:
//!
//! | Operation | Behavior |
//! |-----------|----------|
//! | [`Schema::safe_parse`] | Never faults; returns `Ok(value)` or `Err(ValidationError)` |
//! | [`Schema::parse`] | Unwraps a failure into a [`ParseError`] fault |
//!
//! ## Factories
//!
//! | Factory | Schema | Accepts |
//! |---------|--------|---------|
//! | [`string()`] | [`StringSchema`] | strings (no coercion) |
//! | [`number()`] | [`NumberSchema`] | numbers, numeric strings |
//! | [`boolean()`] | [`BooleanSchema`] | booleans, `"true"`/`"false"` |
//! | [`null()`] / [`undefined()`] | [`NullSchema`] / [`UndefinedSchema`] | the absence sentinel |
//! | [`literal(v)`](literal) | [`LiteralSchema`] | exactly `v` |
//! | [`enumeration(vs)`](enumeration) | [`EnumSchema`] | any member of `vs` |
//! | [`array(s)`](array) | [`ArraySchema`] | arrays of `s` |
//! | [`tuple(ss)`](tuple) | [`TupleSchema`] | fixed-arity arrays |
//! | [`record(s)`](record) | [`RecordSchema`] | objects with values of `s` |
//! | [`object()`] | [`ObjectBuilder`] | objects against a shape |
//! | [`union(ss)`](union) | [`UnionSchema`] | first matching alternative |
//! | [`intersection(l, r)`](intersection) | [`IntersectionSchema`] | both sides at once |
//!
//! ## Chaining
//!
//! Per-kind checks chain fluently and accumulate in order:
//!
//! ```rust
//! use zod_parse::string;
//!
//! let username = string().min(3).max(16).regex(
//!     regex::Regex::new("^[a-z0-9_]+$").expect("pattern compiles"),
//! );
//! ```
//!
//! Chaining is persistent: every call returns a new schema value, so a
//! schema derived from a shared base never affects the base. All failing
//! checks report together — a value can carry several violations at
//! once.
//!
//! Cross-cutting modifiers apply to any schema: [`Schema::nullable`]
//! (and its alias [`Schema::optional`]), [`Schema::default`],
//! [`Schema::transform`], [`Schema::refine`]. They trigger only on the
//! absence sentinel or on validated values; a present-but-invalid value
//! is never defaulted away.
//!
//! ## Error Reporting
//!
//! Composite schemas tag child errors with their path — `[2]:` for
//! positions, `name:` for fields and keys — and collect every child
//! failure instead of stopping at the first. Unions embed each
//! alternative's errors labeled `Option 0`, `Option 1`, …
//!
//! ## Features
//!
//! | Feature | Description | Default |
//! |---------|-------------|---------|
//! | `chrono` | `date()` schema for `chrono::NaiveDateTime` values | ❌ |
//!
//! ## Concurrency
//!
//! Schemas are immutable after construction and carry no per-call
//! state, so one schema value can validate on any number of threads at
//! once without coordination.

mod check;
mod combinator;
mod composite;
mod error;
mod primitive;
mod schema;
mod wrapper;

pub use combinator::{IntersectionSchema, UnionSchema};
pub use composite::{ArraySchema, Fields, ObjectBuilder, ObjectSchema, RecordSchema, TupleSchema};
pub use error::{ParseError, SchemaResult, ValidationError, ValueKind};
#[cfg(feature = "chrono")]
pub use primitive::DateSchema;
pub use primitive::{
    BooleanSchema, EnumSchema, LiteralSchema, NullSchema, NumberSchema, StringSchema,
    UndefinedSchema,
};
pub use schema::{DynSchema, ErasedSchema, Schema};
pub use wrapper::{DefaultSchema, NullableSchema, RefinedSchema, TransformSchema};

use serde_json::Value;

// =============================================================================
// Factory entry points
// =============================================================================

/// A schema accepting string input.
pub fn string() -> StringSchema {
    StringSchema::new()
}

/// A schema accepting numeric input (numbers or numeric strings).
pub fn number() -> NumberSchema {
    NumberSchema::new()
}

/// A schema accepting boolean input (booleans or `"true"`/`"false"`).
pub fn boolean() -> BooleanSchema {
    BooleanSchema::new()
}

/// A schema accepting only the absence sentinel.
pub fn null() -> NullSchema {
    NullSchema::new()
}

/// A schema accepting only the absence sentinel, under its undefined
/// name.
pub fn undefined() -> UndefinedSchema {
    UndefinedSchema::new()
}

/// A schema accepting exactly `value`.
pub fn literal<T>(value: T) -> LiteralSchema<T>
where
    T: Clone + Into<Value>,
{
    LiteralSchema::new(value)
}

/// A schema accepting any member of `values`, in their original order.
pub fn enumeration<T>(values: impl IntoIterator<Item = T>) -> EnumSchema<T>
where
    T: Clone + Into<Value>,
{
    EnumSchema::new(values)
}

/// A schema accepting arrays whose every element validates against
/// `element`.
pub fn array<S>(element: S) -> ArraySchema<S> {
    ArraySchema::new(element)
}

/// A schema accepting arrays of exactly `elements.len()` positions,
/// each validated by its own schema.
pub fn tuple(elements: Vec<DynSchema>) -> TupleSchema {
    TupleSchema::new(elements)
}

/// A schema accepting objects whose every value validates against
/// `value`.
pub fn record<S>(value: S) -> RecordSchema<S> {
    RecordSchema::new(value)
}

/// An empty shape accumulator for an object schema.
pub fn object() -> ObjectBuilder {
    ObjectBuilder::new()
}

/// A schema accepting input matching any of `options`, in order.
pub fn union(options: Vec<DynSchema>) -> UnionSchema {
    UnionSchema::new(options)
}

/// A schema requiring the same input to satisfy both `left` and
/// `right`.
pub fn intersection<L, R>(left: L, right: R) -> IntersectionSchema<L, R> {
    IntersectionSchema::new(left, right)
}

/// A schema accepting datetime strings.
#[cfg(feature = "chrono")]
pub fn date() -> DateSchema {
    DateSchema::new()
}
