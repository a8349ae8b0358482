//! Object schema: an ordered shape map, strict mode, and a caller-
//! supplied constructor that turns validated fields into a typed value.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{SchemaResult, ValidationError, ValueKind};
use crate::primitive::{BooleanSchema, NumberSchema, StringSchema};
use crate::schema::{DynSchema, ErasedSchema};
use crate::Schema;

static NULL: Value = Value::Null;

/// Validated field values handed to an object constructor.
///
/// Wraps the name→value map produced by shape validation; accessors
/// return descriptive errors so constructors can bail with `?`.
#[derive(Debug, Clone)]
pub struct Fields(Map<String, Value>);

impl Fields {
    /// The validated value for `name`; the absence sentinel when the
    /// field was not registered.
    pub fn value(&self, name: &str) -> &Value {
        self.0.get(name).unwrap_or(&NULL)
    }

    /// The field as a string slice.
    pub fn str(&self, name: &str) -> Result<&str, String> {
        self.value(name)
            .as_str()
            .ok_or_else(|| format!("field '{name}' is not a string"))
    }

    /// The field as a number.
    pub fn f64(&self, name: &str) -> Result<f64, String> {
        self.value(name)
            .as_f64()
            .ok_or_else(|| format!("field '{name}' is not a number"))
    }

    /// The field as a boolean.
    pub fn bool(&self, name: &str) -> Result<bool, String> {
        self.value(name)
            .as_bool()
            .ok_or_else(|| format!("field '{name}' is not a boolean"))
    }

    /// Whether the field validated to the absence sentinel.
    pub fn is_null(&self, name: &str) -> bool {
        self.value(name).is_null()
    }

    /// Consume the wrapper, yielding the underlying map.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

/// Accumulator for an object schema's shape: an ordered name→schema
/// mapping built up field by field before the schema is finalized.
///
/// Registering a name twice replaces the earlier entry. Field order is
/// the order errors are reported in when several fields fail.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use zod_parse::{number, object, string, Schema};
///
/// #[derive(Debug, PartialEq)]
/// struct User {
///     name: String,
///     age: f64,
/// }
///
/// let schema = object()
///     .field("name", string().min(2))
///     .field("age", number().min(0).max(120))
///     .build(|fields| {
///         Ok::<_, String>(User {
///             name: fields.str("name")?.to_string(),
///             age: fields.f64("age")?,
///         })
///     });
///
/// let user = schema.parse(&json!({"name": "Piash", "age": 30})).unwrap();
/// assert_eq!(user, User { name: "Piash".to_string(), age: 30.0 });
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjectBuilder {
    shape: Vec<(String, DynSchema)>,
}

impl ObjectBuilder {
    /// Create an empty shape.
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, name: String, schema: DynSchema) {
        if let Some(entry) = self.shape.iter_mut().find(|(existing, _)| *existing == name) {
            entry.1 = schema;
        } else {
            self.shape.push((name, schema));
        }
    }

    /// Register a field validated by `schema`.
    pub fn field<S>(mut self, name: impl Into<String>, schema: S) -> Self
    where
        S: Schema + fmt::Debug + Send + Sync + 'static,
        S::Output: Serialize,
    {
        self.insert(name.into(), schema.erase());
        self
    }

    /// Register a field that also accepts absence.
    pub fn optional_field<S>(self, name: impl Into<String>, schema: S) -> Self
    where
        S: Schema + fmt::Debug + Send + Sync + 'static,
        S::Output: Serialize,
    {
        self.field(name, schema.optional())
    }

    /// Register a bare string field.
    pub fn string(self, name: impl Into<String>) -> Self {
        self.field(name, StringSchema::new())
    }

    /// Register a bare number field.
    pub fn number(self, name: impl Into<String>) -> Self {
        self.field(name, NumberSchema::new())
    }

    /// Register a bare boolean field.
    pub fn boolean(self, name: impl Into<String>) -> Self {
        self.field(name, BooleanSchema::new())
    }

    /// Register a bare string field that also accepts absence.
    pub fn optional_string(self, name: impl Into<String>) -> Self {
        self.optional_field(name, StringSchema::new())
    }

    /// Register a bare number field that also accepts absence.
    pub fn optional_number(self, name: impl Into<String>) -> Self {
        self.optional_field(name, NumberSchema::new())
    }

    /// Register a bare boolean field that also accepts absence.
    pub fn optional_boolean(self, name: impl Into<String>) -> Self {
        self.optional_field(name, BooleanSchema::new())
    }

    /// Finalize with a constructor turning validated fields into `T`.
    ///
    /// A constructor error is reported as
    /// `"Failed to construct object: <cause>"`, never propagated raw.
    pub fn build<T, E, F>(self, construct: F) -> ObjectSchema<T>
    where
        F: Fn(&Fields) -> Result<T, E> + Send + Sync + 'static,
        E: fmt::Display,
    {
        ObjectSchema {
            shape: self.shape,
            construct: Arc::new(move |fields: &Fields| {
                construct(fields).map_err(|cause| cause.to_string())
            }),
            strict: false,
        }
    }

    /// Finalize with a serde-deserializing constructor.
    pub fn build_deserialize<T: DeserializeOwned>(self) -> ObjectSchema<T> {
        ObjectSchema {
            shape: self.shape,
            construct: Arc::new(|fields: &Fields| {
                serde_json::from_value(Value::Object(fields.clone().into_map()))
                    .map_err(|cause| cause.to_string())
            }),
            strict: false,
        }
    }
}

/// Schema accepting object input against a fixed shape.
///
/// For each declared field, the corresponding input key is looked up
/// (absence validates as the absence sentinel, so each field schema
/// decides whether missing is acceptable) and failures are tagged with
/// the field name. All field errors are collected before the constructor
/// runs.
pub struct ObjectSchema<T> {
    shape: Vec<(String, DynSchema)>,
    construct: Arc<dyn Fn(&Fields) -> Result<T, String> + Send + Sync>,
    strict: bool,
}

impl<T> ObjectSchema<T> {
    /// Reject input keys not present in the shape; every unrecognized
    /// key is reported jointly in one error.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }
}

impl<T> Clone for ObjectSchema<T> {
    fn clone(&self) -> Self {
        Self {
            shape: self.shape.clone(),
            construct: Arc::clone(&self.construct),
            strict: self.strict,
        }
    }
}

impl<T> fmt::Debug for ObjectSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectSchema")
            .field("shape", &self.shape)
            .field("strict", &self.strict)
            .finish_non_exhaustive()
    }
}

impl<T> Schema for ObjectSchema<T> {
    type Output = T;

    fn safe_parse(&self, input: &Value) -> SchemaResult<T> {
        let Value::Object(entries) = input else {
            return Err(ValidationError::new(format!(
                "Expected object, received {}",
                ValueKind::of(input)
            )));
        };

        let mut parsed = Map::new();
        let mut errors = Vec::new();
        for (name, schema) in &self.shape {
            let field_input = entries.get(name).unwrap_or(&NULL);
            match schema.safe_parse_value(field_input) {
                Ok(value) => {
                    parsed.insert(name.clone(), value);
                }
                Err(error) => errors.extend(
                    error
                        .errors()
                        .iter()
                        .map(|message| format!("{name}: {message}")),
                ),
            }
        }

        if self.strict {
            let unrecognized: Vec<&str> = entries
                .keys()
                .filter(|key| !self.shape.iter().any(|(name, _)| name == *key))
                .map(String::as_str)
                .collect();
            if !unrecognized.is_empty() {
                errors.push(format!(
                    "Unrecognized key(s) in object: {}",
                    unrecognized.join(", ")
                ));
            }
        }

        if !errors.is_empty() {
            return Err(ValidationError::from_errors(errors));
        }

        let fields = Fields(parsed);
        (self.construct)(&fields).map_err(|cause| {
            ValidationError::new(format!("Failed to construct object: {cause}"))
        })
    }
}
