//! Nullable wrapper: accept the absence sentinel directly.

use serde_json::Value;

use crate::error::SchemaResult;
use crate::Schema;

/// Wrapper accepting the absence sentinel (`null`) without consulting
/// the inner schema; any other input delegates unchanged.
///
/// Built by [`Schema::nullable`] or its alias [`Schema::optional`].
#[derive(Debug, Clone)]
pub struct NullableSchema<S> {
    inner: S,
}

impl<S> NullableSchema<S> {
    pub(crate) fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: Schema> Schema for NullableSchema<S> {
    type Output = Option<S::Output>;

    fn safe_parse(&self, input: &Value) -> SchemaResult<Self::Output> {
        if input.is_null() {
            Ok(None)
        } else {
            self.inner.safe_parse(input).map(Some)
        }
    }
}
