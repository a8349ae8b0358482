//! Default wrapper: replace the absence sentinel with a fallback value.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::SchemaResult;
use crate::Schema;

/// Wrapper substituting a fallback value when the input is the absence
/// sentinel (`null`); any other input delegates fully to the inner
/// schema, including all of its checks.
///
/// The fallback is computed lazily, once per call, and never cached
/// across calls. A present-but-invalid value is never replaced by the
/// fallback.
///
/// Built by [`Schema::default`] or [`Schema::default_with`].
pub struct DefaultSchema<S: Schema> {
    inner: S,
    fallback: Arc<dyn Fn() -> S::Output + Send + Sync>,
}

impl<S: Schema> DefaultSchema<S> {
    pub(crate) fn new(inner: S, fallback: impl Fn() -> S::Output + Send + Sync + 'static) -> Self {
        Self {
            inner,
            fallback: Arc::new(fallback),
        }
    }
}

impl<S: Schema + Clone> Clone for DefaultSchema<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            fallback: Arc::clone(&self.fallback),
        }
    }
}

impl<S: Schema + fmt::Debug> fmt::Debug for DefaultSchema<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultSchema")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<S: Schema> Schema for DefaultSchema<S> {
    type Output = S::Output;

    fn safe_parse(&self, input: &Value) -> SchemaResult<Self::Output> {
        if input.is_null() {
            Ok((self.fallback)())
        } else {
            self.inner.safe_parse(input)
        }
    }
}
