//! Transform wrapper: post-process a validated value.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{SchemaResult, ValidationError};
use crate::Schema;

/// Wrapper applying a mapping to the inner schema's validated output.
///
/// The inner schema runs first; a mapping failure is reported as
/// `"Transformation failed: <cause>"`, never propagated raw. Wrapper
/// order is semantic — a refinement chained before the transform sees
/// the pre-transform value, one chained after sees the post-transform
/// value.
///
/// Built by [`Schema::transform`] or [`Schema::try_transform`].
pub struct TransformSchema<S: Schema, O> {
    inner: S,
    apply: Arc<dyn Fn(S::Output) -> Result<O, String> + Send + Sync>,
}

impl<S: Schema, O> TransformSchema<S, O> {
    pub(crate) fn new(
        inner: S,
        apply: impl Fn(S::Output) -> Result<O, String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            inner,
            apply: Arc::new(apply),
        }
    }
}

impl<S: Schema + Clone, O> Clone for TransformSchema<S, O> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            apply: Arc::clone(&self.apply),
        }
    }
}

impl<S: Schema + fmt::Debug, O> fmt::Debug for TransformSchema<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformSchema")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<S: Schema, O> Schema for TransformSchema<S, O> {
    type Output = O;

    fn safe_parse(&self, input: &Value) -> SchemaResult<O> {
        let value = self.inner.safe_parse(input)?;
        (self.apply)(value).map_err(|cause| {
            ValidationError::new(format!("Transformation failed: {cause}"))
        })
    }
}
