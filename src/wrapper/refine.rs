//! Refinement wrapper: ad-hoc predicates over a validated value.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{SchemaResult, ValidationError};
use crate::Schema;

/// One predicate+message pair attached to a [`RefinedSchema`].
pub(crate) struct Refinement<T> {
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
    message: Arc<dyn Fn(&T) -> String + Send + Sync>,
}

impl<T> Clone for Refinement<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            message: Arc::clone(&self.message),
        }
    }
}

/// Wrapper rejecting otherwise-valid values that fail custom
/// predicates.
///
/// The base schema runs first and its failure short-circuits. On base
/// success, every refinement predicate is evaluated and all failing
/// predicates contribute their messages to one failure.
///
/// Built by [`Schema::refine`] / [`Schema::refine_with`]; further
/// `refine` calls on the wrapper append to the same evaluation group.
pub struct RefinedSchema<S: Schema> {
    inner: S,
    refinements: Vec<Refinement<S::Output>>,
}

impl<S: Schema> RefinedSchema<S> {
    pub(crate) fn new(inner: S) -> Self {
        Self {
            inner,
            refinements: Vec::new(),
        }
    }

    /// Append a refinement with a fixed message.
    pub fn refine<P>(mut self, predicate: P, message: impl Into<String>) -> Self
    where
        P: Fn(&S::Output) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        self.refinements.push(Refinement {
            predicate: Arc::new(predicate),
            message: Arc::new(move |_: &S::Output| message.clone()),
        });
        self
    }

    /// Append a refinement whose message is computed from the rejected
    /// value.
    pub fn refine_with<P, M>(mut self, predicate: P, message: M) -> Self
    where
        P: Fn(&S::Output) -> bool + Send + Sync + 'static,
        M: Fn(&S::Output) -> String + Send + Sync + 'static,
    {
        self.refinements.push(Refinement {
            predicate: Arc::new(predicate),
            message: Arc::new(message),
        });
        self
    }
}

impl<S: Schema + Clone> Clone for RefinedSchema<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            refinements: self.refinements.clone(),
        }
    }
}

impl<S: Schema + fmt::Debug> fmt::Debug for RefinedSchema<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefinedSchema")
            .field("inner", &self.inner)
            .field("refinements", &self.refinements.len())
            .finish_non_exhaustive()
    }
}

impl<S: Schema> Schema for RefinedSchema<S> {
    type Output = S::Output;

    fn safe_parse(&self, input: &Value) -> SchemaResult<Self::Output> {
        let value = self.inner.safe_parse(input)?;

        let errors: Vec<String> = self
            .refinements
            .iter()
            .filter(|refinement| !(refinement.predicate)(&value))
            .map(|refinement| (refinement.message)(&value))
            .collect();

        if errors.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError::from_errors(errors))
        }
    }
}
