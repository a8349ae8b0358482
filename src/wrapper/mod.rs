//! Wrappers altering null handling, supplying fallbacks, post-
//! processing values, or adding ad-hoc predicates around another schema.

mod default;
mod nullable;
mod refine;
mod transform;

pub use default::DefaultSchema;
pub use nullable::NullableSchema;
pub use refine::RefinedSchema;
pub use transform::TransformSchema;
