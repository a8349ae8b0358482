//! Leaf schemas: strings, numbers, booleans, the absence sentinel,
//! literals, and enums.

mod absent;
mod boolean;
#[cfg(feature = "chrono")]
mod date;
mod enumeration;
mod literal;
mod number;
mod string;

pub use absent::{NullSchema, UndefinedSchema};
pub use boolean::BooleanSchema;
#[cfg(feature = "chrono")]
pub use date::DateSchema;
pub use enumeration::EnumSchema;
pub use literal::LiteralSchema;
pub use number::NumberSchema;
pub use string::StringSchema;
