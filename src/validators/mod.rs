//! Built-in validator kinds and their factory functions.
//!
//! A schema is a tree of validators built from the five factories below
//! and configured through their fluent setters:
//!
//! ```
//! use shapecheck::prelude::*;
//! use serde_json::json;
//!
//! let signup = object(fields! {
//!     "email" => string().email(),
//!     "age" => number().min(13.0).optional(),
//! });
//! assert!(signup.validate(&json!({ "email": "a@b.co" })).is_ok());
//! ```

mod array;
mod boolean;
mod number;
mod object;
mod string;

pub use array::ArrayValidator;
pub use boolean::BooleanValidator;
pub use number::NumberValidator;
pub use object::ObjectValidator;
pub use string::StringValidator;

use crate::core::Validate;

/// Creates a required string validator.
#[must_use]
pub fn string() -> StringValidator {
    StringValidator::new()
}

/// Creates a required number validator.
#[must_use]
pub fn number() -> NumberValidator {
    NumberValidator::new()
}

/// Creates a required boolean validator.
#[must_use]
pub fn boolean() -> BooleanValidator {
    BooleanValidator::new()
}

/// Creates a required array validator delegating elements to `element`.
#[must_use]
pub fn array(element: impl Validate + 'static) -> ArrayValidator {
    ArrayValidator::new(Box::new(element))
}

/// Creates a required object validator with the given declared fields.
///
/// Declaration order is significant; the [`fields!`](crate::fields)
/// macro is the usual way to build the list.
#[must_use]
pub fn object(fields: impl IntoIterator<Item = (String, Box<dyn Validate>)>) -> ObjectValidator {
    ObjectValidator::new(fields)
}
