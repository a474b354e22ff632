//! # shapecheck
//!
//! A composable runtime data-shape validator: build a schema from the
//! five primitive kinds (string, number, boolean, array, object), then
//! check arbitrary JSON-shaped input against it. Conforming values come
//! back normalized (numeric strings parsed, email addresses lower-cased,
//! custom transforms applied); the first violation anywhere in the tree
//! aborts the call with a structured error naming the offending path.
//!
//! ## Quick Start
//!
//! ```
//! use shapecheck::prelude::*;
//! use serde_json::json;
//!
//! let signup = object(fields! {
//!     "email" => string().email(),
//!     "age" => number().min(13.0).max(120.0).optional(),
//!     "tags" => array(string().min(1)).max(10).optional(),
//! });
//!
//! let value = signup
//!     .validate(&json!({ "email": "New@User.dev", "age": "42" }))
//!     .unwrap();
//! assert_eq!(value, json!({ "email": "new@user.dev", "age": 42 }));
//!
//! let err = signup.validate(&json!({ "email": "not-an-email" })).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidEmail);
//! assert_eq!(err.path(), "email");
//! ```
//!
//! ## Shared configuration
//!
//! Every validator is a cheap handle onto shared configuration.
//! [`optional()`](StringValidator::optional) and
//! [`required()`](StringValidator::required) return a second handle onto
//! the *same* configuration with the presence flag toggled — both
//! handles observe each other's subsequent fluent mutations. Schemas are
//! therefore built single-threaded and must not be reconfigured while a
//! `validate` call is in flight; `Rc` internally makes this a
//! compile-time property.
//!
//! ## Introspection
//!
//! [`Validate::definition`] exports a data-only
//! [`Definition`] snapshot of the schema (kind, bounds,
//! enumerations, nested shape) for documentation or downstream tooling.
//! Custom transforms are opaque and not part of the snapshot.
//!
//! ## Limits
//!
//! Validation is synchronous, recursive, and fail-fast; recursion depth
//! is bounded by the depth of the *schema* tree (input nested deeper
//! than the schema is never descended into), so stack use is under the
//! schema author's control.

pub mod core;
pub mod definition;
mod macros;
pub mod prelude;
pub mod validators;

pub use crate::core::{CustomError, ErrorKind, Kind, Validate, ValidateExt, ValidationError};
pub use crate::definition::{Definition, Items};
pub use crate::validators::{
    ArrayValidator, BooleanValidator, NumberValidator, ObjectValidator, StringValidator, array,
    boolean, number, object, string,
};
