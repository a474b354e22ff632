//! Prelude module for convenient imports.
//!
//! Provides a single `use shapecheck::prelude::*;` import that brings in
//! the trait, the factories, and the error types needed for common
//! validation scenarios.
//!
//! # Examples
//!
//! ```
//! use shapecheck::prelude::*;
//! use serde_json::json;
//!
//! let tags = array(string().min(1)).max(10);
//! assert!(tags.validate(&json!(["a", "b"])).is_ok());
//! ```

pub use crate::core::{CustomError, ErrorKind, Kind, Validate, ValidateExt, ValidationError};
pub use crate::definition::{Definition, Items};
pub use crate::fields;
pub use crate::validators::{
    ArrayValidator, BooleanValidator, NumberValidator, ObjectValidator, StringValidator, array,
    boolean, number, object, string,
};
