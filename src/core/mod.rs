//! Core types: errors, paths, shared configuration, and the
//! [`Validate`] trait.

pub mod error;
pub mod path;
pub mod traits;

pub(crate) mod config;

pub use error::{CustomError, ErrorKind, ValidationError};
pub use traits::{Kind, Validate, ValidateExt};
