//! The core trait implemented by every validator kind.
//!
//! The five kinds — String, Number, Boolean, Array, Object — form a
//! closed set behind one object-safe trait. Containers hold their
//! children as `Box<dyn Validate>` tree nodes and dispatch through it.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::core::error::ValidationError;
use crate::definition::Definition;

// ============================================================================
// KIND TAG
// ============================================================================

/// The data kind a validator checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// UTF-8 string.
    String,
    /// Finite double-precision number.
    Number,
    /// Boolean.
    Boolean,
    /// Homogeneous sequence delegating to one element validator.
    Array,
    /// Keyed map delegating to named field validators.
    Object,
}

impl Kind {
    /// The lowercase type tag used in messages and definitions.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VALIDATE TRAIT
// ============================================================================

/// A validation/coercion contract for one data kind.
///
/// `validate` checks a present value from the root and returns the
/// normalized result; `validate_at` is the full recursive contract, in
/// which `None` models an absent value (a missing object field) and the
/// `path` identifies the current location for error reporting.
///
/// # Examples
///
/// ```
/// use shapecheck::{number, Validate};
/// use serde_json::json;
///
/// let age = number().min(1.0).max(150.0);
/// assert_eq!(age.validate(&json!("42")).unwrap(), json!(42));
/// assert!(age.validate(&json!(151)).is_err());
/// ```
pub trait Validate {
    /// The kind tag of this validator.
    fn kind(&self) -> Kind;

    /// Whether an absent input is a failure for this validator.
    fn is_required(&self) -> bool;

    /// Validates `value` at `path`.
    ///
    /// `None` input passes through unchanged for optional validators and
    /// fails with `Required` otherwise; every other check is skipped for
    /// the absent case. Present values return `Some(normalized)`.
    fn validate_at(
        &self,
        value: Option<&Value>,
        path: &str,
    ) -> Result<Option<Value>, ValidationError>;

    /// Returns the introspection snapshot of this validator's
    /// configuration (custom transforms excluded).
    fn definition(&self) -> Definition;

    /// Validates a present value from the root path.
    fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        let outcome = self.validate_at(Some(value), "");
        if let Err(err) = &outcome {
            tracing::trace!(
                path = err.path(),
                kind = err.kind().as_str(),
                "validation failed"
            );
        }
        // A present input can only normalize to a present output; the
        // fallback clone is unreachable in practice.
        Ok(outcome?.unwrap_or_else(|| value.clone()))
    }
}

impl Validate for Box<dyn Validate> {
    fn kind(&self) -> Kind {
        (**self).kind()
    }

    fn is_required(&self) -> bool {
        (**self).is_required()
    }

    fn validate_at(
        &self,
        value: Option<&Value>,
        path: &str,
    ) -> Result<Option<Value>, ValidationError> {
        (**self).validate_at(value, path)
    }

    fn definition(&self) -> Definition {
        (**self).definition()
    }
}

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Extension methods for building schema trees.
pub trait ValidateExt: Validate + Sized + 'static {
    /// Boxes this validator into a tree node.
    fn boxed(self) -> Box<dyn Validate> {
        Box::new(self)
    }
}

impl<T: Validate + Sized + 'static> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags_are_lowercase() {
        assert_eq!(Kind::String.as_str(), "string");
        assert_eq!(Kind::Object.to_string(), "object");
        assert_eq!(serde_json::to_value(Kind::Array).unwrap(), "array");
    }
}
