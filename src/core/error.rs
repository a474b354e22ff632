//! Validation failure types.
//!
//! A [`ValidationError`] carries a machine-readable [`ErrorKind`], the
//! dotted/bracketed path of the failing sub-value, a human-readable
//! message, and optional key/value params for tooling.
//!
//! String fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static messages.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Machine-readable category of a validation failure.
///
/// The message text on [`ValidationError`] is the human-readable payload;
/// programmatic handling should match on this discriminant instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required value was absent.
    Required,
    /// The runtime type of the value did not match the validator's kind.
    TypeMismatch,
    /// A string could not be coerced to a number.
    InvalidNumber,
    /// A string could not be coerced to a boolean.
    InvalidBoolean,
    /// The measured quantity fell below the configured minimum.
    BelowMinimum,
    /// The measured quantity exceeded the configured maximum.
    AboveMaximum,
    /// The value was not a member of the configured whitelist.
    NotWhitelisted,
    /// The value was a member of the configured blacklist.
    Blacklisted,
    /// A declared required field was missing from an object input.
    MissingRequiredKey,
    /// An undeclared field was present and unknown keys are not allowed.
    UnknownKey,
    /// The value failed the built-in email-shape check.
    InvalidEmail,
    /// A user-supplied custom transform signalled a failure.
    Custom,
}

impl ErrorKind {
    /// Stable snake_case code for logs and serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::TypeMismatch => "type_mismatch",
            Self::InvalidNumber => "invalid_number",
            Self::InvalidBoolean => "invalid_boolean",
            Self::BelowMinimum => "below_minimum",
            Self::AboveMaximum => "above_maximum",
            Self::NotWhitelisted => "not_whitelisted",
            Self::Blacklisted => "blacklisted",
            Self::MissingRequiredKey => "missing_required_key",
            Self::UnknownKey => "unknown_key",
            Self::InvalidEmail => "invalid_email",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

/// A structured validation error identifying the offending path and reason.
///
/// Validation is fail-fast: the first violation anywhere in the tree is
/// the only one reported, and it aborts the whole `validate` call.
///
/// # Examples
///
/// ```
/// use shapecheck::{string, ErrorKind, Validate};
/// use serde_json::json;
///
/// let err = string().min(3).validate(&json!("ab")).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::BelowMinimum);
/// assert_eq!(err.path(), "");
/// assert_eq!(err.message(), "Minimum of 3 characters required");
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    kind: ErrorKind,
    path: String,
    message: Cow<'static, str>,
    params: Params,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(
        kind: ErrorKind,
        message: impl Into<Cow<'static, str>>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            path: path.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// The failure category.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Location of the failing sub-value relative to the root (`""` at
    /// the root, `"user.email"`, `"items[2]"`, ...).
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Human-readable reason.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Adds a key/value detail to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a param value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Renders the error in its serialized wire shape:
    /// `{ "message": "Invalid Data", "details": { "path", "message" } }`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "message": "Invalid Data",
            "details": {
                "path": self.path,
                "message": self.message,
            },
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}: {}", self.kind, self.message)
        } else {
            write!(f, "[{}] {}: {}", self.path, self.kind, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

/// What a bound counts, for range error messages.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Measured {
    /// String length ("... characters required").
    Chars,
    /// Array length ("... elements required").
    Elements,
    /// The numeric value itself.
    Value,
}

impl Measured {
    fn bound_message(self, which: &str, bound: impl fmt::Display) -> String {
        match self {
            Self::Chars => format!("{which} of {bound} characters required"),
            Self::Elements => format!("{which} of {bound} elements required"),
            Self::Value => format!("{which} of {bound} required"),
        }
    }
}

impl ValidationError {
    pub(crate) fn required(path: &str) -> Self {
        Self::new(ErrorKind::Required, "Required", path)
    }

    pub(crate) fn type_mismatch(path: &str, expected: crate::core::Kind) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            format!("Invalid type expected: {expected}"),
            path,
        )
        .with_param("expected", expected.as_str())
    }

    pub(crate) fn invalid_number(path: &str) -> Self {
        Self::new(ErrorKind::InvalidNumber, "Invalid number", path)
    }

    pub(crate) fn invalid_boolean(path: &str) -> Self {
        Self::new(
            ErrorKind::InvalidBoolean,
            "String cannot be converted to true/false",
            path,
        )
    }

    pub(crate) fn below_minimum(
        path: &str,
        measured: Measured,
        min: impl fmt::Display,
        actual: impl fmt::Display,
    ) -> Self {
        Self::new(
            ErrorKind::BelowMinimum,
            measured.bound_message("Minimum", &min),
            path,
        )
        .with_param("min", min.to_string())
        .with_param("actual", actual.to_string())
    }

    pub(crate) fn above_maximum(
        path: &str,
        measured: Measured,
        max: impl fmt::Display,
        actual: impl fmt::Display,
    ) -> Self {
        Self::new(
            ErrorKind::AboveMaximum,
            measured.bound_message("Maximum", &max),
            path,
        )
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }

    pub(crate) fn not_whitelisted<T: fmt::Display>(path: &str, allowed: &[T]) -> Self {
        Self::new(
            ErrorKind::NotWhitelisted,
            format!("Invalid value, must be one of: {}", join(allowed)),
            path,
        )
    }

    pub(crate) fn blacklisted<T: fmt::Display>(path: &str, disallowed: &[T]) -> Self {
        Self::new(
            ErrorKind::Blacklisted,
            format!("Invalid value, must NOT be one of: {}", join(disallowed)),
            path,
        )
    }

    pub(crate) fn missing_required_key(path: &str) -> Self {
        Self::new(ErrorKind::MissingRequiredKey, "Missing required keys", path)
    }

    pub(crate) fn unknown_key(path: &str, key: &str) -> Self {
        Self::new(
            ErrorKind::UnknownKey,
            format!("Unknown key not allowed {key}"),
            path,
        )
        .with_param("key", key.to_owned())
    }
}

fn join<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// CUSTOM TRANSFORM FAILURE
// ============================================================================

/// Failure descriptor returned by a custom transform.
///
/// A transform either replaces the value or rejects it with one of these;
/// the rejection surfaces as a [`ValidationError`] of kind
/// [`ErrorKind::Custom`] carrying the descriptor's message and the path
/// active at the point of failure.
///
/// # Examples
///
/// ```
/// use shapecheck::{number, CustomError, Validate};
/// use serde_json::json;
///
/// let seat = number().custom(|n| {
///     if n < 1.0 {
///         Err(CustomError::new("No such seat"))
///     } else {
///         Ok(n)
///     }
/// });
/// assert!(seat.validate(&json!(0.5)).is_err());
/// ```
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct CustomError {
    pub(crate) kind: ErrorKind,
    pub(crate) message: Cow<'static, str>,
}

impl CustomError {
    /// Creates a failure descriptor with the given message.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind: ErrorKind::Custom,
            message: message.into(),
        }
    }

    /// Built-in transforms report under their own kind.
    pub(crate) fn with_kind(kind: ErrorKind, message: &'static str) -> Self {
        Self {
            kind,
            message: Cow::Borrowed(message),
        }
    }

    /// The rejection message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&'static str> for CustomError {
    fn from(message: &'static str) -> Self {
        Self::new(message)
    }
}

impl From<String> for CustomError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

// ============================================================================
// TESTS
// ============================================================================
