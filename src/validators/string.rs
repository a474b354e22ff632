//! String validator.

use std::fmt;
use std::rc::Rc;
use std::sync::LazyLock;

use serde_json::Value;

use crate::core::config::{Pipeline, Shared, enforced_len, run_pipeline, shared};
use crate::core::error::Measured;
use crate::core::{CustomError, ErrorKind, Kind, Validate, ValidationError};
use crate::definition::Definition;

static EMAIL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[\w.-]+@([\w-]+\.)+[\w-]{2,4}$").unwrap());

struct StringConfig {
    required: bool,
    min: Option<usize>,
    max: Option<usize>,
    allowed: Option<Vec<String>>,
    disallowed: Option<Vec<String>>,
    transforms: Pipeline<String>,
}

/// Validates UTF-8 strings against length bounds, enumerations, and the
/// custom-transform pipeline. Performs no coercion.
///
/// Handles are cheap aliases: clones and the
/// [`optional`](Self::optional)/[`required`](Self::required) counterparts
/// share one configuration cell, so fluent mutations through any handle
/// are visible to all of them.
///
/// # Examples
///
/// ```
/// use shapecheck::{string, Validate};
/// use serde_json::json;
///
/// let username = string().min(3).max(20);
/// assert_eq!(username.validate(&json!("alice")).unwrap(), json!("alice"));
/// assert!(username.validate(&json!("ab")).is_err());
/// ```
#[derive(Clone)]
pub struct StringValidator {
    config: Shared<StringConfig>,
}

impl StringValidator {
    pub(crate) fn new() -> Self {
        Self {
            config: shared(StringConfig {
                required: true,
                min: None,
                max: None,
                allowed: None,
                disallowed: None,
                transforms: Vec::new(),
            }),
        }
    }

    /// Sets the minimum length in chars (inclusive).
    ///
    /// A bound of exactly `0` is treated as unset and never enforced.
    pub fn min(self, min: usize) -> Self {
        self.config.borrow_mut().min = Some(min);
        self
    }

    /// Sets the maximum length in chars (inclusive).
    ///
    /// A bound of exactly `0` is treated as unset and never enforced.
    pub fn max(self, max: usize) -> Self {
        self.config.borrow_mut().max = Some(max);
        self
    }

    /// Restricts the value to the given set.
    pub fn whitelist<I, S>(self, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.borrow_mut().allowed = Some(allowed.into_iter().map(Into::into).collect());
        self
    }

    /// Rejects any value in the given set.
    pub fn blacklist<I, S>(self, disallowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.borrow_mut().disallowed =
            Some(disallowed.into_iter().map(Into::into).collect());
        self
    }

    /// Appends an email-shape check to the transform pipeline.
    ///
    /// Rejects values that do not look like an email address; accepted
    /// values are lower-cased, since email matching is case-insensitive
    /// and the canonical form is lowercase.
    pub fn email(self) -> Self {
        self.config
            .borrow_mut()
            .transforms
            .push(Box::new(|value: String| {
                if EMAIL_REGEX.is_match(&value) {
                    Ok(value.to_lowercase())
                } else {
                    Err(CustomError::with_kind(
                        ErrorKind::InvalidEmail,
                        "Invalid email address",
                    ))
                }
            }));
        self
    }

    /// Appends a custom transform to the pipeline.
    ///
    /// Transforms run after all built-in checks, in registration order;
    /// each receives the previous transform's output.
    pub fn custom(
        self,
        transform: impl Fn(String) -> Result<String, CustomError> + 'static,
    ) -> Self {
        self.config.borrow_mut().transforms.push(Box::new(transform));
        self
    }

    /// Returns an aliasing handle with the shared `required` flag cleared.
    #[must_use]
    pub fn optional(&self) -> Self {
        self.config.borrow_mut().required = false;
        Self {
            config: Rc::clone(&self.config),
        }
    }

    /// Returns an aliasing handle with the shared `required` flag set.
    #[must_use]
    pub fn required(&self) -> Self {
        self.config.borrow_mut().required = true;
        Self {
            config: Rc::clone(&self.config),
        }
    }
}

impl Validate for StringValidator {
    fn kind(&self) -> Kind {
        Kind::String
    }

    fn is_required(&self) -> bool {
        self.config.borrow().required
    }

    fn validate_at(
        &self,
        value: Option<&Value>,
        path: &str,
    ) -> Result<Option<Value>, ValidationError> {
        let config = self.config.borrow();
        let Some(value) = value else {
            if config.required {
                return Err(ValidationError::required(path));
            }
            return Ok(None);
        };
        let Value::String(input) = value else {
            return Err(ValidationError::type_mismatch(path, Kind::String));
        };

        let length = input.chars().count();
        if let Some(min) = enforced_len(config.min) {
            if length < min {
                return Err(ValidationError::below_minimum(
                    path,
                    Measured::Chars,
                    min,
                    length,
                ));
            }
        }
        if let Some(max) = enforced_len(config.max) {
            if length > max {
                return Err(ValidationError::above_maximum(
                    path,
                    Measured::Chars,
                    max,
                    length,
                ));
            }
        }
        if let Some(allowed) = &config.allowed {
            if !allowed.iter().any(|candidate| candidate == input) {
                return Err(ValidationError::not_whitelisted(path, allowed));
            }
        }
        if let Some(disallowed) = &config.disallowed {
            if disallowed.iter().any(|candidate| candidate == input) {
                return Err(ValidationError::blacklisted(path, disallowed));
            }
        }

        let output = run_pipeline(&config.transforms, path, input.clone())?;
        Ok(Some(Value::String(output)))
    }

    fn definition(&self) -> Definition {
        let config = self.config.borrow();
        Definition {
            min: config.min.map(|m| m as f64),
            max: config.max.map(|m| m as f64),
            allowed: config
                .allowed
                .as_ref()
                .map(|values| values.iter().cloned().map(Value::String).collect()),
            disallowed: config
                .disallowed
                .as_ref()
                .map(|values| values.iter().cloned().map(Value::String).collect()),
            ..Definition::new(Kind::String, config.required)
        }
    }
}

impl fmt::Debug for StringValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config.borrow();
        f.debug_struct("StringValidator")
            .field("required", &config.required)
            .field("min", &config.min)
            .field("max", &config.max)
            .field("allowed", &config.allowed)
            .field("disallowed", &config.disallowed)
            .field("transforms", &config.transforms.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::string;
    use serde_json::json;

    #[test]
    fn length_is_measured_in_chars() {
        // 2 chars, 8 bytes
        let v = string().min(3);
        let err = v.validate(&json!("\u{1f44b}\u{1f30d}")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BelowMinimum);
        assert_eq!(err.param("actual"), Some("2"));
    }

    #[test]
    fn email_lowercases_valid_addresses() {
        let v = string().email();
        assert_eq!(
            v.validate(&json!("EXAMPLE@Gmail.com")).unwrap(),
            json!("example@gmail.com")
        );
    }

    #[test]
    fn email_requires_dotted_domain() {
        let v = string().email();
        let err = v.validate(&json!("example@test")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEmail);
        assert_eq!(err.message(), "Invalid email address");
    }

    #[test]
    fn paired_handles_share_configuration() {
        let required = string();
        let optional = required.optional();
        assert!(!required.is_required());

        // A bound added through one handle is seen by the other.
        let optional = optional.min(5);
        assert!(required.validate(&json!("ab")).is_err());

        let required = optional.required();
        assert_eq!(required.validate(&json!("hello")).unwrap(), json!("hello"));
    }
}
