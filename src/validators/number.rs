//! Number validator.
//!
//! Numbers are validated in the `f64` domain. A string input is coerced
//! via numeric parse before any other check, so `"2"` and `2` are
//! interchangeable at the input boundary; normalization keeps integral
//! results integral so the output compares equal to plain JSON numbers.

use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use crate::core::config::{Pipeline, Shared, enforced_num, run_pipeline, shared};
use crate::core::error::Measured;
use crate::core::{CustomError, Kind, Validate, ValidationError};
use crate::definition::Definition;

struct NumberConfig {
    required: bool,
    min: Option<f64>,
    max: Option<f64>,
    allowed: Option<Vec<f64>>,
    disallowed: Option<Vec<f64>>,
    transforms: Pipeline<f64>,
}

/// Validates numbers against value bounds, enumerations, and the custom
/// pipeline, coercing numeric strings on the way in.
///
/// Handles alias their configuration; see [`StringValidator`] for the
/// sharing contract.
///
/// [`StringValidator`]: crate::StringValidator
///
/// # Examples
///
/// ```
/// use shapecheck::{number, Validate};
/// use serde_json::json;
///
/// let rating = number().min(1.0).max(10.0);
/// assert_eq!(rating.validate(&json!("7")).unwrap(), json!(7));
/// assert!(rating.validate(&json!(11)).is_err());
/// ```
#[derive(Clone)]
pub struct NumberValidator {
    config: Shared<NumberConfig>,
}

impl NumberValidator {
    pub(crate) fn new() -> Self {
        Self {
            config: shared(NumberConfig {
                required: true,
                min: None,
                max: None,
                allowed: None,
                disallowed: None,
                transforms: Vec::new(),
            }),
        }
    }

    /// Sets the minimum value (inclusive).
    ///
    /// A bound of exactly `0` is treated as unset and never enforced.
    pub fn min(self, min: f64) -> Self {
        self.config.borrow_mut().min = Some(min);
        self
    }

    /// Sets the maximum value (inclusive).
    ///
    /// A bound of exactly `0` is treated as unset and never enforced.
    pub fn max(self, max: f64) -> Self {
        self.config.borrow_mut().max = Some(max);
        self
    }

    /// Restricts the value to the given set.
    pub fn whitelist(self, allowed: impl IntoIterator<Item = f64>) -> Self {
        self.config.borrow_mut().allowed = Some(allowed.into_iter().collect());
        self
    }

    /// Rejects any value in the given set.
    pub fn blacklist(self, disallowed: impl IntoIterator<Item = f64>) -> Self {
        self.config.borrow_mut().disallowed = Some(disallowed.into_iter().collect());
        self
    }

    /// Appends a custom transform to the pipeline.
    pub fn custom(self, transform: impl Fn(f64) -> Result<f64, CustomError> + 'static) -> Self {
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

/// Re-encodes a pipeline result as a JSON number, keeping integral
/// values in the integer representation so they compare equal to plain
/// JSON integers.
fn number_value(value: f64) -> Option<Value> {
    if value.is_finite()
        && value.fract() == 0.0
        && (i64::MIN as f64..=i64::MAX as f64).contains(&value)
    {
        Some(Value::from(value as i64))
    } else {
        serde_json::Number::from_f64(value).map(Value::Number)
    }
}

impl Validate for NumberValidator {
    fn kind(&self) -> Kind {
        Kind::Number
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

        let input: f64 = match value {
            Value::String(text) => text
                .trim()
                .parse()
                .ok()
                .filter(|parsed: &f64| parsed.is_finite())
                .ok_or_else(|| ValidationError::invalid_number(path))?,
            Value::Number(number) => number
                .as_f64()
                .ok_or_else(|| ValidationError::invalid_number(path))?,
            _ => return Err(ValidationError::type_mismatch(path, Kind::Number)),
        };

        if let Some(min) = enforced_num(config.min) {
            if input < min {
                return Err(ValidationError::below_minimum(
                    path,
                    Measured::Value,
                    min,
                    input,
                ));
            }
        }
        if let Some(max) = enforced_num(config.max) {
            if input > max {
                return Err(ValidationError::above_maximum(
                    path,
                    Measured::Value,
                    max,
                    input,
                ));
            }
        }
        if let Some(allowed) = &config.allowed {
            if !allowed.contains(&input) {
                return Err(ValidationError::not_whitelisted(path, allowed));
            }
        }
        if let Some(disallowed) = &config.disallowed {
            if disallowed.contains(&input) {
                return Err(ValidationError::blacklisted(path, disallowed));
            }
        }

        let output = run_pipeline(&config.transforms, path, input)?;
        let normalized =
            number_value(output).ok_or_else(|| ValidationError::invalid_number(path))?;
        Ok(Some(normalized))
    }

    fn definition(&self) -> Definition {
        let config = self.config.borrow();
        Definition {
            min: config.min,
            max: config.max,
            allowed: config
                .allowed
                .as_ref()
                .map(|values| values.iter().copied().filter_map(number_value).collect()),
            disallowed: config
                .disallowed
                .as_ref()
                .map(|values| values.iter().copied().filter_map(number_value).collect()),
            ..Definition::new(Kind::Number, config.required)
        }
    }
}

impl fmt::Debug for NumberValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config.borrow();
        f.debug_struct("NumberValidator")
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
    use crate::core::ErrorKind;
    use crate::validators::number;
    use serde_json::json;

    #[test]
    fn numeric_strings_coerce_before_checks() {
        let v = number().min(1.0).max(10.0);
        assert_eq!(v.validate(&json!("2")).unwrap(), json!(2));
        assert_eq!(v.validate(&json!(" 2.5 ")).unwrap(), json!(2.5));
    }

    #[test]
    fn non_numeric_strings_fail_coercion() {
        let v = number();
        let err = v.validate(&json!("test")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidNumber);
        assert_eq!(err.message(), "Invalid number");
        assert!(v.validate(&json!("NaN")).is_err());
    }

    #[test]
    fn integral_results_stay_integral() {
        let v = number().custom(|n| Ok(n + n));
        assert_eq!(v.validate(&json!(1)).unwrap(), json!(2));
        assert_eq!(v.validate(&json!(1.5)).unwrap(), json!(3.0));
    }

    #[test]
    fn booleans_are_not_numbers() {
        let err = number().validate(&json!(true)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.message(), "Invalid type expected: number");
    }
}
