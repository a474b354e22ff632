//! Boolean validator.

use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use crate::core::config::{Pipeline, Shared, run_pipeline, shared};
use crate::core::{CustomError, Kind, Validate, ValidationError};
use crate::definition::Definition;

struct BooleanConfig {
    required: bool,
    transforms: Pipeline<bool>,
}

/// Validates booleans, coercing the literal strings `"true"`/`"false"`.
///
/// Booleans carry no bounds or enumerations; only presence, type, and
/// the custom pipeline apply. Handles alias their configuration; see
/// [`StringValidator`](crate::StringValidator) for the sharing contract.
///
/// # Examples
///
/// ```
/// use shapecheck::{boolean, Validate};
/// use serde_json::json;
///
/// let flag = boolean();
/// assert_eq!(flag.validate(&json!("false")).unwrap(), json!(false));
/// assert!(flag.validate(&json!("yes")).is_err());
/// ```
#[derive(Clone)]
pub struct BooleanValidator {
    config: Shared<BooleanConfig>,
}

impl BooleanValidator {
    pub(crate) fn new() -> Self {
        Self {
            config: shared(BooleanConfig {
                required: true,
                transforms: Vec::new(),
            }),
        }
    }

    /// Appends a custom transform to the pipeline.
    pub fn custom(self, transform: impl Fn(bool) -> Result<bool, CustomError> + 'static) -> Self {
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

impl Validate for BooleanValidator {
    fn kind(&self) -> Kind {
        Kind::Boolean
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

        let input = match value {
            Value::String(text) => match text.as_str() {
                "true" => true,
                "false" => false,
                _ => return Err(ValidationError::invalid_boolean(path)),
            },
            Value::Bool(flag) => *flag,
            _ => return Err(ValidationError::type_mismatch(path, Kind::Boolean)),
        };

        let output = run_pipeline(&config.transforms, path, input)?;
        Ok(Some(Value::Bool(output)))
    }

    fn definition(&self) -> Definition {
        let config = self.config.borrow();
        Definition::new(Kind::Boolean, config.required)
    }
}

impl fmt::Debug for BooleanValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config.borrow();
        f.debug_struct("BooleanValidator")
            .field("required", &config.required)
            .field("transforms", &config.transforms.len())
            .finish()
    }
}
