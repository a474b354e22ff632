//! Array validator.

use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use crate::core::config::{Pipeline, Shared, enforced_len, run_pipeline, shared};
use crate::core::error::Measured;
use crate::core::path::join_index;
use crate::core::{CustomError, Kind, Validate, ValidationError};
use crate::definition::{Definition, Items};

struct ArrayConfig {
    required: bool,
    min: Option<usize>,
    max: Option<usize>,
    element: Box<dyn Validate>,
    transforms: Pipeline<Vec<Value>>,
}

/// Validates a sequence by delegating every element to a single child
/// validator, in index order, after checking length bounds.
///
/// All scalar semantics live in the child: `array(number())` coerces
/// `[1, "2"]` to `[1, 2]` because the number validator does. Element
/// errors carry the composed `parent[index]` path. The array's own
/// custom pipeline runs last, over the whole normalized sequence.
///
/// # Examples
///
/// ```
/// use shapecheck::{array, number, Validate};
/// use serde_json::json;
///
/// let scores = array(number().min(1.0));
/// assert_eq!(scores.validate(&json!([1, "2"])).unwrap(), json!([1, 2]));
/// assert!(scores.validate(&json!([1, "x"])).is_err());
/// ```
#[derive(Clone)]
pub struct ArrayValidator {
    config: Shared<ArrayConfig>,
}

impl ArrayValidator {
    pub(crate) fn new(element: Box<dyn Validate>) -> Self {
        Self {
            config: shared(ArrayConfig {
                required: true,
                min: None,
                max: None,
                element,
                transforms: Vec::new(),
            }),
        }
    }

    /// Sets the minimum element count (inclusive).
    ///
    /// A bound of exactly `0` is treated as unset and never enforced.
    pub fn min(self, min: usize) -> Self {
        self.config.borrow_mut().min = Some(min);
        self
    }

    /// Sets the maximum element count (inclusive).
    ///
    /// A bound of exactly `0` is treated as unset and never enforced.
    pub fn max(self, max: usize) -> Self {
        self.config.borrow_mut().max = Some(max);
        self
    }

    /// Appends a custom transform over the whole validated sequence.
    pub fn custom(
        self,
        transform: impl Fn(Vec<Value>) -> Result<Vec<Value>, CustomError> + 'static,
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

impl Validate for ArrayValidator {
    fn kind(&self) -> Kind {
        Kind::Array
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
        let Value::Array(items) = value else {
            return Err(ValidationError::type_mismatch(path, Kind::Array));
        };

        if let Some(min) = enforced_len(config.min) {
            if items.len() < min {
                return Err(ValidationError::below_minimum(
                    path,
                    Measured::Elements,
                    min,
                    items.len(),
                ));
            }
        }
        if let Some(max) = enforced_len(config.max) {
            if items.len() > max {
                return Err(ValidationError::above_maximum(
                    path,
                    Measured::Elements,
                    max,
                    items.len(),
                ));
            }
        }

        let mut output = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let validated = config
                .element
                .validate_at(Some(item), &join_index(path, index))?;
            output.push(validated.unwrap_or_else(|| item.clone()));
        }

        let output = run_pipeline(&config.transforms, path, output)?;
        Ok(Some(Value::Array(output)))
    }

    fn definition(&self) -> Definition {
        let config = self.config.borrow();
        Definition {
            min: config.min.map(|m| m as f64),
            max: config.max.map(|m| m as f64),
            items: Some(Items::Element(Box::new(config.element.definition()))),
            ..Definition::new(Kind::Array, config.required)
        }
    }
}

impl fmt::Debug for ArrayValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config.borrow();
        f.debug_struct("ArrayValidator")
            .field("required", &config.required)
            .field("min", &config.min)
            .field("max", &config.max)
            .field("element", &config.element.kind())
            .field("transforms", &config.transforms.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;
    use crate::validators::{array, number};
    use serde_json::json;

    #[test]
    fn element_errors_carry_the_index_path() {
        let v = array(number());
        let err = v.validate(&json!([1, "x", 3])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidNumber);
        assert_eq!(err.path(), "[1]");
    }

    #[test]
    fn elements_validate_in_index_order() {
        let v = array(number());
        let err = v.validate(&json!(["x", "y"])).unwrap_err();
        assert_eq!(err.path(), "[0]");
    }
}
