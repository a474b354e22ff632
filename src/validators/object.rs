//! Object validator.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::core::config::{Pipeline, Shared, run_pipeline, shared};
use crate::core::path::join_key;
use crate::core::{CustomError, Kind, Validate, ValidationError};
use crate::definition::{Definition, Items};

struct ObjectConfig {
    required: bool,
    allow_unknown: bool,
    fields: IndexMap<String, Box<dyn Validate>>,
    transforms: Pipeline<Map<String, Value>>,
}

/// Validates a keyed map against a declared field shape.
///
/// Field declaration order is preserved and significant: the
/// missing-required-key check reports the first missing field in
/// declaration order. Each present declared field is replaced by its
/// child-validated result (so field-level coercion applies); undeclared
/// fields are rejected unless [`unknown(true)`](Self::unknown) is set.
/// The object-level custom pipeline runs last, over the validated map.
///
/// An optional object skips the missing-required-key check entirely —
/// there is nothing required about the object's own presence — but
/// fields that are present still validate with their own rules.
///
/// # Examples
///
/// ```
/// use shapecheck::{fields, number, object, string, Validate};
/// use serde_json::json;
///
/// let user = object(fields! {
///     "name" => string().min(1),
///     "age" => number().optional(),
/// });
/// let value = user.validate(&json!({ "name": "alice" })).unwrap();
/// assert_eq!(value, json!({ "name": "alice" }));
/// assert!(user.validate(&json!({ "age": 30 })).is_err());
/// ```
#[derive(Clone)]
pub struct ObjectValidator {
    config: Shared<ObjectConfig>,
}

impl ObjectValidator {
    pub(crate) fn new(fields: impl IntoIterator<Item = (String, Box<dyn Validate>)>) -> Self {
        Self {
            config: shared(ObjectConfig {
                required: true,
                allow_unknown: false,
                fields: fields.into_iter().collect(),
                transforms: Vec::new(),
            }),
        }
    }

    /// Sets the unknown-key policy: `true` permits fields absent from
    /// the declared shape, `false` (the default) rejects them.
    pub fn unknown(self, enabled: bool) -> Self {
        self.config.borrow_mut().allow_unknown = enabled;
        self
    }

    /// Appends a custom transform over the whole validated object.
    pub fn custom(
        self,
        transform: impl Fn(Map<String, Value>) -> Result<Map<String, Value>, CustomError> + 'static,
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

impl Validate for ObjectValidator {
    fn kind(&self) -> Kind {
        Kind::Object
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
        let Value::Object(entries) = value else {
            return Err(ValidationError::type_mismatch(path, Kind::Object));
        };

        if config.required {
            for (name, field) in &config.fields {
                if field.is_required() && !entries.contains_key(name) {
                    return Err(ValidationError::missing_required_key(&join_key(path, name)));
                }
            }
        }

        let mut output = entries.clone();
        for (name, item) in entries {
            match config.fields.get(name) {
                Some(field) => {
                    if let Some(validated) = field.validate_at(Some(item), &join_key(path, name))? {
                        output.insert(name.clone(), validated);
                    }
                }
                None if config.allow_unknown => {}
                None => {
                    return Err(ValidationError::unknown_key(&join_key(path, name), name));
                }
            }
        }

        let output = run_pipeline(&config.transforms, path, output)?;
        Ok(Some(Value::Object(output)))
    }

    fn definition(&self) -> Definition {
        let config = self.config.borrow();
        Definition {
            unknown: Some(config.allow_unknown),
            items: Some(Items::Fields(
                config
                    .fields
                    .iter()
                    .map(|(name, field)| (name.clone(), field.definition()))
                    .collect(),
            )),
            ..Definition::new(Kind::Object, config.required)
        }
    }
}

impl fmt::Debug for ObjectValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config.borrow();
        f.debug_struct("ObjectValidator")
            .field("required", &config.required)
            .field("unknown", &config.allow_unknown)
            .field("fields", &config.fields.keys().collect::<Vec<_>>())
            .field("transforms", &config.transforms.len())
            .finish()
    }
}
