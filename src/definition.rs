//! Introspection snapshots of validator configuration.
//!
//! A [`Definition`] is a plain structural copy of a validator's
//! configuration — type tag, required flag, bounds, enumerations, and
//! nested shape — suitable for documentation or client-facing schema
//! export. Custom transforms are opaque functions and are not captured.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::core::Kind;

/// Data-only description of a validator's configuration.
///
/// Snapshots are structurally comparable: calling
/// [`definition`](crate::Validate::definition) twice on the same
/// validator yields equal values.
///
/// # Examples
///
/// ```
/// use shapecheck::{string, Kind, Validate};
///
/// let def = string().min(3).definition();
/// assert_eq!(def.kind, Kind::String);
/// assert_eq!(def.min, Some(3.0));
/// assert!(def.required);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Definition {
    /// The validator's kind tag.
    #[serde(rename = "type")]
    pub kind: Kind,
    /// Whether an absent input fails validation.
    pub required: bool,
    /// Configured minimum (string/array length, number value).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Configured maximum.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Whitelisted values, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<Value>>,
    /// Blacklisted values, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disallowed: Option<Vec<Value>>,
    /// Unknown-key policy (object kind only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown: Option<bool>,
    /// Nested shape (container kinds only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Items>,
}

/// Nested shape of a container definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Items {
    /// The array element definition.
    Element(Box<Definition>),
    /// Object field definitions, in declaration order.
    Fields(IndexMap<String, Definition>),
}

impl Definition {
    pub(crate) fn new(kind: Kind, required: bool) -> Self {
        Self {
            kind,
            required,
            min: None,
            max: None,
            allowed: None,
            disallowed: None,
            unknown: None,
            items: None,
        }
    }
}
