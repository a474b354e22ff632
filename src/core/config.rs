//! Shared configuration plumbing.
//!
//! Every validator kind keeps its settings in a kind-specific
//! configuration struct behind `Rc<RefCell<…>>`. A handle and every
//! handle derived from it (clones, [`optional`](crate::StringValidator::optional)/
//! [`required`](crate::StringValidator::required) counterparts) alias the
//! same cell, so fluent mutations through any handle are observed by all
//! of them. This aliasing is part of the contract, not an accident.
//!
//! Construction and validation must be serialized by the caller; `Rc`
//! makes that single-threaded contract a compile-time property.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::error::{CustomError, ValidationError};

/// Shared, interiorly-mutable configuration cell.
pub(crate) type Shared<C> = Rc<RefCell<C>>;

pub(crate) fn shared<C>(config: C) -> Shared<C> {
    Rc::new(RefCell::new(config))
}

// ============================================================================
// CUSTOM TRANSFORM PIPELINE
// ============================================================================

/// Ordered custom-transform pipeline over values of type `T`.
///
/// Entries are stored in registration order and applied strictly in that
/// order; each consumes the previous entry's output.
pub(crate) type Pipeline<T> = Vec<Box<dyn Fn(T) -> Result<T, CustomError>>>;

/// Applies `pipeline` to `value` as a left fold with early exit.
///
/// The first transform receives the value as normalized by the built-in
/// checks; a failure descriptor aborts immediately, carrying the current
/// path.
pub(crate) fn run_pipeline<T>(
    pipeline: &Pipeline<T>,
    path: &str,
    mut value: T,
) -> Result<T, ValidationError> {
    for transform in pipeline {
        value = transform(value)
            .map_err(|err| ValidationError::new(err.kind, err.message, path))?;
    }
    Ok(value)
}

// ============================================================================
// BOUND SEMANTICS
// ============================================================================

// A bound of exactly zero counts as unset. Long-standing behavior the
// fluent API documents on `min`/`max`; callers rely on it.

pub(crate) fn enforced_len(bound: Option<usize>) -> Option<usize> {
    bound.filter(|&b| b != 0)
}

pub(crate) fn enforced_num(bound: Option<f64>) -> Option<f64> {
    bound.filter(|&b| b != 0.0)
}
