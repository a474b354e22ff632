//! Path composition for error reporting.
//!
//! A path string threads through every recursive `validate` call and
//! identifies where in the input tree a failure occurred. The root is
//! the empty string; object members compose with dots, array elements
//! with bracketed indices (`"user.tags[2]"`).

/// Extends a parent path with an object field name.
#[must_use]
pub fn join_key(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_owned()
    } else {
        format!("{parent}.{key}")
    }
}

/// Extends a parent path with an array index.
#[must_use]
pub fn join_index(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}
