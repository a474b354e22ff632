//! Range constraints: inclusive bounds for number values, string
//! lengths, and array element counts, plus the zero-bound quirk.

use rstest::rstest;
use serde_json::{Value, json};
use shapecheck::prelude::*;

// ============================================================================
// NUMBER VALUE BOUNDS
// ============================================================================

#[rstest]
#[case(json!(1))]
#[case(json!(5))]
#[case(json!(10))]
fn number_bounds_are_inclusive(#[case] input: Value) {
    let schema = number().min(1.0).max(10.0);
    assert_eq!(schema.validate(&input).unwrap(), input);
}

#[test]
fn number_below_minimum() {
    let err = number().min(1.0).max(10.0).validate(&json!(0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BelowMinimum);
    assert_eq!(err.message(), "Minimum of 1 required");
}

#[test]
fn number_above_maximum() {
    let err = number().min(1.0).max(10.0).validate(&json!(11)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AboveMaximum);
    assert_eq!(err.message(), "Maximum of 10 required");
}

// ============================================================================
// STRING LENGTH BOUNDS
// ============================================================================

#[rstest]
#[case("a")]
#[case("abcde")]
#[case("abcdefghij")]
fn string_length_bounds_are_inclusive(#[case] input: &str) {
    let schema = string().min(1).max(10);
    assert_eq!(schema.validate(&json!(input)).unwrap(), json!(input));
}

#[test]
fn string_too_short() {
    let err = string().min(1).max(10).validate(&json!("")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BelowMinimum);
    assert_eq!(err.message(), "Minimum of 1 characters required");
}

#[test]
fn string_too_long() {
    let err = string()
        .min(1)
        .max(10)
        .validate(&json!("abcdefghijk"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AboveMaximum);
    assert_eq!(err.message(), "Maximum of 10 characters required");
}

// ============================================================================
// ARRAY LENGTH BOUNDS
// ============================================================================

#[rstest]
#[case(json!([1]))]
#[case(json!([1, 2, 3, 4, 5]))]
#[case(json!([1, 2, 3, 4, 5, 6, 7, 8, 9, 10]))]
fn array_length_bounds_are_inclusive(#[case] input: Value) {
    let schema = array(number()).min(1).max(10);
    assert_eq!(schema.validate(&input).unwrap(), input);
}

#[test]
fn array_too_short() {
    let err = array(number()).min(1).validate(&json!([])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BelowMinimum);
    assert_eq!(err.message(), "Minimum of 1 elements required");
}

#[test]
fn array_too_long() {
    let err = array(number())
        .max(10)
        .validate(&json!([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AboveMaximum);
    assert_eq!(err.message(), "Maximum of 10 elements required");
}

// ============================================================================
// ZERO BOUNDS ARE UNSET
// ============================================================================

// A configured bound of exactly zero is never enforced. Documented
// behavior; callers rely on it.

#[test]
fn zero_minimum_is_never_enforced() {
    assert!(string().min(0).validate(&json!("")).is_ok());
    assert!(array(number()).min(0).validate(&json!([])).is_ok());
    assert!(number().min(0.0).validate(&json!(-5)).is_ok());
}

#[test]
fn zero_maximum_is_never_enforced() {
    assert!(string().max(0).validate(&json!("anything")).is_ok());
    assert!(number().max(0.0).validate(&json!(99)).is_ok());
}
