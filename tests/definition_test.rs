//! Definition introspection: structural snapshots, idempotence, and
//! JSON export.

use pretty_assertions::assert_eq;
use serde_json::json;
use shapecheck::definition::Items;
use shapecheck::prelude::*;

// ============================================================================
// SCALAR SNAPSHOTS
// ============================================================================

#[test]
fn scalar_definition_captures_configuration() {
    let def = string().min(2).max(8).whitelist(["a", "ab"]).definition();
    assert_eq!(def.kind, Kind::String);
    assert!(def.required);
    assert_eq!(def.min, Some(2.0));
    assert_eq!(def.max, Some(8.0));
    assert_eq!(def.allowed, Some(vec![json!("a"), json!("ab")]));
    assert_eq!(def.disallowed, None);
    assert_eq!(def.items, None);
}

#[test]
fn definition_reflects_the_shared_required_flag() {
    let schema = number();
    let optional = schema.optional();
    // Both handles snapshot the same configuration.
    assert!(!schema.definition().required);
    assert!(!optional.definition().required);
}

#[test]
fn snapshots_are_idempotent() {
    let schema = object(fields! {
        "name" => string().min(1),
        "scores" => array(number().max(10.0)).optional(),
    })
    .unknown(true);
    assert_eq!(schema.definition(), schema.definition());
}

#[test]
fn custom_transforms_are_not_introspectable() {
    let plain = string().min(3).definition();
    let with_transforms = string().min(3).custom(|v| Ok(v)).email().definition();
    assert_eq!(plain, with_transforms);
}

// ============================================================================
// CONTAINER SNAPSHOTS
// ============================================================================

#[test]
fn array_definition_nests_the_element() {
    let def = array(number().min(1.0)).max(5).definition();
    assert_eq!(def.kind, Kind::Array);
    assert_eq!(def.max, Some(5.0));
    match def.items {
        Some(Items::Element(element)) => {
            assert_eq!(element.kind, Kind::Number);
            assert_eq!(element.min, Some(1.0));
        }
        other => panic!("expected element items, got {other:?}"),
    }
}

#[test]
fn object_definition_nests_fields_in_declaration_order() {
    let def = object(fields! {
        "foo" => string(),
        "bar" => number().optional(),
    })
    .definition();
    assert_eq!(def.kind, Kind::Object);
    assert_eq!(def.unknown, Some(false));
    match def.items {
        Some(Items::Fields(items)) => {
            let names: Vec<_> = items.keys().cloned().collect();
            assert_eq!(names, ["foo", "bar"]);
            assert!(items["foo"].required);
            assert!(!items["bar"].required);
        }
        other => panic!("expected field items, got {other:?}"),
    }
}

// ============================================================================
// JSON EXPORT
// ============================================================================

#[test]
fn definitions_serialize_for_schema_export() {
    let def = object(fields! {
        "age" => number().min(13.0),
    })
    .definition();
    let exported = serde_json::to_value(&def).unwrap();
    assert_eq!(
        exported,
        json!({
            "type": "object",
            "required": true,
            "unknown": false,
            "items": {
                "age": { "type": "number", "required": true, "min": 13.0 }
            }
        })
    );
}
