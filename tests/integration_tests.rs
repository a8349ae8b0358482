//! End-to-end tests exercising the public combinator API.

use serde_json::{json, Value};
use zod_parse::{
    array, boolean, enumeration, intersection, literal, null, number, object, record, schemas,
    string, tuple, undefined, union, Schema,
};

// =============================================================================
// Entry points
// =============================================================================

#[test]
fn test_parse_and_safe_parse_agree() {
    let schema = number().min(0).max(120);

    let ok = json!(42);
    assert_eq!(schema.parse(&ok).unwrap(), schema.safe_parse(&ok).unwrap());

    let bad = json!(150);
    let fault = schema.parse(&bad).unwrap_err();
    let error = schema.safe_parse(&bad).unwrap_err();
    assert_eq!(fault.errors(), error.errors());
}

#[test]
fn test_parse_fault_concatenates_all_messages() {
    let schema = object()
        .field("name", string().min(2))
        .field("age", number().min(0).max(120))
        .build_deserialize::<Value>();

    let fault = schema
        .parse(&json!({"name": "J", "age": 200}))
        .unwrap_err();
    assert_eq!(
        fault.to_string(),
        "Validation failed: name: String must be at least 2 characters long, \
         age: Number must be less than or equal to 120"
    );
}

// =============================================================================
// Representative validation scenarios
// =============================================================================

#[test]
fn test_number_window_violation() {
    let error = number().min(0).max(120).safe_parse(&json!(150)).unwrap_err();
    assert!(error.joined().contains("less than or equal to 120"));
}

#[test]
fn test_array_element_violation_is_position_tagged() {
    let schema = array(string().min(2)).min(1).max(5);
    let error = schema.safe_parse(&json!(["tag1", "a"])).unwrap_err();
    assert!(error.joined().contains("[1]"));
    assert!(error.joined().contains("at least 2 characters"));
}

#[test]
fn test_tuple_of_numbers() {
    let schema = tuple(schemas![number(), number()]);
    assert_eq!(
        schema.safe_parse(&json!([10, 20])).unwrap(),
        vec![json!(10.0), json!(20.0)]
    );
}

#[test]
fn test_object_reports_both_failing_fields() {
    let schema = object()
        .field("name", string().min(2))
        .field("age", number().min(0).max(120))
        .build_deserialize::<Value>();

    let error = schema
        .safe_parse(&json!({"name": "J", "age": 200}))
        .unwrap_err();
    assert_eq!(error.errors().len(), 2);
    assert!(error.errors()[0].starts_with("name:"));
    assert!(error.errors()[1].starts_with("age:"));
}

#[test]
fn test_union_failure_labels_every_option() {
    let error = union(schemas![string(), number()])
        .safe_parse(&json!(true))
        .unwrap_err();
    assert!(error.joined().contains("Option 0"));
    assert!(error.joined().contains("Option 1"));
}

#[test]
fn test_default_triggers_only_on_absence() {
    let schema = string().default_with(|| "x".to_string());
    assert_eq!(schema.safe_parse(&json!(null)).unwrap(), "x");
    assert_eq!(schema.safe_parse(&json!("y")).unwrap(), "y");
}

// =============================================================================
// Coercion
// =============================================================================

#[test]
fn test_string_does_not_coerce() {
    assert!(string().safe_parse(&json!(1)).is_err());
    assert!(string().safe_parse(&json!(true)).is_err());
    assert!(string().safe_parse(&json!(null)).is_err());
}

#[test]
fn test_number_coerces_only_unambiguous_strings() {
    assert_eq!(number().safe_parse(&json!("1e3")).unwrap(), 1000.0);
    assert!(number().safe_parse(&json!("")).is_err());
    assert!(number().safe_parse(&json!("1,5")).is_err());
}

#[test]
fn test_boolean_coerces_only_true_false_strings() {
    assert!(boolean().safe_parse(&json!("TrUe")).unwrap());
    assert!(boolean().safe_parse(&json!("0")).is_err());
    assert!(boolean().safe_parse(&json!("")).is_err());
}

#[test]
fn test_null_and_undefined_accept_only_absence() {
    assert!(null().safe_parse(&json!(null)).is_ok());
    assert!(undefined().safe_parse(&json!(null)).is_ok());
    assert!(null().safe_parse(&json!(false)).is_err());
    assert!(undefined().safe_parse(&json!(0)).is_err());
}

// =============================================================================
// Independent error collection
// =============================================================================

#[test]
fn test_k_violations_yield_k_messages() {
    // Three independent violations across two fields and one element.
    let schema = object()
        .field("tags", array(string().min(2)))
        .field("age", number().min(0))
        .field("name", string().min(2))
        .build_deserialize::<Value>();

    let error = schema
        .safe_parse(&json!({"tags": ["ok", "x"], "age": -1, "name": "J"}))
        .unwrap_err();
    assert_eq!(error.errors().len(), 3);
}

#[test]
fn test_chaining_is_idempotent_in_outcome() {
    let once = string().min(3);
    let twice = string().min(3).min(3);

    assert_eq!(
        once.safe_parse(&json!("abc")).is_ok(),
        twice.safe_parse(&json!("abc")).is_ok()
    );

    // Duplicate checks both evaluate; nothing is deduplicated.
    let error = twice.safe_parse(&json!("ab")).unwrap_err();
    assert_eq!(error.errors().len(), 2);
    assert_eq!(error.errors()[0], error.errors()[1]);
}

// =============================================================================
// Modifiers
// =============================================================================

#[test]
fn test_transform_round_trip() {
    let base = string().min(1);
    let transformed = string().min(1).transform(|value| value.len());

    let input = json!("hello");
    assert_eq!(
        transformed.parse(&input).unwrap(),
        base.parse(&input).unwrap().len()
    );
}

#[test]
fn test_nullable_passes_absence_through() {
    let schema = number().min(0).nullable();
    assert_eq!(schema.parse(&json!(null)).unwrap(), None);
    assert_eq!(schema.parse(&json!(3)).unwrap(), Some(3.0));
    assert!(schema.safe_parse(&json!(-1)).is_err());
}

#[test]
fn test_refine_then_transform_sees_pre_transform_value() {
    let schema = string()
        .refine(|value| value.len() <= 3, "too long before transform")
        .transform(|value| format!("{value}{value}"));

    assert_eq!(schema.parse(&json!("ab")).unwrap(), "abab");
    assert!(schema.safe_parse(&json!("abcd")).is_err());
}

#[test]
fn test_transform_then_refine_sees_post_transform_value() {
    let schema = string()
        .transform(|value| format!("{value}{value}"))
        .refine(|value| value.len() <= 3, "too long after transform");

    assert_eq!(schema.parse(&json!("a")).unwrap(), "aa");
    // "ab" doubles to "abab", length 4, rejected after the transform.
    assert!(schema.safe_parse(&json!("ab")).is_err());
}

#[test]
fn test_transform_failure_is_wrapped() {
    let schema = number().try_transform(|value| {
        if value == 0.0 {
            Err("division by zero".to_string())
        } else {
            Ok(100.0 / value)
        }
    });

    assert_eq!(schema.parse(&json!(4)).unwrap(), 25.0);
    let error = schema.safe_parse(&json!(0)).unwrap_err();
    assert_eq!(error.errors(), ["Transformation failed: division by zero"]);
}

// =============================================================================
// Literals, enums, records
// =============================================================================

#[test]
fn test_literal_and_enum() {
    assert_eq!(literal("on").parse(&json!("on")).unwrap(), "on");
    assert!(literal("on").safe_parse(&json!("off")).is_err());

    let level = enumeration(["debug", "info", "warn", "error"]);
    assert_eq!(level.parse(&json!("warn")).unwrap(), "warn");
    let error = level.safe_parse(&json!("trace")).unwrap_err();
    assert!(error
        .joined()
        .contains("Valid values: debug, info, warn, error"));
}

#[test]
fn test_record_of_numbers() {
    let schema = record(number().min(0));
    let parsed = schema.parse(&json!({"alice": 3, "bob": 5})).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed["bob"], 5.0);

    let error = schema.safe_parse(&json!({"eve": -1})).unwrap_err();
    assert_eq!(
        error.errors(),
        ["eve: Number must be greater than or equal to 0"]
    );
}

// =============================================================================
// Objects
// =============================================================================

#[derive(Debug, PartialEq, serde::Deserialize)]
struct Profile {
    username: String,
    age: f64,
    newsletter: Option<bool>,
}

#[test]
fn test_object_with_optional_field_via_serde() {
    let schema = object()
        .field("username", string().min(3))
        .field("age", number().min(13))
        .optional_boolean("newsletter")
        .build_deserialize::<Profile>();

    let full = schema
        .parse(&json!({"username": "piash", "age": 30, "newsletter": true}))
        .unwrap();
    assert_eq!(full.newsletter, Some(true));

    let minimal = schema
        .parse(&json!({"username": "piash", "age": 30}))
        .unwrap();
    assert_eq!(minimal.newsletter, None);
}

#[test]
fn test_strict_object_rejects_unknown_keys() {
    let schema = object()
        .string("name")
        .build_deserialize::<Value>()
        .strict();

    assert!(schema.safe_parse(&json!({"name": "a"})).is_ok());

    let error = schema
        .safe_parse(&json!({"name": "a", "debug": true}))
        .unwrap_err();
    assert_eq!(error.errors(), ["Unrecognized key(s) in object: debug"]);
}

#[test]
fn test_nested_objects() {
    let address = object()
        .field("city", string().min(1))
        .field("zip", string().length(5))
        .build_deserialize::<Value>();

    let schema = object()
        .field("name", string().min(1))
        .field("address", address)
        .build_deserialize::<Value>();

    let error = schema
        .safe_parse(&json!({"name": "a", "address": {"city": "", "zip": "123"}}))
        .unwrap_err();
    assert_eq!(
        error.errors(),
        [
            "address: city: String must be at least 1 characters long",
            "address: zip: String must be exactly 5 characters long",
        ]
    );
}

// =============================================================================
// Union / intersection
// =============================================================================

#[test]
fn test_union_is_ordered_fallback_not_best_match() {
    // "42" satisfies both; the first listed alternative takes it.
    let string_first = union(schemas![string(), number()]);
    assert_eq!(string_first.parse(&json!("42")).unwrap(), json!("42"));

    let number_first = union(schemas![number(), string()]);
    assert_eq!(number_first.parse(&json!("42")).unwrap(), json!(42.0));
}

#[test]
fn test_intersection_pairs_typed_outputs() {
    let schema = intersection(string().min(1), number());
    assert_eq!(
        schema.parse(&json!("7")).unwrap(),
        ("7".to_string(), 7.0)
    );

    let error = schema.safe_parse(&json!([])).unwrap_err();
    assert!(error.joined().starts_with("Left schema validation failed:"));
}

// =============================================================================
// Shared, concurrent use
// =============================================================================

#[test]
fn test_one_schema_value_validates_concurrently() {
    let schema = std::sync::Arc::new(array(number().min(0)).min(1));

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let schema = std::sync::Arc::clone(&schema);
            std::thread::spawn(move || {
                for i in 0..50 {
                    let input = json!([worker, i]);
                    assert!(schema.safe_parse(&input).is_ok());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker finishes cleanly");
    }
}
