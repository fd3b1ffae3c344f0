//! Integration tests for nested paths.
//!
//! Tests cover:
//! - updating a value along a path without touching the input
//! - container creation and conversion while writing
//! - presence checks, removal and picking

#![cfg(feature = "object")]

use adjunct::function::apply_path;
use adjunct::object::path::{
    Path, PathSegment, assoc_path_with, assoc_with, dissoc_path, dissoc_paths, dot_path_eq,
    get_path, has_dot_path, has_path, pick_path, set_dot_path, set_path,
};
use rstest::rstest;
use serde_json::{Value, json};

fn increment(value: Option<Value>) -> Value {
    json!(value.and_then(|v| v.as_i64()).unwrap_or(0) + 1)
}

// =============================================================================
// assoc_path_with
// =============================================================================

#[rstest]
fn assoc_path_with_updates_nested_value_and_leaves_input() {
    let original = json!({"a": {"b": {"c": 3}}, "sibling": [1, 2]});
    let updated = assoc_path_with(increment, &Path::parse_dot("a.b.c"), original.clone());

    assert_eq!(updated, json!({"a": {"b": {"c": 4}}, "sibling": [1, 2]}));
    assert_eq!(original, json!({"a": {"b": {"c": 3}}, "sibling": [1, 2]}));
}

#[rstest]
fn assoc_path_with_passes_none_for_missing_value() {
    let seen = std::cell::Cell::new(false);
    let updated = assoc_path_with(
        |previous| {
            seen.set(previous.is_none());
            json!("new")
        },
        &Path::parse_dot("x.y"),
        json!({}),
    );
    assert!(seen.get());
    assert_eq!(updated, json!({"x": {"y": "new"}}));
}

#[rstest]
fn assoc_path_with_empty_path_replaces_root() {
    assert_eq!(assoc_path_with(increment, &Path::new(), json!(41)), json!(42));
}

#[rstest]
#[case::index_creates_array(json!(null), "a.1", json!({"a": [null, "v"]}))]
#[case::scalar_is_replaced(json!({"a": 7}), "a.b", json!({"a": {"b": "v"}}))]
#[case::array_indexed(json!({"a": ["x", "y"]}), "a.0", json!({"a": ["v", "y"]}))]
#[case::array_padded(json!({"a": []}), "a.2", json!({"a": [null, null, "v"]}))]
#[case::object_keeps_kind(json!({"a": {"z": 0}}), "a.1", json!({"a": {"z": 0, "1": "v"}}))]
#[case::array_with_key(json!({"a": ["x"]}), "a.k", json!({"a": {"0": "x", "k": "v"}}))]
fn set_path_container_rules(#[case] input: Value, #[case] dotted: &str, #[case] expected: Value) {
    assert_eq!(set_dot_path(dotted, json!("v"), input), expected);
}

#[rstest]
#[case::largest_index(json!({}), "a.18446744073709551615", json!({"a": {"18446744073709551615": "v"}}))]
#[case::distant_index(json!({}), "a.5000000000", json!({"a": {"5000000000": "v"}}))]
#[case::distant_index_in_array(json!({"a": ["x"]}), "a.5000000000", json!({"a": {"0": "x", "5000000000": "v"}}))]
fn set_path_stores_distant_index_as_key(
    #[case] input: Value,
    #[case] dotted: &str,
    #[case] expected: Value,
) {
    let updated = set_dot_path(dotted, json!("v"), input);
    assert_eq!(updated, expected);
    assert!(has_dot_path(dotted, &updated));
}

#[rstest]
fn set_path_with_index_segment_past_usize_range_does_not_overflow() {
    let path: Path = vec![PathSegment::key("a"), PathSegment::Index(usize::MAX)].into();
    let updated = set_path(&path, json!(1), json!({"a": []}));
    assert_eq!(get_path(&path, &updated), Some(&json!(1)));
}

#[rstest]
fn assoc_with_on_missing_key_inserts() {
    let updated = assoc_with(|previous| previous.unwrap_or(Value::Null), &"c".into(), json!({"a": 1}));
    assert_eq!(updated, json!({"a": 1, "c": null}));
}

#[rstest]
fn apply_path_sees_borrowed_previous_value() {
    let path = Path::parse_dot("counter");
    let updated = apply_path(
        &path,
        |previous| json!(previous.and_then(Value::as_i64).unwrap_or(0) * 10),
        json!({"counter": 4}),
    );
    assert_eq!(updated, json!({"counter": 40}));
}

// =============================================================================
// Reading
// =============================================================================

#[rstest]
#[case(json!({}), "", false)]
#[case(json!({"a": {"b": 1}}), "a.b", true)]
#[case(json!({"a": {"b": 1}}), "a.x", false)]
#[case(json!({"a": 1}), "a.b", false)]
#[case(json!({"a": null}), "a", true)]
#[case(json!({"a": [0, 1]}), "a.1", true)]
#[case(json!({"a": [0, 1]}), "a.2", false)]
fn has_dot_path_cases(#[case] value: Value, #[case] dotted: &str, #[case] expected: bool) {
    assert_eq!(has_dot_path(dotted, &value), expected);
}

#[rstest]
fn has_path_with_explicit_segments() {
    let value = json!({"a": {"b": 1}});
    assert!(!has_path(&[], &json!({})));
    assert!(has_path(&[PathSegment::key("a"), PathSegment::key("b")], &value));
    assert!(!has_path(&[PathSegment::key("a"), PathSegment::key("x")], &value));
}

#[rstest]
fn get_path_index_segment_reads_decimal_key() {
    let value = json!({"0": "zero"});
    assert_eq!(get_path(&[PathSegment::Index(0)], &value), Some(&json!("zero")));
}

#[rstest]
fn dot_path_eq_compares_numbers_by_value() {
    assert!(dot_path_eq("a.b", &json!(2.0), &json!({"a": {"b": 2}})));
    assert!(!dot_path_eq("a.c", &json!(null), &json!({"a": {"b": 2}})));
}

// =============================================================================
// Removing and picking
// =============================================================================

#[rstest]
fn dissoc_path_missing_is_unchanged() {
    let value = json!({"a": {"b": 1}});
    assert_eq!(dissoc_path(&Path::parse_dot("a.x.y"), value.clone()), value);
    assert_eq!(dissoc_path(&Path::new(), value.clone()), value);
}

#[rstest]
fn dissoc_paths_removes_each_path() {
    let value = json!({"a": [1, 2, 3], "b": {"c": 1, "d": 2}});
    assert_eq!(
        dissoc_paths(&["a.0", "b.d"], value),
        json!({"a": [2, 3], "b": {"c": 1}})
    );
}

#[rstest]
fn pick_path_keeps_only_existing_paths() {
    let value = json!({"user": {"name": "ann", "age": 3}, "token": "x"});
    assert_eq!(
        pick_path(&["user.name", "missing", ""], &value),
        json!({"user": {"name": "ann"}})
    );
}

#[rstest]
fn set_path_then_get_path_reads_back() {
    let path = Path::parse_dot("a.2.b");
    let updated = set_path(&path, json!([true]), json!({"a": [1]}));
    assert_eq!(get_path(&path, &updated), Some(&json!([true])));
}
