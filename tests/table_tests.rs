//! Integration tests for table reshaping.
//!
//! Tests cover:
//! - pivoting long rows into wide rows
//! - conflict resolution between clashing cells
//! - unpivoting listed and remaining columns

#![cfg(feature = "table")]

use adjunct::table::{
    keep_first, keep_last, numeric_max, numeric_min, pivot, pivot_by, pivot_with, unpivot,
    unpivot_rest,
};
use adjunct::value::Row;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

fn rows(value: Value) -> Vec<Row> {
    serde_json::from_value(value).expect("rows must be an array of objects")
}

#[fixture]
fn long_table() -> Vec<Row> {
    rows(json!([
        {"key": "key1", "attribute": "attribute1", "value": 1},
        {"key": "key1", "attribute": "attribute3", "value": 3},
        {"key": "key2", "attribute": "attribute1", "value": 2},
        {"key": "key2", "attribute": "attribute1", "value": 8},
        {"key": "key2", "attribute": "attribute2", "value": 4},
    ]))
}

// =============================================================================
// Pivot
// =============================================================================

#[rstest]
fn pivot_merges_adjacent_rows(long_table: Vec<Row>) {
    assert_eq!(
        pivot("attribute", "value", &long_table),
        rows(json!([
            {"key": "key1", "attribute1": 1, "attribute3": 3},
            {"key": "key2", "attribute1": 2, "attribute2": 4},
        ]))
    );
}

#[rstest]
#[case::keep_first(keep_first, 2)]
#[case::keep_last(keep_last, 8)]
#[case::numeric_min(numeric_min, 2)]
#[case::numeric_max(numeric_max, 8)]
fn pivot_resolves_clashing_cells(
    long_table: Vec<Row>,
    #[case] resolve: fn(&Value, &Value) -> Value,
    #[case] expected: i64,
) {
    let wide = pivot_with(resolve, "attribute", "value", &long_table);
    assert_eq!(wide[1]["attribute1"], json!(expected));
}

#[rstest]
fn pivot_with_custom_resolver_sees_both_values(long_table: Vec<Row>) {
    let collect = |existing: &Value, incoming: &Value| match existing {
        Value::Array(items) => {
            let mut items = items.clone();
            items.push(incoming.clone());
            Value::Array(items)
        }
        other => json!([other, incoming]),
    };
    let wide = pivot_with(collect, "attribute", "value", &long_table);
    assert_eq!(wide[1]["attribute1"], json!([2, 8]));
}

#[rstest]
fn pivot_by_matches_pivot(long_table: Vec<Row>) {
    let by_attribute = pivot_by("attribute", "value");
    assert_eq!(by_attribute(&long_table), pivot("attribute", "value", &long_table));
}

#[rstest]
fn pivot_groups_by_every_other_field() {
    let long = rows(json!([
        {"key": "k", "region": "eu", "attribute": "a", "value": 1},
        {"key": "k", "region": "us", "attribute": "a", "value": 2},
    ]));
    assert_eq!(pivot("attribute", "value", &long).len(), 2);
}

#[rstest]
fn pivot_treats_integer_and_float_identities_as_equal() {
    let long = rows(json!([
        {"key": 1, "attribute": "a", "value": 1},
        {"key": 1.0, "attribute": "b", "value": 2},
    ]));
    assert_eq!(
        pivot("attribute", "value", &long),
        rows(json!([{"key": 1, "a": 1, "b": 2}]))
    );
}

#[rstest]
fn pivot_keeps_null_values() {
    let long = rows(json!([{"key": "k", "attribute": "a", "value": null}]));
    assert_eq!(
        pivot("attribute", "value", &long),
        rows(json!([{"key": "k", "a": null}]))
    );
}

// =============================================================================
// Unpivot
// =============================================================================

#[rstest]
fn unpivot_listed_columns() {
    let wide = rows(json!([{"key": "k1", "a1": 1, "a2": 2}]));
    assert_eq!(
        unpivot(&["a1", "a2"], "attribute", "value", &wide),
        rows(json!([
            {"attribute": "a1", "value": 1, "key": "k1"},
            {"attribute": "a2", "value": 2, "key": "k1"},
        ]))
    );
}

#[rstest]
fn unpivot_skips_missing_and_repeated_columns() {
    let wide = rows(json!([{"key": "k1", "a1": 1}]));
    assert_eq!(
        unpivot(&["a1", "missing", "a1"], "attribute", "value", &wide),
        rows(json!([{"attribute": "a1", "value": 1, "key": "k1"}]))
    );
}

#[rstest]
fn unpivot_carried_field_wins_over_value_column() {
    let wide = rows(json!([{"value": "kept", "a1": 1}]));
    assert_eq!(
        unpivot(&["a1"], "attribute", "value", &wide),
        rows(json!([{"attribute": "a1", "value": "kept"}]))
    );
}

#[rstest]
fn unpivot_rest_carries_only_kept_fields() {
    let wide = rows(json!([
        {"key": "k1", "a1": 1, "a2": 2},
        {"key": "k2", "a1": 3},
    ]));
    assert_eq!(
        unpivot_rest(&["key"], "attribute", "value", &wide),
        rows(json!([
            {"attribute": "a1", "value": 1, "key": "k1"},
            {"attribute": "a2", "value": 2, "key": "k1"},
            {"attribute": "a1", "value": 3, "key": "k2"},
        ]))
    );
}

#[rstest]
fn unpivot_rest_with_absent_kept_field() {
    let wide = rows(json!([{"a1": 1}]));
    assert_eq!(
        unpivot_rest(&["key"], "attribute", "value", &wide),
        rows(json!([{"attribute": "a1", "value": 1}]))
    );
}
