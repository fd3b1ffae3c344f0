//! Integration tests for the small helper families.
//!
//! Tests cover:
//! - math: ranges, averages and operand order
//! - logic and relation: truthiness, identifiers, length comparisons
//! - types: value classification
//! - monads and function helpers

#![cfg(all(
    feature = "math",
    feature = "logic",
    feature = "relation",
    feature = "types",
    feature = "monads"
))]

use adjunct::function::{apply_n, constant, flip, identity, knit};
use adjunct::logic::{count_if, is_falsy};
use adjunct::math::{divide_by, get_range, is_even, modulo_by, range_step, subtract_by};
use adjunct::monads::{EXPECTED_JUST, cat_maybes, explode_either, explode_maybe};
use adjunct::relation::{id_equals, id_prop_ne, length_gt, length_lte, is_not_equals};
use adjunct::types::{has, is_empty, is_float, is_nil, is_object_id, is_valid};
use adjunct::value::Row;
use rstest::rstest;
use serde_json::{Value, json};

// =============================================================================
// math
// =============================================================================

#[rstest]
fn operand_order_puts_the_fixed_argument_first() {
    assert_eq!(divide_by(2, 10), 5);
    assert_eq!(modulo_by(3, 10), 1);
    assert_eq!(subtract_by(1.5, 4.0), 2.5);
}

#[rstest]
#[case(0.0, 0.5, 2.0, vec![0.0, 0.5, 1.0, 1.5, 2.0])]
#[case(1.0, 1.0, 1.0, vec![1.0])]
#[case(0.0, 0.0, 1.0, vec![])]
#[case(3.0, 1.0, 0.0, vec![])]
fn range_step_cases(#[case] start: f64, #[case] step: f64, #[case] stop: f64, #[case] expected: Vec<f64>) {
    assert_eq!(range_step(start, step, stop), expected);
}

#[rstest]
fn get_range_skips_nan() {
    assert_eq!(get_range(&[f64::NAN, 2.0]), Some((2.0, 2.0)));
    assert_eq!(get_range(&[f64::NAN]), None);
    assert!(is_even(-4));
}

// =============================================================================
// logic and relation
// =============================================================================

#[rstest]
fn count_if_counts_falsy_values() {
    let values = [json!(0), json!(""), json!("x"), json!(null), json!(false)];
    assert_eq!(count_if(is_falsy, &values), 4);
}

#[rstest]
#[case(json!(12), json!("12"), true)]
#[case(json!("ABC"), json!("abc"), true)]
#[case(json!(1.5), json!("1.5"), false)]
#[case(json!(null), json!(null), true)]
#[case(json!(1), json!(2), false)]
fn id_equals_cases(#[case] left: Value, #[case] right: Value, #[case] expected: bool) {
    assert_eq!(id_equals(&left, &right), expected);
}

#[rstest]
fn id_prop_ne_on_missing_field() {
    let row: Row = serde_json::from_value(json!({"name": "x"})).expect("object");
    assert!(id_prop_ne("id", &json!(1), &row));
}

#[rstest]
fn length_comparisons_take_the_bound_first() {
    assert!(length_gt(3, &[1, 2]));
    assert!(!length_gt(2, &[1, 2]));
    assert!(length_lte(2, &[1, 2]));
    assert!(is_not_equals(&json!(1), &json!("1")));
    assert!(!is_not_equals(&json!(1), &json!(1.0)));
}

// =============================================================================
// types
// =============================================================================

#[rstest]
#[case(json!(""), true)]
#[case(json!([]), true)]
#[case(json!({}), true)]
#[case(json!(0), false)]
#[case(json!(null), false)]
fn is_empty_cases(#[case] value: Value, #[case] expected: bool) {
    assert_eq!(is_empty(&value), expected);
}

#[rstest]
fn classification() {
    assert!(is_nil(None));
    assert!(is_nil(Some(&json!(null))));
    assert!(!is_valid(Some(&json!([]))));
    assert!(is_float(&json!(0.25)));
    assert!(!is_float(&json!(2)));
    assert!(has("a", &json!({"a": null})));
    assert!(is_object_id("507f1f77bcf86cd799439011"));
    assert!(!is_object_id("507f1f77bcf86cd79943901"));
}

// =============================================================================
// monads and functions
// =============================================================================

#[rstest]
fn exploding_options_and_results() {
    assert_eq!(explode_maybe(EXPECTED_JUST, Some("x")), Ok("x"));
    assert_eq!(
        explode_maybe(EXPECTED_JUST, None::<u8>).map_err(|error| error.message),
        Err(EXPECTED_JUST.to_string())
    );
    let parsed = explode_either("12x".parse::<u8>());
    assert!(parsed.is_err());
    assert_eq!(cat_maybes([None, Some(1), None]), vec![1]);
}

#[rstest]
fn function_combinators() {
    let rows = vec![Some(json!({"id": 1})), None];
    let filled: Vec<Value> = rows
        .into_iter()
        .map(|row| row.map_or_else(|| constant(json!({}))(()), identity))
        .collect();
    assert_eq!(filled, vec![json!({"id": 1}), json!({})]);
    let subtract = flip(subtract_by::<i32>);
    assert_eq!(subtract(10, 1), 9);
    assert_eq!(apply_n(|n: u32| n + 2, 0)(5), 5);

    let functions: Vec<Box<dyn Fn(i32) -> i32>> =
        vec![Box::new(|n: i32| n + 1), Box::new(|n: i32| n * 10)];
    let knitted = knit(functions);
    assert_eq!(knitted(vec![vec![1, 2], vec![3]]), vec![vec![2, 20], vec![4]]);
}
