//! Sorting records by several fields.

use std::cmp::Ordering;

use crate::relation::total_compare;
use crate::value::Row;

/// Sorts `rows` by `fields`, descending. Later fields break ties.
///
/// Values of different kinds are ordered by kind, so missing fields sort
/// last. The sort is stable.
///
/// # Examples
///
/// ```rust
/// use adjunct::list::sort_by_props;
/// use adjunct::value::Row;
/// use serde_json::json;
///
/// let rows: Vec<Row> = serde_json::from_value(json!([
///     {"a": 1, "b": 1},
///     {"a": 2, "b": 1},
///     {"a": 2, "b": 3},
/// ])).unwrap();
/// let sorted = sort_by_props(&["a", "b"], rows);
///
/// let pairs: Vec<_> = sorted.iter().map(|row| (&row["a"], &row["b"])).collect();
/// assert_eq!(pairs, vec![(&json!(2), &json!(3)), (&json!(2), &json!(1)), (&json!(1), &json!(1))]);
/// ```
pub fn sort_by_props(fields: &[&str], mut rows: Vec<Row>) -> Vec<Row> {
    rows.sort_by(|left, right| {
        fields
            .iter()
            .map(|field| total_compare(right.get(*field), left.get(*field)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    });
    rows
}

/// Compares two records by the first field in which they differ.
///
/// Each field name may carry a `+` (ascending, the default) or `-`
/// (descending) prefix. Values of different kinds are ordered by kind, with an
/// absent field first: see [`total_compare`].
///
/// # Examples
///
/// ```rust
/// use adjunct::list::compare_props;
/// use adjunct::value::Row;
/// use serde_json::json;
/// use std::cmp::Ordering;
///
/// let left: Row = serde_json::from_value(json!({"name": "ann", "age": 30})).unwrap();
/// let right: Row = serde_json::from_value(json!({"name": "ann", "age": 40})).unwrap();
///
/// assert_eq!(compare_props(&["name", "-age"], &left, &right), Ordering::Greater);
/// assert_eq!(compare_props(&["+name", "age"], &left, &right), Ordering::Less);
/// ```
pub fn compare_props(fields: &[&str], left: &Row, right: &Row) -> Ordering {
    for &field in fields {
        let (name, descending) = match field.strip_prefix('-') {
            Some(name) => (name, true),
            None => (field.strip_prefix('+').unwrap_or(field), false),
        };
        let ordering = total_compare(left.get(name), right.get(name));
        if ordering.is_ne() {
            return if descending { ordering.reverse() } else { ordering };
        }
    }
    Ordering::Equal
}

/// [`compare_props`] with the fields fixed, ready for `sort_by`.
///
/// # Examples
///
/// ```rust
/// use adjunct::list::props_comparator;
/// use adjunct::value::Row;
/// use serde_json::json;
///
/// let mut rows: Vec<Row> = serde_json::from_value(json!([{"n": 2}, {"n": 3}, {"n": 1}])).unwrap();
/// rows.sort_by(props_comparator(&["-n"]));
/// assert_eq!(rows[0]["n"], json!(3));
/// ```
pub fn props_comparator<'a>(fields: &'a [&'a str]) -> impl Fn(&Row, &Row) -> Ordering + 'a {
    move |left: &Row, right: &Row| compare_props(fields, left, right)
}
