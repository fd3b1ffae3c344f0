//! Comparisons between values and lengths.
//!
//! The `length_*` family keeps the argument order of the comparison operator:
//! `length_gt(n, list)` reads "`n` is greater than the length of `list`".

use std::cmp::Ordering;

use serde_json::Value;

use crate::value::{Row, loose_equals};

/// Returns `true` when `left` is not null and differs from `right`.
///
/// # Examples
///
/// ```rust
/// use adjunct::relation::is_not_equals;
/// use serde_json::json;
///
/// assert!(is_not_equals(&json!(1), &json!(2)));
/// assert!(!is_not_equals(&json!(1), &json!(1)));
/// assert!(!is_not_equals(&json!(null), &json!(2)));
/// ```
pub fn is_not_equals(left: &Value, right: &Value) -> bool {
    !left.is_null() && !loose_equals(left, right)
}

/// Compares two identifiers.
///
/// Identifiers may arrive as numbers or as strings (hexadecimal object ids
/// compare case-insensitively). Two ids are equal when their values are equal
/// or when their textual forms match.
///
/// # Examples
///
/// ```rust
/// use adjunct::relation::id_equals;
/// use serde_json::json;
///
/// assert!(id_equals(&json!(42), &json!("42")));
/// assert!(id_equals(
///     &json!("507F1F77BCF86CD799439011"),
///     &json!("507f1f77bcf86cd799439011")
/// ));
/// assert!(!id_equals(&json!(1), &json!(2)));
/// ```
pub fn id_equals(left: &Value, right: &Value) -> bool {
    if loose_equals(left, right) {
        return true;
    }
    match (id_text(left), id_text(right)) {
        (Some(a), Some(b)) => a.eq_ignore_ascii_case(&b),
        _ => false,
    }
}

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) if number.is_i64() || number.is_u64() => Some(number.to_string()),
        _ => None,
    }
}

/// Returns `true` when the field `name` of `row` is [`id_equals`] to `value`.
pub fn id_prop_eq(name: &str, value: &Value, row: &Row) -> bool {
    row.get(name).is_some_and(|field| id_equals(value, field))
}

/// Negation of [`id_prop_eq`].
pub fn id_prop_ne(name: &str, value: &Value, row: &Row) -> bool {
    !id_prop_eq(name, value, row)
}

/// Applies `comparison` to `n` and the length of `items`.
///
/// # Examples
///
/// ```rust
/// use adjunct::relation::compare_length;
///
/// assert!(compare_length(|n, length| n == length, 2, &[1, 2]));
/// ```
pub fn compare_length<T, C>(comparison: C, n: usize, items: &[T]) -> bool
where
    C: Fn(usize, usize) -> bool,
{
    comparison(n, items.len())
}

/// `items.len() == n`.
///
/// # Examples
///
/// ```rust
/// use adjunct::relation::length_eq;
///
/// assert!(length_eq(1, &[()]));
/// assert!(!length_eq(1, &[] as &[()]));
/// ```
pub fn length_eq<T>(n: usize, items: &[T]) -> bool {
    compare_length(|n, length| n == length, n, items)
}

/// `n > items.len()`.
///
/// # Examples
///
/// ```rust
/// use adjunct::relation::length_gt;
///
/// assert!(length_gt(2, &[()]));
/// assert!(!length_gt(2, &[(), ()]));
/// ```
pub fn length_gt<T>(n: usize, items: &[T]) -> bool {
    compare_length(|n, length| n > length, n, items)
}

/// `n >= items.len()`.
pub fn length_gte<T>(n: usize, items: &[T]) -> bool {
    compare_length(|n, length| n >= length, n, items)
}

/// `n < items.len()`.
///
/// # Examples
///
/// ```rust
/// use adjunct::relation::length_lt;
///
/// assert!(length_lt(0, &[()]));
/// assert!(!length_lt(0, &[] as &[()]));
/// ```
pub fn length_lt<T>(n: usize, items: &[T]) -> bool {
    compare_length(|n, length| n < length, n, items)
}

/// `n <= items.len()`.
pub fn length_lte<T>(n: usize, items: &[T]) -> bool {
    compare_length(|n, length| n <= length, n, items)
}

/// Orders two optional scalars.
///
/// Numbers compare numerically, strings lexicographically and booleans with
/// `false < true`. Absent values, nulls, containers and mixed kinds are
/// incomparable and yield `None`.
///
/// # Examples
///
/// ```rust
/// use adjunct::relation::compare_values;
/// use serde_json::json;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_values(Some(&json!(1)), Some(&json!(2.5))), Some(Ordering::Less));
/// assert_eq!(compare_values(Some(&json!("b")), Some(&json!("a"))), Some(Ordering::Greater));
/// assert_eq!(compare_values(None, Some(&json!(1))), None);
/// ```
pub fn compare_values(left: Option<&Value>, right: Option<&Value>) -> Option<Ordering> {
    match (left?, right?) {
        (Value::Number(a), Value::Number(b)) => a.as_f64()?.partial_cmp(&b.as_f64()?),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Orders any two optional values, including mixed kinds.
///
/// Values rank by kind first: absent, `null`, booleans, numbers, strings,
/// arrays, objects. Within a kind, numbers compare numerically, arrays
/// element by element and objects entry by entry in key order. The result is
/// [`Ordering::Equal`] exactly when the values are [`loose_equals`].
///
/// # Examples
///
/// ```rust
/// use adjunct::relation::total_compare;
/// use serde_json::json;
/// use std::cmp::Ordering;
///
/// assert_eq!(total_compare(Some(&json!(1)), Some(&json!(1.0))), Ordering::Equal);
/// assert_eq!(total_compare(Some(&json!(99)), Some(&json!("1"))), Ordering::Less);
/// assert_eq!(total_compare(None, Some(&json!(null))), Ordering::Less);
/// ```
pub fn total_compare(left: Option<&Value>, right: Option<&Value>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => compare_present(a, b),
    }
}

const fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

fn compare_present(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            _ => a.to_string().cmp(&b.to_string()),
        },
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Array(a), Value::Array(b)) => a
            .iter()
            .zip(b)
            .map(|(x, y)| compare_present(x, y))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| a.len().cmp(&b.len())),
        (Value::Object(a), Value::Object(b)) => {
            let mut left_entries: Vec<_> = a.iter().collect();
            let mut right_entries: Vec<_> = b.iter().collect();
            left_entries.sort_unstable_by(|x, y| x.0.cmp(y.0));
            right_entries.sort_unstable_by(|x, y| x.0.cmp(y.0));
            left_entries
                .iter()
                .zip(&right_entries)
                .map(|((left_key, x), (right_key, y))| {
                    left_key.cmp(right_key).then_with(|| compare_present(x, y))
                })
                .find(|ordering| ordering.is_ne())
                .unwrap_or_else(|| left_entries.len().cmp(&right_entries.len()))
        }
        _ => kind_rank(left).cmp(&kind_rank(right)),
    }
}
