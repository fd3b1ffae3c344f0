//! Shared vocabulary for dynamically typed data.
//!
//! Helpers that work on records use [`serde_json::Value`] for arbitrary values
//! and [`Row`] for flat records. Key order in a `Row` follows insertion order.

use serde_json::{Map, Value};

/// A flat record: field name to value, in insertion order.
pub type Row = Map<String, Value>;

/// Returns the text used when `value` becomes an object key.
///
/// Strings are used verbatim, other scalars use their JSON text. `null` and
/// containers have no key form.
///
/// # Examples
///
/// ```rust
/// use adjunct::value::key_text;
/// use serde_json::json;
///
/// assert_eq!(key_text(&json!("a")), Some("a".to_string()));
/// assert_eq!(key_text(&json!(1)), Some("1".to_string()));
/// assert_eq!(key_text(&json!(true)), Some("true".to_string()));
/// assert_eq!(key_text(&json!(null)), None);
/// ```
pub fn key_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Structural equality that compares numbers by value.
///
/// `serde_json` keeps integers and floats apart, so `1` and `1.0` differ under
/// `==`. This treats them as equal, recursing through containers.
pub fn loose_equals(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => {
            a == b
                || matches!(
                    (a.as_f64(), b.as_f64()),
                    (Some(x), Some(y)) if x.total_cmp(&y).is_eq()
                )
        }
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| loose_equals(x, y))
        }
        (Value::Object(a), Value::Object(b)) => loose_equals_rows(a, b),
        _ => left == right,
    }
}

/// [`loose_equals`] for two records; field order is ignored.
pub fn loose_equals_rows(left: &Row, right: &Row) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .all(|(key, x)| right.get(key).is_some_and(|y| loose_equals(x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key_text_of_containers_is_none() {
        assert_eq!(key_text(&json!([1])), None);
        assert_eq!(key_text(&json!({"a": 1})), None);
    }

    #[test]
    fn test_loose_equals_mixes_integer_and_float() {
        assert!(loose_equals(&json!(1), &json!(1.0)));
        assert!(loose_equals(&json!({"a": [1, 2.0]}), &json!({"a": [1.0, 2]})));
        assert!(!loose_equals(&json!(1), &json!("1")));
    }
}
