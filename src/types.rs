//! Type predicates over dynamic values.
//!
//! Every predicate takes a [`Value`] by reference and never fails. Negated
//! forms are provided for the predicates that are most often used as filters.

use serde_json::Value;

/// Length of a hexadecimal object id.
pub const OBJECT_ID_LENGTH: usize = 24;

/// `value` is `null`.
pub fn is_null(value: &Value) -> bool {
    value.is_null()
}

/// `value` is not `null`.
pub fn is_not_null(value: &Value) -> bool {
    !value.is_null()
}

/// `value` is absent or `null`.
///
/// # Examples
///
/// ```rust
/// use adjunct::types::is_nil;
/// use serde_json::json;
///
/// assert!(is_nil(None));
/// assert!(is_nil(Some(&json!(null))));
/// assert!(!is_nil(Some(&json!(0))));
/// ```
pub fn is_nil(value: Option<&Value>) -> bool {
    value.is_none_or(Value::is_null)
}

/// Negation of [`is_nil`].
pub fn is_not_nil(value: Option<&Value>) -> bool {
    !is_nil(value)
}

/// `value` is an empty string, array or object.
///
/// `null` and scalars other than strings are never empty.
///
/// # Examples
///
/// ```rust
/// use adjunct::types::is_empty;
/// use serde_json::json;
///
/// assert!(is_empty(&json!("")));
/// assert!(is_empty(&json!([])));
/// assert!(is_empty(&json!({})));
/// assert!(!is_empty(&json!(null)));
/// assert!(!is_empty(&json!(0)));
/// ```
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Null | Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Negation of [`is_empty`].
pub fn is_not_empty(value: &Value) -> bool {
    !is_empty(value)
}

/// `value` is an object holding `key`.
pub fn has(key: &str, value: &Value) -> bool {
    value.as_object().is_some_and(|map| map.contains_key(key))
}

/// Negation of [`has`].
pub fn has_not(key: &str, value: &Value) -> bool {
    !has(key, value)
}

/// `value` is a string.
pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// `value` is an array.
pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

/// `value` is a number.
pub fn is_number(value: &Value) -> bool {
    value.is_number()
}

/// `value` is a number without a fractional part.
///
/// # Examples
///
/// ```rust
/// use adjunct::types::is_integer;
/// use serde_json::json;
///
/// assert!(is_integer(&json!(3)));
/// assert!(is_integer(&json!(3.0)));
/// assert!(!is_integer(&json!(3.5)));
/// assert!(!is_integer(&json!("3")));
/// ```
pub fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(number) if number.is_f64() => {
            number.as_f64().is_some_and(|n| n.is_finite() && n.fract() == 0.0)
        }
        Value::Number(_) => true,
        _ => false,
    }
}

/// `value` is a finite number with a fractional part.
pub fn is_float(value: &Value) -> bool {
    is_finite(value) && !is_integer(value)
}

/// `value` is a finite number.
///
/// JSON numbers are always finite, so this is true for every number.
pub fn is_finite(value: &Value) -> bool {
    value.as_f64().is_some_and(f64::is_finite)
}

/// `value` is an object.
pub fn is_object(value: &Value) -> bool {
    value.is_object()
}

/// `value` is an object or an array.
pub fn is_obj_like(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// `value` is a plain key/value object.
///
/// Dynamic values carry no prototypes, so every object is plain.
pub fn is_plain_obj(value: &Value) -> bool {
    value.is_object()
}

/// `value` is present, not `null` and not [empty](is_empty).
///
/// # Examples
///
/// ```rust
/// use adjunct::types::is_valid;
/// use serde_json::json;
///
/// assert!(is_valid(Some(&json!(0))));
/// assert!(!is_valid(Some(&json!(""))));
/// assert!(!is_valid(None));
/// ```
pub fn is_valid(value: Option<&Value>) -> bool {
    value.is_some_and(|value| !value.is_null() && !is_empty(value))
}

/// `text` is a non-empty run of hexadecimal digits, in either case.
///
/// # Examples
///
/// ```rust
/// use adjunct::types::is_hex;
///
/// assert!(is_hex("DeadBeef"));
/// assert!(!is_hex("xyz"));
/// assert!(!is_hex(""));
/// ```
pub fn is_hex(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|character| character.is_ascii_hexdigit())
}

/// `text` looks like a 24 digit hexadecimal object id.
pub fn is_object_id(text: &str) -> bool {
    text.len() == OBJECT_ID_LENGTH && is_hex(text)
}

/// `value` can serve as an identifier: an integer, or any string.
///
/// # Examples
///
/// ```rust
/// use adjunct::types::is_id_like;
/// use serde_json::json;
///
/// assert!(is_id_like(&json!(7)));
/// assert!(is_id_like(&json!("507f1f77bcf86cd799439011")));
/// assert!(!is_id_like(&json!(1.5)));
/// assert!(!is_id_like(&json!(null)));
/// ```
pub fn is_id_like(value: &Value) -> bool {
    match value {
        Value::String(_) => true,
        Value::Number(_) => is_integer(value),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_has_and_has_not() {
        let value = json!({"a": null});
        assert!(has("a", &value));
        assert!(has_not("b", &value));
        assert!(has_not("a", &json!([1])));
    }

    #[test]
    fn test_is_float_excludes_integers_and_strings() {
        assert!(is_float(&json!(0.5)));
        assert!(!is_float(&json!(2)));
        assert!(!is_float(&json!("0.5")));
    }

    #[test]
    fn test_is_object_id_requires_exact_length() {
        assert!(is_object_id("507f1f77bcf86cd799439011"));
        assert!(!is_object_id("507f1f77bcf86cd79943901"));
        assert!(!is_object_id("507f1f77bcf86cd79943901z"));
    }

    #[test]
    fn test_is_obj_like_and_nil_complements() {
        assert!(is_obj_like(&json!([])));
        assert!(!is_obj_like(&json!("[]")));
        assert!(is_not_nil(Some(&json!(false))));
        assert!(is_not_null(&json!(0)));
        assert!(is_null(&json!(null)));
        assert!(is_not_empty(&json!([0])));
    }
}
