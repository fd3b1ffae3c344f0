//! Truthiness and counting.
//!
//! A value is *falsy* when it is `false`, `0`, `""` or `null`; every other
//! value, including empty arrays and objects, is *truthy*.

use serde_json::Value;

/// Returns `true` when `value` is truthy.
///
/// # Examples
///
/// ```rust
/// use adjunct::logic::is_truthy;
/// use serde_json::json;
///
/// assert!(is_truthy(&json!(1)));
/// assert!(is_truthy(&json!([])));
/// assert!(!is_truthy(&json!(0)));
/// assert!(!is_truthy(&json!("")));
/// assert!(!is_truthy(&json!(null)));
/// ```
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Returns `true` when `value` is falsy.
pub fn is_falsy(value: &Value) -> bool {
    !is_truthy(value)
}

/// Counts the items that satisfy `predicate`.
///
/// # Examples
///
/// ```rust
/// use adjunct::logic::{count_if, is_truthy};
/// use serde_json::json;
///
/// let values = [json!(null), json!(1), json!(0), json!(true)];
/// assert_eq!(count_if(|value| is_truthy(value), &values), 2);
/// ```
pub fn count_if<T, P>(predicate: P, items: &[T]) -> usize
where
    P: Fn(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).count()
}
