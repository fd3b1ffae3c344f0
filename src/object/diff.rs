//! Field-by-field comparison of two records.

use serde_json::json;

use crate::value::{Row, loose_equals};

/// The result of [`diff_objs`].
///
/// Every key of either input lands in exactly one of the four parts.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ObjectDiff {
    /// Keys present on both sides with equal values.
    pub common: Row,
    /// Keys present on both sides with different values, each mapped to
    /// `{"left": .., "right": ..}`.
    pub diff: Row,
    /// Keys present only in the left record.
    pub only_on_left: Row,
    /// Keys present only in the right record.
    pub only_on_right: Row,
}

impl ObjectDiff {
    /// `true` when both records held the same keys with equal values.
    pub fn is_identical(&self) -> bool {
        self.diff.is_empty() && self.only_on_left.is_empty() && self.only_on_right.is_empty()
    }
}

/// Compares two records key by key.
///
/// # Examples
///
/// ```rust
/// use adjunct::object::diff_objs;
/// use serde_json::json;
///
/// let left = json!({"a": 1, "c": 5, "d": 4});
/// let right = json!({"a": 1, "b": 2, "d": 7});
/// let diff = diff_objs(left.as_object().unwrap(), right.as_object().unwrap());
///
/// assert_eq!(serde_json::Value::Object(diff.common), json!({"a": 1}));
/// assert_eq!(
///     serde_json::Value::Object(diff.diff),
///     json!({"d": {"left": 4, "right": 7}})
/// );
/// assert_eq!(serde_json::Value::Object(diff.only_on_left), json!({"c": 5}));
/// assert_eq!(serde_json::Value::Object(diff.only_on_right), json!({"b": 2}));
/// ```
pub fn diff_objs(left: &Row, right: &Row) -> ObjectDiff {
    let mut result = ObjectDiff::default();
    for (key, left_value) in left {
        match right.get(key) {
            Some(right_value) if loose_equals(left_value, right_value) => {
                result.common.insert(key.clone(), left_value.clone());
            }
            Some(right_value) => {
                result.diff.insert(
                    key.clone(),
                    json!({"left": left_value, "right": right_value}),
                );
            }
            None => {
                result.only_on_left.insert(key.clone(), left_value.clone());
            }
        }
    }
    for (key, right_value) in right {
        if !left.contains_key(key) {
            result.only_on_right.insert(key.clone(), right_value.clone());
        }
    }
    result
}
