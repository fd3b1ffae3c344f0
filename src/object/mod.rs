//! Helpers for records and nested values.
//!
//! Records are [`Row`]s (`serde_json::Map<String, Value>`), nested data is a
//! [`Value`]. Nothing here mutates its input: functions either borrow and
//! return new data, or take ownership and hand back the transformed value.
//!
//! # Submodules
//!
//! - [`path`]: reading, writing and removing values at nested paths
//! - [`where_all`]: recursive structural matching
//!
//! # Examples
//!
//! ```rust
//! use adjunct::object::{omit_recursively, rename_keys};
//! use serde_json::{Value, json};
//!
//! let cleaned = omit_recursively(&["secret"], json!({"a": {"secret": 1, "b": [{"secret": 2, "c": 3}]}}));
//! assert_eq!(cleaned, json!({"a": {"b": [{"c": 3}]}}));
//!
//! let row = json!({"firstName": "Elisia", "type": "human"}).as_object().cloned().unwrap();
//! let renamed = rename_keys(&[("firstName", "name"), ("type", "kind")], row);
//! assert_eq!(Value::Object(renamed), json!({"name": "Elisia", "kind": "human"}));
//! ```

mod diff;
mod lens;
pub mod path;
pub mod where_all;

pub use diff::{ObjectDiff, diff_objs};
pub use lens::ProjectLens;
pub use path::{
    Path, PathSegment, assoc_dot_path, assoc_path_with, assoc_with, dissoc_path, dissoc_paths,
    dot_path, dot_path_eq, get_path, has_dot_path, has_path, pick_path, props_path, set_dot_path,
    set_path,
};
pub use where_all::{Spec, where_all, where_all_optional};

use serde_json::{Map, Value};

use crate::value::{Row, key_text, loose_equals};

// =============================================================================
// Merging
// =============================================================================

/// Merges `right` into `left`, recursing where both sides hold objects.
///
/// For every other clash the right value wins.
///
/// # Examples
///
/// ```rust
/// use adjunct::object::merge_deep_right;
/// use serde_json::{Value, json};
///
/// let left = json!({"name": "fred", "contact": {"email": "a@b", "phone": 1}});
/// let right = json!({"age": 40, "contact": {"email": "c@d"}});
/// let merged = merge_deep_right(
///     left.as_object().cloned().unwrap(),
///     right.as_object().cloned().unwrap(),
/// );
/// assert_eq!(
///     Value::Object(merged),
///     json!({"name": "fred", "age": 40, "contact": {"email": "c@d", "phone": 1}})
/// );
/// ```
pub fn merge_deep_right(mut left: Row, right: Row) -> Row {
    for (key, right_value) in right {
        let merged = match (left.get_mut(&key), right_value) {
            (Some(Value::Object(left_inner)), Value::Object(right_inner)) => {
                Value::Object(merge_deep_right(std::mem::take(left_inner), right_inner))
            }
            (_, right_value) => right_value,
        };
        left.insert(key, merged);
    }
    left
}

/// Deeply merges every record, later ones winning.
pub fn merge_deep_all<I>(rows: I) -> Row
where
    I: IntoIterator<Item = Row>,
{
    rows.into_iter().fold(Map::new(), merge_deep_right)
}

/// Deeply merges copies of the object values, skipping everything else
/// (including `null`).
///
/// # Examples
///
/// ```rust
/// use adjunct::object::assign_all;
/// use serde_json::{Value, json};
///
/// let parts = [json!({"a": {"x": 1}}), json!(null), json!({"a": {"y": 2}})];
/// assert_eq!(Value::Object(assign_all(&parts)), json!({"a": {"x": 1, "y": 2}}));
/// ```
pub fn assign_all<'a, I>(values: I) -> Row
where
    I: IntoIterator<Item = &'a Value>,
{
    merge_deep_all(
        values
            .into_iter()
            .filter_map(|value| value.as_object().cloned()),
    )
}

// =============================================================================
// Building and converting
// =============================================================================

/// Removes from `row` every field that `subtrahend` holds with an equal value.
///
/// # Examples
///
/// ```rust
/// use adjunct::object::subtract_object;
/// use serde_json::{Value, json};
///
/// let subtrahend = json!({"foo": 1, "bar": 2});
/// let row = json!({"foo": 1, "bar": "not 2", "baz": 3});
/// let result = subtract_object(subtrahend.as_object().unwrap(), row.as_object().unwrap());
/// assert_eq!(Value::Object(result), json!({"bar": "not 2", "baz": 3}));
/// ```
pub fn subtract_object(subtrahend: &Row, row: &Row) -> Row {
    row.iter()
        .filter(|(key, value)| {
            !subtrahend
                .get(*key)
                .is_some_and(|other| loose_equals(value, other))
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Builds a record from key/value pairs; later duplicates win.
pub fn array_as_object<K, I>(entries: I) -> Row
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Value)>,
{
    entries
        .into_iter()
        .map(|(key, value)| (key.into(), value))
        .collect()
}

/// Turns each field of `row` into a two-field record.
///
/// # Examples
///
/// ```rust
/// use adjunct::object::object_as_array;
/// use serde_json::{Value, json};
///
/// let row = json!({"I": 2, "it": 4}).as_object().cloned().unwrap();
/// let records: Vec<Value> = object_as_array("key", "value", &row)
///     .into_iter()
///     .map(Value::Object)
///     .collect();
/// assert_eq!(
///     records,
///     vec![json!({"key": "I", "value": 2}), json!({"key": "it", "value": 4})]
/// );
/// ```
pub fn object_as_array(key_name: &str, value_name: &str, row: &Row) -> Vec<Row> {
    row.iter()
        .map(|(key, value)| {
            let mut record = Map::new();
            record.insert(key_name.to_string(), Value::String(key.clone()));
            record.insert(value_name.to_string(), value.clone());
            record
        })
        .collect()
}

/// Builds a record keyed by each item's text, with `function(item)` as value.
///
/// # Examples
///
/// ```rust
/// use adjunct::object::obj_of_array;
/// use serde_json::{Value, json};
///
/// let reversed = obj_of_array(|word: &&str| json!(word.chars().rev().collect::<String>()), &["abc", "def"]);
/// assert_eq!(Value::Object(reversed), json!({"abc": "cba", "def": "fed"}));
/// ```
pub fn obj_of_array<T, F>(function: F, items: &[T]) -> Row
where
    T: ToString,
    F: Fn(&T) -> Value,
{
    items
        .iter()
        .map(|item| (item.to_string(), function(item)))
        .collect()
}

/// A single-field record, or an empty one when `value` is absent or `null`.
pub fn opt_obj_of(key: &str, value: Option<Value>) -> Row {
    let mut row = Map::new();
    if let Some(value) = value.filter(|value| !value.is_null()) {
        row.insert(key.to_string(), value);
    }
    row
}

/// Converts a table whose first row is a header into records.
///
/// Header cells are used as field names (see [`key_text`]); rows are zipped
/// with the header and truncated to the shorter of the two.
///
/// # Examples
///
/// ```rust
/// use adjunct::object::property_list;
/// use serde_json::{Value, json};
///
/// let table = vec![
///     vec![json!("name"), json!("age")],
///     vec![json!("john"), json!(23)],
///     vec![json!("maggie"), json!(45)],
/// ];
/// let records: Vec<Value> = property_list(table).into_iter().map(Value::Object).collect();
/// assert_eq!(
///     records,
///     vec![json!({"name": "john", "age": 23}), json!({"name": "maggie", "age": 45})]
/// );
/// ```
pub fn property_list(table: Vec<Vec<Value>>) -> Vec<Row> {
    let mut rows = table.into_iter();
    let Some(header) = rows.next() else {
        return Vec::new();
    };
    let names: Vec<String> = header
        .iter()
        .map(|cell| key_text(cell).unwrap_or_else(|| cell.to_string()))
        .collect();
    rows.map(|row| names.iter().cloned().zip(row).collect())
        .collect()
}

/// Flattens nested objects and arrays into dot-separated keys.
///
/// Empty containers disappear; every other leaf is kept.
///
/// # Examples
///
/// ```rust
/// use adjunct::object::flatten_obj;
/// use serde_json::{Value, json};
///
/// let nested = json!({"a": 1, "b": {"c": 3}, "d": {"e": {"f": 6}, "g": [{"h": 8}, 0]}});
/// assert_eq!(
///     Value::Object(flatten_obj(&nested)),
///     json!({"a": 1, "b.c": 3, "d.e.f": 6, "d.g.0.h": 8, "d.g.1": 0})
/// );
/// ```
pub fn flatten_obj(value: &Value) -> Row {
    fn flatten_into(prefix: Option<&str>, value: &Value, output: &mut Row) {
        let join = |key: &str| match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.to_string(),
        };
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    flatten_into(Some(&join(key)), child, output);
                }
            }
            Value::Array(items) => {
                for (position, child) in items.iter().enumerate() {
                    flatten_into(Some(&join(&position.to_string())), child, output);
                }
            }
            leaf => {
                if let Some(prefix) = prefix {
                    output.insert(prefix.to_string(), leaf.clone());
                }
            }
        }
    }

    let mut output = Map::new();
    flatten_into(None, value, &mut output);
    output
}

/// Size of a value: fields of an object, items of an array, characters of a
/// string or of a number's text, `1` for `true` and `0` for `false` and `null`.
///
/// # Examples
///
/// ```rust
/// use adjunct::object::obj_size;
/// use serde_json::json;
///
/// assert_eq!(obj_size(&json!({"a": 1, "b": 2})), 2);
/// assert_eq!(obj_size(&json!([1, 2, 3])), 3);
/// assert_eq!(obj_size(&json!("hello")), 5);
/// assert_eq!(obj_size(&json!(1234)), 4);
/// assert_eq!(obj_size(&json!(true)), 1);
/// assert_eq!(obj_size(&json!(null)), 0);
/// ```
pub fn obj_size(value: &Value) -> usize {
    match value {
        Value::Object(map) => map.len(),
        Value::Array(items) => items.len(),
        Value::String(text) => text.chars().count(),
        Value::Number(number) => number.to_string().chars().count(),
        Value::Bool(flag) => usize::from(*flag),
        Value::Null => 0,
    }
}

// =============================================================================
// Filtering and lookup
// =============================================================================

/// Keeps the fields for which `predicate(key, value)` holds.
///
/// # Examples
///
/// ```rust
/// use adjunct::object::filter_with_keys;
/// use serde_json::{Value, json};
///
/// let row = json!({"red": 3, "blue": 5, "green": 5, "yellow": 2}).as_object().cloned().unwrap();
/// let kept = filter_with_keys(|key, value| value.as_u64() == Some(key.len() as u64), &row);
/// assert_eq!(Value::Object(kept), json!({"red": 3, "green": 5}));
/// ```
pub fn filter_with_keys<P>(predicate: P, row: &Row) -> Row
where
    P: Fn(&str, &Value) -> bool,
{
    row.iter()
        .filter(|(key, value)| predicate(key, value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// The first key holding a value equal to `value`.
pub fn find_key_of_value<'a>(value: &Value, row: &'a Row) -> Option<&'a str> {
    row.iter()
        .find(|(_, candidate)| loose_equals(value, candidate))
        .map(|(key, _)| key.as_str())
}

/// Removes the listed fields whose value satisfies `predicate`.
///
/// # Examples
///
/// ```rust
/// use adjunct::object::omit_when;
/// use serde_json::{Value, json};
///
/// let row = json!({"a": 1, "b": 1, "c": 2, "d": 2}).as_object().cloned().unwrap();
/// let result = omit_when(|value| value == &json!(2), &["a", "c"], row);
/// assert_eq!(Value::Object(result), json!({"a": 1, "b": 1, "d": 2}));
/// ```
pub fn omit_when<P>(predicate: P, keys: &[&str], mut row: Row) -> Row
where
    P: Fn(&Value) -> bool,
{
    row.retain(|key, value| !(keys.contains(&key.as_str()) && predicate(value)));
    row
}

/// Removes the listed keys from every object at any depth.
///
/// Arrays are walked element by element; no container changes its kind.
/// Applying it twice gives the same result as applying it once.
pub fn omit_recursively(keys: &[&str], value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(key, _)| !keys.contains(&key.as_str()))
                .map(|(key, child)| (key, omit_recursively(keys, child)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|child| omit_recursively(keys, child))
                .collect(),
        ),
        scalar => scalar,
    }
}

// =============================================================================
// Keys
// =============================================================================

/// Renames keys with `function`; on collision the later field wins.
///
/// # Examples
///
/// ```rust
/// use adjunct::object::map_keys;
/// use serde_json::{Value, json};
///
/// let row = json!({"a": 1, "b": 2}).as_object().cloned().unwrap();
/// assert_eq!(Value::Object(map_keys(str::to_uppercase, row)), json!({"A": 1, "B": 2}));
/// ```
pub fn map_keys<F>(function: F, row: Row) -> Row
where
    F: Fn(&str) -> String,
{
    row.into_iter()
        .map(|(key, value)| (function(&key), value))
        .collect()
}

/// Alias of [`map_keys`].
pub fn rename_keys_by<F>(function: F, row: Row) -> Row
where
    F: Fn(&str) -> String,
{
    map_keys(function, row)
}

/// Maps every `(key, value)` pair to a new pair.
///
/// # Examples
///
/// ```rust
/// use adjunct::object::map_keys_and_values;
/// use serde_json::{Value, json};
///
/// let row = json!({"foo": "bar", "baz": "boo"}).as_object().cloned().unwrap();
/// let swapped = map_keys_and_values(
///     |(key, value)| (value.as_str().unwrap_or_default().to_string(), Value::String(key)),
///     row,
/// );
/// assert_eq!(Value::Object(swapped), json!({"bar": "foo", "boo": "baz"}));
/// ```
pub fn map_keys_and_values<F>(function: F, row: Row) -> Row
where
    F: Fn((String, Value)) -> (String, Value),
{
    row.into_iter().map(function).collect()
}

/// Renames keys with a function that also sees the value.
pub fn map_keys_with_value<F>(function: F, row: Row) -> Row
where
    F: Fn(&str, &Value) -> String,
{
    row.into_iter()
        .map(|(key, value)| (function(&key, &value), value))
        .collect()
}

/// Renames keys listed in `renames` (`(old, new)` pairs); other keys pass
/// through.
pub fn rename_keys(renames: &[(&str, &str)], row: Row) -> Row {
    map_keys(
        |key| {
            renames
                .iter()
                .find(|(old, _)| *old == key)
                .map_or_else(|| key.to_string(), |(_, new)| (*new).to_string())
        },
        row,
    )
}

/// Swaps keys and values.
///
/// Values without a key form (`null`, arrays, objects) are dropped; on
/// collision the later field wins.
///
/// # Examples
///
/// ```rust
/// use adjunct::object::invert_map;
/// use serde_json::{Value, json};
///
/// let row = json!({"a": "abc", "b": 1, "c": null}).as_object().cloned().unwrap();
/// assert_eq!(Value::Object(invert_map(&row)), json!({"abc": "a", "1": "b"}));
/// ```
pub fn invert_map(row: &Row) -> Row {
    row.iter()
        .filter_map(|(key, value)| Some((key_text(value)?, Value::String(key.clone()))))
        .collect()
}

/// Reorders fields by key.
pub fn sort_keys(row: Row) -> Row {
    let mut entries: Vec<(String, Value)> = row.into_iter().collect();
    entries.sort_by(|(left, _), (right, _)| left.cmp(right));
    entries.into_iter().collect()
}

/// Removes `key` and merges its object value into the record.
///
/// # Examples
///
/// ```rust
/// use adjunct::object::spread;
/// use serde_json::{Value, json};
///
/// let row = json!({"a": 1, "b": {"c": 3, "d": 4}}).as_object().cloned().unwrap();
/// assert_eq!(Value::Object(spread("b", row)), json!({"a": 1, "c": 3, "d": 4}));
/// ```
pub fn spread(key: &str, mut row: Row) -> Row {
    if let Some(Value::Object(inner)) = row.shift_remove(key) {
        row.extend(inner);
    }
    row
}
