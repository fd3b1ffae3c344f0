//! List helpers.
//!
//! Generic helpers work on slices or owned `Vec`s of any element type; helpers
//! that inspect fields work on [`Row`]s and [`Value`]s.
//!
//! # Submodules
//!
//! - [`group`]: nested grouping and splitting into parts
//! - [`sort`]: multi-property sorting of records
//! - [`shuffle`]: Fisher–Yates shuffling with a pluggable random source
//!
//! # Examples
//!
//! ```rust
//! use adjunct::list::{includes_all, includes_any, swap};
//!
//! assert!(includes_any(&['a', 'e'], &['a', 'b', 'c']));
//! assert!(includes_all(&[2, 1], &[1, 2, 3]));
//! assert_eq!(swap(0, 2, vec!['a', 'b', 'c']), Ok(vec!['c', 'b', 'a']));
//! assert!(swap(0, 10, vec!['a', 'b']).is_err());
//! ```

pub mod group;
pub mod shuffle;
pub mod sort;

pub use group::{Groups, group_by_multiple, separate, separate_by};
#[cfg(feature = "random")]
pub use shuffle::shuffle;
pub use shuffle::{shuffle_with, shuffler};
pub use sort::{compare_props, props_comparator, sort_by_props};

use std::collections::HashSet;
use std::hash::Hash;

use serde_json::{Map, Value};

use crate::error::ListError;
use crate::logic::{count_if, is_truthy};
use crate::value::{Row, key_text, loose_equals};

// =============================================================================
// Membership
// =============================================================================

/// `true` when any of `needles` appears in `haystack`.
pub fn includes_any<T: PartialEq>(needles: &[T], haystack: &[T]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// `true` when every one of `needles` appears in `haystack`.
pub fn includes_all<T: PartialEq>(needles: &[T], haystack: &[T]) -> bool {
    needles.iter().all(|needle| haystack.contains(needle))
}

/// `true` when none of `needles` appears in `haystack`.
///
/// # Examples
///
/// ```rust
/// use adjunct::list::includes_none;
///
/// assert!(includes_none(&["e", "f"], &["a", "b", "c"]));
/// assert!(!includes_none(&["a"], &["a", "b", "c"]));
/// ```
pub fn includes_none<T: PartialEq>(needles: &[T], haystack: &[T]) -> bool {
    !includes_any(needles, haystack)
}

// =============================================================================
// Construction
// =============================================================================

/// Wraps a non-array value in a one-element list; arrays are unwrapped.
///
/// # Examples
///
/// ```rust
/// use adjunct::list::as_array;
/// use serde_json::json;
///
/// assert_eq!(as_array(json!(42)), vec![json!(42)]);
/// assert_eq!(as_array(json!([42])), vec![json!(42)]);
/// ```
pub fn as_array(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        other => vec![other],
    }
}

/// Flattens nested arrays at any depth into one list.
///
/// # Examples
///
/// ```rust
/// use adjunct::list::list_of;
/// use serde_json::json;
///
/// assert_eq!(
///     list_of(vec![json!(1), json!([2, [3, 4]]), json!("x")]),
///     vec![json!(1), json!(2), json!(3), json!(4), json!("x")]
/// );
/// ```
pub fn list_of(values: Vec<Value>) -> Vec<Value> {
    fn flatten_into(value: Value, output: &mut Vec<Value>) {
        match value {
            Value::Array(items) => items.into_iter().for_each(|item| flatten_into(item, output)),
            other => output.push(other),
        }
    }

    let mut output = Vec::with_capacity(values.len());
    for value in values {
        flatten_into(value, &mut output);
    }
    output
}

/// A list of `n` copies of `item`.
pub fn replicate<T: Clone>(n: usize, item: T) -> Vec<T> {
    vec![item; n]
}

/// Two copies of `item`.
pub fn duplicate<T: Clone>(item: T) -> Vec<T> {
    replicate(2, item)
}

/// Drops falsy values (`false`, `0`, `""`, `null`).
///
/// # Examples
///
/// ```rust
/// use adjunct::list::compact;
/// use serde_json::json;
///
/// let values = vec![json!(0), json!(1), json!(false), json!(2), json!(""), json!(3)];
/// assert_eq!(compact(values), vec![json!(1), json!(2), json!(3)]);
/// ```
pub fn compact(mut values: Vec<Value>) -> Vec<Value> {
    values.retain(is_truthy);
    values
}

// =============================================================================
// Indexed traversal
// =============================================================================

/// Maps with a function that also receives the index and the whole list.
///
/// # Examples
///
/// ```rust
/// use adjunct::list::map_indexed;
///
/// let labelled = map_indexed(|item, index, all| format!("{item}:{index}/{}", all.len()), &["a", "b"]);
/// assert_eq!(labelled, vec!["a:0/2", "b:1/2"]);
/// ```
pub fn map_indexed<T, U, F>(mut function: F, items: &[T]) -> Vec<U>
where
    F: FnMut(&T, usize, &[T]) -> U,
{
    items
        .iter()
        .enumerate()
        .map(|(index, item)| function(item, index, items))
        .collect()
}

/// Folds with a function that also receives the index and the whole list.
pub fn reduce_indexed<T, A, F>(mut function: F, initial: A, items: &[T]) -> A
where
    F: FnMut(A, &T, usize, &[T]) -> A,
{
    items
        .iter()
        .enumerate()
        .fold(initial, |accumulator, (index, item)| {
            function(accumulator, item, index, items)
        })
}

/// Applies `function` to the item at `index`; out of range leaves the list
/// unchanged.
pub fn map_at<T, F>(index: usize, function: F, mut items: Vec<T>) -> Vec<T>
where
    F: FnOnce(T) -> T,
{
    if index < items.len() {
        let item = items.remove(index);
        items.insert(index, function(item));
    }
    items
}

/// Applies `function` to the first item.
///
/// # Examples
///
/// ```rust
/// use adjunct::list::overhead;
///
/// let words = vec!["foo".to_string(), "bar".to_string()];
/// assert_eq!(overhead(|word| word.to_uppercase(), words), vec!["FOO", "bar"]);
/// ```
pub fn overhead<T, F>(function: F, items: Vec<T>) -> Vec<T>
where
    F: FnOnce(T) -> T,
{
    map_at(0, function, items)
}

// =============================================================================
// Picking and finding
// =============================================================================

/// The items at `indexes`, in the order given; missing positions are `None`.
///
/// # Examples
///
/// ```rust
/// use adjunct::list::pick_indexes;
///
/// assert_eq!(pick_indexes(&[0, 2, 5], &['a', 'b', 'c']), vec![Some(&'a'), Some(&'c'), None]);
/// ```
pub fn pick_indexes<'a, T>(indexes: &[usize], items: &'a [T]) -> Vec<Option<&'a T>> {
    indexes.iter().map(|index| items.get(*index)).collect()
}

/// Builds a record mapping each row's `key_field` to its `value_field`.
///
/// Rows without a usable key are skipped; a missing value becomes `null`.
///
/// # Examples
///
/// ```rust
/// use adjunct::list::pick_from;
/// use adjunct::value::Row;
/// use serde_json::{Value, json};
///
/// let rows: Vec<Row> = serde_json::from_value(json!([
///     {"id": "a", "val": 1000},
///     {"id": "b", "val": 2000},
/// ])).unwrap();
/// assert_eq!(Value::Object(pick_from("id", "val", &rows)), json!({"a": 1000, "b": 2000}));
/// ```
pub fn pick_from(key_field: &str, value_field: &str, rows: &[Row]) -> Row {
    let mut picked = Map::new();
    for row in rows {
        if let Some(key) = row.get(key_field).and_then(key_text) {
            let value = row.get(value_field).cloned().unwrap_or(Value::Null);
            picked.insert(key, value);
        }
    }
    picked
}

/// Counts the items satisfying `predicate`.
pub fn count<T, P>(predicate: P, items: &[T]) -> usize
where
    P: Fn(&T) -> bool,
{
    count_if(predicate, items)
}

/// The first row whose `field` equals `value`.
pub fn find_by_prop<'a>(field: &str, value: &Value, rows: &'a [Row]) -> Option<&'a Row> {
    rows.iter()
        .find(|row| row.get(field).is_some_and(|found| loose_equals(found, value)))
}

/// The first row whose `id` field equals `id`.
///
/// # Examples
///
/// ```rust
/// use adjunct::list::find_by_id;
/// use adjunct::value::Row;
/// use serde_json::json;
///
/// let rows: Vec<Row> = serde_json::from_value(json!([{"id": 1}, {"id": 2, "name": "b"}])).unwrap();
/// assert_eq!(find_by_id(&json!(2), &rows).and_then(|row| row.get("name")), Some(&json!("b")));
/// ```
pub fn find_by_id<'a>(id: &Value, rows: &'a [Row]) -> Option<&'a Row> {
    find_by_prop("id", id, rows)
}

// =============================================================================
// Reordering and deduplication
// =============================================================================

/// Exchanges the items at `old_index` and `new_index`.
///
/// # Errors
///
/// Returns [`ListError::SwapOutOfBounds`] when either index is not a valid
/// position.
pub fn swap<T>(old_index: usize, new_index: usize, mut items: Vec<T>) -> Result<Vec<T>, ListError> {
    let length = items.len();
    if old_index >= length || new_index >= length {
        tracing::debug!(old_index, new_index, length, "rejected out of bounds swap");
        return Err(ListError::SwapOutOfBounds {
            old_index,
            new_index,
            length,
        });
    }
    items.swap(old_index, new_index);
    Ok(items)
}

/// Every distinct item across `lists`, in order of first appearance.
///
/// # Examples
///
/// ```rust
/// use adjunct::list::uniques_for;
///
/// assert_eq!(uniques_for([vec![1, 2, 2], vec![3, 1], vec![4]]), vec![1, 2, 3, 4]);
/// ```
pub fn uniques_for<T, L, I>(lists: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    L: IntoIterator<Item = T>,
    I: IntoIterator<Item = L>,
{
    let mut seen = HashSet::new();
    lists
        .into_iter()
        .flatten()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Removes from each list the items already present in an earlier list.
///
/// Duplicates inside one list are kept.
///
/// # Examples
///
/// ```rust
/// use adjunct::list::uniq_lists;
///
/// let lists = vec![vec!["a", "b", "c"], vec!["b", "c", "d"], vec!["a", "d", "e"]];
/// assert_eq!(uniq_lists(lists), vec![vec!["a", "b", "c"], vec!["d"], vec!["e"]]);
/// ```
pub fn uniq_lists<T: PartialEq>(lists: Vec<Vec<T>>) -> Vec<Vec<T>> {
    let mut result: Vec<Vec<T>> = Vec::with_capacity(lists.len());
    for list in lists {
        let remaining = list
            .into_iter()
            .filter(|item| !result.iter().flatten().any(|earlier| earlier == item))
            .collect();
        result.push(remaining);
    }
    result
}
