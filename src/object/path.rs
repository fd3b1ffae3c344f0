//! Paths into nested values.
//!
//! A [`Path`] is an ordered list of [`PathSegment`]s. Reading along a path is
//! lenient: a digit-only key indexes arrays and an index looks up its decimal
//! key in objects. Writing along a path moves the input value and rebuilds
//! only the containers on the path, so siblings are never copied.
//!
//! # Examples
//!
//! ```rust
//! use adjunct::object::path::{Path, assoc_path_with, get_path, has_path};
//! use serde_json::json;
//!
//! let path = Path::parse_dot("a.b.c");
//! let original = json!({"a": {"b": {"c": 3}}});
//!
//! let updated = assoc_path_with(
//!     |value| json!(value.and_then(|v| v.as_i64()).unwrap_or(0) + 1),
//!     &path,
//!     original.clone(),
//! );
//!
//! assert_eq!(updated, json!({"a": {"b": {"c": 4}}}));
//! assert_eq!(original, json!({"a": {"b": {"c": 3}}}));
//! assert_eq!(get_path(&path, &updated), Some(&json!(4)));
//! assert!(has_path(&path, &updated));
//! ```

use std::fmt;
use std::ops::Deref;

use serde_json::{Map, Value};
use smallvec::SmallVec;

/// One step of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum PathSegment {
    /// A position in a sequence.
    Index(usize),
    /// A field name in a mapping.
    Key(String),
}

impl PathSegment {
    /// Creates a [`PathSegment::Key`].
    pub fn key(name: impl Into<String>) -> Self {
        Self::Key(name.into())
    }

    /// Returns the position this segment denotes in a sequence.
    ///
    /// Keys made only of ASCII digits count as positions.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(position) => Some(*position),
            Self::Key(name) if is_digits(name) => name.parse().ok(),
            Self::Key(_) => None,
        }
    }

    /// Parses one dot-path component: digits become an index.
    fn parse(component: &str) -> Self {
        if is_digits(component) {
            component
                .parse()
                .map_or_else(|_| Self::key(component), Self::Index)
        } else {
            Self::key(component)
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(position) => write!(formatter, "{position}"),
            Self::Key(name) => formatter.write_str(name),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        Self::key(name)
    }
}

impl From<String> for PathSegment {
    fn from(name: String) -> Self {
        Self::Key(name)
    }
}

impl From<usize> for PathSegment {
    fn from(position: usize) -> Self {
        Self::Index(position)
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit())
}

/// An ordered list of segments addressing a nested location.
///
/// Dereferences to `[PathSegment]`, so every function taking a segment slice
/// accepts `&Path`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Path(SmallVec<[PathSegment; 4]>);

impl Path {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Parses a dot-separated path such as `"a.0.b"`.
    ///
    /// Digit-only components become [`PathSegment::Index`]. The empty string
    /// is the empty path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adjunct::object::path::{Path, PathSegment};
    ///
    /// let path = Path::parse_dot("items.0.name");
    /// assert_eq!(
    ///     &*path,
    ///     &[
    ///         PathSegment::key("items"),
    ///         PathSegment::Index(0),
    ///         PathSegment::key("name"),
    ///     ]
    /// );
    /// assert!(Path::parse_dot("").is_empty());
    /// ```
    pub fn parse_dot(dotted: &str) -> Self {
        if dotted.is_empty() {
            return Self::new();
        }
        dotted.split('.').map(PathSegment::parse).collect()
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: impl Into<PathSegment>) {
        self.0.push(segment.into());
    }

    /// Returns a new path with `segment` appended.
    #[must_use]
    pub fn join(&self, segment: impl Into<PathSegment>) -> Self {
        let mut joined = self.clone();
        joined.push(segment);
        joined
    }
}

impl Deref for Path {
    type Target = [PathSegment];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self(SmallVec::from_vec(segments))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.0.iter().enumerate() {
            if position > 0 {
                formatter.write_str(".")?;
            }
            write!(formatter, "{segment}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Reading
// =============================================================================

fn child<'a>(node: &'a Value, segment: &PathSegment) -> Option<&'a Value> {
    match node {
        Value::Array(items) => items.get(segment.as_index()?),
        Value::Object(map) => match segment {
            PathSegment::Key(name) => map.get(name),
            PathSegment::Index(position) => map.get(&position.to_string()),
        },
        _ => None,
    }
}

fn child_mut<'a>(node: &'a mut Value, segment: &PathSegment) -> Option<&'a mut Value> {
    match node {
        Value::Array(items) => items.get_mut(segment.as_index()?),
        Value::Object(map) => match segment {
            PathSegment::Key(name) => map.get_mut(name),
            PathSegment::Index(position) => map.get_mut(&position.to_string()),
        },
        _ => None,
    }
}

/// Returns the value at `path`, or `None` when any step is missing.
///
/// The empty path addresses `value` itself.
pub fn get_path<'a>(path: &[PathSegment], value: &'a Value) -> Option<&'a Value> {
    path.iter().try_fold(value, |node, segment| child(node, segment))
}

fn get_path_mut<'a>(path: &[PathSegment], value: &'a mut Value) -> Option<&'a mut Value> {
    path.iter().try_fold(value, |node, segment| child_mut(node, segment))
}

/// Returns `true` when something exists at `path`.
///
/// The empty path is never considered present, and traversal stops with
/// `false` at the first missing step or scalar.
///
/// # Examples
///
/// ```rust
/// use adjunct::object::path::{Path, has_path};
/// use serde_json::json;
///
/// assert!(!has_path(&Path::new(), &json!({})));
/// assert!(has_path(&Path::parse_dot("a.b"), &json!({"a": {"b": 1}})));
/// assert!(!has_path(&Path::parse_dot("a.x"), &json!({"a": {"b": 1}})));
/// assert!(has_path(&Path::parse_dot("0"), &json!([1, 2])));
/// ```
pub fn has_path(path: &[PathSegment], value: &Value) -> bool {
    !path.is_empty() && get_path(path, value).is_some()
}

// =============================================================================
// Writing
// =============================================================================

/// Most `null` slots a write may append to reach an index. Writes further out
/// store the index as a mapping key instead.
const MAX_INDEX_GAP: usize = 1 << 16;

/// An opened container together with the slot a path step addresses.
enum Cursor {
    Sequence { items: Vec<Value>, position: usize },
    Mapping { map: Map<String, Value>, key: String },
}

impl Cursor {
    /// Opens `node` for writing at `segment`.
    ///
    /// Existing arrays are indexed when the segment denotes a position within
    /// [`MAX_INDEX_GAP`] of their end and otherwise become mappings keyed by
    /// index. Existing objects stay objects. Anything else is replaced by a
    /// fresh container of the kind the segment asks for.
    fn open(node: Option<Value>, segment: &PathSegment) -> Self {
        match node {
            Some(Value::Array(items)) => match segment.as_index() {
                Some(position) if Self::reachable(&items, position) => {
                    Self::Sequence { items, position }
                }
                _ => Self::Mapping {
                    map: items
                        .into_iter()
                        .enumerate()
                        .map(|(position, item)| (position.to_string(), item))
                        .collect(),
                    key: segment.to_string(),
                },
            },
            Some(Value::Object(map)) => Self::Mapping {
                map,
                key: segment.to_string(),
            },
            _ => match segment {
                PathSegment::Index(position) if Self::reachable(&[], *position) => {
                    Self::Sequence {
                        items: Vec::new(),
                        position: *position,
                    }
                }
                _ => Self::Mapping {
                    map: Map::new(),
                    key: segment.to_string(),
                },
            },
        }
    }

    fn reachable(items: &[Value], position: usize) -> bool {
        position
            .checked_add(1)
            .is_some_and(|length| length <= items.len().saturating_add(MAX_INDEX_GAP))
    }

    /// Moves the addressed child out, leaving `null` in its place.
    fn take(&mut self) -> Option<Value> {
        match self {
            Self::Sequence { items, position } => items.get_mut(*position).map(Value::take),
            Self::Mapping { map, key } => map.get_mut(key).map(Value::take),
        }
    }

    /// Writes `child` into the addressed slot and closes the container.
    ///
    /// Sequences are padded with `null` up to the slot, which [`Cursor::open`]
    /// keeps within [`MAX_INDEX_GAP`] of the end.
    fn fill(self, child: Value) -> Value {
        match self {
            Self::Sequence {
                mut items,
                position,
            } => {
                if position >= items.len() {
                    items.resize(position + 1, Value::Null);
                }
                items[position] = child;
                Value::Array(items)
            }
            Self::Mapping { mut map, key } => {
                map.insert(key, child);
                Value::Object(map)
            }
        }
    }
}

fn rebuild<F>(function: F, path: &[PathSegment], node: Option<Value>) -> Value
where
    F: FnOnce(Option<Value>) -> Value,
{
    match path.split_first() {
        None => function(node),
        Some((segment, rest)) => {
            let mut cursor = Cursor::open(node, segment);
            let current = cursor.take();
            let replaced = rebuild(function, rest, current);
            cursor.fill(replaced)
        }
    }
}

/// Replaces the value at `path` with `function(previous)`.
///
/// `previous` is `None` when nothing exists at `path`; missing containers are
/// created on the way down. With an empty path `function` receives the whole
/// value and its result is returned.
///
/// # Examples
///
/// ```rust
/// use adjunct::object::path::{Path, assoc_path_with};
/// use serde_json::json;
///
/// let set_42 = |_| json!(42);
/// assert_eq!(
///     assoc_path_with(set_42, &Path::parse_dot("a.b.c"), json!({"a": 5})),
///     json!({"a": {"b": {"c": 42}}})
/// );
/// assert_eq!(assoc_path_with(set_42, &Path::new(), json!({"a": 5})), json!(42));
/// ```
pub fn assoc_path_with<F>(function: F, path: &[PathSegment], value: Value) -> Value
where
    F: FnOnce(Option<Value>) -> Value,
{
    tracing::trace!(depth = path.len(), "rebuilding value along path");
    rebuild(function, path, Some(value))
}

/// Single-step form of [`assoc_path_with`].
///
/// # Examples
///
/// ```rust
/// use adjunct::object::path::{PathSegment, assoc_with};
/// use serde_json::json;
///
/// let incremented = assoc_with(
///     |value| json!(value.and_then(|v| v.as_i64()).unwrap_or(0) + 1),
///     &PathSegment::key("b"),
///     json!({"a": 1, "b": 2}),
/// );
/// assert_eq!(incremented, json!({"a": 1, "b": 3}));
/// ```
pub fn assoc_with<F>(function: F, segment: &PathSegment, value: Value) -> Value
where
    F: FnOnce(Option<Value>) -> Value,
{
    rebuild(function, std::slice::from_ref(segment), Some(value))
}

/// Sets the value at `path` to `replacement`, creating containers as needed.
///
/// # Examples
///
/// ```rust
/// use adjunct::object::path::{Path, set_path};
/// use serde_json::json;
///
/// let updated = set_path(
///     &Path::parse_dot("a.0.b"),
///     json!("hi"),
///     json!({"a": [{"b": "hey"}]}),
/// );
/// assert_eq!(updated, json!({"a": [{"b": "hi"}]}));
/// ```
pub fn set_path(path: &[PathSegment], replacement: Value, value: Value) -> Value {
    assoc_path_with(|_| replacement, path, value)
}

/// Removes the entry at `path`.
///
/// Array elements are removed and later elements shift down. A missing path
/// leaves `value` unchanged, as does the empty path.
///
/// # Examples
///
/// ```rust
/// use adjunct::object::path::{Path, dissoc_path};
/// use serde_json::json;
///
/// assert_eq!(
///     dissoc_path(&Path::parse_dot("a.b"), json!({"a": {"b": 1, "c": 2}})),
///     json!({"a": {"c": 2}})
/// );
/// assert_eq!(
///     dissoc_path(&Path::parse_dot("a.0"), json!({"a": [1, 2]})),
///     json!({"a": [2]})
/// );
/// ```
pub fn dissoc_path(path: &[PathSegment], mut value: Value) -> Value {
    if let Some((last, parents)) = path.split_last()
        && let Some(parent) = get_path_mut(parents, &mut value)
    {
        match parent {
            Value::Array(items) => {
                if let Some(position) = last.as_index().filter(|position| *position < items.len()) {
                    items.remove(position);
                }
            }
            Value::Object(map) => {
                map.shift_remove(&last.to_string());
            }
            _ => {}
        }
    }
    value
}

// =============================================================================
// Dot paths
// =============================================================================

/// [`get_path`] with a dot-separated path.
///
/// # Examples
///
/// ```rust
/// use adjunct::object::path::dot_path;
/// use serde_json::json;
///
/// let value = json!({"a": {"list": [10, 20]}});
/// assert_eq!(dot_path("a.list.1", &value), Some(&json!(20)));
/// assert_eq!(dot_path("a.missing", &value), None);
/// ```
pub fn dot_path<'a>(dotted: &str, value: &'a Value) -> Option<&'a Value> {
    get_path(&Path::parse_dot(dotted), value)
}

/// `true` when the value at the dot path equals `expected`.
pub fn dot_path_eq(dotted: &str, expected: &Value, value: &Value) -> bool {
    dot_path(dotted, value).is_some_and(|found| crate::value::loose_equals(found, expected))
}

/// [`has_path`] with a dot-separated path.
pub fn has_dot_path(dotted: &str, value: &Value) -> bool {
    has_path(&Path::parse_dot(dotted), value)
}

/// [`set_path`] with a dot-separated path.
pub fn set_dot_path(dotted: &str, replacement: Value, value: Value) -> Value {
    set_path(&Path::parse_dot(dotted), replacement, value)
}

/// Alias of [`set_dot_path`].
pub fn assoc_dot_path(dotted: &str, replacement: Value, value: Value) -> Value {
    set_dot_path(dotted, replacement, value)
}

/// Reads several dot paths at once.
///
/// # Examples
///
/// ```rust
/// use adjunct::object::path::props_path;
/// use serde_json::json;
///
/// let value = json!({"a": {"b": 1}, "c": 2});
/// assert_eq!(
///     props_path(&["a.b", "c", "d"], &value),
///     vec![Some(&json!(1)), Some(&json!(2)), None]
/// );
/// ```
pub fn props_path<'a>(dotted_paths: &[&str], value: &'a Value) -> Vec<Option<&'a Value>> {
    dotted_paths
        .iter()
        .map(|dotted| dot_path(dotted, value))
        .collect()
}

/// Copies the listed dot paths that exist in `value` into a new object.
///
/// # Examples
///
/// ```rust
/// use adjunct::object::path::pick_path;
/// use serde_json::json;
///
/// let value = json!({"a": {"b": 1, "c": 2}, "d": 3});
/// assert_eq!(pick_path(&["a.b", "d", "x.y"], &value), json!({"a": {"b": 1}, "d": 3}));
/// ```
pub fn pick_path(dotted_paths: &[&str], value: &Value) -> Value {
    dotted_paths
        .iter()
        .map(|dotted| Path::parse_dot(dotted))
        .fold(Value::Object(Map::new()), |picked, path| {
            match get_path(&path, value) {
                Some(found) if !path.is_empty() => set_path(&path, found.clone(), picked),
                _ => picked,
            }
        })
}

/// Removes every listed dot path from `value`.
///
/// # Examples
///
/// ```rust
/// use adjunct::object::path::dissoc_paths;
/// use serde_json::json;
///
/// let value = json!({"a": {"b": 1, "c": 2}, "d": 3});
/// assert_eq!(dissoc_paths(&["a.b", "d"], value), json!({"a": {"c": 2}}));
/// ```
pub fn dissoc_paths(dotted_paths: &[&str], value: Value) -> Value {
    dotted_paths.iter().fold(value, |remaining, dotted| {
        dissoc_path(&Path::parse_dot(dotted), remaining)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_dot_keeps_non_digit_components_as_keys() {
        let path = Path::parse_dot("a.-1.+2.3x");
        assert!(path.iter().all(|segment| matches!(segment, PathSegment::Key(_))));
    }

    #[test]
    fn test_path_display_round_trips_dot_form() {
        assert_eq!(Path::parse_dot("a.0.b").to_string(), "a.0.b");
        assert_eq!(Path::new().join("x").join(2_usize).to_string(), "x.2");
    }

    #[test]
    fn test_assoc_path_with_pads_arrays_with_null() {
        let updated = set_path(&Path::parse_dot("list.2"), json!("c"), json!({"list": ["a"]}));
        assert_eq!(updated, json!({"list": ["a", null, "c"]}));
    }

    #[test]
    fn test_assoc_path_with_creates_sequences_for_indices() {
        let updated = set_path(&Path::parse_dot("a.1"), json!(true), json!({}));
        assert_eq!(updated, json!({"a": [null, true]}));
    }

    #[test]
    fn test_assoc_path_with_index_on_object_uses_decimal_key() {
        let updated = set_path(&Path::parse_dot("a.0"), json!(1), json!({"a": {"0": 0, "z": 9}}));
        assert_eq!(updated, json!({"a": {"0": 1, "z": 9}}));
    }

    #[test]
    fn test_assoc_path_with_key_on_array_converts_to_mapping() {
        let updated = set_path(&[PathSegment::key("x")], json!(1), json!(["a", "b"]));
        assert_eq!(updated, json!({"0": "a", "1": "b", "x": 1}));
    }

    #[test]
    fn test_assoc_path_with_replaces_scalars_on_the_way() {
        let updated = set_path(&Path::parse_dot("a.b"), json!(1), json!({"a": "text"}));
        assert_eq!(updated, json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_assoc_path_with_preserves_key_order() {
        let updated = set_path(&Path::parse_dot("b"), json!(20), json!({"a": 1, "b": 2, "c": 3}));
        let keys: Vec<&String> = updated.as_object().map(|map| map.keys().collect()).unwrap_or_default();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    #[test]
    fn test_has_path_stops_at_scalars() {
        assert!(!has_path(&Path::parse_dot("a.b"), &json!({"a": 1})));
        assert!(has_path(&Path::parse_dot("a"), &json!({"a": null})));
    }

    #[test]
    fn test_dissoc_path_missing_is_unchanged() {
        let value = json!({"a": {"b": 1}});
        assert_eq!(dissoc_path(&Path::parse_dot("a.x.y"), value.clone()), value);
        assert_eq!(dissoc_path(&Path::new(), value.clone()), value);
        assert_eq!(dissoc_path(&Path::parse_dot("a.b.5"), value.clone()), value);
    }

    #[test]
    fn test_dot_path_eq_compares_numbers_loosely() {
        assert!(dot_path_eq("a", &json!(1.0), &json!({"a": 1})));
        assert!(!dot_path_eq("b", &json!(null), &json!({"a": 1})));
    }

    #[test]
    fn test_assoc_dot_path_matches_set_dot_path() {
        let value = json!({"a": {}});
        assert_eq!(
            assoc_dot_path("a.b", json!(1), value.clone()),
            set_dot_path("a.b", json!(1), value)
        );
    }
}
