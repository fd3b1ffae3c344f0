//! A lens focusing on a subset of a record's keys.

use crate::value::Row;

/// Focuses on the listed keys of a [`Row`].
///
/// `get` projects the keys that are present, `set` merges a replacement over
/// the source, and `modify` does both around a function.
///
/// # Examples
///
/// ```rust
/// use adjunct::object::ProjectLens;
/// use serde_json::{Value, json};
///
/// let lens = ProjectLens::new(["a", "b"]);
/// let source = json!({"a": 1, "b": 2, "c": 3}).as_object().cloned().unwrap();
///
/// assert_eq!(Value::Object(lens.get(&source)), json!({"a": 1, "b": 2}));
///
/// let replacement = json!({"a": 11, "b": 22}).as_object().cloned().unwrap();
/// assert_eq!(
///     Value::Object(lens.set(source, replacement)),
///     json!({"a": 11, "b": 22, "c": 3})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLens {
    keys: Vec<String>,
}

impl ProjectLens {
    /// Creates a lens over `keys`.
    pub fn new<K, I>(keys: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = K>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// The focused keys.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Projects the focused keys present in `source`, in lens order.
    pub fn get(&self, source: &Row) -> Row {
        self.keys
            .iter()
            .filter_map(|key| source.get(key).map(|value| (key.clone(), value.clone())))
            .collect()
    }

    /// Writes every entry of `value` into `source`.
    ///
    /// Entries outside the focused keys are written too, matching a plain
    /// merge.
    pub fn set(&self, mut source: Row, value: Row) -> Row {
        source.extend(value);
        source
    }

    /// Replaces the focus with `function(focus)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adjunct::object::ProjectLens;
    /// use serde_json::{Value, json};
    ///
    /// let lens = ProjectLens::new(["count"]);
    /// let source = json!({"count": 1, "name": "x"}).as_object().cloned().unwrap();
    /// let bumped = lens.modify(source, |mut focus| {
    ///     focus.insert("count".into(), json!(2));
    ///     focus
    /// });
    /// assert_eq!(Value::Object(bumped), json!({"count": 2, "name": "x"}));
    /// ```
    pub fn modify<F>(&self, source: Row, function: F) -> Row
    where
        F: FnOnce(Row) -> Row,
    {
        let focus = self.get(&source);
        self.set(source, function(focus))
    }
}
