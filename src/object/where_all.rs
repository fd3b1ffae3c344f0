//! Recursive structural matching.
//!
//! [`where_all`] validates a value against a [`Spec`] tree that mixes
//! presence checks, literal equality and predicates. Rules, in order of
//! precedence:
//!
//! 1. an absent value matches only [`Spec::Absent`];
//! 2. [`Spec::Any`] matches anything present;
//! 3. [`Spec::Absent`] fails on a present value;
//! 4. [`Spec::Equals`] requires equality (numbers compare by value);
//! 5. [`Spec::Present`] matches anything present;
//! 6. [`Spec::Satisfies`] calls its predicate;
//! 7. [`Spec::Fields`] requires every field to match, stopping at the first
//!    failure.
//!
//! # Examples
//!
//! ```rust
//! use adjunct::object::where_all::{Spec, where_all};
//! use serde_json::json;
//!
//! let spec = Spec::from(json!({"a": true, "b": false, "c": null}));
//! assert!(where_all(&spec, &json!({"a": 1, "c": 99})));
//! assert!(!where_all(&Spec::from(json!({"a": 1})), &json!({"a": 2})));
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::object::path::{PathSegment, get_path};
use crate::value::loose_equals;

/// A predicate stored in a [`Spec`].
pub type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// A node of a matching specification.
#[derive(Clone)]
pub enum Spec {
    /// The value must be absent (`false` in JSON form).
    Absent,
    /// The value must be present (`true` in JSON form).
    Present,
    /// No constraint (`null` in JSON form).
    Any,
    /// The value must equal the given scalar.
    Equals(Value),
    /// The value must be present and satisfy the predicate.
    Satisfies(Predicate),
    /// Every listed field must match its own spec.
    Fields(Vec<(String, Spec)>),
}

impl Spec {
    /// Creates a [`Spec::Satisfies`] from a closure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adjunct::object::where_all::{Spec, where_all};
    /// use serde_json::json;
    ///
    /// let adult = Spec::fields([("age", Spec::satisfies(|age| age.as_u64() >= Some(18)))]);
    /// assert!(where_all(&adult, &json!({"age": 30})));
    /// assert!(!where_all(&adult, &json!({"age": 12})));
    /// assert!(!where_all(&adult, &json!({})));
    /// ```
    pub fn satisfies<P>(predicate: P) -> Self
    where
        P: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::Satisfies(Arc::new(predicate))
    }

    /// Creates a [`Spec::Fields`] from `(name, spec)` pairs.
    pub fn fields<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Self)>,
    {
        Self::Fields(
            fields
                .into_iter()
                .map(|(name, spec)| (name.into(), spec))
                .collect(),
        )
    }
}

impl From<Value> for Spec {
    /// Reads the JSON shorthand: `false`, `true` and `null` are the presence
    /// checks, scalars are literals, objects and arrays list fields (array
    /// fields are keyed by index).
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(false) => Self::Absent,
            Value::Bool(true) => Self::Present,
            Value::Null => Self::Any,
            Value::Number(_) | Value::String(_) => Self::Equals(value),
            Value::Object(map) => Self::Fields(
                map.into_iter()
                    .map(|(name, spec)| (name, Self::from(spec)))
                    .collect(),
            ),
            Value::Array(items) => Self::Fields(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(position, spec)| (position.to_string(), Self::from(spec)))
                    .collect(),
            ),
        }
    }
}

impl fmt::Debug for Spec {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => formatter.write_str("Absent"),
            Self::Present => formatter.write_str("Present"),
            Self::Any => formatter.write_str("Any"),
            Self::Equals(value) => formatter.debug_tuple("Equals").field(value).finish(),
            Self::Satisfies(_) => formatter.write_str("Satisfies(<predicate>)"),
            Self::Fields(fields) => formatter.debug_map().entries(fields.iter().map(|(k, v)| (k, v))).finish(),
        }
    }
}

static_assertions::assert_impl_all!(Spec: Send, Sync, Clone);

/// Matches `data` against `spec`.
pub fn where_all(spec: &Spec, data: &Value) -> bool {
    matches(spec, Some(data))
}

/// Matches possibly absent `data` against `spec`.
///
/// # Examples
///
/// ```rust
/// use adjunct::object::where_all::{Spec, where_all_optional};
///
/// assert!(where_all_optional(&Spec::Absent, None));
/// assert!(!where_all_optional(&Spec::Any, None));
/// ```
pub fn where_all_optional(spec: &Spec, data: Option<&Value>) -> bool {
    matches(spec, data)
}

fn matches(spec: &Spec, data: Option<&Value>) -> bool {
    let Some(data) = data else {
        return matches!(spec, Spec::Absent);
    };
    match spec {
        Spec::Any | Spec::Present => true,
        Spec::Absent => false,
        Spec::Equals(expected) => loose_equals(expected, data),
        Spec::Satisfies(predicate) => predicate(data),
        Spec::Fields(fields) => fields.iter().all(|(name, field_spec)| {
            let segment = PathSegment::key(name.as_str());
            matches(field_spec, get_path(std::slice::from_ref(&segment), data))
        }),
    }
}
