//! Small function helpers used as arguments to the rest of the crate.
//!
//! - [`identity`] and [`constant`] fill function slots that need no logic,
//!   such as the writer passed to [`assoc_path_with`](crate::object::path::assoc_path_with)
//! - [`flip`] turns the argument order of the `*_by` math helpers back around
//! - [`noop`]: Does nothing
//! - [`apply_n`]: Applies a function `n` times
//! - [`apply_path`]: Applies a function to the value at a path
//! - [`knit`]: Applies a row of functions to each row of values, position by position

#[cfg(feature = "object")]
use serde_json::Value;

#[cfg(feature = "object")]
use crate::object::path::{PathSegment, get_path, set_path};

/// Returns the value unchanged.
///
/// Handy for collapsing both sides of a `Result` that carries the same type.
///
/// # Examples
///
/// ```
/// use adjunct::function::identity;
/// use serde_json::{Value, json};
///
/// let lookup: Result<Value, Value> = Err(json!({"fallback": true}));
/// assert_eq!(lookup.unwrap_or_else(identity), json!({"fallback": true}));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// # Examples
///
/// ```
/// use adjunct::function::constant;
/// use adjunct::object::path::{Path, assoc_path_with};
/// use serde_json::json;
///
/// let reset = assoc_path_with(constant(json!(0)), &Path::parse_dot("stats.hits"), json!({"stats": {"hits": 12}}));
/// assert_eq!(reset, json!({"stats": {"hits": 0}}));
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// `flip(f)(a, b) == f(b, a)`. The flipped arithmetic helpers in
/// [`math`](crate::math) are this combinator applied to the operators.
///
/// # Examples
///
/// ```
/// use adjunct::function::flip;
/// use adjunct::math::divide_by;
///
/// let divide = flip(divide_by::<i64>);
/// assert_eq!(divide(10, 2), 5);
/// assert_eq!(divide_by(2, 10), 5);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Does nothing.
#[inline]
pub const fn noop() {}

/// Returns a function that applies `function` `times` times to its input.
///
/// `apply_n(f, 0)` is the identity.
///
/// # Examples
///
/// ```
/// use adjunct::function::apply_n;
///
/// let square_four_times = apply_n(|x: u64| x * x, 4);
/// assert_eq!(square_four_times(2), 65_536);
/// ```
pub fn apply_n<T, F>(function: F, times: usize) -> impl Fn(T) -> T
where
    F: Fn(T) -> T,
{
    move |input| (0..times).fold(input, |accumulator, _| function(accumulator))
}

/// Applies `function` to the value at `path` and writes the result back.
///
/// The function receives `None` when nothing exists at `path`. Missing
/// containers along the path are created.
///
/// # Examples
///
/// ```
/// use adjunct::function::apply_path;
/// use adjunct::object::path::Path;
/// use serde_json::json;
///
/// let path = Path::parse_dot("a.b.c");
/// let result = apply_path(&path, |value| json!(value.and_then(|v| v.as_i64()).unwrap_or(0) + 1), json!({"a": {"b": {"c": 3}}}));
/// assert_eq!(result, json!({"a": {"b": {"c": 4}}}));
/// ```
#[cfg(feature = "object")]
pub fn apply_path<F>(path: &[PathSegment], function: F, value: Value) -> Value
where
    F: FnOnce(Option<&Value>) -> Value,
{
    let replacement = function(get_path(path, &value));
    set_path(path, replacement, value)
}

/// Returns a function that maps each row by applying `functions[i]` to the
/// `i`-th element of the row.
///
/// Rows longer than `functions` are truncated, as are function lists longer
/// than a row.
///
/// # Examples
///
/// ```
/// use adjunct::function::knit;
///
/// let knitted = knit(vec![
///     Box::new(|s: String| s.to_uppercase()) as Box<dyn Fn(String) -> String>,
///     Box::new(|s: String| s.to_lowercase()),
/// ]);
/// let pairs = vec![
///     vec!["key1".to_string(), "VAL1".to_string()],
///     vec!["key2".to_string(), "VAL2".to_string()],
/// ];
/// assert_eq!(
///     knitted(pairs),
///     vec![
///         vec!["KEY1".to_string(), "val1".to_string()],
///         vec!["KEY2".to_string(), "val2".to_string()],
///     ]
/// );
/// ```
pub fn knit<T>(functions: Vec<Box<dyn Fn(T) -> T>>) -> impl Fn(Vec<Vec<T>>) -> Vec<Vec<T>> {
    move |rows| {
        rows.into_iter()
            .map(|row| {
                functions
                    .iter()
                    .zip(row)
                    .map(|(function, element)| function(element))
                    .collect()
            })
            .collect()
    }
}
