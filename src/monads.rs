//! Adapters for `Option` and `Result`.
//!
//! "Exploding" turns the empty side of a wrapper into an [`ExplodeError`] so
//! callers can propagate it with `?` alongside other failures.

use std::fmt::Display;

use crate::error::ExplodeError;

/// Conventional message for exploding an empty `Option`.
pub const EXPECTED_JUST: &str = "Expected Just, but got Nothing.";

/// Extracts the value of `option`, or fails with `message`.
///
/// # Examples
///
/// ```rust
/// use adjunct::monads::explode_maybe;
///
/// assert_eq!(explode_maybe("missing", Some(3)), Ok(3));
/// assert_eq!(
///     explode_maybe("missing", None::<i32>).unwrap_err().to_string(),
///     "missing"
/// );
/// ```
///
/// # Errors
///
/// Returns an [`ExplodeError`] carrying `message` when `option` is `None`.
pub fn explode_maybe<T>(message: impl Into<String>, option: Option<T>) -> Result<T, ExplodeError> {
    option.ok_or_else(|| ExplodeError::new(message))
}

/// Extracts the success value of `result`.
///
/// The failure is described by its `Display` output.
///
/// # Examples
///
/// ```rust
/// use adjunct::monads::explode_either;
///
/// let failed: Result<i32, String> = Err("bad input".to_string());
/// assert_eq!(explode_either(failed).unwrap_err().to_string(), "bad input");
/// ```
///
/// # Errors
///
/// Returns an [`ExplodeError`] describing the failure when `result` is `Err`.
pub fn explode_either<T, E: Display>(result: Result<T, E>) -> Result<T, ExplodeError> {
    result.map_err(|error| ExplodeError::new(error.to_string()))
}

/// Extracts the success value of `result`, replacing any failure with
/// `message`.
///
/// # Errors
///
/// Returns an [`ExplodeError`] carrying `message` when `result` is `Err`.
pub fn explode_either_with<T, E>(
    message: impl Into<String>,
    result: Result<T, E>,
) -> Result<T, ExplodeError> {
    result.map_err(|_| ExplodeError::new(message))
}

/// Keeps the present values, dropping the `None`s.
///
/// # Examples
///
/// ```rust
/// use adjunct::monads::cat_maybes;
///
/// assert_eq!(cat_maybes(vec![Some(1), None, Some(3)]), vec![1, 3]);
/// ```
pub fn cat_maybes<T, I>(options: I) -> Vec<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    options.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explode_either_with_replaces_message() {
        let failed: Result<(), i32> = Err(7);
        let error = explode_either_with(EXPECTED_JUST, failed).unwrap_err();
        assert_eq!(error.message, EXPECTED_JUST);
    }

    #[test]
    fn test_explode_either_passes_success_through() {
        let ok: Result<&str, String> = Ok("fine");
        assert_eq!(explode_either(ok), Ok("fine"));
    }

    #[test]
    fn test_cat_maybes_of_all_none_is_empty() {
        assert!(cat_maybes(vec![None::<u8>, None]).is_empty());
    }
}
