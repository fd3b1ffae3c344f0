//! Error types raised by the fallible helpers.
//!
//! Most helpers in this crate are total: malformed input produces a sparse or
//! empty result rather than an error. The exceptions are collected here:
//!
//! - [`ListError`]: bounds-checked list mutation ([`swap`](crate::list::swap))
//! - [`ExplodeError`]: unwrapping an empty `Option` or a failed `Result`
//! - [`CodedError`]: an error tagged with a caller-defined code
//! - [`PatternError`]: building a regular expression from text and flags

use thiserror::Error;

/// Errors produced by list helpers.
///
/// # Examples
///
/// ```rust
/// use adjunct::error::ListError;
///
/// let error = ListError::SwapOutOfBounds {
///     old_index: 0,
///     new_index: 10,
///     length: 2,
/// };
/// assert_eq!(
///     error.to_string(),
///     "cannot swap items outside of the list: 0 <-> 10, list length: 2"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// One of the indices passed to `swap` is not a valid position.
    #[error(
        "cannot swap items outside of the list: {old_index} <-> {new_index}, list length: {length}"
    )]
    SwapOutOfBounds {
        /// The first index.
        old_index: usize,
        /// The second index.
        new_index: usize,
        /// The length of the list.
        length: usize,
    },
}

/// Raised when an `Option` or `Result` is exploded but holds no value.
///
/// # Examples
///
/// ```rust
/// use adjunct::monads::explode_maybe;
///
/// let error = explode_maybe("no user", None::<u32>).unwrap_err();
/// assert_eq!(error.to_string(), "no user");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ExplodeError {
    /// Human readable description.
    pub message: String,
}

impl ExplodeError {
    /// Creates a new error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// An error tagged with a caller supplied code.
///
/// The original error is kept as the [`source`](std::error::Error::source).
///
/// # Examples
///
/// ```rust
/// use adjunct::error::CodedError;
/// use std::error::Error as _;
///
/// let io = std::io::Error::other("disk on fire");
/// let coded = CodedError::new("E_DISK", io);
///
/// assert_eq!(coded.code, "E_DISK");
/// assert_eq!(coded.to_string(), "[E_DISK] disk on fire");
/// assert!(coded.source().is_some());
/// ```
#[derive(Debug, Error)]
#[error("[{code}] {source}")]
pub struct CodedError<E>
where
    E: std::error::Error + 'static,
{
    /// The code attached to the error.
    pub code: String,
    /// The wrapped error.
    #[source]
    pub source: E,
}

impl<E> CodedError<E>
where
    E: std::error::Error + 'static,
{
    /// Wraps `source` with `code`.
    pub fn new(code: impl Into<String>, source: E) -> Self {
        Self {
            code: code.into(),
            source,
        }
    }

    /// Returns the wrapped error, dropping the code.
    pub fn into_inner(self) -> E {
        self.source
    }
}

/// Errors produced while building a regular expression with
/// [`reg_exp`](crate::string::reg_exp).
#[cfg(feature = "string")]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternError {
    /// A flag letter that has no meaning.
    #[error("invalid regular expression flag: {0:?}")]
    InvalidFlag(char),
    /// The pattern itself failed to compile.
    #[error(transparent)]
    Syntax(#[from] regex::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_out_of_bounds_display_names_indices_and_length() {
        let error = ListError::SwapOutOfBounds {
            old_index: 3,
            new_index: 1,
            length: 2,
        };
        let message = error.to_string();
        assert!(message.contains('3'));
        assert!(message.contains('1'));
        assert!(message.contains("list length: 2"));
    }

    #[test]
    fn test_explode_error_display_is_message() {
        assert_eq!(ExplodeError::new("boom").to_string(), "boom");
    }

    #[test]
    fn test_coded_error_into_inner() {
        let coded = CodedError::new("E1", std::fmt::Error);
        assert_eq!(coded.into_inner(), std::fmt::Error);
    }

    #[cfg(feature = "string")]
    #[test]
    fn test_pattern_error_names_flag() {
        assert_eq!(
            PatternError::InvalidFlag('q').to_string(),
            "invalid regular expression flag: 'q'"
        );
    }
}
