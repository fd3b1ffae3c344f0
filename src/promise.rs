//! Helpers for composing futures.
//!
//! These run on any executor except [`delay`], which needs a Tokio runtime
//! with the time driver enabled.
//!
//! # Examples
//!
//! ```rust
//! use adjunct::promise::{all_p, tap_p};
//! use futures::executor::block_on;
//!
//! async fn double(n: u32) -> Result<u32, String> {
//!     Ok(n * 2)
//! }
//!
//! assert_eq!(block_on(all_p((1..=3).map(double))), Ok(vec![2, 4, 6]));
//!
//! let logged = block_on(tap_p(double, 7));
//! assert_eq!(logged, Ok(7));
//! ```

use std::time::Duration;

use futures::future::{self, Ready, TryFuture, TryJoinAll};

use crate::error::CodedError;

/// Resolves after `duration` has elapsed.
pub async fn delay(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Waits for every future, failing fast on the first error.
///
/// Results keep the order of the input futures.
pub fn all_p<I>(futures: I) -> TryJoinAll<I::Item>
where
    I: IntoIterator,
    I::Item: TryFuture,
{
    future::try_join_all(futures)
}

/// Runs `effect` on a copy of `argument` and resolves to `argument` itself.
///
/// # Errors
///
/// Fails with the effect's error if the effect fails.
pub async fn tap_p<T, U, E, F, Fut>(effect: F, argument: T) -> Result<T, E>
where
    T: Clone,
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = Result<U, E>>,
{
    effect(argument.clone()).await?;
    Ok(argument)
}

/// A future that fails immediately with `error` tagged by `code`.
///
/// # Examples
///
/// ```rust
/// use adjunct::promise::reject_with_code;
///
/// let rejected = reject_with_code::<(), _>("E_TIMEOUT", std::fmt::Error);
/// let error = futures::executor::block_on(rejected).unwrap_err();
/// assert_eq!(error.code, "E_TIMEOUT");
/// ```
pub fn reject_with_code<T, E>(code: impl Into<String>, error: E) -> Ready<Result<T, CodedError<E>>>
where
    E: std::error::Error + 'static,
{
    tracing::debug!(error = %error, "rejecting with code");
    future::err(CodedError::new(code, error))
}
