//! Arithmetic helpers.
//!
//! The `*_by` functions take the right-hand operand first, which reads well
//! when the function is partially applied: `divide_by(2.0, x)` halves `x`.

use std::ops::{Div, Rem, Sub};

/// `dividend / divisor`.
///
/// # Examples
///
/// ```rust
/// use adjunct::math::divide_by;
///
/// assert_eq!(divide_by(2, 10), 5);
/// ```
pub fn divide_by<T: Div<Output = T>>(divisor: T, dividend: T) -> T {
    dividend / divisor
}

/// `dividend % divisor`.
pub fn modulo_by<T: Rem<Output = T>>(divisor: T, dividend: T) -> T {
    dividend % divisor
}

/// `minuend - subtrahend`.
///
/// # Examples
///
/// ```rust
/// use adjunct::math::subtract_by;
///
/// assert_eq!(subtract_by(3, 10), 7);
/// ```
pub fn subtract_by<T: Sub<Output = T>>(subtrahend: T, minuend: T) -> T {
    minuend - subtrahend
}

/// Arithmetic mean, or `None` for an empty slice.
///
/// # Examples
///
/// ```rust
/// use adjunct::math::average;
///
/// assert_eq!(average(&[1.0, 2.0, 6.0]), Some(3.0));
/// assert_eq!(average(&[]), None);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// `n` is odd.
pub const fn is_odd(n: i64) -> bool {
    n % 2 != 0
}

/// `n` is even.
pub const fn is_even(n: i64) -> bool {
    !is_odd(n)
}

/// Numbers from `start` to `stop` (inclusive when reached) in increments of
/// `step`.
///
/// A negative `step` counts down. Ranges that cannot reach `stop`, and a zero
/// `step`, are empty.
///
/// # Examples
///
/// ```rust
/// use adjunct::math::range_step;
///
/// assert_eq!(range_step(2.0, 2.0, 8.0), vec![2.0, 4.0, 6.0, 8.0]);
/// assert_eq!(range_step(5.0, -2.0, 0.0), vec![5.0, 3.0, 1.0]);
/// assert!(range_step(0.0, 1.0, -1.0).is_empty());
/// ```
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn range_step(start: f64, step: f64, stop: f64) -> Vec<f64> {
    let span = 1.0 + (stop - start) / step;
    if !span.is_finite() || span < 1.0 {
        return Vec::new();
    }
    let count = span.trunc() as usize;
    (0..count).map(|n| step.mul_add(n as f64, start)).collect()
}

/// Smallest and largest value, or `None` for an empty slice.
///
/// `NaN` entries are ignored.
///
/// # Examples
///
/// ```rust
/// use adjunct::math::get_range;
///
/// assert_eq!(get_range(&[3.0, -1.0, 7.5]), Some((-1.0, 7.5)));
/// assert_eq!(get_range(&[]), None);
/// ```
pub fn get_range(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|value| !value.is_nan())
        .fold(None, |range, value| match range {
            None => Some((value, value)),
            Some((low, high)) => Some((low.min(value), high.max(value))),
        })
}
