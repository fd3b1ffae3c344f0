//! Fisher–Yates shuffling with a pluggable random source.
//!
//! The random source is any `FnMut() -> f64` yielding values in `[0, 1)`.
//! Passing a deterministic source makes the permutation reproducible, which is
//! how the tests exercise it.
//!
//! # Examples
//!
//! ```rust
//! use adjunct::list::shuffle_with;
//!
//! // Always drawing 0.0 moves each new item to the front.
//! assert_eq!(shuffle_with(|| 0.0, &[1, 2, 3, 4]), vec![4, 1, 2, 3]);
//!
//! // Always drawing just under 1.0 keeps every item in place.
//! assert_eq!(shuffle_with(|| 0.999, &[1, 2, 3, 4]), vec![1, 2, 3, 4]);
//! ```

use std::mem;

/// Returns a shuffled copy of `items`, drawing positions from `random`.
///
/// At step `i` the draw picks `position = floor((i + 1) * random())`; the item
/// already at `position` moves to the end and `items[i]` takes its place. Draws
/// outside `[0, 1)` are clamped into range.
pub fn shuffle_with<T, R>(mut random: R, items: &[T]) -> Vec<T>
where
    T: Clone,
    R: FnMut() -> f64,
{
    let mut result: Vec<T> = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let position = draw_position(random(), index);
        if position == index {
            result.push(item.clone());
        } else {
            let displaced = mem::replace(&mut result[position], item.clone());
            result.push(displaced);
        }
    }
    result
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn draw_position(draw: f64, index: usize) -> usize {
    let scaled = ((index + 1) as f64 * draw).floor();
    // `as` saturates: NaN and negatives become 0.
    (scaled as usize).min(index)
}

/// Fixes the random source, returning a reusable shuffling function.
///
/// # Examples
///
/// ```rust
/// use adjunct::list::shuffler;
///
/// let mut fixed = shuffler(|| 0.5);
/// let first = fixed(&['a', 'b', 'c', 'd']);
/// assert_eq!(first, fixed(&['a', 'b', 'c', 'd']));
/// ```
pub fn shuffler<T, R>(mut random: R) -> impl FnMut(&[T]) -> Vec<T>
where
    T: Clone,
    R: FnMut() -> f64,
{
    move |items: &[T]| shuffle_with(&mut random, items)
}

/// Returns a shuffled copy of `items` using the thread-local generator.
#[cfg(feature = "random")]
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(rand::random::<f64>, items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sequence(draws: Vec<f64>) -> impl FnMut() -> f64 {
        let mut draws = draws.into_iter().cycle();
        move || draws.next().unwrap_or(0.0)
    }

    #[test]
    fn test_empty_and_single() {
        assert!(shuffle_with(|| 0.3, &Vec::<i32>::new()).is_empty());
        assert_eq!(shuffle_with(|| 0.3, &[7]), vec![7]);
    }

    #[rstest]
    #[case(vec![0.0, 0.0, 0.0], vec![3, 1, 2])]
    #[case(vec![0.0, 0.9, 0.9], vec![1, 2, 3])]
    #[case(vec![0.0, 0.0, 0.9], vec![2, 1, 3])]
    #[case(vec![0.0, 0.9, 0.5], vec![1, 3, 2])]
    fn test_known_draws(#[case] draws: Vec<f64>, #[case] expected: Vec<i32>) {
        assert_eq!(shuffle_with(sequence(draws), &[1, 2, 3]), expected);
    }

    #[rstest]
    #[case(1.0)]
    #[case(7.5)]
    #[case(-3.0)]
    #[case(f64::NAN)]
    fn test_out_of_range_draws_are_clamped(#[case] draw: f64) {
        let mut shuffled = shuffle_with(|| draw, &[1, 2, 3, 4, 5]);
        shuffled.sort_unstable();
        assert_eq!(shuffled, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_shuffler_reuses_source() {
        let mut calls = 0;
        {
            let mut shuffle_counted = shuffler(|| {
                calls += 1;
                0.25
            });
            shuffle_counted(&[1, 2, 3]);
            shuffle_counted(&[1, 2]);
        }
        assert_eq!(calls, 5);
    }

    #[cfg(feature = "random")]
    #[test]
    fn test_random_shuffle_is_a_permutation() {
        let mut shuffled = shuffle(&(0..50).collect::<Vec<_>>());
        shuffled.sort_unstable();
        assert_eq!(shuffled, (0..50).collect::<Vec<_>>());
    }
}
