//! Nested grouping and splitting lists into parts.

use std::collections::BTreeMap;

/// Items grouped by one or more key functions.
///
/// Each key function adds one level of nesting. The first function groups the
/// outermost level, the last one groups directly above the items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Groups<K, T> {
    /// The items that share every key on the way down.
    Items(Vec<T>),
    /// One level of grouping, ordered by key.
    Nested(BTreeMap<K, Groups<K, T>>),
}

impl<K: Ord, T> Groups<K, T> {
    /// The sub-group under `key`, if this is a nested level holding it.
    pub fn get(&self, key: &K) -> Option<&Self> {
        match self {
            Self::Items(_) => None,
            Self::Nested(levels) => levels.get(key),
        }
    }

    /// The grouped items, if this is the innermost level.
    pub fn items(&self) -> Option<&[T]> {
        match self {
            Self::Items(items) => Some(items.as_slice()),
            Self::Nested(_) => None,
        }
    }

    /// Follows `keys` down through the levels.
    pub fn descend<'a, I>(&self, keys: I) -> Option<&Self>
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        keys.into_iter().try_fold(self, |group, key| group.get(key))
    }
}

/// Groups `items` by each of `fields` in turn.
///
/// With no key functions the items come back as one [`Groups::Items`].
///
/// # Examples
///
/// ```rust
/// use adjunct::list::{Groups, group_by_multiple};
///
/// type Person = (&'static str, &'static str, i32);
///
/// let people: Vec<Person> = vec![("ann", "paris", 30), ("bob", "paris", 40), ("cid", "rome", 30)];
/// let fields: [&dyn Fn(&Person) -> String; 2] = [
///     &|person| person.1.to_string(),
///     &|person| person.2.to_string(),
/// ];
///
/// let groups = group_by_multiple(&fields, people);
/// let paris_thirty = groups.descend(&["paris".to_string(), "30".to_string()]);
///
/// assert_eq!(
///     paris_thirty.and_then(Groups::items),
///     Some(&[("ann", "paris", 30)][..])
/// );
/// ```
pub fn group_by_multiple<T, K: Ord>(fields: &[&dyn Fn(&T) -> K], items: Vec<T>) -> Groups<K, T> {
    let Some((field, rest)) = fields.split_first() else {
        return Groups::Items(items);
    };
    let mut buckets: BTreeMap<K, Vec<T>> = BTreeMap::new();
    for item in items {
        buckets.entry(field(&item)).or_default().push(item);
    }
    Groups::Nested(
        buckets
            .into_iter()
            .map(|(key, bucket)| (key, group_by_multiple(rest, bucket)))
            .collect(),
    )
}

/// Splits `items` into `parts` contiguous parts of near-equal size.
///
/// The item at index `i` lands in part `floor(i * parts / len)`; empty parts
/// are left out, so fewer than `parts` lists come back when `items` is short.
///
/// # Examples
///
/// ```rust
/// use adjunct::list::separate;
///
/// assert_eq!(
///     separate(3, vec![1, 2, 3, 4, 5, 6, 7]),
///     vec![vec![1, 2, 3], vec![4, 5], vec![6, 7]]
/// );
/// assert_eq!(separate(4, vec![1, 2]), vec![vec![1], vec![2]]);
/// ```
pub fn separate<T>(parts: usize, items: Vec<T>) -> Vec<Vec<T>> {
    let length = items.len();
    let mut result: Vec<Vec<T>> = Vec::with_capacity(parts.min(length));
    let mut current_part = None;
    for (index, item) in items.into_iter().enumerate() {
        let part = index.saturating_mul(parts) / length;
        match result.last_mut() {
            Some(last) if current_part == Some(part) => last.push(item),
            _ => {
                result.push(vec![item]);
                current_part = Some(part);
            }
        }
    }
    result
}

/// Sorts `items` by `key` (stable), then [`separate`]s them into `parts`.
///
/// # Examples
///
/// ```rust
/// use adjunct::list::separate_by;
///
/// let parts = separate_by(|n: &i32| *n, 2, vec![4, 1, 3, 2]);
/// assert_eq!(parts, vec![vec![1, 2], vec![3, 4]]);
/// ```
pub fn separate_by<T, K, F>(key: F, parts: usize, mut items: Vec<T>) -> Vec<Vec<T>>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    items.sort_by_key(key);
    separate(parts, items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_no_fields_yields_items() {
        let groups = group_by_multiple::<i32, i32>(&[], vec![1, 2]);
        assert_eq!(groups, Groups::Items(vec![1, 2]));
    }

    #[test]
    fn test_single_field_groups_once() {
        let parity: &dyn Fn(&i32) -> i32 = &|n| n % 2;
        let groups = group_by_multiple(&[parity], vec![1, 2, 3, 4]);
        assert_eq!(groups.get(&0).and_then(Groups::items), Some(&[2, 4][..]));
        assert_eq!(groups.get(&1).and_then(Groups::items), Some(&[1, 3][..]));
        assert_eq!(groups.get(&2), None);
        assert_eq!(groups.items(), None);
    }

    #[test]
    fn test_nesting_order_follows_fields() {
        let fields: [&dyn Fn(&i32) -> i32; 2] = [&|n| n / 10, &|n| n % 2];
        let groups = group_by_multiple(&fields, vec![10, 11, 12, 21]);
        assert_eq!(
            groups.descend(&[1, 0]).and_then(Groups::items),
            Some(&[10, 12][..])
        );
        assert_eq!(groups.descend(&[2, 1]).and_then(Groups::items), Some(&[21][..]));
        assert_eq!(groups.descend(&[2, 0]), None);
    }

    #[rstest]
    #[case(1, vec![vec![1, 2, 3, 4]])]
    #[case(2, vec![vec![1, 2], vec![3, 4]])]
    #[case(3, vec![vec![1, 2], vec![3], vec![4]])]
    #[case(4, vec![vec![1], vec![2], vec![3], vec![4]])]
    fn test_separate_sizes(#[case] parts: usize, #[case] expected: Vec<Vec<i32>>) {
        assert_eq!(separate(parts, vec![1, 2, 3, 4]), expected);
    }

    #[test]
    fn test_separate_edge_cases() {
        assert!(separate(3, Vec::<i32>::new()).is_empty());
        assert_eq!(separate(0, vec![1, 2]), vec![vec![1, 2]]);
    }

    #[test]
    fn test_separate_by_is_stable() {
        let items = vec![(1, 'b'), (0, 'a'), (1, 'a'), (0, 'b')];
        let parts = separate_by(|pair: &(i32, char)| pair.0, 1, items);
        assert_eq!(parts, vec![vec![(0, 'a'), (0, 'b'), (1, 'b'), (1, 'a')]]);
    }
}
