//! Lexicographic comparison and stable sorting.
//!
//! All sorts share one algorithm: a top-down merge sort that falls back to
//! insertion sort on short runs. It only asks "is `a` strictly before `b`",
//! so it tolerates partial orders: incomparable pairs are never reordered
//! relative to each other by a single merge or insertion step, and the sort
//! cannot panic on an inconsistent comparator.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `compare` | O(min(n, m)) |
//! | `sort`, `sort_by`, `sort_by_key` | O(n log n) |
//! | `is_sorted`, `is_sorted_by`, `is_sorted_by_key` | O(n) |

use std::cmp::Ordering;

use super::Sequence;
use crate::capability::{Ordered, lexicographic_compare};

const INSERTION_THRESHOLD: usize = 16;

fn merge_sort<T, F>(mut elements: Vec<T>, before: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    if elements.len() <= INSERTION_THRESHOLD {
        insertion_sort(&mut elements, before);
        return elements;
    }
    let right = elements.split_off(elements.len() / 2);
    let left = merge_sort(elements, before);
    let right = merge_sort(right, before);
    merge(left, right, before)
}

fn insertion_sort<T, F>(elements: &mut [T], before: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for unsorted in 1..elements.len() {
        let mut position = unsorted;
        while position > 0 && before(&elements[position], &elements[position - 1]) {
            elements.swap(position, position - 1);
            position -= 1;
        }
    }
}

// Ties take from the left run, which keeps the sort stable.
fn merge<T, F>(left: Vec<T>, right: Vec<T>, before: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(head), Some(candidate)) => before(candidate, head),
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged
}

impl<T> Sequence<T> {
    /// Sorts in place with a total comparator. Stable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let mut sequence = sequence![3, 1, 2];
    /// sequence.sort_by(|left, right| right.cmp(left));
    /// assert_eq!(sequence, sequence![3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, mut comparator: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        trace_event!(length = self.len(), "sort_by");
        let sorted = merge_sort(self.take_storage(), &mut |left: &T, right: &T| {
            comparator(left, right) == Ordering::Less
        });
        self.replace_storage(sorted);
    }

    /// Sorts in place by a key extracted once per element. Stable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let mut words = sequence!["ccc", "a", "bb", "d"];
    /// words.sort_by_key(|word| word.len());
    /// assert_eq!(words, sequence!["a", "d", "bb", "ccc"]);
    /// ```
    pub fn sort_by_key<K, F>(&mut self, mut function: F)
    where
        K: Ordered,
        F: FnMut(&T) -> K,
    {
        trace_event!(length = self.len(), "sort_by_key");
        let decorated: Vec<(K, T)> = self
            .take_storage()
            .into_iter()
            .map(|element| (function(&element), element))
            .collect();
        let sorted = merge_sort(decorated, &mut |left: &(K, T), right: &(K, T)| {
            left.0.less_than(&right.0)
        });
        self.replace_storage(sorted.into_iter().map(|(_, element)| element).collect());
    }

    /// Returns `true` if no adjacent pair is ordered `Greater` by
    /// `comparator`.
    pub fn is_sorted_by<F>(&self, mut comparator: F) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.as_slice()
            .windows(2)
            .all(|pair| comparator(&pair[0], &pair[1]) != Ordering::Greater)
    }

    /// Returns `true` if the keys are in non-descending order.
    ///
    /// The key function runs once per element.
    pub fn is_sorted_by_key<K, F>(&self, function: F) -> bool
    where
        K: Ordered,
        F: FnMut(&T) -> K,
    {
        let keys: Vec<K> = self.iter().map(function).collect();
        keys.windows(2).all(|pair| !pair[1].less_than(&pair[0]))
    }
}

impl<T: Ordered> Sequence<T> {
    /// Compares two sequences lexicographically.
    ///
    /// The first pair ordered `Less` or `Greater` decides; equal and
    /// incomparable pairs are skipped. If no pair decides, the shorter
    /// sequence is `Less`, so a strict prefix sorts before its extensions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use seqkit::sequence;
    ///
    /// assert_eq!(sequence![1, 2].compare(&sequence![1, 3]), Ordering::Less);
    /// assert_eq!(sequence![1, 2].compare(&sequence![1, 2, 0]), Ordering::Less);
    /// assert_eq!(sequence![2].compare(&sequence![1, 9]), Ordering::Greater);
    /// assert_eq!(sequence![f64::NAN, 1.0].compare(&sequence![0.0, 2.0]), Ordering::Less);
    /// ```
    pub fn compare(&self, other: &Self) -> Ordering {
        lexicographic_compare(self.as_slice(), other.as_slice())
    }

    /// Sorts in place, ascending by [`Ordered::less_than`]. Stable.
    ///
    /// Incomparable elements keep their input order relative to each other
    /// wherever no comparable element separates them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let mut sequence = sequence![1, 4, 3, 5, 2];
    /// sequence.sort();
    /// assert_eq!(sequence, sequence![1, 2, 3, 4, 5]);
    /// assert!(sequence.is_sorted());
    /// ```
    pub fn sort(&mut self) {
        trace_event!(length = self.len(), "sort");
        let sorted = merge_sort(self.take_storage(), &mut |left: &T, right: &T| {
            left.less_than(right)
        });
        self.replace_storage(sorted);
    }

    /// Returns `true` if no element is less than its predecessor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// assert!(sequence![1, 1, 2].is_sorted());
    /// assert!(!sequence![2, 1].is_sorted());
    /// ```
    pub fn is_sorted(&self) -> bool {
        self.as_slice()
            .windows(2)
            .all(|pair| !pair[1].less_than(&pair[0]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence;
    use rstest::rstest;

    #[rstest]
    #[case(&[], &[], Ordering::Equal)]
    #[case(&[], &[1], Ordering::Less)]
    #[case(&[1], &[], Ordering::Greater)]
    #[case(&[1, 2, 3], &[1, 2, 3], Ordering::Equal)]
    #[case(&[1, 2], &[1, 2, 3], Ordering::Less)]
    #[case(&[1, 3], &[1, 2, 3], Ordering::Greater)]
    fn test_compare(#[case] left: &[i32], #[case] right: &[i32], #[case] expected: Ordering) {
        let left = Sequence::from_vec(left.to_vec());
        let right = Sequence::from_vec(right.to_vec());
        assert_eq!(left.compare(&right), expected);
        assert_eq!(right.compare(&left), expected.reverse());
    }

    #[rstest]
    fn test_compare_nested() {
        let left = sequence![sequence![1], sequence![2, 3]];
        let right = sequence![sequence![1], sequence![2, 4]];
        assert_eq!(left.compare(&right), Ordering::Less);
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![1])]
    #[case(vec![5, 4, 3, 2, 1])]
    #[case((0..100).rev().collect())]
    #[case((0..57).map(|value| (value * 31) % 17).collect())]
    fn test_sort_matches_std(#[case] values: Vec<i32>) {
        let mut expected = values.clone();
        expected.sort_unstable();
        let mut sequence = Sequence::from_vec(values);
        sequence.sort();
        assert_eq!(sequence.into_vec(), expected);
    }

    #[rstest]
    fn test_sort_is_stable() {
        let mut pairs = Sequence::from_vec(
            (0..40).map(|index| (index % 3, index)).collect::<Vec<(i32, i32)>>(),
        );
        pairs.sort_by(|left, right| left.0.cmp(&right.0));
        let ordered = pairs.into_vec();
        for window in ordered.windows(2) {
            let (previous, current) = (window[0], window[1]);
            assert!(previous.0 < current.0 || (previous.0 == current.0 && previous.1 < current.1));
        }
    }

    #[rstest]
    fn test_sort_with_nan_does_not_panic() {
        let mut sequence = Sequence::from_vec(vec![3.0, f64::NAN, 1.0, 2.0, f64::NAN, 0.5]);
        sequence.sort();
        assert_eq!(sequence.len(), 6);
        assert_eq!(sequence.iter().filter(|value| value.is_nan()).count(), 2);
    }

    #[rstest]
    fn test_sort_nested_sequences() {
        let mut nested = sequence![sequence![2], sequence![1, 5], sequence![1]];
        nested.sort();
        assert_eq!(nested, sequence![sequence![1], sequence![1, 5], sequence![2]]);
    }

    #[rstest]
    fn test_sort_by_key_calls_function_once_per_element() {
        let mut sequence = Sequence::from_vec((0..50).rev().collect::<Vec<i32>>());
        let mut calls = 0;
        sequence.sort_by_key(|value| {
            calls += 1;
            *value
        });
        assert_eq!(calls, 50);
        assert!(sequence.is_sorted());
    }

    #[rstest]
    #[case(&[], true)]
    #[case(&[1], true)]
    #[case(&[1, 1, 2], true)]
    #[case(&[1, 3, 2], false)]
    fn test_is_sorted(#[case] values: &[i32], #[case] expected: bool) {
        let sequence = Sequence::from_vec(values.to_vec());
        assert_eq!(sequence.is_sorted(), expected);
        assert_eq!(sequence.is_sorted_by(i32::cmp), expected);
        assert_eq!(sequence.is_sorted_by_key(|value| *value), expected);
    }

    #[rstest]
    fn test_is_sorted_by_descending() {
        let sequence = sequence![3, 2, 2, 1];
        assert!(sequence.is_sorted_by(|left, right| right.cmp(left)));
        assert!(!sequence.is_sorted());
    }
}
