//! Read-only queries: membership, counting, searching and extrema.

use super::Sequence;
use super::error::{Result, SequenceError};
use crate::capability::{Equality, Ordered};

impl<T> Sequence<T> {
    /// Counts the elements for which `predicate` returns `true`.
    pub fn count_by<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|element| predicate(element)).count()
    }

    /// Returns the first element for which `predicate` returns `true`.
    ///
    /// # Errors
    ///
    /// [`SequenceError::NotFound`] if no element matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let sequence = sequence![1, 4, 6, 7];
    /// assert_eq!(sequence.find(|value| value % 2 == 0), Ok(&4));
    /// assert!(sequence.find(|value| *value > 10).is_err());
    /// ```
    pub fn find<F>(&self, mut predicate: F) -> Result<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter()
            .find(|element| predicate(element))
            .ok_or_else(|| SequenceError::not_found("find"))
    }

    /// Returns the first `Some` produced by `function`.
    ///
    /// # Errors
    ///
    /// [`SequenceError::NotFound`] if `function` returns `None` for every
    /// element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let sequence = sequence!["a", "12", "b"];
    /// assert_eq!(sequence.find_map(|text| text.parse::<i32>().ok()), Ok(12));
    /// ```
    pub fn find_map<U, F>(&self, function: F) -> Result<U>
    where
        F: FnMut(&T) -> Option<U>,
    {
        self.iter()
            .find_map(function)
            .ok_or_else(|| SequenceError::not_found("find_map"))
    }

    /// Returns `true` if `predicate` holds for every element.
    ///
    /// An empty sequence satisfies any predicate.
    pub fn all<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Returns `true` if `predicate` holds for at least one element.
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Returns the element whose key is the greatest.
    ///
    /// The key function runs once per element. On ties the first such
    /// element wins. Keys that are incomparable with the current best are
    /// skipped.
    ///
    /// # Errors
    ///
    /// [`SequenceError::Empty`] if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let words = sequence!["fig", "banana", "kiwi"];
    /// assert_eq!(words.max_by_key(|word| word.len()), Ok(&"banana"));
    /// ```
    pub fn max_by_key<K, F>(&self, function: F) -> Result<&T>
    where
        K: Ordered,
        F: FnMut(&T) -> K,
    {
        self.extreme_by_key(function, K::greater_than)
            .ok_or_else(|| SequenceError::empty("max_by_key"))
    }

    /// Returns the element whose key is the least.
    ///
    /// # Errors
    ///
    /// [`SequenceError::Empty`] if the sequence is empty.
    pub fn min_by_key<K, F>(&self, function: F) -> Result<&T>
    where
        K: Ordered,
        F: FnMut(&T) -> K,
    {
        self.extreme_by_key(function, K::less_than)
            .ok_or_else(|| SequenceError::empty("min_by_key"))
    }

    fn extreme_by_key<K, F, B>(&self, mut function: F, better: B) -> Option<&T>
    where
        F: FnMut(&T) -> K,
        B: Fn(&K, &K) -> bool,
    {
        let mut elements = self.iter();
        let first = elements.next()?;
        let initial = (first, function(first));
        let (best, _) = elements.fold(initial, |(best, best_key), element| {
            let key = function(element);
            if better(&key, &best_key) {
                (element, key)
            } else {
                (best, best_key)
            }
        });
        Some(best)
    }
}

impl<T: Equality> Sequence<T> {
    /// Returns `true` if some element equals `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// assert!(sequence![1, 2, 3].contains(&2));
    /// assert!(!sequence![1.0, f64::NAN].contains(&f64::NAN));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|element| element.equals(value))
    }

    /// Returns `true` if every one of `values` occurs in the sequence.
    pub fn contains_all(&self, values: &[T]) -> bool {
        values.iter().all(|value| self.contains(value))
    }

    /// Returns `true` if every element equals `value`.
    ///
    /// An empty sequence contains only anything.
    pub fn contains_only(&self, value: &T) -> bool {
        self.iter().all(|element| element.equals(value))
    }

    /// Counts the elements equal to `value`.
    pub fn count(&self, value: &T) -> usize {
        self.count_by(|element| element.equals(value))
    }

    /// Returns `true` if `self` is a strict prefix of `other`.
    ///
    /// A sequence is never a prefix of itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// assert!(sequence![1, 2].is_prefix_of(&sequence![1, 2, 3]));
    /// assert!(!sequence![1, 2].is_prefix_of(&sequence![1, 2]));
    /// ```
    pub fn is_prefix_of(&self, other: &Self) -> bool {
        self.len() < other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(left, right)| left.equals(right))
    }

    /// Returns the position of the first element equal to `value`.
    ///
    /// # Errors
    ///
    /// [`SequenceError::NotFound`] if no element equals `value`.
    pub fn first_index_of(&self, value: &T) -> Result<usize> {
        self.iter()
            .position(|element| element.equals(value))
            .ok_or_else(|| SequenceError::not_found("first_index_of"))
    }

    /// Returns the position of the last element equal to `value`.
    ///
    /// # Errors
    ///
    /// [`SequenceError::NotFound`] if no element equals `value`.
    pub fn last_index_of(&self, value: &T) -> Result<usize> {
        self.iter()
            .rposition(|element| element.equals(value))
            .ok_or_else(|| SequenceError::not_found("last_index_of"))
    }

    /// Returns the positions of every element equal to `value`, ascending.
    ///
    /// # Errors
    ///
    /// [`SequenceError::NotFound`] if no element equals `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let sequence = sequence![7, 1, 7, 7];
    /// assert_eq!(sequence.all_indexes_of(&7), Ok(sequence![0, 2, 3]));
    /// ```
    pub fn all_indexes_of(&self, value: &T) -> Result<Sequence<usize>> {
        let positions: Sequence<usize> = self
            .iter()
            .enumerate()
            .filter_map(|(position, element)| element.equals(value).then_some(position))
            .collect();
        if positions.is_empty() {
            Err(SequenceError::not_found("all_indexes_of"))
        } else {
            Ok(positions)
        }
    }
}

impl<T: Ordered> Sequence<T> {
    /// Returns the least element, the first one on ties.
    ///
    /// Elements incomparable with the running minimum never replace it.
    ///
    /// # Errors
    ///
    /// [`SequenceError::Empty`] if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// assert_eq!(sequence![3, 1, 2].min(), Ok(&1));
    /// assert_eq!(sequence![3, 1, 2].max(), Ok(&3));
    /// ```
    pub fn min(&self) -> Result<&T> {
        self.iter()
            .reduce(|best, element| if element.less_than(best) { element } else { best })
            .ok_or_else(|| SequenceError::empty("min"))
    }

    /// Returns the greatest element, the first one on ties.
    ///
    /// # Errors
    ///
    /// [`SequenceError::Empty`] if the sequence is empty.
    pub fn max(&self) -> Result<&T> {
        self.iter()
            .reduce(|best, element| {
                if element.greater_than(best) {
                    element
                } else {
                    best
                }
            })
            .ok_or_else(|| SequenceError::empty("max"))
    }
}
