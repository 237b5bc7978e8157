//! Non-mutating transformations.
//!
//! Every operation here leaves `self` untouched and returns a freshly
//! allocated result. Functions passed in are invoked exactly once per
//! element they are applied to, in sequence order.

use super::Sequence;
use super::error::{Result, SequenceError};

impl<T> Sequence<T> {
    /// Calls `function` on every element in order.
    pub fn for_each<F>(&self, function: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(function);
    }

    /// Calls `function` with the position and the element, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let mut seen = Vec::new();
    /// sequence!['a', 'b'].for_each_indexed(|position, letter| seen.push((position, *letter)));
    /// assert_eq!(seen, vec![(0, 'a'), (1, 'b')]);
    /// ```
    pub fn for_each_indexed<F>(&self, mut function: F)
    where
        F: FnMut(usize, &T),
    {
        for (position, element) in self.iter().enumerate() {
            function(position, element);
        }
    }

    /// Applies `function` to every element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let lengths = sequence!["a", "bcd"].map(|text| text.len());
    /// assert_eq!(lengths, sequence![1, 3]);
    /// ```
    pub fn map<U, F>(&self, function: F) -> Sequence<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(function).collect()
    }

    /// Keeps the `Some` results of `function`, dropping the rest.
    pub fn filter_map<U, F>(&self, function: F) -> Sequence<U>
    where
        F: FnMut(&T) -> Option<U>,
    {
        self.iter().filter_map(function).collect()
    }

    /// Maps every element to a sequence and concatenates the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let expanded = sequence![1, 2].flat_map(|value| sequence![*value; 2]);
    /// assert_eq!(expanded, sequence![1, 1, 2, 2]);
    /// ```
    pub fn flat_map<U, F>(&self, function: F) -> Sequence<U>
    where
        F: FnMut(&T) -> Sequence<U>,
    {
        self.iter().flat_map(function).collect()
    }

    /// Folds every element into an accumulator, front to back.
    pub fn fold<A, F>(&self, initial: A, function: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.iter().fold(initial, function)
    }

    /// Pairs elements by position; the longer input is truncated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let pairs = sequence![1, 2, 3].zip(&sequence!['a', 'b']);
    /// assert_eq!(pairs, sequence![(1, 'a'), (2, 'b')]);
    /// ```
    pub fn zip<U>(&self, other: &Sequence<U>) -> Sequence<(T, U)>
    where
        T: Clone,
        U: Clone,
    {
        self.iter()
            .zip(other.iter())
            .map(|(left, right)| (left.clone(), right.clone()))
            .collect()
    }
}

impl<T: Clone> Sequence<T> {
    /// Replaces each element for which `function` returns `Some`, keeping
    /// the others as they are.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let doubled_evens = sequence![1, 2, 3, 4]
    ///     .map_or_keep(|value| (value % 2 == 0).then_some(value * 2));
    /// assert_eq!(doubled_evens, sequence![1, 4, 3, 8]);
    /// ```
    pub fn map_or_keep<F>(&self, mut function: F) -> Self
    where
        F: FnMut(&T) -> Option<T>,
    {
        self.iter()
            .map(|element| function(element).unwrap_or_else(|| element.clone()))
            .collect()
    }

    /// Keeps the elements for which `predicate` returns `true`.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.iter()
            .filter(|element| predicate(element))
            .cloned()
            .collect()
    }

    /// Keeps every `step`-th element, starting with the first.
    ///
    /// # Errors
    ///
    /// [`SequenceError::InvalidArgument`] if `step` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let sequence = sequence![0, 1, 2, 3, 4];
    /// assert_eq!(sequence.step_by(2), Ok(sequence![0, 2, 4]));
    /// assert!(sequence.step_by(0).is_err());
    /// ```
    pub fn step_by(&self, step: usize) -> Result<Self> {
        if step == 0 {
            return Err(SequenceError::invalid_argument(
                "step_by",
                "step must be greater than zero",
            ));
        }
        Ok(self.iter().step_by(step).cloned().collect())
    }

    /// Drops the first `count` elements.
    pub fn skip(&self, count: usize) -> Self {
        self.iter().skip(count).cloned().collect()
    }

    /// Drops elements while `predicate` holds, keeping the rest.
    pub fn skip_while<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.iter()
            .skip_while(|element| predicate(element))
            .cloned()
            .collect()
    }

    /// Keeps at most the first `count` elements.
    pub fn take(&self, count: usize) -> Self {
        self.iter().take(count).cloned().collect()
    }

    /// Keeps elements while `predicate` holds.
    pub fn take_while<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.iter()
            .take_while(|element| predicate(element))
            .cloned()
            .collect()
    }

    /// Alternates elements of `self` and `other`, appending the remainder
    /// of the longer one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let merged = sequence![1, 3, 5, 6].interleave(&sequence![2, 4]);
    /// assert_eq!(merged, sequence![1, 2, 3, 4, 5, 6]);
    /// ```
    pub fn interleave(&self, other: &Self) -> Self {
        let shared = self.len().min(other.len());
        let mut merged = Vec::with_capacity(self.len() + other.len());
        for (left, right) in self.iter().zip(other.iter()) {
            merged.push(left.clone());
            merged.push(right.clone());
        }
        merged.extend_from_slice(&self.as_slice()[shared..]);
        merged.extend_from_slice(&other.as_slice()[shared..]);
        Self::from_vec(merged)
    }

    /// Concatenates `count` copies of the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// assert_eq!(sequence![1, 2].repeat(2), sequence![1, 2, 1, 2]);
    /// assert!(sequence![1, 2].repeat(0).is_empty());
    /// ```
    pub fn repeat(&self, count: usize) -> Self {
        std::iter::repeat_n(self.as_slice(), count)
            .flatten()
            .cloned()
            .collect()
    }

    /// Returns the elements in reverse order.
    pub fn reverse(&self) -> Self {
        self.iter().rev().cloned().collect()
    }

    /// Returns `self` followed by `other`.
    pub fn concat(&self, other: &Self) -> Self {
        let mut joined = Vec::with_capacity(self.len() + other.len());
        joined.extend_from_slice(self.as_slice());
        joined.extend_from_slice(other.as_slice());
        Self::from_vec(joined)
    }

    /// Returns `self`, then `separators`, then `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let joined = sequence![1, 2].join(&sequence![3], &[0, 0]);
    /// assert_eq!(joined, sequence![1, 2, 0, 0, 3]);
    /// ```
    pub fn join(&self, other: &Self, separators: &[T]) -> Self {
        let mut joined = Vec::with_capacity(self.len() + separators.len() + other.len());
        joined.extend_from_slice(self.as_slice());
        joined.extend_from_slice(separators);
        joined.extend_from_slice(other.as_slice());
        Self::from_vec(joined)
    }

    /// Folds the elements using the first one as the initial accumulator.
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
    /// assert_eq!(sequence![1, 2, 3].reduce(|sum, value| sum + value), Ok(6));
    /// ```
    pub fn reduce<F>(&self, mut function: F) -> Result<T>
    where
        F: FnMut(T, &T) -> T,
    {
        let (first, rest) = self
            .as_slice()
            .split_first()
            .ok_or_else(|| SequenceError::empty("reduce"))?;
        Ok(rest
            .iter()
            .fold(first.clone(), |accumulator, element| {
                function(accumulator, element)
            }))
    }
}
