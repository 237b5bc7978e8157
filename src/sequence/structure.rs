//! Structural algorithms: partitioning a sequence into a sequence of
//! sequences, and joining it back.
//!
//! Partitioning operations return `Sequence<Sequence<T>>`; every partition
//! is a fresh copy and the input is left untouched. The inverse direction
//! lives on `Sequence<Sequence<T>>` itself: [`flatten`](Sequence::flatten),
//! [`intercalate`](Sequence::intercalate) and [`rejoin`](Sequence::rejoin).
//!
//! # Examples
//!
//! ```rust
//! use seqkit::sequence;
//!
//! let line = sequence!['a', ',', 'b', ',', ',', 'c'];
//! let fields = line.split(&',');
//! assert_eq!(fields.len(), 4);
//! assert_eq!(fields.rejoin(&','), line);
//! ```

use super::Sequence;
use super::error::{Result, SequenceError};
use crate::capability::Equality;

fn partition<T: Clone>(part: &[T]) -> Sequence<T> {
    Sequence::from_vec(part.to_vec())
}

impl<T: Clone> Sequence<T> {
    /// Splits at every element for which `predicate` returns `true`,
    /// dropping the matching elements.
    ///
    /// Matches at either end, or next to each other, produce empty
    /// partitions. The result always has one more partition than there were
    /// matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let parts = sequence![1, 2, 0, 3, 0].split_by(|value| *value == 0);
    /// assert_eq!(parts, sequence![sequence![1, 2], sequence![3], sequence![]]);
    /// ```
    pub fn split_by<F>(&self, mut predicate: F) -> Sequence<Self>
    where
        F: FnMut(&T) -> bool,
    {
        self.as_slice()
            .split(|element| predicate(element))
            .map(partition)
            .collect()
    }

    /// Groups the elements into runs of `size`; the last run may be shorter.
    ///
    /// An empty sequence yields no chunks.
    ///
    /// # Errors
    ///
    /// [`SequenceError::InvalidArgument`] if `size` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let chunks = sequence![1, 2, 3, 4, 5].chunk(2).unwrap();
    /// assert_eq!(chunks, sequence![sequence![1, 2], sequence![3, 4], sequence![5]]);
    /// ```
    pub fn chunk(&self, size: usize) -> Result<Sequence<Self>> {
        if size == 0 {
            return Err(SequenceError::invalid_argument(
                "chunk",
                "size must be greater than zero",
            ));
        }
        Ok(self.as_slice().chunks(size).map(partition).collect())
    }

    /// Groups consecutive elements, starting a new group wherever
    /// `predicate(previous, current)` returns `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let runs = sequence![1, 2, 3, 1, 2, 0].chunk_by(|previous, current| previous < current);
    /// assert_eq!(runs, sequence![sequence![1, 2, 3], sequence![1, 2], sequence![0]]);
    /// ```
    pub fn chunk_by<F>(&self, mut predicate: F) -> Sequence<Self>
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.as_slice()
            .chunk_by(|previous, current| predicate(previous, current))
            .map(partition)
            .collect()
    }

    /// Returns every contiguous window of `size` elements, front to back.
    ///
    /// A sequence shorter than `size` yields a single short window holding
    /// all of it; an empty sequence yields no windows.
    ///
    /// # Errors
    ///
    /// [`SequenceError::InvalidArgument`] if `size` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let windows = sequence![1, 2, 3, 4].windows(3).unwrap();
    /// assert_eq!(windows, sequence![sequence![1, 2, 3], sequence![2, 3, 4]]);
    ///
    /// let short = sequence![1, 2].windows(3).unwrap();
    /// assert_eq!(short, sequence![sequence![1, 2]]);
    /// ```
    pub fn windows(&self, size: usize) -> Result<Sequence<Self>> {
        if size == 0 {
            return Err(SequenceError::invalid_argument(
                "windows",
                "size must be greater than zero",
            ));
        }
        if self.is_empty() {
            return Ok(Sequence::new());
        }
        if self.len() < size {
            return Ok(Sequence::singleton(self.clone()));
        }
        Ok(self.as_slice().windows(size).map(partition).collect())
    }
}

impl<T: Equality + Clone> Sequence<T> {
    /// Splits at every element equal to `separator`, dropping the
    /// separators.
    ///
    /// Without a separator the result is `[self]`. Rejoining the result with
    /// [`rejoin`](Sequence::rejoin) reconstructs the input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let parts = sequence![1, 0, 2, 3].split(&0);
    /// assert_eq!(parts, sequence![sequence![1], sequence![2, 3]]);
    ///
    /// let untouched = sequence![1, 2].split(&0);
    /// assert_eq!(untouched, sequence![sequence![1, 2]]);
    /// ```
    pub fn split(&self, separator: &T) -> Sequence<Self> {
        self.split_by(|element| element.equals(separator))
    }

    /// Splits at the first `count - 1` separators; the final partition holds
    /// the rest verbatim, further separators included.
    ///
    /// `count` of 0 or 1 yields `[self]`; no element is ever dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let parts = sequence![1, 0, 2, 0, 3].split_n(2, &0);
    /// assert_eq!(parts, sequence![sequence![1], sequence![2, 0, 3]]);
    /// ```
    pub fn split_n(&self, count: usize, separator: &T) -> Sequence<Self> {
        self.as_slice()
            .splitn(count.max(1), |element| element.equals(separator))
            .map(partition)
            .collect()
    }

    /// Splits at the first separator only; same as `split_n(2, separator)`.
    pub fn split_once(&self, separator: &T) -> Sequence<Self> {
        self.split_n(2, separator)
    }
}

impl<T: Clone> Sequence<Sequence<T>> {
    /// Concatenates the inner sequences, removing one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let nested = sequence![sequence![1, 2], sequence![], sequence![3]];
    /// assert_eq!(nested.flatten(), sequence![1, 2, 3]);
    /// ```
    pub fn flatten(&self) -> Sequence<T> {
        self.iter()
            .flat_map(|inner| inner.iter().cloned())
            .collect()
    }

    /// Concatenates the inner sequences with `separator` between each pair.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let words = sequence![sequence!['a', 'b'], sequence!['c']];
    /// assert_eq!(words.intercalate(&sequence![',', ' ']), sequence!['a', 'b', ',', ' ', 'c']);
    /// ```
    pub fn intercalate(&self, separator: &Sequence<T>) -> Sequence<T> {
        let mut joined = Vec::new();
        for (position, inner) in self.iter().enumerate() {
            if position > 0 {
                joined.extend_from_slice(separator.as_slice());
            }
            joined.extend_from_slice(inner.as_slice());
        }
        Sequence::from_vec(joined)
    }

    /// Concatenates the inner sequences with a single `separator` element
    /// between each pair. Inverse of [`split`](Sequence::split).
    pub fn rejoin(&self, separator: &T) -> Sequence<T> {
        self.intercalate(&Sequence::singleton(separator.clone()))
    }
}
