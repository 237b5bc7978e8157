//! In-place modification: filling, rotation, reversal and deduplication.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `fill`, `fill_with`, `fill_with_default` | O(n) |
//! | `rotate_left`, `rotate_right`, `reverse_in_place` | O(n) |
//! | `dedup` | O(n²) |
//! | `dedup_hashed` | O(n) expected |
//! | `swap_values` | O(n) |

use std::collections::HashSet;
use std::hash::Hash;

use super::Sequence;
use crate::capability::Equality;

#[cfg(feature = "fxhash")]
type DedupState = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type DedupState = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type DedupState = std::collections::hash_map::RandomState;

impl<T> Sequence<T> {
    /// Overwrites every element with the result of a call to `function`.
    ///
    /// `function` runs once per element, front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let mut counter = 0;
    /// let mut sequence = sequence![0, 0, 0];
    /// sequence.fill_with(|| {
    ///     counter += 1;
    ///     counter
    /// });
    /// assert_eq!(sequence, sequence![1, 2, 3]);
    /// ```
    pub fn fill_with<F>(&mut self, mut function: F)
    where
        F: FnMut() -> T,
    {
        for element in self.iter_mut() {
            *element = function();
        }
    }

    /// Overwrites every element with `T::default()`.
    pub fn fill_with_default(&mut self)
    where
        T: Default,
    {
        self.fill_with(T::default);
    }

    /// Moves every element `count` positions towards the front, wrapping
    /// around. Rotation is by `count % len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let mut sequence = sequence![1, 2, 3];
    /// sequence.rotate_left(1);
    /// assert_eq!(sequence, sequence![2, 3, 1]);
    /// sequence.rotate_left(5);
    /// assert_eq!(sequence, sequence![1, 2, 3]);
    /// ```
    pub fn rotate_left(&mut self, count: usize) {
        let length = self.len();
        if length == 0 || count == 0 {
            return;
        }
        self.elements.rotate_left(count % length);
    }

    /// Moves every element `count` positions towards the back, wrapping
    /// around. Rotation is by `count % len`.
    pub fn rotate_right(&mut self, count: usize) {
        let length = self.len();
        if length == 0 || count == 0 {
            return;
        }
        self.elements.rotate_right(count % length);
    }

    /// Reverses the element order in place.
    pub fn reverse_in_place(&mut self) {
        self.elements.reverse();
    }
}

impl<T: Clone> Sequence<T> {
    /// Overwrites every element with a copy of `value`.
    pub fn fill(&mut self, value: &T) {
        self.elements.fill(value.clone());
    }
}

impl<T: Equality> Sequence<T> {
    /// Removes repeated elements, keeping the first occurrence of each value
    /// in its original position.
    ///
    /// Uses only [`Equality`], so it works for kinds that cannot be hashed.
    /// Values that are not equal to themselves (such as `NaN`) are never
    /// considered duplicates. Runs in O(n²); see
    /// [`dedup_hashed`](Sequence::dedup_hashed) for the hashing variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let mut sequence = sequence![1, 1, 2, 2, 3, 3];
    /// sequence.dedup();
    /// assert_eq!(sequence, sequence![1, 2, 3]);
    /// ```
    pub fn dedup(&mut self) {
        let mut kept: Vec<T> = Vec::with_capacity(self.len());
        for element in self.take_storage() {
            if !kept.iter().any(|seen| seen.equals(&element)) {
                kept.push(element);
            }
        }
        self.replace_storage(kept);
    }
}

impl<T: Equality + Clone> Sequence<T> {
    /// Exchanges the two values everywhere: each element equal to `first`
    /// becomes `second` and each element equal to `second` becomes `first`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let mut sequence = sequence![1, 1, 2, 2, 3, 3];
    /// sequence.swap_values(&1, &3);
    /// assert_eq!(sequence, sequence![3, 3, 2, 2, 1, 1]);
    /// ```
    pub fn swap_values(&mut self, first: &T, second: &T) {
        for element in self.iter_mut() {
            if element.equals(first) {
                *element = second.clone();
            } else if element.equals(second) {
                *element = first.clone();
            }
        }
    }
}

impl<T: Hash + Eq> Sequence<T> {
    /// Removes repeated elements in expected linear time, keeping the first
    /// occurrence of each value in its original position.
    ///
    /// Duplicates are detected with [`Hash`] and [`Eq`]. The hasher is
    /// `FxBuildHasher` with the `fxhash` feature, `ahash::RandomState` with
    /// `ahash`, and the standard `RandomState` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let mut words = sequence!["b", "a", "b", "c", "a"];
    /// words.dedup_hashed();
    /// assert_eq!(words, sequence!["b", "a", "c"]);
    /// ```
    pub fn dedup_hashed(&mut self) {
        let keep: Vec<bool> = {
            let mut seen: HashSet<&T, DedupState> =
                HashSet::with_capacity_and_hasher(self.len(), DedupState::default());
            self.iter().map(|element| seen.insert(element)).collect()
        };
        let mut flags = keep.into_iter();
        self.elements.retain(|_| flags.next().unwrap_or(false));
    }
}
