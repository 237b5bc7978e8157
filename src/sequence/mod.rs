//! The ordered, mutable sequence container and its algorithms.
//!
//! [`Sequence<T>`] is a growable, 0-indexed list of elements of one kind.
//! Its operations fall into a few groups, each in its own submodule:
//!
//! | Group | Examples | Bound on `T` |
//! |-------|----------|--------------|
//! | primitives | `get`, `set`, `push`, `pop_front`, `insert`, `remove` | none |
//! | queries | `contains`, `count`, `find`, `first_index_of`, `min` | [`Equality`] / [`Ordered`] |
//! | transformations | `map`, `filter`, `skip_while`, `interleave`, `fold` | mostly `Clone` |
//! | modifications | `rotate_left`, `dedup`, `fill`, `swap_values` | varies |
//! | structure | `split`, `split_n`, `chunk`, `chunk_by`, `windows`, `flatten` | `Clone` (+ [`Equality`]) |
//! | sorting | `sort`, `sort_by`, `is_sorted`, `compare` | [`Ordered`] |
//!
//! # Indexing
//!
//! Index-taking operations accept an `isize`. Negative indices count from
//! the back: `-1` is the last element and `-len` the first. Indices outside
//! `-len..len` are reported as [`SequenceError::OutOfRange`].
//!
//! # Errors
//!
//! Every fallible operation returns [`Result`]; none of them silently
//! substitutes a default value or clamps an argument.
//!
//! # Examples
//!
//! ```rust
//! use seqkit::sequence;
//! use seqkit::sequence::Sequence;
//!
//! let mut numbers = sequence![3, 1, 4, 1, 5, 9, 2, 6];
//! numbers.sort();
//! assert_eq!(numbers, sequence![1, 1, 2, 3, 4, 5, 6, 9]);
//! assert!(numbers.is_sorted());
//!
//! assert_eq!(numbers.get(-1), Ok(&9));
//!
//! let parts = sequence![1, 3, 2, 3, 4].split(&3);
//! assert_eq!(parts, sequence![sequence![1], sequence![2], sequence![4]]);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};

use crate::capability::{Equality, Ordered, slices_equal};

/// Creates a [`Sequence`] containing the arguments, like `vec!`.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence;
/// use seqkit::sequence::Sequence;
///
/// let empty: Sequence<i32> = sequence![];
/// assert!(empty.is_empty());
///
/// let listed = sequence![1, 2, 3];
/// assert_eq!(listed.len(), 3);
///
/// let repeated = sequence!['x'; 4];
/// assert_eq!(repeated.as_slice(), &['x', 'x', 'x', 'x']);
/// ```
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::sequence::Sequence::new()
    };
    ($element:expr; $count:expr) => {
        $crate::sequence::Sequence::from_vec(::std::vec![$element; $count])
    };
    ($($element:expr),+ $(,)?) => {
        $crate::sequence::Sequence::from_vec(::std::vec![$($element),+])
    };
}

mod access;
mod error;
mod index;
mod modify;
mod query;
mod sort;
mod structure;
mod transform;

pub use error::{Result, SequenceError};

/// An ordered, 0-indexed, mutable and resizable sequence of elements.
///
/// The struct itself places no bound on `T`; each group of operations
/// states the capabilities it needs. Mutating operations take `&mut self`,
/// non-mutating ones return a freshly allocated `Sequence` and leave the
/// receiver untouched.
///
/// Equality (`==`) is element-wise through [`Equality`], and `<`/`>` are
/// lexicographic through [`Ordered`], so sequences of sequences compare and
/// sort like any other element kind.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::Sequence;
///
/// let mut sequence = Sequence::new();
/// sequence.push(2);
/// sequence.push_front(1);
/// sequence.push_many([3, 4]);
///
/// assert_eq!(sequence.len(), 4);
/// assert_eq!(sequence.pop(), Ok(4));
/// assert_eq!(sequence.pop_front(), Ok(1));
/// assert_eq!(sequence.as_slice(), &[2, 3]);
/// ```
#[derive(Clone)]
pub struct Sequence<T> {
    elements: Vec<T>,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let sequence: Sequence<u8> = Sequence::new();
    /// assert!(sequence.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates an empty sequence with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Wraps an existing vector without copying it.
    #[inline]
    #[must_use]
    pub const fn from_vec(elements: Vec<T>) -> Self {
        Self { elements }
    }

    /// Creates a sequence holding exactly one element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self {
            elements: vec![element],
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over references to the elements, front to back.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns an iterator over mutable references to the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.elements.iter_mut()
    }

    /// Views the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the sequence and returns its backing vector.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Removes every element, keeping the allocated capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let mut sequence = sequence![1, 2, 3];
    /// sequence.clear();
    /// assert!(sequence.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Removes every element and returns them as a new sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let mut sequence = sequence![1, 2, 3];
    /// let purged = sequence.purge();
    /// assert!(sequence.is_empty());
    /// assert_eq!(purged, sequence![1, 2, 3]);
    /// ```
    #[must_use = "use `clear` to discard the elements"]
    pub fn purge(&mut self) -> Self {
        Self::from_vec(std::mem::take(&mut self.elements))
    }

    pub(crate) fn replace_storage(&mut self, elements: Vec<T>) {
        self.elements = elements;
    }

    pub(crate) fn take_storage(&mut self) -> Vec<T> {
        std::mem::take(&mut self.elements)
    }
}

impl<T: Clone> Sequence<T> {
    /// Returns a deep value copy backed by new storage.
    ///
    /// Equivalent to [`Clone::clone`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let original = sequence![1, 2];
    /// let mut copied = original.copy();
    /// copied.push(3);
    /// assert_eq!(original.len(), 2);
    /// assert_eq!(copied.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Sequence<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    #[inline]
    fn from(elements: [T; N]) -> Self {
        Self::from_vec(Vec::from(elements))
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    #[inline]
    fn from(sequence: Sequence<T>) -> Self {
        sequence.elements
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

/// Plain `usize` indexing; panics when out of bounds, like `Vec`.
impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<T> IndexMut<usize> for Sequence<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.elements[index]
    }
}

impl<T: Equality> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        slices_equal(&self.elements, &other.elements)
    }
}

impl<T: Equality + Eq> Eq for Sequence<T> {}

impl<T: Ordered> PartialOrd for Sequence<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.partial_compare(other)
    }
}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.len().hash(state);
        for element in &self.elements {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Capability Implementations
// =============================================================================

impl<T: Equality> Equality for Sequence<T> {
    fn equals(&self, other: &Self) -> bool {
        slices_equal(&self.elements, &other.elements)
    }
}

/// Ordered by [`Sequence::compare`], except that unequal sequences which
/// `compare` cannot tell apart (they differ only at incomparable pairs) are
/// incomparable, so `Some(Equal)` always coincides with `equals`.
impl<T: Ordered> Ordered for Sequence<T> {
    fn partial_compare(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match self.compare(other) {
            std::cmp::Ordering::Equal if !self.equals(other) => None,
            decided => Some(decided),
        }
    }
}

static_assertions::assert_impl_all!(Sequence<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(Sequence<Sequence<String>>: Send, Sync, Ordered);
static_assertions::assert_not_impl_any!(Sequence<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Sequence<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SequenceVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SequenceVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SequenceVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Sequence<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(Sequence::from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Sequence<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SequenceVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_creates_empty() {
        let sequence: Sequence<i32> = Sequence::new();
        assert!(sequence.is_empty());
        assert_eq!(sequence.len(), 0);
    }

    #[rstest]
    fn test_macro_forms() {
        let empty: Sequence<i32> = sequence![];
        assert!(empty.is_empty());
        assert_eq!(sequence![1, 2, 3].as_slice(), &[1, 2, 3]);
        assert_eq!(sequence![0_u8; 3].as_slice(), &[0, 0, 0]);
        assert_eq!(sequence![1, 2,].len(), 2);
    }

    #[rstest]
    fn test_display() {
        let empty: Sequence<i32> = Sequence::new();
        assert_eq!(format!("{empty}"), "[]");
        assert_eq!(format!("{}", sequence![1, 2, 3]), "[1, 2, 3]");
        assert_eq!(
            format!("{}", sequence![sequence![1], sequence![2, 3]]),
            "[[1], [2, 3]]"
        );
    }

    #[rstest]
    fn test_debug() {
        assert_eq!(format!("{:?}", sequence!["a", "b"]), r#"["a", "b"]"#);
    }

    #[rstest]
    fn test_equality_is_order_sensitive() {
        assert_eq!(sequence![1, 2, 3], sequence![1, 2, 3]);
        assert_ne!(sequence![1, 2, 3], sequence![3, 2, 1]);
        assert_ne!(sequence![1, 2], sequence![1, 2, 3]);
    }

    #[rstest]
    fn test_partial_ord_is_lexicographic() {
        assert!(sequence![1, 2] < sequence![1, 2, 3]);
        assert!(sequence![1, 3] > sequence![1, 2, 3]);
        assert!(sequence![sequence![1]] < sequence![sequence![2]]);
    }

    #[rstest]
    fn test_partial_ord_agrees_with_equality_around_nan() {
        let with_nan = sequence![1.0, f64::NAN];
        let plain = sequence![1.0, 5.0];
        assert_eq!(with_nan.compare(&plain), std::cmp::Ordering::Equal);
        assert!(with_nan != plain);
        assert_eq!(with_nan.partial_cmp(&plain), None);
        assert_eq!(with_nan.partial_compare(&plain), None);
        assert!(!(with_nan <= plain));
        assert!(!(with_nan >= plain));

        assert_eq!(
            sequence![1.0, f64::NAN, 0.0].partial_cmp(&sequence![1.0, 5.0, 1.0]),
            Some(std::cmp::Ordering::Less)
        );
        assert_eq!(plain.partial_cmp(&plain.copy()), Some(std::cmp::Ordering::Equal));
    }

    #[rstest]
    fn test_copy_has_independent_storage() {
        let original = sequence![String::from("a")];
        let mut copied = original.copy();
        copied[0].push('b');
        assert_eq!(original[0], "a");
        assert_eq!(copied[0], "ab");
    }

    #[rstest]
    fn test_collect_and_extend() {
        let mut sequence: Sequence<i32> = (1..=3).collect();
        sequence.extend([4, 5]);
        assert_eq!(sequence, sequence![1, 2, 3, 4, 5]);
        let vector: Vec<i32> = sequence.into();
        assert_eq!(vector, vec![1, 2, 3, 4, 5]);
    }

    #[rstest]
    fn test_conversions() {
        assert_eq!(Sequence::from([1, 2]), sequence![1, 2]);
        assert_eq!(Sequence::from(vec!['a']), Sequence::singleton('a'));
        assert_eq!(sequence![1, 2].into_vec(), vec![1, 2]);
    }

    #[rstest]
    fn test_hash_matches_for_equal_sequences() {
        use std::collections::hash_map::DefaultHasher;

        let hash_of = |sequence: &Sequence<i32>| {
            let mut hasher = DefaultHasher::new();
            sequence.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash_of(&sequence![1, 2, 3]), hash_of(&sequence![1, 2, 3]));
    }

    #[rstest]
    fn test_clear_keeps_capacity() {
        let mut sequence: Sequence<i32> = Sequence::with_capacity(16);
        sequence.push_many([1, 2, 3]);
        sequence.clear();
        assert!(sequence.is_empty());
        assert!(sequence.elements.capacity() >= 16);
    }

    #[rstest]
    fn test_clear_and_purge() {
        let mut sequence = sequence![1, 2, 3];
        let purged = sequence.purge();
        assert!(sequence.is_empty());
        assert_eq!(purged.len(), 3);

        let mut sequence = purged;
        sequence.clear();
        assert!(sequence.is_empty());
    }

    #[rstest]
    fn test_iter_mut_updates_in_place() {
        let mut sequence = sequence![1, 2, 3];
        for element in &mut sequence {
            *element *= 10;
        }
        assert_eq!(sequence, sequence![10, 20, 30]);
    }
}
