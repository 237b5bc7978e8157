//! Container primitives: indexed access, growth at both ends, insertion and
//! removal.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `get`, `set`, `replace`, `swap` | O(1) |
//! | `push`, `pop` | amortized O(1) |
//! | `push_front`, `pop_front` | O(n) |
//! | `insert`, `remove` | O(n) |
//! | `get_range` | O(to - from) |

use super::Sequence;
use super::error::{Result, SequenceError};
use super::index::{checked_position, element_position, insertion_position};
use crate::capability::Equality;

impl<T> Sequence<T> {
    /// Returns a reference to the element at `index`.
    ///
    /// Negative indices count from the back.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::Empty`] if the sequence is empty
    /// - [`SequenceError::OutOfRange`] if `index` is outside `-len..len`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    /// use seqkit::sequence::SequenceError;
    ///
    /// let sequence = sequence!['a', 'b', 'c'];
    /// assert_eq!(sequence.get(0), Ok(&'a'));
    /// assert_eq!(sequence.get(-1), Ok(&'c'));
    /// assert_eq!(sequence.get(-3), Ok(&'a'));
    /// assert_eq!(
    ///     sequence.get(-4),
    ///     Err(SequenceError::OutOfRange { index: -4, length: 3 })
    /// );
    /// ```
    pub fn get(&self, index: isize) -> Result<&T> {
        let position = element_position(index, self.len(), "get")?;
        Ok(&self.elements[position])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Sequence::get).
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T> {
        let position = element_position(index, self.len(), "get_mut")?;
        Ok(&mut self.elements[position])
    }

    /// Overwrites the element at `index`.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Sequence::get); the sequence is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let mut sequence = sequence![1, 2, 3];
    /// sequence.set(1, 5).unwrap();
    /// assert_eq!(sequence, sequence![1, 5, 3]);
    /// assert!(sequence.set(3, 0).is_err());
    /// ```
    pub fn set(&mut self, index: isize, value: T) -> Result<()> {
        self.replace(index, value).map(drop)
    }

    /// Overwrites the element at `index` and returns the previous value.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Sequence::get).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let mut sequence = sequence![1, 2, 3];
    /// assert_eq!(sequence.replace(1, 5), Ok(2));
    /// assert_eq!(sequence, sequence![1, 5, 3]);
    /// ```
    pub fn replace(&mut self, index: isize, value: T) -> Result<T> {
        let position = element_position(index, self.len(), "replace")?;
        Ok(std::mem::replace(&mut self.elements[position], value))
    }

    /// Returns the front element.
    ///
    /// # Errors
    ///
    /// [`SequenceError::Empty`] if the sequence is empty.
    pub fn first(&self) -> Result<&T> {
        self.elements
            .first()
            .ok_or_else(|| SequenceError::empty("first"))
    }

    /// Returns the back element.
    ///
    /// # Errors
    ///
    /// [`SequenceError::Empty`] if the sequence is empty.
    pub fn last(&self) -> Result<&T> {
        self.elements
            .last()
            .ok_or_else(|| SequenceError::empty("last"))
    }

    /// Appends one element at the back.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.elements.push(value);
    }

    /// Appends every value at the back, in iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let mut sequence = sequence![1];
    /// sequence.push_many([2, 3]);
    /// assert_eq!(sequence, sequence![1, 2, 3]);
    /// ```
    pub fn push_many<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.elements.extend(values);
    }

    /// Prepends one element at the front.
    pub fn push_front(&mut self, value: T) {
        self.elements.insert(0, value);
    }

    /// Prepends every value at the front, keeping their iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let mut sequence = sequence![3];
    /// sequence.push_front_many([1, 2]);
    /// assert_eq!(sequence, sequence![1, 2, 3]);
    /// ```
    pub fn push_front_many<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut front: Vec<T> = values.into_iter().collect();
        front.append(&mut self.take_storage());
        self.replace_storage(front);
    }

    /// Removes and returns the back element.
    ///
    /// # Errors
    ///
    /// [`SequenceError::Empty`] if the sequence is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.elements
            .pop()
            .ok_or_else(|| SequenceError::empty("pop"))
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// [`SequenceError::Empty`] if the sequence is empty.
    pub fn pop_front(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(SequenceError::empty("pop_front"));
        }
        Ok(self.elements.remove(0))
    }

    /// Inserts `value` before the element at `index`, shifting the rest right.
    ///
    /// `index == len` appends. Negative indices count from the back, so
    /// `-1` inserts before the last element.
    ///
    /// # Errors
    ///
    /// [`SequenceError::OutOfRange`] if `index` lies beyond `len` or below
    /// `-len`. The index is never clamped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let mut sequence = sequence![1, 3];
    /// sequence.insert(1, 2).unwrap();
    /// sequence.insert(3, 4).unwrap();
    /// assert_eq!(sequence, sequence![1, 2, 3, 4]);
    /// assert!(sequence.insert(9, 0).is_err());
    /// ```
    pub fn insert(&mut self, index: isize, value: T) -> Result<()> {
        let position = insertion_position(index, self.len())?;
        self.elements.insert(position, value);
        Ok(())
    }

    /// Inserts several values before the element at `index`, keeping their
    /// iteration order.
    ///
    /// # Errors
    ///
    /// Same as [`insert`](Sequence::insert).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let mut sequence = sequence![1, 4];
    /// sequence.insert_many(-1, [2, 3]).unwrap();
    /// assert_eq!(sequence, sequence![1, 2, 3, 4]);
    /// ```
    pub fn insert_many<I>(&mut self, index: isize, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let position = insertion_position(index, self.len())?;
        self.elements.splice(position..position, values);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the rest left.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::Empty`] if the sequence is empty
    /// - [`SequenceError::OutOfRange`] if `index` is outside `-len..len`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let mut sequence = sequence![1, 2, 3];
    /// assert_eq!(sequence.remove(-1), Ok(3));
    /// assert_eq!(sequence.remove(0), Ok(1));
    /// assert_eq!(sequence, sequence![2]);
    /// ```
    pub fn remove(&mut self, index: isize) -> Result<T> {
        let position = element_position(index, self.len(), "remove")?;
        Ok(self.elements.remove(position))
    }

    /// Swaps the elements at two positions.
    ///
    /// # Errors
    ///
    /// [`SequenceError::OutOfRange`] if either index is not below `len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let mut sequence = sequence![1, 2, 3, 4, 5];
    /// sequence.swap(1, 3).unwrap();
    /// assert_eq!(sequence, sequence![1, 4, 3, 2, 5]);
    /// ```
    pub fn swap(&mut self, first: usize, second: usize) -> Result<()> {
        let length = self.len();
        let first = checked_position(first, length)?;
        let second = checked_position(second, length)?;
        self.elements.swap(first, second);
        Ok(())
    }
}

impl<T: Clone> Sequence<T> {
    /// Returns a copy of the elements in `from..to`.
    ///
    /// `from >= to` yields an empty sequence.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::Empty`] if the sequence is empty
    /// - [`SequenceError::OutOfRange`] if `from` or `to` exceeds `len`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let sequence = sequence![0, 1, 2, 3, 4];
    /// assert_eq!(sequence.get_range(1, 4), Ok(sequence![1, 2, 3]));
    /// assert_eq!(sequence.get_range(3, 3), Ok(sequence![]));
    /// assert!(sequence.get_range(2, 6).is_err());
    /// ```
    pub fn get_range(&self, from: usize, to: usize) -> Result<Self> {
        let length = self.len();
        if length == 0 {
            return Err(SequenceError::empty("get_range"));
        }
        for bound in [from, to] {
            if bound > length {
                return Err(SequenceError::out_of_range(
                    isize::try_from(bound).unwrap_or(isize::MAX),
                    length,
                ));
            }
        }
        if from >= to {
            return Ok(Self::new());
        }
        Ok(Self::from_vec(self.elements[from..to].to_vec()))
    }
}

impl<T: Equality> Sequence<T> {
    /// Returns `true` if the element at `index` equals `value`.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Sequence::get).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence;
    ///
    /// let sequence = sequence![1, 2, 3];
    /// assert_eq!(sequence.index_is(-1, &3), Ok(true));
    /// assert_eq!(sequence.index_is(0, &3), Ok(false));
    /// ```
    pub fn index_is(&self, index: isize, value: &T) -> Result<bool> {
        self.get(index).map(|element| element.equals(value))
    }

    /// Returns `true` if the front element equals `value`.
    ///
    /// # Errors
    ///
    /// [`SequenceError::Empty`] if the sequence is empty.
    pub fn starts_with(&self, value: &T) -> Result<bool> {
        self.first().map(|element| element.equals(value))
    }

    /// Returns `true` if the back element equals `value`.
    ///
    /// # Errors
    ///
    /// [`SequenceError::Empty`] if the sequence is empty.
    pub fn ends_with(&self, value: &T) -> Result<bool> {
        self.last().map(|element| element.equals(value))
    }
}
