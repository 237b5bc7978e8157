//! Dynamic elements whose nesting depth is only known at runtime.
//!
//! A statically typed `Sequence<Sequence<T>>` fixes its depth in the type.
//! When depth varies from value to value, use [`Element`]: either a
//! [`Scalar`] or a nested `Sequence<Element>`. A `Sequence<Element>` is
//! *nested* when its first element is a sequence; the flattening operations
//! below are driven by that test.
//!
//! | Operation | Description | Complexity |
//! |-----------|-------------|------------|
//! | `is_nested` | first element is a sequence | O(1) |
//! | `flatten` | remove one level of nesting | O(n) |
//! | `flatten_n` | remove up to `depth` levels | O(n · depth) |
//! | `flatten_all` | flatten until the head is a scalar | O(n · depth) |
//! | `deep_count` | count a value in `flatten_all` | O(n · depth) |
//!
//! # Examples
//!
//! ```rust
//! use seqkit::element::Element;
//! use seqkit::sequence::Sequence;
//!
//! let pair = Sequence::from_nested(vec![1_i32.into(), 2_i32.into()]);
//! let single = Sequence::from_nested(vec![3_i32.into()]);
//! let nested = Sequence::from_nested(vec![
//!     Element::from(Sequence::from_nested(vec![Element::from(pair)])),
//!     Element::from(Sequence::from_nested(vec![Element::from(single.clone())])),
//! ]);
//!
//! assert!(nested.is_nested());
//! assert_eq!(nested.flatten_all().len(), 3);
//! assert_eq!(nested.deep_count(&Element::from(3_i32)), 1);
//! assert!(nested.flatten_all().get(0).unwrap().equals_value(1_i32));
//!
//! // only the head decides: once it is a scalar, flattening stops
//! let mixed = Sequence::from_nested(vec![
//!     Element::from(Sequence::from_nested(vec![1_i32.into()])),
//!     Element::from(Sequence::from_nested(vec![Element::from(single)])),
//! ]);
//! assert_eq!(mixed.flatten_all().len(), 2);
//! assert_eq!(mixed.deep_count(&Element::from(3_i32)), 0);
//! ```

mod complex;
mod scalar;

use std::cmp::Ordering;
use std::fmt;

use crate::capability::{Equality, Ordered};
use crate::sequence::Sequence;

pub use complex::Complex;
pub use scalar::{Scalar, ScalarKind};

/// A value of a dynamic sequence: a scalar, or a sequence of elements.
///
/// Scalars compare with scalars of the same kind, sequences compare
/// lexicographically with sequences, and a scalar is never equal or
/// comparable to a sequence.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Element {
    /// A single scalar value.
    Scalar(Scalar),
    /// A nested sequence.
    Sequence(Sequence<Element>),
}

impl Element {
    /// Returns `true` for [`Element::Scalar`].
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Returns `true` for [`Element::Sequence`].
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Returns the scalar, if this is one.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            Self::Sequence(_) => None,
        }
    }

    /// Returns the nested sequence, if this is one.
    #[must_use]
    pub const fn as_sequence(&self) -> Option<&Sequence<Self>> {
        match self {
            Self::Sequence(sequence) => Some(sequence),
            Self::Scalar(_) => None,
        }
    }

    /// Compares against a native value by first converting it into an
    /// element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::element::Element;
    ///
    /// let element = Element::from(5_i32);
    /// assert!(element.equals_value(5_i32));
    /// assert!(!element.equals_value(5_i64));
    /// ```
    pub fn equals_value<V>(&self, value: V) -> bool
    where
        V: Into<Self>,
    {
        self.equals(&value.into())
    }
}

impl Equality for Element {
    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Scalar(left), Self::Scalar(right)) => left.equals(right),
            (Self::Sequence(left), Self::Sequence(right)) => left.equals(right),
            _ => false,
        }
    }
}

impl Ordered for Element {
    fn partial_compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Scalar(left), Self::Scalar(right)) => left.partial_compare(right),
            (Self::Sequence(left), Self::Sequence(right)) => left.partial_compare(right),
            _ => None,
        }
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.partial_compare(other)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => fmt::Display::fmt(scalar, formatter),
            Self::Sequence(sequence) => fmt::Display::fmt(sequence, formatter),
        }
    }
}

impl From<Scalar> for Element {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<Sequence<Self>> for Element {
    fn from(sequence: Sequence<Self>) -> Self {
        Self::Sequence(sequence)
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Self::Scalar(Scalar::from(value))
    }
}

// =============================================================================
// Nested sequence operations
// =============================================================================

impl Sequence<Element> {
    /// Builds a dynamic sequence from elements.
    #[must_use]
    pub fn from_nested(elements: Vec<Element>) -> Self {
        Self::from_vec(elements)
    }

    /// Returns `true` if the first element is a sequence.
    ///
    /// An empty sequence is never nested.
    #[must_use]
    pub fn is_nested(&self) -> bool {
        self.as_slice().first().is_some_and(Element::is_sequence)
    }

    /// Removes one level of nesting.
    ///
    /// If the sequence is nested, every inner sequence is spliced into the
    /// result and scalars are kept in place. Otherwise the result is a copy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::element::Element;
    /// use seqkit::sequence::Sequence;
    ///
    /// let inner = Sequence::from_nested(vec![1_u8.into(), 2_u8.into()]);
    /// let nested = Sequence::from_nested(vec![inner.into(), 3_u8.into()]);
    /// let flat = nested.flatten();
    /// assert_eq!(flat.len(), 3);
    /// assert!(!flat.is_nested());
    /// ```
    #[must_use]
    pub fn flatten(&self) -> Self {
        if !self.is_nested() {
            return self.clone();
        }
        let mut flat = Vec::with_capacity(self.len());
        for element in self {
            match element {
                Element::Sequence(inner) => flat.extend(inner.iter().cloned()),
                Element::Scalar(_) => flat.push(element.clone()),
            }
        }
        Self::from_vec(flat)
    }

    /// Removes up to `depth` levels of nesting, stopping early once the
    /// sequence is no longer nested. `depth == 0` returns a copy.
    #[must_use]
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn flatten_n(&self, depth: usize) -> Self {
        let mut current = self.clone();
        for level in 0..depth {
            if !current.is_nested() {
                break;
            }
            trace_event!(level = level, length = current.len(), "flatten level");
            current = current.flatten();
        }
        current
    }

    /// Flattens one level at a time for as long as the sequence is nested.
    ///
    /// Only the head decides: once the first element is a scalar, flattening
    /// stops, and sequences further along are kept as elements. The result is
    /// never nested, so flattening it again returns an equal sequence.
    #[must_use]
    pub fn flatten_all(&self) -> Self {
        let mut current = self.clone();
        while current.is_nested() {
            trace_event!(length = current.len(), "flatten level");
            current = current.flatten();
        }
        current
    }

    /// Counts the occurrences of `value` in [`flatten_all`](Self::flatten_all).
    ///
    /// Values inside sequences that survive flattening are not counted.
    #[must_use]
    pub fn deep_count(&self, value: &Element) -> usize {
        self.flatten_all().count(value)
    }
}
