//! The equality capability.

/// A type class for value equality.
///
/// `equals` must be symmetric. It should be reflexive, with the usual
/// IEEE-754 exception that `NaN` is not equal to itself.
///
/// # Examples
///
/// ```rust
/// use seqkit::capability::Equality;
///
/// assert!('a'.equals(&'a'));
/// assert!(String::from("text").not_equals(&String::from("other")));
/// ```
pub trait Equality {
    /// Returns `true` if `self` and `other` represent the same value.
    fn equals(&self, other: &Self) -> bool;

    /// Returns `true` if `self` and `other` differ.
    #[inline]
    fn not_equals(&self, other: &Self) -> bool {
        !self.equals(other)
    }
}

/// Compares two slices element-wise with [`Equality`].
///
/// Slices of different length are never equal.
///
/// # Examples
///
/// ```rust
/// use seqkit::capability::slices_equal;
///
/// assert!(slices_equal(&[1, 2, 3], &[1, 2, 3]));
/// assert!(!slices_equal(&[1, 2], &[1, 2, 3]));
/// ```
pub fn slices_equal<T: Equality>(left: &[T], right: &[T]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(left_element, right_element)| left_element.equals(right_element))
}

impl<T: Equality + ?Sized> Equality for &T {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        (**self).equals(*other)
    }
}

impl<T: Equality + ?Sized> Equality for Box<T> {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        (**self).equals(&**other)
    }
}

impl<T: Equality> Equality for Option<T> {
    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(left), Some(right)) => left.equals(right),
            (None, None) => true,
            _ => false,
        }
    }
}
