//! The ordering capability.

use std::cmp::Ordering;

use super::Equality;

/// A type class for ordered values, built on [`Equality`].
///
/// The single required method is [`partial_compare`](Ordered::partial_compare).
/// The relational helpers are derived from it; each of them answers `false`
/// when the operands are incomparable, so `greater_or_equal` is *not* the
/// plain negation of `less_than`.
///
/// # Laws
///
/// For comparable `a` and `b`:
///
/// ```text
/// a.partial_compare(b) == Some(Equal)   <=>  a.equals(b)
/// a.partial_compare(b) == Some(Less)    <=>  b.partial_compare(a) == Some(Greater)
/// ```
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use seqkit::capability::Ordered;
///
/// assert_eq!(1_i32.partial_compare(&2), Some(Ordering::Less));
/// assert!(true.greater_than(&false));
/// assert!(!f32::NAN.is_comparable(&1.0));
/// ```
pub trait Ordered: Equality {
    /// Compares two values, returning `None` if they are incomparable.
    fn partial_compare(&self, other: &Self) -> Option<Ordering>;

    /// Returns `true` if `self` is strictly greater than `other`.
    #[inline]
    fn greater_than(&self, other: &Self) -> bool {
        matches!(self.partial_compare(other), Some(Ordering::Greater))
    }

    /// Returns `true` if `self` is strictly less than `other`.
    #[inline]
    fn less_than(&self, other: &Self) -> bool {
        matches!(self.partial_compare(other), Some(Ordering::Less))
    }

    /// Returns `true` if `self` is greater than or equal to `other`.
    #[inline]
    fn greater_or_equal(&self, other: &Self) -> bool {
        matches!(
            self.partial_compare(other),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }

    /// Returns `true` if `self` is less than or equal to `other`.
    #[inline]
    fn less_or_equal(&self, other: &Self) -> bool {
        matches!(
            self.partial_compare(other),
            Some(Ordering::Less | Ordering::Equal)
        )
    }

    /// Returns `true` if the two values can be ordered against each other.
    #[inline]
    fn is_comparable(&self, other: &Self) -> bool {
        self.partial_compare(other).is_some()
    }
}

/// Lexicographically compares two slices.
///
/// Pairs are scanned from the front. The first pair that orders `Less` or
/// `Greater` decides the result; equal and incomparable pairs are skipped.
/// When no pair decides, the shorter slice is `Less`, so a strict prefix is
/// always less than its extension and two empty slices are `Equal`.
///
/// The result is always antisymmetric:
/// `lexicographic_compare(a, b) == lexicographic_compare(b, a).reverse()`.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use seqkit::capability::lexicographic_compare;
///
/// assert_eq!(lexicographic_compare(&[1, 2], &[1, 2, 0]), Ordering::Less);
/// assert_eq!(lexicographic_compare(&[1, 3], &[1, 2, 9]), Ordering::Greater);
/// assert_eq!(lexicographic_compare::<i32>(&[], &[]), Ordering::Equal);
/// ```
pub fn lexicographic_compare<T: Ordered>(left: &[T], right: &[T]) -> Ordering {
    for (left_element, right_element) in left.iter().zip(right) {
        match left_element.partial_compare(right_element) {
            Some(Ordering::Less) => return Ordering::Less,
            Some(Ordering::Greater) => return Ordering::Greater,
            Some(Ordering::Equal) | None => {}
        }
    }
    left.len().cmp(&right.len())
}

impl<T: Ordered + ?Sized> Ordered for &T {
    #[inline]
    fn partial_compare(&self, other: &Self) -> Option<Ordering> {
        (**self).partial_compare(*other)
    }
}

impl<T: Ordered + ?Sized> Ordered for Box<T> {
    #[inline]
    fn partial_compare(&self, other: &Self) -> Option<Ordering> {
        (**self).partial_compare(&**other)
    }
}

/// `None` sorts before every `Some`.
impl<T: Ordered> Ordered for Option<T> {
    fn partial_compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Some(left), Some(right)) => left.partial_compare(right),
            (None, None) => Some(Ordering::Equal),
            (None, Some(_)) => Some(Ordering::Less),
            (Some(_), None) => Some(Ordering::Greater),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[], &[], Ordering::Equal)]
    #[case(&[], &[1], Ordering::Less)]
    #[case(&[1, 2, 3], &[1, 2], Ordering::Greater)]
    #[case(&[1, 2, 3], &[1, 2, 3], Ordering::Equal)]
    #[case(&[1, 5], &[1, 2, 3], Ordering::Greater)]
    #[case(&[0, 9, 9], &[1], Ordering::Less)]
    fn test_lexicographic_compare(
        #[case] left: &[i32],
        #[case] right: &[i32],
        #[case] expected: Ordering,
    ) {
        assert_eq!(lexicographic_compare(left, right), expected);
        assert_eq!(lexicographic_compare(right, left), expected.reverse());
    }

    #[rstest]
    fn test_incomparable_pairs_are_skipped() {
        let left = [f64::NAN, 1.0];
        let right = [f64::NAN, 2.0];
        assert_eq!(lexicographic_compare(&left, &right), Ordering::Less);
        assert_eq!(lexicographic_compare(&left, &left), Ordering::Equal);
    }

    #[rstest]
    fn test_relational_helpers_are_false_for_incomparable() {
        let nan = f64::NAN;
        assert!(!nan.greater_than(&1.0));
        assert!(!nan.less_than(&1.0));
        assert!(!nan.greater_or_equal(&1.0));
        assert!(!nan.less_or_equal(&1.0));
        assert!(!nan.is_comparable(&nan));
    }

    #[rstest]
    fn test_option_order() {
        assert!(None::<i32>.less_than(&Some(0)));
        assert!(Some(2_i32).greater_than(&Some(1)));
        assert!(None::<i32>.less_or_equal(&None));
    }
}
