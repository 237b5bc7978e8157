//! Complex numbers with the product order.

use std::cmp::Ordering;
use std::fmt;

use crate::capability::{Equality, Ordered};

/// A complex number `re + im·i`.
///
/// Two complex numbers are equal when both parts are equal. They are
/// ordered by the product order: `a > b` only when both parts of `a` are
/// greater than those of `b`, and `a < b` only when both are less. Every
/// other pair is incomparable.
///
/// # Examples
///
/// ```rust
/// use seqkit::capability::{Equality, Ordered};
/// use seqkit::element::Complex;
///
/// let small = Complex::new(1.0, 1.0);
/// let large = Complex::new(2.0, 3.0);
/// let mixed = Complex::new(3.0, 0.0);
///
/// assert!(large.greater_than(&small));
/// assert!(!mixed.greater_than(&small));
/// assert!(!mixed.less_than(&small));
/// assert!(!mixed.is_comparable(&small));
/// assert!(small.equals(&Complex::new(1.0, 1.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex<T> {
    /// The real part.
    pub re: T,
    /// The imaginary part.
    pub im: T,
}

impl<T> Complex<T> {
    /// Creates a complex number from its parts.
    #[inline]
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

impl<T: Equality> Equality for Complex<T> {
    fn equals(&self, other: &Self) -> bool {
        self.re.equals(&other.re) && self.im.equals(&other.im)
    }
}

impl<T: Ordered> Ordered for Complex<T> {
    fn partial_compare(&self, other: &Self) -> Option<Ordering> {
        match (
            self.re.partial_compare(&other.re)?,
            self.im.partial_compare(&other.im)?,
        ) {
            (Ordering::Equal, Ordering::Equal) => Some(Ordering::Equal),
            (Ordering::Greater, Ordering::Greater) => Some(Ordering::Greater),
            (Ordering::Less, Ordering::Less) => Some(Ordering::Less),
            _ => None,
        }
    }
}

macro_rules! impl_display_for_complex {
    ($($part:ty),*) => {
        $(
            impl fmt::Display for Complex<$part> {
                fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    if self.im.is_sign_negative() {
                        write!(formatter, "{}-{}i", self.re, -self.im)
                    } else {
                        write!(formatter, "{}+{}i", self.re, self.im)
                    }
                }
            }
        )*
    };
}

impl_display_for_complex!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Complex::new(1.0, 1.0), Complex::new(1.0, 1.0), Some(Ordering::Equal))]
    #[case(Complex::new(2.0, 2.0), Complex::new(1.0, 1.0), Some(Ordering::Greater))]
    #[case(Complex::new(0.0, 0.5), Complex::new(1.0, 1.0), Some(Ordering::Less))]
    #[case(Complex::new(2.0, 1.0), Complex::new(1.0, 1.0), None)]
    #[case(Complex::new(2.0, 0.0), Complex::new(1.0, 1.0), None)]
    #[case(Complex::new(f64::NAN, 2.0), Complex::new(1.0, 1.0), None)]
    fn test_product_order(
        #[case] left: Complex<f64>,
        #[case] right: Complex<f64>,
        #[case] expected: Option<Ordering>,
    ) {
        assert_eq!(left.partial_compare(&right), expected);
    }

    #[rstest]
    fn test_incomparable_pair_fails_every_relation() {
        let left = Complex::new(2.0_f32, 0.0);
        let right = Complex::new(1.0_f32, 1.0);
        assert!(!left.greater_than(&right));
        assert!(!left.less_than(&right));
        assert!(!left.greater_or_equal(&right));
        assert!(!left.less_or_equal(&right));
        assert!(!left.equals(&right));
    }

    #[rstest]
    #[case(Complex::new(1.5, 2.0), "1.5+2i")]
    #[case(Complex::new(0.0, -3.0), "0-3i")]
    fn test_display(#[case] value: Complex<f64>, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }
}
