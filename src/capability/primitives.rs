//! Capability implementations for the built-in scalar types.

use std::cmp::Ordering;

use super::{Equality, Ordered};

macro_rules! impl_capabilities_for_primitive {
    ($($kind:ty),* $(,)?) => {
        $(
            impl Equality for $kind {
                #[inline]
                #[allow(clippy::float_cmp)]
                fn equals(&self, other: &Self) -> bool {
                    self == other
                }
            }

            impl Ordered for $kind {
                #[inline]
                fn partial_compare(&self, other: &Self) -> Option<Ordering> {
                    self.partial_cmp(other)
                }
            }
        )*
    };
}

impl_capabilities_for_primitive!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    str,
    String,
);

macro_rules! impl_capabilities_for_tuple {
    ($(($($name:ident : $index:tt),+)),* $(,)?) => {
        $(
            impl<$($name: Equality),+> Equality for ($($name,)+) {
                fn equals(&self, other: &Self) -> bool {
                    $(self.$index.equals(&other.$index))&&+
                }
            }

            impl<$($name: Ordered),+> Ordered for ($($name,)+) {
                fn partial_compare(&self, other: &Self) -> Option<Ordering> {
                    $(
                        match self.$index.partial_compare(&other.$index)? {
                            Ordering::Equal => {}
                            decided => return Some(decided),
                        }
                    )+
                    Some(Ordering::Equal)
                }
            }
        )*
    };
}

impl_capabilities_for_tuple!(
    (A: 0),
    (A: 0, B: 1),
    (A: 0, B: 1, C: 2),
    (A: 0, B: 1, C: 2, D: 3),
);
