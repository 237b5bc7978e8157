//! The closed set of scalar kinds a dynamic element can hold.

use std::cmp::Ordering;
use std::fmt;

use paste::paste;

use super::{Complex, Element};
use crate::capability::{Equality, Ordered};

macro_rules! define_scalar {
    ($($variant:ident($kind:ty)),* $(,)?) => {
        /// A single value of one of the supported scalar kinds.
        ///
        /// Values of different kinds are never equal and never
        /// comparable, even when they hold the same number: `I32(5)` and
        /// `I64(5)` are incomparable. Conversions from the native types
        /// go through [`From`].
        ///
        /// # Examples
        ///
        /// ```rust
        /// use seqkit::capability::{Equality, Ordered};
        /// use seqkit::element::{Scalar, ScalarKind};
        ///
        /// let five = Scalar::from(5_i32);
        /// assert_eq!(five.kind(), ScalarKind::I32);
        /// assert_eq!(five.as_i32(), Some(&5));
        /// assert!(five.equals(&Scalar::I32(5)));
        /// assert!(!five.equals(&Scalar::I64(5)));
        /// assert!(!five.is_comparable(&Scalar::I64(5)));
        /// assert!(Scalar::from("abc").less_than(&Scalar::from("abd")));
        /// ```
        #[derive(Debug, Clone)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum Scalar {
            $(
                #[doc = concat!("A `", stringify!($kind), "` value.")]
                $variant($kind),
            )*
        }

        /// The kind of a [`Scalar`], without its value.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum ScalarKind {
            $(
                #[doc = concat!("The `", stringify!($kind), "` kind.")]
                $variant,
            )*
        }

        impl Scalar {
            /// Returns the kind of this scalar.
            #[must_use]
            pub const fn kind(&self) -> ScalarKind {
                match self {
                    $(Self::$variant(_) => ScalarKind::$variant,)*
                }
            }

            paste! {
                $(
                    #[doc = "Returns the value if this is a `" $variant "` scalar."]
                    #[must_use]
                    pub const fn [<as_ $variant:snake>](&self) -> Option<&$kind> {
                        match self {
                            Self::$variant(value) => Some(value),
                            _ => None,
                        }
                    }
                )*
            }
        }

        impl ScalarKind {
            /// Returns the zero value of this kind: `false`, `0`, `0.0`,
            /// `0+0i`, `'\0'` or the empty string.
            ///
            /// # Examples
            ///
            /// ```rust
            /// use seqkit::element::{Scalar, ScalarKind};
            ///
            /// assert_eq!(ScalarKind::U16.default_value(), Scalar::U16(0));
            /// assert_eq!(ScalarKind::Str.default_value(), Scalar::Str(String::new()));
            /// ```
            #[must_use]
            pub fn default_value(self) -> Scalar {
                match self {
                    $(Self::$variant => Scalar::$variant(<$kind>::default()),)*
                }
            }
        }

        impl Equality for Scalar {
            fn equals(&self, other: &Self) -> bool {
                match (self, other) {
                    $((Self::$variant(left), Self::$variant(right)) => left.equals(right),)*
                    _ => false,
                }
            }
        }

        impl Ordered for Scalar {
            fn partial_compare(&self, other: &Self) -> Option<Ordering> {
                match (self, other) {
                    $((Self::$variant(left), Self::$variant(right)) => {
                        left.partial_compare(right)
                    })*
                    _ => None,
                }
            }
        }

        impl fmt::Display for Scalar {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$variant(value) => fmt::Display::fmt(value, formatter),)*
                }
            }
        }

        $(
            impl From<$kind> for Scalar {
                fn from(value: $kind) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<$kind> for Element {
                fn from(value: $kind) -> Self {
                    Self::Scalar(Scalar::$variant(value))
                }
            }
        )*
    };
}

define_scalar!(
    Bool(bool),
    Isize(isize),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Usize(usize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    C64(Complex<f32>),
    C128(Complex<f64>),
    Char(char),
    Str(String),
);

impl Scalar {
    /// Creates a byte scalar. Bytes share the `U8` kind.
    #[must_use]
    pub const fn byte(value: u8) -> Self {
        Self::U8(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.partial_compare(other)
    }
}
