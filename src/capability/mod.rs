//! Element capabilities: the contracts a value must satisfy to be stored,
//! searched and sorted inside a [`Sequence`](crate::sequence::Sequence).
//!
//! - [`Equality`]: value equality, reflexive for every well-behaved kind
//! - [`Ordered`]: a (possibly partial) order built on top of [`Equality`]
//! - [`Value`]: shorthand for `Ordered + Clone`, the bound most sequence
//!   algorithms need
//!
//! Both capabilities are implemented for the built-in scalar types
//! (`bool`, every integer width, `f32`/`f64`, `char`, `str`/`String`),
//! for tuples of up to four fields, `Option<T>`, references and `Box<T>`,
//! and recursively for
//! [`Sequence<T>`](crate::sequence::Sequence). User-defined kinds either
//! implement the traits by hand or derive them with the `derive` feature.
//!
//! # Partial orders
//!
//! Unlike [`Ord`], an [`Ordered`] kind may contain incomparable pairs:
//! `f64::NAN` is incomparable with everything, and complex numbers use the
//! product order. For incomparable operands all four relational helpers
//! (`greater_than`, `less_than`, `greater_or_equal`, `less_or_equal`)
//! return `false`.
//!
//! # Examples
//!
//! ```rust
//! use seqkit::capability::{Equality, Ordered};
//!
//! assert!(3_i32.equals(&3));
//! assert!(1.5_f64.less_than(&2.0));
//! assert!(!f64::NAN.greater_or_equal(&0.0));
//! assert!("apple".less_than("banana"));
//! ```

mod equality;
mod ordered;
mod primitives;

pub use equality::{Equality, slices_equal};
pub use ordered::{Ordered, lexicographic_compare};

/// The capability bundle required by most sequence algorithms.
///
/// Blanket-implemented for every `T: Ordered + Clone`.
pub trait Value: Ordered + Clone {}

impl<T: Ordered + Clone> Value for T {}
