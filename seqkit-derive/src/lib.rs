//! Derive macros for seqkit element capabilities.
//!
//! A user-defined struct becomes a sequence element by implementing
//! `seqkit::capability::Equality` and, for sorting and `min`/`max`,
//! `seqkit::capability::Ordered`. These macros generate both from the
//! struct's fields.
//!
//! # Available Derive Macros
//!
//! - [`Equality`]: field-wise equality
//! - [`Ordered`]: lexicographic, field-wise partial order
//!
//! # Example
//!
//! ```rust,ignore
//! use seqkit::prelude::*;
//!
//! #[derive(Clone, Debug, Equality, Ordered)]
//! struct Version {
//!     major: u32,
//!     minor: u32,
//! }
//!
//! let mut versions = sequence![
//!     Version { major: 1, minor: 4 },
//!     Version { major: 0, minor: 9 },
//! ];
//! versions.sort();
//! assert_eq!(versions.first().unwrap().major, 0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod equality;
mod fields;
mod ordered;

use proc_macro::TokenStream;

/// Derive macro implementing `seqkit::capability::Equality`.
///
/// Two values are equal when every pair of corresponding fields is equal
/// under `Equality`. Unit structs are always equal to themselves.
///
/// # Requirements
///
/// - The type must be a struct (named, tuple or unit)
/// - Every field type must implement `Equality`
///
/// Generic type parameters receive an `Equality` bound.
///
/// # Example
///
/// ```rust,ignore
/// use seqkit::capability::Equality;
///
/// #[derive(seqkit::Equality)]
/// struct Pair(i32, f64);
///
/// assert!(Pair(1, 2.0).equals(&Pair(1, 2.0)));
/// assert!(!Pair(1, f64::NAN).equals(&Pair(1, f64::NAN)));
/// ```
#[proc_macro_derive(Equality)]
pub fn derive_equality(input: TokenStream) -> TokenStream {
    equality::derive_equality_impl(input)
}

/// Derive macro implementing `seqkit::capability::Ordered`.
///
/// Fields are compared in declaration order. The first pair ordered `Less`
/// or `Greater` decides; an incomparable pair makes the whole values
/// incomparable; if every pair is `Equal` the values are `Equal`.
///
/// # Requirements
///
/// - The type must be a struct (named, tuple or unit)
/// - The type must also implement `Equality` (usually derived)
/// - Every field type must implement `Ordered`
///
/// # Example
///
/// ```rust,ignore
/// use seqkit::capability::Ordered;
///
/// #[derive(seqkit::Equality, seqkit::Ordered)]
/// struct Version {
///     major: u32,
///     minor: u32,
/// }
///
/// let old = Version { major: 1, minor: 9 };
/// let new = Version { major: 2, minor: 0 };
/// assert!(old.less_than(&new));
/// ```
#[proc_macro_derive(Ordered)]
pub fn derive_ordered(input: TokenStream) -> TokenStream {
    ordered::derive_ordered_impl(input)
}
