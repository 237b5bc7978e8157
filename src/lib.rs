//! # seqkit
//!
//! A generic, capability-driven sequence library: an ordered, mutable
//! container with a rich set of structural algorithms (splitting, chunking,
//! windowing, flattening, rotation, deduplication, stable sorting) over any
//! element kind that can be compared.
//!
//! ## Overview
//!
//! - **Capabilities**: [`Equality`](capability::Equality) and
//!   [`Ordered`](capability::Ordered), the contracts an element must meet.
//!   Orders may be partial, so floats and complex numbers are first-class
//!   elements.
//! - **Sequence**: [`Sequence<T>`](sequence::Sequence), the container and
//!   its operations, built on the capabilities alone. A sequence of
//!   sequences is itself an element, so nesting composes.
//! - **Elements**: a dynamic [`Element`](element::Element) model for
//!   sequences whose nesting depth is only known at runtime.
//!
//! ## Feature Flags
//!
//! - `element`: the dynamic `Scalar`/`Element` model (default)
//! - `derive`: `#[derive(Equality, Ordered)]` for user-defined structs (default)
//! - `serde`: serialization of sequences and elements
//! - `tracing`: structured debug events on errors and sorting
//! - `fxhash` / `ahash`: faster hashers for `Sequence::dedup_hashed`
//! - `full`: enable all of the above
//!
//! ## Example
//!
//! ```rust
//! use seqkit::prelude::*;
//!
//! let mut readings = sequence![3.5, 1.0, f64::NAN, 2.25];
//! readings.sort();
//! assert_eq!(readings.len(), 4);
//!
//! let words = sequence!["to", "be", "or", "not", "to", "be"];
//! assert_eq!(words.count(&"be"), 2);
//! assert_eq!(words.chunk(4).unwrap().len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

#[macro_use]
mod trace;

/// Prelude module for convenient imports.
///
/// Re-exports the capabilities, the container and its macro, and, with the
/// matching features, the element model and the derive macros.
///
/// # Usage
///
/// ```rust
/// use seqkit::prelude::*;
///
/// let sequence = sequence![1, 2, 3];
/// assert!(sequence.contains(&2));
/// ```
pub mod prelude {
    pub use crate::capability::{Equality, Ordered, Value};

    pub use crate::sequence;
    pub use crate::sequence::{Sequence, SequenceError};

    #[cfg(feature = "element")]
    pub use crate::element::{Complex, Element, Scalar, ScalarKind};

    #[cfg(feature = "derive")]
    pub use seqkit_derive::{Equality, Ordered};
}

pub mod capability;

pub mod sequence;

#[cfg(feature = "element")]
pub mod element;

#[cfg(feature = "derive")]
pub use seqkit_derive::{Equality, Ordered};
