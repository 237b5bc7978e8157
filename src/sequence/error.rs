//! Error type for fallible sequence operations.
//!
//! Every fallible operation of [`Sequence`](super::Sequence) returns
//! [`Result<T>`](Result); nothing falls back to a silent default value.

/// Represents the ways a sequence operation can fail.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::{Sequence, SequenceError};
///
/// let mut sequence: Sequence<i32> = Sequence::new();
/// assert_eq!(sequence.pop(), Err(SequenceError::Empty));
///
/// let sequence = Sequence::from_vec(vec![1, 2, 3]);
/// assert_eq!(
///     sequence.get(5),
///     Err(SequenceError::OutOfRange { index: 5, length: 3 })
/// );
/// assert_eq!(
///     format!("{}", SequenceError::OutOfRange { index: 5, length: 3 }),
///     "index 5 is out of range for a sequence of length 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// The index lies beyond the current bounds, after wraparound.
    OutOfRange {
        /// The index as supplied by the caller.
        index: isize,
        /// The length of the sequence at the time of the call.
        length: usize,
    },
    /// The operation needs at least one element.
    Empty,
    /// A search found no matching element.
    NotFound,
    /// An argument violates the operation's precondition.
    InvalidArgument {
        /// The operation that rejected the argument.
        operation: &'static str,
        /// Why the argument was rejected.
        reason: &'static str,
    },
}

impl SequenceError {
    pub(crate) fn out_of_range(index: isize, length: usize) -> Self {
        debug_event!(index = index, length = length, "index out of range");
        Self::OutOfRange { index, length }
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub(crate) fn empty(operation: &'static str) -> Self {
        debug_event!(operation = operation, "operation on empty sequence");
        Self::Empty
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub(crate) fn not_found(operation: &'static str) -> Self {
        debug_event!(operation = operation, "no matching element");
        Self::NotFound
    }

    pub(crate) fn invalid_argument(operation: &'static str, reason: &'static str) -> Self {
        debug_event!(operation = operation, reason = reason, "invalid argument");
        Self::InvalidArgument { operation, reason }
    }
}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { index, length } => write!(
                formatter,
                "index {index} is out of range for a sequence of length {length}"
            ),
            Self::Empty => write!(formatter, "sequence is empty"),
            Self::NotFound => write!(formatter, "value does not exist in sequence"),
            Self::InvalidArgument { operation, reason } => {
                write!(formatter, "{operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for SequenceError {}

/// A specialized `Result` for sequence operations.
pub type Result<T> = std::result::Result<T, SequenceError>;
