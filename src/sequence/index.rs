//! Wraparound index resolution.
//!
//! A non-negative index counts from the front. A negative index counts from
//! the back: `index` resolves to `index + length`, so `-1` is the last
//! element and `-length` is the first. Anything below `-length` is out of
//! range; no further wrapping takes place.

use super::error::{Result, SequenceError};

/// Resolves `index` to a position of an existing element.
///
/// Returns `SequenceError::Empty` for an empty sequence and
/// `SequenceError::OutOfRange` past either end.
pub(crate) fn element_position(
    index: isize,
    length: usize,
    operation: &'static str,
) -> Result<usize> {
    if length == 0 {
        return Err(SequenceError::empty(operation));
    }
    wrap(index, length)
        .filter(|&position| position < length)
        .ok_or_else(|| SequenceError::out_of_range(index, length))
}

/// Resolves `index` to an insertion point, where `length` itself is valid.
pub(crate) fn insertion_position(index: isize, length: usize) -> Result<usize> {
    wrap(index, length)
        .filter(|&position| position <= length)
        .ok_or_else(|| SequenceError::out_of_range(index, length))
}

/// Resolves an index that must address an existing element, without the
/// empty-sequence distinction.
pub(crate) fn checked_position(index: usize, length: usize) -> Result<usize> {
    if index < length {
        Ok(index)
    } else {
        Err(SequenceError::out_of_range(
            isize::try_from(index).unwrap_or(isize::MAX),
            length,
        ))
    }
}

fn wrap(index: isize, length: usize) -> Option<usize> {
    if index >= 0 {
        Some(index.unsigned_abs())
    } else {
        length.checked_sub(index.unsigned_abs())
    }
}
