//! Integration tests for `Sequence`.
//!
//! Covers the documented examples end to end through the public API:
//! comparison, flattening, splitting, chunking, windowing, sorting,
//! rotation, deduplication and wraparound indexing.

use std::cmp::Ordering;

use rstest::rstest;
use seqkit::prelude::*;

fn nested(parts: &[&[i32]]) -> Sequence<Sequence<i32>> {
    parts
        .iter()
        .map(|part| Sequence::from_vec(part.to_vec()))
        .collect()
}

// =============================================================================
// Comparison
// =============================================================================

#[rstest]
#[case(sequence![], sequence![], Ordering::Equal)]
#[case(sequence![1, 2], sequence![1, 2, 0], Ordering::Less)]
#[case(sequence![1, 3], sequence![1, 2, 9], Ordering::Greater)]
#[case(sequence![5], sequence![5], Ordering::Equal)]
fn test_compare_is_antisymmetric(
    #[case] left: Sequence<i32>,
    #[case] right: Sequence<i32>,
    #[case] expected: Ordering,
) {
    assert_eq!(left.compare(&right), expected);
    assert_eq!(right.compare(&left), expected.reverse());
    assert_eq!(left.compare(&left), Ordering::Equal);
}

#[rstest]
fn test_std_comparison_operators_delegate_to_capabilities() {
    assert!(sequence![1, 2] < sequence![1, 2, 3]);
    assert!(sequence!['b'] > sequence!['a', 'z']);
    assert!(sequence![0.5, 1.0] == sequence![0.5, 1.0]);
    assert!(sequence![f64::NAN] != sequence![f64::NAN]);
}

// =============================================================================
// Flattening
// =============================================================================

#[rstest]
fn test_flatten_preserves_length_and_order() {
    let parts = nested(&[&[1, 2], &[], &[3], &[4, 5, 6]]);
    let total: usize = parts.iter().map(Sequence::len).sum();
    let flat = parts.flatten();
    assert_eq!(flat.len(), total);
    assert_eq!(flat, sequence![1, 2, 3, 4, 5, 6]);
}

// =============================================================================
// Splitting, chunking and windowing
// =============================================================================

#[rstest]
fn test_split_and_rejoin_example() {
    let input = sequence![1, 3, 2, 3, 4];
    let parts = input.split(&3);
    assert_eq!(parts, nested(&[&[1], &[2], &[4]]));
    assert_eq!(parts.rejoin(&3), input);
}

#[rstest]
#[case(2, nested(&[&[1, 2], &[3, 4]]))]
#[case(3, nested(&[&[1, 2, 3], &[4]]))]
fn test_chunk_examples(#[case] size: usize, #[case] expected: Sequence<Sequence<i32>>) {
    assert_eq!(sequence![1, 2, 3, 4].chunk(size), Ok(expected));
}

#[rstest]
fn test_windows_example() {
    let windows = sequence![1, 2, 3, 4].windows(2).unwrap();
    assert_eq!(windows, nested(&[&[1, 2], &[2, 3], &[3, 4]]));
    assert_eq!(windows.len(), 4 - 2 + 1);
}

#[rstest]
fn test_zero_sizes_are_invalid_arguments() {
    let sequence = sequence![1, 2, 3];
    for result in [
        sequence.chunk(0).map(|_| ()),
        sequence.windows(0).map(|_| ()),
        sequence.step_by(0).map(|_| ()),
    ] {
        assert!(matches!(result, Err(SequenceError::InvalidArgument { .. })));
    }
}

// =============================================================================
// Sorting
// =============================================================================

#[rstest]
fn test_sort_example() {
    let input = sequence![3, 1, 4, 1, 5, 9, 2, 6];
    assert!(!input.is_sorted());

    let mut sorted = input.copy();
    sorted.sort();
    assert_eq!(sorted, sequence![1, 1, 2, 3, 4, 5, 6, 9]);
    assert!(sorted.is_sorted());
    assert_eq!(input.len(), sorted.len());
}

#[rstest]
fn test_sort_sequence_of_sequences() {
    let mut words = sequence![
        sequence!['b', 'a'],
        sequence!['a', 'b', 'c'],
        sequence!['a', 'b'],
    ];
    words.sort();
    assert_eq!(
        words,
        sequence![
            sequence!['a', 'b'],
            sequence!['a', 'b', 'c'],
            sequence!['b', 'a'],
        ]
    );
}

// =============================================================================
// Rotation and deduplication
// =============================================================================

#[rstest]
fn test_rotation_examples() {
    let mut left = sequence![1, 2, 3];
    left.rotate_left(1);
    assert_eq!(left, sequence![2, 3, 1]);

    let mut right = sequence![1, 2, 3];
    right.rotate_right(1);
    assert_eq!(right, sequence![3, 1, 2]);

    let mut full = sequence![1, 2, 3];
    full.rotate_left(3);
    full.rotate_right(3);
    assert_eq!(full, sequence![1, 2, 3]);
}

#[rstest]
fn test_dedup_example() {
    let mut sequence = sequence![1, 1, 2, 2, 3, 3];
    sequence.dedup();
    assert_eq!(sequence, sequence![1, 2, 3]);
}

// =============================================================================
// Wraparound indexing
// =============================================================================

#[rstest]
#[case(-1, Ok(&'d'))]
#[case(-4, Ok(&'a'))]
#[case(-5, Err(SequenceError::OutOfRange { index: -5, length: 4 }))]
#[case(4, Err(SequenceError::OutOfRange { index: 4, length: 4 }))]
fn test_negative_index_boundary(
    #[case] index: isize,
    #[case] expected: Result<&'static char, SequenceError>,
) {
    let sequence = sequence!['a', 'b', 'c', 'd'];
    assert_eq!(sequence.get(index), expected);
}

#[rstest]
fn test_fallible_operations_on_empty_sequence() {
    let mut empty: Sequence<i32> = Sequence::new();
    assert_eq!(empty.get(0), Err(SequenceError::Empty));
    assert_eq!(empty.get_range(0, 0), Err(SequenceError::Empty));
    assert_eq!(empty.first(), Err(SequenceError::Empty));
    assert_eq!(empty.min(), Err(SequenceError::Empty));
    assert_eq!(empty.pop(), Err(SequenceError::Empty));
    assert_eq!(empty.remove(-1), Err(SequenceError::Empty));
    assert_eq!(empty.reduce(|left, right| left + right), Err(SequenceError::Empty));
    assert_eq!(empty.find(|_| true), Err(SequenceError::NotFound));
    assert_eq!(empty.insert(0, 1), Ok(()));
}

// =============================================================================
// Combined workflows
// =============================================================================

#[rstest]
fn test_csv_like_pipeline() {
    let line: Sequence<char> = "3,1,,2".chars().collect();
    let fields = line.split(&',');
    assert_eq!(fields.len(), 4);

    let mut numbers: Sequence<u32> = fields
        .filter(|field| !field.is_empty())
        .map(|field| field.fold(0, |value, digit| value * 10 + digit.to_digit(10).unwrap_or(0)));
    numbers.sort();
    assert_eq!(numbers, sequence![1, 2, 3]);
}

#[rstest]
fn test_group_runs_then_measure() {
    let signal = sequence![0, 0, 1, 1, 1, 0, 1];
    let runs = signal.chunk_by(|previous, current| previous == current);
    let lengths = runs.map(Sequence::len);
    assert_eq!(lengths, sequence![2, 3, 1, 1]);
    assert_eq!(runs.max_by_key(|run| run.len()).map(Sequence::len), Ok(3));
}
