//! Large-input tests.
//!
//! These finish quickly only when the operations keep their documented
//! complexity, so a quadratic regression in a linear path shows up as a
//! timeout here.

use rstest::rstest;
use seqkit::sequence;
use seqkit::sequence::Sequence;

const LARGE: usize = 200_000;

#[rstest]
fn test_sort_large_reversed_input() {
    let mut sequence: Sequence<usize> = (0..LARGE).rev().collect();
    sequence.sort();
    assert!(sequence.is_sorted());
    assert_eq!(sequence.first(), Ok(&0));
    assert_eq!(sequence.last(), Ok(&(LARGE - 1)));
}

#[rstest]
fn test_sort_large_input_with_many_ties() {
    let mut sequence: Sequence<(u8, usize)> = (0..LARGE)
        .map(|index| (u8::try_from(index % 7).unwrap(), index))
        .collect();
    sequence.sort_by_key(|(key, _)| *key);
    assert!(sequence.is_sorted());
}

#[rstest]
fn test_split_and_rejoin_large_input() {
    let sequence: Sequence<usize> = (0..LARGE).map(|index| index % 10).collect();
    let parts = sequence.split(&0);
    assert_eq!(parts.len(), LARGE / 10 + 1);
    assert_eq!(parts.rejoin(&0), sequence);
}

#[rstest]
fn test_rotate_large_input() {
    let mut sequence: Sequence<usize> = (0..LARGE).collect();
    sequence.rotate_left(LARGE * 3 + 5);
    assert_eq!(sequence.get(0), Ok(&5));
    sequence.rotate_right(5);
    assert_eq!(sequence.get(-1), Ok(&(LARGE - 1)));
}

#[rstest]
fn test_dedup_hashed_large_distinct_input() {
    let mut sequence: Sequence<usize> = (0..LARGE).chain(0..LARGE).collect();
    sequence.dedup_hashed();
    assert_eq!(sequence.len(), LARGE);
}

#[rstest]
fn test_dedup_moderate_input() {
    let mut sequence: Sequence<u16> = (0..20_000_u16).map(|value| value % 500).collect();
    sequence.dedup();
    assert_eq!(sequence.len(), 500);
}

#[rstest]
fn test_flatten_many_partitions() {
    let nested: Sequence<Sequence<usize>> = (0..LARGE / 4).map(|index| sequence![index; 4]).collect();
    assert_eq!(nested.flatten().len(), LARGE);
}

#[cfg(feature = "element")]
#[rstest]
fn test_flatten_all_deep_nesting() {
    use seqkit::element::Element;

    let mut current = Sequence::from_nested(vec![Element::from(1_i32), Element::from(2_i32)]);
    for _ in 0..200 {
        current = Sequence::from_nested(vec![Element::from(current)]);
    }
    assert!(current.is_nested());
    let flat = current.flatten_all();
    assert_eq!(flat.len(), 2);
    assert!(!flat.is_nested());
}
