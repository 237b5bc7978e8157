#![cfg(feature = "tracing")]

//! Tests for structured logging under the `tracing` feature.
//!
//! Every error constructor emits a `debug` event and the sort entry points
//! emit `trace` events. A `tracing-subscriber` formatter writing into a
//! shared buffer captures them.

use std::io;
use std::sync::{Arc, Mutex};

use rstest::rstest;
use seqkit::sequence;
use seqkit::sequence::Sequence;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(filter: &str, action: impl FnOnce()) -> String {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, action);
    buffer.contents()
}

// =============================================================================
// Error events
// =============================================================================

#[rstest]
fn test_out_of_range_is_logged_with_fields() {
    let output = capture("seqkit=debug", || {
        let sequence = sequence![1, 2, 3];
        assert!(sequence.get(-4).is_err());
    });
    assert!(output.contains("index out of range"));
    assert!(output.contains("index=-4"));
    assert!(output.contains("length=3"));
}

#[rstest]
fn test_empty_and_invalid_argument_are_logged() {
    let output = capture("seqkit=debug", || {
        let empty: Sequence<i32> = Sequence::new();
        assert!(empty.min().is_err());
        assert!(sequence![1, 2].chunk(0).is_err());
    });
    assert!(output.contains("operation on empty sequence"));
    assert!(output.contains("invalid argument"));
    assert!(output.contains("size must be greater than zero"));
}

#[rstest]
fn test_successful_operations_are_silent_at_debug() {
    let output = capture("seqkit=debug", || {
        let mut sequence = sequence![3, 1, 2];
        sequence.sort();
        assert_eq!(sequence.get(0), Ok(&1));
    });
    assert!(output.is_empty());
}

// =============================================================================
// Trace events
// =============================================================================

#[rstest]
fn test_sort_emits_trace_event() {
    let output = capture("seqkit=trace", || {
        let mut sequence = sequence![3, 1, 2];
        sequence.sort();
        sequence.sort_by_key(|value| -value);
    });
    assert!(output.contains("sort"));
    assert!(output.contains("sort_by_key"));
    assert!(output.contains("length=3"));
}

#[cfg(feature = "element")]
#[rstest]
fn test_flatten_all_traces_each_level() {
    use seqkit::element::Element;

    let output = capture("seqkit=trace", || {
        let inner = Sequence::from_nested(vec![Element::from(1_i32)]);
        let middle = Sequence::from_nested(vec![Element::from(inner)]);
        let outer = Sequence::from_nested(vec![Element::from(middle)]);
        assert_eq!(outer.flatten_all().len(), 1);
    });
    assert_eq!(output.matches("flatten level").count(), 2);
}
