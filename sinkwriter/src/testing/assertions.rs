//! Test assertions for recorded sink calls.

use super::mocks::{RecordingSink, SinkCall, SinkOp};

/// Asserts that the sink received exactly `expected` bytes.
pub fn assert_written(sink: &RecordingSink, expected: &[u8]) {
    let actual = sink.written();
    assert_eq!(
        actual,
        expected,
        "Expected bytes {:?}, got {:?}",
        String::from_utf8_lossy(expected),
        String::from_utf8_lossy(&actual)
    );
}

/// Asserts that `op` was invoked exactly `times` times.
pub fn assert_calls(sink: &RecordingSink, op: SinkOp, times: usize) {
    let actual = sink.calls_to(op);
    assert_eq!(
        actual, times,
        "Expected {:?} to be called {} time(s), got {}. Calls: {:?}",
        op, times, actual, sink.calls()
    );
}

/// Asserts that the sink was closed exactly once.
pub fn assert_closed_once(sink: &RecordingSink) {
    assert_calls(sink, SinkOp::Close, 1);
}

/// Asserts that the sink saw exactly one ranged write, and that it matched
/// `predicate`.
///
/// The predicate receives the bytes inside the written range followed by the
/// offset and length arguments.
pub fn assert_single_write_matching<F>(sink: &RecordingSink, predicate: F)
where
    F: Fn(&[u8], usize, usize) -> bool,
{
    let writes: Vec<SinkCall> = sink
        .calls()
        .into_iter()
        .filter(|c| c.op() == SinkOp::WriteBytes)
        .collect();
    let matched = match writes.as_slice() {
        [SinkCall::WriteBytes {
            bytes, offset, len, ..
        }] => predicate(bytes.as_slice(), *offset, *len),
        _ => false,
    };
    assert!(
        matched,
        "Expected exactly one matching write, got {:?}",
        writes
    );
}
