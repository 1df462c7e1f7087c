//! Stubbing and verification with mockall.
//!
//! Each test arranges a mock, exercises it (directly or through a
//! `SinkWriter`), then asserts on results or recorded calls.

use std::io;

use mockall::predicate::{always, eq};
use mockall::{mock, Sequence};
use pretty_assertions::assert_eq;
use sinkwriter::prelude::*;

mock! {
    Words {}
    impl Iterator for Words {
        type Item = String;

        fn next(&mut self) -> Option<String>;
    }
}

mock! {
    Text {}
    impl Comparable<String> for Text {
        fn compare_to(&self, other: &String) -> i32;
    }
}

mock! {
    Number {}
    impl Comparable<i32> for Number {
        fn compare_to(&self, other: &i32) -> i32;
    }
}

mock! {
    Sink {}
    impl ByteSink for Sink {
        fn write_byte(&mut self, byte: u8) -> io::Result<()>;
        fn write_bytes(&mut self, buf: &[u8], offset: usize, len: usize) -> io::Result<()>;
        fn flush(&mut self) -> io::Result<()>;
        fn close(&mut self) -> io::Result<()>;
    }
}

/// Matches a byte slice by its first byte only.
fn starts_with(expected: u8) -> impl Fn(&[u8]) -> bool {
    move |buf| buf.first() == Some(&expected)
}

// "Hello" on the first call, "World" on every call after that.
#[test]
fn test_iterator_will_return_hello_world() {
    let mut words = MockWords::new();
    let mut calls = 0;
    words.expect_next().returning(move || {
        calls += 1;
        let word = if calls == 1 { "Hello" } else { "World" };
        Some(word.to_string())
    });

    let first = words.next().unwrap_or_default();
    let second = words.next().unwrap_or_default();
    let result = format!("{first} {second}");

    assert_eq!(result, "Hello World");
    assert_eq!(words.next().as_deref(), Some("World"));
}

// Return values can depend on the argument.
#[test]
fn test_with_arguments() {
    let mut text = MockText::new();
    text.expect_compare_to()
        .with(eq("Test".to_string()))
        .return_const(1);

    assert_eq!(text.compare_to(&"Test".to_string()), 1);
}

// Any argument at all gets the same answer.
#[test]
fn test_with_unspecified_arguments() {
    let mut number = MockNumber::new();
    number.expect_compare_to().with(always()).return_const(-1);

    assert_eq!(number.compare_to(&5), -1);
    assert_eq!(number.compare_to(&0), -1);
    assert_eq!(number.compare_to(&-100), -1);
}

#[test]
fn test_writer_rethrows_error_from_sink() {
    let mut sink = MockSink::new();
    sink.expect_close()
        .times(1)
        .returning(|| Err(io::Error::from(io::ErrorKind::Other)));
    let mut writer = SinkWriter::new(sink);

    let Err(WriterError::Io(err)) = writer.close() else {
        panic!("expected the sink's close error to propagate");
    };
    assert_eq!(err.kind(), io::ErrorKind::Other);
}

// The writer forwards close to the wrapped sink.
#[test]
fn test_writer_closes_sink_on_close() {
    let mut sink = MockSink::new();
    sink.expect_close().times(1).returning(|| Ok(()));
    let mut writer = SinkWriter::new(sink);

    writer.close().unwrap();

    writer.into_inner().checkpoint();
}

#[test]
fn test_writer_buffers_and_forwards_to_sink() {
    let mut sink = MockSink::new();
    // The buffer length is not known, so only check its first byte along
    // with the offset and length.
    let leading_a = starts_with(b'a');
    sink.expect_write_bytes()
        .withf(move |buf, offset, len| leading_a(buf) && *offset == 0 && *len == 1)
        .times(1)
        .returning(|_, _, _| Ok(()));
    sink.expect_flush().times(1).returning(|| Ok(()));
    let mut writer = SinkWriter::new(sink);

    writer.write_char('a').unwrap();
    writer.flush().unwrap();

    writer.into_inner().checkpoint();
}

#[test]
fn test_close_drains_without_flushing_sink() {
    let mut sink = MockSink::new();
    let mut seq = Sequence::new();
    sink.expect_write_bytes()
        .withf(|_, offset, len| *offset == 0 && *len == 3)
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _, _| Ok(()));
    sink.expect_close()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(()));
    let mut writer = SinkWriter::new(sink);

    writer.write_str("abc").unwrap();
    writer.close().unwrap();
    writer.close().unwrap();

    writer.into_inner().checkpoint();
}

#[test]
fn test_writer_never_writes_single_bytes() {
    let mut sink = MockSink::new();
    sink.expect_write_byte().never();
    sink.expect_write_bytes()
        .withf(|_, offset, len| *offset == 0 && *len == 2)
        .times(1)
        .returning(|_, _, _| Ok(()));
    sink.expect_flush().times(1).returning(|| Ok(()));
    let mut writer = SinkWriter::new(sink);

    writer.write_char('é').unwrap();
    writer.flush().unwrap();

    writer.into_inner().checkpoint();
}
