//! Recording and failing sinks for testing.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::io;
use std::sync::Arc;

use crate::sink::{check_range, ByteSink};

/// The sink operations, used to select which one a [`FailingSink`] fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkOp {
    /// [`ByteSink::write_byte`].
    WriteByte,
    /// [`ByteSink::write_bytes`].
    WriteBytes,
    /// [`ByteSink::flush`].
    Flush,
    /// [`ByteSink::close`].
    Close,
}

/// A recorded sink invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCall {
    /// A single byte was written.
    WriteByte(u8),
    /// A byte range was written.
    WriteBytes {
        /// The bytes inside the written range.
        bytes: Vec<u8>,
        /// Offset argument.
        offset: usize,
        /// Length argument.
        len: usize,
        /// Length of the whole slice passed in.
        buf_len: usize,
    },
    /// The sink was flushed.
    Flush,
    /// The sink was closed.
    Close,
}

impl SinkCall {
    /// Returns the operation this call invoked.
    #[must_use]
    pub const fn op(&self) -> SinkOp {
        match self {
            Self::WriteByte(_) => SinkOp::WriteByte,
            Self::WriteBytes { .. } => SinkOp::WriteBytes,
            Self::Flush => SinkOp::Flush,
            Self::Close => SinkOp::Close,
        }
    }
}

/// A sink that records every call and always succeeds.
///
/// Clones share the same call log, so a test can keep one handle while the
/// other is moved into a writer.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    calls: Arc<Mutex<Vec<SinkCall>>>,
}

impl RecordingSink {
    /// Creates a new recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded calls.
    #[must_use]
    pub fn calls(&self) -> Vec<SinkCall> {
        self.calls.lock().clone()
    }

    /// Returns the number of calls to `op`.
    #[must_use]
    pub fn calls_to(&self, op: SinkOp) -> usize {
        self.calls.lock().iter().filter(|c| c.op() == op).count()
    }

    /// Returns the number of ranged writes.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.calls_to(SinkOp::WriteBytes)
    }

    /// Returns every byte written, in order.
    #[must_use]
    pub fn written(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for call in self.calls.lock().iter() {
            match call {
                SinkCall::WriteByte(b) => out.push(*b),
                SinkCall::WriteBytes { bytes, .. } => out.extend_from_slice(bytes),
                SinkCall::Flush | SinkCall::Close => {}
            }
        }
        out
    }

    /// Clears recorded calls.
    pub fn clear(&self) {
        self.calls.lock().clear();
    }

    fn record(&self, call: SinkCall) {
        self.calls.lock().push(call);
    }
}

impl ByteSink for RecordingSink {
    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.record(SinkCall::WriteByte(byte));
        Ok(())
    }

    fn write_bytes(&mut self, buf: &[u8], offset: usize, len: usize) -> io::Result<()> {
        check_range(buf.len(), offset, len)?;
        self.record(SinkCall::WriteBytes {
            bytes: buf[offset..offset + len].to_vec(),
            offset,
            len,
            buf_len: buf.len(),
        });
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.record(SinkCall::Flush);
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.record(SinkCall::Close);
        Ok(())
    }
}

/// A sink whose chosen operation always fails with a given error kind.
#[derive(Debug)]
pub struct FailingSink {
    op: SinkOp,
    kind: io::ErrorKind,
    counts: HashMap<SinkOp, usize>,
}

impl FailingSink {
    /// Creates a sink failing `op` with `kind`.
    #[must_use]
    pub fn new(op: SinkOp, kind: io::ErrorKind) -> Self {
        Self {
            op,
            kind,
            counts: HashMap::new(),
        }
    }

    /// Returns how many times `op` was invoked, failed or not.
    #[must_use]
    pub fn calls_to(&self, op: SinkOp) -> usize {
        self.counts.get(&op).copied().unwrap_or(0)
    }

    fn invoke(&mut self, op: SinkOp) -> io::Result<()> {
        *self.counts.entry(op).or_insert(0) += 1;
        if op == self.op {
            Err(io::Error::new(self.kind, format!("injected {op:?} failure")))
        } else {
            Ok(())
        }
    }
}

impl ByteSink for FailingSink {
    fn write_byte(&mut self, _byte: u8) -> io::Result<()> {
        self.invoke(SinkOp::WriteByte)
    }

    fn write_bytes(&mut self, buf: &[u8], offset: usize, len: usize) -> io::Result<()> {
        check_range(buf.len(), offset, len)?;
        self.invoke(SinkOp::WriteBytes)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.invoke(SinkOp::Flush)
    }

    fn close(&mut self) -> io::Result<()> {
        self.invoke(SinkOp::Close)
    }
}
