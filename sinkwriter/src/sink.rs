//! Byte sink trait and implementations.

use std::io::{self, Write};
use tracing::trace;

/// A byte output stream.
///
/// Sinks are what a [`SinkWriter`](crate::writer::SinkWriter) forwards its
/// encoded bytes to. All operations report failures as [`io::Error`].
pub trait ByteSink {
    /// Writes a single byte.
    fn write_byte(&mut self, byte: u8) -> io::Result<()>;

    /// Writes `len` bytes of `buf` starting at `offset`.
    ///
    /// Implementations must reject ranges outside `buf`, see [`check_range`].
    fn write_bytes(&mut self, buf: &[u8], offset: usize, len: usize) -> io::Result<()>;

    /// Flushes any bytes held by the sink.
    fn flush(&mut self) -> io::Result<()>;

    /// Closes the sink and releases its resources.
    fn close(&mut self) -> io::Result<()>;
}

/// Validates that `offset..offset + len` lies within a buffer of `buf_len` bytes.
pub fn check_range(buf_len: usize, offset: usize, len: usize) -> io::Result<()> {
    match offset.checked_add(len) {
        Some(end) if end <= buf_len => Ok(()),
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("range {offset}+{len} out of bounds for length {buf_len}"),
        )),
    }
}

impl<S: ByteSink + ?Sized> ByteSink for Box<S> {
    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        (**self).write_byte(byte)
    }

    fn write_bytes(&mut self, buf: &[u8], offset: usize, len: usize) -> io::Result<()> {
        (**self).write_bytes(buf, offset, len)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }

    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        (**self).write_byte(byte)
    }

    fn write_bytes(&mut self, buf: &[u8], offset: usize, len: usize) -> io::Result<()> {
        (**self).write_bytes(buf, offset, len)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }

    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

/// A sink that discards all bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ByteSink for NullSink {
    fn write_byte(&mut self, _byte: u8) -> io::Result<()> {
        Ok(())
    }

    fn write_bytes(&mut self, buf: &[u8], offset: usize, len: usize) -> io::Result<()> {
        check_range(buf.len(), offset, len)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Adapts any [`std::io::Write`] into a [`ByteSink`].
///
/// After [`ByteSink::close`] every operation fails with
/// [`io::ErrorKind::BrokenPipe`]. Closing twice is allowed.
#[derive(Debug)]
pub struct IoSink<W: Write> {
    inner: W,
    closed: bool,
}

impl<W: Write> IoSink<W> {
    /// Wraps a writer.
    #[must_use]
    pub const fn new(inner: W) -> Self {
        Self {
            inner,
            closed: false,
        }
    }

    /// Returns true once the sink has been closed.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns a reference to the wrapped writer.
    pub const fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Unwraps the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn ensure_open(&self) -> io::Result<()> {
        if self.closed {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        } else {
            Ok(())
        }
    }
}

impl<W: Write> ByteSink for IoSink<W> {
    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.ensure_open()?;
        self.inner.write_all(&[byte])
    }

    fn write_bytes(&mut self, buf: &[u8], offset: usize, len: usize) -> io::Result<()> {
        self.ensure_open()?;
        check_range(buf.len(), offset, len)?;
        trace!(offset, len, "Writing byte range");
        self.inner.write_all(&buf[offset..offset + len])
    }

    fn flush(&mut self) -> io::Result<()> {
        self.ensure_open()?;
        self.inner.flush()
    }

    fn close(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.inner.flush()
    }
}
