//! Buffering character writer over a [`ByteSink`].

use std::fmt;
use tracing::{debug, trace, warn};

use crate::config::WriterConfig;
use crate::errors::{Result, WriterError};
use crate::sink::ByteSink;

/// Encodes characters as UTF-8 and forwards the bytes to a sink.
///
/// Encoded bytes are held in a fixed-size buffer. The buffer is drained to
/// the sink with a single [`ByteSink::write_bytes`] call whose slice is the
/// whole buffer, offset 0 and length equal to the pending byte count. A
/// drain happens when the next character would not fit, on [`flush`] and on
/// [`close`].
///
/// Dropping a writer does not close its sink.
///
/// [`flush`]: SinkWriter::flush
/// [`close`]: SinkWriter::close
#[derive(Debug)]
pub struct SinkWriter<S: ByteSink> {
    sink: S,
    buf: Box<[u8]>,
    filled: usize,
    closed: bool,
}

impl<S: ByteSink> SinkWriter<S> {
    /// Creates a writer with the default configuration.
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, &WriterConfig::default())
    }

    /// Creates a writer with the given configuration.
    pub fn with_config(sink: S, config: &WriterConfig) -> Self {
        Self {
            sink,
            buf: vec![0; config.effective_capacity()].into_boxed_slice(),
            filled: 0,
            closed: false,
        }
    }

    /// Name of the character encoding.
    #[must_use]
    pub const fn encoding(&self) -> &'static str {
        "UTF-8"
    }

    /// Number of encoded bytes not yet forwarded to the sink.
    #[must_use]
    pub const fn buffered(&self) -> usize {
        self.filled
    }

    /// Size of the encode buffer.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns true once [`close`](Self::close) has been called.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns a reference to the sink.
    pub const fn get_ref(&self) -> &S {
        &self.sink
    }

    /// Returns a mutable reference to the sink.
    ///
    /// Writing to the sink directly bypasses any buffered bytes.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Unwraps the writer, returning the sink. Buffered bytes are discarded.
    pub fn into_inner(self) -> S {
        self.sink
    }

    /// Writes a single character.
    pub fn write_char(&mut self, c: char) -> Result<()> {
        self.ensure_open()?;
        let mut tmp = [0u8; 4];
        let encoded = c.encode_utf8(&mut tmp).as_bytes();

        if encoded.len() > self.buf.len() - self.filled {
            self.drain()?;
        }
        if encoded.len() > self.buf.len() {
            // Buffer too small to ever hold this character.
            self.sink.write_bytes(encoded, 0, encoded.len())?;
            return Ok(());
        }

        self.buf[self.filled..self.filled + encoded.len()].copy_from_slice(encoded);
        self.filled += encoded.len();
        Ok(())
    }

    /// Writes every character of `s`.
    pub fn write_str(&mut self, s: &str) -> Result<()> {
        self.ensure_open()?;
        s.chars().try_for_each(|c| self.write_char(c))
    }

    /// Writes `len` characters of `s` starting at character `offset`.
    pub fn write_str_range(&mut self, s: &str, offset: usize, len: usize) -> Result<()> {
        self.ensure_open()?;
        check_chars(s.chars().count(), offset, len)?;
        s.chars()
            .skip(offset)
            .take(len)
            .try_for_each(|c| self.write_char(c))
    }

    /// Writes `len` characters of `chars` starting at `offset`.
    pub fn write_chars(&mut self, chars: &[char], offset: usize, len: usize) -> Result<()> {
        self.ensure_open()?;
        check_chars(chars.len(), offset, len)?;
        chars[offset..offset + len]
            .iter()
            .try_for_each(|&c| self.write_char(c))
    }

    /// Forwards buffered bytes and flushes the sink.
    pub fn flush(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.drain()?;
        self.sink.flush()?;
        Ok(())
    }

    /// Forwards buffered bytes and closes the sink.
    ///
    /// Closing an already closed writer does nothing. The writer counts as
    /// closed even when this returns an error; the sink is closed even if
    /// forwarding the buffered bytes failed, and the first error is returned.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        debug!(pending = self.filled, "Closing writer");

        let drained = self.drain();
        let closed = self.sink.close();
        if let Err(ref e) = closed {
            warn!(error = %e, "Sink failed to close");
        }
        drained?;
        closed?;
        Ok(())
    }

    fn drain(&mut self) -> Result<()> {
        if self.filled == 0 {
            return Ok(());
        }
        trace!(bytes = self.filled, "Draining buffer to sink");
        self.sink.write_bytes(&self.buf, 0, self.filled)?;
        self.filled = 0;
        Ok(())
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            Err(WriterError::Closed)
        } else {
            Ok(())
        }
    }
}

fn check_chars(available: usize, offset: usize, len: usize) -> Result<()> {
    match offset.checked_add(len) {
        Some(end) if end <= available => Ok(()),
        _ => Err(WriterError::InvalidRange {
            offset,
            len,
            available,
        }),
    }
}

impl<S: ByteSink> fmt::Write for SinkWriter<S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Self::write_str(self, s).map_err(|_| fmt::Error)
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        Self::write_char(self, c).map_err(|_| fmt::Error)
    }
}
