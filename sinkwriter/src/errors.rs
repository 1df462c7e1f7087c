//! Error types for sinkwriter.

use std::io;
use thiserror::Error;

/// Result alias used by [`SinkWriter`](crate::writer::SinkWriter).
pub type Result<T> = std::result::Result<T, WriterError>;

/// The main error type for writer operations.
#[derive(Debug, Error)]
pub enum WriterError {
    /// The underlying sink failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The writer was used after `close`.
    #[error("Stream closed")]
    Closed,

    /// A ranged write referenced characters outside its source.
    #[error("Range {offset}..{offset}+{len} out of bounds for length {available}")]
    InvalidRange {
        /// Start of the requested range.
        offset: usize,
        /// Length of the requested range.
        len: usize,
        /// Number of items actually available.
        available: usize,
    },
}

impl WriterError {
    /// Returns the I/O error kind if this error came from the sink.
    #[must_use]
    pub fn kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Io(e) => Some(e.kind()),
            _ => None,
        }
    }

    /// Returns true if the writer had already been closed.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

/// Error raised when configuration cannot be loaded.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// A setting had a value that could not be parsed.
    #[error("Invalid value {value:?} for {key}")]
    InvalidValue {
        /// The setting name.
        key: String,
        /// The raw value.
        value: String,
    },

    /// Serialized configuration could not be parsed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
