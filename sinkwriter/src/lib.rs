//! # Sinkwriter
//!
//! A buffering character writer over pluggable byte sinks, built to be
//! exercised with mocks.
//!
//! Sinkwriter provides:
//!
//! - **Byte sinks**: the [`ByteSink`](sink::ByteSink) trait plus adapters for
//!   `std::io::Write`
//! - **Character writer**: [`SinkWriter`](writer::SinkWriter) encodes UTF-8,
//!   buffers, and forwards flush and close to its sink
//! - **Comparison**: the [`Comparable`](compare::Comparable) interface
//! - **Test doubles**: recording and failing sinks in [`testing`]
//!
//! ## Quick Start
//!
//! ```rust
//! use sinkwriter::prelude::*;
//!
//! let mut writer = SinkWriter::new(IoSink::new(Vec::new()));
//! writer.write_str("hello").unwrap();
//! writer.flush().unwrap();
//! assert_eq!(writer.get_ref().get_ref(), b"hello");
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod compare;
pub mod config;
pub mod errors;
pub mod observability;
pub mod sink;
pub mod testing;
pub mod writer;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::compare::{ordering_to_int, Comparable};
    pub use crate::config::WriterConfig;
    pub use crate::errors::{ConfigError, WriterError};
    pub use crate::sink::{ByteSink, IoSink, NullSink};
    pub use crate::writer::SinkWriter;
}
