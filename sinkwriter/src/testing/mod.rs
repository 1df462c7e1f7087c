//! Testing utilities for sinkwriter.
//!
//! This module provides:
//! - Recording and failing sinks
//! - Assertions over recorded sink calls

mod assertions;
mod mocks;

pub use assertions::{
    assert_calls, assert_closed_once, assert_single_write_matching, assert_written,
};
pub use mocks::{FailingSink, RecordingSink, SinkCall, SinkOp};
