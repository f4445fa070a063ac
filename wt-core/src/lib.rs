//! Core utilities for the workertypes declaration generator.
//!
//! This crate owns everything that touches the file system on behalf of the
//! generator: locating an existing declaration file, deciding whether it is
//! ours to overwrite, and writing the result.

mod error;
mod file;
mod find;
mod log;

pub use error::{Error, Result};
// File operations
pub use file::{File, Ownership, check_ownership};
pub use find::find_up;
// Log sinks
pub use log::{LogSink, NullSink};
