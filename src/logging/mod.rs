//! Structured progress logging for the batch run.

mod format;

pub use format::StructuredLogger;
