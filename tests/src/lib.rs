//! Testing utilities and benchmarks for the symkit library
pub mod mock;
pub mod vectors;

pub use mock::{ChunkedReader, FailingReader, FailingWriter, TrackingWriter};
