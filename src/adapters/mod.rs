//! Concrete implementations of trait abstractions.
//!
//! - [`JsonLinesSink`] - Frames as JSON lines on any async writer
//! - [`mock::MockSink`] - In-memory sink for tests

pub mod mock;
pub mod stdio;

pub use mock::MockSink;
pub use stdio::JsonLinesSink;
