//! Mock implementations for testing.
//!
//! - [`MockSink`] - Frame sink that captures everything it is sent

pub mod transport;

pub use transport::MockSink;
