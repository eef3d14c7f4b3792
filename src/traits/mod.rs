//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`FrameSink`] - Delivery of response frames to the client

pub mod transport;

pub use transport::FrameSink;
