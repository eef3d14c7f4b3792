//! Result type alias for peerui operations.

use super::context::ErrorContext;
use super::peer_error::PeerError;

/// Type alias for Results using PeerError.
pub type PeerResult<T> = Result<T, PeerError>;

/// Extension trait for Result types to add context to errors.
pub trait ResultExt<T> {
    /// Add context to an error if the result is Err.
    fn context(self, ctx: ErrorContext) -> PeerResult<T>;

    /// Add context using a closure (only called on error).
    fn with_context<F>(self, f: F) -> PeerResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<PeerError>,
{
    fn context(self, ctx: ErrorContext) -> PeerResult<T> {
        self.map_err(|e| e.into().with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> PeerResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}
