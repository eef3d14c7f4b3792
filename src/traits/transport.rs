//! Transport trait for delivering response frames.

use async_trait::async_trait;

use crate::error::PeerResult;
use crate::rpc::ResponseFrame;

/// Sink for frames going to the client.
///
/// # Example
///
/// ```ignore
/// use peerui::traits::FrameSink;
///
/// async fn push<S: FrameSink>(sink: &S, session: &Session) -> PeerResult<()> {
///     sink.send(&session.initial_response().await).await
/// }
/// ```
#[async_trait]
pub trait FrameSink: Send + Sync {
    /// Deliver one frame. An error means the client can no longer be
    /// reached.
    async fn send(&self, frame: &ResponseFrame) -> PeerResult<()>;
}
