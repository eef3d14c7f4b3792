//! Mock frame sink for testing.

use async_trait::async_trait;
use std::io;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::{PeerError, PeerResult};
use crate::rpc::ResponseFrame;
use crate::traits::FrameSink;

/// Captures sent frames in memory.
///
/// # Example
///
/// ```ignore
/// use peerui::adapters::mock::MockSink;
///
/// let sink = MockSink::new();
/// session.serve(reader, &sink).await?;
/// assert_eq!(sink.sent_frames().await.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct MockSink {
    sent: Arc<Mutex<Vec<ResponseFrame>>>,
    send_should_fail: Arc<Mutex<bool>>,
}

impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all sent frames.
    pub async fn sent_frames(&self) -> Vec<ResponseFrame> {
        self.sent.lock().await.clone()
    }

    /// Clear all sent frames.
    pub async fn clear(&self) {
        self.sent.lock().await.clear();
    }

    /// Configure whether send should fail.
    pub async fn set_send_should_fail(&self, should_fail: bool) {
        *self.send_should_fail.lock().await = should_fail;
    }
}

#[async_trait]
impl FrameSink for MockSink {
    async fn send(&self, frame: &ResponseFrame) -> PeerResult<()> {
        if *self.send_should_fail.lock().await {
            return Err(PeerError::Io(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "mock sink closed",
            )));
        }
        self.sent.lock().await.push(frame.clone());
        Ok(())
    }
}
