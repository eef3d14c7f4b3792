//! JSON-lines transport over any async writer, stdout by default.

use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

use crate::error::PeerResult;
use crate::rpc::ResponseFrame;
use crate::traits::FrameSink;

/// Writes each frame as one line of JSON.
pub struct JsonLinesSink<W> {
    writer: Mutex<W>,
}

impl<W> JsonLinesSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl JsonLinesSink<tokio::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

#[async_trait]
impl<W> FrameSink for JsonLinesSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn send(&self, frame: &ResponseFrame) -> PeerResult<()> {
        let mut line = serde_json::to_string(frame)?;
        line.push('\n');
        let mut writer = self.writer.lock().await;
        writer.write_all(line.as_bytes()).await?;
        writer.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_writes_one_line_per_frame() {
        let sink = JsonLinesSink::new(Vec::new());
        sink.send(&ResponseFrame::new(1)).await.unwrap();
        sink.send(&ResponseFrame::new(2)).await.unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let second: ResponseFrame = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second.sync_id, 2);
    }
}
