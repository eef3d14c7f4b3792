//! Client sessions.
//!
//! A [`Session`] owns one component tree behind an async mutex. Each request
//! frame is handled as a single critical section: every message is
//! dispatched, then the tree is flushed into the response, so the client
//! never sees a half-applied request.

mod config;

pub use config::{SessionConfig, ENV_LOCALE, ENV_MAX_MESSAGES, ENV_STRICT_SIZES};

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::component::ComponentTree;
use crate::error::{ErrorContext, PeerResult, ResultExt, RpcError};
use crate::rpc::{dispatch, ErrorFrame, RequestFrame, ResponseFrame};
use crate::traits::FrameSink;

pub struct Session {
    id: Uuid,
    config: SessionConfig,
    tree: Arc<Mutex<ComponentTree>>,
}

impl Session {
    /// New session with an empty tree configured from `config`.
    pub fn new(config: SessionConfig) -> Self {
        let tree = ComponentTree::from_config(&config);
        Self::with_tree(config, tree)
    }

    /// New session around an already built tree.
    pub fn with_tree(config: SessionConfig, tree: ComponentTree) -> Self {
        let id = Uuid::new_v4();
        info!(session = %id, locale = %config.locale, "Session created");
        Self {
            id,
            config,
            tree: Arc::new(Mutex::new(tree)),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Shared handle to the tree, for tasks that outlive a borrow of the
    /// session. Lock it only through short critical sections.
    pub fn tree(&self) -> Arc<Mutex<ComponentTree>> {
        Arc::clone(&self.tree)
    }

    /// Run `f` with exclusive access to the tree.
    ///
    /// Changes made here are delivered with the next response.
    pub async fn access<R>(&self, f: impl FnOnce(&mut ComponentTree) -> R) -> R {
        let mut tree = self.tree.lock().await;
        f(&mut tree)
    }

    /// Full state of every attached component plus queued client calls.
    pub async fn initial_response(&self) -> ResponseFrame {
        let mut tree = self.tree.lock().await;
        let mut response = ResponseFrame::new(0);
        response.changes = tree.flush();
        response.rpc = tree.take_client_calls();
        response
    }

    /// Dispatch every message of `frame`, then flush.
    ///
    /// Failed messages are reported in the response; the remaining messages
    /// still run.
    pub async fn handle_request(&self, frame: RequestFrame) -> ResponseFrame {
        let mut tree = self.tree.lock().await;
        let mut response = ResponseFrame::new(frame.sync_id);

        if frame.messages.len() > self.config.max_messages {
            let err = RpcError::TooManyMessages {
                count: frame.messages.len(),
                limit: self.config.max_messages,
            };
            warn!(session = %self.id, sync_id = frame.sync_id, "{}", err);
            response.errors.push(ErrorFrame::from(&err));
        } else {
            debug!(
                session = %self.id,
                sync_id = frame.sync_id,
                messages = frame.messages.len(),
                "Handling request"
            );
            for message in &frame.messages {
                if let Err(err) = dispatch(&mut tree, message) {
                    warn!(session = %self.id, sync_id = frame.sync_id, code = err.error_code(), "{}", err);
                    response.errors.push(ErrorFrame::from(&err));
                }
            }
        }

        response.changes = tree.flush();
        response.rpc = tree.take_client_calls();
        response
    }

    /// Decode and handle one JSON request. An undecodable frame is answered
    /// with an error and whatever server-side changes are pending.
    pub async fn handle_text(&self, text: &str) -> ResponseFrame {
        match RequestFrame::decode(text) {
            Ok(frame) => self.handle_request(frame).await,
            Err(err) => {
                warn!(session = %self.id, "{}", err);
                let mut response = self.initial_response().await;
                response.errors.push(ErrorFrame::from(&err));
                response
            }
        }
    }

    /// Answer JSON-lines requests from `reader` until it closes.
    pub async fn serve<R, S>(&self, reader: R, sink: &S) -> PeerResult<()>
    where
        R: AsyncBufRead + Unpin,
        S: FrameSink + ?Sized,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines
            .next_line()
            .await
            .with_context(|| ErrorContext::new("read request").with_session_id(self.id.to_string()))?
        {
            if line.trim().is_empty() {
                continue;
            }
            let response = self.handle_text(&line).await;
            let sync_id = response.sync_id;
            sink.send(&response).await.with_context(|| {
                ErrorContext::new("send response")
                    .with_sync_id(sync_id)
                    .with_session_id(self.id.to_string())
            })?;
        }
        info!(session = %self.id, "Client closed the connection");
        Ok(())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("config", &self.config)
            .finish()
    }
}
