//! Server → client calls waiting for the next response.

use super::messages::RpcCall;

/// FIFO of outgoing client calls.
#[derive(Debug, Default, Clone)]
pub struct ClientCallQueue {
    calls: Vec<RpcCall>,
}

impl ClientCallQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, call: RpcCall) {
        self.calls.push(call);
    }

    /// Take every queued call, in the order they were queued.
    pub fn drain(&mut self) -> Vec<RpcCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}
