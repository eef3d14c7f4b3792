//! Typed RPC between client and server components.
//!
//! Client calls arrive in a [`RequestFrame`], are routed by component id and
//! interface name to an [`RpcHandler`], and their effects come back in the
//! next [`ResponseFrame`] together with queued server → client calls.

mod dispatch;
mod handler;
mod messages;
mod outbox;

pub use dispatch::{dispatch, dispatch_call, Dispatched};
pub use handler::{ArgType, FnHandler, MethodFn, MethodSignature, RpcHandler, RpcValue};
pub use messages::{
    ClientMessage, ErrorFrame, RequestFrame, ResponseFrame, RpcCall, ShortcutInvocation,
    StateChange,
};
pub use outbox::ClientCallQueue;
