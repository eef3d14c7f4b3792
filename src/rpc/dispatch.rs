//! Routing of decoded client messages to component handlers.

use tracing::{debug, warn};

use super::messages::{ClientMessage, RpcCall};
use crate::component::ComponentTree;
use crate::error::RpcError;

/// What happened to a dispatched message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatched {
    /// A handler or shortcut action ran.
    Invoked,
    /// The target exists but is not rendered, or no shortcut matched.
    Ignored,
}

/// Dispatch one client message against the tree.
pub fn dispatch(tree: &mut ComponentTree, message: &ClientMessage) -> Result<Dispatched, RpcError> {
    match message {
        ClientMessage::Rpc(call) => dispatch_call(tree, call),
        ClientMessage::Shortcut(shortcut) => {
            if tree.handle_shortcut(shortcut.scope_id, shortcut.combo) {
                Ok(Dispatched::Invoked)
            } else {
                Ok(Dispatched::Ignored)
            }
        }
    }
}

/// Route `call` to the handler registered for its interface.
///
/// Target and arguments are validated first, so a bad call against a hidden
/// component still reports an error.
pub fn dispatch_call(tree: &mut ComponentTree, call: &RpcCall) -> Result<Dispatched, RpcError> {
    let no_handler = || RpcError::NoSuchHandler {
        component: call.component_id,
        interface: call.interface_name.clone(),
        method: call.method_name.clone(),
    };

    let handler = tree
        .handler(call.component_id, &call.interface_name)
        .ok_or_else(no_handler)?;
    let signature = handler.method(&call.method_name).ok_or_else(no_handler)?;
    signature.check(&call.interface_name, &call.args)?;

    if !tree.is_rendered(call.component_id) {
        warn!(
            component = %call.component_id,
            interface = %call.interface_name,
            method = %call.method_name,
            "Ignoring RPC call to a component that is not rendered"
        );
        return Ok(Dispatched::Ignored);
    }

    debug!(
        component = %call.component_id,
        "Dispatching {}.{}",
        call.interface_name,
        call.method_name
    );
    handler.invoke(tree, call.component_id, &call.method_name, &call.args)?;
    Ok(Dispatched::Invoked)
}
