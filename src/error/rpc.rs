//! Errors raised while decoding and dispatching RPC calls.

use thiserror::Error;

use crate::component::ComponentId;

/// RPC protocol errors.
///
/// All variants are recoverable: they are reported back to the client in the
/// response frame and the session keeps going.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RpcError {
    /// No handler is registered for the addressed interface/method.
    #[error("no handler for {interface}.{method} on component {component}")]
    NoSuchHandler {
        component: ComponentId,
        interface: String,
        method: String,
    },

    /// The argument list does not match the declared method signature.
    #[error("bad arguments for {interface}.{method}: {message}")]
    ArgumentMismatch {
        interface: String,
        method: String,
        message: String,
    },

    /// The handler ran but could not complete the call.
    #[error("{interface}.{method} failed on component {component}: {message}")]
    HandlerFailed {
        component: ComponentId,
        interface: String,
        method: String,
        message: String,
    },

    /// A request frame could not be decoded.
    #[error("malformed frame: {message}")]
    MalformedFrame { message: String },

    /// The request carried more messages than the session accepts.
    #[error("request carries {count} messages, limit is {limit}")]
    TooManyMessages { count: usize, limit: usize },
}

impl RpcError {
    /// Get a short error code for logging and for the response frame.
    pub fn error_code(&self) -> &'static str {
        match self {
            RpcError::NoSuchHandler { .. } => "RPC_NO_SUCH_HANDLER",
            RpcError::ArgumentMismatch { .. } => "RPC_ARGUMENT_MISMATCH",
            RpcError::HandlerFailed { .. } => "RPC_HANDLER_FAILED",
            RpcError::MalformedFrame { .. } => "RPC_MALFORMED_FRAME",
            RpcError::TooManyMessages { .. } => "RPC_TOO_MANY_MESSAGES",
        }
    }

    /// Component the failed call addressed, if known.
    pub fn component(&self) -> Option<ComponentId> {
        match self {
            RpcError::NoSuchHandler { component, .. }
            | RpcError::HandlerFailed { component, .. } => Some(*component),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for RpcError {
    fn from(err: serde_json::Error) -> Self {
        RpcError::MalformedFrame {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_such_handler_display() {
        let err = RpcError::NoSuchHandler {
            component: ComponentId::new(3),
            interface: "ButtonServerRpc".to_string(),
            method: "explode".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no handler for ButtonServerRpc.explode on component 3"
        );
        assert_eq!(err.component(), Some(ComponentId::new(3)));
    }

    #[test]
    fn test_json_error_becomes_malformed_frame() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: RpcError = json_err.into();
        assert!(matches!(err, RpcError::MalformedFrame { .. }));
        assert_eq!(err.error_code(), "RPC_MALFORMED_FRAME");
    }
}
