//! Unified error type for peerui.
//!
//! `PeerError` consolidates the domain-specific error enums so session code
//! can categorize, log and report any failure the same way.

use std::fmt;

use super::category::ErrorCategory;
use super::component::ComponentError;
use super::context::ErrorContext;
use super::input::InputError;
use super::rpc::RpcError;
use crate::component::ComponentId;

/// Unified error type for peerui.
#[derive(Debug)]
pub enum PeerError {
    /// Component tree and property errors.
    Component(ComponentError),

    /// RPC decoding and dispatch errors.
    Rpc(RpcError),

    /// Key combination parse errors.
    Input(InputError),

    /// Invalid configuration value.
    Configuration { key: String, message: String },

    /// Transport I/O errors.
    Io(std::io::Error),

    /// Wrapped error with additional context.
    WithContext {
        error: Box<PeerError>,
        context: ErrorContext,
    },
}

impl PeerError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            PeerError::Component(err) => {
                if err.is_input_error() {
                    ErrorCategory::Input
                } else {
                    ErrorCategory::Programming
                }
            }
            PeerError::Rpc(_) => ErrorCategory::Protocol,
            PeerError::Input(_) => ErrorCategory::Input,
            PeerError::Configuration { .. } => ErrorCategory::Configuration,
            PeerError::Io(_) => ErrorCategory::System,
            PeerError::WithContext { error, .. } => error.category(),
        }
    }

    /// Check if the session can continue after this error.
    pub fn is_recoverable(&self) -> bool {
        self.category().is_recoverable()
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            PeerError::Component(err) => err.user_message(),
            PeerError::Rpc(_) => {
                "The page is out of sync with the server. Please reload.".to_string()
            }
            PeerError::Input(err) => format!("Invalid shortcut: {}", err),
            PeerError::Configuration { key, message } => {
                format!("Configuration value {} is invalid: {}", key, message)
            }
            PeerError::Io(_) => "Connection to the client was lost.".to_string(),
            PeerError::WithContext { error, context } => {
                format!("{}\n\nContext: {}", error.user_message(), context)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            PeerError::Component(err) => err.error_code(),
            PeerError::Rpc(err) => err.error_code(),
            PeerError::Input(err) => err.error_code(),
            PeerError::Configuration { .. } => "CONFIG_INVALID",
            PeerError::Io(_) => "SYSTEM_IO",
            PeerError::WithContext { error, .. } => error.error_code(),
        }
    }

    /// Component the error concerns, taken from the error or its context.
    pub fn component(&self) -> Option<ComponentId> {
        match self {
            PeerError::Rpc(err) => err.component(),
            PeerError::Component(ComponentError::UnknownComponent(id)) => Some(*id),
            PeerError::WithContext { error, context } => {
                context.component.or_else(|| error.component())
            }
            _ => None,
        }
    }

    /// Attach context to this error.
    pub fn with_context(self, ctx: ErrorContext) -> Self {
        PeerError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    /// Get the context if this error has one attached.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            PeerError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Get the inner error without context.
    pub fn inner(&self) -> &PeerError {
        match self {
            PeerError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for PeerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeerError::Component(err) => write!(f, "{}", err),
            PeerError::Rpc(err) => write!(f, "{}", err),
            PeerError::Input(err) => write!(f, "{}", err),
            PeerError::Configuration { key, message } => {
                write!(f, "invalid configuration {}: {}", key, message)
            }
            PeerError::Io(err) => write!(f, "I/O error: {}", err),
            PeerError::WithContext { error, context } => {
                write!(f, "{} ({})", error, context)
            }
        }
    }
}

impl std::error::Error for PeerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PeerError::Component(err) => Some(err),
            PeerError::Rpc(err) => Some(err),
            PeerError::Input(err) => Some(err),
            PeerError::Configuration { .. } => None,
            PeerError::Io(err) => Some(err),
            PeerError::WithContext { error, .. } => error.source(),
        }
    }
}

// ============================================================================
// From implementations for automatic error conversion
// ============================================================================

impl From<ComponentError> for PeerError {
    fn from(err: ComponentError) -> Self {
        PeerError::Component(err)
    }
}

impl From<RpcError> for PeerError {
    fn from(err: RpcError) -> Self {
        PeerError::Rpc(err)
    }
}

impl From<InputError> for PeerError {
    fn from(err: InputError) -> Self {
        PeerError::Input(err)
    }
}

impl From<std::io::Error> for PeerError {
    fn from(err: std::io::Error) -> Self {
        PeerError::Io(err)
    }
}

impl From<serde_json::Error> for PeerError {
    fn from(err: serde_json::Error) -> Self {
        PeerError::Rpc(err.into())
    }
}
