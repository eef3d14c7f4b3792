//! Errors raised by the component tree and its property setters.

use thiserror::Error;

use crate::component::{ComponentId, ComponentKind};

/// Component API errors.
///
/// These are returned synchronously to the server-side caller; none of them
/// leave the component tree half-updated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComponentError {
    /// A string size did not match the size grammar.
    #[error("Invalid size argument: \"{input}\" (should match {pattern})")]
    MalformedSize { input: String, pattern: &'static str },

    /// The component already has a parent; detach it first.
    #[error("component {child} already has a parent ({current})")]
    DuplicateParent {
        child: ComponentId,
        current: ComponentId,
    },

    /// No component with this id exists in the tree.
    #[error("unknown component {0}")]
    UnknownComponent(ComponentId),

    /// The would-be parent cannot hold children.
    #[error("component {parent} of kind {kind} cannot hold children")]
    NotAContainer {
        parent: ComponentId,
        kind: ComponentKind,
    },

    /// The requested parent/child relation is not allowed
    /// (cycles, windows outside a UI, UIs with a parent).
    #[error("invalid hierarchy: {message}")]
    InvalidHierarchy { message: String },

    /// The operation needs a different component kind.
    #[error("component {id} is a {actual}, expected {expected}")]
    WrongKind {
        id: ComponentId,
        expected: ComponentKind,
        actual: ComponentKind,
    },
}

impl ComponentError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ComponentError::MalformedSize { .. } => "COMPONENT_MALFORMED_SIZE",
            ComponentError::DuplicateParent { .. } => "COMPONENT_DUPLICATE_PARENT",
            ComponentError::UnknownComponent(_) => "COMPONENT_UNKNOWN",
            ComponentError::NotAContainer { .. } => "COMPONENT_NOT_A_CONTAINER",
            ComponentError::InvalidHierarchy { .. } => "COMPONENT_INVALID_HIERARCHY",
            ComponentError::WrongKind { .. } => "COMPONENT_WRONG_KIND",
        }
    }

    /// True for errors caused by a bad value rather than bad API usage.
    pub fn is_input_error(&self) -> bool {
        matches!(self, ComponentError::MalformedSize { .. })
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ComponentError::MalformedSize { input, .. } => {
                format!("\"{}\" is not a valid size. Use values like 100px or 50%.", input)
            }
            ComponentError::DuplicateParent { child, .. } => {
                format!("Component {} is already placed in another container.", child)
            }
            ComponentError::UnknownComponent(id) => {
                format!("Component {} no longer exists.", id)
            }
            other => other.to_string(),
        }
    }
}
