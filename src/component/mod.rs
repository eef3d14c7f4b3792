//! Server-side component model.
//!
//! Components live in a [`ComponentTree`] arena and are addressed by
//! [`ComponentId`]. Property changes mark components dirty; a flush turns
//! the dirty set into shared state diffs for the client.

mod button;
mod capabilities;
mod events;
mod id;
mod mutation;
mod node;
mod props;
mod tree;

pub use button::{BUTTON_RPC, FOCUS_BLUR_RPC};
pub use capabilities::{ActionTarget, ButtonMut, ComponentMut, FocusTarget, Sizeable, Styleable};
pub use events::{ComponentEvent, EventKind, Listener, ListenerId, Listeners};
pub use id::{ComponentId, ComponentKind};
pub use mutation::StateMutation;
pub use props::{ButtonProps, ComponentProps};
pub use tree::{ComponentTree, DEFAULT_LOCALE};

use crate::error::ComponentError;

/// Result of component tree operations.
pub type ComponentResult<T> = Result<T, ComponentError>;
