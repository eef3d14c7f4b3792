//! Prelude module for convenient imports.
//!
//! ```ignore
//! use peerui::prelude::*;
//! ```
//!
//! This will import:
//! - Component tree types (ComponentTree, ComponentId, EventKind)
//! - Capability traits (Styleable, Sizeable, FocusTarget, ActionTarget)
//! - RPC types (FnHandler, ArgType, RpcValue)
//! - Session types (Session, SessionConfig)
//! - Error types (PeerError, PeerResult)

// Component tree
pub use crate::component::{
    ComponentEvent, ComponentId, ComponentKind, ComponentResult, ComponentTree, EventKind,
};

// Capabilities
pub use crate::component::{ActionTarget, FocusTarget, Sizeable, Styleable};

// Values
pub use crate::input::KeyCombo;
pub use crate::models::{ErrorMessage, MouseEventDetails, Size, Unit};

// RPC
pub use crate::rpc::{ArgType, FnHandler, RpcHandler, RpcValue};

// Session
pub use crate::session::{Session, SessionConfig};
pub use crate::traits::FrameSink;

// Errors
pub use crate::error::{PeerError, PeerResult};
