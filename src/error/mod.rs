//! Unified error handling for peerui.
//!
//! - **Error Categories**: protocol, programming, input, configuration, system
//! - **Domain-specific Errors**: `ComponentError`, `RpcError`, `InputError`
//! - **Unified Error Type**: `PeerError` consolidates all error types
//! - **Error Context**: operation, component and request attached to errors
//! - **Result Type Alias**: `PeerResult<T>`
//!
//! | Category | Raised by | Reported to |
//! |----------|-----------|-------------|
//! | Protocol | RPC decoding/dispatch | client, in the response frame |
//! | Programming | tree misuse (duplicate parent) | server caller |
//! | Input | size strings, key combos | server caller |
//! | Configuration | `SessionConfig::from_env` | server caller |
//! | System | transport I/O | server caller, ends the session |

mod category;
mod component;
mod context;
mod input;
mod peer_error;
mod result;
mod rpc;

pub use category::ErrorCategory;
pub use component::ComponentError;
pub use context::ErrorContext;
pub use input::InputError;
pub use peer_error::PeerError;
pub use result::{PeerResult, ResultExt};
pub use rpc::RpcError;
