//! peerui - server-side UI components synchronized to a client
//!
//! Components live on the server in a [`component::ComponentTree`]. Their
//! presentation state is diffed against what the client last received and
//! shipped in response frames, while client events come back as typed RPC
//! calls.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod component;
pub mod error;
pub mod input;
pub mod models;
pub mod prelude;
pub mod rpc;
pub mod session;
pub mod state;
pub mod telemetry;
pub mod traits;
