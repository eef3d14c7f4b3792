//! Client state synchronization: shared state snapshots, diffs, dirty
//! tracking and the record of what the client already has.

mod connector_tracker;
mod diff;
mod dirty;
mod shared_state;
mod size_policy;

pub use connector_tracker::ConnectorTracker;
pub use diff::compute_diff;
pub use dirty::DirtyTracker;
pub use shared_state::{ButtonSharedState, SharedState, StateFields, UiSharedState};
pub use size_policy::{ContainerSizes, PermissiveSizes, SizePolicy};
