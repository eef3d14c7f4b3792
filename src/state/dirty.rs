//! Pending set of components whose state the client has not seen yet.
//!
//! The tracker only stores ids. Liveness checks, recursive marking and the
//! pre-order flush live on [`ComponentTree`](crate::component::ComponentTree),
//! which owns the hierarchy this set is interpreted against.

use std::collections::HashSet;

use crate::component::ComponentId;

#[derive(Debug, Default, Clone)]
pub struct DirtyTracker {
    pending: HashSet<ComponentId>,
}

impl DirtyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `id` was not already pending.
    pub fn mark(&mut self, id: ComponentId) -> bool {
        self.pending.insert(id)
    }

    pub fn is_dirty(&self, id: ComponentId) -> bool {
        self.pending.contains(&id)
    }

    /// Drop a pending mark, e.g. when the component is detached.
    pub fn forget(&mut self, id: ComponentId) -> bool {
        self.pending.remove(&id)
    }

    /// Take the pending set, leaving the tracker empty.
    pub fn take(&mut self) -> HashSet<ComponentId> {
        std::mem::take(&mut self.pending)
    }

    /// Pending ids in ascending order.
    pub fn pending(&self) -> Vec<ComponentId> {
        let mut ids: Vec<_> = self.pending.iter().copied().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
