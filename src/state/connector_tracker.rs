//! Last state snapshot the client is known to hold, per component.

use std::collections::HashMap;

use serde_json::Value;

use super::shared_state::StateFields;
use crate::component::ComponentId;

#[derive(Debug, Default, Clone)]
pub struct ConnectorTracker {
    sent: HashMap<ComponentId, StateFields>,
}

impl ConnectorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the component's full state has been transmitted.
    pub fn has_sent(&self, id: ComponentId) -> bool {
        self.sent.contains_key(&id)
    }

    pub fn diff_state(&self, id: ComponentId) -> Option<&StateFields> {
        self.sent.get(&id)
    }

    /// Mutable view of the client's copy. Writing a value here makes the next
    /// diff treat it as already known by the client.
    pub fn diff_state_mut(&mut self, id: ComponentId) -> Option<&mut StateFields> {
        self.sent.get_mut(&id)
    }

    /// Record a single field as already known by the client. No-op before
    /// the first transmission, which always carries the full state.
    pub fn acknowledge(&mut self, id: ComponentId, field: &str, value: Value) -> bool {
        match self.sent.get_mut(&id) {
            Some(fields) => {
                fields.insert(field.to_string(), value);
                true
            }
            None => false,
        }
    }

    pub fn record(&mut self, id: ComponentId, fields: StateFields) {
        self.sent.insert(id, fields);
    }

    /// Forget a component, so its next transmission is a full state.
    pub fn forget(&mut self, id: ComponentId) {
        self.sent.remove(&id);
    }

    pub fn len(&self) -> usize {
        self.sent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sent.is_empty()
    }
}
