//! Component events and per-component listener lists.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::{ComponentId, ComponentTree};
use crate::models::MouseEventDetails;

/// Kinds of events a component can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Focus,
    Blur,
    ComponentError,
    Attach,
    Detach,
}

/// An event delivered to listeners.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentEvent {
    pub source: ComponentId,
    pub kind: EventKind,
    /// Set for clicks coming from the client; `None` for programmatic clicks.
    pub mouse: Option<MouseEventDetails>,
}

impl ComponentEvent {
    pub fn new(source: ComponentId, kind: EventKind) -> Self {
        Self {
            source,
            kind,
            mouse: None,
        }
    }

    pub fn click(source: ComponentId, mouse: Option<MouseEventDetails>) -> Self {
        Self {
            source,
            kind: EventKind::Click,
            mouse,
        }
    }

    pub fn client_x(&self) -> i32 {
        self.mouse.map(|m| m.client_x).unwrap_or(0)
    }

    pub fn client_y(&self) -> i32 {
        self.mouse.map(|m| m.client_y).unwrap_or(0)
    }

    pub fn is_shift_key(&self) -> bool {
        self.mouse.is_some_and(|m| m.shift_key)
    }

    pub fn is_ctrl_key(&self) -> bool {
        self.mouse.is_some_and(|m| m.ctrl_key)
    }
}

/// Callback invoked with the tree so it can mutate component state.
pub type Listener = Arc<dyn Fn(&mut ComponentTree, &ComponentEvent) + Send + Sync>;

/// Handle returned when adding a listener, used to remove it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

impl ListenerId {
    fn next() -> Self {
        Self(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Ordered listener lists keyed by event kind.
#[derive(Default, Clone)]
pub struct Listeners {
    by_kind: HashMap<EventKind, Vec<(ListenerId, Listener)>>,
}

impl Listeners {
    pub fn add(&mut self, kind: EventKind, listener: Listener) -> ListenerId {
        let id = ListenerId::next();
        self.by_kind.entry(kind).or_default().push((id, listener));
        id
    }

    pub fn remove(&mut self, id: ListenerId) -> bool {
        let mut removed = false;
        for list in self.by_kind.values_mut() {
            let before = list.len();
            list.retain(|(lid, _)| *lid != id);
            removed |= list.len() != before;
        }
        removed
    }

    pub fn has(&self, kind: EventKind) -> bool {
        self.by_kind.get(&kind).is_some_and(|l| !l.is_empty())
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.by_kind.get(&kind).map_or(0, Vec::len)
    }

    /// Snapshot of the listeners for `kind`, in registration order.
    pub fn snapshot(&self, kind: EventKind) -> Vec<Listener> {
        self.by_kind
            .get(&kind)
            .map(|list| list.iter().map(|(_, l)| Arc::clone(l)).collect())
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (kind, list) in &self.by_kind {
            map.entry(kind, &list.len());
        }
        map.finish()
    }
}
