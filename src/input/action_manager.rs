//! Keyboard shortcut bindings owned by a single component.
//!
//! Each component that registers shortcuts gets an [`ActionManager`]. While
//! the component is attached, the manager's viewer is the nearest window
//! ancestor, or the UI when there is none; shortcuts are routed per viewer.
//! Detaching clears the viewer, re-attaching restores it, so bindings survive
//! a move between containers.

use std::sync::Arc;

use super::keybindings::KeyCombo;
use crate::component::{ComponentId, ComponentTree};

/// Callback run when a shortcut fires. Receives the owning component.
pub type ActionHandler = Arc<dyn Fn(&mut ComponentTree, ComponentId) + Send + Sync>;

/// Identity of a registered shortcut. The owning tree hands them out in
/// increasing order, so later registrations compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionId(u64);

impl ActionId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// A key combination bound to a handler.
#[derive(Clone)]
pub struct ShortcutAction {
    pub id: ActionId,
    pub combo: KeyCombo,
    pub caption: Option<String>,
    handler: ActionHandler,
}

impl ShortcutAction {
    pub fn handler(&self) -> ActionHandler {
        Arc::clone(&self.handler)
    }
}

impl std::fmt::Debug for ShortcutAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShortcutAction")
            .field("id", &self.id)
            .field("combo", &self.combo)
            .field("caption", &self.caption)
            .finish()
    }
}

/// Shortcut bindings of one component plus its current viewer scope.
#[derive(Debug, Clone, Default)]
pub struct ActionManager {
    actions: Vec<ShortcutAction>,
    viewer: Option<ComponentId>,
}

impl ActionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `combo` under `id`. An existing binding for the same combination
    /// is replaced.
    pub fn add(
        &mut self,
        id: ActionId,
        combo: KeyCombo,
        caption: Option<String>,
        handler: ActionHandler,
    ) -> ActionId {
        self.actions.retain(|a| a.combo != combo);
        self.actions.push(ShortcutAction {
            id,
            combo,
            caption,
            handler,
        });
        id
    }

    pub fn remove(&mut self, id: ActionId) -> bool {
        let before = self.actions.len();
        self.actions.retain(|a| a.id != id);
        self.actions.len() != before
    }

    pub fn find(&self, combo: &KeyCombo) -> Option<&ShortcutAction> {
        self.actions.iter().find(|a| a.combo == *combo)
    }

    pub fn contains(&self, id: ActionId) -> bool {
        self.actions.iter().any(|a| a.id == id)
    }

    pub fn combos(&self) -> impl Iterator<Item = KeyCombo> + '_ {
        self.actions.iter().map(|a| a.combo)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn viewer(&self) -> Option<ComponentId> {
        self.viewer
    }

    pub fn set_viewer(&mut self, viewer: Option<ComponentId>) {
        self.viewer = viewer;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    fn noop() -> ActionHandler {
        Arc::new(|_, _| {})
    }

    #[test]
    fn test_same_combo_is_last_write_wins() {
        let mut manager = ActionManager::new();
        let combo = KeyCombo::ctrl(KeyCode::Char('s'));
        let first = manager.add(ActionId::new(1), combo, Some("first".to_string()), noop());
        let second = manager.add(ActionId::new(2), combo, Some("second".to_string()), noop());

        assert_eq!(manager.len(), 1);
        assert!(!manager.contains(first));
        assert_eq!(manager.find(&combo).unwrap().id, second);
        assert!(second > first);
    }

    #[test]
    fn test_removing_one_keeps_the_other() {
        let mut manager = ActionManager::new();
        let save = manager.add(ActionId::new(1), KeyCombo::ctrl(KeyCode::Char('s')), None, noop());
        manager.add(ActionId::new(2), KeyCombo::plain(KeyCode::Enter), None, noop());

        assert!(manager.remove(save));
        assert!(!manager.remove(save));
        assert!(manager.find(&KeyCombo::ctrl(KeyCode::Char('s'))).is_none());
        assert!(manager.find(&KeyCombo::plain(KeyCode::Enter)).is_some());
    }

    #[test]
    fn test_viewer_starts_unset() {
        let mut manager = ActionManager::new();
        assert_eq!(manager.viewer(), None);
        manager.set_viewer(Some(ComponentId::new(0)));
        assert_eq!(manager.viewer(), Some(ComponentId::new(0)));
    }
}
