//! Keyboard shortcuts: key combinations and per-component action managers.
//!
//! Shortcut routing itself lives on the component tree
//! ([`ComponentTree::handle_shortcut`](crate::component::ComponentTree::handle_shortcut)),
//! because resolving a viewer scope needs the hierarchy.

mod action_manager;
mod keybindings;

pub use action_manager::{ActionHandler, ActionId, ActionManager, ShortcutAction};
pub use keybindings::KeyCombo;
