//! Common test utilities for integration tests.
//!
//! ```ignore
//! mod common;
//! let (mut tree, ui, panel) = common::ui_with_panel();
//! ```

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use peerui::component::{ComponentId, ComponentTree};
use peerui::rpc::StateChange;
use peerui::state::StateFields;

/// A UI holding one container, already flushed.
pub fn ui_with_panel() -> (ComponentTree, ComponentId, ComponentId) {
    let mut tree = ComponentTree::new();
    let ui = tree.create_ui();
    let panel = tree.create_container();
    tree.add_child(ui, panel).unwrap();
    tree.flush();
    (tree, ui, panel)
}

/// Adds a button to `parent` and flushes.
pub fn add_button(tree: &mut ComponentTree, parent: ComponentId, caption: &str) -> ComponentId {
    let button = tree.create_button(caption);
    tree.add_child(parent, button).unwrap();
    tree.flush();
    button
}

/// Counts click events on `button`.
pub fn click_counter(tree: &mut ComponentTree, button: ComponentId) -> Arc<AtomicUsize> {
    let clicks = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&clicks);
    tree.add_click_listener(button, move |_, _| {
        counter.fetch_add(1, Ordering::SeqCst);
    })
    .unwrap();
    clicks
}

pub fn count(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}

/// Ids of the changes, in order.
pub fn changed_ids(changes: &[StateChange]) -> Vec<ComponentId> {
    changes.iter().map(|c| c.component_id).collect()
}

pub fn change_of(changes: &[StateChange], id: ComponentId) -> Option<&StateFields> {
    changes
        .iter()
        .find(|c| c.component_id == id)
        .map(|c| &c.changed_fields)
}
