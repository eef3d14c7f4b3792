//! Tests for keyboard shortcut scoping.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::{add_button, click_counter, count, ui_with_panel};
use crossterm::event::KeyCode;
use peerui::component::{ActionTarget, ComponentTree};
use peerui::input::KeyCombo;

fn counting(tree: &mut ComponentTree, id: peerui::component::ComponentId, combo: KeyCombo) -> Arc<AtomicUsize> {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    tree.add_shortcut(id, combo, None, move |_, _| {
        counter.fetch_add(1, Ordering::SeqCst);
    })
    .unwrap();
    hits
}

#[test]
fn test_same_combo_in_two_windows_does_not_conflict() {
    let mut tree = ComponentTree::new();
    let ui = tree.create_ui();
    let first = tree.create_window();
    let second = tree.create_window();
    tree.add_window(ui, first).unwrap();
    tree.add_window(ui, second).unwrap();
    let a = add_button(&mut tree, first, "A");
    let b = add_button(&mut tree, second, "B");

    let combo = KeyCombo::ctrl(KeyCode::Char('s'));
    let hits_a = counting(&mut tree, a, combo);
    let hits_b = counting(&mut tree, b, combo);

    assert!(tree.handle_shortcut(first, combo));
    assert_eq!(count(&hits_a), 1);
    assert_eq!(count(&hits_b), 0);

    assert!(tree.handle_shortcut(second, combo));
    assert_eq!(count(&hits_a), 1);
    assert_eq!(count(&hits_b), 1);

    assert!(!tree.handle_shortcut(ui, combo), "window shortcuts are not UI shortcuts");
}

#[test]
fn test_removing_one_shortcut_keeps_the_other() {
    let (mut tree, ui, panel) = ui_with_panel();
    let widget = tree.create_widget();
    tree.add_child(panel, widget).unwrap();

    let save = KeyCombo::ctrl(KeyCode::Char('s'));
    let open = KeyCombo::ctrl(KeyCode::Char('o'));
    let save_hits = counting(&mut tree, widget, save);
    let open_hits = counting(&mut tree, widget, open);

    let save_action = tree.shortcuts(widget).unwrap().find(&save).unwrap().id;
    assert!(tree.remove_shortcut(widget, save_action).unwrap());

    assert!(!tree.handle_shortcut(ui, save));
    assert!(tree.handle_shortcut(ui, open));
    assert_eq!(count(&save_hits), 0);
    assert_eq!(count(&open_hits), 1);
}

#[test]
fn test_reregistering_a_combo_replaces_it() {
    let (mut tree, ui, panel) = ui_with_panel();
    let widget = tree.create_widget();
    tree.add_child(panel, widget).unwrap();

    let combo: KeyCombo = "ctrl+shift+s".parse().unwrap();
    let old_hits = counting(&mut tree, widget, combo);
    let new_hits = counting(&mut tree, widget, combo);

    assert!(tree.handle_shortcut(ui, combo));
    assert_eq!(count(&old_hits), 0);
    assert_eq!(count(&new_hits), 1);
}

#[test]
fn test_component_outside_window_uses_ui_scope() {
    let (mut tree, ui, panel) = ui_with_panel();
    let button = add_button(&mut tree, panel, "Go");
    let clicks = click_counter(&mut tree, button);

    let mut handle = tree.button_mut(button).unwrap();
    handle.set_click_shortcut(KeyCombo::plain(KeyCode::Enter)).unwrap();
    assert_eq!(tree.action_scope(button), Some(ui));

    assert!(tree.handle_shortcut(ui, KeyCombo::plain(KeyCode::Enter)));
    assert_eq!(count(&clicks), 1);
}

#[test]
fn test_hidden_or_disabled_targets() {
    let (mut tree, ui, panel) = ui_with_panel();
    let button = add_button(&mut tree, panel, "Go");
    let clicks = click_counter(&mut tree, button);
    let combo = KeyCombo::alt(KeyCode::Char('g'));
    tree.set_click_shortcut(button, combo).unwrap();

    tree.set_enabled(button, false).unwrap();
    assert!(tree.handle_shortcut(ui, combo), "the shortcut matched");
    assert_eq!(count(&clicks), 0, "but a disabled button ignores the click");

    tree.set_enabled(button, true).unwrap();
    tree.set_visible(panel, false).unwrap();
    assert!(!tree.handle_shortcut(ui, combo));
    assert_eq!(count(&clicks), 0);
}

#[test]
fn test_handle_delegates_shortcuts() {
    let (mut tree, ui, panel) = ui_with_panel();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let mut handle = tree.component_mut(panel).unwrap();
    let action = handle
        .add_shortcut(KeyCombo::plain(KeyCode::F(5)), Some("Refresh"), move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

    assert!(tree.handle_shortcut(ui, KeyCombo::plain(KeyCode::F(5))));
    assert_eq!(count(&hits), 1);

    let mut handle = tree.component_mut(panel).unwrap();
    assert!(handle.remove_shortcut(action).unwrap());
    assert!(!tree.handle_shortcut(ui, KeyCombo::plain(KeyCode::F(5))));
}
