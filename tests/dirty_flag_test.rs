//! Tests for dirty tracking and the flush cycle.
//!
//! Verifies that:
//! 1. Only changed fields are transmitted, and only once
//! 2. Visibility changes mark the right components
//! 3. Hidden and detached components are never transmitted

mod common;

use common::{add_button, change_of, changed_ids, ui_with_panel};
use peerui::component::ComponentTree;
use serde_json::json;

#[test]
fn test_caption_change_is_sent_once() {
    let (mut tree, _ui, panel) = ui_with_panel();
    let button = add_button(&mut tree, panel, "A");

    tree.set_caption(button, Some("B")).unwrap();
    let changes = tree.flush();
    assert_eq!(changed_ids(&changes), vec![button]);
    let fields = change_of(&changes, button).unwrap();
    assert_eq!(fields.len(), 1, "only the caption should be sent: {fields:?}");
    assert_eq!(fields["caption"], "B");

    assert!(tree.flush().is_empty(), "second flush should be empty");
}

#[test]
fn test_initial_flush_sends_full_state_in_preorder() {
    let mut tree = ComponentTree::new();
    let ui = tree.create_ui();
    let left = tree.create_container();
    let right = tree.create_container();
    let button = tree.create_button("Go");
    tree.add_child(ui, left).unwrap();
    tree.add_child(ui, right).unwrap();
    tree.add_child(left, button).unwrap();

    let changes = tree.flush();
    assert_eq!(changed_ids(&changes), vec![ui, left, button, right]);

    let fields = change_of(&changes, button).unwrap();
    assert_eq!(fields["caption"], "Go");
    assert_eq!(fields["enabled"], true);
    assert_eq!(fields["width"], "");
    assert_eq!(fields["errorMessage"], json!(null));
    assert_eq!(change_of(&changes, ui).unwrap()["children"], json!([left.raw(), right.raw()]));
}

#[test]
fn test_marking_twice_collapses_to_one_transmission() {
    let (mut tree, _ui, panel) = ui_with_panel();
    let button = add_button(&mut tree, panel, "A");

    tree.set_caption(button, Some("B")).unwrap();
    tree.set_description(button, Some("tip")).unwrap();
    tree.mark_dirty(button);

    let changes = tree.flush();
    assert_eq!(changes.len(), 1);
    let fields = change_of(&changes, button).unwrap();
    assert_eq!(fields["caption"], "B");
    assert_eq!(fields["description"], "tip");
}

#[test]
fn test_mark_without_change_sends_nothing() {
    let (mut tree, _ui, panel) = ui_with_panel();
    let button = add_button(&mut tree, panel, "A");
    tree.mark_dirty(button);
    assert!(tree.is_dirty(button));
    assert!(tree.flush().is_empty());
}

#[test]
fn test_show_marks_every_descendant() {
    let (mut tree, ui, panel) = ui_with_panel();
    let inner = tree.create_container();
    let button = tree.create_button("Deep");
    tree.add_child(inner, button).unwrap();
    tree.add_child(panel, inner).unwrap();
    tree.flush();

    tree.set_visible(panel, false).unwrap();
    tree.flush();

    tree.set_visible(panel, true).unwrap();
    assert!(tree.is_dirty(panel));
    assert!(tree.is_dirty(inner));
    assert!(tree.is_dirty(button));
    assert!(tree.is_dirty(ui), "parent is marked on visibility change");
}

#[test]
fn test_hide_marks_only_self_and_parent() {
    let (mut tree, ui, panel) = ui_with_panel();
    let button = add_button(&mut tree, panel, "A");

    tree.set_visible(panel, false).unwrap();
    assert!(tree.is_dirty(panel));
    assert!(tree.is_dirty(ui));
    assert!(!tree.is_dirty(button));
    assert_eq!(tree.dirty_count(), 2);

    let changes = tree.flush();
    assert_eq!(changed_ids(&changes), vec![ui], "hidden component is not sent");
    assert_eq!(change_of(&changes, ui).unwrap()["children"], json!([]));
}

#[test]
fn test_changes_while_hidden_arrive_when_shown() {
    let (mut tree, _ui, panel) = ui_with_panel();
    let button = add_button(&mut tree, panel, "A");

    tree.set_visible(panel, false).unwrap();
    tree.flush();
    tree.set_caption(button, Some("B")).unwrap();
    let changes = tree.flush();
    assert!(!changed_ids(&changes).contains(&button));

    tree.set_visible(panel, true).unwrap();
    let changes = tree.flush();
    assert_eq!(change_of(&changes, button).unwrap()["caption"], "B");
}

#[test]
fn test_detached_component_never_flushes() {
    let (mut tree, _ui, panel) = ui_with_panel();
    let button = add_button(&mut tree, panel, "A");
    tree.remove_child(panel, button).unwrap();

    tree.set_caption(button, Some("B")).unwrap();
    assert!(!tree.is_dirty(button));
    let changes = tree.flush();
    assert!(!changed_ids(&changes).contains(&button));
}

#[test]
fn test_reattached_component_sends_full_state() {
    let (mut tree, _ui, panel) = ui_with_panel();
    let button = add_button(&mut tree, panel, "A");
    tree.remove_child(panel, button).unwrap();
    tree.flush();

    tree.add_child(panel, button).unwrap();
    let changes = tree.flush();
    let fields = change_of(&changes, button).unwrap();
    assert_eq!(fields["caption"], "A");
    assert!(fields.contains_key("styles"));
}

#[test]
fn test_style_names_keep_order_without_duplicates() {
    let (mut tree, _ui, panel) = ui_with_panel();
    let button = add_button(&mut tree, panel, "A");

    let ops: &[(bool, &str)] = &[
        (true, "big"),
        (true, "red big"),
        (false, "big"),
        (true, "  blue   red "),
        (true, "big"),
        (false, "missing"),
        (true, "red"),
    ];
    for (add, styles) in ops {
        if *add {
            tree.add_style_name(button, styles).unwrap();
        } else {
            tree.remove_style_name(button, styles).unwrap();
        }
        let joined = tree.props(button).unwrap().styles.joined();
        let tokens: Vec<_> = joined.split(' ').filter(|t| !t.is_empty()).collect();
        let mut unique = tokens.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), tokens.len(), "duplicates in {joined:?}");
    }
    assert_eq!(tree.props(button).unwrap().styles.joined(), "red blue big");

    let changes = tree.flush();
    assert_eq!(change_of(&changes, button).unwrap()["styles"], "red blue big");
}
