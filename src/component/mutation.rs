//! Property setters built on a begin/commit mutation.
//!
//! Every setter edits a draft copy of the component's properties; `commit`
//! swaps the draft in and derives the dirty marks from what actually changed.

use super::events::{ComponentEvent, EventKind};
use super::props::ComponentProps;
use super::tree::ComponentTree;
use super::{ComponentId, ComponentResult};
use crate::models::{parse_size, Axis, ErrorMessage, Size};

/// Pending change to one component's properties. Dropping it discards the
/// draft.
pub struct StateMutation<'a> {
    tree: &'a mut ComponentTree,
    id: ComponentId,
    draft: ComponentProps,
}

impl<'a> StateMutation<'a> {
    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn draft(&mut self) -> &mut ComponentProps {
        &mut self.draft
    }

    /// Apply the draft. Returns false when nothing changed.
    ///
    /// A changed component is marked dirty. Showing a hidden component marks
    /// its whole subtree, and any visibility change also marks the parent
    /// since the parent's child list changes. A size change marks the
    /// descendants sized relative to it. A changed component error fires
    /// [`EventKind::ComponentError`].
    pub fn commit(self) -> bool {
        let StateMutation { tree, id, draft } = self;
        let Some(node) = tree.nodes.get_mut(&id) else {
            return false;
        };
        if node.props == draft {
            return false;
        }

        let previous = std::mem::replace(&mut node.props, draft);
        let parent = node.parent;
        let shown = !previous.visible && node.props.visible;
        let visibility_changed = previous.visible != node.props.visible;
        let error_changed = previous.component_error != node.props.component_error;
        let width_changed = previous.width != node.props.width;
        let height_changed = previous.height != node.props.height;

        if shown {
            tree.mark_dirty_recursive(id);
        } else {
            tree.mark_dirty(id);
        }
        if visibility_changed {
            if let Some(parent) = parent {
                tree.mark_dirty(parent);
            }
        }
        if width_changed {
            tree.mark_relative_descendants(id, Axis::Width);
        }
        if height_changed {
            tree.mark_relative_descendants(id, Axis::Height);
        }
        if error_changed {
            tree.fire_event(&ComponentEvent::new(id, EventKind::ComponentError));
        }
        true
    }
}

impl ComponentTree {
    /// Start a mutation of `id`'s properties.
    pub fn begin(&mut self, id: ComponentId) -> ComponentResult<StateMutation<'_>> {
        let draft = self.node(id)?.props.clone();
        Ok(StateMutation {
            tree: self,
            id,
            draft,
        })
    }

    pub(crate) fn mutate<F>(&mut self, id: ComponentId, edit: F) -> ComponentResult<bool>
    where
        F: FnOnce(&mut ComponentProps),
    {
        let mut mutation = self.begin(id)?;
        edit(mutation.draft());
        Ok(mutation.commit())
    }

    pub fn set_caption(&mut self, id: ComponentId, caption: Option<&str>) -> ComponentResult<()> {
        self.mutate(id, |p| p.caption = caption.map(str::to_string))?;
        Ok(())
    }

    pub fn set_description(
        &mut self,
        id: ComponentId,
        description: Option<&str>,
    ) -> ComponentResult<()> {
        self.mutate(id, |p| p.description = description.map(str::to_string))?;
        Ok(())
    }

    /// Replace all style names with the whitespace separated `styles`.
    pub fn set_style_name(&mut self, id: ComponentId, styles: &str) -> ComponentResult<()> {
        self.mutate(id, |p| p.styles.set(styles))?;
        Ok(())
    }

    pub fn add_style_name(&mut self, id: ComponentId, styles: &str) -> ComponentResult<()> {
        self.mutate(id, |p| {
            p.styles.add(styles);
        })?;
        Ok(())
    }

    pub fn remove_style_name(&mut self, id: ComponentId, styles: &str) -> ComponentResult<()> {
        self.mutate(id, |p| {
            p.styles.remove(styles);
        })?;
        Ok(())
    }

    pub fn set_primary_style_name(
        &mut self,
        id: ComponentId,
        style: Option<&str>,
    ) -> ComponentResult<()> {
        self.mutate(id, |p| p.primary_style_name = style.map(str::to_string))?;
        Ok(())
    }

    pub fn set_visible(&mut self, id: ComponentId, visible: bool) -> ComponentResult<()> {
        self.mutate(id, |p| p.visible = visible)?;
        Ok(())
    }

    pub fn set_enabled(&mut self, id: ComponentId, enabled: bool) -> ComponentResult<()> {
        self.mutate(id, |p| p.enabled = enabled)?;
        Ok(())
    }

    pub fn set_read_only(&mut self, id: ComponentId, read_only: bool) -> ComponentResult<()> {
        self.mutate(id, |p| p.read_only = read_only)?;
        Ok(())
    }

    pub fn set_immediate(&mut self, id: ComponentId, immediate: bool) -> ComponentResult<()> {
        self.mutate(id, |p| p.immediate = Some(immediate))?;
        Ok(())
    }

    pub fn set_width(&mut self, id: ComponentId, width: Size) -> ComponentResult<()> {
        self.mutate(id, |p| p.width = width)?;
        Ok(())
    }

    pub fn set_height(&mut self, id: ComponentId, height: Size) -> ComponentResult<()> {
        self.mutate(id, |p| p.height = height)?;
        Ok(())
    }

    /// Set the width from CSS text such as `"100%"` or `"12em"`.
    ///
    /// A malformed string leaves the component untouched.
    pub fn set_width_str(&mut self, id: ComponentId, width: Option<&str>) -> ComponentResult<()> {
        let size = parse_size(width)?;
        self.set_width(id, size)
    }

    pub fn set_height_str(&mut self, id: ComponentId, height: Option<&str>) -> ComponentResult<()> {
        let size = parse_size(height)?;
        self.set_height(id, size)
    }

    pub fn set_size_full(&mut self, id: ComponentId) -> ComponentResult<()> {
        self.mutate(id, |p| {
            p.width = Size::FULL;
            p.height = Size::FULL;
        })?;
        Ok(())
    }

    pub fn set_size_undefined(&mut self, id: ComponentId) -> ComponentResult<()> {
        self.mutate(id, |p| {
            p.width = Size::UNDEFINED;
            p.height = Size::UNDEFINED;
        })?;
        Ok(())
    }

    pub fn set_component_error(
        &mut self,
        id: ComponentId,
        error: Option<ErrorMessage>,
    ) -> ComponentResult<()> {
        self.mutate(id, |p| p.component_error = error)?;
        Ok(())
    }

    pub fn set_debug_id(&mut self, id: ComponentId, debug_id: Option<&str>) -> ComponentResult<()> {
        self.mutate(id, |p| p.debug_id = debug_id.map(str::to_string))?;
        Ok(())
    }

    pub fn set_locale(&mut self, id: ComponentId, locale: Option<&str>) -> ComponentResult<()> {
        self.mutate(id, |p| p.locale = locale.map(str::to_string))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ComponentError;
    use crate::models::Unit;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn attached_button() -> (ComponentTree, ComponentId) {
        let mut tree = ComponentTree::new();
        let ui = tree.create_ui();
        let button = tree.create_button("A");
        tree.add_child(ui, button).unwrap();
        tree.flush();
        (tree, button)
    }

    #[test]
    fn test_unchanged_commit_does_not_mark() {
        let (mut tree, button) = attached_button();
        tree.set_caption(button, Some("A")).unwrap();
        assert!(!tree.is_dirty(button));

        let mut mutation = tree.begin(button).unwrap();
        mutation.draft().caption = Some("B".to_string());
        drop(mutation);
        assert_eq!(tree.props(button).unwrap().caption.as_deref(), Some("A"));
        assert!(!tree.is_dirty(button));
    }

    #[test]
    fn test_commit_applies_draft() {
        let (mut tree, button) = attached_button();
        let mut mutation = tree.begin(button).unwrap();
        mutation.draft().caption = Some("B".to_string());
        mutation.draft().enabled = false;
        assert!(mutation.commit());

        let props = tree.props(button).unwrap();
        assert_eq!(props.caption.as_deref(), Some("B"));
        assert!(!props.enabled);
        assert!(tree.is_dirty(button));
    }

    #[test]
    fn test_malformed_size_leaves_state() {
        let (mut tree, button) = attached_button();
        tree.set_width_str(button, Some("12em")).unwrap();
        let err = tree.set_width_str(button, Some("12 parsecs")).unwrap_err();
        assert!(matches!(err, ComponentError::MalformedSize { .. }));
        assert_eq!(tree.props(button).unwrap().width, Size::new(12.0, Unit::Em));
    }

    #[test]
    fn test_component_error_fires_event_on_change_only() {
        let (mut tree, button) = attached_button();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        tree.add_listener(button, EventKind::ComponentError, move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        tree.set_component_error(button, Some(ErrorMessage::new("bad")))
            .unwrap();
        tree.set_component_error(button, Some(ErrorMessage::new("bad")))
            .unwrap();
        tree.set_component_error(button, None).unwrap();
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unknown_component() {
        let mut tree = ComponentTree::new();
        let missing = ComponentId::new(99);
        assert_eq!(
            tree.set_caption(missing, Some("x")),
            Err(ComponentError::UnknownComponent(missing))
        );
    }
}
