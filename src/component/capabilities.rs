//! Capability traits implemented by component handles.
//!
//! A handle borrows the tree mutably for one component, so code that only
//! needs "something sizeable" can be written against [`Sizeable`] instead of
//! a component id.

use super::events::{ComponentEvent, ListenerId};
use super::tree::ComponentTree;
use super::{ComponentId, ComponentKind, ComponentResult};
use crate::input::{ActionId, KeyCombo};
use crate::models::{MouseEventDetails, Size};

pub trait Styleable {
    fn set_style_name(&mut self, styles: &str) -> ComponentResult<()>;
    fn add_style_name(&mut self, styles: &str) -> ComponentResult<()>;
    fn remove_style_name(&mut self, styles: &str) -> ComponentResult<()>;
    fn set_primary_style_name(&mut self, style: Option<&str>) -> ComponentResult<()>;
    /// Space-joined style names.
    fn style_name(&self) -> String;
}

pub trait Sizeable {
    fn set_width(&mut self, width: Size) -> ComponentResult<()>;
    fn set_height(&mut self, height: Size) -> ComponentResult<()>;
    fn set_width_str(&mut self, width: Option<&str>) -> ComponentResult<()>;
    fn set_height_str(&mut self, height: Option<&str>) -> ComponentResult<()>;
    fn set_size_full(&mut self) -> ComponentResult<()>;
    fn set_size_undefined(&mut self) -> ComponentResult<()>;
    fn width(&self) -> Size;
    fn height(&self) -> Size;
}

pub trait FocusTarget {
    fn focus(&mut self) -> ComponentResult<()>;
    fn tab_index(&self) -> ComponentResult<i32>;
    fn set_tab_index(&mut self, tab_index: i32) -> ComponentResult<()>;
}

pub trait ActionTarget {
    fn add_shortcut<F>(&mut self, combo: KeyCombo, caption: Option<&str>, handler: F) -> ComponentResult<ActionId>
    where
        F: Fn(&mut ComponentTree, ComponentId) + Send + Sync + 'static;
    fn remove_shortcut(&mut self, action: ActionId) -> ComponentResult<bool>;
}

/// Mutable handle on any component.
pub struct ComponentMut<'a> {
    tree: &'a mut ComponentTree,
    id: ComponentId,
}

/// Mutable handle on a button.
pub struct ButtonMut<'a> {
    tree: &'a mut ComponentTree,
    id: ComponentId,
}

impl ComponentTree {
    pub fn component_mut(&mut self, id: ComponentId) -> ComponentResult<ComponentMut<'_>> {
        self.node(id)?;
        Ok(ComponentMut { tree: self, id })
    }

    pub fn button_mut(&mut self, id: ComponentId) -> ComponentResult<ButtonMut<'_>> {
        self.expect_kind(id, ComponentKind::Button)?;
        Ok(ButtonMut { tree: self, id })
    }
}

macro_rules! delegate_handle {
    ($handle:ident) => {
        impl<'a> $handle<'a> {
            pub fn id(&self) -> ComponentId {
                self.id
            }

            pub fn tree(&mut self) -> &mut ComponentTree {
                &mut *self.tree
            }

            pub fn set_caption(&mut self, caption: Option<&str>) -> ComponentResult<()> {
                self.tree.set_caption(self.id, caption)
            }

            pub fn set_description(&mut self, description: Option<&str>) -> ComponentResult<()> {
                self.tree.set_description(self.id, description)
            }

            pub fn set_visible(&mut self, visible: bool) -> ComponentResult<()> {
                self.tree.set_visible(self.id, visible)
            }

            pub fn set_enabled(&mut self, enabled: bool) -> ComponentResult<()> {
                self.tree.set_enabled(self.id, enabled)
            }
        }

        impl<'a> Styleable for $handle<'a> {
            fn set_style_name(&mut self, styles: &str) -> ComponentResult<()> {
                self.tree.set_style_name(self.id, styles)
            }

            fn add_style_name(&mut self, styles: &str) -> ComponentResult<()> {
                self.tree.add_style_name(self.id, styles)
            }

            fn remove_style_name(&mut self, styles: &str) -> ComponentResult<()> {
                self.tree.remove_style_name(self.id, styles)
            }

            fn set_primary_style_name(&mut self, style: Option<&str>) -> ComponentResult<()> {
                self.tree.set_primary_style_name(self.id, style)
            }

            fn style_name(&self) -> String {
                self.tree
                    .props(self.id)
                    .map(|p| p.styles.joined())
                    .unwrap_or_default()
            }
        }

        impl<'a> Sizeable for $handle<'a> {
            fn set_width(&mut self, width: Size) -> ComponentResult<()> {
                self.tree.set_width(self.id, width)
            }

            fn set_height(&mut self, height: Size) -> ComponentResult<()> {
                self.tree.set_height(self.id, height)
            }

            fn set_width_str(&mut self, width: Option<&str>) -> ComponentResult<()> {
                self.tree.set_width_str(self.id, width)
            }

            fn set_height_str(&mut self, height: Option<&str>) -> ComponentResult<()> {
                self.tree.set_height_str(self.id, height)
            }

            fn set_size_full(&mut self) -> ComponentResult<()> {
                self.tree.set_size_full(self.id)
            }

            fn set_size_undefined(&mut self) -> ComponentResult<()> {
                self.tree.set_size_undefined(self.id)
            }

            fn width(&self) -> Size {
                self.tree.props(self.id).map(|p| p.width).unwrap_or_default()
            }

            fn height(&self) -> Size {
                self.tree.props(self.id).map(|p| p.height).unwrap_or_default()
            }
        }

        impl<'a> ActionTarget for $handle<'a> {
            fn add_shortcut<F>(
                &mut self,
                combo: KeyCombo,
                caption: Option<&str>,
                handler: F,
            ) -> ComponentResult<ActionId>
            where
                F: Fn(&mut ComponentTree, ComponentId) + Send + Sync + 'static,
            {
                self.tree.add_shortcut(self.id, combo, caption, handler)
            }

            fn remove_shortcut(&mut self, action: ActionId) -> ComponentResult<bool> {
                self.tree.remove_shortcut(self.id, action)
            }
        }
    };
}

delegate_handle!(ComponentMut);
delegate_handle!(ButtonMut);

impl<'a> FocusTarget for ButtonMut<'a> {
    fn focus(&mut self) -> ComponentResult<()> {
        self.tree.focus(self.id)
    }

    fn tab_index(&self) -> ComponentResult<i32> {
        self.tree.tab_index(self.id)
    }

    fn set_tab_index(&mut self, tab_index: i32) -> ComponentResult<()> {
        self.tree.set_tab_index(self.id, tab_index)
    }
}

impl<'a> ButtonMut<'a> {
    pub fn click(&mut self) -> ComponentResult<bool> {
        self.tree.click(self.id)
    }

    pub fn click_with_details(&mut self, details: MouseEventDetails) -> ComponentResult<bool> {
        self.tree.click_with_details(self.id, Some(details))
    }

    pub fn add_click_listener<F>(&mut self, listener: F) -> ComponentResult<ListenerId>
    where
        F: Fn(&mut ComponentTree, &ComponentEvent) + Send + Sync + 'static,
    {
        self.tree.add_click_listener(self.id, listener)
    }

    pub fn set_disable_on_click(&mut self, enabled: bool) -> ComponentResult<()> {
        self.tree.set_disable_on_click(self.id, enabled)
    }

    pub fn set_click_shortcut(&mut self, combo: KeyCombo) -> ComponentResult<()> {
        self.tree.set_click_shortcut(self.id, combo)
    }

    pub fn remove_click_shortcut(&mut self) -> ComponentResult<()> {
        self.tree.remove_click_shortcut(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ComponentError;
    use crate::models::Unit;

    fn grow<S: Sizeable>(target: &mut S) -> ComponentResult<()> {
        target.set_width_str(Some("50%"))?;
        target.set_height_str(Some("2.5em"))
    }

    #[test]
    fn test_generic_over_capabilities() {
        let mut tree = ComponentTree::new();
        let ui = tree.create_ui();
        let panel = tree.create_container();
        let button = tree.create_button("Go");
        tree.add_child(ui, panel).unwrap();
        tree.add_child(panel, button).unwrap();

        grow(&mut tree.component_mut(panel).unwrap()).unwrap();
        let mut handle = tree.button_mut(button).unwrap();
        grow(&mut handle).unwrap();
        handle.add_style_name("primary wide").unwrap();
        handle.add_style_name("primary").unwrap();
        handle.set_tab_index(3).unwrap();

        assert_eq!(handle.width(), Size::percent(50.0));
        assert_eq!(handle.height(), Size::new(2.5, Unit::Em));
        assert_eq!(handle.style_name(), "primary wide");
        assert_eq!(handle.tab_index().unwrap(), 3);
    }

    #[test]
    fn test_button_handle_requires_button() {
        let mut tree = ComponentTree::new();
        let ui = tree.create_ui();
        assert!(matches!(
            tree.button_mut(ui),
            Err(ComponentError::WrongKind { .. })
        ));
    }
}
