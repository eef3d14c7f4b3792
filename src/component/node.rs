use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::events::Listeners;
use super::props::{ButtonProps, ComponentProps};
use super::{ComponentId, ComponentKind};
use crate::input::{ActionId, ActionManager};
use crate::rpc::RpcHandler;

/// Arena entry for one component.
pub(crate) struct ComponentNode {
    pub(crate) kind: ComponentKind,
    pub(crate) parent: Option<ComponentId>,
    /// Ordered children; always empty for non-container kinds.
    pub(crate) children: Vec<ComponentId>,
    pub(crate) props: ComponentProps,
    pub(crate) listeners: Listeners,
    /// Server RPC handlers keyed by interface name.
    pub(crate) handlers: HashMap<String, Arc<dyn RpcHandler>>,
    /// Created on the first shortcut registration.
    pub(crate) actions: Option<ActionManager>,
    /// `focus()` was called while detached.
    pub(crate) delayed_focus: bool,
    /// UI only: currently focused component.
    pub(crate) focused: Option<ComponentId>,
    /// Button only: shortcut installed by `set_click_shortcut`.
    pub(crate) click_shortcut_action: Option<ActionId>,
}

impl ComponentNode {
    pub(crate) fn new(kind: ComponentKind) -> Self {
        let props = ComponentProps {
            button: (kind == ComponentKind::Button).then(ButtonProps::default),
            ..ComponentProps::default()
        };
        Self {
            kind,
            parent: None,
            children: Vec::new(),
            props,
            listeners: Listeners::default(),
            handlers: HashMap::new(),
            actions: None,
            delayed_focus: false,
            focused: None,
            click_shortcut_action: None,
        }
    }
}

impl fmt::Debug for ComponentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut interfaces: Vec<_> = self.handlers.keys().collect();
        interfaces.sort();
        f.debug_struct("ComponentNode")
            .field("kind", &self.kind)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("props", &self.props)
            .field("listeners", &self.listeners)
            .field("handlers", &interfaces)
            .field("actions", &self.actions)
            .finish()
    }
}
