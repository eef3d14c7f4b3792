//! Arena of components for one session.
//!
//! The tree owns every component of a session together with the state
//! synchronization bookkeeping: the dirty set, the record of what the client
//! already has, and the queue of outgoing client calls. Everything that
//! mutates a component goes through `&mut ComponentTree`, so a flush always
//! sees a consistent tree.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use tracing::{debug, trace, warn};

use super::button;
use super::events::{ComponentEvent, EventKind, ListenerId};
use super::node::ComponentNode;
use super::props::ComponentProps;
use super::{ComponentId, ComponentKind, ComponentResult};
use crate::error::ComponentError;
use crate::input::{ActionId, ActionManager, KeyCombo};
use crate::models::Axis;
use crate::rpc::{ClientCallQueue, RpcCall, RpcHandler, RpcValue, StateChange};
use crate::session::SessionConfig;
use crate::state::{
    compute_diff, ButtonSharedState, ConnectorTracker, ContainerSizes, DirtyTracker,
    PermissiveSizes, SharedState, SizePolicy, UiSharedState,
};

/// Locale used when neither a component nor the session configures one.
pub const DEFAULT_LOCALE: &str = "en-US";

pub struct ComponentTree {
    pub(super) nodes: BTreeMap<ComponentId, ComponentNode>,
    next_id: u32,
    next_action: u64,
    pub(super) dirty: DirtyTracker,
    pub(super) connectors: ConnectorTracker,
    outbox: ClientCallQueue,
    /// Buttons disabled by disable-on-click whose click is still in flight.
    pub(super) armed_clicks: HashSet<ComponentId>,
    size_policy: Arc<dyn SizePolicy>,
    default_locale: String,
}

impl Default for ComponentTree {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ComponentTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentTree")
            .field("nodes", &self.nodes)
            .field("dirty", &self.dirty)
            .field("outbox", &self.outbox)
            .field("default_locale", &self.default_locale)
            .finish()
    }
}

impl ComponentTree {
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            next_id: 0,
            next_action: 1,
            dirty: DirtyTracker::new(),
            connectors: ConnectorTracker::new(),
            outbox: ClientCallQueue::new(),
            armed_clicks: HashSet::new(),
            size_policy: Arc::new(PermissiveSizes),
            default_locale: DEFAULT_LOCALE.to_string(),
        }
    }

    /// Tree configured from session settings.
    pub fn from_config(config: &SessionConfig) -> Self {
        let tree = Self::new().with_default_locale(config.locale.clone());
        if config.strict_sizes {
            tree.with_size_policy(ContainerSizes)
        } else {
            tree
        }
    }

    pub fn with_size_policy(mut self, policy: impl SizePolicy + 'static) -> Self {
        self.size_policy = Arc::new(policy);
        self
    }

    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    // ========================================================================
    // Creation
    // ========================================================================

    fn insert(&mut self, kind: ComponentKind) -> ComponentId {
        let id = ComponentId::new(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, ComponentNode::new(kind));
        trace!(component = %id, %kind, "Created component");
        id
    }

    /// Create a UI root. A UI is attached from the start.
    pub fn create_ui(&mut self) -> ComponentId {
        let id = self.insert(ComponentKind::Ui);
        self.attach(id);
        id
    }

    pub fn create_window(&mut self) -> ComponentId {
        self.insert(ComponentKind::Window)
    }

    pub fn create_container(&mut self) -> ComponentId {
        self.insert(ComponentKind::Container)
    }

    /// Create a button with its click and focus/blur RPC interfaces registered.
    pub fn create_button(&mut self, caption: &str) -> ComponentId {
        let id = self.insert(ComponentKind::Button);
        if let Some(node) = self.nodes.get_mut(&id) {
            node.props.caption = Some(caption.to_string());
            for handler in [button::button_rpc(), button::focus_blur_rpc()] {
                node.handlers
                    .insert(handler.interface().to_string(), Arc::new(handler));
            }
        }
        id
    }

    /// Create a leaf component; give it behaviour with [`register_rpc`](Self::register_rpc).
    pub fn create_widget(&mut self) -> ComponentId {
        self.insert(ComponentKind::Widget)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub(super) fn node(&self, id: ComponentId) -> ComponentResult<&ComponentNode> {
        self.nodes
            .get(&id)
            .ok_or(ComponentError::UnknownComponent(id))
    }

    pub(super) fn node_mut(&mut self, id: ComponentId) -> ComponentResult<&mut ComponentNode> {
        self.nodes
            .get_mut(&id)
            .ok_or(ComponentError::UnknownComponent(id))
    }

    pub fn contains(&self, id: ComponentId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn kind(&self, id: ComponentId) -> Option<ComponentKind> {
        self.nodes.get(&id).map(|n| n.kind)
    }

    pub fn parent(&self, id: ComponentId) -> Option<ComponentId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: ComponentId) -> &[ComponentId] {
        self.nodes
            .get(&id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn props(&self, id: ComponentId) -> Option<&ComponentProps> {
        self.nodes.get(&id).map(|n| &n.props)
    }

    /// Nearest strict ancestor of the given kind.
    pub fn find_ancestor(&self, id: ComponentId, kind: ComponentKind) -> Option<ComponentId> {
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            if self.kind(ancestor) == Some(kind) {
                return Some(ancestor);
            }
            current = self.parent(ancestor);
        }
        None
    }

    /// The UI this component is attached to, if any.
    pub fn ui(&self, id: ComponentId) -> Option<ComponentId> {
        let mut current = id;
        loop {
            let node = self.nodes.get(&current)?;
            match node.parent {
                Some(parent) => current = parent,
                None => return (node.kind == ComponentKind::Ui).then_some(current),
            }
        }
    }

    pub fn is_attached(&self, id: ComponentId) -> bool {
        self.ui(id).is_some()
    }

    /// Attached, and neither the component nor any ancestor is hidden.
    pub fn is_rendered(&self, id: ComponentId) -> bool {
        let mut current = id;
        loop {
            let Some(node) = self.nodes.get(&current) else {
                return false;
            };
            if !node.props.visible {
                return false;
            }
            match node.parent {
                Some(parent) => current = parent,
                None => return node.kind == ComponentKind::Ui,
            }
        }
    }

    /// `id` and its descendants in pre-order.
    pub fn preorder(&self, id: ComponentId) -> Vec<ComponentId> {
        self.walk(id, false)
    }

    fn walk(&self, id: ComponentId, visible_only: bool) -> Vec<ComponentId> {
        let mut order = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(node) = self.nodes.get(&current) else {
                continue;
            };
            if visible_only && !node.props.visible {
                continue;
            }
            order.push(current);
            stack.extend(node.children.iter().rev().copied());
        }
        order
    }

    /// Own locale, else the nearest ancestor's, else the session default.
    pub fn locale(&self, id: ComponentId) -> &str {
        let mut current = Some(id);
        while let Some(cid) = current {
            let Some(node) = self.nodes.get(&cid) else {
                break;
            };
            if let Some(locale) = node.props.locale.as_deref() {
                return locale;
            }
            current = node.parent;
        }
        &self.default_locale
    }

    /// Currently focused component of a UI.
    pub fn focused(&self, ui: ComponentId) -> Option<ComponentId> {
        self.nodes.get(&ui).and_then(|n| n.focused)
    }

    // ========================================================================
    // Hierarchy
    // ========================================================================

    /// Connect `child` to `parent`, or disconnect it with `None`.
    ///
    /// Setting the current parent again is a no-op. A component that already
    /// has a parent must be disconnected before it can get another one.
    pub fn set_parent(
        &mut self,
        child: ComponentId,
        parent: Option<ComponentId>,
    ) -> ComponentResult<()> {
        let current = self.node(child)?.parent;
        if current == parent {
            return Ok(());
        }

        let Some(parent) = parent else {
            self.unlink(child);
            return Ok(());
        };
        if let Some(current) = current {
            return Err(ComponentError::DuplicateParent { child, current });
        }
        self.check_parent(child, parent)?;

        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        debug!(component = %child, parent = %parent, "Connected component");

        self.mark_dirty(parent);
        if self.is_attached(parent) {
            self.attach(child);
        }
        Ok(())
    }

    fn check_parent(&self, child: ComponentId, parent: ComponentId) -> ComponentResult<()> {
        let child_kind = self.node(child)?.kind;
        let parent_kind = self.node(parent)?.kind;

        if child_kind == ComponentKind::Ui {
            return Err(ComponentError::InvalidHierarchy {
                message: format!("UI {} cannot have a parent", child),
            });
        }
        if !parent_kind.is_container() {
            return Err(ComponentError::NotAContainer {
                parent,
                kind: parent_kind,
            });
        }
        if child_kind == ComponentKind::Window && parent_kind != ComponentKind::Ui {
            return Err(ComponentError::InvalidHierarchy {
                message: format!("window {} can only be added to a UI", child),
            });
        }

        let mut current = Some(parent);
        while let Some(ancestor) = current {
            if ancestor == child {
                return Err(ComponentError::InvalidHierarchy {
                    message: format!("{} cannot contain its ancestor {}", parent, child),
                });
            }
            current = self.parent(ancestor);
        }
        Ok(())
    }

    fn unlink(&mut self, child: ComponentId) {
        let Some(parent) = self.parent(child) else {
            return;
        };
        if self.is_attached(child) {
            self.detach(child);
        }
        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = None;
        }
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.retain(|c| *c != child);
        }
        debug!(component = %child, parent = %parent, "Disconnected component");
        self.mark_dirty(parent);
    }

    /// Append `child` to a container, moving it out of its current container.
    pub fn add_child(&mut self, parent: ComponentId, child: ComponentId) -> ComponentResult<()> {
        if let Some(current) = self.node(child)?.parent {
            if current == parent {
                return Ok(());
            }
            self.check_parent(child, parent)?;
            self.unlink(child);
        }
        self.set_parent(child, Some(parent))
    }

    /// Returns false if `child` is not a child of `parent`.
    pub fn remove_child(&mut self, parent: ComponentId, child: ComponentId) -> ComponentResult<bool> {
        self.node(parent)?;
        if self.node(child)?.parent != Some(parent) {
            return Ok(false);
        }
        self.set_parent(child, None)?;
        Ok(true)
    }

    pub fn add_window(&mut self, ui: ComponentId, window: ComponentId) -> ComponentResult<()> {
        self.expect_kind(ui, ComponentKind::Ui)?;
        self.expect_kind(window, ComponentKind::Window)?;
        self.add_child(ui, window)
    }

    pub(super) fn expect_kind(&self, id: ComponentId, expected: ComponentKind) -> ComponentResult<()> {
        let actual = self.node(id)?.kind;
        if actual != expected {
            return Err(ComponentError::WrongKind {
                id,
                expected,
                actual,
            });
        }
        Ok(())
    }

    /// Disconnect a component and drop it and its descendants from the tree.
    pub fn destroy(&mut self, id: ComponentId) -> ComponentResult<()> {
        self.node(id)?;
        self.unlink(id);
        if self.is_attached(id) {
            // A UI root: still attached after unlink.
            self.detach(id);
        }
        for cid in self.preorder(id) {
            self.nodes.remove(&cid);
            self.dirty.forget(cid);
            self.connectors.forget(cid);
            self.armed_clicks.remove(&cid);
        }
        debug!(component = %id, "Destroyed component");
        Ok(())
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Runs once a subtree becomes reachable from a UI.
    fn attach(&mut self, id: ComponentId) {
        for cid in self.preorder(id) {
            let scope = self.action_scope(cid);
            let Some(node) = self.nodes.get_mut(&cid) else {
                continue;
            };
            if let Some(actions) = node.actions.as_mut() {
                actions.set_viewer(scope);
            }
            if std::mem::take(&mut node.delayed_focus) {
                self.apply_focus(cid);
            }
            self.fire_event(&ComponentEvent::new(cid, EventKind::Attach));
        }
        debug!(component = %id, "Attached subtree");
        self.mark_dirty_recursive(id);
    }

    /// Runs while a subtree is still reachable from its UI, right before it
    /// is disconnected.
    fn detach(&mut self, id: ComponentId) {
        let ui = self.ui(id);
        for cid in self.preorder(id) {
            self.fire_event(&ComponentEvent::new(cid, EventKind::Detach));
            if let Some(actions) = self.nodes.get_mut(&cid).and_then(|n| n.actions.as_mut()) {
                actions.set_viewer(None);
            }
            self.dirty.forget(cid);
            self.connectors.forget(cid);
            self.armed_clicks.remove(&cid);

            if let Some(ui) = ui.filter(|ui| *ui != cid) {
                if self.focused(ui) == Some(cid) {
                    if let Some(node) = self.nodes.get_mut(&ui) {
                        node.focused = None;
                    }
                    self.mark_dirty(ui);
                }
            }
        }
        debug!(component = %id, "Detached subtree");
    }

    /// Move focus to `id`, or remember the request until it is attached.
    pub fn focus(&mut self, id: ComponentId) -> ComponentResult<()> {
        if self.is_attached(id) {
            self.apply_focus(id);
        } else {
            self.node_mut(id)?.delayed_focus = true;
        }
        Ok(())
    }

    fn apply_focus(&mut self, id: ComponentId) {
        let Some(ui) = self.ui(id) else {
            return;
        };
        if let Some(node) = self.nodes.get_mut(&ui) {
            if node.focused != Some(id) {
                node.focused = Some(id);
                self.mark_dirty(ui);
            }
        }
    }

    // ========================================================================
    // Dirty tracking and flush
    // ========================================================================

    /// Queue a component for the next flush. Detached components are ignored.
    pub fn mark_dirty(&mut self, id: ComponentId) -> bool {
        if !self.is_attached(id) {
            trace!(component = %id, "Not marking detached component dirty");
            return false;
        }
        self.dirty.mark(id);
        true
    }

    pub fn mark_dirty_recursive(&mut self, id: ComponentId) {
        for cid in self.preorder(id) {
            self.mark_dirty(cid);
        }
    }

    /// Mark the descendants of `id` whose size on `axis` is relative. Their
    /// resolved size depends on the ancestors' sizes along that axis.
    pub(crate) fn mark_relative_descendants(&mut self, id: ComponentId, axis: Axis) {
        let relative: Vec<ComponentId> = self
            .preorder(id)
            .into_iter()
            .skip(1)
            .filter(|cid| {
                self.props(*cid).is_some_and(|p| match axis {
                    Axis::Width => p.width.is_relative(),
                    Axis::Height => p.height.is_relative(),
                })
            })
            .collect();
        for cid in relative {
            self.mark_dirty(cid);
        }
    }

    pub fn is_dirty(&self, id: ComponentId) -> bool {
        self.dirty.is_dirty(id)
    }

    pub fn dirty_count(&self) -> usize {
        self.dirty.len()
    }

    pub fn connector_tracker(&self) -> &ConnectorTracker {
        &self.connectors
    }

    pub fn connector_tracker_mut(&mut self) -> &mut ConnectorTracker {
        &mut self.connectors
    }

    /// Derive the shared state of a component from its current properties.
    ///
    /// `initial` is true when the client has never seen this component.
    pub fn before_response_flush(&self, id: ComponentId, initial: bool) -> Option<SharedState> {
        let node = self.nodes.get(&id)?;
        let props = &node.props;
        trace!(component = %id, initial, "Deriving shared state");

        let children = node.kind.is_container().then(|| {
            node.children
                .iter()
                .copied()
                .filter(|c| self.nodes.get(c).is_some_and(|n| n.props.visible))
                .collect()
        });
        let ui = (node.kind == ComponentKind::Ui).then(|| UiSharedState {
            focused: node.focused,
        });
        let button = props.button.as_ref().map(|b| ButtonSharedState {
            disable_on_click: b.disable_on_click,
            tab_index: b.tab_index,
            click_shortcut: b.click_shortcut.map(|c| c.shorthand()),
            html_content_allowed: b.html_content_allowed,
            icon_alt_text: b.icon_alt_text.clone(),
        });

        Some(SharedState {
            id: props.debug_id.clone(),
            caption: props.caption.clone(),
            description: props.description.clone(),
            styles: props.styles.joined(),
            primary_style_name: props.primary_style_name.clone(),
            enabled: props.enabled,
            read_only: props.read_only,
            immediate: props.immediate.unwrap_or(false),
            width: self.css_size(id, Axis::Width),
            height: self.css_size(id, Axis::Height),
            error_message: props.component_error.as_ref().map(|e| e.formatted_html()),
            children,
            ui,
            button,
        })
    }

    fn css_size(&self, id: ComponentId, axis: Axis) -> String {
        let Some(props) = self.props(id) else {
            return String::new();
        };
        let size = match axis {
            Axis::Width => props.width,
            Axis::Height => props.height,
        };
        if size.is_relative() && !self.size_policy.can_ancestor_define(axis, self, id) {
            return String::new();
        }
        size.to_css().unwrap_or_default()
    }

    /// Collect the changes of every pending, rendered component in pre-order
    /// and record them as sent.
    pub fn flush(&mut self) -> Vec<StateChange> {
        let pending = self.dirty.take();
        self.armed_clicks.clear();
        if pending.is_empty() {
            return Vec::new();
        }

        let roots: Vec<_> = self
            .nodes
            .iter()
            .filter(|(_, n)| n.kind == ComponentKind::Ui)
            .map(|(id, _)| *id)
            .collect();

        let mut changes = Vec::new();
        let mut seen = 0;
        for root in roots {
            for id in self.walk(root, true) {
                if !pending.contains(&id) {
                    continue;
                }
                seen += 1;
                let initial = !self.connectors.has_sent(id);
                let Some(state) = self.before_response_flush(id, initial) else {
                    continue;
                };
                let fields = state.to_fields();
                let diff = compute_diff(self.connectors.diff_state(id), &fields);
                self.connectors.record(id, fields);
                if !diff.is_empty() {
                    changes.push(StateChange {
                        component_id: id,
                        changed_fields: diff,
                    });
                }
            }
        }

        trace!(
            pending = pending.len(),
            skipped = pending.len() - seen,
            changed = changes.len(),
            "Flushed dirty components"
        );
        changes
    }

    // ========================================================================
    // Listeners
    // ========================================================================

    pub fn add_listener<F>(
        &mut self,
        id: ComponentId,
        kind: EventKind,
        listener: F,
    ) -> ComponentResult<ListenerId>
    where
        F: Fn(&mut ComponentTree, &ComponentEvent) + Send + Sync + 'static,
    {
        Ok(self.node_mut(id)?.listeners.add(kind, Arc::new(listener)))
    }

    pub fn remove_listener(&mut self, id: ComponentId, listener: ListenerId) -> bool {
        self.nodes
            .get_mut(&id)
            .is_some_and(|n| n.listeners.remove(listener))
    }

    pub fn has_listeners(&self, id: ComponentId, kind: EventKind) -> bool {
        self.nodes.get(&id).is_some_and(|n| n.listeners.has(kind))
    }

    /// Call the listeners registered on the event source, in order.
    pub fn fire_event(&mut self, event: &ComponentEvent) {
        let listeners = match self.nodes.get(&event.source) {
            Some(node) => node.listeners.snapshot(event.kind),
            None => return,
        };
        for listener in listeners {
            listener(self, event);
        }
    }

    // ========================================================================
    // RPC
    // ========================================================================

    /// Register a handler; replaces any handler for the same interface.
    pub fn register_rpc(
        &mut self,
        id: ComponentId,
        handler: impl RpcHandler + 'static,
    ) -> ComponentResult<()> {
        let node = self.node_mut(id)?;
        let interface = handler.interface().to_string();
        node.handlers.insert(interface, Arc::new(handler));
        Ok(())
    }

    pub fn handler(&self, id: ComponentId, interface: &str) -> Option<Arc<dyn RpcHandler>> {
        self.nodes
            .get(&id)
            .and_then(|n| n.handlers.get(interface))
            .map(Arc::clone)
    }

    /// Queue a call to the client-side counterpart of `id`.
    pub fn call_client(
        &mut self,
        id: ComponentId,
        interface: &str,
        method: &str,
        args: Vec<RpcValue>,
    ) -> ComponentResult<()> {
        self.node(id)?;
        self.outbox.push(RpcCall::new(id, interface, method, args));
        Ok(())
    }

    /// Queued client calls for components that are still attached.
    pub fn take_client_calls(&mut self) -> Vec<RpcCall> {
        let calls = self.outbox.drain();
        calls
            .into_iter()
            .filter(|call| {
                let live = self.is_attached(call.component_id);
                if !live {
                    warn!(
                        component = %call.component_id,
                        "Dropping {}.{} queued for a detached component",
                        call.interface_name,
                        call.method_name
                    );
                }
                live
            })
            .collect()
    }

    // ========================================================================
    // Shortcuts
    // ========================================================================

    /// Window or UI whose shortcuts this component's bindings belong to.
    pub fn action_scope(&self, id: ComponentId) -> Option<ComponentId> {
        self.find_ancestor(id, ComponentKind::Window)
            .or_else(|| self.ui(id))
    }

    pub fn add_shortcut<F>(
        &mut self,
        id: ComponentId,
        combo: KeyCombo,
        caption: Option<&str>,
        handler: F,
    ) -> ComponentResult<ActionId>
    where
        F: Fn(&mut ComponentTree, ComponentId) + Send + Sync + 'static,
    {
        let scope = self.action_scope(id);
        let action = ActionId::new(self.next_action);
        let node = self.nodes.get_mut(&id).ok_or(ComponentError::UnknownComponent(id))?;
        self.next_action += 1;
        let actions = node.actions.get_or_insert_with(ActionManager::new);
        actions.set_viewer(scope);
        actions.add(action, combo, caption.map(str::to_string), Arc::new(handler));
        debug!(component = %id, combo = %combo, "Registered shortcut");
        Ok(action)
    }

    pub fn remove_shortcut(&mut self, id: ComponentId, action: ActionId) -> ComponentResult<bool> {
        Ok(self
            .node_mut(id)?
            .actions
            .as_mut()
            .is_some_and(|a| a.remove(action)))
    }

    pub fn shortcuts(&self, id: ComponentId) -> Option<&ActionManager> {
        self.nodes.get(&id).and_then(|n| n.actions.as_ref())
    }

    /// Run the shortcut bound to `combo` in `scope`.
    ///
    /// Only rendered components take part. If several match, the most
    /// recently registered binding wins. Returns false when nothing matched.
    pub fn handle_shortcut(&mut self, scope: ComponentId, combo: KeyCombo) -> bool {
        let mut best = None;
        for (id, node) in &self.nodes {
            let Some(actions) = node.actions.as_ref() else {
                continue;
            };
            if actions.viewer() != Some(scope) {
                continue;
            }
            let Some(action) = actions.find(&combo) else {
                continue;
            };
            if !self.is_rendered(*id) {
                continue;
            }
            if best.as_ref().map_or(true, |(best_id, _, _)| action.id > *best_id) {
                best = Some((action.id, *id, action.handler()));
            }
        }

        match best {
            Some((_, owner, handler)) => {
                debug!(scope = %scope, component = %owner, combo = %combo, "Shortcut matched");
                handler(self, owner);
                true
            }
            None => {
                debug!(scope = %scope, combo = %combo, "No shortcut bound");
                false
            }
        }
    }
}
