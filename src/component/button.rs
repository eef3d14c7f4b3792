//! Push button behaviour.
//!
//! A button accepts clicks only while it is enabled and not read-only. Clicks
//! arrive from the client through [`BUTTON_RPC`], from a click shortcut, or
//! programmatically through [`ComponentTree::click`].

use serde_json::Value;
use tracing::{debug, warn};

use super::events::{ComponentEvent, EventKind, ListenerId};
use super::props::ButtonProps;
use super::tree::ComponentTree;
use super::{ComponentId, ComponentKind, ComponentResult};
use crate::error::{ComponentError, RpcError};
use crate::input::KeyCombo;
use crate::models::MouseEventDetails;
use crate::rpc::{ArgType, FnHandler, RpcValue};

/// Interface carrying `click(details)` and `disableOnClick()`.
pub const BUTTON_RPC: &str = "ButtonServerRpc";

/// Interface carrying `focus()` and `blur()`.
pub const FOCUS_BLUR_RPC: &str = "FocusAndBlurServerRpc";

fn handler_failed(id: ComponentId, method: &str, err: ComponentError) -> RpcError {
    RpcError::HandlerFailed {
        component: id,
        interface: BUTTON_RPC.to_string(),
        method: method.to_string(),
        message: err.to_string(),
    }
}

pub(super) fn button_rpc() -> FnHandler {
    FnHandler::new(BUTTON_RPC)
        .with_method("click", vec![ArgType::Object], |tree, id, args| {
            let details = match args.first() {
                Some(RpcValue::Object(value)) => Some(
                    serde_json::from_value::<MouseEventDetails>(value.clone()).map_err(|e| {
                        RpcError::ArgumentMismatch {
                            interface: BUTTON_RPC.to_string(),
                            method: "click".to_string(),
                            message: e.to_string(),
                        }
                    })?,
                ),
                _ => None,
            };
            tree.client_click(id, details)
                .map_err(|e| handler_failed(id, "click", e))?;
            Ok(())
        })
        .with_method("disableOnClick", vec![], |tree, id, _| {
            tree.disable_on_click(id)
                .map_err(|e| handler_failed(id, "disableOnClick", e))
        })
}

pub(super) fn focus_blur_rpc() -> FnHandler {
    FnHandler::new(FOCUS_BLUR_RPC)
        .with_method("focus", vec![], |tree, id, _| {
            tree.fire_event(&ComponentEvent::new(id, EventKind::Focus));
            Ok(())
        })
        .with_method("blur", vec![], |tree, id, _| {
            tree.fire_event(&ComponentEvent::new(id, EventKind::Blur));
            Ok(())
        })
}

impl ComponentTree {
    fn button_props(&self, id: ComponentId) -> ComponentResult<&ButtonProps> {
        self.expect_kind(id, ComponentKind::Button)?;
        self.node(id)?
            .props
            .button
            .as_ref()
            .ok_or(ComponentError::UnknownComponent(id))
    }

    fn mutate_button<F>(&mut self, id: ComponentId, edit: F) -> ComponentResult<bool>
    where
        F: FnOnce(&mut ButtonProps),
    {
        self.expect_kind(id, ComponentKind::Button)?;
        self.mutate(id, |p| edit(p.button.get_or_insert_with(ButtonProps::default)))
    }

    fn accepts_click(&self, id: ComponentId) -> ComponentResult<bool> {
        self.expect_kind(id, ComponentKind::Button)?;
        let props = &self.node(id)?.props;
        Ok(props.enabled && !props.read_only)
    }

    /// Click the button as if the user did. Returns false when the button is
    /// disabled or read-only, in which case no listener runs.
    pub fn click(&mut self, id: ComponentId) -> ComponentResult<bool> {
        self.click_with_details(id, None)
    }

    pub fn click_with_details(
        &mut self,
        id: ComponentId,
        details: Option<MouseEventDetails>,
    ) -> ComponentResult<bool> {
        if !self.accepts_click(id)? {
            debug!(component = %id, "Dropping click on disabled or read-only button");
            return Ok(false);
        }
        self.fire_event(&ComponentEvent::click(id, details));
        Ok(true)
    }

    /// Click coming from the client. A click that follows the button's own
    /// `disableOnClick()` in the same request is still delivered.
    fn client_click(
        &mut self,
        id: ComponentId,
        details: Option<MouseEventDetails>,
    ) -> ComponentResult<bool> {
        self.expect_kind(id, ComponentKind::Button)?;
        if self.armed_clicks.remove(&id) {
            self.fire_event(&ComponentEvent::click(id, details));
            return Ok(true);
        }
        self.click_with_details(id, details)
    }

    pub fn add_click_listener<F>(&mut self, id: ComponentId, listener: F) -> ComponentResult<ListenerId>
    where
        F: Fn(&mut ComponentTree, &ComponentEvent) + Send + Sync + 'static,
    {
        self.expect_kind(id, ComponentKind::Button)?;
        self.add_listener(id, EventKind::Click, listener)
    }

    pub fn set_disable_on_click(&mut self, id: ComponentId, enabled: bool) -> ComponentResult<()> {
        self.mutate_button(id, |b| b.disable_on_click = enabled)?;
        Ok(())
    }

    pub fn is_disable_on_click(&self, id: ComponentId) -> ComponentResult<bool> {
        Ok(self.button_props(id)?.disable_on_click)
    }

    /// Server side of the client's disable-on-click.
    ///
    /// The client disabled its copy already, so `enabled = false` is recorded
    /// as known. A listener that re-enables the button then shows up as a
    /// change in the same response.
    pub fn disable_on_click(&mut self, id: ComponentId) -> ComponentResult<()> {
        let accepting = self.accepts_click(id)?;
        self.set_enabled(id, false)?;
        self.connectors
            .acknowledge(id, "enabled", Value::Bool(false));
        if accepting {
            self.armed_clicks.insert(id);
        }
        debug!(component = %id, "Disabled button on click");
        Ok(())
    }

    pub fn set_tab_index(&mut self, id: ComponentId, tab_index: i32) -> ComponentResult<()> {
        self.mutate_button(id, |b| b.tab_index = tab_index)?;
        Ok(())
    }

    pub fn tab_index(&self, id: ComponentId) -> ComponentResult<i32> {
        Ok(self.button_props(id)?.tab_index)
    }

    /// Bind `combo` to a click of this button, replacing any previous
    /// click shortcut.
    pub fn set_click_shortcut(&mut self, id: ComponentId, combo: KeyCombo) -> ComponentResult<()> {
        self.remove_click_shortcut(id)?;
        let action = self.add_shortcut(id, combo, None, |tree, owner| {
            if let Err(err) = tree.click(owner) {
                warn!(component = %owner, code = err.error_code(), "Click shortcut failed: {}", err);
            }
        })?;
        self.node_mut(id)?.click_shortcut_action = Some(action);
        self.mutate_button(id, |b| b.click_shortcut = Some(combo))?;
        Ok(())
    }

    pub fn remove_click_shortcut(&mut self, id: ComponentId) -> ComponentResult<()> {
        self.expect_kind(id, ComponentKind::Button)?;
        if let Some(action) = self.node_mut(id)?.click_shortcut_action.take() {
            self.remove_shortcut(id, action)?;
        }
        self.mutate_button(id, |b| b.click_shortcut = None)?;
        Ok(())
    }

    pub fn click_shortcut(&self, id: ComponentId) -> ComponentResult<Option<KeyCombo>> {
        Ok(self.button_props(id)?.click_shortcut)
    }

    pub fn set_html_content_allowed(&mut self, id: ComponentId, allowed: bool) -> ComponentResult<()> {
        self.mutate_button(id, |b| b.html_content_allowed = allowed)?;
        Ok(())
    }

    pub fn set_icon_alt_text(&mut self, id: ComponentId, text: Option<&str>) -> ComponentResult<()> {
        self.mutate_button(id, |b| b.icon_alt_text = text.map(str::to_string))?;
        Ok(())
    }
}
