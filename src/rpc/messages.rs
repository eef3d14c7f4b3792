//! Request and response frames exchanged with the client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::handler::RpcValue;
use crate::component::ComponentId;
use crate::error::{PeerError, RpcError};
use crate::input::KeyCombo;
use crate::state::StateFields;

/// One RPC invocation. Used in both directions.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcCall {
    pub component_id: ComponentId,
    pub interface_name: String,
    pub method_name: String,
    #[serde(default)]
    pub args: Vec<RpcValue>,
}

impl RpcCall {
    pub fn new(
        component_id: ComponentId,
        interface_name: impl Into<String>,
        method_name: impl Into<String>,
        args: Vec<RpcValue>,
    ) -> Self {
        Self {
            component_id,
            interface_name: interface_name.into(),
            method_name: method_name.into(),
            args,
        }
    }
}

/// A keystroke the client forwards to a shortcut scope.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutInvocation {
    /// Window or UI whose shortcuts should handle the keystroke.
    pub scope_id: ComponentId,
    /// Shorthand form, e.g. `"ctrl+s"`.
    pub combo: KeyCombo,
}

/// Messages inside a request frame
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    Rpc(RpcCall),
    Shortcut(ShortcutInvocation),
}

/// Client → server frame
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestFrame {
    pub sync_id: u64,
    #[serde(default)]
    pub messages: Vec<ClientMessage>,
}

impl RequestFrame {
    pub fn decode(text: &str) -> Result<Self, RpcError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Changed shared state fields of one component.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateChange {
    pub component_id: ComponentId,
    pub changed_fields: StateFields,
}

/// A failure reported back to the client.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorFrame {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_id: Option<ComponentId>,
}

impl From<&RpcError> for ErrorFrame {
    fn from(err: &RpcError) -> Self {
        Self {
            code: err.error_code().to_string(),
            message: err.to_string(),
            component_id: err.component(),
        }
    }
}

impl From<&PeerError> for ErrorFrame {
    fn from(err: &PeerError) -> Self {
        Self {
            code: err.error_code().to_string(),
            message: err.inner().to_string(),
            component_id: err.component(),
        }
    }
}

/// Server → client frame
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseFrame {
    pub sync_id: u64,
    pub changes: Vec<StateChange>,
    pub rpc: Vec<RpcCall>,
    pub errors: Vec<ErrorFrame>,
    pub timestamp: DateTime<Utc>,
}

impl ResponseFrame {
    pub fn new(sync_id: u64) -> Self {
        Self {
            sync_id,
            changes: Vec::new(),
            rpc: Vec::new(),
            errors: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.rpc.is_empty() && self.errors.is_empty()
    }

    pub fn change_for(&self, id: ComponentId) -> Option<&StateFields> {
        self.changes
            .iter()
            .find(|c| c.component_id == id)
            .map(|c| &c.changed_fields)
    }
}
