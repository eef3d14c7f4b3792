use std::fmt;

use serde::{Deserialize, Serialize};

/// Session-unique component identifier. The first UI created gets `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(u32);

impl ComponentId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a component is. Container kinds hold children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Top-level surface bound to a browser tab. Always attached.
    Ui,
    /// Sub-window; only a UI can hold one. Scopes keyboard shortcuts.
    Window,
    /// Plain container (layout/panel).
    Container,
    Button,
    /// Leaf component with custom RPC handlers.
    Widget,
}

impl ComponentKind {
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            ComponentKind::Ui | ComponentKind::Window | ComponentKind::Container
        )
    }

    /// Kinds that form an action scope for shortcuts.
    pub fn is_action_scope(&self) -> bool {
        matches!(self, ComponentKind::Ui | ComponentKind::Window)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Ui => "ui",
            ComponentKind::Window => "window",
            ComponentKind::Container => "container",
            ComponentKind::Button => "button",
            ComponentKind::Widget => "widget",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
