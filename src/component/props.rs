//! Primitive component state. The shared state sent to the client is derived
//! from these fields right before each response.

use crate::input::KeyCombo;
use crate::models::{ErrorMessage, Size, StyleList};

/// Presentation properties common to every component.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentProps {
    pub caption: Option<String>,
    pub description: Option<String>,
    pub styles: StyleList,
    pub primary_style_name: Option<String>,
    pub visible: bool,
    pub enabled: bool,
    pub read_only: bool,
    /// Explicit immediate mode; `None` means the default (not immediate).
    pub immediate: Option<bool>,
    pub width: Size,
    pub height: Size,
    pub component_error: Option<ErrorMessage>,
    pub debug_id: Option<String>,
    pub locale: Option<String>,
    /// Present only on buttons.
    pub button: Option<ButtonProps>,
}

impl Default for ComponentProps {
    fn default() -> Self {
        Self {
            caption: None,
            description: None,
            styles: StyleList::new(),
            primary_style_name: None,
            visible: true,
            enabled: true,
            read_only: false,
            immediate: None,
            width: Size::UNDEFINED,
            height: Size::UNDEFINED,
            component_error: None,
            debug_id: None,
            locale: None,
            button: None,
        }
    }
}

/// Button-only properties.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ButtonProps {
    pub disable_on_click: bool,
    pub tab_index: i32,
    pub click_shortcut: Option<KeyCombo>,
    pub html_content_allowed: bool,
    pub icon_alt_text: Option<String>,
}
