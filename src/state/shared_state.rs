//! Serializable snapshot of a component's presentation properties.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::component::ComponentId;

/// Property name → value mapping sent to the client.
pub type StateFields = Map<String, Value>;

/// State the client mirrors for one component.
///
/// Always derived from primitive component state in
/// [`ComponentTree::before_response_flush`](crate::component::ComponentTree::before_response_flush);
/// never mutated directly.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedState {
    /// Debug id.
    pub id: Option<String>,
    pub caption: Option<String>,
    pub description: Option<String>,
    /// Space-joined style names.
    pub styles: String,
    pub primary_style_name: Option<String>,
    pub enabled: bool,
    pub read_only: bool,
    pub immediate: bool,
    /// CSS width or `""` when not set.
    pub width: String,
    /// CSS height or `""` when not set.
    pub height: String,
    /// Formatted HTML of the component error.
    pub error_message: Option<String>,
    /// Visible children of container kinds, in order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ComponentId>>,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub ui: Option<UiSharedState>,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub button: Option<ButtonSharedState>,
}

/// UI-only fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSharedState {
    pub focused: Option<ComponentId>,
}

/// Button-only fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonSharedState {
    pub disable_on_click: bool,
    pub tab_index: i32,
    /// Shorthand of the click shortcut, e.g. `"Ctrl+S"`.
    pub click_shortcut: Option<String>,
    pub html_content_allowed: bool,
    pub icon_alt_text: Option<String>,
}

impl SharedState {
    /// Flatten into the property map used for diffing.
    pub fn to_fields(&self) -> StateFields {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => StateFields::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_use_camel_case() {
        let state = SharedState {
            caption: Some("Save".to_string()),
            read_only: true,
            ..SharedState::default()
        };
        let fields = state.to_fields();
        assert_eq!(fields["caption"], "Save");
        assert_eq!(fields["readOnly"], true);
        assert_eq!(fields["errorMessage"], Value::Null);
        assert!(!fields.contains_key("children"));
        assert!(!fields.contains_key("focused"));
    }

    #[test]
    fn test_extensions_are_flattened() {
        let state = SharedState {
            children: Some(vec![ComponentId::new(3)]),
            button: Some(ButtonSharedState {
                click_shortcut: Some("Ctrl+S".to_string()),
                ..ButtonSharedState::default()
            }),
            ..SharedState::default()
        };
        let fields = state.to_fields();
        assert_eq!(fields["children"], serde_json::json!([3]));
        assert_eq!(fields["clickShortcut"], "Ctrl+S");
        assert_eq!(fields["tabIndex"], 0);
    }
}
