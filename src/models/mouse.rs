//! Mouse details carried by click calls.

use serde::{Deserialize, Serialize};

/// Which mouse button triggered a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    #[default]
    Left,
    Middle,
    Right,
}

/// Pointer position and modifier keys at the time of a click.
///
/// Clicks produced by keyboard shortcuts carry the default (all zero) value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MouseEventDetails {
    pub button: MouseButton,
    pub client_x: i32,
    pub client_y: i32,
    pub relative_x: i32,
    pub relative_y: i32,
    pub alt_key: bool,
    pub ctrl_key: bool,
    pub meta_key: bool,
    pub shift_key: bool,
}
