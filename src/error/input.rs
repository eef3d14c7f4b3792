//! Errors raised while parsing key combinations.

use thiserror::Error;

/// Key combination parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The shorthand was empty.
    #[error("empty key combination")]
    EmptyCombo,

    /// A modifier token was not recognised.
    #[error("unknown modifier \"{0}\"")]
    UnknownModifier(String),

    /// The key token was not recognised.
    #[error("unknown key \"{0}\"")]
    UnknownKey(String),
}

impl InputError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            InputError::EmptyCombo => "INPUT_EMPTY_COMBO",
            InputError::UnknownModifier(_) => "INPUT_UNKNOWN_MODIFIER",
            InputError::UnknownKey(_) => "INPUT_UNKNOWN_KEY",
        }
    }
}
