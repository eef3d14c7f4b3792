//! Session configuration.

use crate::component::DEFAULT_LOCALE;
use crate::error::{PeerError, PeerResult};

/// Environment variable holding the default locale.
pub const ENV_LOCALE: &str = "PEERUI_LOCALE";
/// Environment variable enabling [`ContainerSizes`](crate::state::ContainerSizes).
pub const ENV_STRICT_SIZES: &str = "PEERUI_STRICT_SIZES";
/// Environment variable capping the messages accepted per request.
pub const ENV_MAX_MESSAGES: &str = "PEERUI_MAX_MESSAGES";

/// Configuration for one client session.
///
/// # Example
///
/// ```ignore
/// use peerui::session::SessionConfig;
///
/// let config = SessionConfig::default()
///     .with_locale("fi-FI")
///     .with_strict_sizes(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Locale of components that set none themselves (default: en-US)
    pub locale: String,
    /// Only send percentage sizes an ancestor can define (default: false)
    pub strict_sizes: bool,
    /// Largest number of messages accepted in one request frame (default: 256)
    pub max_messages: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            strict_sizes: false,
            max_messages: 256,
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_strict_sizes(mut self, strict: bool) -> Self {
        self.strict_sizes = strict;
        self
    }

    pub fn with_max_messages(mut self, max: usize) -> Self {
        self.max_messages = max;
        self
    }

    /// Defaults overridden by `PEERUI_LOCALE`, `PEERUI_STRICT_SIZES` and
    /// `PEERUI_MAX_MESSAGES`. Unset or empty variables keep the default.
    pub fn from_env() -> PeerResult<Self> {
        let mut config = Self::default();

        if let Some(locale) = read_var(ENV_LOCALE) {
            config.locale = locale;
        }
        if let Some(strict) = read_var(ENV_STRICT_SIZES) {
            config.strict_sizes = parse_flag(ENV_STRICT_SIZES, &strict)?;
        }
        if let Some(max) = read_var(ENV_MAX_MESSAGES) {
            config.max_messages = match max.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(PeerError::Configuration {
                        key: ENV_MAX_MESSAGES.to_string(),
                        message: format!("expected a positive integer, got \"{}\"", max),
                    })
                }
            };
        }
        Ok(config)
    }
}

fn read_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(key: &str, value: &str) -> PeerResult<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(PeerError::Configuration {
            key: key.to_string(),
            message: format!("expected a boolean, got \"{}\"", value),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.locale, "en-US");
        assert!(!config.strict_sizes);
        assert_eq!(config.max_messages, 256);
    }

    #[test]
    fn test_builder_chain() {
        let config = SessionConfig::new()
            .with_locale("de-DE")
            .with_strict_sizes(true)
            .with_max_messages(8);
        assert_eq!(config.locale, "de-DE");
        assert!(config.strict_sizes);
        assert_eq!(config.max_messages, 8);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("K", "TRUE").unwrap());
        assert!(!parse_flag("K", "off").unwrap());
        let err = parse_flag("K", "maybe").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_INVALID");
    }
}
