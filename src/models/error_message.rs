//! User-visible component error messages.
//!
//! These are data, not Rust errors: they travel to the client through the
//! shared state and are rendered next to the component.

use serde::{Deserialize, Serialize};

/// Severity of a component error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorLevel {
    Info,
    Warning,
    Error,
    Critical,
    System,
}

impl ErrorLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorLevel::Info => "info",
            ErrorLevel::Warning => "warning",
            ErrorLevel::Error => "error",
            ErrorLevel::Critical => "critical",
            ErrorLevel::System => "system",
        }
    }
}

/// How the message text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentMode {
    #[default]
    Text,
    Html,
}

/// An error message attached to a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub level: ErrorLevel,
    pub message: String,
    pub mode: ContentMode,
}

impl ErrorMessage {
    /// Plain-text message at [`ErrorLevel::Error`].
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            level: ErrorLevel::Error,
            message: message.into(),
            mode: ContentMode::Text,
        }
    }

    /// Message whose text is already HTML.
    pub fn html(message: impl Into<String>) -> Self {
        Self {
            mode: ContentMode::Html,
            ..Self::new(message)
        }
    }

    pub fn with_level(mut self, level: ErrorLevel) -> Self {
        self.level = level;
        self
    }

    /// HTML the client renders.
    pub fn formatted_html(&self) -> String {
        let body = match self.mode {
            ContentMode::Html => self.message.clone(),
            ContentMode::Text => escape_html(&self.message),
        };
        format!("<div class=\"v-error-{}\">{}</div>", self.level.as_str(), body)
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
