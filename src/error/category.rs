//! Error category classification for unified error handling.
//!
//! Categories let callers decide whether an error ends the request, is sent
//! back to the client as a protocol error, or signals a bug in server code.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The client sent something the server cannot service (unknown handler,
    /// bad arguments, malformed frame). Reported back, session continues.
    Protocol,

    /// Server-side code used the component API incorrectly
    /// (duplicate parent, adding children to a leaf).
    Programming,

    /// A value supplied by application code failed to parse
    /// (size strings, key combinations).
    Input,

    /// Configuration errors (invalid environment values).
    Configuration,

    /// I/O errors from the transport.
    System,
}

impl ErrorCategory {
    /// Returns true if the session can keep serving requests after an error
    /// in this category.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ErrorCategory::System)
    }

    /// Returns true if the error should be reported to the client in the
    /// response frame rather than to the server-side caller.
    pub fn is_client_facing(&self) -> bool {
        matches!(self, ErrorCategory::Protocol)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Protocol => "protocol",
            ErrorCategory::Programming => "programming",
            ErrorCategory::Input => "input",
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::System => "system",
        }
    }

    /// Returns a user-friendly description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Protocol => "Client request could not be serviced",
            ErrorCategory::Programming => "Component API misuse",
            ErrorCategory::Input => "Invalid value",
            ErrorCategory::Configuration => "Configuration problem",
            ErrorCategory::System => "System error",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Protocol => "Reload the page to resynchronize with the server",
            ErrorCategory::Programming => "Detach the component before reusing it elsewhere",
            ErrorCategory::Input => "Check the value format and try again",
            ErrorCategory::Configuration => "Check the PEERUI_* environment variables",
            ErrorCategory::System => "Check the transport and restart the session",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
