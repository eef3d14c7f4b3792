//! Error context for enriched error information.
//!
//! Context is attached where an error crosses a session boundary so logs can
//! tie it back to the request and component involved.

use chrono::{DateTime, Utc};

use crate::component::ComponentId;

/// Context information attached to errors for debugging.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    /// Human-readable description of the operation that failed.
    pub operation: String,

    /// Component the operation targeted, if any.
    pub component: Option<ComponentId>,

    /// Sync id of the request frame being processed.
    pub sync_id: Option<u64>,

    /// Session the error occurred in.
    pub session_id: Option<String>,

    /// Timestamp when the error occurred.
    pub timestamp: DateTime<Utc>,
}

impl ErrorContext {
    /// Create a new ErrorContext for an operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            component: None,
            sync_id: None,
            session_id: None,
            timestamp: Utc::now(),
        }
    }

    /// Set the component for this context.
    pub fn with_component(mut self, component: ComponentId) -> Self {
        self.component = Some(component);
        self
    }

    /// Set the request sync id for this context.
    pub fn with_sync_id(mut self, sync_id: u64) -> Self {
        self.sync_id = Some(sync_id);
        self
    }

    /// Set the session id for this context.
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Get a formatted context string suitable for logging.
    pub fn to_log_string(&self) -> String {
        let mut parts = vec![format!("operation={}", self.operation)];

        if let Some(component) = self.component {
            parts.push(format!("component={}", component));
        }

        if let Some(sync_id) = self.sync_id {
            parts.push(format!("sync_id={}", sync_id));
        }

        if let Some(ref session_id) = self.session_id {
            parts.push(format!("session={}", session_id));
        }

        parts.push(format!("timestamp={}", self.timestamp.to_rfc3339()));

        parts.join(" ")
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new("unknown")
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.operation)?;

        if let Some(component) = self.component {
            write!(f, " component={}", component)?;
        }

        if let Some(sync_id) = self.sync_id {
            write!(f, " sync={}", sync_id)?;
        }

        Ok(())
    }
}
