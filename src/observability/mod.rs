//! Observability subsystem
//!
//! - Structured JSON logs via `tracing`
//! - Named lifecycle events (`event` field on every line)
//! - Scope-based begin/complete logging
//!
//! # Usage
//!
//! ```ignore
//! use sales_validator::observability::{init_logging, log_event, Event};
//!
//! init_logging("info")?;
//! log_event(Event::ServerStart, "listening on 0.0.0.0:7071");
//! ```

mod events;
mod logger;
mod scope;

pub use events::Event;
pub use logger::{init_logging, log_event};
pub use scope::ObservationScope;

use std::fmt;

/// Observability error
///
/// Logging failures are reported but never fatal.
#[derive(Debug)]
pub struct ObservabilityError {
    message: String,
}

impl ObservabilityError {
    /// Create a new observability error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Get the message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ObservabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SALES_OBSERVABILITY_FAILED: {}", self.message)
    }
}

impl std::error::Error for ObservabilityError {}

/// Result type for observability operations
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observability_error_display() {
        let err = ObservabilityError::new("test message");
        let display = format!("{}", err);
        assert!(display.contains("SALES_OBSERVABILITY_FAILED"));
        assert!(display.contains("test message"));
        assert_eq!(err.message(), "test message");
    }
}
