//! Observable events
//!
//! Every log line carries an `event` field naming one of these.

use std::fmt;

use tracing::Level;

/// Observable events in the validator service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded
    ConfigLoaded,
    /// HTTP server bound and serving
    ServerStart,
    /// HTTP server stopped
    ServerStop,

    // Validation
    /// File passed every check
    ValidationPassed,
    /// File rejected for a data-quality reason
    ValidationRejected,
    /// Validation failed for a reason the caller cannot fix
    ValidationFault,

    // Storage
    /// Sales file could not be read from the store
    StorageReadFailed,
}

impl Event {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ServerStart => "SERVER_START",
            Event::ServerStop => "SERVER_STOP",
            Event::ValidationPassed => "VALIDATION_PASSED",
            Event::ValidationRejected => "VALIDATION_REJECTED",
            Event::ValidationFault => "VALIDATION_FAULT",
            Event::StorageReadFailed => "STORAGE_READ_FAILED",
        }
    }

    /// Level the event is logged at
    pub fn level(&self) -> Level {
        match self {
            Event::ValidationRejected | Event::StorageReadFailed => Level::WARN,
            Event::ValidationFault => Level::ERROR,
            _ => Level::INFO,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
