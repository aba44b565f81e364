//! Structured JSON logging
//!
//! - One log line = one event, JSON encoded
//! - Written to stderr so stdout stays free for command output
//! - Level from `RUST_LOG` when set, otherwise the configured level

use tracing::{event, Level};
use tracing_subscriber::EnvFilter;

use super::events::Event;
use super::{ObservabilityError, ObservabilityResult};

/// Install the global JSON subscriber.
///
/// Fails if a subscriber is already installed or the level does not parse.
pub fn init_logging(level: &str) -> ObservabilityResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| ObservabilityError::new(format!("Invalid log level '{}': {}", level, e)))?,
    };

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ObservabilityError::new(format!("Failed to install subscriber: {}", e)))
}

/// Log a lifecycle event at its own level
pub fn log_event(ev: Event, message: &str) {
    let name = ev.as_str();
    let level = ev.level();
    if level == Level::ERROR {
        event!(Level::ERROR, event = name, "{}", message);
    } else if level == Level::WARN {
        event!(Level::WARN, event = name, "{}", message);
    } else {
        event!(Level::INFO, event = name, "{}", message);
    }
}
