//! ObservationScope for automatic begin/complete logging
//!
//! - Logs `{name}_BEGIN` on creation
//! - Logs `{name}_COMPLETE` on `complete()`
//! - Logs `{name}_ERROR` on drop if never completed

use std::time::Instant;

use tracing::{error, info, Span};

/// A scope that logs begin and complete events inside a span
///
/// # Usage
///
/// ```ignore
/// let span = tracing::info_span!("validation", request_id = %id);
/// let scope = ObservationScope::new("VALIDATION", span);
/// // ... do work ...
/// scope.complete(); // logs VALIDATION_COMPLETE
/// ```
pub struct ObservationScope {
    name: &'static str,
    span: Span,
    started: Instant,
    completed: bool,
}

impl ObservationScope {
    /// Create a new observation scope
    ///
    /// Logs `{name}_BEGIN` immediately.
    pub fn new(name: &'static str, span: Span) -> Self {
        span.in_scope(|| info!(event = %format!("{}_BEGIN", name)));

        Self {
            name,
            span,
            started: Instant::now(),
            completed: false,
        }
    }

    /// Run `f` inside the scope's span
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        self.span.in_scope(f)
    }

    /// Milliseconds since the scope began
    pub fn elapsed_ms(&self) -> u128 {
        self.started.elapsed().as_millis()
    }

    /// Mark the scope as successfully completed
    ///
    /// Logs `{name}_COMPLETE` with the elapsed time.
    pub fn complete(mut self) {
        self.completed = true;
        let elapsed_ms = self.elapsed_ms() as u64;
        self.span.in_scope(|| {
            info!(event = %format!("{}_COMPLETE", self.name), elapsed_ms);
        });
    }
}

impl Drop for ObservationScope {
    fn drop(&mut self) {
        if !self.completed {
            let elapsed_ms = self.elapsed_ms() as u64;
            self.span.in_scope(|| {
                error!(event = %format!("{}_ERROR", self.name), elapsed_ms);
            });
        }
    }
}
