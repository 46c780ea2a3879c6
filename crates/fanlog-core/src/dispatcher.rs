//! Dispatcher — fans every log call out to all registered sinks.
//!
//! [`Logger`] performs no filtering of its own. Each sink applies its own
//! threshold, so the same call may be visible on one sink and silent on
//! another. Sinks are notified synchronously in registration order.
//!
//! A failing sink does not stop the fan-out: later sinks still receive the
//! event, and every failure is returned together in a [`DispatchError`].

use std::sync::Arc;

use crate::error::{DispatchError, SinkFailure};
use crate::level::Level;
use crate::sink::{LogData, LogSink};

/// Ordered, append-only list of sinks with per-level convenience calls.
///
/// Registration takes `&mut self`; callers that register and dispatch from
/// several threads wrap the logger in a lock (e.g. `RwLock<Logger>`).
#[derive(Clone, Default)]
pub struct Logger {
    sinks: Vec<Arc<dyn LogSink>>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("sinks", &self.sinks.iter().map(|s| s.name()).collect::<Vec<_>>())
            .finish()
    }
}

impl Logger {
    pub fn new(sinks: Vec<Arc<dyn LogSink>>) -> Self {
        Self { sinks }
    }

    /// Append a sink. No deduplication: registering the same sink twice
    /// delivers every event to it twice.
    pub fn add_logger(&mut self, sink: Arc<dyn LogSink>) {
        self.sinks.push(sink);
    }

    /// Registered sinks in notification order.
    pub fn sinks(&self) -> &[Arc<dyn LogSink>] {
        &self.sinks
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn debug(&self, message: &str) -> Result<(), DispatchError> {
        self.log(message, Level::Debug, None)
    }

    pub fn info(&self, message: &str) -> Result<(), DispatchError> {
        self.log(message, Level::Info, None)
    }

    pub fn warning(&self, message: &str) -> Result<(), DispatchError> {
        self.log(message, Level::Warning, None)
    }

    pub fn error(&self, message: &str) -> Result<(), DispatchError> {
        self.log(message, Level::Error, None)
    }

    pub fn debug_with(&self, message: &str, data: &LogData) -> Result<(), DispatchError> {
        self.log(message, Level::Debug, Some(data))
    }

    pub fn info_with(&self, message: &str, data: &LogData) -> Result<(), DispatchError> {
        self.log(message, Level::Info, Some(data))
    }

    pub fn warning_with(&self, message: &str, data: &LogData) -> Result<(), DispatchError> {
        self.log(message, Level::Warning, Some(data))
    }

    pub fn error_with(&self, message: &str, data: &LogData) -> Result<(), DispatchError> {
        self.log(message, Level::Error, Some(data))
    }

    /// Forward one event to every sink, in registration order.
    ///
    /// With no sinks registered this is a no-op returning `Ok(())`.
    pub fn log(
        &self,
        message: &str,
        level: Level,
        data: Option<&LogData>,
    ) -> Result<(), DispatchError> {
        let mut failures = Vec::new();

        for (index, sink) in self.sinks.iter().enumerate() {
            if let Err(error) = sink.log(message, level, data) {
                tracing::warn!(sink = sink.name(), index, %error, "sink failed to emit event");
                failures.push(SinkFailure {
                    index,
                    sink: sink.name().to_string(),
                    error,
                });
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(DispatchError {
                attempted: self.sinks.len(),
                failures,
            })
        }
    }
}
