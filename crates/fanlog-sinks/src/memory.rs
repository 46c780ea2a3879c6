//! In-memory sink — keeps formatted lines for later inspection.

use std::sync::{Arc, Mutex, MutexGuard};

use fanlog_core::{Clock, Level, LogData, LogSink, SinkCore, SinkError};

/// Collects every enabled event's canonical line, in emission order.
///
/// Lines are stored without a terminator. Unlike [`ConsoleSink`](crate::ConsoleSink)
/// the name is chosen by the caller.
///
/// The buffer is unbounded: it grows with every emitted line until
/// [`MemorySink::clear`] is called.
///
/// A panic while the buffer lock is held does not disable the sink. Every
/// operation takes the buffer back from a poisoned lock and carries on.
#[derive(Debug)]
pub struct MemorySink {
    core: SinkCore,
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub const DEFAULT_NAME: &'static str = "Memory";

    pub fn new(name: impl Into<String>, min_level: Level) -> Self {
        Self {
            core: SinkCore::new(name, min_level),
            lines: Mutex::new(Vec::new()),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.core = self.core.with_clock(clock);
        self
    }

    pub fn min_level(&self) -> Level {
        self.core.min_level()
    }

    /// Snapshot of the lines emitted so far.
    pub fn lines(&self) -> Vec<String> {
        self.buffer().clone()
    }

    pub fn clear(&self) {
        self.buffer().clear();
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LogSink for MemorySink {
    fn name(&self) -> &str {
        self.core.name()
    }

    fn log(&self, message: &str, level: Level, data: Option<&LogData>) -> Result<(), SinkError> {
        self.core.emit(message, level, data, |line| {
            self.buffer().push(line.to_string());
            Ok(())
        })
    }
}
