//! Test builders — ergonomic constructors for event data and loggers.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use std::sync::Arc;

use fanlog::{Level, LogData, LogSink, Logger};

// ---------------------------------------------------------------------------
// LogDataBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`LogData`] payloads. Keys keep insertion order.
///
/// ```rust
/// let data = LogDataBuilder::new()
///     .field("request_id", "req-abc123")
///     .field("status", 503)
///     .build();
/// ```
#[derive(Default)]
pub struct LogDataBuilder {
    data: LogData,
}

impl LogDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> LogData {
        self.data
    }
}

// ---------------------------------------------------------------------------
// Sinks
// ---------------------------------------------------------------------------

/// Records every call verbatim, before any level filtering.
///
/// Shares one call log between several instances so ordering across sinks
/// can be asserted.
pub struct RecordingSink {
    pub name: String,
    pub min_level: Level,
    pub calls: Arc<std::sync::Mutex<Vec<String>>>,
}

impl LogSink for RecordingSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn log(
        &self,
        message: &str,
        level: Level,
        _data: Option<&LogData>,
    ) -> Result<(), fanlog::SinkError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{} {} {}", self.name, level, message));
        Ok(())
    }
}

/// Build `n` recording sinks named `S1..=Sn` sharing one call log.
pub fn recording_sinks(n: usize) -> (Vec<Arc<dyn LogSink>>, Arc<std::sync::Mutex<Vec<String>>>) {
    let calls = Arc::new(std::sync::Mutex::new(Vec::new()));
    let sinks = (1..=n)
        .map(|i| {
            Arc::new(RecordingSink {
                name: format!("S{i}"),
                min_level: Level::Debug,
                calls: Arc::clone(&calls),
            }) as Arc<dyn LogSink>
        })
        .collect();
    (sinks, calls)
}

/// A logger with a single sink.
pub fn logger_with(sink: Arc<dyn LogSink>) -> Logger {
    Logger::new(vec![sink])
}
