//! The sink capability and the shared behaviour concrete sinks compose.
//!
//! A sink is anything implementing [`LogSink`]. Concrete sinks do not inherit
//! from a base type; they embed a [`SinkCore`] and route every call through
//! [`SinkCore::emit`], which applies the level gate, formats the canonical
//! line, and only then hands the line to the sink's own output action.
//!
//! # Canonical line
//!
//! ```text
//! <sink-name>: <YYYY-MM-DDTHH:MM:SSZ> [<LEVEL>] <message>[ <json-data>]
//! ```
//!
//! The timestamp digits are local wall-clock time captured when the line is
//! formatted. The trailing `Z` is a literal.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::error::SinkError;
use crate::level::Level;

/// Structured data attached to an event. Keys keep their insertion order.
pub type LogData = serde_json::Map<String, serde_json::Value>;

/// `strftime` pattern for the timestamp field.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A destination for log events.
///
/// Implementations decide locally whether to emit; the dispatcher forwards
/// every event to every sink. Normal input (an empty message, absent or empty
/// data) must never produce an error.
pub trait LogSink: Send + Sync {
    /// The name written at the start of every line this sink emits.
    fn name(&self) -> &str;

    fn log(&self, message: &str, level: Level, data: Option<&LogData>) -> Result<(), SinkError>;
}

/// Name, threshold and clock shared by every concrete sink.
///
/// Immutable after construction.
#[derive(Clone)]
pub struct SinkCore {
    name: String,
    min_level: Level,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for SinkCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinkCore")
            .field("name", &self.name)
            .field("min_level", &self.min_level)
            .finish_non_exhaustive()
    }
}

impl SinkCore {
    pub fn new(name: impl Into<String>, min_level: Level) -> Self {
        Self {
            name: name.into(),
            min_level,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the wall clock, e.g. with a [`FixedClock`](crate::clock::FixedClock) in tests.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min_level(&self) -> Level {
        self.min_level
    }

    /// `true` iff this sink's threshold admits `level`.
    pub fn enabled_for(&self, level: Level) -> bool {
        self.min_level.ordinal() <= level.ordinal()
    }

    /// Render the canonical line for an event, without a line terminator.
    ///
    /// Reads the clock on every call. Supplied data is always rendered as a
    /// JSON object, so empty data appears as `{}`.
    pub fn build_log_message(
        &self,
        message: &str,
        level: Level,
        data: Option<&LogData>,
    ) -> Result<String, SinkError> {
        let ts = self.clock.now().format(TIMESTAMP_FORMAT);
        let mut line = format!("{}: {} [{}] {}", self.name, ts, level, message);
        if let Some(data) = data {
            line.push(' ');
            line.push_str(&serde_json::to_string(data)?);
        }
        Ok(line)
    }

    /// Gate, format, then hand the line to `action`.
    ///
    /// Filtered events return `Ok(())` without reading the clock, serializing
    /// `data`, or calling `action`.
    pub fn emit<F>(
        &self,
        message: &str,
        level: Level,
        data: Option<&LogData>,
        action: F,
    ) -> Result<(), SinkError>
    where
        F: FnOnce(&str) -> Result<(), SinkError>,
    {
        if !self.enabled_for(level) {
            return Ok(());
        }
        let line = self.build_log_message(message, level, data)?;
        action(&line)
    }
}
