//! Console sink — writes canonical lines to standard output.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use fanlog_core::{Clock, Level, LogData, LogSink, SinkCore, SinkError};

/// Writes each enabled event as one line followed by `\n`.
///
/// Output goes to stdout unless redirected with [`ConsoleSink::with_writer`].
/// No buffering beyond what the writer itself does.
pub struct ConsoleSink {
    core: SinkCore,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    pub const NAME: &'static str = "Console";

    pub fn new(min_level: Level) -> Self {
        Self::with_writer(min_level, io::stdout())
    }

    /// Build a console sink that writes to `writer` instead of stdout.
    pub fn with_writer(min_level: Level, writer: impl Write + Send + 'static) -> Self {
        Self {
            core: SinkCore::new(Self::NAME, min_level),
            out: Mutex::new(Box::new(writer)),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.core = self.core.with_clock(clock);
        self
    }

    pub fn min_level(&self) -> Level {
        self.core.min_level()
    }
}

impl std::fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSink").field("core", &self.core).finish_non_exhaustive()
    }
}

impl LogSink for ConsoleSink {
    fn name(&self) -> &str {
        self.core.name()
    }

    fn log(&self, message: &str, level: Level, data: Option<&LogData>) -> Result<(), SinkError> {
        self.core.emit(message, level, data, |line| {
            let mut out = self.out.lock().map_err(|_| SinkError::Poisoned)?;
            writeln!(out, "{line}")?;
            Ok(())
        })
    }
}
