//! fanlog — a synchronous fan-out logging facade.
//!
//! A [`Logger`] forwards every call to each registered sink; every sink
//! filters by its own minimum [`Level`] and writes the canonical line
//!
//! ```text
//! <sink-name>: <YYYY-MM-DDTHH:MM:SSZ> [<LEVEL>] <message>[ <json-data>]
//! ```
//!
//! This crate re-exports the core and sink crates so integration tests and
//! embedders can import everything from one place, and wires a [`Logger`]
//! from a [`Config`].

use std::sync::Arc;

pub use fanlog_core::config::{self, Config, SinkConfig, SinkKind};
pub use fanlog_core::{
    Clock, DispatchError, FixedClock, Level, LogData, LogSink, Logger, ParseLevelError, SinkCore,
    SinkError, SinkFailure, SystemClock, TIMESTAMP_FORMAT,
};
pub use fanlog_sinks::{ConsoleSink, MemorySink};

/// Build the sink described by one `[[sinks]]` entry.
pub fn sink_from_config(cfg: &SinkConfig) -> Arc<dyn LogSink> {
    match cfg.kind {
        SinkKind::Console => Arc::new(ConsoleSink::new(cfg.min_level)),
        SinkKind::Memory => {
            let name = cfg.name.as_deref().unwrap_or(MemorySink::DEFAULT_NAME);
            Arc::new(MemorySink::new(name, cfg.min_level))
        }
    }
}

/// Build a logger with one sink per `[[sinks]]` entry, in file order.
pub fn logger_from_config(cfg: &Config) -> Logger {
    let mut logger = Logger::default();
    for sink_cfg in &cfg.sinks {
        if sink_cfg.kind == SinkKind::Console && sink_cfg.name.is_some() {
            tracing::warn!("console sink name is fixed; ignoring configured name");
        }
        logger.add_logger(sink_from_config(sink_cfg));
    }
    tracing::debug!(sinks = logger.len(), "logger configured");
    logger
}
