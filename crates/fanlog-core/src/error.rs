//! Error types for sinks and the dispatcher.

/// Why a single sink failed to emit an event.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The structured data attached to the event could not be rendered as JSON.
    ///
    /// Sinks built on [`SinkCore`](crate::SinkCore) never return this: they
    /// serialize a `serde_json::Map<String, Value>`, which cannot fail. It is
    /// kept for sinks that render their own payload types.
    #[error("failed to serialize event data: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The sink's output target rejected the write.
    #[error("failed to write log line: {0}")]
    Io(#[from] std::io::Error),
    /// A lock guarding the sink's output was poisoned by a panicking writer.
    #[error("sink output lock poisoned")]
    Poisoned,
}

/// One sink's failure during a dispatch call.
#[derive(Debug)]
pub struct SinkFailure {
    /// Position of the sink in the dispatcher's registration list.
    pub index: usize,
    /// The sink's configured name.
    pub sink: String,
    pub error: SinkError,
}

/// Returned by the dispatcher when one or more sinks failed.
///
/// Sinks that succeeded still emitted their line; `failures` lists the rest
/// in registration order.
#[derive(Debug, thiserror::Error)]
#[error("{} of {attempted} sink(s) failed: {}", .failures.len(), summary(.failures))]
pub struct DispatchError {
    pub attempted: usize,
    pub failures: Vec<SinkFailure>,
}

fn summary(failures: &[SinkFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("{}#{}: {}", f.sink, f.index, f.error))
        .collect::<Vec<_>>()
        .join("; ")
}
