//! fanlog-core — severity levels, the sink capability, and the dispatcher.
//!
//! # Data flow
//!
//! ```text
//! caller ──► Logger::<level>(message, data)
//!               │  (no filtering, registration order)
//!               ├──► sink 1 ──► enabled_for? ──► format ──► emit
//!               ├──► sink 2 ──► enabled_for? ──► format ──► emit
//!               └──► …
//! ```
//!
//! Everything is synchronous: a call returns once every sink has finished.

pub mod clock;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod level;
pub mod sink;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dispatcher::Logger;
pub use error::{DispatchError, SinkError, SinkFailure};
pub use level::{Level, ParseLevelError};
pub use sink::{LogData, LogSink, SinkCore, TIMESTAMP_FORMAT};
