//! fanlog-sinks — concrete sink implementations for fanlog.
//!
//! Each sink embeds a [`fanlog_core::SinkCore`] for level gating and line
//! formatting and supplies only its own output action.

pub mod console;
pub mod memory;

pub use console::ConsoleSink;
pub use memory::MemorySink;
