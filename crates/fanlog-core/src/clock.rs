//! Wall-clock source used when formatting log lines.

use chrono::NaiveDateTime;

/// Supplies the instant stamped onto a formatted line.
///
/// Sinks read the clock only after an event passes their threshold, so a
/// counting clock can observe that filtered events never format.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the process's local wall-clock time.
///
/// The digits are local time; the formatter still appends a literal `Z`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// A clock frozen at one instant. Useful for deterministic output.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
