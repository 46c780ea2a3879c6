//! Capture buffers and clocks shared across harnesses.

use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, NaiveDateTime};
use fanlog::{Clock, FixedClock};

/// The instant every fixed-clock fixture reports.
pub fn fixed_instant() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .and_then(|d| d.and_hms_opt(10, 0, 5))
        .unwrap()
}

/// Timestamp field produced from [`fixed_instant`].
pub const FIXED_TS: &str = "2024-01-15T10:00:05Z";

pub fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(fixed_instant()))
}

/// Clock that counts how often it is read.
#[derive(Default)]
pub struct CountingClock {
    reads: AtomicUsize,
}

impl CountingClock {
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Clock for CountingClock {
    fn now(&self) -> NaiveDateTime {
        self.reads.fetch_add(1, Ordering::SeqCst);
        fixed_instant()
    }
}

/// In-memory stand-in for stdout. Clones share the same buffer.
#[derive(Clone, Default)]
pub struct CaptureBuffer(Arc<Mutex<Vec<u8>>>);

impl CaptureBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).expect("captured output is UTF-8")
    }

    /// Return the captured output and reset the buffer.
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.0.lock().unwrap());
        String::from_utf8(bytes).expect("captured output is UTF-8")
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
