//! Assertions about canonical log lines.
//!
//! Failure messages show the whole captured output so it is clear which line
//! broke the format and where.

use fanlog::Level;

/// Assert that `output` consists of exactly `n` newline-terminated lines.
#[macro_export]
macro_rules! assert_line_count {
    ($output:expr, $n:expr) => {{
        let output: &str = &$output;
        let expected: usize = $n;
        let actual = output.lines().count();
        if actual != expected || (expected > 0 && !output.ends_with('\n')) {
            panic!(
                "assert_line_count! failed:\n  expected: {} terminated line(s)\n  actual:   {}\n  output:   {:?}",
                expected, actual, output
            );
        }
    }};
}

/// Assert that a single line carries the given `[LEVEL]` tag.
#[macro_export]
macro_rules! assert_level_tag {
    ($line:expr, $level:expr) => {{
        let line: &str = &$line;
        let level: fanlog::Level = $level;
        let tag = format!("[{}]", level);
        if !line.contains(&tag) {
            panic!(
                "assert_level_tag! failed:\n  expected tag: {}\n  line:         {:?}",
                tag, line
            );
        }
    }};
}

/// Check the structural shape of one canonical line (no terminator) and
/// return `(sink_name, timestamp, level_name, rest)`.
///
/// Panics with the offending line if any field is malformed.
pub fn parse_canonical_line(line: &str) -> (&str, &str, &str, &str) {
    let (name, rest) = line
        .split_once(": ")
        .unwrap_or_else(|| panic!("line has no `<name>: ` prefix: {line:?}"));
    let (ts, rest) = rest
        .split_once(' ')
        .unwrap_or_else(|| panic!("line has no timestamp: {line:?}"));
    assert!(
        chrono::NaiveDateTime::parse_from_str(ts, fanlog::TIMESTAMP_FORMAT).is_ok(),
        "timestamp {ts:?} does not match YYYY-MM-DDTHH:MM:SSZ in {line:?}"
    );
    let rest = rest
        .strip_prefix('[')
        .unwrap_or_else(|| panic!("level tag missing in {line:?}"));
    let (level, rest) = rest
        .split_once("] ")
        .unwrap_or_else(|| panic!("level tag not closed in {line:?}"));
    assert!(
        Level::ALL.iter().any(|l| l.as_str() == level),
        "unknown level {level:?} in {line:?}"
    );
    (name, ts, level, rest)
}
