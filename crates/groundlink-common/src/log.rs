//! Action log: session-scoped, newest-first record of operator and
//! system events. Not to be confused with diagnostic `tracing` output.

use std::collections::VecDeque;
use std::fmt;

use chrono::Local;

/// One immutable `(timestamp, message)` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Operator-local wall-clock time, e.g. `14:03:27`.
    pub timestamp: String,
    pub message: String,
}

impl LogEntry {
    /// Stamp `message` with the current local time.
    pub fn now(message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.timestamp, self.message)
    }
}

/// Unbounded within a session; there is no eviction and no persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionLog {
    entries: VecDeque<LogEntry>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timestamp `message` now and put it at the front.
    pub fn append(&mut self, message: impl Into<String>) {
        self.push(LogEntry::now(message));
    }

    /// Prepend an already-stamped entry.
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push_front(entry);
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Rendered `[timestamp] message` lines, newest first.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(ts: &str, msg: &str) -> LogEntry {
        LogEntry {
            timestamp: ts.into(),
            message: msg.into(),
        }
    }

    #[test]
    fn newest_first() {
        let mut log = ActionLog::new();
        log.append("A");
        log.append("B");
        log.append("C");
        let messages: Vec<_> = log.entries().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["C", "B", "A"]);
    }

    #[test]
    fn display_format() {
        assert_eq!(entry("09:15:02", "Fetched status").to_string(), "[09:15:02] Fetched status");
    }

    #[test]
    fn timestamp_is_taken_at_append() {
        let mut log = ActionLog::new();
        log.push(entry("08:00:00", "early"));
        log.append("late");
        let stamps: Vec<_> = log.entries().map(|e| e.timestamp.clone()).collect();
        assert_eq!(stamps[1], "08:00:00");
        assert_eq!(stamps[0].len(), 8);
        assert_eq!(stamps[0].matches(':').count(), 2);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut log = ActionLog::new();
        log.append("Fetched status");
        log.append("Fetched status");
        assert_eq!(log.len(), 2);
        assert!(log.lines().iter().all(|l| l.ends_with("] Fetched status")));
    }
}
