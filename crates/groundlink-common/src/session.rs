//! Session state container and operator notifications.

use std::cell::RefCell;
use std::rc::Rc;

use crate::log::ActionLog;
use crate::models::Status;

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

/// Transient operator notification (toast, console line).
pub trait Notifier {
    fn notify(&self, kind: NoticeKind, text: &str);
}

/// Holder of the session's mutable state.
///
/// The status slot is only ever replaced wholesale, so an observer
/// never sees fields from two different snapshots.
pub trait Session {
    fn replace_status(&self, status: Status);

    /// Append `message` to the action log, stamped at call time.
    fn record(&self, message: &str);
}

/// Single-threaded in-memory session. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    status: Rc<RefCell<Option<Status>>>,
    log: Rc<RefCell<ActionLog>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest status, `None` before the first successful fetch.
    pub fn status(&self) -> Option<Status> {
        self.status.borrow().clone()
    }

    /// Action log lines, newest first.
    pub fn log_lines(&self) -> Vec<String> {
        self.log.borrow().lines()
    }

    /// Action log messages without timestamps, newest first.
    pub fn log_messages(&self) -> Vec<String> {
        self.log
            .borrow()
            .entries()
            .map(|e| e.message.clone())
            .collect()
    }
}

impl Session for MemorySession {
    fn replace_status(&self, status: Status) {
        *self.status.borrow_mut() = Some(status);
    }

    fn record(&self, message: &str) {
        self.log.borrow_mut().append(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let a = MemorySession::new();
        let b = a.clone();
        a.record("one");
        b.replace_status(Status {
            battery: Some(50),
            ..Default::default()
        });
        assert_eq!(b.log_messages(), ["one"]);
        assert_eq!(a.status().and_then(|s| s.battery), Some(50));
    }

    #[test]
    fn replacement_is_wholesale() {
        let session = MemorySession::new();
        session.replace_status(Status {
            battery: Some(80),
            gps_locked: Some(true),
            ..Default::default()
        });
        session.replace_status(Status {
            flight_mode: Some("AUTO".into()),
            ..Default::default()
        });
        let status = session.status().unwrap();
        assert_eq!(status.battery, None);
        assert_eq!(status.gps_locked, None);
        assert_eq!(status.flight_mode.as_deref(), Some("AUTO"));
    }
}
