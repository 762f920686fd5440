//! Browser-side implementations of the session container and scheduler.

use std::time::Duration;

use gloo_timers::callback::Interval;
use groundlink_common::poller::{PollHandle, Scheduler};
use groundlink_common::{ActionLog, Session, Status};
use leptos::prelude::*;

/// Session state held in Leptos signals so the view re-renders on
/// every status replacement and log append.
#[derive(Clone, Copy)]
pub struct SignalSession {
    pub status: RwSignal<Option<Status>>,
    pub log: RwSignal<ActionLog>,
}

impl SignalSession {
    pub fn new() -> Self {
        Self {
            status: RwSignal::new(None),
            log: RwSignal::new(ActionLog::new()),
        }
    }
}

impl Default for SignalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Session for SignalSession {
    fn replace_status(&self, status: Status) {
        // A response may land after the view is gone; drop it then.
        if self.status.try_set(Some(status)).is_some() {
            log::debug!("status arrived after teardown, ignored");
        }
    }

    fn record(&self, message: &str) {
        let _ = self.log.try_update(|log| log.append(message));
    }
}

/// `setInterval`-backed scheduler.
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> PollHandle {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        let interval = Interval::new(millis, tick);
        PollHandle::new(move || drop(interval))
    }
}
