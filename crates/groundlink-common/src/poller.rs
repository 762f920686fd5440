//! Periodic status polling.
//!
//! Scheduling is platform specific (browser interval, tokio task), so it
//! sits behind [`Scheduler`]. Whatever the platform, starting a poll
//! yields a [`PollHandle`] and the owner tears the poll down through it.

use std::time::Duration;

/// Interval between periodic status fetches.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(5_000);

/// Cancellation handle for a running periodic task.
///
/// `cancel` consumes the handle, so it can run at most once. Dropping a
/// handle that was never cancelled cancels it too: a poll cannot outlive
/// its owner.
#[must_use = "dropping a PollHandle stops the poll"]
pub struct PollHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl PollHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Stop the periodic task.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            tracing::debug!("status poll cancelled");
            cancel();
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            tracing::warn!("poll handle dropped without cancel; stopping poll");
            cancel();
        }
    }
}

impl std::fmt::Debug for PollHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PollHandle")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Runs `tick` every `period` until the returned handle is cancelled.
/// The first tick fires one period after scheduling.
pub trait Scheduler {
    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> PollHandle;
}

/// Start the periodic poll. `tick` normally spawns a quiet
/// [`GroundControl::refresh`](crate::control::GroundControl::refresh).
pub fn start_polling<S>(scheduler: &S, period: Duration, tick: impl FnMut() + 'static) -> PollHandle
where
    S: Scheduler + ?Sized,
{
    tracing::debug!(period_ms = period.as_millis() as u64, "status poll started");
    scheduler.every(period, Box::new(tick))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Scheduler driven by hand: `fire` runs every live task once.
    #[derive(Default)]
    struct ManualScheduler {
        tasks: Rc<RefCell<Vec<(u64, Box<dyn FnMut()>)>>>,
        next_id: Cell<u64>,
    }

    impl ManualScheduler {
        fn fire(&self) {
            for (_, tick) in self.tasks.borrow_mut().iter_mut() {
                tick();
            }
        }

        fn live(&self) -> usize {
            self.tasks.borrow().len()
        }
    }

    impl Scheduler for ManualScheduler {
        fn every(&self, _period: Duration, tick: Box<dyn FnMut()>) -> PollHandle {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.tasks.borrow_mut().push((id, tick));
            let tasks = self.tasks.clone();
            PollHandle::new(move || tasks.borrow_mut().retain(|(t, _)| *t != id))
        }
    }

    #[test]
    fn ticks_until_cancelled() {
        let scheduler = ManualScheduler::default();
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let handle = start_polling(&scheduler, DEFAULT_POLL_INTERVAL, move || c.set(c.get() + 1));

        scheduler.fire();
        scheduler.fire();
        assert_eq!(count.get(), 2);

        handle.cancel();
        assert_eq!(scheduler.live(), 0);
        scheduler.fire();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn drop_cancels() {
        let scheduler = ManualScheduler::default();
        {
            let _handle = start_polling(&scheduler, DEFAULT_POLL_INTERVAL, || {});
            assert_eq!(scheduler.live(), 1);
        }
        assert_eq!(scheduler.live(), 0);
    }

    #[test]
    fn cancel_runs_once() {
        let calls = Rc::new(Cell::new(0));
        let c = calls.clone();
        let handle = PollHandle::new(move || c.set(c.get() + 1));
        handle.cancel();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn independent_polls() {
        let scheduler = ManualScheduler::default();
        let a = start_polling(&scheduler, DEFAULT_POLL_INTERVAL, || {});
        let b = start_polling(&scheduler, DEFAULT_POLL_INTERVAL, || {});
        a.cancel();
        assert_eq!(scheduler.live(), 1);
        b.cancel();
        assert_eq!(scheduler.live(), 0);
    }
}
