//! Poll scheduling on the tokio local executor.

use std::time::Duration;

use groundlink_common::poller::{PollHandle, Scheduler};
use tokio::time::{self, Instant, MissedTickBehavior};

/// Runs ticks as a `spawn_local` task; must be used inside a `LocalSet`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn every(&self, period: Duration, mut tick: Box<dyn FnMut()>) -> PollHandle {
        let task = tokio::task::spawn_local(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                tick();
            }
        });
        PollHandle::new(move || task.abort())
    }
}
