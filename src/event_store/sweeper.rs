//! Retention sweeper - periodic background pruning
//!
//! The sweeper owns a tokio task that ticks on a fixed interval and asks its
//! target to sweep. The returned [`SweeperHandle`] cancels the task when it
//! is cancelled explicitly or dropped, so no background work outlives the
//! consumer.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::store::SweepReport;

/// Something the sweeper can prune on each tick
pub trait Sweep: Send + Sync + 'static {
    /// Run one retention pass; `None` means the pass was skipped
    fn sweep(&self) -> Option<SweepReport>;
}

/// Periodic retention sweeper
pub struct RetentionSweeper;

impl RetentionSweeper {
    /// Spawn the sweep loop on the current tokio runtime
    ///
    /// The first sweep happens one full `period` after spawning.
    pub fn spawn<T: Sweep>(target: Arc<T>, period: Duration) -> SweeperHandle {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let task = tokio::spawn(Self::run(target, period, shutdown_rx));

        SweeperHandle {
            shutdown: Some(shutdown_tx),
            task: Some(task),
        }
    }

    async fn run<T: Sweep>(target: Arc<T>, period: Duration, mut shutdown: oneshot::Receiver<()>) {
        let period = period.max(Duration::from_millis(1));
        let mut timer = interval_at(Instant::now() + period, period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = timer.tick() => {
                    if let Some(report) = target.sweep() {
                        if report.removed() > 0 {
                            tracing::info!(
                                expired = report.expired,
                                trimmed = report.trimmed,
                                "retention sweep removed routine events"
                            );
                        }
                    }
                }

                _ = &mut shutdown => {
                    tracing::debug!("retention sweeper stopped");
                    break;
                }
            }
        }
    }
}

/// Handle to a running sweeper; dropping it stops the task
pub struct SweeperHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl SweeperHandle {
    /// Stop the sweeper and wait for the task to finish
    pub async fn cancel(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    /// Whether the background task is still running
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for SweeperHandle {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingTarget {
        ticks: AtomicUsize,
    }

    impl Sweep for CountingTarget {
        fn sweep(&self) -> Option<SweepReport> {
            self.ticks.fetch_add(1, Ordering::SeqCst);
            Some(SweepReport::default())
        }
    }

    #[tokio::test]
    async fn test_sweeper_ticks_periodically() {
        let target = Arc::new(CountingTarget::default());
        let handle = RetentionSweeper::spawn(target.clone(), Duration::from_millis(10));

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert!(target.ticks.load(Ordering::SeqCst) >= 2);

        handle.cancel().await;
    }

    #[tokio::test]
    async fn test_cancel_stops_ticking() {
        let target = Arc::new(CountingTarget::default());
        let handle = RetentionSweeper::spawn(target.clone(), Duration::from_millis(10));
        assert!(handle.is_running());

        handle.cancel().await;
        let after_cancel = target.ticks.load(Ordering::SeqCst);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(target.ticks.load(Ordering::SeqCst), after_cancel);
    }

    #[tokio::test]
    async fn test_drop_stops_ticking() {
        let target = Arc::new(CountingTarget::default());
        let handle = RetentionSweeper::spawn(target.clone(), Duration::from_millis(10));
        drop(handle);

        // Let the abort land before sampling
        tokio::task::yield_now().await;
        let after_drop = target.ticks.load(Ordering::SeqCst);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(target.ticks.load(Ordering::SeqCst), after_drop);
    }
}
