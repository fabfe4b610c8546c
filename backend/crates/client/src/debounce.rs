//! Cancellable delayed task
//!
//! Each [`Debouncer::schedule`] aborts the pending task and starts a new one
//! that waits out the quiet period before running. Only the last task
//! scheduled inside a quiet window ever runs.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};

/// Quiet period after the last keystroke
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(400);

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace the pending task with `task`, run after the quiet period.
    ///
    /// Must be called within a Tokio runtime.
    pub fn schedule<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        // Deadline fixed now, not at the task's first poll
        let deadline = Instant::now() + self.delay;
        self.pending = Some(tokio::spawn(async move {
            sleep_until(deadline).await;
            task.await;
        }));
    }

    /// Abort the pending task, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// A task is scheduled and has not finished
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
