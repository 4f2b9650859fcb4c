//! Debounced callbacks: only the last call within the delay runs.

use std::time::Duration;

use crate::error::TimerError;

use super::schedule::{ScheduledTask, schedule};

/// Runs the most recent callback once the calls stop for `delay`.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<ScheduledTask>,
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

    /// Cancel any pending callback and schedule `f` after the delay.
    pub fn call<F>(&mut self, f: F) -> Result<(), TimerError>
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        self.pending = Some(schedule(self.delay, f)?);
        Ok(())
    }

    /// Drop the pending callback, if any.
    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.cancel();
        }
    }

    /// Whether a callback is still waiting to run.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
