//! Cancelable "run this after a delay" primitive.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use crate::error::TimerError;

/// A callback waiting to run on the Tokio runtime.
///
/// Dropping the handle does not cancel the callback.
#[derive(Debug)]
pub struct ScheduledTask {
    handle: JoinHandle<()>,
    deadline: Instant,
}

impl ScheduledTask {
    /// Stop the callback from running if it has not started yet.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Whether the callback ran or was cancelled.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// When the callback is due.
    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}

/// Run `f` once, `delay` from now, on the current Tokio runtime.
///
/// The deadline is fixed at call time, not when the task is first polled.
pub fn schedule<F>(delay: Duration, f: F) -> Result<ScheduledTask, TimerError>
where
    F: FnOnce() + Send + 'static,
{
    let runtime = Handle::try_current().map_err(|_| TimerError::NoRuntime)?;
    let deadline = Instant::now() + delay;
    let handle = runtime.spawn(async move {
        time::sleep_until(deadline).await;
        f();
    });
    Ok(ScheduledTask { handle, deadline })
}
