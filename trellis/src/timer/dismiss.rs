//! Pausable countdown that fires a callback once.
//!
//! ```text
//! Running ⇄ Paused
//!    │        │
//!    ▼        ▼
//!  Fired   Cleared      (terminal)
//! ```
//!
//! Remaining time only drains while running, so a notification hovered
//! for ten seconds still gets its full display time afterwards.

use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::Instant;

use crate::error::TimerError;

use super::schedule::{ScheduledTask, schedule};

/// Lifecycle state of a [`DismissTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Running,
    Paused,
    /// Expired naturally; the callback ran.
    Fired,
    /// Stopped from outside; the callback never runs.
    Cleared,
}

impl TimerState {
    /// Fired and Cleared timers never run again.
    pub fn is_terminal(self) -> bool {
        matches!(self, TimerState::Fired | TimerState::Cleared)
    }
}

type FinishCallback = Box<dyn FnOnce() + Send>;

struct TimerInner {
    state: TimerState,
    /// Time left as of `started_at`.
    remaining: Duration,
    started_at: Instant,
    /// Bumped on every pause/resume/clear so a stale wake-up can tell it lost.
    generation: u64,
    task: Option<ScheduledTask>,
    on_finish: Option<FinishCallback>,
}

impl TimerInner {
    fn live_remaining(&self) -> Duration {
        match self.state {
            TimerState::Running => self.remaining.saturating_sub(self.started_at.elapsed()),
            TimerState::Paused | TimerState::Cleared => self.remaining,
            TimerState::Fired => Duration::ZERO,
        }
    }

    fn cancel_task(&mut self) {
        self.generation += 1;
        if let Some(task) = self.task.take() {
            task.cancel();
        }
    }
}

/// Countdown timer with pause and resume.
///
/// Cloning yields another handle to the same timer. The timer keeps
/// running even when every handle is dropped.
///
/// # Example
///
/// ```ignore
/// let timer = DismissTimer::new(Duration::from_secs(5), move || {
///     notifications.remove(id);
/// })?;
///
/// // Mouse entered the notification card
/// timer.pause();
/// // Mouse left
/// timer.resume()?;
/// ```
#[derive(Clone)]
pub struct DismissTimer {
    inner: Arc<Mutex<TimerInner>>,
}

impl DismissTimer {
    /// Start a timer that calls `on_finish` after `duration` of running time.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new<F>(duration: Duration, on_finish: F) -> Result<Self, TimerError>
    where
        F: FnOnce() + Send + 'static,
    {
        let timer = Self {
            inner: Arc::new(Mutex::new(TimerInner {
                state: TimerState::Paused,
                remaining: duration,
                started_at: Instant::now(),
                generation: 0,
                task: None,
                on_finish: Some(Box::new(on_finish)),
            })),
        };
        if let Ok(mut guard) = timer.inner.lock() {
            timer.start_locked(&mut guard)?;
        }
        log::debug!("DismissTimer: started for {:?}", duration);
        Ok(timer)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> TimerState {
        self.inner
            .lock()
            .map(|g| g.state)
            .unwrap_or(TimerState::Cleared)
    }

    pub fn is_running(&self) -> bool {
        self.state() == TimerState::Running
    }

    /// Running time still needed before the callback fires.
    pub fn remaining(&self) -> Duration {
        self.inner
            .lock()
            .map(|g| g.live_remaining())
            .unwrap_or(Duration::ZERO)
    }

    /// Stop the countdown, keeping the time left. No-op unless running.
    pub fn pause(&self) {
        if let Ok(mut guard) = self.inner.lock()
            && guard.state == TimerState::Running
        {
            guard.remaining = guard.live_remaining();
            guard.cancel_task();
            guard.state = TimerState::Paused;
            log::debug!("DismissTimer: paused with {:?} left", guard.remaining);
        }
    }

    /// Continue counting down from where `pause` left off.
    ///
    /// No-op when running, fired or cleared.
    pub fn resume(&self) -> Result<(), TimerError> {
        if let Ok(mut guard) = self.inner.lock()
            && guard.state == TimerState::Paused
        {
            self.start_locked(&mut guard)?;
            log::debug!("DismissTimer: resumed with {:?} left", guard.remaining);
        }
        Ok(())
    }

    /// Stop for good without running the callback.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.lock()
            && !guard.state.is_terminal()
        {
            guard.remaining = guard.live_remaining();
            guard.cancel_task();
            guard.state = TimerState::Cleared;
            guard.on_finish = None;
            log::debug!("DismissTimer: cleared");
        }
    }

    fn start_locked(&self, guard: &mut TimerInner) -> Result<(), TimerError> {
        guard.generation += 1;
        let generation = guard.generation;
        let inner = Arc::clone(&self.inner);
        let task = schedule(guard.remaining, move || Self::expire(&inner, generation))?;
        guard.task = Some(task);
        guard.started_at = Instant::now();
        guard.state = TimerState::Running;
        Ok(())
    }

    fn expire(inner: &Mutex<TimerInner>, generation: u64) {
        let callback = {
            let Ok(mut guard) = inner.lock() else {
                return;
            };
            if guard.state != TimerState::Running || guard.generation != generation {
                return;
            }
            guard.state = TimerState::Fired;
            guard.remaining = Duration::ZERO;
            guard.task = None;
            guard.on_finish.take()
        };
        log::debug!("DismissTimer: fired");
        // Lock released: the callback may use this timer.
        if let Some(on_finish) = callback {
            on_finish();
        }
    }
}

impl fmt::Debug for DismissTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DismissTimer")
            .field("state", &self.state())
            .field("remaining", &self.remaining())
            .finish()
    }
}
