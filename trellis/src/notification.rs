//! Notification queue with auto-dismissal.
//!
//! Each notification owns a [`DismissTimer`] unless it is preserved. The
//! timer removes the notification when it expires; hovering the card pauses
//! it.
//!
//! # Example
//!
//! ```ignore
//! let notifications = Notifications::new();
//!
//! let id = notifications.add("File saved", NotificationOptions::new())?;
//! notifications.add(
//!     "Connection lost",
//!     NotificationOptions::new()
//!         .appearance(Appearance::Danger)
//!         .preserve(),
//! )?;
//!
//! // Pointer entered / left the card
//! notifications.pause(id);
//! notifications.resume(id)?;
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TimerError;
use crate::timer::DismissTimer;

/// Default display time for notifications.
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_secs(5);

/// Visual tone of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

/// Unique identifier of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(Uuid);

impl NotificationId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Defaults applied when [`NotificationOptions`] leaves a field unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationDefaults {
    pub duration_ms: u64,
    pub appearance: Appearance,
    pub allow_closing: bool,
}

impl NotificationDefaults {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for NotificationDefaults {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_NOTIFICATION_DURATION.as_millis() as u64,
            appearance: Appearance::Info,
            allow_closing: true,
        }
    }
}

/// Per-notification options.
#[derive(Debug, Clone, Default)]
pub struct NotificationOptions {
    pub appearance: Option<Appearance>,
    pub duration: Option<Duration>,
    /// Never auto-dismiss.
    pub preserve: bool,
    /// Whether the card shows a close button.
    pub allow_closing: Option<bool>,
}

impl NotificationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = Some(appearance);
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn preserve(mut self) -> Self {
        self.preserve = true;
        self
    }

    pub fn allow_closing(mut self, allow: bool) -> Self {
        self.allow_closing = Some(allow);
        self
    }
}

/// A displayed notification.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    message: String,
    appearance: Appearance,
    allow_closing: bool,
    timer: Option<DismissTimer>,
}

impl Notification {
    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    pub fn allow_closing(&self) -> bool {
        self.allow_closing
    }

    /// Preserved notifications have no timer.
    pub fn timer(&self) -> Option<&DismissTimer> {
        self.timer.as_ref()
    }

    /// Display time left, `None` for preserved notifications.
    pub fn remaining(&self) -> Option<Duration> {
        self.timer.as_ref().map(DismissTimer::remaining)
    }
}

/// The notifications currently on screen, oldest first.
///
/// Cloning yields another handle to the same queue.
#[derive(Clone)]
pub struct Notifications {
    inner: Arc<RwLock<Vec<Notification>>>,
    defaults: NotificationDefaults,
    dirty: Arc<AtomicBool>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::with_defaults(NotificationDefaults::default())
    }

    pub fn with_defaults(defaults: NotificationDefaults) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Vec::new())),
            defaults,
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn defaults(&self) -> &NotificationDefaults {
        &self.defaults
    }

    /// Show a notification.
    ///
    /// Unless preserved, it is removed once its duration has run out. Must
    /// be called from within a Tokio runtime for timed notifications.
    pub fn add(
        &self,
        message: impl Into<String>,
        options: NotificationOptions,
    ) -> Result<NotificationId, TimerError> {
        let id = NotificationId::new();
        let duration = options.duration.unwrap_or(self.defaults.duration());

        // Held across timer creation so an instant expiry waits for the push.
        let Ok(mut guard) = self.inner.write() else {
            return Ok(id);
        };
        let timer = if options.preserve {
            None
        } else {
            let queue = Arc::downgrade(&self.inner);
            let dirty = Arc::clone(&self.dirty);
            Some(DismissTimer::new(duration, move || {
                if let Some(queue) = queue.upgrade()
                    && let Ok(mut guard) = queue.write()
                {
                    guard.retain(|n| n.id != id);
                    dirty.store(true, Ordering::SeqCst);
                    log::debug!("Notifications: {} expired", id);
                }
            })?)
        };

        guard.push(Notification {
            id,
            message: message.into(),
            appearance: options.appearance.unwrap_or(self.defaults.appearance),
            allow_closing: options.allow_closing.unwrap_or(self.defaults.allow_closing),
            timer,
        });
        self.dirty.store(true, Ordering::SeqCst);
        log::debug!("Notifications: added {}", id);
        Ok(id)
    }

    /// Dismiss a notification before its timer runs out.
    pub fn remove(&self, id: NotificationId) -> bool {
        let removed = {
            let Ok(mut guard) = self.inner.write() else {
                return false;
            };
            let Some(index) = guard.iter().position(|n| n.id == id) else {
                return false;
            };
            guard.remove(index)
        };
        if let Some(timer) = &removed.timer {
            timer.clear();
        }
        self.dirty.store(true, Ordering::SeqCst);
        log::debug!("Notifications: removed {}", id);
        true
    }

    /// Dismiss every notification.
    pub fn remove_all(&self) {
        let removed = self
            .inner
            .write()
            .map(|mut g| std::mem::take(&mut *g))
            .unwrap_or_default();
        for timer in removed.iter().filter_map(Notification::timer) {
            timer.clear();
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Pause auto-dismissal, e.g. while the pointer is over the card.
    ///
    /// Returns false if the notification is gone or preserved.
    pub fn pause(&self, id: NotificationId) -> bool {
        match self.timer_for(id) {
            Some(timer) => {
                timer.pause();
                true
            }
            None => false,
        }
    }

    /// Resume auto-dismissal after [`pause`](Self::pause).
    pub fn resume(&self, id: NotificationId) -> Result<bool, TimerError> {
        match self.timer_for(id) {
            Some(timer) => {
                timer.resume()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn get(&self, id: NotificationId) -> Option<Notification> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.iter().find(|n| n.id == id).cloned())
    }

    /// Snapshot of all notifications, oldest first.
    pub fn all(&self) -> Vec<Notification> {
        self.inner.read().map(|g| g.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    fn timer_for(&self, id: NotificationId) -> Option<DismissTimer> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.iter().find(|n| n.id == id)?.timer.clone())
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Notifications {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifications")
            .field("defaults", &self.defaults)
            .field("notifications", &self.all())
            .finish()
    }
}
