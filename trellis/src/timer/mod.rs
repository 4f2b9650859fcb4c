//! Timers driven by the Tokio clock.

mod debounce;
mod dismiss;
mod schedule;

pub use debounce::Debouncer;
pub use dismiss::{DismissTimer, TimerState};
pub use schedule::{ScheduledTask, schedule};
