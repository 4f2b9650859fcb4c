//! Error types.

use thiserror::Error;

/// Errors returned when registering nodes with a [`CollectionManager`].
///
/// [`CollectionManager`]: crate::collection::CollectionManager
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// A node with this key is already registered.
    #[error("a node with key '{0}' is already registered")]
    DuplicateKey(String),
    /// The element reference is already registered (under another key).
    #[error("element for key '{0}' is already registered")]
    DuplicateElement(String),
}

/// Errors returned when scheduling timers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    /// Scheduling needs a running Tokio runtime.
    #[error("no Tokio runtime is available to schedule the timer")]
    NoRuntime,
}
