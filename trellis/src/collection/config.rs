//! Configuration for collection managers.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::selection::SelectionMode;

/// Called with the key of an actioned node.
pub type ActionCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Called with the complete selection that should become current.
pub type SelectionChangeCallback = Arc<dyn Fn(Vec<String>) + Send + Sync>;

/// Default delay after the last keystroke before the search buffer resets.
pub const DEFAULT_SEARCH_TIMEOUT: Duration = Duration::from_millis(500);

/// Per-render configuration passed to [`CollectionManager::update`].
///
/// The selected and disabled key sets are owned by the caller and are the
/// source of truth: every `update` recomputes the node flags from them.
///
/// [`CollectionManager::update`]: super::CollectionManager::update
#[derive(Clone, Default)]
pub struct ManagerConfig {
    pub selection_mode: SelectionMode,
    pub selected_keys: HashSet<String>,
    pub disabled_keys: HashSet<String>,
    /// Allow deselecting the last selected item.
    pub allow_empty: bool,
    /// Replaces the current action callback when set.
    pub on_action: Option<ActionCallback>,
    /// Replaces the current selection callback when set.
    pub on_selection_change: Option<SelectionChangeCallback>,
}

impl ManagerConfig {
    pub fn new(selection_mode: SelectionMode) -> Self {
        Self {
            selection_mode,
            ..Default::default()
        }
    }

    pub fn selected_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn disabled_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disabled_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    pub fn on_action(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_action = Some(Arc::new(f));
        self
    }

    pub fn on_selection_change(mut self, f: impl Fn(Vec<String>) + Send + Sync + 'static) -> Self {
        self.on_selection_change = Some(Arc::new(f));
        self
    }
}

impl fmt::Debug for ManagerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagerConfig")
            .field("selection_mode", &self.selection_mode)
            .field("selected_keys", &self.selected_keys)
            .field("disabled_keys", &self.disabled_keys)
            .field("allow_empty", &self.allow_empty)
            .field("on_action", &self.on_action.is_some())
            .field("on_selection_change", &self.on_selection_change.is_some())
            .finish()
    }
}

/// Construction-time options for a collection manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionOptions {
    /// Milliseconds of keyboard silence after which type-ahead starts over.
    pub search_timeout_ms: u64,
}

impl CollectionOptions {
    pub fn search_timeout(&self) -> Duration {
        Duration::from_millis(self.search_timeout_ms)
    }
}

impl Default for CollectionOptions {
    fn default() -> Self {
        Self {
            search_timeout_ms: DEFAULT_SEARCH_TIMEOUT.as_millis() as u64,
        }
    }
}
