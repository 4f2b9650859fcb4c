//! Selection modes and the toggle rule shared by listboxes.

use serde::{Deserialize, Serialize};

/// How many items a collection lets the user select.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Items can be actioned but never selected.
    #[default]
    None,
    /// At most one item is selected (radio style).
    Single,
    /// Any number of items can be selected (checkbox style).
    Multiple,
}

impl SelectionMode {
    /// Whether this mode allows selecting anything at all.
    pub fn allows_selection(self) -> bool {
        self != SelectionMode::None
    }
}

/// Compute the selection that results from toggling `key`.
///
/// `current` is the list of currently selected keys in collection order.
/// A selected key is removed when it is not the last one, or when it is the
/// last one and `allow_empty` is set. Otherwise single mode replaces the
/// selection with `key` and multiple mode appends it.
///
/// The caller owns the selection: the result is reported, not applied.
pub fn toggle_selection(
    current: &[String],
    key: &str,
    mode: SelectionMode,
    allow_empty: bool,
) -> Vec<String> {
    let is_selected = current.iter().any(|k| k == key);
    let can_remove = (allow_empty && current.len() == 1) || current.len() > 1;

    if is_selected && can_remove {
        return current.iter().filter(|k| *k != key).cloned().collect();
    }

    match mode {
        SelectionMode::None => current.to_vec(),
        SelectionMode::Single => vec![key.to_string()],
        SelectionMode::Multiple => {
            let mut next = current.to_vec();
            if !is_selected {
                next.push(key.to_string());
            }
            next
        }
    }
}
