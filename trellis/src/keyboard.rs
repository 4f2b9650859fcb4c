//! Keyboard handling for listboxes.
//!
//! Translates terminal key events into collection intents so a listbox
//! widget only has to forward the keys it receives while focused.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::collection::CollectionManager;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// What a key press asks the listbox to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListboxIntent {
    Next,
    Previous,
    First,
    Last,
    /// Click the active option.
    SelectActive,
    /// Type-ahead with this character.
    Search(char),
}

/// Map a key event to a listbox intent.
///
/// `searching` tells whether a type-ahead run is in progress; Space then
/// continues the search instead of selecting.
pub fn intent_for_key(key: &KeyEvent, searching: bool) -> Option<ListboxIntent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Down => Some(ListboxIntent::Next),
        KeyCode::Up => Some(ListboxIntent::Previous),
        KeyCode::Home | KeyCode::PageUp => Some(ListboxIntent::First),
        KeyCode::End | KeyCode::PageDown => Some(ListboxIntent::Last),
        KeyCode::Enter => Some(ListboxIntent::SelectActive),
        KeyCode::Char(' ') if !searching => Some(ListboxIntent::SelectActive),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(ListboxIntent::Search(c))
        }
        _ => None,
    }
}

/// Apply a key event to `manager`.
pub fn handle_key(manager: &CollectionManager, key: &KeyEvent) -> EventResult {
    let searching = !manager.search_buffer().is_empty();
    let Some(intent) = intent_for_key(key, searching) else {
        return EventResult::Ignored;
    };

    log::trace!("Listbox {}: {:?}", manager.id(), intent);
    match intent {
        ListboxIntent::Next => manager.set_next_option_active(),
        ListboxIntent::Previous => manager.set_previous_option_active(),
        ListboxIntent::First => manager.set_first_option_active(),
        ListboxIntent::Last => manager.set_last_option_active(),
        ListboxIntent::SelectActive => manager.select_active_node(),
        ListboxIntent::Search(c) => manager.search(c),
    }
    EventResult::Consumed
}
