//! Type-ahead search buffer.

use std::time::Duration;

use tokio::time::Instant;

use crate::timer::Debouncer;

/// Characters typed in quick succession, matched against node text.
///
/// The buffer is reset by a debounced callback once typing stops. When no
/// runtime is around to run that callback, a stale buffer is dropped on the
/// next keystroke instead.
#[derive(Debug)]
pub(super) struct TypeAhead {
    buffer: String,
    last_input: Option<Instant>,
    generation: u64,
    pub(super) debounce: Debouncer,
}

impl TypeAhead {
    pub(super) fn new(timeout: Duration) -> Self {
        Self {
            buffer: String::new(),
            last_input: None,
            generation: 0,
            debounce: Debouncer::new(timeout),
        }
    }

    /// Append a keystroke and return its generation.
    pub(super) fn push(&mut self, ch: char) -> u64 {
        if self.is_stale() {
            self.buffer.clear();
        }
        self.buffer.extend(ch.to_lowercase());
        self.last_input = Some(Instant::now());
        self.generation += 1;
        self.generation
    }

    /// Current query, empty once typing has paused for the timeout.
    pub(super) fn query(&self) -> &str {
        if self.is_stale() { "" } else { self.buffer.as_str() }
    }

    pub(super) fn clear(&mut self) {
        self.buffer.clear();
        self.last_input = None;
        self.debounce.cancel();
    }

    /// Clear only if no keystroke arrived after `generation`.
    pub(super) fn clear_if_current(&mut self, generation: u64) -> bool {
        if self.generation != generation {
            return false;
        }
        self.buffer.clear();
        self.last_input = None;
        true
    }

    fn is_stale(&self) -> bool {
        self.last_input
            .is_some_and(|at| at.elapsed() >= self.debounce.delay())
    }
}

/// Case-insensitive prefix match of trimmed node text against a lowercase query.
pub(super) fn text_matches(text: &str, query: &str) -> bool {
    !query.is_empty() && text.trim().to_lowercase().starts_with(query)
}
