//! Collection manager: active item, selection and type-ahead for a listbox.

use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::element::{ElementRef, same_element};
use crate::error::CollectionError;

use super::config::{
    ActionCallback, CollectionOptions, ManagerConfig, SelectionChangeCallback,
};
use super::node::{Node, RegisterArgs};
use super::search::{TypeAhead, text_matches};
use super::selection::{SelectionMode, toggle_selection};

/// Unique identifier for a collection manager instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollectionId(usize);

impl CollectionId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__collection_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Next,
    Previous,
    First,
    Last,
}

struct CollectionInner {
    /// Registration order.
    nodes: Vec<Node>,
    selection_mode: SelectionMode,
    selected_keys: HashSet<String>,
    disabled_keys: HashSet<String>,
    allow_empty: bool,
    on_action: Option<ActionCallback>,
    on_selection_change: Option<SelectionChangeCallback>,
    search: TypeAhead,
}

impl CollectionInner {
    fn new(options: CollectionOptions) -> Self {
        Self {
            nodes: Vec::new(),
            selection_mode: SelectionMode::None,
            selected_keys: HashSet::new(),
            disabled_keys: HashSet::new(),
            allow_empty: false,
            on_action: None,
            on_selection_change: None,
            search: TypeAhead::new(options.search_timeout()),
        }
    }

    fn index_of(&self, key: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.key() == key)
    }

    fn active_index(&self) -> Option<usize> {
        self.nodes.iter().position(Node::is_active)
    }

    fn selected_keys_in_order(&self) -> Vec<String> {
        self.nodes
            .iter()
            .filter(|n| n.is_selected())
            .map(|n| n.key().to_string())
            .collect()
    }

    /// Make the node at `index` the only active one. Returns its element so
    /// the caller can focus it once the lock is released.
    fn activate(&mut self, index: usize) -> ElementRef {
        for (i, node) in self.nodes.iter_mut().enumerate() {
            node.set_active(i == index);
        }
        let node = &self.nodes[index];
        log::trace!("Collection: activated '{}'", node.key());
        node.element().clone()
    }

    /// Find the eligible node a navigation intent lands on.
    ///
    /// Next and previous scan away from the active node, or from the first
    /// selected node when nothing is active. There is no wraparound.
    fn navigation_target(&self, direction: Direction) -> Option<usize> {
        let len = self.nodes.len();
        let anchor = self
            .active_index()
            .or_else(|| self.nodes.iter().position(Node::is_selected));
        let eligible = |i: &usize| self.nodes[*i].is_eligible();

        match direction {
            Direction::Next => {
                let start = anchor.map_or(0, |i| i + 1);
                (start..len).find(eligible)
            }
            Direction::Previous => {
                let end = anchor.unwrap_or(len);
                (0..end).rev().find(eligible)
            }
            Direction::First => (0..len).find(eligible),
            Direction::Last => (0..len).rev().find(eligible),
        }
    }
}

/// Central state for one listbox-like collection.
///
/// Tracks the registered nodes in order, which one is active (the keyboard
/// focus target), which are selected and disabled, and turns navigation,
/// type-ahead and click intents into state changes.
///
/// The selected and disabled key sets belong to the caller. Selecting a node
/// reports the new selection through `on_selection_change`; the caller feeds
/// it back with [`update`](Self::update).
///
/// Cloning yields another handle to the same collection. Callbacks and
/// element side effects run after internal locks are released, so they may
/// call back into the manager.
///
/// # Example
///
/// ```ignore
/// let manager = CollectionManager::new();
/// manager.register(row_a, RegisterArgs::new("a").text_value("Apple"))?;
/// manager.register(row_b, RegisterArgs::new("b").text_value("Banana"))?;
///
/// manager.update(
///     ManagerConfig::new(SelectionMode::Single)
///         .selected_keys(["a"])
///         .on_selection_change(|keys| println!("now selected: {keys:?}")),
/// );
///
/// manager.set_next_option_active(); // "b"
/// manager.select_active_node();     // clicks "b"
/// ```
#[derive(Clone)]
pub struct CollectionManager {
    id: CollectionId,
    inner: Arc<RwLock<CollectionInner>>,
    dirty: Arc<AtomicBool>,
}

impl CollectionManager {
    /// Create an empty manager with default options.
    pub fn new() -> Self {
        Self::with_options(CollectionOptions::default())
    }

    pub fn with_options(options: CollectionOptions) -> Self {
        Self {
            id: CollectionId::new(),
            inner: Arc::new(RwLock::new(CollectionInner::new(options))),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> CollectionId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------

    /// Append a node for `element` at the end of the collection.
    ///
    /// Keys and elements must be unique; a duplicate leaves the collection
    /// unchanged.
    pub fn register(&self, element: ElementRef, args: RegisterArgs) -> Result<(), CollectionError> {
        let RegisterArgs {
            key,
            text_value,
            is_selected,
            is_disabled,
        } = args;
        let text_value = text_value.unwrap_or_else(|| element.text_content());

        let Ok(mut guard) = self.inner.write() else {
            return Ok(());
        };
        if guard.index_of(&key).is_some() {
            log::warn!("Collection {}: duplicate key '{}' rejected", self.id, key);
            return Err(CollectionError::DuplicateKey(key));
        }
        if guard.nodes.iter().any(|n| same_element(n.element(), &element)) {
            log::warn!("Collection {}: element for '{}' already registered", self.id, key);
            return Err(CollectionError::DuplicateElement(key));
        }

        let is_selected = is_selected.unwrap_or_else(|| guard.selected_keys.contains(&key));
        let is_disabled = is_disabled.unwrap_or_else(|| guard.disabled_keys.contains(&key));
        log::debug!("Collection {}: registered '{}'", self.id, key);
        guard
            .nodes
            .push(Node::new(element, key, text_value, is_selected, is_disabled));
        self.dirty.store(true, Ordering::SeqCst);
        Ok(())
    }

    /// Remove the node registered for `element`, returning it.
    pub fn unregister(&self, element: &ElementRef) -> Option<Node> {
        let mut guard = self.inner.write().ok()?;
        let index = guard
            .nodes
            .iter()
            .position(|n| same_element(n.element(), element))?;
        let node = guard.nodes.remove(index);
        log::debug!("Collection {}: unregistered '{}'", self.id, node.key());
        self.dirty.store(true, Ordering::SeqCst);
        Some(node)
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    pub fn node(&self, key: &str) -> Option<Node> {
        self.inner.read().ok().and_then(|g| {
            let index = g.index_of(key)?;
            Some(g.nodes[index].clone())
        })
    }

    pub fn node_for_element(&self, element: &ElementRef) -> Option<Node> {
        self.inner.read().ok().and_then(|g| {
            g.nodes
                .iter()
                .find(|n| same_element(n.element(), element))
                .cloned()
        })
    }

    /// Mutate the stored node for `key` in place. Returns false if missing.
    pub fn update_node<F>(&self, key: &str, f: F) -> bool
    where
        F: FnOnce(&mut Node),
    {
        if let Ok(mut guard) = self.inner.write()
            && let Some(index) = guard.index_of(key)
        {
            f(&mut guard.nodes[index]);
            self.dirty.store(true, Ordering::SeqCst);
            return true;
        }
        false
    }

    /// Snapshot of all nodes in registration order.
    pub fn nodes(&self) -> Vec<Node> {
        self.inner
            .read()
            .map(|g| g.nodes.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.nodes.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Key of the active node, if any.
    pub fn active_key(&self) -> Option<String> {
        self.inner.read().ok().and_then(|g| {
            let index = g.active_index()?;
            Some(g.nodes[index].key().to_string())
        })
    }

    /// Keys of nodes flagged selected, in collection order.
    pub fn selected_keys(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| g.selected_keys_in_order())
            .unwrap_or_default()
    }

    pub fn selection_mode(&self) -> SelectionMode {
        self.inner
            .read()
            .map(|g| g.selection_mode)
            .unwrap_or_default()
    }

    pub fn is_key_selected(&self, key: &str) -> bool {
        self.inner
            .read()
            .map(|g| g.selected_keys.contains(key))
            .unwrap_or(false)
    }

    pub fn is_key_disabled(&self, key: &str) -> bool {
        self.inner
            .read()
            .map(|g| g.disabled_keys.contains(key))
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    /// Apply the caller's current configuration and recompute node flags.
    ///
    /// Cheap enough to call on every render. Callbacks are only replaced
    /// when the config provides them.
    pub fn update(&self, config: ManagerConfig) {
        let ManagerConfig {
            selection_mode,
            selected_keys,
            disabled_keys,
            allow_empty,
            on_action,
            on_selection_change,
        } = config;

        if let Ok(mut guard) = self.inner.write() {
            let inner = &mut *guard;
            inner.selection_mode = selection_mode;
            inner.allow_empty = allow_empty;
            if on_action.is_some() {
                inner.on_action = on_action;
            }
            if on_selection_change.is_some() {
                inner.on_selection_change = on_selection_change;
            }
            for node in &mut inner.nodes {
                node.set_selected(selected_keys.contains(node.key()));
                node.set_disabled(disabled_keys.contains(node.key()));
            }
            inner.selected_keys = selected_keys;
            inner.disabled_keys = disabled_keys;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Activation and selection
    // -------------------------------------------------------------------------

    /// Make the node for `key` the only active node and focus its element.
    ///
    /// Disabled or missing nodes are ignored.
    pub fn activate_node(&self, key: &str) {
        let element = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            match guard.index_of(key) {
                Some(index) if guard.nodes[index].is_eligible() => guard.activate(index),
                _ => return,
            }
        };
        self.dirty.store(true, Ordering::SeqCst);
        element.focus();
    }

    /// Click the element of the active node, if there is one.
    pub fn select_active_node(&self) {
        let element = self.inner.read().ok().and_then(|g| {
            let index = g.active_index()?;
            Some(g.nodes[index].element().clone())
        });
        if let Some(element) = element {
            element.click();
        }
    }

    /// Action the node for `key` and, when selection is enabled, activate it
    /// and report the toggled selection.
    ///
    /// `on_action` always runs; `on_selection_change` runs unless the
    /// selection mode is `None`. Disabled or missing nodes are ignored.
    pub fn select_node(&self, key: &str) {
        let (element, on_action, selection_change) = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            let Some(index) = guard.index_of(key) else {
                return;
            };
            if !guard.nodes[index].is_eligible() {
                log::trace!("Collection {}: ignored select of disabled '{}'", self.id, key);
                return;
            }

            let mode = guard.selection_mode;
            let element = mode.allows_selection().then(|| guard.activate(index));
            let selection_change = if mode.allows_selection() {
                let current = guard.selected_keys_in_order();
                let next = toggle_selection(&current, key, mode, guard.allow_empty);
                guard.on_selection_change.clone().map(|cb| (cb, next))
            } else {
                None
            };
            (element, guard.on_action.clone(), selection_change)
        };

        self.dirty.store(true, Ordering::SeqCst);
        if let Some(element) = element {
            element.focus();
        }
        if let Some(on_action) = on_action {
            on_action(key);
        }
        if let Some((on_selection_change, next)) = selection_change {
            log::trace!("Collection {}: selection -> {:?}", self.id, next);
            on_selection_change(next);
        }
    }

    // -------------------------------------------------------------------------
    // Keyboard navigation
    // -------------------------------------------------------------------------

    pub fn set_next_option_active(&self) {
        self.navigate(Direction::Next);
    }

    pub fn set_previous_option_active(&self) {
        self.navigate(Direction::Previous);
    }

    pub fn set_first_option_active(&self) {
        self.navigate(Direction::First);
    }

    pub fn set_last_option_active(&self) {
        self.navigate(Direction::Last);
    }

    fn navigate(&self, direction: Direction) {
        let element = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            match guard.navigation_target(direction) {
                Some(index) => guard.activate(index),
                None => return,
            }
        };
        self.dirty.store(true, Ordering::SeqCst);
        element.focus();
    }

    // -------------------------------------------------------------------------
    // Type-ahead
    // -------------------------------------------------------------------------

    /// Add `ch` to the type-ahead buffer and activate the first enabled node
    /// whose text starts with the buffer.
    ///
    /// The buffer resets once no key has been typed for the search timeout.
    pub fn search(&self, ch: char) {
        let element = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            let generation = guard.search.push(ch);

            let inner = Arc::downgrade(&self.inner);
            let reset = guard.search.debounce.call(move || {
                if let Some(inner) = inner.upgrade()
                    && let Ok(mut guard) = inner.write()
                    && guard.search.clear_if_current(generation)
                {
                    log::trace!("Collection: type-ahead buffer reset");
                }
            });
            if let Err(err) = reset {
                log::trace!("Collection {}: {}, buffer expires lazily", self.id, err);
            }

            let query = guard.search.query().to_string();
            log::trace!("Collection {}: type-ahead '{}'", self.id, query);
            let target = guard
                .nodes
                .iter()
                .position(|n| n.is_eligible() && text_matches(n.text_value(), &query));
            match target {
                Some(index) => guard.activate(index),
                None => return,
            }
        };
        self.dirty.store(true, Ordering::SeqCst);
        element.focus();
    }

    /// Characters typed so far in the current type-ahead run.
    pub fn search_buffer(&self) -> String {
        self.inner
            .read()
            .map(|g| g.search.query().to_string())
            .unwrap_or_default()
    }

    /// Drop the type-ahead buffer immediately.
    pub fn clear_search(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.search.clear();
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the collection changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Default for CollectionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CollectionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionManager")
            .field("id", &self.id)
            .field("nodes", &self.nodes())
            .finish()
    }
}
