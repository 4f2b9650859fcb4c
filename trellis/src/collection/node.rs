//! Bookkeeping record for one registered list item.

use std::fmt;

use crate::element::ElementRef;

/// A registered, selectable list item.
///
/// Nodes are owned by the [`CollectionManager`]; callers get clones from
/// lookups and mutate the stored node through
/// [`CollectionManager::update_node`].
///
/// [`CollectionManager`]: super::CollectionManager
/// [`CollectionManager::update_node`]: super::CollectionManager::update_node
#[derive(Clone)]
pub struct Node {
    element: ElementRef,
    key: String,
    text_value: String,
    is_selected: bool,
    is_disabled: bool,
    is_active: bool,
}

impl Node {
    pub(super) fn new(
        element: ElementRef,
        key: String,
        text_value: String,
        is_selected: bool,
        is_disabled: bool,
    ) -> Self {
        Self {
            element,
            key,
            text_value,
            is_selected,
            is_disabled,
            is_active: false,
        }
    }

    /// The element this node stands for.
    pub fn element(&self) -> &ElementRef {
        &self.element
    }

    /// Caller-supplied unique key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Text matched by type-ahead search.
    pub fn text_value(&self) -> &str {
        &self.text_value
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    pub fn is_disabled(&self) -> bool {
        self.is_disabled
    }

    /// Whether this node is the keyboard/mouse focus target of the list.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn set_text_value(&mut self, text: impl Into<String>) {
        self.text_value = text.into();
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.is_selected = selected;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.is_disabled = disabled;
    }

    pub(super) fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    /// Navigation and search may only land on enabled nodes.
    pub(super) fn is_eligible(&self) -> bool {
        !self.is_disabled
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("text_value", &self.text_value)
            .field("is_selected", &self.is_selected)
            .field("is_disabled", &self.is_disabled)
            .field("is_active", &self.is_active)
            .finish_non_exhaustive()
    }
}

/// Arguments for [`CollectionManager::register`].
///
/// Flags left unset are derived from the manager's current selected and
/// disabled key sets; an unset text value comes from the element's text
/// content.
///
/// [`CollectionManager::register`]: super::CollectionManager::register
#[derive(Debug, Clone, Default)]
pub struct RegisterArgs {
    pub key: String,
    pub text_value: Option<String>,
    pub is_selected: Option<bool>,
    pub is_disabled: Option<bool>,
}

impl RegisterArgs {
    /// Arguments for a node with the given key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    /// Set the text used for type-ahead search.
    pub fn text_value(mut self, text: impl Into<String>) -> Self {
        self.text_value = Some(text.into());
        self
    }

    /// Force the initial selected flag.
    pub fn selected(mut self, selected: bool) -> Self {
        self.is_selected = Some(selected);
        self
    }

    /// Force the initial disabled flag.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = Some(disabled);
        self
    }
}
