//! Listbox-style collections: registration, active item, selection and
//! type-ahead search.
//!
//! Rendered items register themselves with a [`CollectionManager`] when they
//! mount and unregister when they unmount. The owning widget forwards
//! keyboard and mouse input to the manager and re-renders from the node
//! flags it exposes.
//!
//! - *Active* is the single item keyboard focus sits on.
//! - *Selected* mirrors the caller-owned key set passed to
//!   [`CollectionManager::update`].
//! - *Disabled* items are skipped by navigation, search and selection.

mod config;
mod manager;
mod node;
mod search;
mod selection;

pub use config::{
    ActionCallback, CollectionOptions, DEFAULT_SEARCH_TIMEOUT, ManagerConfig,
    SelectionChangeCallback,
};
pub use manager::{CollectionId, CollectionManager};
pub use node::{Node, RegisterArgs};
pub use selection::{SelectionMode, toggle_selection};
