//! The element capability the collection manager drives.
//!
//! The manager never owns the rendered element. It only keeps a shared
//! reference so it can move focus, trigger clicks and read a default
//! text value for type-ahead search.

use std::sync::Arc;

/// Imperative side effects the manager needs from a rendered list item.
///
/// # Example
///
/// ```ignore
/// struct OptionRow {
///     label: String,
/// }
///
/// impl ElementHandle for OptionRow {
///     fn focus(&self) { /* move terminal focus */ }
///     fn click(&self) { /* dispatch a click */ }
///     fn text_content(&self) -> String {
///         self.label.clone()
///     }
/// }
/// ```
pub trait ElementHandle: Send + Sync {
    /// Move input focus to this element.
    fn focus(&self);

    /// Dispatch a click on this element.
    fn click(&self);

    /// Rendered text, used when a node is registered without a text value.
    fn text_content(&self) -> String {
        String::new()
    }
}

/// Shared reference to a rendered element.
pub type ElementRef = Arc<dyn ElementHandle>;

/// Identity comparison of two element references.
pub fn same_element(a: &ElementRef, b: &ElementRef) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
