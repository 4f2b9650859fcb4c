#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use trellis::collection::{CollectionManager, RegisterArgs};
use trellis::element::{ElementHandle, ElementRef};

/// Element double that counts focus and click calls.
#[derive(Debug, Default)]
pub struct TestElement {
    pub label: String,
    focused: AtomicUsize,
    clicked: AtomicUsize,
}

impl TestElement {
    pub fn new(label: &str) -> Arc<Self> {
        Arc::new(Self {
            label: label.to_string(),
            ..Default::default()
        })
    }

    pub fn focus_count(&self) -> usize {
        self.focused.load(Ordering::SeqCst)
    }

    pub fn click_count(&self) -> usize {
        self.clicked.load(Ordering::SeqCst)
    }
}

impl ElementHandle for TestElement {
    fn focus(&self) {
        self.focused.fetch_add(1, Ordering::SeqCst);
    }

    fn click(&self) {
        self.clicked.fetch_add(1, Ordering::SeqCst);
    }

    fn text_content(&self) -> String {
        self.label.clone()
    }
}

pub fn element_ref(element: &Arc<TestElement>) -> ElementRef {
    element.clone()
}

/// Register one node per `(key, label)` pair, returning the elements in order.
pub fn populate(manager: &CollectionManager, items: &[(&str, &str)]) -> Vec<Arc<TestElement>> {
    items
        .iter()
        .map(|(key, label)| {
            let element = TestElement::new(label);
            manager
                .register(element_ref(&element), RegisterArgs::new(*key))
                .expect("unique key");
            element
        })
        .collect()
}

/// Shared log for callback assertions.
pub fn recorder<T: Send + 'static>() -> Arc<Mutex<Vec<T>>> {
    Arc::new(Mutex::new(Vec::new()))
}
