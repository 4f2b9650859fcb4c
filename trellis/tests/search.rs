mod common;

use std::time::Duration;

use tokio::time::sleep;
use trellis::collection::{CollectionManager, CollectionOptions, ManagerConfig, SelectionMode};

use common::populate;

fn fruit() -> CollectionManager {
    let manager = CollectionManager::new();
    populate(
        &manager,
        &[
            ("apple", "Apple"),
            ("abacus", "Abacus"),
            ("banana", "Banana"),
            ("blueberry", "Blueberry"),
            ("cherry", "  Cherry "),
        ],
    );
    manager
}

#[tokio::test(start_paused = true)]
async fn test_search_accumulates_within_timeout() {
    let manager = fruit();

    manager.search('a');
    assert_eq!(manager.active_key().as_deref(), Some("apple"));

    sleep(Duration::from_millis(100)).await;
    manager.search('b');
    assert_eq!(manager.active_key().as_deref(), Some("abacus"));
    assert_eq!(manager.search_buffer(), "ab");
}

#[tokio::test(start_paused = true)]
async fn test_search_buffer_resets_after_timeout() {
    let manager = fruit();

    manager.search('a');
    sleep(Duration::from_millis(600)).await;
    assert_eq!(manager.search_buffer(), "");

    manager.search('b');
    assert_eq!(manager.active_key().as_deref(), Some("banana"));
    assert_eq!(manager.search_buffer(), "b");
}

#[tokio::test(start_paused = true)]
async fn test_each_keystroke_restarts_timeout() {
    let manager = fruit();

    manager.search('a');
    sleep(Duration::from_millis(400)).await;
    manager.search('b');
    sleep(Duration::from_millis(400)).await;

    // 800ms since the first key, 400ms since the last
    assert_eq!(manager.search_buffer(), "ab");
    manager.search('a');
    assert_eq!(manager.search_buffer(), "aba");
    assert_eq!(manager.active_key().as_deref(), Some("abacus"));
}

#[tokio::test(start_paused = true)]
async fn test_search_is_case_insensitive_and_trimmed() {
    let manager = fruit();

    manager.search('C');
    manager.search('H');

    assert_eq!(manager.active_key().as_deref(), Some("cherry"));
}

#[tokio::test(start_paused = true)]
async fn test_search_skips_disabled_nodes() {
    let manager = fruit();
    manager.update(ManagerConfig::new(SelectionMode::Single).disabled_keys(["banana"]));

    manager.search('b');

    assert_eq!(manager.active_key().as_deref(), Some("blueberry"));
}

#[tokio::test(start_paused = true)]
async fn test_search_without_match_keeps_active_node() {
    let manager = fruit();
    manager.activate_node("banana");

    manager.search('z');

    assert_eq!(manager.active_key().as_deref(), Some("banana"));
    assert_eq!(manager.search_buffer(), "z");
}

#[tokio::test(start_paused = true)]
async fn test_search_timeout_is_configurable() {
    let manager = CollectionManager::with_options(CollectionOptions {
        search_timeout_ms: 1000,
    });
    populate(&manager, &[("apple", "Apple"), ("abacus", "Abacus")]);

    manager.search('a');
    sleep(Duration::from_millis(700)).await;
    manager.search('b');

    assert_eq!(manager.active_key().as_deref(), Some("abacus"));
}

#[tokio::test(start_paused = true)]
async fn test_clear_search() {
    let manager = fruit();
    manager.search('a');
    manager.search('b');

    manager.clear_search();
    manager.search('b');

    assert_eq!(manager.active_key().as_deref(), Some("banana"));
}

#[test]
fn test_search_works_without_runtime() {
    let manager = fruit();

    manager.search('b');
    manager.search('l');

    assert_eq!(manager.active_key().as_deref(), Some("blueberry"));
}
