use std::time::Duration;

use trellis::collection::{CollectionOptions, DEFAULT_SEARCH_TIMEOUT, SelectionMode};
use trellis::notification::{Appearance, NotificationDefaults};

#[test]
fn test_selection_mode_names() {
    let mode: SelectionMode = serde_json::from_str("\"multiple\"").unwrap();
    assert_eq!(mode, SelectionMode::Multiple);
    assert_eq!(serde_json::to_string(&SelectionMode::None).unwrap(), "\"none\"");
    assert_eq!(SelectionMode::default(), SelectionMode::None);
    assert!(!SelectionMode::None.allows_selection());
    assert!(SelectionMode::Single.allows_selection());
}

#[test]
fn test_collection_options_defaults() {
    let options: CollectionOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, CollectionOptions::default());
    assert_eq!(options.search_timeout(), DEFAULT_SEARCH_TIMEOUT);
    assert_eq!(options.search_timeout(), Duration::from_millis(500));
}

#[test]
fn test_notification_defaults_partial() {
    let defaults: NotificationDefaults =
        serde_json::from_str(r#"{ "appearance": "danger" }"#).unwrap();

    assert_eq!(defaults.appearance, Appearance::Danger);
    assert_eq!(defaults.duration(), Duration::from_secs(5));
    assert!(defaults.allow_closing);
}

#[test]
fn test_unknown_appearance_is_rejected() {
    let result: Result<Appearance, _> = serde_json::from_str("\"loud\"");
    assert!(result.is_err());
}
