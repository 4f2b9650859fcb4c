pub mod collection;
pub mod element;
pub mod error;
pub mod keyboard;
pub mod notification;
pub mod timer;

pub mod prelude {
    pub use crate::collection::{
        CollectionManager, CollectionOptions, ManagerConfig, Node, RegisterArgs, SelectionMode,
    };
    pub use crate::element::{ElementHandle, ElementRef};
    pub use crate::error::{CollectionError, TimerError};
    pub use crate::keyboard::{EventResult, ListboxIntent, handle_key};
    pub use crate::notification::{
        Appearance, Notification, NotificationDefaults, NotificationId, NotificationOptions,
        Notifications,
    };
    pub use crate::timer::{Debouncer, DismissTimer, TimerState};
}
