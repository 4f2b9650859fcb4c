//! Show a few notifications and watch them expire.
//!
//! Logs go to `notifications.log`.

use std::fs::File;
use std::time::Duration;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use trellis::prelude::*;

fn print_queue(notifications: &Notifications) {
    let shown: Vec<_> = notifications
        .all()
        .iter()
        .map(|n| format!("{:?}: {} ({:?} left)", n.appearance(), n.message(), n.remaining()))
        .collect();
    println!("{shown:#?}");
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("notifications.log")?,
    )?;

    let notifications = Notifications::with_defaults(NotificationDefaults {
        duration_ms: 1500,
        ..Default::default()
    });

    notifications.add("Saved draft", NotificationOptions::new())?;
    let hovered = notifications.add(
        "Upload finished",
        NotificationOptions::new().appearance(Appearance::Success),
    )?;
    notifications.add(
        "Server unreachable",
        NotificationOptions::new()
            .appearance(Appearance::Danger)
            .preserve(),
    )?;

    // Pointer rests on the second card for a while.
    notifications.pause(hovered);
    tokio::time::sleep(Duration::from_secs(2)).await;
    print_queue(&notifications);

    notifications.resume(hovered)?;
    tokio::time::sleep(Duration::from_secs(2)).await;
    print_queue(&notifications);

    notifications.remove_all();
    println!("cleared: {}", notifications.is_empty());
    Ok(())
}
