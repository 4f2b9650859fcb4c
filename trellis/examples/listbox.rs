//! Drive a listbox with scripted key presses and print its state.
//!
//! Logs go to `listbox.log`.

use std::fs::File;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use trellis::prelude::*;

struct Row {
    label: &'static str,
}

impl ElementHandle for Row {
    fn focus(&self) {
        println!("  focus -> {}", self.label);
    }

    fn click(&self) {
        println!("  click -> {}", self.label);
    }

    fn text_content(&self) -> String {
        self.label.to_string()
    }
}

fn print_state(manager: &CollectionManager) {
    for node in manager.nodes() {
        let marker = if node.is_active() { '>' } else { ' ' };
        let check = if node.is_selected() { "[x]" } else { "[ ]" };
        let note = if node.is_disabled() { " (disabled)" } else { "" };
        println!("{marker} {check} {}{note}", node.text_value());
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    WriteLogger::init(LevelFilter::Trace, Config::default(), File::create("listbox.log")?)?;

    let manager = CollectionManager::new();
    let rows = ["Apple", "Apricot", "Banana", "Blueberry", "Cherry"];
    for (i, label) in rows.into_iter().enumerate() {
        let row: ElementRef = Arc::new(Row { label });
        manager.register(row, RegisterArgs::new(format!("fruit-{i}")))?;
    }

    // Selection is owned here and fed back on every change.
    let handle = manager.clone();
    manager.update(
        ManagerConfig::new(SelectionMode::Multiple)
            .disabled_keys(["fruit-2"])
            .on_selection_change(move |keys| {
                println!("  selection -> {keys:?}");
                handle.update(
                    ManagerConfig::new(SelectionMode::Multiple)
                        .selected_keys(keys)
                        .disabled_keys(["fruit-2"]),
                );
            }),
    );

    let script = [
        KeyCode::Down,
        KeyCode::Down,
        KeyCode::Enter,
        KeyCode::Down,
        KeyCode::Char('c'),
        KeyCode::Enter,
        KeyCode::Char('a'),
        KeyCode::Char('p'),
        KeyCode::Char('r'),
    ];
    for code in script {
        println!("{code:?}");
        if handle_key(&manager, &KeyEvent::new(code, KeyModifiers::NONE)).is_handled()
            && code == KeyCode::Enter
            && let Some(key) = manager.active_key()
        {
            // Row elements only print; the widget turns the click into a select.
            manager.select_node(&key);
        }
    }

    tokio::time::sleep(Duration::from_millis(600)).await;
    println!("buffer after pause: {:?}", manager.search_buffer());
    print_state(&manager);
    Ok(())
}
