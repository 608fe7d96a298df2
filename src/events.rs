use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

use crate::app::App;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Some terminals report releases too; only act on presses
    if key.kind == KeyEventKind::Release {
        return;
    }

    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.quit(),
            KeyCode::Char('s') => {
                // Outcome is reported through the status bar
                let _ = app.export_csv();
            }
            KeyCode::Char('u') => app.clear_input(),
            _ => {}
        }
        return;
    }

    match key.code {
        // Add the typed value
        KeyCode::Enter => {
            // Rejected input is shown inline by the input box
            let _ = app.submit_input();
        }

        // Editing
        KeyCode::Backspace => app.input_pop(),
        KeyCode::Char(c) => app.input_push(c),

        // Esc clears the field first, then quits
        KeyCode::Esc => {
            if app.input.is_empty() {
                app.quit();
            } else {
                app.clear_input();
            }
        }

        // History navigation
        KeyCode::Up => app.select_prev(),
        KeyCode::Down => app.select_next(),
        KeyCode::PageUp => app.select_prev_n(10),
        KeyCode::PageDown => app.select_next_n(10),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),

        // Help
        KeyCode::F(1) => app.toggle_help(),

        _ => {}
    }
}

/// Handle mouse events
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.select_prev(),
        MouseEventKind::ScrollDown => app.select_next(),
        _ => {}
    }
}
