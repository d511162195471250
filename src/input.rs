use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::app::{App, InputMode};

/// Handle terminal events
/// Returns true if the app should quit
pub fn handle_events(app: &mut App) -> Result<bool> {
    // Poll for events with a timeout
    if event::poll(Duration::from_millis(100))?
        && let Event::Key(key) = event::read()?
    {
        // Only handle key press events (not release) - important for Windows
        if key.kind != KeyEventKind::Press {
            return Ok(app.should_quit());
        }

        // Handle Ctrl+C globally
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(true);
        }

        handle_key(app, key);
    }

    Ok(app.should_quit())
}

/// Dispatch a single key press to the current input mode.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match app.input_mode() {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Insert => handle_insert_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        // Quit
        KeyCode::Char('q') => {
            app.request_quit();
        }
        // Edit the focused field
        KeyCode::Char('i') => {
            app.enter_insert_mode();
            app.clear_status();
        }
        // Edit the focused field from its end
        KeyCode::Char('a') => {
            app.enter_insert_mode_at_end();
            app.clear_status();
        }
        // Next field
        KeyCode::Tab | KeyCode::Char('j') | KeyCode::Down => {
            app.focus_next();
        }
        // Previous field
        KeyCode::BackTab | KeyCode::Char('k') | KeyCode::Up => {
            app.focus_prev();
        }
        // First field
        KeyCode::Char('g') => {
            app.focus_first();
        }
        // Last field
        KeyCode::Char('G') => {
            app.focus_last();
        }
        // Submit the form
        KeyCode::Enter => {
            app.submit();
        }
        _ => {}
    }
}

fn handle_insert_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        // Back to normal mode
        KeyCode::Esc => {
            app.enter_normal_mode();
        }
        // Advance; the last field submits
        KeyCode::Enter => {
            if app.focus_is_last() {
                app.submit();
            } else {
                app.focus_next();
            }
        }
        // Next field
        KeyCode::Tab => {
            app.focus_next();
        }
        // Previous field
        KeyCode::BackTab => {
            app.focus_prev();
        }
        // Delete character
        KeyCode::Backspace => {
            app.delete_char();
        }
        // Delete character forward
        KeyCode::Delete => {
            app.delete_char_forward();
        }
        // Move cursor left
        KeyCode::Left => {
            app.move_cursor_left();
        }
        // Move cursor right
        KeyCode::Right => {
            app.move_cursor_right();
        }
        // Move to start
        KeyCode::Home => {
            app.reset_cursor();
        }
        // Move to end
        KeyCode::End => {
            app.move_cursor_end();
        }
        // Clear the field
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.clear_field();
        }
        // Insert character
        KeyCode::Char(c) => {
            app.enter_char(c);
        }
        _ => {}
    }
}
