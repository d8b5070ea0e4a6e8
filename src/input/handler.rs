use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Editing => handle_editor_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }

        // Toggle completion
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.toggle_selected();
            Ok(false)
        }

        // Add task (open editor in create mode)
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.open_editor_create();
            Ok(false)
        }

        // Edit selected task (open editor pre-filled)
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.open_editor_edit();
            Ok(false)
        }

        // Delete selected task
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.delete_selected();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        KeyCode::Esc => Ok(false),

        _ => Ok(false),
    }
}

/// Handle keys in the editor modal
fn handle_editor_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Submit form
        KeyCode::Enter => {
            app.submit_editor();
            Ok(false)
        }

        // Cancel form
        KeyCode::Esc => {
            app.cancel_editor();
            Ok(false)
        }

        // Switch between fields
        KeyCode::Tab => {
            app.editor_next_field();
            Ok(false)
        }

        // Backspace
        KeyCode::Backspace => {
            app.editor_backspace();
            Ok(false)
        }

        // Add character
        KeyCode::Char(c) => {
            app.editor_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}
