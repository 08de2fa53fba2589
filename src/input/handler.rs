use crate::app::AppState;
use crate::domain::{Filter, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTodo | UiMode::EditingTodo => handle_form_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation (with Shift modifier for reordering)
        KeyCode::Up => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.move_item_up();
            } else {
                app.move_selection_up();
            }
            Ok(false)
        }
        KeyCode::Down => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.move_item_down();
            } else {
                app.move_selection_down();
            }
            Ok(false)
        }
        KeyCode::Char('k') => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Char('j') => {
            app.move_selection_down();
            Ok(false)
        }

        // Drag: grab the selected record, drop it on another
        KeyCode::Char('g') => {
            app.drag_selected();
            Ok(false)
        }
        KeyCode::Char('v') => {
            app.drop_on_selected();
            Ok(false)
        }
        KeyCode::Esc => {
            app.cancel_drag();
            Ok(false)
        }

        // Complete / reopen
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_selected();
            Ok(false)
        }

        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.delete_selected();
            Ok(false)
        }

        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.toggle_add_form();
            Ok(false)
        }

        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.start_edit_selected();
            Ok(false)
        }

        // Filters
        KeyCode::Char('f') | KeyCode::Char('F') => {
            app.cycle_filter();
            Ok(false)
        }
        KeyCode::Char('1') => {
            app.set_filter(Filter::All);
            Ok(false)
        }
        KeyCode::Char('2') => {
            app.set_filter(Filter::Completed);
            Ok(false)
        }
        KeyCode::Char('3') => {
            app.set_filter(Filter::Pending);
            Ok(false)
        }

        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.toggle_theme();
            Ok(false)
        }

        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while the add/edit form is open
fn handle_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.submit_form();
            Ok(false)
        }
        KeyCode::Esc => {
            app.cancel_form();
            Ok(false)
        }
        KeyCode::Tab => {
            app.form_next_field();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.form_backspace();
            Ok(false)
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form_add_char(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}
