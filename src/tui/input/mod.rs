mod common;
mod confirm;
mod edit;
mod insert;
mod normal;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    // A notice lives until the next key press
    app.notice = None;

    match &app.mode {
        Mode::Normal => normal::handle_normal(app, key),
        Mode::Inserting { .. } => insert::handle_insert(app, key),
        Mode::Editing { .. } => edit::handle_edit(app, key),
        Mode::ConfirmingDelete => confirm::handle_confirm(app, key),
    }
}
