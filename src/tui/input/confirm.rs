use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm: y
        (KeyModifiers::NONE, KeyCode::Char('y')) => {
            app.mode = Mode::Normal;
            if app.tasks.remove_at(app.cursor).is_some() {
                app.clamp_cursor();
                app.persist();
            }
        }

        // Cancel: n or Esc
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.mode = Mode::Normal;
        }

        _ => {}
    }
}
