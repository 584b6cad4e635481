use std::mem;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

use super::common;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Commit the rename. An all-whitespace buffer leaves the task
        // unchanged; either way the target drops with the mode.
        (_, KeyCode::Enter) => {
            let Mode::Editing { buffer, target } = mem::replace(&mut app.mode, Mode::Normal)
            else {
                return;
            };
            if !buffer.trim().is_empty() && app.tasks.rename_at(target, &buffer) {
                app.persist();
            }
        }

        // Cancel
        (_, KeyCode::Esc) => {
            app.mode = Mode::Normal;
        }

        // Backspace
        (_, KeyCode::Backspace) => {
            if let Mode::Editing { buffer, .. } = &mut app.mode {
                common::buffer_backspace(buffer);
            }
        }

        // Type character
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            if let Mode::Editing { buffer, .. } = &mut app.mode {
                common::buffer_push(buffer, c);
            }
        }

        _ => {}
    }
}
