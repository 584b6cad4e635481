use std::mem;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

use super::common;

pub(super) fn handle_insert(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Commit the new task. An all-whitespace title is discarded,
        // but the mode drops back to Normal either way.
        (_, KeyCode::Enter) => {
            let Mode::Inserting { buffer } = mem::replace(&mut app.mode, Mode::Normal) else {
                return;
            };
            if !buffer.trim().is_empty() {
                app.tasks.add(&buffer);
                app.persist();
            }
        }

        // Cancel
        (_, KeyCode::Esc) => {
            app.mode = Mode::Normal;
        }

        // Backspace
        (_, KeyCode::Backspace) => {
            if let Mode::Inserting { buffer } = &mut app.mode {
                common::buffer_backspace(buffer);
            }
        }

        // Type character
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            if let Mode::Inserting { buffer } = &mut app.mode {
                common::buffer_push(buffer, c);
            }
        }

        _ => {}
    }
}
