use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_normal(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Quit
        (KeyModifiers::NONE, KeyCode::Char('q')) => {
            app.should_quit = true;
        }

        // Move up
        (KeyModifiers::NONE, KeyCode::Up | KeyCode::Char('k')) => {
            app.cursor = app.cursor.saturating_sub(1);
        }

        // Move down
        (KeyModifiers::NONE, KeyCode::Down | KeyCode::Char('j')) => {
            if app.cursor + 1 < app.tasks.len() {
                app.cursor += 1;
            }
        }

        // Toggle completion of the selected task
        (KeyModifiers::NONE, KeyCode::Enter) => {
            if app.tasks.toggle_at(app.cursor) {
                app.persist();
            }
        }

        // New task
        (KeyModifiers::NONE, KeyCode::Char('n')) => {
            app.mode = Mode::Inserting {
                buffer: String::new(),
            };
        }

        // Edit the selected task's title
        (KeyModifiers::NONE, KeyCode::Char('e')) => {
            if let Some(task) = app.tasks.get(app.cursor) {
                app.mode = Mode::Editing {
                    buffer: task.title.clone(),
                    target: app.cursor,
                };
            }
        }

        // Delete the selected task (asks first)
        (KeyModifiers::NONE, KeyCode::Char('d')) => {
            if !app.tasks.is_empty() {
                app.mode = Mode::ConfirmingDelete;
            }
        }

        _ => {}
    }
}
