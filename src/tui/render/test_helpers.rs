use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use tempfile::TempDir;

use crate::io::Store;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An App over an empty store in a temp directory. Keep the TempDir alive
/// as long as the App; it owns the store path.
pub fn empty_app() -> (App, TempDir) {
    let tmp = TempDir::new().unwrap();
    let store = Store::at(tmp.path()).unwrap();
    (App::new(store), tmp)
}

/// An App pre-populated with one open task per title.
pub fn app_with_tasks(titles: &[&str]) -> (App, TempDir) {
    let (mut app, tmp) = empty_app();
    for title in titles {
        app.tasks.add(title);
    }
    (app, tmp)
}
