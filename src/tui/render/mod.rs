pub mod list_view;
pub mod status_row;
#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::app::App;

/// Main render function: header, task list, status row
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Layout: header (2 rows) | task list | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header + separator
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status row
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    list_view::render_list_view(frame, app, chunks[1]);
    status_row::render_status_row(frame, app, chunks[2]);
}

/// App name plus live completion stats
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let (done, total) = app.tasks.stats();
    let open = total - done;

    let line = Line::from(vec![
        Span::styled(
            " tick",
            Style::default()
                .fg(app.theme.header)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   {} done · {} open", done, open),
            Style::default().fg(app.theme.dim),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
