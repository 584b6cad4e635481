use chrono::{DateTime, Local, Utc};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

/// Rows each task occupies: title row, stamp row, blank spacer
const ROWS_PER_TASK: usize = 3;

/// Render the scrolling task list
pub fn render_list_view(frame: &mut Frame, app: &App, area: Rect) {
    if app.tasks.is_empty() {
        let empty = Paragraph::new(" No tasks. Press n to add one.")
            .style(Style::default().fg(app.theme.dim));
        frame.render_widget(empty, area);
        return;
    }

    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    for (index, task) in app.tasks.tasks().iter().enumerate() {
        // Selection background spans the whole row pair, full width
        let row_style = if index == app.cursor {
            Style::default().bg(app.theme.selection_bg)
        } else {
            Style::default()
        };

        let glyph = if task.completed { "\u{2713}" } else { "\u{25CB}" }; // ✓ / ○
        let mut spans = vec![Span::styled(
            format!(" {} {}", glyph, task.title),
            row_style.fg(app.theme.task_color(task.completed)),
        )];
        pad_to_width(&mut spans, width, row_style);
        lines.push(Line::from(spans));

        let stamp = format!(
            "   created {} · updated {}",
            format_stamp(task.created_at),
            format_stamp(task.updated_at)
        );
        let mut spans = vec![Span::styled(stamp, row_style.fg(app.theme.stamp))];
        pad_to_width(&mut spans, width, row_style);
        lines.push(Line::from(spans));

        lines.push(Line::from(""));
    }

    // Scroll just far enough to keep the cursor's stamp row on screen
    let height = area.height as usize;
    let cursor_bottom = app.cursor * ROWS_PER_TASK + 1;
    let skip = (cursor_bottom + 1).saturating_sub(height);
    let visible: Vec<Line> = lines.into_iter().skip(skip).take(height).collect();

    frame.render_widget(Paragraph::new(visible), area);
}

/// Pad a row with styled spaces so a selection background reaches the
/// right edge. Width is measured in display cells, not chars.
fn pad_to_width(spans: &mut Vec<Span>, width: usize, style: Style) {
    let used: usize = spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum();
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), style));
    }
}

/// Minute-precision local time for the stamp rows
fn format_stamp(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}
