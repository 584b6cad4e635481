use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let width = area.width as usize;

    let line = match &app.mode {
        Mode::Normal => {
            // Key-help footer, preempted by a pending notice
            if let Some(notice) = &app.notice {
                Line::from(Span::styled(
                    format!(" {}", notice),
                    Style::default().fg(app.theme.warning),
                ))
            } else {
                Line::from(Span::styled(
                    " Enter toggle  n new  e edit  d delete  \u{2191}/\u{2193} move  q quit",
                    Style::default().fg(app.theme.dim),
                ))
            }
        }
        Mode::Inserting { buffer } => {
            prompt_line(app, "new task (max 30 chars): ", buffer, "Enter add  Esc cancel", width)
        }
        Mode::Editing { buffer, .. } => {
            prompt_line(app, "edit task: ", buffer, "Enter save  Esc cancel", width)
        }
        Mode::ConfirmingDelete => {
            let title = app.selected_title().unwrap_or_default();
            Line::from(vec![
                Span::styled(
                    format!(" delete \"{}\"?", title),
                    Style::default().fg(app.theme.warning),
                ),
                Span::styled(
                    "  y delete  n cancel".to_string(),
                    Style::default().fg(app.theme.dim),
                ),
            ])
        }
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Input prompt: label, live buffer, block cursor, right-aligned key hint
fn prompt_line(app: &App, label: &str, buffer: &str, hint: &str, width: usize) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!(" {}{}", label, buffer),
            Style::default().fg(app.theme.open),
        ),
        Span::styled(
            "\u{258C}".to_string(), // ▌ cursor
            Style::default().fg(app.theme.header),
        ),
    ];

    let content_width: usize = spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum();
    let hint_width = unicode::display_width(hint);
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(
            hint.to_string(),
            Style::default().fg(app.theme.dim),
        ));
    }

    Line::from(spans)
}
