//! Field rendering utilities for the contact form

use crate::state::FormField;
use crate::ui::palette::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by a field's inline error line
pub const ERROR_LINE_HEIGHT: u16 = 1;

/// Draw a form field, with its error (if any) on the row below `area`
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
    palette: &Palette,
) {
    let border_style = if error.is_some() {
        Style::default().fg(palette.error)
    } else if is_active {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.muted)
    };

    let value = field.as_text();
    let cursor = if is_active { "▌" } else { "" };
    let cursor_style = Style::default().fg(palette.accent);

    let content = if value.is_empty() && !is_active {
        Paragraph::new(Line::from(Span::styled(
            field.placeholder(),
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::ITALIC),
        )))
    } else if field.is_multiline() {
        let mut lines: Vec<Line> = value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(palette.text))))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled(cursor, cursor_style));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(value, Style::default().fg(palette.text)),
            Span::styled(cursor, cursor_style),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);

    if let Some(message) = error {
        let error_area = Rect {
            x: area.x,
            y: area.y.saturating_add(area.height),
            width: area.width,
            height: ERROR_LINE_HEIGHT,
        };
        if error_area.bottom() <= frame.area().bottom() {
            let line = Paragraph::new(Line::from(Span::styled(
                format!(" ! {message}"),
                Style::default().fg(palette.error),
            )));
            frame.render_widget(line, error_area);
        }
    }
}
